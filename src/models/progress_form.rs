use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use super::progress::{EnergyLevel, Measurements, Mood, NewProgressEntry};

#[derive(Error, Debug, PartialEq)]
pub enum ProgressFormError {
    #[error("Date is required")]
    MissingDate,

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid number for {field}: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Energy level must be between 1 and 5, got {0}")]
    InvalidEnergyLevel(u8),

    #[error("Unknown mood '{0}'")]
    InvalidMood(String),
}

/// Raw progress form input. Numeric fields may arrive as strings (possibly
/// blank), as JSON numbers, or as null.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProgressForm {
    pub date: String,
    #[serde(deserialize_with = "text_or_number")]
    pub weight: String,
    #[serde(deserialize_with = "text_or_number")]
    pub waist: String,
    #[serde(deserialize_with = "text_or_number")]
    pub hips: String,
    #[serde(deserialize_with = "text_or_number")]
    pub chest: String,
    #[serde(deserialize_with = "text_or_number")]
    pub arms: String,
    #[serde(deserialize_with = "text_or_number")]
    pub thighs: String,
    pub completed_workouts: Vec<String>,
    pub notes: String,
    pub energy_level: Option<u8>,
    pub mood: Option<String>,
}

impl ProgressForm {
    /// Turn the form into an entry, keeping only the fields that were filled in.
    pub fn into_new_entry(self) -> Result<NewProgressEntry, ProgressFormError> {
        let date = self.date.trim();
        if date.is_empty() {
            return Err(ProgressFormError::MissingDate);
        }
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| ProgressFormError::InvalidDate(date.to_string()))?;

        let measurements = Measurements {
            waist: parse_optional("waist", &self.waist)?,
            hips: parse_optional("hips", &self.hips)?,
            chest: parse_optional("chest", &self.chest)?,
            arms: parse_optional("arms", &self.arms)?,
            thighs: parse_optional("thighs", &self.thighs)?,
        };

        let energy_level = self
            .energy_level
            .map(|level| EnergyLevel::new(level).ok_or(ProgressFormError::InvalidEnergyLevel(level)))
            .transpose()?;

        let mood = match self.mood.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<Mood>()
                    .map_err(|_| ProgressFormError::InvalidMood(raw.to_string()))?,
            ),
        };

        let notes = self.notes.trim();

        Ok(NewProgressEntry {
            date,
            weight: parse_optional("weight", &self.weight)?,
            measurements: (!measurements.is_empty()).then_some(measurements),
            completed_workouts: self.completed_workouts,
            notes: (!notes.is_empty()).then(|| notes.to_string()),
            energy_level,
            mood,
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(f64),
}

fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        Some(TextOrNumber::Text(text)) => text,
        Some(TextOrNumber::Number(number)) => number.to_string(),
        None => String::new(),
    })
}

fn parse_optional(field: &'static str, raw: &str) -> Result<Option<f64>, ProgressFormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(Some)
        .ok_or_else(|| ProgressFormError::InvalidNumber {
            field,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_blank_fields_become_absent() {
        let form = ProgressForm {
            date: "2024-04-01".to_string(),
            mood: Some("tired".to_string()),
            ..Default::default()
        };

        let entry = form.into_new_entry().unwrap();
        assert_eq!(entry.mood, Some(Mood::Tired));
        assert!(entry.weight.is_none());
        assert!(entry.measurements.is_none());
        assert!(entry.notes.is_none());
        assert!(entry.energy_level.is_none());
    }

    #[test]
    fn test_numeric_fields_are_parsed() {
        let form = ProgressForm {
            date: "2024-04-01".to_string(),
            weight: "135.5".to_string(),
            waist: " 28.5 ".to_string(),
            energy_level: Some(4),
            notes: "Felt strong".to_string(),
            ..Default::default()
        };

        let entry = form.into_new_entry().unwrap();
        assert_eq!(entry.weight, Some(135.5));
        let measurements = entry.measurements.unwrap();
        assert_eq!(measurements.waist, Some(28.5));
        assert!(measurements.hips.is_none());
        assert_eq!(entry.energy_level.map(EnergyLevel::value), Some(4));
        assert_eq!(entry.notes.as_deref(), Some("Felt strong"));
    }

    #[test]
    fn test_numeric_json_values_are_accepted() {
        let form: ProgressForm = serde_json::from_value(serde_json::json!({
            "date": "2024-04-01",
            "weight": 135.5,
            "waist": 28,
            "hips": null,
            "chest": "34"
        }))
        .unwrap();

        let entry = form.into_new_entry().unwrap();
        assert_eq!(entry.weight, Some(135.5));
        let measurements = entry.measurements.unwrap();
        assert_eq!(measurements.waist, Some(28.0));
        assert_eq!(measurements.chest, Some(34.0));
        assert!(measurements.hips.is_none());
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        let missing = ProgressForm::default().into_new_entry();
        assert_matches!(missing, Err(ProgressFormError::MissingDate));

        let bad_date = ProgressForm {
            date: "04/01/2024".to_string(),
            ..Default::default()
        };
        assert_matches!(bad_date.into_new_entry(), Err(ProgressFormError::InvalidDate(_)));

        let bad_weight = ProgressForm {
            date: "2024-04-01".to_string(),
            weight: "heavy".to_string(),
            ..Default::default()
        };
        assert_matches!(
            bad_weight.into_new_entry(),
            Err(ProgressFormError::InvalidNumber { field: "weight", .. })
        );

        let bad_energy = ProgressForm {
            date: "2024-04-01".to_string(),
            energy_level: Some(7),
            ..Default::default()
        };
        assert_matches!(bad_energy.into_new_entry(), Err(ProgressFormError::InvalidEnergyLevel(7)));

        let bad_mood = ProgressForm {
            date: "2024-04-01".to_string(),
            mood: Some("grumpy".to_string()),
            ..Default::default()
        };
        assert_matches!(bad_mood.into_new_entry(), Err(ProgressFormError::InvalidMood(_)));
    }
}
