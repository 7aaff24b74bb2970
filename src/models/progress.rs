use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::cosmic::{ContentType, CosmicObject, ImageAsset, NewObject};

pub type ProgressEntry = CosmicObject<ProgressMetadata>;

pub const DEFAULT_ENERGY_LEVEL: u8 = 3;

/// Self-reported energy on a 1 (very low) to 5 (very high) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct EnergyLevel(u8);

impl EnergyLevel {
    pub fn new(level: u8) -> Option<Self> {
        (1..=5).contains(&level).then_some(Self(level))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for EnergyLevel {
    fn default() -> Self {
        Self(DEFAULT_ENERGY_LEVEL)
    }
}

impl TryFrom<u8> for EnergyLevel {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level).ok_or_else(|| format!("energy level must be between 1 and 5, got {}", level))
    }
}

impl From<EnergyLevel> for u8 {
    fn from(level: EnergyLevel) -> Self {
        level.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Excellent,
    Good,
    #[default]
    Okay,
    Tired,
    Stressed,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Excellent => "excellent",
            Mood::Good => "good",
            Mood::Okay => "okay",
            Mood::Tired => "tired",
            Mood::Stressed => "stressed",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "excellent" => Ok(Mood::Excellent),
            "good" => Ok(Mood::Good),
            "okay" => Ok(Mood::Okay),
            "tired" => Ok(Mood::Tired),
            "stressed" => Ok(Mood::Stressed),
            other => Err(format!("unknown mood: {}", other)),
        }
    }
}

/// Body measurements in inches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hips: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chest: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thighs: Option<f64>,
}

impl Measurements {
    pub fn is_empty(&self) -> bool {
        self.waist.is_none()
            && self.hips.is_none()
            && self.chest.is_none()
            && self.arms.is_none()
            && self.thighs.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressMetadata {
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurements: Option<Measurements>,
    #[serde(default)]
    pub completed_workouts: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_level: Option<EnergyLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<ImageAsset>>,
}

/// A progress entry that has not been written to Cosmic yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProgressEntry {
    pub date: NaiveDate,
    pub weight: Option<f64>,
    pub measurements: Option<Measurements>,
    pub completed_workouts: Vec<String>,
    pub notes: Option<String>,
    pub energy_level: Option<EnergyLevel>,
    pub mood: Option<Mood>,
}

impl NewProgressEntry {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            weight: None,
            measurements: None,
            completed_workouts: Vec::new(),
            notes: None,
            energy_level: None,
            mood: None,
        }
    }

    pub fn title(&self) -> String {
        format!("Progress - {}", self.date.format("%Y-%m-%d"))
    }

    /// Build the stored metadata. Energy and mood fall back to their defaults,
    /// everything else is written only when present.
    pub fn into_metadata(self) -> ProgressMetadata {
        ProgressMetadata {
            date: self.date,
            weight: self.weight,
            measurements: self.measurements.filter(|m| !m.is_empty()),
            completed_workouts: self.completed_workouts,
            notes: self.notes.filter(|n| !n.trim().is_empty()),
            energy_level: Some(self.energy_level.unwrap_or_default()),
            mood: Some(self.mood.unwrap_or_default()),
            photos: None,
        }
    }

    pub fn into_new_object(self) -> NewObject<ProgressMetadata> {
        NewObject {
            object_type: ContentType::Progress,
            title: self.title(),
            metadata: self.into_metadata(),
        }
    }
}

/// Newest first by entry date.
pub fn sort_newest_first(entries: &mut [ProgressEntry]) {
    entries.sort_by(|a, b| b.metadata.date.cmp(&a.metadata.date));
}
