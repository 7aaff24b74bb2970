use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::workout::{DifficultyLevel, Workout, WorkoutType};

/// Duration buckets offered when browsing workouts, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationRange {
    #[serde(rename = "0-15")]
    UpTo15,
    #[serde(rename = "15-30")]
    From15To30,
    #[serde(rename = "30-45")]
    From30To45,
    #[serde(rename = "45+")]
    Over45,
}

impl DurationRange {
    pub fn contains(&self, minutes: u32) -> bool {
        match self {
            DurationRange::UpTo15 => minutes < 15,
            DurationRange::From15To30 => (15..30).contains(&minutes),
            DurationRange::From30To45 => (30..45).contains(&minutes),
            DurationRange::Over45 => minutes >= 45,
        }
    }
}

impl FromStr for DurationRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0-15" => Ok(DurationRange::UpTo15),
            "15-30" => Ok(DurationRange::From15To30),
            "30-45" => Ok(DurationRange::From30To45),
            "45+" => Ok(DurationRange::Over45),
            other => Err(format!("unknown duration range: {}", other)),
        }
    }
}

/// Filter criteria for browsing workouts. `None` means any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutFilter {
    pub workout_type: Option<WorkoutType>,
    pub difficulty: Option<DifficultyLevel>,
    pub duration: Option<DurationRange>,
}

impl WorkoutFilter {
    /// Build a filter from query-string values. Blank values and `all` impose no constraint.
    pub fn from_params(
        workout_type: Option<&str>,
        difficulty: Option<&str>,
        duration: Option<&str>,
    ) -> Result<Self, String> {
        Ok(Self {
            workout_type: parse_choice(workout_type)?,
            difficulty: parse_choice(difficulty)?,
            duration: parse_choice(duration)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.workout_type.is_none() && self.difficulty.is_none() && self.duration.is_none()
    }

    pub fn matches(&self, workout: &Workout) -> bool {
        if let Some(workout_type) = self.workout_type {
            if workout.metadata.workout_type != workout_type {
                return false;
            }
        }

        if let Some(difficulty) = self.difficulty {
            if workout.metadata.difficulty_level != difficulty {
                return false;
            }
        }

        if let Some(duration) = self.duration {
            if !duration.contains(workout.metadata.duration) {
                return false;
            }
        }

        true
    }

    pub fn apply(&self, workouts: Vec<Workout>) -> Vec<Workout> {
        workouts.into_iter().filter(|w| self.matches(w)).collect()
    }
}

fn parse_choice<T: FromStr<Err = String>>(raw: Option<&str>) -> Result<Option<T>, String> {
    match raw.map(str::trim) {
        None | Some("") | Some("all") => Ok(None),
        Some(value) => value.parse().map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn workout(workout_type: &str, difficulty: &str, duration: u32) -> Workout {
        serde_json::from_value(json!({
            "id": format!("{}-{}", workout_type, duration),
            "slug": format!("{}-{}", workout_type, duration),
            "title": "Workout",
            "metadata": {
                "workout_type": workout_type,
                "duration": duration,
                "difficulty_level": difficulty,
                "body_part_focus": [],
                "description": ""
            },
            "created_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_duration_bucket_bounds() {
        assert!(DurationRange::UpTo15.contains(14));
        assert!(!DurationRange::UpTo15.contains(15));
        assert!(DurationRange::From15To30.contains(15));
        assert!(DurationRange::From30To45.contains(44));
        assert!(DurationRange::Over45.contains(45));
    }

    #[test]
    fn test_filter_from_params() {
        let filter = WorkoutFilter::from_params(Some("all"), Some(""), None).unwrap();
        assert!(filter.is_empty());

        let filter = WorkoutFilter::from_params(Some("yoga"), Some("beginner"), Some("15-30")).unwrap();
        assert_eq!(filter.workout_type, Some(WorkoutType::Yoga));
        assert_eq!(filter.duration, Some(DurationRange::From15To30));

        assert!(WorkoutFilter::from_params(Some("zumba"), None, None).is_err());
    }

    #[test]
    fn test_apply() {
        let workouts = vec![
            workout("yoga", "beginner", 20),
            workout("yoga", "advanced", 20),
            workout("cardio", "beginner", 50),
        ];

        let filter = WorkoutFilter {
            workout_type: Some(WorkoutType::Yoga),
            difficulty: Some(DifficultyLevel::Beginner),
            duration: None,
        };
        let matched = filter.apply(workouts.clone());
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].metadata.difficulty_level, DifficultyLevel::Beginner);

        let long = WorkoutFilter {
            duration: Some(DurationRange::Over45),
            ..Default::default()
        };
        assert_eq!(long.apply(workouts).len(), 1);
    }
}
