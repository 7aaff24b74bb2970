use serde::{Deserialize, Serialize};

use super::cosmic::{CosmicObject, ImageAsset};
use super::workout::{DifficultyLevel, Workout};

pub type Program = CosmicObject<ProgramMetadata>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgramGoal {
    FatLoss,
    Toning,
    Strength,
    Flexibility,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledWorkout {
    pub day: String,
    pub workout: Workout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramWeek {
    pub week: u32,
    #[serde(default)]
    pub workouts: Vec<ScheduledWorkout>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramMetadata {
    pub goal: ProgramGoal,
    pub duration_weeks: u32,
    pub difficulty_level: DifficultyLevel,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub schedule: Vec<ProgramWeek>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_workouts: Option<Vec<Workout>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_image: Option<ImageAsset>,
}

impl ProgramMetadata {
    /// Number of scheduled sessions across all weeks.
    pub fn total_sessions(&self) -> usize {
        self.schedule.iter().map(|week| week.workouts.len()).sum()
    }
}
