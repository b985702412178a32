use serde::{Deserialize, Serialize};

use crate::models::plan::Unit;

/// One food entry as actually eaten.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedItem {
    pub food_id: String,
    pub amount: f64,
    pub unit: Unit,
}

/// One recorded meal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedMeal {
    pub items: Vec<RecordedItem>,
}

/// One recorded workout session. Duration is tracked per set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutLog {
    pub name: String,
    pub set_durations_min: Vec<u32>,
}

impl WorkoutLog {
    pub fn total_minutes(&self) -> u32 {
        self.set_durations_min.iter().sum()
    }
}

/// Six self-reported condition values, each 1 (worst) to 5 (best).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionLog {
    pub sleep_hours: u8,
    pub sleep_quality: u8,
    pub appetite: u8,
    pub digestion: u8,
    pub focus: u8,
    pub stress: u8,
}

impl ConditionLog {
    pub fn sum(&self) -> u32 {
        u32::from(self.sleep_hours)
            + u32::from(self.sleep_quality)
            + u32::from(self.appetite)
            + u32::from(self.digestion)
            + u32::from(self.focus)
            + u32::from(self.stress)
    }
}

/// A full day of recorded intake and activity, as supplied by storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    #[serde(default)]
    pub meals: Vec<RecordedMeal>,

    #[serde(default)]
    pub workouts: Vec<WorkoutLog>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<ConditionLog>,

    /// Explicitly planned rest day; scores full marks on the exercise axes.
    #[serde(default)]
    pub rest_day: bool,
}
