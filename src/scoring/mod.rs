//! Multi-axis daily scoring.
//!
//! A recorded day is judged on three fronts: food quality against the
//! daily target, exercise volume against lifestyle thresholds, and the
//! subjective condition check-in.

pub mod activity;
pub mod constants;
pub mod food;

pub use activity::{ConditionScore, ExerciseScore, score_condition, score_exercise};
pub use food::{FoodScore, IntakeTotals, accumulate_intake, score_food};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::{DailyTarget, DayRecord, Lifestyle};

/// The three per-day reports side by side.
#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub food: FoodScore,
    pub exercise: ExerciseScore,
    pub condition: ConditionScore,
}

/// Score one recorded day against its daily target.
pub fn score_day(
    catalog: &Catalog,
    record: &DayRecord,
    target: &DailyTarget,
    lifestyle: Lifestyle,
) -> Result<ScoreResult> {
    Ok(ScoreResult {
        food: score_food(catalog, record, target)?,
        exercise: score_exercise(record, lifestyle),
        condition: score_condition(record.condition.as_ref()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_day_hits_the_floor() {
        let catalog = Catalog::builtin();
        let record: DayRecord = serde_json::from_str("{}").unwrap();
        let target = DailyTarget {
            calories: 2332.0,
            protein_g: 60.0,
            fat_g: 65.0,
            carb_g: 377.0,
        };

        let result = score_day(&catalog, &record, &target, Lifestyle::General).unwrap();
        // Calorie and macro axes bottom out; the quality axes fall back to
        // their neutral defaults, which still leave a small weighted floor.
        assert_eq!(result.food.total, 10);
        assert_eq!(result.food.calorie, 0);
        assert_eq!(result.food.diaas, 20);
        assert_eq!(result.food.fatty_acid, 50);
        assert_eq!(result.food.gl, 50);
        assert_eq!(result.food.fiber, 12);
        assert_eq!(result.food.vitamin, 30);
        assert_eq!(result.food.mineral, 42);
        assert_eq!(result.exercise.total, 0);
        assert_eq!(result.condition.total, 0);
    }
}
