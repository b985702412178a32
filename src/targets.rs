//! Daily calorie and macro targets derived from a profile.
//!
//! Energy follows Katch-McArdle on lean body mass; macros come from a
//! goal-dependent protein coefficient and a diet-style fat ratio, with
//! carbohydrates taking whatever calories remain.

use crate::error::{CoachError, Result};
use crate::models::{DailyTarget, DietStyle, Goal, Lifestyle, Profile};

/// Calories added (bulk) or removed (cut) on top of maintenance.
pub const GOAL_CALORIE_ADJUSTMENT: f64 = 300.0;

/// Katch-McArdle intercept.
const BMR_BASE: f64 = 370.0;

/// Katch-McArdle slope per kg of lean mass.
const BMR_PER_KG_LEAN: f64 = 21.6;

/// Multiplier used when the activity level is out of range.
const ACTIVITY_MULT_FALLBACK: f64 = 1.4;

/// Explicit overrides for the computed targets.
#[derive(Debug, Clone, Copy, Default)]
pub struct TargetOverrides {
    /// Replaces the goal-based calorie adjustment when set.
    pub calorie_adjustment: Option<f64>,

    /// Replaces the coefficient-based macro split when set.
    pub pfc_percent: Option<PfcSplit>,
}

/// Manual protein/fat/carb split in percent of total calories.
#[derive(Debug, Clone, Copy)]
pub struct PfcSplit {
    pub protein_pct: f64,
    pub fat_pct: f64,
    pub carb_pct: f64,
}

impl PfcSplit {
    fn sum(&self) -> f64 {
        self.protein_pct + self.fat_pct + self.carb_pct
    }
}

/// TDEE multiplier for an activity level (1 = sedentary, 5 = very hard).
pub fn activity_multiplier(level: u8) -> f64 {
    match level {
        1 => 1.05,
        2 => 1.225,
        3 => 1.4,
        4 => 1.575,
        5 => 1.75,
        _ => ACTIVITY_MULT_FALLBACK,
    }
}

/// Basal metabolic rate from lean body mass (Katch-McArdle).
pub fn bmr(lean_mass_kg: f64) -> f64 {
    BMR_BASE + BMR_PER_KG_LEAN * lean_mass_kg
}

/// Total daily energy expenditure for a profile.
pub fn tdee(profile: &Profile) -> f64 {
    let mult = profile
        .custom_activity_multiplier
        .unwrap_or_else(|| activity_multiplier(profile.activity_level));
    bmr(profile.lean_mass()) * mult
}

/// Protein grams per kg of lean mass; bodymakers train at double dose.
fn protein_coefficient(goal: Goal, lifestyle: Lifestyle) -> f64 {
    let base = match goal {
        Goal::Maintain => 1.0,
        Goal::Cut => 1.2,
        Goal::Bulk => 1.4,
    };
    match lifestyle {
        Lifestyle::General => base,
        Lifestyle::Bodymaker => base * 2.0,
    }
}

/// Share of total calories allotted to fat.
fn fat_ratio(style: DietStyle) -> f64 {
    match style {
        DietStyle::Balanced => 0.25,
        DietStyle::LowFat => 0.15,
        DietStyle::LowCarb => 0.35,
        DietStyle::Ketogenic => 0.60,
    }
}

/// Compute the daily calorie and macro targets for a profile.
///
/// All four outputs are rounded to whole values independently, so the
/// calorie field and 4P + 9F + 4C can disagree by a few kcal.
pub fn calculate_daily_target(
    profile: &Profile,
    overrides: &TargetOverrides,
) -> Result<DailyTarget> {
    let lean = profile.lean_mass();
    if lean <= 0.0 {
        return Err(CoachError::InvalidProfile(format!(
            "non-positive lean body mass ({:.1} kg)",
            lean
        )));
    }

    let adjustment = overrides.calorie_adjustment.unwrap_or(match profile.goal {
        Goal::Maintain => 0.0,
        Goal::Cut => -GOAL_CALORIE_ADJUSTMENT,
        Goal::Bulk => GOAL_CALORIE_ADJUSTMENT,
    });
    let calories = tdee(profile) + adjustment;
    if calories <= 0.0 {
        return Err(CoachError::InvalidProfile(format!(
            "calorie target is not positive ({:.0} kcal)",
            calories
        )));
    }

    let (protein, fat, carbs) = match overrides.pfc_percent {
        Some(split) => {
            if (split.sum() - 100.0).abs() > 1e-6 {
                return Err(CoachError::InvalidInput(format!(
                    "PFC percentages must sum to 100, got {:.1}",
                    split.sum()
                )));
            }
            (
                calories * split.protein_pct / 100.0 / 4.0,
                calories * split.fat_pct / 100.0 / 9.0,
                calories * split.carb_pct / 100.0 / 4.0,
            )
        }
        None => {
            let protein = lean * protein_coefficient(profile.goal, profile.lifestyle);
            let fat = calories * fat_ratio(profile.diet_style) / 9.0;
            let carbs = (calories - 4.0 * protein - 9.0 * fat) / 4.0;
            (protein, fat, carbs)
        }
    };

    if carbs < 0.0 {
        return Err(CoachError::InvalidProfile(format!(
            "macro split leaves negative carbohydrates ({:.0} g)",
            carbs
        )));
    }

    Ok(DailyTarget {
        calories: calories.round(),
        protein_g: protein.round(),
        fat_g: fat.round(),
        carb_g: carbs.round(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BloodType, Gender};

    fn sample_profile() -> Profile {
        Profile {
            weight_kg: 75.0,
            body_fat_pct: 20.0,
            age: 30,
            gender: Gender::Male,
            goal: Goal::Maintain,
            diet_style: DietStyle::Balanced,
            activity_level: 3,
            custom_activity_multiplier: None,
            lifestyle: Lifestyle::General,
            blood_type: BloodType::A,
            cost_tier: 1,
            meals_per_day: 5,
        }
    }

    #[test]
    fn test_bmr_katch_mcardle() {
        assert!((bmr(60.0) - 1666.0).abs() < 1e-9);
    }

    #[test]
    fn test_activity_multiplier_table() {
        assert!((activity_multiplier(1) - 1.05).abs() < 1e-9);
        assert!((activity_multiplier(2) - 1.225).abs() < 1e-9);
        assert!((activity_multiplier(3) - 1.4).abs() < 1e-9);
        assert!((activity_multiplier(4) - 1.575).abs() < 1e-9);
        assert!((activity_multiplier(5) - 1.75).abs() < 1e-9);
        // Out-of-range levels fall back to moderate.
        assert!((activity_multiplier(0) - 1.4).abs() < 1e-9);
        assert!((activity_multiplier(9) - 1.4).abs() < 1e-9);
    }

    #[test]
    fn test_maintenance_targets() {
        // Lean mass 60 kg: BMR 1666, TDEE 2332.4.
        let target =
            calculate_daily_target(&sample_profile(), &TargetOverrides::default()).unwrap();
        assert_eq!(target.calories, 2332.0);
        assert_eq!(target.protein_g, 60.0);
        assert_eq!(target.fat_g, 65.0);
        assert_eq!(target.carb_g, 377.0);
    }

    #[test]
    fn test_goal_adjustments() {
        let mut profile = sample_profile();

        profile.goal = Goal::Cut;
        let cut = calculate_daily_target(&profile, &TargetOverrides::default()).unwrap();
        assert_eq!(cut.calories, 2032.0);
        assert_eq!(cut.protein_g, 72.0, "cut raises the protein coefficient");

        profile.goal = Goal::Bulk;
        let bulk = calculate_daily_target(&profile, &TargetOverrides::default()).unwrap();
        assert_eq!(bulk.calories, 2632.0);
        assert_eq!(bulk.protein_g, 84.0);
    }

    #[test]
    fn test_bodymaker_doubles_protein() {
        let mut profile = sample_profile();
        profile.lifestyle = Lifestyle::Bodymaker;
        let target = calculate_daily_target(&profile, &TargetOverrides::default()).unwrap();
        assert_eq!(target.protein_g, 120.0);
    }

    #[test]
    fn test_custom_activity_multiplier_overrides_table() {
        let mut profile = sample_profile();
        profile.custom_activity_multiplier = Some(2.0);
        let target = calculate_daily_target(&profile, &TargetOverrides::default()).unwrap();
        assert_eq!(target.calories, 3332.0);
    }

    #[test]
    fn test_pfc_override() {
        let overrides = TargetOverrides {
            calorie_adjustment: None,
            pfc_percent: Some(PfcSplit {
                protein_pct: 30.0,
                fat_pct: 20.0,
                carb_pct: 50.0,
            }),
        };
        let target = calculate_daily_target(&sample_profile(), &overrides).unwrap();
        assert_eq!(target.calories, 2332.0);
        assert_eq!(target.protein_g, 175.0);
        assert_eq!(target.fat_g, 52.0);
        assert_eq!(target.carb_g, 292.0);
    }

    #[test]
    fn test_pfc_override_must_sum_to_100() {
        let overrides = TargetOverrides {
            calorie_adjustment: None,
            pfc_percent: Some(PfcSplit {
                protein_pct: 30.0,
                fat_pct: 30.0,
                carb_pct: 50.0,
            }),
        };
        let err = calculate_daily_target(&sample_profile(), &overrides).unwrap_err();
        assert!(matches!(err, CoachError::InvalidInput(_)));
    }

    #[test]
    fn test_degenerate_profiles_rejected() {
        let mut profile = sample_profile();
        profile.body_fat_pct = 100.0;
        let err = calculate_daily_target(&profile, &TargetOverrides::default()).unwrap_err();
        assert!(matches!(err, CoachError::InvalidProfile(_)));

        let overrides = TargetOverrides {
            calorie_adjustment: Some(-5000.0),
            pfc_percent: None,
        };
        let err = calculate_daily_target(&sample_profile(), &overrides).unwrap_err();
        assert!(matches!(err, CoachError::InvalidProfile(_)));
    }

    #[test]
    fn test_negative_carbs_rejected() {
        // Ketogenic fat plus doubled cut protein cannot fit in a slashed budget.
        let mut profile = sample_profile();
        profile.goal = Goal::Cut;
        profile.diet_style = DietStyle::Ketogenic;
        profile.lifestyle = Lifestyle::Bodymaker;
        let overrides = TargetOverrides {
            calorie_adjustment: Some(-1500.0),
            pfc_percent: None,
        };
        let err = calculate_daily_target(&profile, &overrides).unwrap_err();
        assert!(matches!(err, CoachError::InvalidProfile(_)));
    }
}
