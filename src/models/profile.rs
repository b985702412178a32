use serde::{Deserialize, Serialize};

/// Body-composition goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Maintain,
    Cut,
    Bulk,
}

/// Diet style, which fixes the fat share of the calorie target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietStyle {
    Balanced,
    LowFat,
    LowCarb,
    Ketogenic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

/// Lifestyle tier. Bodymaker doubles the protein coefficient and uses
/// stricter exercise scoring thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifestyle {
    General,
    Bodymaker,
}

/// Metabolic tag carried on the profile. Stored and displayed only; no
/// formula in this crate reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BloodType {
    A,
    B,
    O,
    Ab,
}

/// User physiological profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Body weight in kilograms.
    pub weight_kg: f64,

    /// Body fat percentage (0-100).
    pub body_fat_pct: f64,

    /// Age in years.
    pub age: u32,

    pub gender: Gender,

    pub goal: Goal,

    pub diet_style: DietStyle,

    /// Activity level from 1 (desk work) to 5 (very heavy labor).
    pub activity_level: u8,

    /// Overrides the activity-level multiplier table when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_activity_multiplier: Option<f64>,

    pub lifestyle: Lifestyle,

    pub blood_type: BloodType,

    /// Food budget tier: 1 = minimalist, 2 = athlete.
    pub cost_tier: u8,

    /// Number of meal slots per day.
    pub meals_per_day: u32,
}

impl Profile {
    /// Lean body mass in kilograms: weight minus fat mass.
    pub fn lean_mass(&self) -> f64 {
        self.weight_kg * (1.0 - self.body_fat_pct / 100.0)
    }
}

/// Daily calorie and macro targets.
///
/// All four values are whole numbers (rounded at construction). They satisfy
/// calories = 4*protein + 9*fat + 4*carbs up to the rounding slack of the
/// four independent roundings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTarget {
    pub calories: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carb_g: f64,
}

impl DailyTarget {
    /// Calories implied by the macro grams alone.
    pub fn macro_calories(&self) -> f64 {
        self.protein_g * 4.0 + self.fat_g * 9.0 + self.carb_g * 4.0
    }
}

/// Running macro totals.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Macros {
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl Macros {
    pub fn calories(&self) -> f64 {
        self.protein * 4.0 + self.fat * 9.0 + self.carbs * 4.0
    }

    pub fn add(&mut self, other: Macros) {
        self.protein += other.protein;
        self.fat += other.fat;
        self.carbs += other.carbs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> Profile {
        Profile {
            weight_kg: 70.0,
            body_fat_pct: 15.0,
            age: 30,
            gender: Gender::Male,
            goal: Goal::Maintain,
            diet_style: DietStyle::Balanced,
            activity_level: 3,
            custom_activity_multiplier: None,
            lifestyle: Lifestyle::General,
            blood_type: BloodType::A,
            cost_tier: 2,
            meals_per_day: 4,
        }
    }

    #[test]
    fn test_lean_mass() {
        let profile = sample_profile();
        assert!((profile.lean_mass() - 59.5).abs() < 1e-9);
    }

    #[test]
    fn test_profile_roundtrip() {
        let profile = sample_profile();
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"weightKg\":70.0"));
        assert!(json.contains("\"goal\":\"maintain\""));

        let back: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(back.goal, Goal::Maintain);
        assert_eq!(back.meals_per_day, 4);
    }

    #[test]
    fn test_macros_accumulate() {
        let mut total = Macros::default();
        total.add(Macros {
            protein: 30.0,
            fat: 10.0,
            carbs: 50.0,
        });
        total.add(Macros {
            protein: 20.0,
            fat: 5.0,
            carbs: 25.0,
        });
        assert!((total.protein - 50.0).abs() < 1e-9);
        assert!((total.calories() - 635.0).abs() < 1e-9);
    }
}
