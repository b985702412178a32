use assert_float_eq::*;

use physique_planner_rs::models::{
    BloodType, DietStyle, Gender, Goal, Lifestyle, Profile,
};
use physique_planner_rs::targets::{calculate_daily_target, PfcSplit, TargetOverrides};

fn base_profile() -> Profile {
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
fn test_reference_profile_targets() {
    let target = calculate_daily_target(&base_profile(), &TargetOverrides::default()).unwrap();

    // 60 kg lean mass, multiplier 1.4: BMR 1666, TDEE 2332.4.
    assert_float_absolute_eq!(target.calories, 2332.0);
    assert_float_absolute_eq!(target.protein_g, 60.0);
    assert_float_absolute_eq!(target.fat_g, 65.0);
    assert_float_absolute_eq!(target.carb_g, 377.0);
}

#[test]
fn test_macro_calories_match_target_calories() {
    // Carbs absorb whatever calories protein and fat leave, so the macro
    // grams must re-derive the calorie target up to four roundings.
    let goals = [Goal::Maintain, Goal::Cut, Goal::Bulk];
    let styles = [
        DietStyle::Balanced,
        DietStyle::LowFat,
        DietStyle::LowCarb,
        DietStyle::Ketogenic,
    ];
    let lifestyles = [Lifestyle::General, Lifestyle::Bodymaker];

    for goal in goals {
        for style in styles {
            for lifestyle in lifestyles {
                for level in 1..=5u8 {
                    let mut profile = base_profile();
                    profile.goal = goal;
                    profile.diet_style = style;
                    profile.lifestyle = lifestyle;
                    profile.activity_level = level;

                    let target =
                        calculate_daily_target(&profile, &TargetOverrides::default()).unwrap();
                    let diff = (target.macro_calories() - target.calories).abs();
                    assert!(
                        diff < 9.5,
                        "macro calories drift {} for {:?}/{:?}/{:?} level {}",
                        diff,
                        goal,
                        style,
                        lifestyle,
                        level
                    );
                    assert!(target.carb_g >= 0.0);
                }
            }
        }
    }
}

#[test]
fn test_calories_rise_with_activity_level() {
    let calories: Vec<f64> = (1..=5u8)
        .map(|level| {
            let mut profile = base_profile();
            profile.activity_level = level;
            calculate_daily_target(&profile, &TargetOverrides::default())
                .unwrap()
                .calories
        })
        .collect();

    for pair in calories.windows(2) {
        assert!(pair[0] < pair[1], "activity step {:?} did not raise calories", pair);
    }
}

#[test]
fn test_bodymaker_doubles_protein() {
    let general = calculate_daily_target(&base_profile(), &TargetOverrides::default()).unwrap();

    let mut profile = base_profile();
    profile.lifestyle = Lifestyle::Bodymaker;
    let bodymaker = calculate_daily_target(&profile, &TargetOverrides::default()).unwrap();

    assert_float_absolute_eq!(bodymaker.protein_g, 2.0 * general.protein_g);
}

#[test]
fn test_combined_overrides() {
    let overrides = TargetOverrides {
        calorie_adjustment: Some(-500.0),
        pfc_percent: Some(PfcSplit {
            protein_pct: 40.0,
            fat_pct: 20.0,
            carb_pct: 40.0,
        }),
    };
    let target = calculate_daily_target(&base_profile(), &overrides).unwrap();

    // 2332.4 - 500 = 1832.4, split 40/20/40 before rounding.
    assert_float_absolute_eq!(target.calories, 1832.0);
    assert_float_absolute_eq!(target.protein_g, 183.0);
    assert_float_absolute_eq!(target.fat_g, 41.0);
    assert_float_absolute_eq!(target.carb_g, 183.0);

    let diff = (target.macro_calories() - target.calories).abs();
    assert!(diff < 9.5);
}
