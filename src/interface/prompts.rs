use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::catalog::{Catalog, FoodFact};
use crate::error::{CoachError, Result};
use crate::models::{
    BloodType, ConditionLog, DayRecord, DietStyle, Gender, Goal, Lifestyle, Profile, RecordedItem,
    RecordedMeal, TrainingContext, TrainingSplit, TrainingStyle, Unit, WorkoutLog,
};

/// Minimum jaro-winkler similarity for a typed food name to count as a
/// candidate.
const FUZZY_THRESHOLD: f64 = 0.7;

fn prompt_f64(prompt: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| CoachError::InvalidInput("Invalid number".to_string()))
}

fn prompt_u32(prompt: &str, default: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| CoachError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Prompt for a full profile, with sensible defaults on every field.
pub fn prompt_profile() -> Result<Profile> {
    let weight_kg = prompt_f64("Body weight (kg)", 70.0)?;
    let body_fat_pct = prompt_f64("Body fat (%)", 15.0)?;
    let age = prompt_u32("Age", 30)?;

    let gender = match Select::new()
        .with_prompt("Gender")
        .items(&["Male", "Female"])
        .default(0)
        .interact()?
    {
        0 => Gender::Male,
        _ => Gender::Female,
    };

    let goal = match Select::new()
        .with_prompt("Goal")
        .items(&["Maintain", "Cut (-300 kcal)", "Bulk (+300 kcal)"])
        .default(0)
        .interact()?
    {
        1 => Goal::Cut,
        2 => Goal::Bulk,
        _ => Goal::Maintain,
    };

    let diet_style = match Select::new()
        .with_prompt("Diet style")
        .items(&[
            "Balanced (25% fat)",
            "Low fat (15% fat)",
            "Low carb (35% fat)",
            "Ketogenic (60% fat)",
        ])
        .default(0)
        .interact()?
    {
        1 => DietStyle::LowFat,
        2 => DietStyle::LowCarb,
        3 => DietStyle::Ketogenic,
        _ => DietStyle::Balanced,
    };

    let activity_level = Select::new()
        .with_prompt("Activity level")
        .items(&[
            "1 - Desk work, little movement",
            "2 - Some walking or standing",
            "3 - Regular training or active job",
            "4 - Hard training most days",
            "5 - Very heavy labor or double sessions",
        ])
        .default(2)
        .interact()? as u8
        + 1;

    let custom_activity_multiplier = if prompt_yes_no("Override the activity multiplier?", false)? {
        Some(prompt_f64("Activity multiplier", 1.4)?)
    } else {
        None
    };

    let lifestyle = match Select::new()
        .with_prompt("Lifestyle")
        .items(&["General", "Bodymaker (double protein)"])
        .default(0)
        .interact()?
    {
        1 => Lifestyle::Bodymaker,
        _ => Lifestyle::General,
    };

    let blood_type = match Select::new()
        .with_prompt("Blood type")
        .items(&["A", "B", "O", "AB"])
        .default(0)
        .interact()?
    {
        1 => BloodType::B,
        2 => BloodType::O,
        3 => BloodType::Ab,
        _ => BloodType::A,
    };

    let cost_tier = Select::new()
        .with_prompt("Food budget")
        .items(&["1 - Minimalist (chicken and rice)", "2 - Athlete (varied protein)"])
        .default(0)
        .interact()? as u8
        + 1;

    let meals_per_day = prompt_u32("Meals per day", 4)?;
    if meals_per_day == 0 {
        return Err(CoachError::InvalidInput(
            "Meals per day must be at least 1".to_string(),
        ));
    }

    Ok(Profile {
        weight_kg,
        body_fat_pct,
        age,
        gender,
        goal,
        diet_style,
        activity_level,
        custom_activity_multiplier,
        lifestyle,
        blood_type,
        cost_tier,
        meals_per_day,
    })
}

const SPLIT_OPTIONS: [(&str, TrainingSplit); 13] = [
    ("Legs", TrainingSplit::Legs),
    ("Lower body", TrainingSplit::LowerBody),
    ("Back", TrainingSplit::Back),
    ("Pull", TrainingSplit::Pull),
    ("Back + biceps", TrainingSplit::BackBiceps),
    ("Chest", TrainingSplit::Chest),
    ("Push", TrainingSplit::Push),
    ("Chest + triceps", TrainingSplit::ChestTriceps),
    ("Shoulders", TrainingSplit::Shoulders),
    ("Shoulders + arms", TrainingSplit::ShouldersArms),
    ("Arms", TrainingSplit::Arms),
    ("Full body", TrainingSplit::FullBody),
    ("Upper body", TrainingSplit::UpperBody),
];

/// Prompt for the day's scheduling context: training session and
/// eating-out slot, both optional.
pub fn prompt_plan_request(profile: &Profile) -> Result<(Option<TrainingContext>, Option<u32>)> {
    let training = if prompt_yes_no("Is this a training day?", true)? {
        let names: Vec<&str> = SPLIT_OPTIONS.iter().map(|(name, _)| *name).collect();
        let split = SPLIT_OPTIONS[Select::new()
            .with_prompt("Training split")
            .items(&names)
            .default(0)
            .interact()?]
        .1;

        let style = match Select::new()
            .with_prompt("Training style")
            .items(&["Power (low reps, heavy)", "Pump (high reps)"])
            .default(0)
            .interact()?
        {
            1 => TrainingStyle::Pump,
            _ => TrainingStyle::Power,
        };

        let duration_min = prompt_u32("Session length (minutes)", 60)?;
        let after_meal = prompt_u32(
            &format!("Train after which meal (1-{})?", profile.meals_per_day),
            2.min(profile.meals_per_day),
        )?;

        Some(TrainingContext {
            after_meal,
            split,
            style,
            duration_min,
        })
    } else {
        None
    };

    let eating_out_slot = if prompt_yes_no("Eating out for one meal?", false)? {
        Some(prompt_u32(
            &format!("Which meal is eaten out (1-{})?", profile.meals_per_day),
            profile.meals_per_day,
        )?)
    } else {
        None
    };

    Ok((training, eating_out_slot))
}

/// Resolve a typed food name against the catalog.
///
/// Exact id/name match wins; otherwise fuzzy candidates are offered for
/// confirmation. Returns None when nothing matched (caller re-prompts).
fn resolve_food<'a>(catalog: &'a Catalog, input: &str) -> Result<Option<&'a FoodFact>> {
    let needle = input.to_lowercase();

    let exact = catalog
        .all()
        .into_iter()
        .find(|f| f.id == needle || f.name.to_lowercase() == needle);
    if let Some(fact) = exact {
        return Ok(Some(fact));
    }

    let mut candidates: Vec<(&FoodFact, f64)> = catalog
        .all()
        .into_iter()
        .map(|f| {
            let by_id = jaro_winkler(f.id, &needle);
            let by_name = jaro_winkler(&f.name.to_lowercase(), &needle);
            (f, by_id.max(by_name))
        })
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        println!("No matching food found for '{}'", input);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let fact = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", fact.name))
            .default(true)
            .interact()?;
        return Ok(confirm.then_some(fact));
    }

    let options: Vec<&str> = candidates.iter().take(5).map(|(f, _)| f.name).collect();
    let mut selection_options: Vec<String> = options.iter().map(|s| s.to_string()).collect();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < options.len() {
        Ok(Some(candidates[selection].0))
    } else {
        Ok(None)
    }
}

/// Prompt for one meal's items; an empty food name finishes the meal.
fn prompt_meal_items(catalog: &Catalog) -> Result<Vec<RecordedItem>> {
    let mut items = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Enter a food (or press Enter to finish this meal)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        let Some(fact) = resolve_food(catalog, input)? else {
            continue;
        };

        let (amount, unit) = if fact.is_countable() {
            (
                prompt_f64(&format!("How many pieces of {}?", fact.name), fact.typical_amount)?,
                Unit::Pieces,
            )
        } else {
            (
                prompt_f64(&format!("How many grams of {}?", fact.name), fact.typical_amount)?,
                Unit::Grams,
            )
        };

        items.push(RecordedItem {
            food_id: fact.id.to_string(),
            amount,
            unit,
        });
        println!("Added: {} ({} {})", fact.name, amount, match unit {
            Unit::Grams => "g",
            Unit::Pieces => "pc",
        });
    }

    Ok(items)
}

fn prompt_workouts() -> Result<Vec<WorkoutLog>> {
    let mut workouts = Vec::new();

    loop {
        let name: String = Input::new()
            .with_prompt("Workout name (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let name = name.trim().to_string();
        if name.is_empty() {
            break;
        }

        let durations: String = Input::new()
            .with_prompt("Set durations in minutes, comma-separated")
            .default("5,5,5".to_string())
            .interact_text()?;

        let set_durations_min = durations
            .split(',')
            .map(|part| part.trim().parse::<u32>())
            .collect::<std::result::Result<Vec<u32>, _>>()
            .map_err(|_| CoachError::InvalidInput("Invalid duration list".to_string()))?;

        workouts.push(WorkoutLog {
            name,
            set_durations_min,
        });
    }

    Ok(workouts)
}

fn prompt_rating(label: &str) -> Result<u8> {
    let value = prompt_u32(&format!("{} (1-5)", label), 3)?;
    if !(1..=5).contains(&value) {
        return Err(CoachError::InvalidInput(
            "Rating must be between 1 and 5".to_string(),
        ));
    }
    Ok(value as u8)
}

fn prompt_condition() -> Result<ConditionLog> {
    Ok(ConditionLog {
        sleep_hours: prompt_rating("Sleep amount")?,
        sleep_quality: prompt_rating("Sleep quality")?,
        appetite: prompt_rating("Appetite")?,
        digestion: prompt_rating("Digestion")?,
        focus: prompt_rating("Focus")?,
        stress: prompt_rating("Stress (5 = relaxed)")?,
    })
}

/// Prompt for a full day record: meals, workouts, condition check-in.
pub fn prompt_day_record(catalog: &Catalog) -> Result<DayRecord> {
    let rest_day = prompt_yes_no("Was this a planned rest day?", false)?;

    let mut meals = Vec::new();
    loop {
        println!();
        println!("--- Meal {} ---", meals.len() + 1);
        let items = prompt_meal_items(catalog)?;
        if items.is_empty() {
            break;
        }
        meals.push(RecordedMeal { items });

        if !prompt_yes_no("Record another meal?", true)? {
            break;
        }
    }

    let workouts = if rest_day { Vec::new() } else { prompt_workouts()? };

    let condition = if prompt_yes_no("Record a condition check-in?", false)? {
        Some(prompt_condition()?)
    } else {
        None
    };

    Ok(DayRecord {
        meals,
        workouts,
        condition,
        rest_day,
    })
}
