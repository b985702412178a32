use crate::catalog::Catalog;
use crate::models::{DailyTarget, DayPlan, SlotKind, Unit};
use crate::planner::item_macros;
use crate::scoring::ScoreResult;

fn food_name<'a>(catalog: &'a Catalog, id: &'a str) -> &'a str {
    catalog.get(id).map_or(id, |f| f.name)
}

fn unit_label(unit: Unit) -> &'static str {
    match unit {
        Unit::Grams => "g",
        Unit::Pieces => "pc",
    }
}

fn slot_label(kind: SlotKind) -> &'static str {
    match kind {
        SlotKind::Normal => "",
        SlotKind::PreWorkout => " (pre-workout)",
        SlotKind::PostWorkout => " (post-workout)",
        SlotKind::EatingOut => " (eating out)",
    }
}

/// Display a generated day plan: meal slots, workout, shopping list,
/// and the post-adjustment accounting.
pub fn display_day_plan(catalog: &Catalog, plan: &DayPlan) {
    println!();
    println!("=== Day Plan ===");

    // Align food names across all slots.
    let max_name_len = plan
        .meals
        .iter()
        .flat_map(|slot| slot.items.iter())
        .map(|item| food_name(catalog, &item.food_id).len())
        .max()
        .unwrap_or(10);

    for slot in &plan.meals {
        println!();
        println!("Meal {}{}", slot.index, slot_label(slot.kind));

        if slot.kind == SlotKind::EatingOut {
            println!("  (eaten elsewhere; not planned)");
            continue;
        }

        let mut slot_macros = crate::models::Macros::default();
        for item in &slot.items {
            slot_macros.add(item_macros(catalog, item));
            println!(
                "  {:<width$}  {:>4.0} {}",
                food_name(catalog, &item.food_id),
                item.amount,
                unit_label(item.unit),
                width = max_name_len
            );
        }
        println!(
            "  > {:.0} cal | P {:.1} F {:.1} C {:.1}",
            slot_macros.calories(),
            slot_macros.protein,
            slot_macros.fat,
            slot_macros.carbs
        );
    }

    if let Some(workout) = &plan.workout {
        println!();
        println!("--- Workout: {} ---", workout.title);
        for exercise in &workout.exercises {
            let rm = match exercise.rm_percent {
                Some((lo, hi)) => format!("  @ {}-{}% RM", lo, hi),
                None => String::new(),
            };
            println!(
                "  {:<24} {}x{}{}",
                exercise.name, exercise.sets, exercise.reps, rm
            );
        }
        println!(
            "  {} sets | {} min | ~{} kcal",
            workout.total_sets, workout.duration_min, workout.est_calories_burned
        );
    }

    println!();
    println!("--- Shopping List ---");
    for entry in &plan.shopping {
        println!(
            "  {:<width$}  {:>4.0} {}",
            food_name(catalog, &entry.food_id),
            entry.total_amount,
            unit_label(entry.unit),
            width = max_name_len
        );
    }

    let diag = &plan.diagnostics;
    println!();
    println!("--- Summary ---");
    println!(
        "Calories: {:.0} / {:.0}",
        diag.achieved_calories, plan.target.calories
    );
    println!(
        "Protein:  {:.1} g (target {:.0}, {:+.1})",
        diag.achieved_protein, plan.target.protein_g, diag.protein_delta
    );
    println!(
        "Fat:      {:.1} g (target {:.0}, {:+.1})",
        diag.achieved_fat, plan.target.fat_g, diag.fat_delta
    );
    println!(
        "Carbs:    {:.1} g (target {:.0}, {:+.1})",
        diag.achieved_carbs, plan.target.carb_g, diag.carb_delta
    );
    if let (Some(p), Some(c)) = (diag.protein_scale, diag.carb_scale) {
        println!("Rescale:  protein x{:.2}, carb x{:.2}", p, c);
    }
    if !diag.within_tolerance {
        println!("WARNING: macros landed outside the 5% tolerance");
    }
    println!();
}

/// Display the daily calorie and macro targets.
pub fn display_targets(target: &DailyTarget) {
    println!();
    println!("=== Daily Targets ===");
    println!("Calories: {:.0} kcal", target.calories);
    println!("Protein:  {:.0} g", target.protein_g);
    println!("Fat:      {:.0} g", target.fat_g);
    println!("Carbs:    {:.0} g", target.carb_g);
    println!();
}

/// Display a scored day as an axis table.
pub fn display_score(result: &ScoreResult) {
    let food = &result.food;

    println!();
    println!("=== Daily Score ===");
    println!();
    println!("Food: {}/100", food.total);
    println!("  Calories       {:>3}", food.calorie);
    println!("  Protein        {:>3}", food.protein);
    println!("  Fat            {:>3}", food.fat);
    println!("  Carbs          {:>3}", food.carbs);
    println!("  DIAAS          {:>3}", food.diaas);
    println!("  Fatty acids    {:>3}", food.fatty_acid);
    println!("  Glycemic load  {:>3}", food.gl);
    println!("  Fiber          {:>3}", food.fiber);
    println!("  Vitamins       {:>3}", food.vitamin);
    println!("  Minerals       {:>3}", food.mineral);

    let exercise = &result.exercise;
    println!();
    println!(
        "Exercise: {}/100 ({} min, {} sessions)",
        exercise.total, exercise.total_minutes, exercise.session_count
    );
    println!("  Duration       {:>3}", exercise.duration_score);
    println!("  Frequency      {:>3}", exercise.count_score);

    println!();
    println!("Condition: {}/100", result.condition.total);
    println!();
}
