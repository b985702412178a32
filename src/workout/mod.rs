pub mod templates;

pub use templates::{part_name, style_name, template_for, ExerciseTemplate};

use crate::models::{BodyPart, PlannedExercise, TrainingContext, WorkoutPlan};

/// Hourly calorie burn base by trained muscle group.
fn class_base(part: BodyPart) -> f64 {
    match part {
        BodyPart::Legs => 400.0,
        BodyPart::Arms => 100.0,
        _ => 250.0,
    }
}

/// Build the workout block for a training day.
///
/// Picks roughly one exercise per 30 minutes from the canned template,
/// then spreads one set per 5 minutes across them, earliest exercises
/// taking the remainder.
pub fn select_workout(training: &TrainingContext, lean_mass: f64) -> WorkoutPlan {
    let part = training.split.body_part();
    let template = template_for(part, training.style);
    let duration = training.duration_min;

    let exercise_count =
        ((f64::from(duration) / 30.0).round() as usize).clamp(1, template.len());
    let total_sets = (exercise_count as u32).max((f64::from(duration) / 5.0).round() as u32);

    let base_sets = total_sets / exercise_count as u32;
    let remainder = (total_sets as usize) % exercise_count;

    let exercises = template
        .iter()
        .take(exercise_count)
        .enumerate()
        .map(|(i, ex)| PlannedExercise {
            name: ex.name.to_string(),
            sets: base_sets + u32::from(i < remainder),
            reps: ex.reps,
            rm_percent: ex.rm_percent,
        })
        .collect();

    WorkoutPlan {
        title: format!("{} {}", part_name(part), style_name(training.style)),
        exercises,
        total_sets,
        duration_min: duration,
        est_calories_burned: ((class_base(part) + 100.0) * lean_mass / 60.0).round() as u32,
    }
}
