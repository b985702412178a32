use crate::models::{BodyPart, TrainingStyle};

/// One exercise line in a canned template.
///
/// `sets` is the full-length prescription; the selector redistributes
/// sets when the session is shorter than the template.
#[derive(Debug, Clone, Copy)]
pub struct ExerciseTemplate {
    pub name: &'static str,
    pub sets: u32,
    pub reps: u32,
    /// Min-max percentage of one-rep max; pump work leaves it open.
    pub rm_percent: Option<(u32, u32)>,
}

const fn power(name: &'static str, sets: u32, reps: u32, rm_min: u32, rm_max: u32) -> ExerciseTemplate {
    ExerciseTemplate {
        name,
        sets,
        reps,
        rm_percent: Some((rm_min, rm_max)),
    }
}

const fn pump(name: &'static str, sets: u32, reps: u32) -> ExerciseTemplate {
    ExerciseTemplate {
        name,
        sets,
        reps,
        rm_percent: None,
    }
}

const LEGS_POWER: &[ExerciseTemplate] = &[
    power("Barbell Squat", 5, 5, 80, 85),
    power("Leg Press", 5, 5, 80, 85),
    power("Leg Extension", 4, 8, 70, 75),
    power("Leg Curl", 4, 8, 70, 75),
];

const LEGS_PUMP: &[ExerciseTemplate] = &[
    pump("Barbell Squat", 4, 12),
    pump("Leg Press", 4, 15),
    pump("Leg Extension", 3, 15),
    pump("Leg Curl", 3, 15),
];

const BACK_POWER: &[ExerciseTemplate] = &[
    power("Deadlift", 5, 5, 80, 85),
    power("Bent-Over Row", 5, 5, 75, 80),
    power("Chin-Up", 4, 6, 75, 80),
    power("Seated Row", 4, 8, 70, 75),
];

const BACK_PUMP: &[ExerciseTemplate] = &[
    pump("Deadlift", 4, 10),
    pump("Bent-Over Row", 4, 12),
    pump("Chin-Up", 3, 12),
    pump("Seated Row", 3, 15),
];

const CHEST_POWER: &[ExerciseTemplate] = &[
    power("Bench Press", 5, 5, 80, 85),
    power("Incline Bench Press", 4, 6, 75, 80),
    power("Dips", 4, 6, 75, 80),
    power("Dumbbell Fly", 3, 10, 65, 70),
];

const CHEST_PUMP: &[ExerciseTemplate] = &[
    pump("Bench Press", 4, 12),
    pump("Incline Bench Press", 4, 12),
    pump("Dips", 3, 15),
    pump("Dumbbell Fly", 3, 15),
];

const SHOULDERS_POWER: &[ExerciseTemplate] = &[
    power("Dumbbell Shoulder Press", 5, 5, 80, 85),
    power("Smith Machine Press", 4, 6, 75, 80),
    power("Lateral Raise", 4, 10, 65, 70),
    power("Front Raise", 3, 10, 65, 70),
];

const SHOULDERS_PUMP: &[ExerciseTemplate] = &[
    pump("Dumbbell Shoulder Press", 4, 12),
    pump("Smith Machine Press", 4, 12),
    pump("Lateral Raise", 3, 20),
    pump("Front Raise", 3, 15),
];

const ARMS_POWER: &[ExerciseTemplate] = &[
    power("Close-Grip Bench Press", 5, 5, 80, 85),
    power("Barbell Curl", 4, 6, 75, 80),
    power("French Press", 4, 8, 70, 75),
    power("Incline Dumbbell Curl", 3, 10, 65, 70),
];

const ARMS_PUMP: &[ExerciseTemplate] = &[
    pump("Close-Grip Bench Press", 4, 12),
    pump("Barbell Curl", 4, 12),
    pump("French Press", 3, 15),
    pump("Incline Dumbbell Curl", 3, 15),
];

/// The canned exercise list for a body part and training style.
pub fn template_for(part: BodyPart, style: TrainingStyle) -> &'static [ExerciseTemplate] {
    match (part, style) {
        (BodyPart::Legs, TrainingStyle::Power) => LEGS_POWER,
        (BodyPart::Legs, TrainingStyle::Pump) => LEGS_PUMP,
        (BodyPart::Back, TrainingStyle::Power) => BACK_POWER,
        (BodyPart::Back, TrainingStyle::Pump) => BACK_PUMP,
        (BodyPart::Chest, TrainingStyle::Power) => CHEST_POWER,
        (BodyPart::Chest, TrainingStyle::Pump) => CHEST_PUMP,
        (BodyPart::Shoulders, TrainingStyle::Power) => SHOULDERS_POWER,
        (BodyPart::Shoulders, TrainingStyle::Pump) => SHOULDERS_PUMP,
        (BodyPart::Arms, TrainingStyle::Power) => ARMS_POWER,
        (BodyPart::Arms, TrainingStyle::Pump) => ARMS_PUMP,
    }
}

/// Display name for a body part.
pub fn part_name(part: BodyPart) -> &'static str {
    match part {
        BodyPart::Legs => "Legs",
        BodyPart::Back => "Back",
        BodyPart::Chest => "Chest",
        BodyPart::Shoulders => "Shoulders",
        BodyPart::Arms => "Arms",
    }
}

/// Display name for a training style.
pub fn style_name(style: TrainingStyle) -> &'static str {
    match style {
        TrainingStyle::Power => "Power",
        TrainingStyle::Pump => "Pump",
    }
}
