use serde::{Deserialize, Serialize};

use crate::models::profile::{DailyTarget, Goal, Profile};

/// Measurement unit for a food amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Grams,
    /// Whole pieces of a countable food (egg, mochi). The piece weight
    /// comes from the catalog.
    Pieces,
}

/// Allocation role of a plan item. Pass 2 rescales ProteinSource and
/// CarbSource amounts, removes and re-inserts Oil, and leaves Fixed alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    ProteinSource,
    CarbSource,
    Oil,
    Fixed,
}

/// A single food entry inside a meal slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanItem {
    pub food_id: String,
    pub amount: f64,
    pub unit: Unit,
    pub kind: ItemKind,
}

/// Classification of a meal slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    Normal,
    PreWorkout,
    PostWorkout,
    /// Externally eaten meal; left empty and excluded from macro accounting.
    EatingOut,
}

/// One meal slot of the day, 1-based index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSlot {
    pub index: u32,
    pub kind: SlotKind,
    pub items: Vec<PlanItem>,
}

/// Aggregated purchase quantity for one ingredient.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingEntry {
    pub food_id: String,
    pub total_amount: f64,
    pub unit: Unit,
}

/// Template body part a training split resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyPart {
    Legs,
    Back,
    Chest,
    Shoulders,
    Arms,
}

/// Training split as scheduled by the user. Compound splits alias onto one
/// of the five template body parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingSplit {
    Legs,
    LowerBody,
    Back,
    Pull,
    BackBiceps,
    Chest,
    Push,
    ChestTriceps,
    Shoulders,
    ShouldersArms,
    Arms,
    FullBody,
    UpperBody,
}

impl TrainingSplit {
    /// Resolve the split to the body part whose template is used.
    pub fn body_part(&self) -> BodyPart {
        match self {
            TrainingSplit::Legs | TrainingSplit::LowerBody | TrainingSplit::FullBody => {
                BodyPart::Legs
            }
            TrainingSplit::Back | TrainingSplit::Pull | TrainingSplit::BackBiceps => BodyPart::Back,
            TrainingSplit::Chest
            | TrainingSplit::Push
            | TrainingSplit::ChestTriceps
            | TrainingSplit::UpperBody => BodyPart::Chest,
            TrainingSplit::Shoulders | TrainingSplit::ShouldersArms => BodyPart::Shoulders,
            TrainingSplit::Arms => BodyPart::Arms,
        }
    }
}

/// Training intensity style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingStyle {
    /// Low-rep, high-intensity work with RM percentage targets.
    Power,
    /// High-rep, moderate-intensity work.
    Pump,
}

/// Scheduling context for a training day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingContext {
    /// Training happens after this meal (1-based); that slot becomes the
    /// pre-workout snack and the next one the post-workout snack.
    pub after_meal: u32,
    pub split: TrainingSplit,
    pub style: TrainingStyle,
    pub duration_min: u32,
}

/// Calorie band that fixes the starch-snack (mochi) size around training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalorieTier {
    Light,
    Standard,
    Heavy,
}

impl CalorieTier {
    pub fn from_calories(calories: f64) -> Self {
        if calories < 2500.0 {
            CalorieTier::Light
        } else if calories <= 3200.0 {
            CalorieTier::Standard
        } else {
            CalorieTier::Heavy
        }
    }

    /// Mochi pieces per workout snack slot.
    pub fn mochi_pieces(&self) -> u32 {
        match self {
            CalorieTier::Light => 1,
            CalorieTier::Standard => 2,
            CalorieTier::Heavy => 3,
        }
    }
}

/// Everything the generator needs besides the daily target.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub meal_count: u32,
    pub training: Option<TrainingContext>,
    pub eating_out_slot: Option<u32>,
    pub lean_mass: f64,
    pub goal: Goal,
    pub cost_tier: u8,
    pub calorie_tier: CalorieTier,
}

impl PlanRequest {
    /// Build a request from a profile and its computed target.
    pub fn for_profile(
        profile: &Profile,
        target: &DailyTarget,
        training: Option<TrainingContext>,
        eating_out_slot: Option<u32>,
    ) -> Self {
        Self {
            meal_count: profile.meals_per_day,
            training,
            eating_out_slot,
            lean_mass: profile.lean_mass(),
            goal: profile.goal,
            cost_tier: profile.cost_tier,
            calorie_tier: CalorieTier::from_calories(target.calories),
        }
    }
}

/// One exercise of a selected workout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedExercise {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    /// Percent-of-rep-max range; present for power style only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rm_percent: Option<(u32, u32)>,
}

/// Workout block of a day plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    pub title: String,
    pub exercises: Vec<PlannedExercise>,
    pub total_sets: u32,
    pub duration_min: u32,
    pub est_calories_burned: u32,
}

/// Post-adjustment accounting for a generated plan.
///
/// The generator never fails; when the clamp/floor rules leave the totals
/// outside tolerance, or a rescale had to be skipped, this is where it shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDiagnostics {
    pub achieved_calories: f64,
    pub achieved_protein: f64,
    pub achieved_fat: f64,
    pub achieved_carbs: f64,

    /// Achieved minus target, per macro.
    pub protein_delta: f64,
    pub fat_delta: f64,
    pub carb_delta: f64,

    /// Applied rescale factors; None means the step was skipped because the
    /// source total was zero.
    pub protein_scale: Option<f64>,
    pub carb_scale: Option<f64>,

    /// True when all three macros landed within 5% of target.
    pub within_tolerance: bool,
}

/// A complete generated day: meals, workout, shopping list, accounting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub target: DailyTarget,
    pub meals: Vec<MealSlot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout: Option<WorkoutPlan>,
    pub shopping: Vec<ShoppingEntry>,
    pub diagnostics: PlanDiagnostics,
}
