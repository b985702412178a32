pub mod plan;
pub mod profile;
pub mod record;

pub use plan::{
    BodyPart, CalorieTier, DayPlan, ItemKind, MealSlot, PlanDiagnostics, PlanItem, PlanRequest,
    PlannedExercise, ShoppingEntry, SlotKind, TrainingContext, TrainingSplit, TrainingStyle, Unit,
    WorkoutPlan,
};
pub use profile::{BloodType, DailyTarget, DietStyle, Gender, Goal, Lifestyle, Macros, Profile};
pub use record::{ConditionLog, DayRecord, RecordedItem, RecordedMeal, WorkoutLog};
