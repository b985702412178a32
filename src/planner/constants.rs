/// Protein/carb source amounts snap to this step (grams).
pub const SOURCE_ROUND_STEP: f64 = 10.0;

/// Usability floor for protein/carb source amounts (grams).
pub const SOURCE_FLOOR_G: f64 = 50.0;

/// Pass-2 rescale factor bounds.
pub const SCALE_MIN: f64 = 0.5;
pub const SCALE_MAX: f64 = 1.5;

/// Pass 2 tracks this share of the daily target so 10 g rounding
/// does not systematically overshoot.
pub const TARGET_TRACK_RATIO: f64 = 0.95;

/// Fat shortfall (grams) below which no oil is added.
pub const OIL_SHORTFALL_MIN_G: f64 = 2.0;

/// Minimum oil dose per meal once oil is added at all (grams).
pub const OIL_MIN_PER_MEAL_G: f64 = 3.0;

/// Lean mass (kg) per gram of salt in a dosed meal.
pub const SALT_LEAN_DIVISOR: f64 = 22.0;

/// Per-meal protein sub-target (grams) at which the first normal meal
/// gets a second egg.
pub const EGG_DOUBLE_THRESHOLD_G: f64 = 40.0;

/// Whey dose in every workout snack (grams).
pub const WHEY_DOSE_G: f64 = 30.0;

/// Fixed broccoli serving per normal meal (grams).
pub const BROCCOLI_SERVING_G: f64 = 50.0;

/// Relative deviation per macro accepted as on-target.
pub const MACRO_TOLERANCE: f64 = 0.05;
