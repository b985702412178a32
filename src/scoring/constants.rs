/// Weight of the calorie axis in the food score.
pub const WEIGHT_CALORIE: f64 = 0.10;

/// Weight of each macro axis (protein, fat, carbs).
pub const WEIGHT_MACRO: f64 = 0.20;

/// Weight of each quality axis (DIAAS, fatty acid, GL, fiber, vitamin, mineral).
pub const WEIGHT_QUALITY: f64 = 0.05;

/// Score lost per unit of relative deviation on the calorie axis.
pub const CALORIE_SLOPE: f64 = 200.0;

/// Protein tolerates deviation more gently than the other axes.
pub const PROTEIN_SLOPE: f64 = 150.0;

/// Score lost per unit of relative deviation on the fat axis.
pub const FAT_SLOPE: f64 = 200.0;

/// Score lost per unit of relative deviation on the carb axis.
pub const CARB_SLOPE: f64 = 200.0;

/// Fatty-acid axis score when no fat was recorded at all.
pub const FATTY_ACID_DEFAULT: f64 = 50.0;

/// Glycemic-load axis score when no GL-carrying carbs were recorded.
pub const GL_DEFAULT: f64 = 50.0;

// ─────────────────────────────────────────────────────────────────────────────
// Daily vitamin reference intakes (A/D/K/B12 in µg, the rest in mg)
// ─────────────────────────────────────────────────────────────────────────────

pub const VITAMIN_A_TARGET: f64 = 800.0;
pub const VITAMIN_B1_TARGET: f64 = 1.4;
pub const VITAMIN_B2_TARGET: f64 = 1.6;
pub const VITAMIN_B6_TARGET: f64 = 1.4;
pub const VITAMIN_B12_TARGET: f64 = 2.4;
pub const VITAMIN_C_TARGET: f64 = 100.0;
pub const VITAMIN_D_TARGET: f64 = 8.5;
pub const VITAMIN_E_TARGET: f64 = 6.0;
pub const VITAMIN_K_TARGET: f64 = 150.0;

// ─────────────────────────────────────────────────────────────────────────────
// Daily mineral reference intakes (mg)
// ─────────────────────────────────────────────────────────────────────────────

pub const CALCIUM_TARGET: f64 = 800.0;
pub const IRON_TARGET: f64 = 10.0;
pub const MAGNESIUM_TARGET: f64 = 340.0;
pub const ZINC_TARGET: f64 = 10.0;
/// Sodium is scored against an upper limit, not an adequacy target.
pub const SODIUM_LIMIT: f64 = 2000.0;
pub const POTASSIUM_TARGET: f64 = 2500.0;
