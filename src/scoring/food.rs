//! The multi-axis food score.
//!
//! Each axis is a small pure function over the accumulated intake so the
//! weighted assembly stays auditable; only the accumulation step can fail
//! (unknown food id, piece count without a per-piece weight).

use crate::catalog::{Catalog, MineralProfile, VitaminProfile};
use crate::error::{CoachError, Result};
use crate::models::{DailyTarget, DayRecord};
use crate::scoring::constants::*;

/// Raw intake accumulated over a day's recorded meals.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntakeTotals {
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub fiber: f64,
    pub saturated: f64,
    pub monounsaturated: f64,
    pub polyunsaturated: f64,
    /// DIAAS weighted by grams of protein contributed.
    pub weighted_diaas: f64,
    pub glycemic_load: f64,
    pub vitamins: VitaminProfile,
    pub minerals: MineralProfile,
}

impl IntakeTotals {
    /// Energy implied by the accumulated macros (4/9/4).
    pub fn calories(&self) -> f64 {
        self.protein * 4.0 + self.fat * 9.0 + self.carbs * 4.0
    }

    /// Protein-weighted average DIAAS; zero when no protein was eaten.
    pub fn average_diaas(&self) -> f64 {
        if self.protein > 0.0 {
            self.weighted_diaas / self.protein
        } else {
            0.0
        }
    }
}

/// Food score report: the weighted total, the ten axis scores, and the
/// intake the axes were judged on.
#[derive(Debug, Clone)]
pub struct FoodScore {
    pub total: u32,
    pub calorie: u32,
    pub protein: u32,
    pub fat: u32,
    pub carbs: u32,
    pub diaas: u32,
    pub fatty_acid: u32,
    pub gl: u32,
    pub fiber: u32,
    pub vitamin: u32,
    pub mineral: u32,
    pub intake: IntakeTotals,
}

/// Accumulate a day's recorded meals into raw intake totals.
pub fn accumulate_intake(catalog: &Catalog, record: &DayRecord) -> Result<IntakeTotals> {
    let mut intake = IntakeTotals::default();

    for meal in &record.meals {
        for item in &meal.items {
            let fact = catalog.require(&item.food_id)?;
            let grams = fact.grams_for(item.amount, item.unit).ok_or_else(|| {
                CoachError::InvalidInput(format!(
                    "{} is recorded in pieces but has no per-piece weight",
                    item.food_id
                ))
            })?;
            let ratio = grams / 100.0;

            let protein = fact.protein * ratio;
            let carbs = fact.carbs * ratio;

            intake.protein += protein;
            intake.fat += fact.fat * ratio;
            intake.carbs += carbs;
            intake.fiber += fact.fiber * ratio;
            intake.saturated += fact.saturated * ratio;
            intake.monounsaturated += fact.monounsaturated * ratio;
            intake.polyunsaturated += fact.polyunsaturated * ratio;

            if fact.diaas > 0.0 && protein > 0.0 {
                intake.weighted_diaas += fact.diaas * protein;
            }
            if fact.gi > 0.0 && carbs > 0.0 {
                intake.glycemic_load += fact.gi * carbs / 100.0;
            }

            intake.vitamins.add_scaled(&fact.vitamins, ratio);
            intake.minerals.add_scaled(&fact.minerals, ratio);
        }
    }

    Ok(intake)
}

/// Score a day's recorded meals against the daily target.
pub fn score_food(catalog: &Catalog, record: &DayRecord, target: &DailyTarget) -> Result<FoodScore> {
    let intake = accumulate_intake(catalog, record)?;

    let calorie = calorie_score(intake.calories(), target.calories);
    let protein = protein_score(intake.protein, target.protein_g);
    let fat = fat_score(intake.fat, target.fat_g);
    let carbs = carb_score(intake.carbs, target.carb_g);
    let diaas = diaas_score(intake.average_diaas());
    let fatty_acid = fatty_acid_score(
        intake.saturated,
        intake.monounsaturated,
        intake.polyunsaturated,
        intake.fat,
    );
    let gl = glycemic_load_score(intake.glycemic_load);
    let fiber = fiber_score(intake.fiber, intake.carbs);
    let vitamin = vitamin_score(&intake.vitamins);
    let mineral = mineral_score(&intake.minerals);

    // The total weighs the unrounded axes; per-axis values are rounded
    // for the report only.
    let total = calorie * WEIGHT_CALORIE
        + (protein + fat + carbs) * WEIGHT_MACRO
        + (diaas + fatty_acid + gl + fiber + vitamin + mineral) * WEIGHT_QUALITY;

    Ok(FoodScore {
        total: total.round() as u32,
        calorie: calorie.round() as u32,
        protein: protein.round() as u32,
        fat: fat.round() as u32,
        carbs: carbs.round() as u32,
        diaas: diaas.round() as u32,
        fatty_acid: fatty_acid.round() as u32,
        gl: gl.round() as u32,
        fiber: fiber.round() as u32,
        vitamin: vitamin.round() as u32,
        mineral: mineral.round() as u32,
        intake,
    })
}

/// Linear deviation score; a zero target counts as perfectly met.
fn deviation_score(actual: f64, target: f64, slope: f64) -> f64 {
    let deviation = if target > 0.0 {
        (actual - target).abs() / target
    } else {
        0.0
    };
    (100.0 - deviation * slope).max(0.0)
}

pub fn calorie_score(actual: f64, target: f64) -> f64 {
    deviation_score(actual, target, CALORIE_SLOPE)
}

pub fn protein_score(actual: f64, target: f64) -> f64 {
    deviation_score(actual, target, PROTEIN_SLOPE)
}

pub fn fat_score(actual: f64, target: f64) -> f64 {
    deviation_score(actual, target, FAT_SLOPE)
}

pub fn carb_score(actual: f64, target: f64) -> f64 {
    deviation_score(actual, target, CARB_SLOPE)
}

/// Bucketed protein-quality score from the weighted average DIAAS.
pub fn diaas_score(average: f64) -> f64 {
    if average >= 1.00 {
        100.0
    } else if average >= 0.90 {
        80.0
    } else if average >= 0.75 {
        60.0
    } else if average >= 0.50 {
        40.0
    } else {
        20.0
    }
}

/// Saturated/mono/poly ratio balance, weighted 0.4/0.3/0.3.
pub fn fatty_acid_score(saturated: f64, mono: f64, poly: f64, total_fat: f64) -> f64 {
    if total_fat <= 0.0 {
        return FATTY_ACID_DEFAULT;
    }

    let sat = saturated_ratio_score(saturated / total_fat);
    let mono = mono_ratio_score(mono / total_fat);
    let poly = poly_ratio_score(poly / total_fat);
    sat * 0.4 + mono * 0.3 + poly * 0.3
}

/// Ideal band 30-35% of total fat.
fn saturated_ratio_score(ratio: f64) -> f64 {
    if (0.30..=0.35).contains(&ratio) {
        100.0
    } else if (0.25..0.30).contains(&ratio) {
        80.0
    } else if (0.20..0.25).contains(&ratio) {
        60.0
    } else if ratio > 0.35 && ratio <= 0.40 {
        80.0
    } else if ratio > 0.40 && ratio <= 0.50 {
        60.0
    } else {
        40.0
    }
}

/// Ideal band 35-45% of total fat.
fn mono_ratio_score(ratio: f64) -> f64 {
    if (0.35..=0.45).contains(&ratio) {
        100.0
    } else if (0.30..0.35).contains(&ratio) {
        80.0
    } else if (0.25..0.30).contains(&ratio) {
        60.0
    } else if ratio > 0.45 && ratio <= 0.50 {
        80.0
    } else {
        40.0
    }
}

/// Ideal band 20-30% of total fat.
fn poly_ratio_score(ratio: f64) -> f64 {
    if (0.20..=0.30).contains(&ratio) {
        100.0
    } else if (0.15..0.20).contains(&ratio) {
        80.0
    } else if (0.10..0.15).contains(&ratio) {
        60.0
    } else if ratio > 0.30 && ratio <= 0.35 {
        80.0
    } else {
        40.0
    }
}

/// Absolute glycemic-load thresholds with a decaying tail.
pub fn glycemic_load_score(gl: f64) -> f64 {
    if gl <= 0.0 {
        return GL_DEFAULT;
    }
    if gl <= 80.0 {
        100.0
    } else if gl <= 100.0 {
        90.0
    } else if gl <= 120.0 {
        75.0
    } else if gl <= 150.0 {
        60.0
    } else if gl <= 180.0 {
        40.0
    } else {
        (40.0 - (gl - 180.0) / 5.0).max(0.0)
    }
}

/// Fiber amount (0.6) plus carb:fiber ratio (0.4).
pub fn fiber_score(fiber: f64, carbs: f64) -> f64 {
    let ratio_score = if fiber > 0.0 {
        carb_fiber_ratio_score(carbs / fiber)
    } else {
        0.0
    };
    fiber_amount_score(fiber) * 0.6 + ratio_score * 0.4
}

/// Ideal 20-30 g per day.
fn fiber_amount_score(fiber: f64) -> f64 {
    if (20.0..=30.0).contains(&fiber) {
        100.0
    } else if (15.0..20.0).contains(&fiber) {
        80.0
    } else if (10.0..15.0).contains(&fiber) {
        60.0
    } else if (5.0..10.0).contains(&fiber) {
        40.0
    } else if fiber < 5.0 {
        20.0
    } else if fiber <= 35.0 {
        90.0
    } else {
        (90.0 - (fiber - 35.0) * 5.0).max(60.0)
    }
}

/// Ideal at most 10 g of carbs per gram of fiber.
fn carb_fiber_ratio_score(ratio: f64) -> f64 {
    if ratio <= 10.0 {
        100.0
    } else if ratio <= 15.0 {
        80.0
    } else if ratio <= 20.0 {
        60.0
    } else {
        (60.0 - (ratio - 20.0) * 3.0).max(0.0)
    }
}

/// Average of nine vitamin sufficiency bands.
pub fn vitamin_score(vitamins: &VitaminProfile) -> f64 {
    let rates = [
        vitamins.a / VITAMIN_A_TARGET,
        vitamins.b1 / VITAMIN_B1_TARGET,
        vitamins.b2 / VITAMIN_B2_TARGET,
        vitamins.b6 / VITAMIN_B6_TARGET,
        vitamins.b12 / VITAMIN_B12_TARGET,
        vitamins.c / VITAMIN_C_TARGET,
        vitamins.d / VITAMIN_D_TARGET,
        vitamins.e / VITAMIN_E_TARGET,
        vitamins.k / VITAMIN_K_TARGET,
    ];
    rates.iter().map(|&r| vitamin_rate_score(r)).sum::<f64>() / rates.len() as f64
}

/// 70-150% of the reference intake scores full marks; shortfall and
/// excess both decay.
fn vitamin_rate_score(rate: f64) -> f64 {
    if (0.7..=1.5).contains(&rate) {
        100.0
    } else if (0.5..0.7).contains(&rate) {
        70.0
    } else if (0.3..0.5).contains(&rate) {
        50.0
    } else if rate > 1.5 && rate < 2.0 {
        80.0
    } else if (2.0..3.0).contains(&rate) {
        60.0
    } else {
        30.0
    }
}

/// Average of six mineral bands; sodium is judged against its upper limit.
pub fn mineral_score(minerals: &MineralProfile) -> f64 {
    let adequacy_rates = [
        minerals.calcium / CALCIUM_TARGET,
        minerals.iron / IRON_TARGET,
        minerals.magnesium / MAGNESIUM_TARGET,
        minerals.zinc / ZINC_TARGET,
        minerals.potassium / POTASSIUM_TARGET,
    ];
    let total = sodium_limit_score(minerals.sodium / SODIUM_LIMIT)
        + adequacy_rates
            .iter()
            .map(|&r| mineral_rate_score(r))
            .sum::<f64>();
    total / 6.0
}

/// Staying at or under the limit scores full marks.
fn sodium_limit_score(rate: f64) -> f64 {
    if rate <= 1.0 {
        100.0
    } else if rate <= 1.2 {
        80.0
    } else if rate <= 1.5 {
        60.0
    } else {
        (60.0 - (rate - 1.5) * 40.0).max(0.0)
    }
}

/// 80-150% of the reference intake scores full marks.
fn mineral_rate_score(rate: f64) -> f64 {
    if (0.8..=1.5).contains(&rate) {
        100.0
    } else if (0.6..0.8).contains(&rate) {
        75.0
    } else if (0.4..0.6).contains(&rate) {
        50.0
    } else if rate > 1.5 && rate < 2.0 {
        80.0
    } else {
        30.0
    }
}
