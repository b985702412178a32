//! Two-pass meal allocation.
//!
//! Pass 1 fills each normal meal greedily from a static per-meal share of
//! the daily target. Pass 2 corrects the plan-wide drift: one global scale
//! per source kind against 95% of the target, then the remaining fat gap
//! is rebuilt as evenly split oil doses.

use crate::catalog::{ids, Catalog, FoodFact};
use crate::models::{
    DailyTarget, DayPlan, ItemKind, Macros, MealSlot, PlanDiagnostics, PlanItem, PlanRequest,
    SlotKind, Unit,
};
use crate::planner::constants::*;
use crate::planner::shopping::build_shopping_list;
use crate::workout::select_workout;

/// Generate the full day plan for a target and request.
///
/// Never fails: degenerate inputs degrade to a partial plan, with the
/// misses visible in the diagnostics block rather than raised as errors.
pub fn generate_day_plan(
    catalog: &Catalog,
    target: &DailyTarget,
    request: &PlanRequest,
) -> DayPlan {
    let mut slots = classify_slots(request);
    let salt_dose = (request.lean_mass / SALT_LEAN_DIVISOR).round();

    for slot in &mut slots {
        match slot.kind {
            SlotKind::PreWorkout => fill_snack(slot, request, salt_dose, true),
            SlotKind::PostWorkout => fill_snack(slot, request, salt_dose, false),
            _ => {}
        }
    }

    let snack_total = total_macros(catalog, &slots);
    let normal_count = slots
        .iter()
        .filter(|s| s.kind == SlotKind::Normal)
        .count();

    if normal_count > 0 {
        let share = Macros {
            protein: (target.protein_g - snack_total.protein) / normal_count as f64,
            fat: (target.fat_g - snack_total.fat) / normal_count as f64,
            carbs: (target.carb_g - snack_total.carbs) / normal_count as f64,
        };
        let protein_fact =
            catalog.protein_for_training(request.training.map(|t| t.split), request.cost_tier);
        let carb_fact = catalog.carb_for_goal(request.goal);

        let mut first = true;
        for slot in &mut slots {
            if slot.kind != SlotKind::Normal {
                continue;
            }
            fill_normal_meal(catalog, slot, share, first, protein_fact, carb_fact, salt_dose);
            first = false;
        }
    }

    let (protein_scale, carb_scale) =
        adjust_to_macro_targets(catalog, target, &mut slots, normal_count);

    let shopping = build_shopping_list(&slots);
    let workout = request
        .training
        .as_ref()
        .map(|t| select_workout(t, request.lean_mass));
    let diagnostics = build_diagnostics(catalog, target, &slots, protein_scale, carb_scale);

    DayPlan {
        target: *target,
        meals: slots,
        workout,
        shopping,
        diagnostics,
    }
}

/// Classify the day's meal slots.
///
/// Eating-out wins over the workout snacks when indices collide;
/// out-of-range indices are ignored.
fn classify_slots(request: &PlanRequest) -> Vec<MealSlot> {
    let after = request
        .training
        .map(|t| t.after_meal)
        .filter(|a| (1..=request.meal_count).contains(a));

    (1..=request.meal_count)
        .map(|index| {
            let kind = if request.eating_out_slot == Some(index) {
                SlotKind::EatingOut
            } else if after == Some(index) {
                SlotKind::PreWorkout
            } else if after == Some(index - 1) {
                SlotKind::PostWorkout
            } else {
                SlotKind::Normal
            };
            MealSlot {
                index,
                kind,
                items: Vec::new(),
            }
        })
        .collect()
}

/// Fixed mochi + whey snack; the pre-workout slot also carries salt.
fn fill_snack(slot: &mut MealSlot, request: &PlanRequest, salt_dose: f64, with_salt: bool) {
    slot.items.push(PlanItem {
        food_id: ids::MOCHI.to_string(),
        amount: f64::from(request.calorie_tier.mochi_pieces()),
        unit: Unit::Pieces,
        kind: ItemKind::Fixed,
    });
    slot.items.push(PlanItem {
        food_id: ids::WHEY_PROTEIN.to_string(),
        amount: WHEY_DOSE_G,
        unit: Unit::Grams,
        kind: ItemKind::Fixed,
    });
    if with_salt && salt_dose >= 1.0 {
        slot.items.push(PlanItem {
            food_id: ids::PINK_SALT.to_string(),
            amount: salt_dose,
            unit: Unit::Grams,
            kind: ItemKind::Fixed,
        });
    }
}

/// Pass 1: greedy fill of one normal meal from its macro share.
///
/// Items are sized sequentially, each against what the earlier items of
/// the meal left over.
fn fill_normal_meal(
    catalog: &Catalog,
    slot: &mut MealSlot,
    share: Macros,
    first_normal: bool,
    protein_fact: Option<&FoodFact>,
    carb_fact: Option<&FoodFact>,
    salt_dose: f64,
) {
    let mut remaining = share;

    if first_normal {
        let eggs = if share.protein >= EGG_DOUBLE_THRESHOLD_G {
            2.0
        } else {
            1.0
        };
        push_item(
            catalog,
            slot,
            &mut remaining,
            PlanItem {
                food_id: ids::EGG_WHOLE.to_string(),
                amount: eggs,
                unit: Unit::Pieces,
                kind: ItemKind::Fixed,
            },
        );
    }

    if let Some(fact) = protein_fact {
        let amount = size_source(remaining.protein, fact.protein);
        push_item(
            catalog,
            slot,
            &mut remaining,
            PlanItem {
                food_id: fact.id.to_string(),
                amount,
                unit: Unit::Grams,
                kind: ItemKind::ProteinSource,
            },
        );
    }

    push_item(
        catalog,
        slot,
        &mut remaining,
        PlanItem {
            food_id: ids::BROCCOLI.to_string(),
            amount: BROCCOLI_SERVING_G,
            unit: Unit::Grams,
            kind: ItemKind::Fixed,
        },
    );

    if let Some(fact) = carb_fact {
        let amount = size_source(remaining.carbs, fact.carbs);
        push_item(
            catalog,
            slot,
            &mut remaining,
            PlanItem {
                food_id: fact.id.to_string(),
                amount,
                unit: Unit::Grams,
                kind: ItemKind::CarbSource,
            },
        );
    }

    if remaining.fat > OIL_SHORTFALL_MIN_G {
        let amount = remaining.fat.round();
        push_item(
            catalog,
            slot,
            &mut remaining,
            PlanItem {
                food_id: ids::OLIVE_OIL.to_string(),
                amount,
                unit: Unit::Grams,
                kind: ItemKind::Oil,
            },
        );
    }

    if salt_dose >= 1.0 {
        slot.items.push(PlanItem {
            food_id: ids::PINK_SALT.to_string(),
            amount: salt_dose,
            unit: Unit::Grams,
            kind: ItemKind::Fixed,
        });
    }
}

/// Append an item and deduct its macros from the meal's remaining share.
fn push_item(catalog: &Catalog, slot: &mut MealSlot, remaining: &mut Macros, item: PlanItem) {
    let consumed = item_macros(catalog, &item);
    remaining.protein -= consumed.protein;
    remaining.fat -= consumed.fat;
    remaining.carbs -= consumed.carbs;
    slot.items.push(item);
}

/// Size a source food so its dominant macro covers the remaining share.
fn size_source(remaining_g: f64, per_100g: f64) -> f64 {
    if per_100g <= 0.0 {
        return SOURCE_FLOOR_G;
    }
    round_to_step(remaining_g / per_100g * 100.0).max(SOURCE_FLOOR_G)
}

fn round_to_step(grams: f64) -> f64 {
    (grams / SOURCE_ROUND_STEP).round() * SOURCE_ROUND_STEP
}

/// Pass 2: rescale sources against 95% targets, then rebuild oil.
fn adjust_to_macro_targets(
    catalog: &Catalog,
    target: &DailyTarget,
    slots: &mut [MealSlot],
    normal_count: usize,
) -> (Option<f64>, Option<f64>) {
    let protein_scale = rescale_sources(
        catalog,
        slots,
        ItemKind::ProteinSource,
        target.protein_g,
        |m| m.protein,
    );
    let carb_scale = rescale_sources(catalog, slots, ItemKind::CarbSource, target.carb_g, |m| {
        m.carbs
    });
    rebuild_oil(catalog, slots, target.fat_g, normal_count);
    (protein_scale, carb_scale)
}

/// Uniformly rescale every item of `kind` so the selected macro tracks
/// 95% of the target.
///
/// Returns `None` when the sources contribute nothing; the scale step is
/// skipped and pass-1 amounts are kept.
fn rescale_sources(
    catalog: &Catalog,
    slots: &mut [MealSlot],
    kind: ItemKind,
    target_g: f64,
    select: fn(&Macros) -> f64,
) -> Option<f64> {
    let mut source_total = 0.0;
    let mut fixed_other = 0.0;
    for slot in slots.iter() {
        for item in &slot.items {
            let contribution = select(&item_macros(catalog, item));
            if item.kind == kind {
                source_total += contribution;
            } else {
                fixed_other += contribution;
            }
        }
    }

    if source_total <= 0.0 {
        return None;
    }

    let scale =
        ((TARGET_TRACK_RATIO * target_g - fixed_other) / source_total).clamp(SCALE_MIN, SCALE_MAX);

    for slot in slots.iter_mut() {
        for item in &mut slot.items {
            if item.kind == kind {
                item.amount = round_to_step(item.amount * scale).max(SOURCE_FLOOR_G);
            }
        }
    }

    Some(scale)
}

/// Drop every oil item, then split the remaining fat shortfall evenly
/// across the normal meals.
fn rebuild_oil(catalog: &Catalog, slots: &mut [MealSlot], target_fat_g: f64, normal_count: usize) {
    for slot in slots.iter_mut() {
        slot.items.retain(|i| i.kind != ItemKind::Oil);
    }

    if normal_count == 0 {
        return;
    }

    let non_oil_fat: f64 = slots
        .iter()
        .flat_map(|s| &s.items)
        .map(|i| item_macros(catalog, i).fat)
        .sum();
    let shortfall = TARGET_TRACK_RATIO * target_fat_g - non_oil_fat;
    if shortfall <= OIL_SHORTFALL_MIN_G {
        return;
    }

    let dose = oil_dose_per_meal(shortfall, normal_count);
    for slot in slots.iter_mut() {
        if slot.kind == SlotKind::Normal {
            slot.items.push(PlanItem {
                food_id: ids::OLIVE_OIL.to_string(),
                amount: dose,
                unit: Unit::Grams,
                kind: ItemKind::Oil,
            });
        }
    }
}

/// Even oil split with a 3 g floor.
fn oil_dose_per_meal(shortfall_g: f64, normal_count: usize) -> f64 {
    (shortfall_g / normal_count as f64).round().max(OIL_MIN_PER_MEAL_G)
}

/// Macros one plan item contributes; unknown foods count as zero.
pub fn item_macros(catalog: &Catalog, item: &PlanItem) -> Macros {
    match catalog.get(&item.food_id) {
        Some(fact) => {
            let grams = fact.grams_for(item.amount, item.unit).unwrap_or(0.0);
            fact.macros_for_grams(grams)
        }
        None => Macros::default(),
    }
}

/// Macro totals across all slots.
pub fn total_macros(catalog: &Catalog, slots: &[MealSlot]) -> Macros {
    let mut total = Macros::default();
    for slot in slots {
        for item in &slot.items {
            total.add(item_macros(catalog, item));
        }
    }
    total
}

fn build_diagnostics(
    catalog: &Catalog,
    target: &DailyTarget,
    slots: &[MealSlot],
    protein_scale: Option<f64>,
    carb_scale: Option<f64>,
) -> PlanDiagnostics {
    let achieved = total_macros(catalog, slots);
    let within = |actual: f64, target_g: f64| {
        target_g <= 0.0 || (actual - target_g).abs() <= MACRO_TOLERANCE * target_g
    };

    PlanDiagnostics {
        achieved_calories: achieved.calories(),
        achieved_protein: achieved.protein,
        achieved_fat: achieved.fat,
        achieved_carbs: achieved.carbs,
        protein_delta: achieved.protein - target.protein_g,
        fat_delta: achieved.fat - target.fat_g,
        carb_delta: achieved.carbs - target.carb_g,
        protein_scale,
        carb_scale,
        within_tolerance: within(achieved.protein, target.protein_g)
            && within(achieved.fat, target.fat_g)
            && within(achieved.carbs, target.carb_g),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_foods;
    use crate::models::{CalorieTier, Goal, TrainingContext, TrainingSplit, TrainingStyle};

    fn sample_request(meal_count: u32, after_meal: Option<u32>) -> PlanRequest {
        PlanRequest {
            meal_count,
            training: after_meal.map(|after| TrainingContext {
                after_meal: after,
                split: TrainingSplit::Legs,
                style: TrainingStyle::Power,
                duration_min: 60,
            }),
            eating_out_slot: None,
            lean_mass: 60.0,
            goal: Goal::Maintain,
            cost_tier: 1,
            calorie_tier: CalorieTier::Light,
        }
    }

    fn kinds(request: &PlanRequest) -> Vec<SlotKind> {
        classify_slots(request).into_iter().map(|s| s.kind).collect()
    }

    #[test]
    fn test_slot_classification_around_training() {
        let request = sample_request(5, Some(3));
        assert_eq!(
            kinds(&request),
            vec![
                SlotKind::Normal,
                SlotKind::Normal,
                SlotKind::PreWorkout,
                SlotKind::PostWorkout,
                SlotKind::Normal,
            ]
        );
    }

    #[test]
    fn test_training_after_last_meal_has_no_post_slot() {
        let request = sample_request(5, Some(5));
        assert_eq!(
            kinds(&request),
            vec![
                SlotKind::Normal,
                SlotKind::Normal,
                SlotKind::Normal,
                SlotKind::Normal,
                SlotKind::PreWorkout,
            ]
        );
    }

    #[test]
    fn test_eating_out_wins_index_collision() {
        let mut request = sample_request(5, Some(3));
        request.eating_out_slot = Some(3);
        assert_eq!(
            kinds(&request),
            vec![
                SlotKind::Normal,
                SlotKind::Normal,
                SlotKind::EatingOut,
                SlotKind::PostWorkout,
                SlotKind::Normal,
            ]
        );
    }

    #[test]
    fn test_out_of_range_indices_are_ignored() {
        let mut request = sample_request(4, Some(9));
        request.eating_out_slot = Some(0);
        assert_eq!(kinds(&request), vec![SlotKind::Normal; 4]);
    }

    #[test]
    fn test_size_source_rounds_to_tens_with_floor() {
        // 24.667 g protein from a 23 g/100 g source -> 107.25 g -> 110 g.
        assert_eq!(size_source(24.667, 23.0), 110.0);
        // Oversupplied meals still get the floor amount.
        assert_eq!(size_source(-5.0, 23.0), 50.0);
        // A source with no payload cannot be sized, only floored.
        assert_eq!(size_source(10.0, 0.0), 50.0);
    }

    #[test]
    fn test_oil_dose_split() {
        assert_eq!(oil_dose_per_meal(10.0, 3), 3.0);
        assert_eq!(oil_dose_per_meal(49.4, 3), 16.0);
        // Tiny shortfalls still dose the minimum.
        assert_eq!(oil_dose_per_meal(4.0, 3), 3.0);
    }

    #[test]
    fn test_missing_protein_source_skips_scale() {
        let foods = builtin_foods()
            .into_iter()
            .filter(|f| f.id != crate::catalog::ids::CHICKEN_BREAST)
            .collect();
        let catalog = Catalog::new(foods);
        let target = DailyTarget {
            calories: 2200.0,
            protein_g: 150.0,
            fat_g: 70.0,
            carb_g: 250.0,
        };

        let plan = generate_day_plan(&catalog, &target, &sample_request(4, None));

        assert!(plan.diagnostics.protein_scale.is_none());
        assert!(plan.diagnostics.carb_scale.is_some());
        let has_protein_source = plan
            .meals
            .iter()
            .flat_map(|s| &s.items)
            .any(|i| i.kind == ItemKind::ProteinSource);
        assert!(!has_protein_source);
    }

    #[test]
    fn test_eating_out_slot_stays_empty() {
        let mut request = sample_request(4, None);
        request.eating_out_slot = Some(2);
        let catalog = Catalog::builtin();
        let target = DailyTarget {
            calories: 2200.0,
            protein_g: 150.0,
            fat_g: 70.0,
            carb_g: 250.0,
        };

        let plan = generate_day_plan(&catalog, &target, &request);

        assert_eq!(plan.meals[1].kind, SlotKind::EatingOut);
        assert!(plan.meals[1].items.is_empty());
    }
}
