use std::collections::HashMap;

use crate::models::{MealSlot, ShoppingEntry, Unit};

/// Fold the final meal slots into per-food purchase totals, sorted by id.
///
/// Rebuilt from scratch on every generator run; never incrementally
/// mutated.
pub fn build_shopping_list(slots: &[MealSlot]) -> Vec<ShoppingEntry> {
    let mut totals: HashMap<&str, (f64, Unit)> = HashMap::new();
    for slot in slots {
        for item in &slot.items {
            let entry = totals
                .entry(item.food_id.as_str())
                .or_insert((0.0, item.unit));
            entry.0 += item.amount;
        }
    }

    let mut entries: Vec<ShoppingEntry> = totals
        .into_iter()
        .map(|(food_id, (total_amount, unit))| ShoppingEntry {
            food_id: food_id.to_string(),
            total_amount,
            unit,
        })
        .collect();
    entries.sort_by(|a, b| a.food_id.cmp(&b.food_id));
    entries
}
