pub mod foods;

pub use foods::{builtin_foods, ids, FoodCategory, FoodFact, MineralProfile, VitaminProfile};

use std::collections::HashMap;

use crate::error::{CoachError, Result};
use crate::models::{BodyPart, Goal, TrainingSplit};

/// Immutable food lookup, keyed by id.
///
/// The planner and scorer take a `&Catalog` rather than reaching for a
/// global table, so tests can run against reduced food sets.
pub struct Catalog {
    foods: HashMap<&'static str, FoodFact>,
}

impl Catalog {
    /// Create a catalog from a list of food facts.
    pub fn new(foods: Vec<FoodFact>) -> Self {
        let mut map = HashMap::new();
        for food in foods {
            map.insert(food.id, food);
        }
        Self { foods: map }
    }

    /// The built-in reference food set.
    pub fn builtin() -> Self {
        Self::new(builtin_foods())
    }

    /// Get a food by id.
    pub fn get(&self, id: &str) -> Option<&FoodFact> {
        self.foods.get(id)
    }

    /// Get a food by id, or fail with `FoodNotFound`.
    pub fn require(&self, id: &str) -> Result<&FoodFact> {
        self.get(id)
            .ok_or_else(|| CoachError::FoodNotFound(id.to_string()))
    }

    /// All foods, sorted by id for deterministic listings.
    pub fn all(&self) -> Vec<&FoodFact> {
        let mut foods: Vec<&FoodFact> = self.foods.values().collect();
        foods.sort_by_key(|f| f.id);
        foods
    }

    /// Count of foods in the catalog.
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Check if the catalog has no foods.
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Pick the protein source for a day.
    ///
    /// Cost tier 1 always eats chicken. Tier 2 rotates by the body part
    /// being trained; rest days fall back to chicken.
    pub fn protein_for_training(
        &self,
        split: Option<TrainingSplit>,
        cost_tier: u8,
    ) -> Option<&FoodFact> {
        let id = if cost_tier <= 1 {
            ids::CHICKEN_BREAST
        } else {
            match split.map(|s| s.body_part()) {
                Some(BodyPart::Legs) | Some(BodyPart::Back) | Some(BodyPart::Chest) => {
                    ids::BEEF_LEAN
                }
                Some(BodyPart::Shoulders) => ids::SABA,
                Some(BodyPart::Arms) => ids::SALMON,
                None => ids::CHICKEN_BREAST,
            }
        };
        self.get(id)
    }

    /// Pick the staple carb source for a goal.
    pub fn carb_for_goal(&self, goal: Goal) -> Option<&FoodFact> {
        let id = match goal {
            Goal::Cut => ids::BROWN_RICE,
            Goal::Maintain | Goal::Bulk => ids::WHITE_RICE,
        };
        self.get(id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 14);
        assert!(!catalog.is_empty());
        assert!(catalog.get(ids::BROCCOLI).is_some());
        assert!(catalog.get("pizza").is_none());
    }

    #[test]
    fn test_require_unknown_food() {
        let catalog = Catalog::builtin();
        let err = catalog.require("pizza").unwrap_err();
        assert!(matches!(err, CoachError::FoodNotFound(id) if id == "pizza"));
    }

    #[test]
    fn test_protein_selector_by_tier_and_split() {
        let catalog = Catalog::builtin();

        let tier1 = catalog
            .protein_for_training(Some(TrainingSplit::Legs), 1)
            .unwrap();
        assert_eq!(tier1.id, ids::CHICKEN_BREAST);

        let legs = catalog
            .protein_for_training(Some(TrainingSplit::Legs), 2)
            .unwrap();
        assert_eq!(legs.id, ids::BEEF_LEAN);

        let shoulders = catalog
            .protein_for_training(Some(TrainingSplit::Shoulders), 2)
            .unwrap();
        assert_eq!(shoulders.id, ids::SABA);

        let arms = catalog
            .protein_for_training(Some(TrainingSplit::Arms), 2)
            .unwrap();
        assert_eq!(arms.id, ids::SALMON);

        let rest = catalog.protein_for_training(None, 2).unwrap();
        assert_eq!(rest.id, ids::CHICKEN_BREAST);
    }

    #[test]
    fn test_carb_selector_by_goal() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.carb_for_goal(Goal::Cut).unwrap().id,
            ids::BROWN_RICE
        );
        assert_eq!(
            catalog.carb_for_goal(Goal::Maintain).unwrap().id,
            ids::WHITE_RICE
        );
        assert_eq!(
            catalog.carb_for_goal(Goal::Bulk).unwrap().id,
            ids::WHITE_RICE
        );
    }

    #[test]
    fn test_all_sorted_by_id() {
        let catalog = Catalog::builtin();
        let foods = catalog.all();
        for pair in foods.windows(2) {
            assert!(pair[0].id < pair[1].id);
        }
    }
}
