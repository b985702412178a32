use crate::models::{Macros, Unit};

/// Broad catalog grouping, used by selectors and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodCategory {
    Protein,
    Carb,
    Vegetable,
    Oil,
    Seasoning,
    Supplement,
}

/// Vitamin content per 100 g edible portion.
///
/// A, D, K and B12 are in micrograms; the rest in milligrams.
#[derive(Debug, Clone, Copy, Default)]
pub struct VitaminProfile {
    pub a: f64,
    pub b1: f64,
    pub b2: f64,
    pub b6: f64,
    pub b12: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub k: f64,
}

impl VitaminProfile {
    /// Add `ratio` times another profile's amounts.
    pub fn add_scaled(&mut self, other: &VitaminProfile, ratio: f64) {
        self.a += other.a * ratio;
        self.b1 += other.b1 * ratio;
        self.b2 += other.b2 * ratio;
        self.b6 += other.b6 * ratio;
        self.b12 += other.b12 * ratio;
        self.c += other.c * ratio;
        self.d += other.d * ratio;
        self.e += other.e * ratio;
        self.k += other.k * ratio;
    }
}

/// Mineral content per 100 g edible portion, all milligrams.
#[derive(Debug, Clone, Copy, Default)]
pub struct MineralProfile {
    pub calcium: f64,
    pub iron: f64,
    pub magnesium: f64,
    pub zinc: f64,
    pub sodium: f64,
    pub potassium: f64,
}

impl MineralProfile {
    /// Add `ratio` times another profile's amounts.
    pub fn add_scaled(&mut self, other: &MineralProfile, ratio: f64) {
        self.calcium += other.calcium * ratio;
        self.iron += other.iron * ratio;
        self.magnesium += other.magnesium * ratio;
        self.zinc += other.zinc * ratio;
        self.sodium += other.sodium * ratio;
        self.potassium += other.potassium * ratio;
    }
}

/// Static nutrition facts for one catalog food.
///
/// Macros and micros are per 100 g. Countable foods (eggs, mochi pieces)
/// carry `unit_grams` so piece amounts can be converted to grams.
#[derive(Debug, Clone, Copy)]
pub struct FoodFact {
    pub id: &'static str,
    pub name: &'static str,
    pub category: FoodCategory,
    /// Lowest cost tier this food is selected at (1 = minimalist, 2 = athlete).
    pub cost_tier: u8,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub fiber: f64,
    pub saturated: f64,
    pub monounsaturated: f64,
    pub polyunsaturated: f64,
    /// Protein quality score; 0.0 for foods with no meaningful protein.
    pub diaas: f64,
    /// Glycemic index; 0.0 for foods that do not contribute glycemic load.
    pub gi: f64,
    pub vitamins: VitaminProfile,
    pub minerals: MineralProfile,
    /// Grams per piece for countable foods.
    pub unit_grams: Option<f64>,
    /// Default serving in the food's natural unit (grams, or pieces if countable).
    pub typical_amount: f64,
}

impl FoodFact {
    /// Energy per 100 g, derived from the macro split (4/9/4).
    #[inline]
    pub fn calories_per_100g(&self) -> f64 {
        4.0 * self.protein + 9.0 * self.fat + 4.0 * self.carbs
    }

    /// Convert an amount in the given unit to grams.
    ///
    /// Returns `None` for piece counts on foods without a per-piece weight.
    pub fn grams_for(&self, amount: f64, unit: Unit) -> Option<f64> {
        match unit {
            Unit::Grams => Some(amount),
            Unit::Pieces => self.unit_grams.map(|per_piece| amount * per_piece),
        }
    }

    /// Macros contributed by the given number of grams.
    pub fn macros_for_grams(&self, grams: f64) -> Macros {
        let factor = grams / 100.0;
        Macros {
            protein: self.protein * factor,
            fat: self.fat * factor,
            carbs: self.carbs * factor,
        }
    }

    /// True when amounts of this food are expressed in pieces.
    #[inline]
    pub fn is_countable(&self) -> bool {
        self.unit_grams.is_some()
    }
}

/// Canonical food ids, shared by the planner, scorer, and tests.
pub mod ids {
    pub const CHICKEN_BREAST: &str = "chicken_breast";
    pub const EGG_WHOLE: &str = "egg_whole";
    pub const WHITE_RICE: &str = "white_rice";
    pub const BROWN_RICE: &str = "brown_rice";
    pub const BROCCOLI: &str = "broccoli";
    pub const BEEF_LEAN: &str = "beef_lean";
    pub const SABA: &str = "saba";
    pub const SALMON: &str = "salmon";
    pub const MOCHI: &str = "mochi";
    pub const WHEY_PROTEIN: &str = "whey_protein";
    pub const OLIVE_OIL: &str = "olive_oil";
    pub const PINK_SALT: &str = "pink_salt";
    pub const CREATINE: &str = "creatine";
    pub const FISH_OIL: &str = "fish_oil";
}

/// The built-in reference food set.
///
/// Micronutrient values follow standard food composition tables for the
/// cooked/edible form of each item.
pub fn builtin_foods() -> Vec<FoodFact> {
    vec![
        FoodFact {
            id: ids::CHICKEN_BREAST,
            name: "Chicken Breast",
            category: FoodCategory::Protein,
            cost_tier: 1,
            protein: 23.0,
            fat: 2.0,
            carbs: 0.0,
            fiber: 0.0,
            saturated: 0.5,
            monounsaturated: 0.7,
            polyunsaturated: 0.4,
            diaas: 1.08,
            gi: 0.0,
            vitamins: VitaminProfile {
                a: 9.0,
                b1: 0.09,
                b2: 0.10,
                b6: 0.57,
                b12: 0.2,
                c: 3.0,
                d: 0.1,
                e: 0.3,
                k: 16.0,
            },
            minerals: MineralProfile {
                calcium: 4.0,
                iron: 0.3,
                magnesium: 32.0,
                zinc: 0.6,
                sodium: 40.0,
                potassium: 370.0,
            },
            unit_grams: None,
            typical_amount: 150.0,
        },
        FoodFact {
            id: ids::EGG_WHOLE,
            name: "Whole Egg",
            category: FoodCategory::Protein,
            cost_tier: 1,
            // 8 g protein, 6.5 g fat, 0.3 g carbs per 64 g egg.
            protein: 12.5,
            fat: 10.15625,
            carbs: 0.46875,
            fiber: 0.0,
            saturated: 3.1,
            monounsaturated: 4.1,
            polyunsaturated: 1.4,
            diaas: 1.13,
            gi: 0.0,
            vitamins: VitaminProfile {
                a: 210.0,
                b1: 0.06,
                b2: 0.37,
                b6: 0.09,
                b12: 1.1,
                c: 0.0,
                d: 3.8,
                e: 1.3,
                k: 12.0,
            },
            minerals: MineralProfile {
                calcium: 46.0,
                iron: 1.5,
                magnesium: 10.0,
                zinc: 1.1,
                sodium: 140.0,
                potassium: 130.0,
            },
            unit_grams: Some(64.0),
            typical_amount: 1.0,
        },
        FoodFact {
            id: ids::WHITE_RICE,
            name: "White Rice (cooked)",
            category: FoodCategory::Carb,
            cost_tier: 1,
            protein: 2.5,
            fat: 0.3,
            carbs: 37.0,
            fiber: 0.3,
            saturated: 0.1,
            monounsaturated: 0.1,
            polyunsaturated: 0.1,
            diaas: 0.59,
            gi: 84.0,
            vitamins: VitaminProfile {
                b1: 0.02,
                b2: 0.01,
                b6: 0.02,
                ..VitaminProfile::default()
            },
            minerals: MineralProfile {
                calcium: 3.0,
                iron: 0.1,
                magnesium: 7.0,
                zinc: 0.6,
                sodium: 1.0,
                potassium: 29.0,
            },
            unit_grams: None,
            typical_amount: 200.0,
        },
        FoodFact {
            id: ids::BROWN_RICE,
            name: "Brown Rice (cooked)",
            category: FoodCategory::Carb,
            cost_tier: 1,
            protein: 2.8,
            fat: 1.0,
            carbs: 35.0,
            fiber: 1.4,
            saturated: 0.3,
            monounsaturated: 0.3,
            polyunsaturated: 0.4,
            diaas: 0.62,
            gi: 55.0,
            vitamins: VitaminProfile {
                b1: 0.16,
                b2: 0.02,
                b6: 0.21,
                e: 0.5,
                ..VitaminProfile::default()
            },
            minerals: MineralProfile {
                calcium: 7.0,
                iron: 0.6,
                magnesium: 49.0,
                zinc: 0.8,
                sodium: 1.0,
                potassium: 95.0,
            },
            unit_grams: None,
            typical_amount: 200.0,
        },
        FoodFact {
            id: ids::BROCCOLI,
            name: "Broccoli",
            category: FoodCategory::Vegetable,
            cost_tier: 1,
            protein: 4.0,
            fat: 0.5,
            carbs: 5.0,
            fiber: 4.3,
            saturated: 0.1,
            monounsaturated: 0.1,
            polyunsaturated: 0.2,
            diaas: 0.80,
            gi: 25.0,
            vitamins: VitaminProfile {
                a: 69.0,
                b1: 0.06,
                b2: 0.09,
                b6: 0.14,
                c: 55.0,
                e: 2.7,
                k: 190.0,
                ..VitaminProfile::default()
            },
            minerals: MineralProfile {
                calcium: 41.0,
                iron: 0.9,
                magnesium: 17.0,
                zinc: 0.4,
                sodium: 6.0,
                potassium: 210.0,
            },
            unit_grams: None,
            typical_amount: 50.0,
        },
        FoodFact {
            id: ids::BEEF_LEAN,
            name: "Lean Beef",
            category: FoodCategory::Protein,
            cost_tier: 2,
            protein: 21.0,
            fat: 4.0,
            carbs: 0.0,
            fiber: 0.0,
            saturated: 1.6,
            monounsaturated: 1.9,
            polyunsaturated: 0.2,
            diaas: 1.10,
            gi: 0.0,
            vitamins: VitaminProfile {
                a: 3.0,
                b1: 0.09,
                b2: 0.22,
                b6: 0.35,
                b12: 1.3,
                c: 1.0,
                e: 0.2,
                k: 2.0,
                ..VitaminProfile::default()
            },
            minerals: MineralProfile {
                calcium: 4.0,
                iron: 2.7,
                magnesium: 24.0,
                zinc: 4.5,
                sodium: 50.0,
                potassium: 350.0,
            },
            unit_grams: None,
            typical_amount: 150.0,
        },
        FoodFact {
            id: ids::SABA,
            name: "Mackerel",
            category: FoodCategory::Protein,
            cost_tier: 2,
            protein: 26.0,
            fat: 12.0,
            carbs: 0.0,
            fiber: 0.0,
            saturated: 3.0,
            monounsaturated: 4.4,
            polyunsaturated: 2.7,
            diaas: 1.00,
            gi: 0.0,
            vitamins: VitaminProfile {
                a: 37.0,
                b1: 0.21,
                b2: 0.31,
                b6: 0.59,
                b12: 12.9,
                c: 1.0,
                d: 5.1,
                e: 1.3,
                k: 2.0,
            },
            minerals: MineralProfile {
                calcium: 6.0,
                iron: 1.2,
                magnesium: 30.0,
                zinc: 1.1,
                sodium: 110.0,
                potassium: 330.0,
            },
            unit_grams: None,
            typical_amount: 100.0,
        },
        FoodFact {
            id: ids::SALMON,
            name: "Salmon",
            category: FoodCategory::Protein,
            cost_tier: 2,
            protein: 22.0,
            fat: 4.0,
            carbs: 0.0,
            fiber: 0.0,
            saturated: 0.8,
            monounsaturated: 1.5,
            polyunsaturated: 1.2,
            diaas: 1.00,
            gi: 0.0,
            vitamins: VitaminProfile {
                a: 11.0,
                b1: 0.15,
                b2: 0.21,
                b6: 0.64,
                b12: 5.9,
                c: 1.0,
                d: 11.0,
                e: 1.2,
                ..VitaminProfile::default()
            },
            minerals: MineralProfile {
                calcium: 14.0,
                iron: 0.3,
                magnesium: 28.0,
                zinc: 0.5,
                sodium: 66.0,
                potassium: 350.0,
            },
            unit_grams: None,
            typical_amount: 100.0,
        },
        FoodFact {
            id: ids::MOCHI,
            name: "Mochi",
            category: FoodCategory::Carb,
            cost_tier: 1,
            protein: 4.0,
            fat: 1.0,
            carbs: 50.0,
            fiber: 0.5,
            saturated: 0.3,
            monounsaturated: 0.2,
            polyunsaturated: 0.4,
            diaas: 0.50,
            gi: 85.0,
            vitamins: VitaminProfile {
                b1: 0.03,
                b2: 0.01,
                b6: 0.03,
                ..VitaminProfile::default()
            },
            minerals: MineralProfile {
                calcium: 3.0,
                iron: 0.1,
                magnesium: 6.0,
                zinc: 0.9,
                sodium: 0.0,
                potassium: 32.0,
            },
            unit_grams: Some(50.0),
            typical_amount: 2.0,
        },
        FoodFact {
            id: ids::WHEY_PROTEIN,
            name: "Whey Protein",
            category: FoodCategory::Supplement,
            cost_tier: 1,
            protein: 80.0,
            fat: 3.0,
            carbs: 5.0,
            fiber: 1.0,
            saturated: 1.9,
            monounsaturated: 0.8,
            polyunsaturated: 0.3,
            diaas: 1.25,
            gi: 30.0,
            vitamins: VitaminProfile {
                b1: 0.3,
                b2: 0.5,
                b6: 0.4,
                b12: 1.0,
                ..VitaminProfile::default()
            },
            minerals: MineralProfile {
                calcium: 400.0,
                iron: 1.0,
                magnesium: 60.0,
                zinc: 1.0,
                sodium: 200.0,
                potassium: 450.0,
            },
            unit_grams: None,
            typical_amount: 30.0,
        },
        FoodFact {
            id: ids::OLIVE_OIL,
            name: "Olive Oil",
            category: FoodCategory::Oil,
            cost_tier: 1,
            protein: 0.0,
            fat: 100.0,
            carbs: 0.0,
            fiber: 0.0,
            saturated: 14.0,
            monounsaturated: 73.0,
            polyunsaturated: 11.0,
            diaas: 0.0,
            gi: 0.0,
            vitamins: VitaminProfile {
                e: 14.4,
                k: 60.0,
                ..VitaminProfile::default()
            },
            minerals: MineralProfile::default(),
            unit_grams: None,
            typical_amount: 5.0,
        },
        FoodFact {
            id: ids::PINK_SALT,
            name: "Pink Salt",
            category: FoodCategory::Seasoning,
            cost_tier: 1,
            protein: 0.0,
            fat: 0.0,
            carbs: 0.0,
            fiber: 0.0,
            saturated: 0.0,
            monounsaturated: 0.0,
            polyunsaturated: 0.0,
            diaas: 0.0,
            gi: 0.0,
            vitamins: VitaminProfile::default(),
            minerals: MineralProfile {
                calcium: 40.0,
                iron: 1.0,
                magnesium: 10.0,
                zinc: 0.0,
                sodium: 38000.0,
                potassium: 130.0,
            },
            unit_grams: None,
            typical_amount: 2.0,
        },
        FoodFact {
            id: ids::CREATINE,
            name: "Creatine",
            category: FoodCategory::Supplement,
            cost_tier: 1,
            protein: 0.0,
            fat: 0.0,
            carbs: 0.0,
            fiber: 0.0,
            saturated: 0.0,
            monounsaturated: 0.0,
            polyunsaturated: 0.0,
            diaas: 0.0,
            gi: 0.0,
            vitamins: VitaminProfile::default(),
            minerals: MineralProfile::default(),
            unit_grams: None,
            typical_amount: 5.0,
        },
        FoodFact {
            id: ids::FISH_OIL,
            name: "Fish Oil",
            category: FoodCategory::Supplement,
            cost_tier: 2,
            protein: 0.0,
            fat: 100.0,
            carbs: 0.0,
            fiber: 0.0,
            saturated: 25.0,
            monounsaturated: 25.0,
            polyunsaturated: 40.0,
            diaas: 0.0,
            gi: 0.0,
            vitamins: VitaminProfile {
                a: 30.0,
                d: 10.0,
                e: 2.0,
                ..VitaminProfile::default()
            },
            minerals: MineralProfile::default(),
            unit_grams: Some(1.0),
            typical_amount: 3.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calories_derived_from_macros() {
        let foods = builtin_foods();
        let chicken = foods.iter().find(|f| f.id == ids::CHICKEN_BREAST).unwrap();
        assert!((chicken.calories_per_100g() - 110.0).abs() < 1e-9);

        let mochi = foods.iter().find(|f| f.id == ids::MOCHI).unwrap();
        assert!((mochi.calories_per_100g() - 225.0).abs() < 1e-9);
    }

    #[test]
    fn test_egg_piece_conversion() {
        let foods = builtin_foods();
        let egg = foods.iter().find(|f| f.id == ids::EGG_WHOLE).unwrap();

        let grams = egg.grams_for(1.0, Unit::Pieces).unwrap();
        assert!((grams - 64.0).abs() < 1e-9);

        let macros = egg.macros_for_grams(grams);
        assert!((macros.protein - 8.0).abs() < 1e-9);
        assert!((macros.fat - 6.5).abs() < 1e-9);
        assert!((macros.carbs - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_piece_conversion_requires_unit_weight() {
        let foods = builtin_foods();
        let rice = foods.iter().find(|f| f.id == ids::WHITE_RICE).unwrap();
        assert!(rice.grams_for(2.0, Unit::Pieces).is_none());
        assert_eq!(rice.grams_for(200.0, Unit::Grams), Some(200.0));
    }

    #[test]
    fn test_builtin_ids_unique() {
        let foods = builtin_foods();
        for (i, a) in foods.iter().enumerate() {
            for b in &foods[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate food id {}", a.id);
            }
        }
    }
}
