//! The static product-category catalog.
//!
//! Categories are compiled in and never created, mutated, or deleted at
//! runtime. Ids are stable: persisted products carry category snapshots
//! by value, so reordering or renaming entries here does not rewrite
//! stored data, but reusing an id for a different category would make old
//! snapshots misleading.

use crate::model::Category;
use once_cell::sync::Lazy;

// (id, display name, image asset key)
const ENTRIES: &[(u32, &str, &str)] = &[
    (0, "Alcoholic drinks", "alcoholic_drinks"),
    (1, "Baby products", "baby_products"),
    (2, "Bakery", "bakery"),
    (3, "Beverages", "beverages"),
    (4, "Canned foods", "canned_foods"),
    (5, "Car care products", "car_care_products"),
    (6, "Clothes", "clothes"),
    (7, "Coffee, tea & hot chocolate", "coffee_tea_hot_chocolate"),
    (8, "Cosmetics", "cosmetics"),
    (9, "Dairy products", "dairy_products"),
    (10, "Diet foods", "diet_foods"),
    (11, "Electrical products", "electrical_products"),
    (12, "Fish & seafood", "fish_and_sea_food"),
    (13, "Frozen", "frozen"),
    (14, "Grains & pasta", "grains_and_pasta"),
    (15, "Home & kitchen", "home_and_kitchen"),
    (16, "Home baking", "home_baking"),
    (17, "House cleaning products", "house_cleaning_products"),
    (18, "Meat, poultry & sausages", "meat_poultry_sausages"),
    (19, "Newspapers", "newspapers"),
    (20, "Office supplies", "office_supplies"),
    (21, "Oils", "oils"),
    (22, "Other", "other"),
    (23, "Personal hygiene", "personal_hygiene"),
    (24, "Pet supplies", "pet_supplies"),
    (25, "Pharmacy", "pharmacy"),
    (26, "Preserves", "preserves"),
    (27, "Produce", "produce"),
    (28, "Ready meals", "ready_meals"),
    (29, "Snacks", "snacks"),
    (30, "Spices, sauces & condiments", "spices_sauces_condiments"),
];

static CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    ENTRIES
        .iter()
        .map(|&(id, name, image)| Category {
            id,
            name: name.to_string(),
            image: image.to_string(),
        })
        .collect()
});

/// All catalog categories, in id order.
pub fn all() -> &'static [Category] {
    &CATEGORIES
}

/// Looks up a catalog entry by id.
pub fn by_id(id: u32) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_dense_and_in_order() {
        for (position, category) in all().iter().enumerate() {
            assert_eq!(category.id as usize, position);
        }
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(by_id(2).unwrap().name, "Bakery");
        assert_eq!(by_id(2).unwrap().image, "bakery");
        assert!(by_id(31).is_none());
    }
}
