use rand::Rng;
use serde::{Deserialize, Serialize};

/// A product category from the static catalog (see [`crate::catalog`]).
///
/// Categories are copied by value into products, so a product's category
/// is a snapshot taken at creation time, not a live pointer into the
/// catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    /// Opaque asset key for the category's image.
    pub image: String,
}

/// A product inside a list. The `name` is the identity key: it must be
/// unique within its owning list, and product operations look products up
/// by exact, case-sensitive name match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub category: Category,
    pub unit: String,
    pub quantity: u32,
    pub purchased: bool,
}

impl Product {
    pub fn new(name: String, category: Category) -> Self {
        Self {
            name,
            category,
            unit: String::new(),
            quantity: 1,
            purchased: false,
        }
    }
}

/// A shopping list. Products keep insertion order; the newest is appended
/// at the end. The `archived` flag partitions active vs. archived lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub id: u32,
    pub name: String,
    pub products: Vec<Product>,
    pub archived: bool,
}

impl List {
    /// Creates an empty active list with a random 6-digit id.
    ///
    /// Uniqueness is only practically unlikely to collide, not
    /// guaranteed; creation rejects an id already present in the
    /// collection (see [`crate::commands::create`]).
    pub fn new(name: String) -> Self {
        let id = rand::thread_rng().gen_range(100_000..1_000_000);
        Self {
            id,
            name,
            products: Vec::new(),
            archived: false,
        }
    }
}

impl Default for List {
    /// The caller-visible fallback value returned when a lookup misses.
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            products: Vec::new(),
            archived: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn new_list_gets_six_digit_id() {
        for _ in 0..64 {
            let list = List::new("Groceries".into());
            assert!((100_000..1_000_000).contains(&list.id));
            assert!(list.products.is_empty());
            assert!(!list.archived);
        }
    }

    #[test]
    fn new_product_defaults() {
        let category = catalog::by_id(2).unwrap().clone();
        let product = Product::new("Bread".into(), category);
        assert_eq!(product.unit, "");
        assert_eq!(product.quantity, 1);
        assert!(!product.purchased);
    }

    #[test]
    fn default_list_is_the_empty_fallback() {
        let list = List::default();
        assert_eq!(list.id, 0);
        assert_eq!(list.name, "");
        assert!(list.products.is_empty());
        assert!(!list.archived);
    }
}
