use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{self, KeyValueStore};

use super::helpers::{find_list_index, find_product_index};

/// Toggles a product's purchased flag (not a set: calling twice returns
/// it to the original state). Silent no-op when the list or product is
/// absent.
pub fn run<S: KeyValueStore>(store: &mut S, name: &str, list_id: u32) -> Result<CmdResult> {
    let mut lists = store::load_lists(store)?;

    let Some(list_index) = find_list_index(&lists, list_id) else {
        return Ok(CmdResult::default());
    };
    let Some(product_index) = find_product_index(&lists[list_index], name) else {
        return Ok(CmdResult::default());
    };

    let product = &mut lists[list_index].products[product_index];
    product.purchased = !product.purchased;
    let now_purchased = product.purchased;
    store::save_lists(store, &lists)?;

    let mut result = CmdResult::default();
    let verb = if now_purchased { "purchased" } else { "unpurchased" };
    result.add_message(CmdMessage::info(format!("Product {verb}: {name}")));
    result.lists.push(lists[list_index].clone());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::commands::{add_product, create};
    use crate::model::{List, Product};
    use crate::store::memory::InMemoryStore;

    fn seeded() -> (InMemoryStore, u32) {
        let mut store = InMemoryStore::new();
        let list = List::new("Groceries".into());
        let id = list.id;
        create::run(&mut store, list).unwrap();
        let bread = Product::new("Bread".into(), catalog::by_id(2).unwrap().clone());
        add_product::run(&mut store, bread, id).unwrap();
        (store, id)
    }

    fn purchased_flag(store: &InMemoryStore) -> bool {
        crate::store::load_lists(store).unwrap()[0].products[0].purchased
    }

    #[test]
    fn toggles_rather_than_sets() {
        let (mut store, id) = seeded();

        run(&mut store, "Bread", id).unwrap();
        assert!(purchased_flag(&store));

        run(&mut store, "Bread", id).unwrap();
        assert!(!purchased_flag(&store));
    }

    #[test]
    fn missing_product_is_a_silent_no_op() {
        let (mut store, id) = seeded();
        let result = run(&mut store, "Ghost", id).unwrap();
        assert!(result.lists.is_empty());
        assert!(!purchased_flag(&store));
    }
}
