use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CartzError, Result};
use crate::model::Product;
use crate::store::{self, KeyValueStore};

use super::helpers::{find_list_index, find_product_index};

/// Appends a product to a list's product sequence and persists.
///
/// Product names are the identity key within a list, so a duplicate name
/// is rejected here at the repository boundary rather than trusted to a
/// caller-side pre-check. A missing list is a silent no-op.
pub fn run<S: KeyValueStore>(store: &mut S, product: Product, list_id: u32) -> Result<CmdResult> {
    let mut lists = store::load_lists(store)?;

    let Some(index) = find_list_index(&lists, list_id) else {
        return Ok(CmdResult::default());
    };

    if find_product_index(&lists[index], &product.name).is_some() {
        return Err(CartzError::DuplicateProduct {
            list_id,
            name: product.name,
        });
    }

    let name = product.name.clone();
    lists[index].products.push(product);
    store::save_lists(store, &lists)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Product added: {name}")));
    result.lists.push(lists[index].clone());
    Ok(result)
}
