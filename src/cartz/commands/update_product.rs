use crate::commands::{CmdMessage, CmdResult, ProductPatch};
use crate::error::{CartzError, Result};
use crate::store::{self, KeyValueStore};

use super::helpers::{find_list_index, find_product_index};

/// Applies a partial update to one product.
///
/// Presence is encoded by `Option`, never by truthiness: `Some(0)` for
/// quantity or `Some("")` for unit are provided values and get applied,
/// while `None` leaves the field untouched. A rename that would collide
/// with another product in the same list is rejected.
pub fn run<S: KeyValueStore>(
    store: &mut S,
    name: &str,
    list_id: u32,
    patch: ProductPatch,
) -> Result<CmdResult> {
    let mut lists = store::load_lists(store)?;

    let Some(list_index) = find_list_index(&lists, list_id) else {
        return Ok(CmdResult::default());
    };
    let Some(product_index) = find_product_index(&lists[list_index], name) else {
        return Ok(CmdResult::default());
    };

    if let Some(new_name) = &patch.name {
        let taken = find_product_index(&lists[list_index], new_name)
            .is_some_and(|other| other != product_index);
        if taken {
            return Err(CartzError::DuplicateProduct {
                list_id,
                name: new_name.clone(),
            });
        }
    }

    let product = &mut lists[list_index].products[product_index];
    if let Some(new_name) = patch.name {
        product.name = new_name;
    }
    if let Some(category) = patch.category {
        product.category = category;
    }
    if let Some(quantity) = patch.quantity {
        product.quantity = quantity;
    }
    if let Some(unit) = patch.unit {
        product.unit = unit;
    }
    let updated_name = product.name.clone();
    store::save_lists(store, &lists)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product updated: {updated_name}"
    )));
    result.lists.push(lists[list_index].clone());
    Ok(result)
}
