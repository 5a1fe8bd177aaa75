use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{self, KeyValueStore};

use super::helpers::{find_list_index, find_product_index};

/// Removes a product from a list by name. Silent no-op when either the
/// list or the product is absent.
pub fn run<S: KeyValueStore>(store: &mut S, name: &str, list_id: u32) -> Result<CmdResult> {
    let mut lists = store::load_lists(store)?;

    let Some(list_index) = find_list_index(&lists, list_id) else {
        return Ok(CmdResult::default());
    };
    let Some(product_index) = find_product_index(&lists[list_index], name) else {
        return Ok(CmdResult::default());
    };

    let removed = lists[list_index].products.remove(product_index);
    store::save_lists(store, &lists)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product removed: {}",
        removed.name
    )));
    result.lists.push(lists[list_index].clone());
    Ok(result)
}
