use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{self, KeyValueStore};

use super::helpers::find_list_index;

/// Removes a list from the collection. Deletion is terminal; the order
/// of the surviving lists is preserved. Silent no-op when absent.
pub fn run<S: KeyValueStore>(store: &mut S, id: u32) -> Result<CmdResult> {
    let mut lists = store::load_lists(store)?;

    let Some(index) = find_list_index(&lists, id) else {
        return Ok(CmdResult::default());
    };

    let removed = lists.remove(index);
    store::save_lists(store, &lists)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "List deleted: {}",
        removed.name
    )));
    result.lists.push(removed);
    Ok(result)
}
