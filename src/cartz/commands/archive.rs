use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{self, KeyValueStore};

use super::helpers::find_list_index;

/// Moves a list into the archived partition. Idempotent.
pub fn archive<S: KeyValueStore>(store: &mut S, id: u32) -> Result<CmdResult> {
    set_archived(store, id, true)
}

/// Moves a list back into the active partition. Idempotent.
pub fn restore<S: KeyValueStore>(store: &mut S, id: u32) -> Result<CmdResult> {
    set_archived(store, id, false)
}

fn set_archived<S: KeyValueStore>(store: &mut S, id: u32, archived: bool) -> Result<CmdResult> {
    let mut lists = store::load_lists(store)?;

    let Some(index) = find_list_index(&lists, id) else {
        return Ok(CmdResult::default());
    };

    lists[index].archived = archived;
    store::save_lists(store, &lists)?;

    let verb = if archived { "archived" } else { "restored" };
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "List {}: {}",
        verb, lists[index].name
    )));
    result.lists.push(lists[index].clone());
    Ok(result)
}
