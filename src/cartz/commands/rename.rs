use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{self, KeyValueStore};

use super::helpers::find_list_index;

/// Renames a list in place. Silent no-op when the id is absent: callers
/// are expected to have validated existence via a prior read.
pub fn run<S: KeyValueStore>(store: &mut S, id: u32, new_name: String) -> Result<CmdResult> {
    let mut lists = store::load_lists(store)?;

    let Some(index) = find_list_index(&lists, id) else {
        return Ok(CmdResult::default());
    };

    lists[index].name = new_name;
    store::save_lists(store, &lists)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "List renamed: {}",
        lists[index].name
    )));
    result.lists.push(lists[index].clone());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::model::List;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn renames_the_matching_list_only() {
        let mut store = InMemoryStore::new();
        let groceries = List::new("Groceries".into());
        let hardware = List::new("Hardware".into());
        create::run(&mut store, groceries.clone()).unwrap();
        create::run(&mut store, hardware.clone()).unwrap();

        run(&mut store, groceries.id, "Weekend shop".into()).unwrap();

        let lists = crate::store::load_lists(&store).unwrap();
        assert_eq!(lists[0].name, "Weekend shop");
        assert_eq!(lists[1].name, "Hardware");
    }

    #[test]
    fn missing_id_leaves_the_collection_unchanged() {
        let mut store = InMemoryStore::new();
        let groceries = List::new("Groceries".into());
        create::run(&mut store, groceries.clone()).unwrap();

        let result = run(&mut store, 999_999_999, "Nope".into()).unwrap();
        assert!(result.lists.is_empty());
        assert!(result.messages.is_empty());

        let lists = crate::store::load_lists(&store).unwrap();
        assert_eq!(lists, vec![groceries]);
    }
}
