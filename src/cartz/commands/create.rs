use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CartzError, Result};
use crate::model::List;
use crate::store::{self, KeyValueStore};

use super::helpers::find_list_index;

/// Appends a new list to the collection and persists it.
///
/// The 6-digit ids are only practically unlikely to collide, so an id
/// already present in the collection is rejected here rather than left
/// to shadow the existing list forever.
pub fn run<S: KeyValueStore>(store: &mut S, list: List) -> Result<CmdResult> {
    let mut lists = store::load_lists(store)?;

    if find_list_index(&lists, list.id).is_some() {
        return Err(CartzError::DuplicateListId(list.id));
    }

    lists.push(list.clone());
    store::save_lists(store, &lists)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("List created: {}", list.name)));
    result.lists.push(list);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn creation_appends_at_the_end() {
        let mut store = InMemoryStore::new();
        let first = List::new("Groceries".into());
        let second = List::new("Hardware".into());

        run(&mut store, first.clone()).unwrap();
        run(&mut store, second.clone()).unwrap();

        let lists = crate::store::load_lists(&store).unwrap();
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[1], second);
        assert_eq!(lists[1].id, second.id);
    }

    #[test]
    fn duplicate_id_is_rejected_and_nothing_is_written() {
        let mut store = InMemoryStore::new();
        let list = List::new("Groceries".into());
        run(&mut store, list.clone()).unwrap();

        let mut clash = List::new("Other".into());
        clash.id = list.id;
        assert!(matches!(
            run(&mut store, clash),
            Err(CartzError::DuplicateListId(_))
        ));

        let lists = crate::store::load_lists(&store).unwrap();
        assert_eq!(lists, vec![list]);
    }
}
