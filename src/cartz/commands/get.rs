use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::List;
use crate::store::{self, KeyValueStore};

use super::helpers::find_list_index;

/// Which slice of the collection a listing wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFilter {
    #[default]
    All,
    Active,
    Archived,
}

impl ListFilter {
    fn keeps(self, list: &List) -> bool {
        match self {
            ListFilter::All => true,
            ListFilter::Active => !list.archived,
            ListFilter::Archived => list.archived,
        }
    }
}

pub fn run<S: KeyValueStore>(store: &S, filter: ListFilter) -> Result<CmdResult> {
    let lists = store::load_lists(store)?;
    let kept: Vec<List> = lists.into_iter().filter(|l| filter.keeps(l)).collect();
    Ok(CmdResult::default().with_lists(kept))
}

/// Resolves one list by id. `Ok(None)` when absent; the facade turns
/// that into the default list.
pub fn find<S: KeyValueStore>(store: &S, id: u32) -> Result<Option<List>> {
    let lists = store::load_lists(store)?;
    Ok(find_list_index(&lists, id).map(|index| lists[index].clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{archive, create};
    use crate::store::memory::InMemoryStore;

    fn seeded_store() -> (InMemoryStore, List, List) {
        let mut store = InMemoryStore::new();
        let groceries = List::new("Groceries".into());
        let hardware = List::new("Hardware".into());
        create::run(&mut store, groceries.clone()).unwrap();
        create::run(&mut store, hardware.clone()).unwrap();
        archive::archive(&mut store, hardware.id).unwrap();
        (store, groceries, hardware)
    }

    #[test]
    fn filters_partition_the_collection() {
        let (store, groceries, hardware) = seeded_store();

        let all = run(&store, ListFilter::All).unwrap().lists;
        let active = run(&store, ListFilter::Active).unwrap().lists;
        let archived = run(&store, ListFilter::Archived).unwrap().lists;

        assert_eq!(all.len(), 2);
        assert_eq!(active.len(), 1);
        assert_eq!(archived.len(), 1);
        assert_eq!(active[0].id, groceries.id);
        assert_eq!(archived[0].id, hardware.id);
        assert_eq!(active.len() + archived.len(), all.len());
    }

    #[test]
    fn find_resolves_by_id() {
        let (store, groceries, _) = seeded_store();
        assert_eq!(find(&store, groceries.id).unwrap().unwrap().name, "Groceries");
        assert_eq!(find(&store, 1).unwrap(), None);
    }
}
