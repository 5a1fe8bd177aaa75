//! # Storage Layer
//!
//! This module defines the storage abstraction for cartz. The
//! [`KeyValueStore`] trait allows the application to work with different
//! storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (database, mobile key-value store, etc.)
//!   without changing core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! The backend is deliberately dumb: it maps string keys to string
//! values and knows nothing about lists or products. All structure lives
//! in the serialization functions below, which read and write the whole
//! collection as one JSON value under the single key [`LISTS_KEY`].
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data-dir>/
//! └── lists.json          # JSON array of all lists, active + archived
//! ```
//!
//! There is no schema versioning and no partial write: every mutation
//! rewrites the full array.

use crate::error::Result;
use crate::model::List;

pub mod fs;
pub mod memory;

/// The single key the whole list collection lives under.
pub const LISTS_KEY: &str = "lists";

/// Abstract interface over an external string-keyed persistent store.
///
/// Both operations may fail; `get` distinguishes absence (`Ok(None)`)
/// from failure (`Err`).
pub trait KeyValueStore {
    /// Read the raw serialized value for a key, if present.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write the raw serialized value for a key.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Loads the full list collection.
///
/// An absent key is the designated default: the empty collection. Text
/// that fails to parse is an error, treated by callers exactly like an
/// unreadable store; there is no partial recovery of malformed data.
pub fn load_lists<S: KeyValueStore>(store: &S) -> Result<Vec<List>> {
    match store.get(LISTS_KEY)? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(Vec::new()),
    }
}

/// Serializes the full collection and writes it under [`LISTS_KEY`] as
/// one value. There are no incremental writes.
pub fn save_lists<S: KeyValueStore>(store: &mut S, lists: &[List]) -> Result<()> {
    let raw = serde_json::to_string_pretty(lists)?;
    store.set(LISTS_KEY, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::List;
    use memory::InMemoryStore;

    #[test]
    fn absent_key_loads_as_empty_collection() {
        let store = InMemoryStore::new();
        assert_eq!(load_lists(&store).unwrap(), Vec::new());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = InMemoryStore::new();
        let lists = vec![List::new("Groceries".into()), {
            let mut hardware = List::new("Hardware".into());
            hardware.archived = true;
            hardware
        }];

        save_lists(&mut store, &lists).unwrap();
        assert_eq!(load_lists(&store).unwrap(), lists);
    }

    #[test]
    fn corrupt_value_is_an_error_not_a_default() {
        let mut store = InMemoryStore::new();
        store.set(LISTS_KEY, "not json at all").unwrap();
        assert!(load_lists(&store).is_err());
    }
}
