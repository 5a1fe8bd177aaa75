//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for all cartz operations, regardless of the UI
//! being used.
//!
//! ## The Fail-Soft Contract
//!
//! Callers of the facade never see a `Result`. Every operation either
//! returns the declared value or signals failure through the injected
//! [`Notifier`] and returns a safe default:
//!
//! - listings fall back to the empty collection
//! - single-list lookups fall back to [`List::default()`]
//! - mutations become no-ops, and the persisted collection is unchanged
//!   since the last successful write
//!
//! Entity-not-found is *not* a failure: the command layer treats it as a
//! silent no-op, and no notification is emitted.
//!
//! ## Generic Over KeyValueStore
//!
//! `CartzApi<S, N>` is generic over the storage backend and the
//! notification sink:
//! - Production: `CartzApi<FileStore, TerminalNotifier>`
//! - Testing: `CartzApi<InMemoryStore, SilentNotifier>`
//!
//! Reads take `&self`, mutations `&mut self`. The exclusive borrow is
//! what serializes mutations within a process; the lost-update race
//! inherent to read-whole/write-whole persistence is otherwise accepted,
//! not defended against.

use crate::commands::{self, CmdResult, MessageLevel, ProductPatch};
use crate::error::Result;
use crate::model::{List, Product};
use crate::notify::Notifier;
use crate::store::KeyValueStore;

pub use crate::commands::get::ListFilter;

/// The main API facade for cartz operations.
///
/// All UI clients (CLI, mobile shell, etc.) should interact through this
/// API.
pub struct CartzApi<S: KeyValueStore, N: Notifier> {
    store: S,
    notifier: N,
}

impl<S: KeyValueStore, N: Notifier> CartzApi<S, N> {
    pub fn new(store: S, notifier: N) -> Self {
        Self { store, notifier }
    }

    /* ------------------------- Lists ------------------------- */

    pub fn get_all_lists(&self) -> Vec<List> {
        self.read(commands::get::run(&self.store, ListFilter::All))
    }

    pub fn get_active_lists(&self) -> Vec<List> {
        self.read(commands::get::run(&self.store, ListFilter::Active))
    }

    pub fn get_archived_lists(&self) -> Vec<List> {
        self.read(commands::get::run(&self.store, ListFilter::Archived))
    }

    /// Resolves one list by id, falling back to the default empty list
    /// when the id is absent or the store is unreadable.
    pub fn get_list(&self, id: u32) -> List {
        match commands::get::find(&self.store, id) {
            Ok(Some(list)) => list,
            Ok(None) => List::default(),
            Err(e) => {
                self.notifier.error(&e.to_string());
                List::default()
            }
        }
    }

    pub fn create_list(&mut self, list: List) {
        let outcome = commands::create::run(&mut self.store, list);
        self.report(outcome);
    }

    pub fn rename_list(&mut self, id: u32, new_name: String) {
        let outcome = commands::rename::run(&mut self.store, id, new_name);
        self.report(outcome);
    }

    pub fn delete_list(&mut self, id: u32) {
        let outcome = commands::delete::run(&mut self.store, id);
        self.report(outcome);
    }

    pub fn archive_list(&mut self, id: u32) {
        let outcome = commands::archive::archive(&mut self.store, id);
        self.report(outcome);
    }

    pub fn restore_list(&mut self, id: u32) {
        let outcome = commands::archive::restore(&mut self.store, id);
        self.report(outcome);
    }

    /* ------------------------- Products ------------------------- */

    pub fn add_product(&mut self, product: Product, list_id: u32) {
        let outcome = commands::add_product::run(&mut self.store, product, list_id);
        self.report(outcome);
    }

    pub fn remove_product(&mut self, name: &str, list_id: u32) {
        let outcome = commands::remove_product::run(&mut self.store, name, list_id);
        self.report(outcome);
    }

    pub fn purchase_product(&mut self, name: &str, list_id: u32) {
        let outcome = commands::purchase::run(&mut self.store, name, list_id);
        self.report(outcome);
    }

    pub fn update_product(&mut self, name: &str, list_id: u32, patch: ProductPatch) {
        let outcome = commands::update_product::run(&mut self.store, name, list_id, patch);
        self.report(outcome);
    }

    /* ------------------------- Plumbing ------------------------- */

    fn read(&self, outcome: Result<CmdResult>) -> Vec<List> {
        match outcome {
            Ok(result) => result.lists,
            Err(e) => {
                self.notifier.error(&e.to_string());
                Vec::new()
            }
        }
    }

    /// Routes a mutation outcome to the notifier: command messages on
    /// success, the error text on failure. Either way the caller gets
    /// nothing back; a failed mutation did not happen.
    fn report(&self, outcome: Result<CmdResult>) {
        match outcome {
            Ok(result) => {
                for message in &result.messages {
                    match message.level {
                        MessageLevel::Error => self.notifier.error(&message.content),
                        _ => self.notifier.success(&message.content),
                    }
                }
            }
            Err(e) => self.notifier.error(&e.to_string()),
        }
    }
}
