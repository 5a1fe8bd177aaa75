//! # Cartz Architecture
//!
//! Cartz is a **UI-agnostic shopping-list library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Implements the fail-soft contract: failures go to the    │
//! │    injected Notifier, callers get safe defaults back        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over the list collection             │
//! │  - Operates on Rust types, returns Result types             │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract KeyValueStore trait                             │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! │  - One key ("lists") holds the whole collection as JSON     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence Model
//!
//! The entire working set is one ordered `Vec<List>` serialized under a
//! single key. Every mutation is read-whole → modify-in-memory →
//! write-whole; there are no partial writes. Two mutations issued without
//! awaiting the first would be a lost-update race, which is why the API
//! facade takes `&mut self` for every mutation: within a process the
//! borrow checker serializes them. Cross-process access is not guarded.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! User-facing alerting happens through the [`notify::Notifier`] trait
//! supplied by the composition root, never through global state.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction, serialization, and backends
//! - [`model`]: Core data types (`List`, `Product`, `Category`)
//! - [`catalog`]: The static product-category catalog
//! - [`notify`]: The injected notification sink
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod error;
pub mod model;
pub mod notify;
pub mod store;
