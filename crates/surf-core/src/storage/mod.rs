//! Storage abstraction for the surf journal.
//!
//! This module defines the `JournalStore` trait and core types for
//! interacting with persisted journal entries.
//!
//! ## Architecture
//!
//! The list view and the export pipeline only ever see `dyn JournalStore`:
//! - SQLite (`SqliteJournalStore`) is the shipped backend
//! - Tests substitute their own stores to inject failures
//!
//! Stores are responsible for:
//! - Their own locking (shared by the interactive and export threads)
//! - Newest-first ordering for every query
//! - Notifying observers after each committed change

pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export public types
pub use sqlite::SqliteJournalStore;
pub use traits::{JournalStore, StoreObserver, SubscriptionId};
pub use types::{
    EntryQuery, JournalEntry, NewJournalEntry, StoreChange, LIST_BATCH_SIZE, MAX_RATING,
};
