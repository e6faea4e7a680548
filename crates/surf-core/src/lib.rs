//! # Surf Core
//!
//! Core library for the surf journal: a sorted, live view over persisted
//! surf sessions and a CSV export of all of them.
//!
//! This crate holds the domain logic and storage abstractions independent
//! of any presentation layer.
//!
//! ## Architecture
//!
//! - **storage**: `JournalStore` trait, entry types, SQLite backend
//! - **list**: `ListSynchronizer`, the newest-first view kept in step with the store
//! - **export**: `ExportPipeline`, background CSV export
//! - **draft**: copy-on-edit drafts committed back into the store
//! - **dispatch**: the interactive-thread queue store callbacks and exports report to

pub mod dispatch;
pub mod draft;
pub mod error;
pub mod export;
pub mod fs;
pub mod list;
pub mod storage;

pub use dispatch::{InteractiveQueue, QueueHandle};
pub use draft::{DraftCommit, EntryDraft};
pub use error::{Result, SurfError};
pub use export::{ExportOutcome, ExportPipeline, ExportReport, ExportState};
pub use list::{IndexPath, ListSynchronizer, ViewObserver};
pub use storage::{JournalStore, SqliteJournalStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
