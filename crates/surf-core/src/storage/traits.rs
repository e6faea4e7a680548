//! Journal store trait definition.
//!
//! The `JournalStore` trait is the persistence collaborator the list view and
//! the export pipeline are written against. Callers receive a store by
//! injection and never construct a backend themselves.

use uuid::Uuid;

use super::types::{EntryQuery, JournalEntry, NewJournalEntry, StoreChange};
use crate::error::Result;

/// Receives committed mutations from a store.
///
/// Observers are invoked on whatever thread committed the change. Anything
/// that touches caller-visible state must hop to the interactive queue first.
pub trait StoreObserver: Send + Sync {
    fn store_changed(&self, change: StoreChange);
}

impl<F> StoreObserver for F
where
    F: Fn(StoreChange) + Send + Sync,
{
    fn store_changed(&self, change: StoreChange) {
        self(change)
    }
}

/// Handle returned by [`JournalStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Persistence interface for journal entries.
///
/// Implementations must:
/// - Serialize concurrent access internally (the store is shared between the
///   interactive thread and the export thread)
/// - Return entries newest first for every [`EntryQuery`]
/// - Notify observers only after a change has been committed
pub trait JournalStore: Send + Sync {
    /// Fetch every entry, newest first.
    ///
    /// # Errors
    ///
    /// Returns `SurfError::Fetch` if the query cannot be executed.
    fn fetch(&self, query: &EntryQuery) -> Result<Vec<JournalEntry>>;

    /// Get an entry by ID.
    ///
    /// Returns `Ok(None)` if no such entry exists.
    fn get(&self, id: &Uuid) -> Result<Option<JournalEntry>>;

    /// Insert a new entry and commit it.
    ///
    /// # Returns
    ///
    /// Returns the UUID of the created entry.
    fn insert(&self, entry: &NewJournalEntry) -> Result<Uuid>;

    /// Replace the stored fields of an existing entry and commit.
    ///
    /// # Errors
    ///
    /// Returns `SurfError::NotFound` if the entry does not exist.
    fn update(&self, entry: &JournalEntry) -> Result<()>;

    /// Stage the removal of an entry.
    ///
    /// The removal is not visible to queries until [`JournalStore::save`]
    /// commits it.
    fn delete(&self, id: &Uuid) -> Result<()>;

    /// Commit staged changes.
    ///
    /// Saving with nothing staged is a no-op and notifies nobody.
    fn save(&self) -> Result<()>;

    /// Register an observer for committed changes.
    fn subscribe(&self, observer: Box<dyn StoreObserver>) -> SubscriptionId;

    /// Remove a previously registered observer.
    fn unsubscribe(&self, id: SubscriptionId);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_trait_is_object_safe() {
        fn _accepts_store(_store: Arc<dyn JournalStore>) {}
    }

    #[test]
    fn test_closure_observer() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let observer: Box<dyn StoreObserver> = Box::new(move |_change: StoreChange| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        observer.store_changed(StoreChange::Deleted(Uuid::new_v4()));
        observer.store_changed(StoreChange::Inserted(Uuid::new_v4()));

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
