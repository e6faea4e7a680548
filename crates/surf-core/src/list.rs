//! Live, sorted view over every journal entry.
//!
//! `ListSynchronizer` keeps a newest-first snapshot of the store and reloads
//! it in full whenever the store reports a committed change. Reloads run on
//! the interactive queue, never on the thread that committed the change.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tracing::{debug, warn};

use crate::dispatch::QueueHandle;
use crate::draft::EntryDraft;
use crate::error::{Result, SurfError};
use crate::storage::{EntryQuery, JournalEntry, JournalStore, StoreChange, SubscriptionId};

/// Position of an entry in the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexPath {
    pub section: usize,
    pub row: usize,
}

impl IndexPath {
    pub fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }

    /// A row in the (only) first section.
    pub fn row(row: usize) -> Self {
        Self::new(0, row)
    }
}

/// Presentation-layer hook fired after every full reload.
pub trait ViewObserver: Send {
    fn view_changed(&self);
}

impl<F> ViewObserver for F
where
    F: Fn() + Send,
{
    fn view_changed(&self) {
        self()
    }
}

type SharedEntries = Arc<Mutex<Vec<JournalEntry>>>;
type SharedObserver = Arc<Mutex<Option<Box<dyn ViewObserver>>>>;

/// Ordered, single-section view of the journal, kept in step with the store.
pub struct ListSynchronizer {
    store: Arc<dyn JournalStore>,
    entries: SharedEntries,
    observer: SharedObserver,
    subscription: SubscriptionId,
}

impl ListSynchronizer {
    /// Load the view and start observing the store.
    ///
    /// # Errors
    ///
    /// Returns `SurfError::StartupConfiguration` if the initial query fails.
    /// That is a setup fault rather than a data condition; callers should
    /// not try to carry on without a view.
    pub fn initialize(store: Arc<dyn JournalStore>, queue: QueueHandle) -> Result<Self> {
        let initial = store
            .fetch(&EntryQuery::journal_list())
            .map_err(|e| SurfError::StartupConfiguration(e.to_string()))?;

        let entries: SharedEntries = Arc::new(Mutex::new(initial));
        let observer: SharedObserver = Arc::new(Mutex::new(None));
        let reload_queued = Arc::new(AtomicBool::new(false));

        let weak_store: Weak<dyn JournalStore> = Arc::downgrade(&store);
        let weak_entries = Arc::downgrade(&entries);
        let weak_observer = Arc::downgrade(&observer);

        let subscription = store.subscribe(Box::new(move |change: StoreChange| {
            debug!(entry_id = %change.entry_id(), "store changed");
            // Changes committed before the queue drains share one reload.
            if reload_queued.swap(true, Ordering::AcqRel) {
                return;
            }
            let store = weak_store.clone();
            let entries = weak_entries.clone();
            let observer = weak_observer.clone();
            let queued = Arc::clone(&reload_queued);
            let posted = queue.dispatch(move || {
                queued.store(false, Ordering::Release);
                reload(&store, &entries, &observer);
            });
            if !posted {
                reload_queued.store(false, Ordering::Release);
            }
        }));

        Ok(Self {
            store,
            entries,
            observer,
            subscription,
        })
    }

    /// Register the observer told about every reload, replacing any previous one.
    ///
    /// The observer runs on the interactive queue and may read the view, but
    /// must not call `set_observer` from inside the callback.
    pub fn set_observer(&self, observer: Box<dyn ViewObserver>) {
        *lock(&self.observer) = Some(observer);
    }

    /// Number of sections. The journal is one unsectioned list.
    pub fn section_count(&self) -> usize {
        1
    }

    /// Number of entries in `section`.
    pub fn item_count(&self, section: usize) -> usize {
        if section == 0 {
            lock(&self.entries).len()
        } else {
            0
        }
    }

    /// The entry at `path`.
    ///
    /// # Panics
    ///
    /// Panics if `path` lies outside the bounds last reported by
    /// `section_count`/`item_count`.
    pub fn entry(&self, path: IndexPath) -> JournalEntry {
        assert_eq!(path.section, 0, "journal view has a single section");
        lock(&self.entries)[path.row].clone()
    }

    /// Copy of the whole view, newest first.
    pub fn snapshot(&self) -> Vec<JournalEntry> {
        lock(&self.entries).clone()
    }

    /// Remove the entry at `path` from the store and commit before returning.
    ///
    /// The view itself catches up when the resulting change notification is
    /// run on the interactive queue.
    ///
    /// # Errors
    ///
    /// Returns `SurfError::Persist` if the deletion cannot be staged or saved.
    pub fn delete(&self, path: IndexPath) -> Result<()> {
        let entry = self.entry(path);
        self.store
            .delete(&entry.id)
            .and_then(|_| self.store.save())
            .map_err(SurfError::into_persist)
    }

    /// Open an isolated edit draft of the entry at `path`.
    pub fn draft(&self, path: IndexPath) -> EntryDraft {
        EntryDraft::from_entry(Arc::clone(&self.store), self.entry(path))
    }
}

impl Drop for ListSynchronizer {
    fn drop(&mut self) {
        self.store.unsubscribe(self.subscription);
    }
}

fn reload(
    store: &Weak<dyn JournalStore>,
    entries: &Weak<Mutex<Vec<JournalEntry>>>,
    observer: &Weak<Mutex<Option<Box<dyn ViewObserver>>>>,
) {
    let (Some(store), Some(entries), Some(observer)) =
        (store.upgrade(), entries.upgrade(), observer.upgrade())
    else {
        return;
    };

    match store.fetch(&EntryQuery::journal_list()) {
        Ok(fresh) => *lock(&entries) = fresh,
        Err(e) => {
            warn!(error = %e, "journal view reload failed; keeping previous view");
            return;
        }
    }

    let guard = lock(&observer);
    if let Some(observer) = guard.as_ref() {
        observer.view_changed();
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
