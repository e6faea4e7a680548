#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use surf_core::storage::{
    EntryQuery, JournalEntry, JournalStore, NewJournalEntry, SqliteJournalStore, StoreObserver,
    SubscriptionId,
};
use surf_core::{InteractiveQueue, Result, SurfError};

pub const WAIT: Duration = Duration::from_secs(10);

pub fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 7, 0, 0).unwrap()
}

/// In-memory SQLite store wrapped so tests can make individual calls fail
/// or block.
pub struct FaultyStore {
    inner: SqliteJournalStore,
    fail_fetch: AtomicBool,
    fail_save: AtomicBool,
    gate: Mutex<Option<Receiver<()>>>,
}

impl FaultyStore {
    pub fn new() -> Self {
        Self {
            inner: SqliteJournalStore::open_in_memory().unwrap(),
            fail_fetch: AtomicBool::new(false),
            fail_save: AtomicBool::new(false),
            gate: Mutex::new(None),
        }
    }

    pub fn fail_fetch(&self, fail: bool) {
        self.fail_fetch.store(fail, Ordering::SeqCst);
    }

    pub fn fail_save(&self, fail: bool) {
        self.fail_save.store(fail, Ordering::SeqCst);
    }

    /// Make the next fetch block until the returned sender fires.
    pub fn hold_next_fetch(&self) -> Sender<()> {
        let (tx, rx) = mpsc::channel();
        *self.gate.lock().unwrap() = Some(rx);
        tx
    }

    pub fn add(&self, entry: NewJournalEntry) -> Uuid {
        self.inner.insert(&entry).unwrap()
    }
}

impl JournalStore for FaultyStore {
    fn fetch(&self, query: &EntryQuery) -> Result<Vec<JournalEntry>> {
        let gate = self.gate.lock().unwrap().take();
        if let Some(gate) = gate {
            let _ = gate.recv_timeout(WAIT);
        }
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(SurfError::Fetch("injected fetch failure".to_string()));
        }
        self.inner.fetch(query)
    }

    fn get(&self, id: &Uuid) -> Result<Option<JournalEntry>> {
        self.inner.get(id)
    }

    fn insert(&self, entry: &NewJournalEntry) -> Result<Uuid> {
        self.inner.insert(entry)
    }

    fn update(&self, entry: &JournalEntry) -> Result<()> {
        self.inner.update(entry)
    }

    fn delete(&self, id: &Uuid) -> Result<()> {
        self.inner.delete(id)
    }

    fn save(&self) -> Result<()> {
        if self.fail_save.load(Ordering::SeqCst) {
            return Err(SurfError::Storage("injected save failure".to_string()));
        }
        self.inner.save()
    }

    fn subscribe(&self, observer: Box<dyn StoreObserver>) -> SubscriptionId {
        self.inner.subscribe(observer)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.unsubscribe(id)
    }
}

/// Store seeded with the 2024-01-03 / 01-01 / 01-05 scenario.
pub fn scenario_store() -> Arc<FaultyStore> {
    let store = Arc::new(FaultyStore::new());
    store.add(
        NewJournalEntry::new(date(2024, 1, 3))
            .with_rating(2)
            .with_height("3-4ft")
            .with_location("Ocean Beach"),
    );
    store.add(NewJournalEntry::new(date(2024, 1, 1)).with_location("Linda Mar"));
    store.add(
        NewJournalEntry::new(date(2024, 1, 5))
            .with_rating(5)
            .with_period("14s")
            .with_wind("offshore")
            .with_location("Mavericks"),
    );
    store
}

/// Drain `queue` until `done` reports true or the wait budget runs out.
pub fn drain_until(queue: &InteractiveQueue, done: impl Fn() -> bool) {
    let deadline = std::time::Instant::now() + WAIT;
    while !done() {
        assert!(
            std::time::Instant::now() < deadline,
            "timed out waiting on the interactive queue"
        );
        queue.wait_one(Duration::from_millis(50));
    }
}
