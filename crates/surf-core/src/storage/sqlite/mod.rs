//! SQLite storage backend.
//!
//! Entries live in a single `entries` table. The connection sits behind a
//! mutex so the store can be shared between the interactive thread and the
//! export thread. Deletions are staged and only hit the database on `save`;
//! inserts and updates commit immediately.

mod row;

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;
use uuid::Uuid;

use crate::error::{Result, SurfError};
use crate::storage::traits::{JournalStore, StoreObserver, SubscriptionId};
use crate::storage::types::{EntryQuery, JournalEntry, NewJournalEntry, StoreChange};

use row::{EntryRow, ENTRY_COLUMNS};

/// Current on-disk format version, stored in the `meta` table.
pub const FORMAT_VERSION: &str = "0.1";

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS meta (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS entries (
        id TEXT PRIMARY KEY,
        date TEXT NOT NULL,
        rating INTEGER,
        height TEXT,
        period TEXT,
        wind TEXT,
        location TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_entries_date ON entries(date DESC);
"#;

type ObserverList = Vec<(SubscriptionId, Arc<dyn StoreObserver>)>;

/// SQLite-backed journal store.
pub struct SqliteJournalStore {
    conn: Mutex<Connection>,
    pending_deletes: Mutex<Vec<Uuid>>,
    observers: Mutex<ObserverList>,
    next_subscription: AtomicU64,
}

impl SqliteJournalStore {
    /// Open (or create) a journal database at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Open a private in-memory journal.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        let now = timestamp(&Utc::now());
        conn.execute(
            "INSERT OR IGNORE INTO meta (key, value) VALUES ('format_version', ?1), ('created_at', ?2), ('last_modified', ?2)",
            params![FORMAT_VERSION, now],
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
            pending_deletes: Mutex::new(Vec::new()),
            observers: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(1),
        })
    }

    /// Lock the database connection, returning an error if the mutex is poisoned.
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| SurfError::Storage("SQLite connection poisoned".to_string()))
    }

    fn lock_pending(&self) -> Result<MutexGuard<'_, Vec<Uuid>>> {
        self.pending_deletes
            .lock()
            .map_err(|_| SurfError::Storage("Pending delete list poisoned".to_string()))
    }

    fn notify(&self, changes: &[StoreChange]) {
        if changes.is_empty() {
            return;
        }
        // Snapshot the observers so callbacks may subscribe/unsubscribe.
        let observers: Vec<Arc<dyn StoreObserver>> = match self.observers.lock() {
            Ok(guard) => guard.iter().map(|(_, observer)| Arc::clone(observer)).collect(),
            Err(poisoned) => poisoned
                .into_inner()
                .iter()
                .map(|(_, observer)| Arc::clone(observer))
                .collect(),
        };
        for change in changes {
            for observer in &observers {
                observer.store_changed(*change);
            }
        }
    }

    fn fetch_rows(conn: &Connection, query: &EntryQuery) -> rusqlite::Result<Vec<EntryRow>> {
        let base = format!(
            "SELECT {} FROM entries ORDER BY date DESC, rowid DESC",
            ENTRY_COLUMNS
        );

        let Some(batch) = query.batch_size.filter(|size| *size > 0) else {
            let mut stmt = conn.prepare(&base)?;
            let rows = stmt
                .query_map([], EntryRow::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            return Ok(rows);
        };

        let mut stmt = conn.prepare(&format!("{} LIMIT ?1 OFFSET ?2", base))?;
        let mut rows = Vec::new();
        loop {
            let offset = rows.len() as i64;
            let page = stmt
                .query_map(params![batch as i64, offset], EntryRow::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            let page_len = page.len();
            rows.extend(page);
            if page_len < batch {
                break;
            }
        }
        Ok(rows)
    }

    /// Number of stored entries.
    pub fn count(&self) -> Result<usize> {
        let conn = self.lock_conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Last time a change was committed.
    pub fn last_modified(&self) -> Result<DateTime<Utc>> {
        let conn = self.lock_conn()?;
        let raw: String = conn.query_row(
            "SELECT value FROM meta WHERE key = 'last_modified'",
            [],
            |row| row.get(0),
        )?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|value| value.with_timezone(&Utc))
            .map_err(|e| SurfError::Storage(format!("Invalid timestamp: {}", e)))
    }

    /// Check database integrity.
    ///
    /// Runs SQLite's own integrity check and verifies every row parses.
    pub fn check_integrity(&self) -> Result<()> {
        let conn = self.lock_conn()?;
        let result: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
        if result != "ok" {
            return Err(SurfError::Storage(format!(
                "Integrity check failed: {}",
                result
            )));
        }

        for row in Self::fetch_rows(&conn, &EntryQuery::all())? {
            JournalEntry::try_from(row)?;
        }
        Ok(())
    }
}

impl JournalStore for SqliteJournalStore {
    fn fetch(&self, query: &EntryQuery) -> Result<Vec<JournalEntry>> {
        let conn = self.lock_conn()?;
        let rows = Self::fetch_rows(&conn, query)
            .map_err(|e| SurfError::Fetch(format!("Entry query failed: {}", e)))?;
        rows.into_iter().map(JournalEntry::try_from).collect()
    }

    fn get(&self, id: &Uuid) -> Result<Option<JournalEntry>> {
        let conn = self.lock_conn()?;
        let row = conn
            .query_row(
                &format!("SELECT {} FROM entries WHERE id = ?1", ENTRY_COLUMNS),
                [id.to_string()],
                EntryRow::from_row,
            )
            .optional()?;
        row.map(JournalEntry::try_from).transpose()
    }

    fn insert(&self, entry: &NewJournalEntry) -> Result<Uuid> {
        let id = Uuid::new_v4();
        {
            let mut conn = self.lock_conn()?;
            let tx = conn.transaction()?;
            tx.execute(
                "INSERT INTO entries (id, date, rating, height, period, wind, location) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    id.to_string(),
                    timestamp(&entry.date),
                    entry.rating,
                    entry.height,
                    entry.period,
                    entry.wind,
                    entry.location,
                ],
            )?;
            touch_last_modified(&tx)?;
            tx.commit()?;
        }

        debug!(entry_id = %id, "inserted journal entry");
        self.notify(&[StoreChange::Inserted(id)]);
        Ok(id)
    }

    fn update(&self, entry: &JournalEntry) -> Result<()> {
        {
            let mut conn = self.lock_conn()?;
            let tx = conn.transaction()?;
            let updated = tx.execute(
                "UPDATE entries SET date = ?2, rating = ?3, height = ?4, period = ?5, wind = ?6, location = ?7 WHERE id = ?1",
                params![
                    entry.id.to_string(),
                    timestamp(&entry.date),
                    entry.rating,
                    entry.height,
                    entry.period,
                    entry.wind,
                    entry.location,
                ],
            )?;
            if updated == 0 {
                return Err(SurfError::NotFound(format!("Entry {} not found", entry.id)));
            }
            touch_last_modified(&tx)?;
            tx.commit()?;
        }

        debug!(entry_id = %entry.id, "updated journal entry");
        self.notify(&[StoreChange::Updated(entry.id)]);
        Ok(())
    }

    fn delete(&self, id: &Uuid) -> Result<()> {
        let exists: Option<String> = self
            .lock_conn()?
            .query_row(
                "SELECT id FROM entries WHERE id = ?1",
                [id.to_string()],
                |row| row.get(0),
            )
            .optional()?;
        if exists.is_none() {
            return Err(SurfError::NotFound(format!("Entry {} not found", id)));
        }

        let mut pending = self.lock_pending()?;
        if !pending.contains(id) {
            pending.push(*id);
        }
        Ok(())
    }

    fn save(&self) -> Result<()> {
        let staged: Vec<Uuid> = std::mem::take(&mut *self.lock_pending()?);
        if staged.is_empty() {
            return Ok(());
        }

        let mut changes = Vec::with_capacity(staged.len());
        {
            let mut conn = self.lock_conn()?;
            let tx = conn.transaction()?;
            for id in &staged {
                let removed = tx.execute("DELETE FROM entries WHERE id = ?1", [id.to_string()])?;
                if removed > 0 {
                    changes.push(StoreChange::Deleted(*id));
                }
            }
            touch_last_modified(&tx)?;
            tx.commit()?;
        }

        debug!(deleted = changes.len(), "saved staged deletions");
        self.notify(&changes);
        Ok(())
    }

    fn subscribe(&self, observer: Box<dyn StoreObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        let observer: Arc<dyn StoreObserver> = Arc::from(observer);
        match self.observers.lock() {
            Ok(mut guard) => guard.push((id, observer)),
            Err(poisoned) => poisoned.into_inner().push((id, observer)),
        }
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        match self.observers.lock() {
            Ok(mut guard) => guard.retain(|(existing, _)| *existing != id),
            Err(poisoned) => poisoned.into_inner().retain(|(existing, _)| *existing != id),
        }
    }
}

/// Fixed-width RFC 3339 so lexical order in SQLite matches time order.
fn timestamp(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn touch_last_modified(conn: &Connection) -> rusqlite::Result<usize> {
    conn.execute(
        "UPDATE meta SET value = ?1 WHERE key = 'last_modified'",
        [timestamp(&Utc::now())],
    )
}
