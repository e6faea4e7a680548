//! Copy-on-edit drafts of journal entries.
//!
//! A draft is a private copy of an entry. Nothing reaches the store until
//! [`EntryDraft::commit`]; dropping or discarding a draft leaves the store
//! untouched.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{Result, SurfError};
use crate::storage::{JournalEntry, JournalStore, NewJournalEntry, MAX_RATING};

/// What a commit did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftCommit {
    /// The draft matched the stored entry; nothing was written.
    Unchanged,
    Updated(Uuid),
    Inserted(Uuid),
}

/// Isolated, discardable copy of an entry being edited.
pub struct EntryDraft {
    store: Arc<dyn JournalStore>,
    original: Option<JournalEntry>,
    entry: JournalEntry,
}

impl EntryDraft {
    /// Draft an edit of the stored entry `id`.
    ///
    /// # Errors
    ///
    /// Returns `SurfError::NotFound` if the entry does not exist.
    pub fn edit(store: Arc<dyn JournalStore>, id: &Uuid) -> Result<Self> {
        let entry = store
            .get(id)?
            .ok_or_else(|| SurfError::NotFound(format!("Entry {} not found", id)))?;
        Ok(Self::from_entry(store, entry))
    }

    /// Draft an edit starting from an entry the caller already holds.
    pub fn from_entry(store: Arc<dyn JournalStore>, entry: JournalEntry) -> Self {
        Self {
            store,
            original: Some(entry.clone()),
            entry,
        }
    }

    /// Draft a brand-new entry dated `date`.
    pub fn new_entry(store: Arc<dyn JournalStore>, date: DateTime<Utc>) -> Self {
        Self {
            store,
            original: None,
            entry: JournalEntry {
                id: Uuid::nil(),
                date,
                rating: None,
                height: None,
                period: None,
                wind: None,
                location: None,
                invalid_text: false,
            },
        }
    }

    /// The draft's current contents. New drafts carry a nil id.
    pub fn entry(&self) -> &JournalEntry {
        &self.entry
    }

    /// Whether committing would write anything.
    pub fn has_changes(&self) -> bool {
        match &self.original {
            Some(original) => *original != self.entry,
            None => true,
        }
    }

    pub fn set_date(&mut self, date: DateTime<Utc>) {
        self.entry.date = date;
    }

    /// Set or clear the rating.
    ///
    /// # Errors
    ///
    /// Returns `SurfError::Validation` for ratings outside 1..=5.
    pub fn set_rating(&mut self, rating: Option<i32>) -> Result<()> {
        if let Some(value) = rating {
            if !(1..=MAX_RATING).contains(&value) {
                return Err(SurfError::Validation(format!(
                    "Rating must be between 1 and {} (got {})",
                    MAX_RATING, value
                )));
            }
        }
        self.entry.rating = rating;
        Ok(())
    }

    pub fn set_height(&mut self, height: Option<String>) {
        self.entry.height = height;
    }

    pub fn set_period(&mut self, period: Option<String>) {
        self.entry.period = period;
    }

    pub fn set_wind(&mut self, wind: Option<String>) {
        self.entry.wind = wind;
    }

    pub fn set_location(&mut self, location: Option<String>) {
        self.entry.location = location;
    }

    /// Merge the draft into the store.
    ///
    /// # Errors
    ///
    /// Returns `SurfError::Persist` if the store rejects the write.
    pub fn commit(self) -> Result<DraftCommit> {
        if !self.has_changes() {
            return Ok(DraftCommit::Unchanged);
        }

        if self.original.is_some() {
            self.store
                .update(&self.entry)
                .map_err(SurfError::into_persist)?;
            return Ok(DraftCommit::Updated(self.entry.id));
        }

        let new_entry = NewJournalEntry {
            date: self.entry.date,
            rating: self.entry.rating,
            height: self.entry.height,
            period: self.entry.period,
            wind: self.entry.wind,
            location: self.entry.location,
        };
        let id = self
            .store
            .insert(&new_entry)
            .map_err(SurfError::into_persist)?;
        Ok(DraftCommit::Inserted(id))
    }

    /// Throw the draft away.
    pub fn discard(self) {}
}
