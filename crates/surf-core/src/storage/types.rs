//! Core data types for the storage layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Batch hint used by the journal list view.
pub const LIST_BATCH_SIZE: usize = 20;

/// Highest rating a surf session can be given.
pub const MAX_RATING: i32 = 5;

/// A surf journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique identifier for this entry
    pub id: Uuid,

    /// When the session happened; the sole sort key
    pub date: DateTime<Utc>,

    /// Session rating, meaningful in 1..=5
    pub rating: Option<i32>,

    /// Wave height
    pub height: Option<String>,

    /// Swell period
    pub period: Option<String>,

    /// Wind conditions
    pub wind: Option<String>,

    /// Surf spot
    pub location: Option<String>,

    /// Set when a stored text column held bytes that are not valid UTF-8.
    /// The text fields then carry a lossy decoding of those bytes.
    #[serde(skip)]
    pub invalid_text: bool,
}

impl JournalEntry {
    /// Short date text shown in the list and written to exports (`M/D/YY`).
    pub fn string_for_date(&self) -> String {
        self.date.format("%-m/%-d/%y").to_string()
    }

    /// Number of filled stars to show for this entry.
    ///
    /// Ratings outside 1..=5, and missing ratings, show no stars.
    pub fn star_count(&self) -> usize {
        match self.rating {
            Some(rating @ 1..=MAX_RATING) => rating as usize,
            _ => 0,
        }
    }

    /// Serialize this entry as one CSV line, including the trailing newline.
    ///
    /// Field order is `date,height,period,wind,location,rating`. Missing
    /// text fields and a missing rating are written as empty fields.
    pub fn csv(&self) -> String {
        let rating = self
            .rating
            .map(|rating| rating.to_string())
            .unwrap_or_default();
        let fields = [
            self.string_for_date(),
            csv_field(self.height.as_deref()),
            csv_field(self.period.as_deref()),
            csv_field(self.wind.as_deref()),
            csv_field(self.location.as_deref()),
            rating,
        ];
        let mut line = fields.join(",");
        line.push('\n');
        line
    }
}

/// Quote a field only when it contains a delimiter, quote or line break.
fn csv_field(value: Option<&str>) -> String {
    let value = value.unwrap_or_default();
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Builder for creating new entries.
#[derive(Debug, Clone)]
pub struct NewJournalEntry {
    pub date: DateTime<Utc>,
    pub rating: Option<i32>,
    pub height: Option<String>,
    pub period: Option<String>,
    pub wind: Option<String>,
    pub location: Option<String>,
}

impl NewJournalEntry {
    pub fn new(date: DateTime<Utc>) -> Self {
        Self {
            date,
            rating: None,
            height: None,
            period: None,
            wind: None,
            location: None,
        }
    }

    pub fn with_rating(mut self, rating: i32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_height(mut self, height: impl Into<String>) -> Self {
        self.height = Some(height.into());
        self
    }

    pub fn with_period(mut self, period: impl Into<String>) -> Self {
        self.period = Some(period.into());
        self
    }

    pub fn with_wind(mut self, wind: impl Into<String>) -> Self {
        self.wind = Some(wind.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Query for journal entries.
///
/// There is only one shape of query in this domain: every entry, newest
/// first. `batch_size` is a loading hint for the store and never changes
/// which entries are returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntryQuery {
    pub batch_size: Option<usize>,
}

impl EntryQuery {
    /// All entries, no batching hint.
    pub fn all() -> Self {
        Self::default()
    }

    /// The query backing the journal list view.
    pub fn journal_list() -> Self {
        Self::all().batch_size(LIST_BATCH_SIZE)
    }

    pub fn batch_size(mut self, size: usize) -> Self {
        self.batch_size = Some(size);
        self
    }
}

/// A committed mutation reported by a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreChange {
    Inserted(Uuid),
    Updated(Uuid),
    Deleted(Uuid),
}

impl StoreChange {
    /// Identity of the entry the change touched.
    pub fn entry_id(&self) -> Uuid {
        match self {
            StoreChange::Inserted(id) | StoreChange::Updated(id) | StoreChange::Deleted(id) => *id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry_on(year: i32, month: u32, day: u32) -> JournalEntry {
        JournalEntry {
            id: Uuid::new_v4(),
            date: Utc.with_ymd_and_hms(year, month, day, 7, 30, 0).unwrap(),
            rating: None,
            height: None,
            period: None,
            wind: None,
            location: None,
            invalid_text: false,
        }
    }

    #[test]
    fn test_string_for_date_is_short_form() {
        let entry = entry_on(2024, 1, 5);
        assert_eq!(entry.string_for_date(), "1/5/24");

        let entry = entry_on(2023, 12, 25);
        assert_eq!(entry.string_for_date(), "12/25/23");
    }

    #[test]
    fn test_csv_full_entry() {
        let mut entry = entry_on(2024, 1, 3);
        entry.rating = Some(2);
        entry.height = Some("3-4ft".to_string());
        entry.period = Some("12s".to_string());
        entry.wind = Some("offshore".to_string());
        entry.location = Some("Ocean Beach".to_string());

        assert_eq!(entry.csv(), "1/3/24,3-4ft,12s,offshore,Ocean Beach,2\n");
    }

    #[test]
    fn test_csv_missing_rating_is_empty_field() {
        let mut entry = entry_on(2024, 1, 1);
        entry.location = Some("Linda Mar".to_string());

        assert_eq!(entry.csv(), "1/1/24,,,,Linda Mar,\n");
    }

    #[test]
    fn test_csv_quotes_embedded_delimiters() {
        let mut entry = entry_on(2024, 2, 10);
        entry.location = Some("Pleasure Point, Santa Cruz".to_string());
        entry.wind = Some("light \"glassy\"".to_string());

        assert_eq!(
            entry.csv(),
            "2/10/24,,,\"light \"\"glassy\"\"\",\"Pleasure Point, Santa Cruz\",\n"
        );
    }

    #[test]
    fn test_star_count_domain() {
        let mut entry = entry_on(2024, 1, 1);
        assert_eq!(entry.star_count(), 0);

        for rating in 1..=5 {
            entry.rating = Some(rating);
            assert_eq!(entry.star_count(), rating as usize);
        }

        entry.rating = Some(0);
        assert_eq!(entry.star_count(), 0);
        entry.rating = Some(6);
        assert_eq!(entry.star_count(), 0);
        entry.rating = Some(-1);
        assert_eq!(entry.star_count(), 0);
    }

    #[test]
    fn test_entry_query_builders() {
        assert_eq!(EntryQuery::all().batch_size, None);
        assert_eq!(EntryQuery::journal_list().batch_size, Some(LIST_BATCH_SIZE));
    }

    #[test]
    fn test_new_entry_builder() {
        let date = Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap();
        let entry = NewJournalEntry::new(date)
            .with_rating(4)
            .with_height("head high")
            .with_location("Rockaway");

        assert_eq!(entry.date, date);
        assert_eq!(entry.rating, Some(4));
        assert_eq!(entry.height.as_deref(), Some("head high"));
        assert_eq!(entry.location.as_deref(), Some("Rockaway"));
        assert!(entry.wind.is_none());
    }
}
