//! Parsing helpers for dates and list positions.

use chrono::{DateTime, NaiveDate, Utc};

use surf_core::{IndexPath, ListSynchronizer};

/// Parse a datetime string (ISO-8601 or YYYY-MM-DD).
///
/// Bare dates land at midnight UTC.
pub fn parse_datetime(value: &str) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        let naive = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| anyhow::anyhow!("Invalid date value: {}", value))?;
        return Ok(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc));
    }

    Err(anyhow::anyhow!(
        "Invalid date/time (expected ISO-8601 or YYYY-MM-DD): {}",
        value
    ))
}

/// Map a 1-based list position onto the synchronized view.
pub fn resolve_position(list: &ListSynchronizer, position: usize) -> anyhow::Result<IndexPath> {
    let count = list.item_count(0);
    if position == 0 || position > count {
        return Err(anyhow::anyhow!(
            "No entry at position {} (journal has {} {})\nHint: Run `surf list` to see positions.",
            position,
            count,
            if count == 1 { "entry" } else { "entries" }
        ));
    }
    Ok(IndexPath::row(position - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use std::sync::Arc;
    use surf_core::storage::{JournalStore, NewJournalEntry};
    use surf_core::{InteractiveQueue, SqliteJournalStore};

    #[test]
    fn test_parse_plain_date() {
        let parsed = parse_datetime("2024-01-05").unwrap();
        assert_eq!((parsed.year(), parsed.month(), parsed.day()), (2024, 1, 5));
        assert_eq!(parsed.hour(), 0);
    }

    #[test]
    fn test_parse_rfc3339_normalizes_to_utc() {
        let parsed = parse_datetime("2024-01-05T06:30:00-08:00").unwrap();
        assert_eq!(parsed.hour(), 14);
        assert_eq!(parsed.minute(), 30);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_datetime("last tuesday").is_err());
        assert!(parse_datetime("2024-13-01").is_err());
    }

    #[test]
    fn test_resolve_position_bounds() {
        let store = Arc::new(SqliteJournalStore::open_in_memory().unwrap());
        store
            .insert(&NewJournalEntry::new(parse_datetime("2024-01-01").unwrap()))
            .unwrap();
        let queue = InteractiveQueue::new();
        let list = ListSynchronizer::initialize(store, queue.handle()).unwrap();

        assert_eq!(resolve_position(&list, 1).unwrap(), IndexPath::row(0));
        assert!(resolve_position(&list, 0).is_err());
        assert!(resolve_position(&list, 2).is_err());
    }
}
