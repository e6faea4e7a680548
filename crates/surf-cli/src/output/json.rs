//! JSON output formatting for entries.

use surf_core::storage::JournalEntry;

/// Convert an entry to JSON, with its 1-based list position when known.
pub fn entry_json(entry: &JournalEntry, position: Option<usize>) -> serde_json::Value {
    serde_json::json!({
        "position": position,
        "id": entry.id,
        "date": entry.date,
        "rating": entry.rating,
        "height": entry.height,
        "period": entry.period,
        "wind": entry.wind,
        "location": entry.location,
    })
}

pub fn entries_json(entries: &[JournalEntry]) -> Vec<serde_json::Value> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| entry_json(entry, Some(index + 1)))
        .collect()
}
