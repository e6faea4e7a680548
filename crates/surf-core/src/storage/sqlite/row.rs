//! Entry row type for database queries.

use chrono::{DateTime, Utc};
use rusqlite::types::ValueRef;
use rusqlite::Row;
use uuid::Uuid;

use crate::error::{Result, SurfError};
use crate::storage::types::JournalEntry;

/// Columns selected for every entry query, in `EntryRow::from_row` order.
pub const ENTRY_COLUMNS: &str = "id, date, rating, height, period, wind, location";

/// Raw row data from the entries table, before parsing into domain types.
#[derive(Debug)]
pub struct EntryRow {
    pub id: String,
    pub date: String,
    pub rating: Option<i64>,
    pub height: Option<String>,
    pub period: Option<String>,
    pub wind: Option<String>,
    pub location: Option<String>,
    /// A text column held bytes that are not valid UTF-8
    pub invalid_text: bool,
}

impl EntryRow {
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let mut invalid_text = false;
        Ok(Self {
            id: row.get(0)?,
            date: row.get(1)?,
            rating: row.get(2)?,
            height: text_lossy(row, 3, &mut invalid_text)?,
            period: text_lossy(row, 4, &mut invalid_text)?,
            wind: text_lossy(row, 5, &mut invalid_text)?,
            location: text_lossy(row, 6, &mut invalid_text)?,
            invalid_text,
        })
    }
}

/// Read a free-text column without rejecting invalid UTF-8.
///
/// Invalid sequences become U+FFFD so the row still loads, and `invalid`
/// is set so the entry can be told apart from one holding a real U+FFFD.
fn text_lossy(row: &Row<'_>, idx: usize, invalid: &mut bool) -> rusqlite::Result<Option<String>> {
    match row.get_ref(idx)? {
        ValueRef::Null => Ok(None),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => match std::str::from_utf8(bytes) {
            Ok(text) => Ok(Some(text.to_owned())),
            Err(_) => {
                *invalid = true;
                Ok(Some(String::from_utf8_lossy(bytes).into_owned()))
            }
        },
        ValueRef::Integer(value) => Ok(Some(value.to_string())),
        ValueRef::Real(value) => Ok(Some(value.to_string())),
    }
}

impl TryFrom<EntryRow> for JournalEntry {
    type Error = SurfError;

    fn try_from(row: EntryRow) -> Result<Self> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| SurfError::Storage(format!("Invalid entry UUID: {}", e)))?;
        let date = DateTime::parse_from_rfc3339(&row.date)
            .map_err(|e| SurfError::Storage(format!("Invalid timestamp: {}", e)))?
            .with_timezone(&Utc);
        let rating = row
            .rating
            .map(|value| {
                i32::try_from(value)
                    .map_err(|_| SurfError::Storage(format!("Rating out of range: {}", value)))
            })
            .transpose()?;

        Ok(JournalEntry {
            id,
            date,
            rating,
            height: row.height,
            period: row.period,
            wind: row.wind,
            location: row.location,
            invalid_text: row.invalid_text,
        })
    }
}
