//! Human and plain-text rendering of entries.

use surf_core::storage::JournalEntry;

use crate::ui::theme::{star_glyphs, styled, styles};
use crate::ui::{kv, Column, UiContext};

pub const ENTRY_COLUMNS: [Column; 4] = [
    Column::new("#"),
    Column::new("Date"),
    Column::new("Rating"),
    Column::new("Location"),
];

/// One row of the list view: position, date, stars, location.
pub fn entry_row(ctx: &UiContext, position: usize, entry: &JournalEntry) -> Vec<String> {
    let stars = star_glyphs(entry.star_count(), ctx.unicode);
    let location = entry.location.clone().unwrap_or_default();
    if ctx.mode.is_pretty() {
        vec![
            position.to_string(),
            entry.string_for_date(),
            styled(&stars, styles::stars(), ctx.color),
            location,
        ]
    } else {
        vec![
            position.to_string(),
            entry.string_for_date(),
            stars,
            location,
        ]
    }
}

/// Detail view for `show`.
pub fn print_entry(ctx: &UiContext, position: usize, entry: &JournalEntry) {
    let dash = || "-".to_string();
    println!("{}", kv(ctx, "Position", &position.to_string()));
    println!("{}", kv(ctx, "ID", &entry.id.to_string()));
    println!("{}", kv(ctx, "Date", &entry.string_for_date()));
    println!(
        "{}",
        kv(ctx, "Rating", &star_glyphs(entry.star_count(), ctx.unicode))
    );
    println!(
        "{}",
        kv(ctx, "Height", &entry.height.clone().unwrap_or_else(dash))
    );
    println!(
        "{}",
        kv(ctx, "Period", &entry.period.clone().unwrap_or_else(dash))
    );
    println!("{}", kv(ctx, "Wind", &entry.wind.clone().unwrap_or_else(dash)));
    println!(
        "{}",
        kv(ctx, "Location", &entry.location.clone().unwrap_or_else(dash))
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    #[test]
    fn test_plain_row() {
        let ctx = UiContext {
            is_tty: false,
            color: false,
            unicode: false,
            mode: OutputMode::Plain,
        };
        let entry = JournalEntry {
            id: Uuid::new_v4(),
            date: Utc.with_ymd_and_hms(2024, 1, 3, 7, 0, 0).unwrap(),
            rating: Some(2),
            height: Some("3-4ft".to_string()),
            period: None,
            wind: None,
            location: Some("Ocean Beach".to_string()),
            invalid_text: false,
        };
        assert_eq!(
            entry_row(&ctx, 2, &entry),
            vec!["2", "1/3/24", "**...", "Ocean Beach"]
        );
    }
}
