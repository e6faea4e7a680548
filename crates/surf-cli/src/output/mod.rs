//! Entry formatting for `list` and `show`.

mod json;
mod text;

pub use json::{entries_json, entry_json};
pub use text::{entry_row, print_entry, ENTRY_COLUMNS};
