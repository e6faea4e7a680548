//! Argument parsing and draft helpers shared by the entry commands.

mod fields;
mod parsing;

pub use fields::apply_fields;
pub use parsing::{parse_datetime, resolve_position};
