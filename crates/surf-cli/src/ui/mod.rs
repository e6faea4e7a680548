//! Terminal presentation for the surf CLI.
//!
//! - `context`: TTY, color, and unicode detection
//! - `mode`: json / plain / pretty routing
//! - `theme`: badges, star glyphs, styles
//! - `render`: tables, key-value lines, errors
//! - `progress`: export spinner

mod context;
mod mode;
pub mod progress;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

pub use render::{badge, hint, kv, print_error, simple_table, Column};

pub use progress::Spinner;
