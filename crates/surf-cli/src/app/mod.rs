//! Application-level utilities for the surf CLI.
//!
//! This module provides:
//! - Path resolution for the config file, journal, and export destination
//! - A per-invocation context that loads the config lazily

mod context;
mod resolver;

pub use context::AppContext;
pub use resolver::resolve_config_path;
