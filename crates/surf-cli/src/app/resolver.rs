//! Path resolution for config, journal, and export files.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::default_config_path;

/// Resolve the config file path: `--config`/`SURF_CONFIG`, then the XDG default.
pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(value) = cli.config.as_deref() {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Error message when the journal database is missing.
pub fn missing_journal_message(path: &Path) -> String {
    format!(
        "No journal found at {}\n\nRun:\n  surf init\n\nOr specify a journal path:\n  surf init /path/to/journal.sqlite",
        path.display()
    )
}

/// Error message when neither a journal path nor a config file exists.
pub fn missing_config_message(config_path: &Path) -> String {
    format!(
        "No config found at {}\n\nRun:\n  surf init\n\nOr point at a journal directly:\n  SURF_JOURNAL=/path/to/journal.sqlite surf list",
        config_path.display()
    )
}
