//! Application context for the surf CLI.
//!
//! Bundles the parsed arguments with a lazily-loaded config file so handlers
//! do not each re-read it.

use std::path::PathBuf;
use std::sync::Arc;

use once_cell::unsync::OnceCell;
use tracing::debug;

use surf_core::fs::EXPORT_FILE_NAME;
use surf_core::SqliteJournalStore;

use crate::cli::Cli;
use crate::config::{read_config, SurfConfig};
use crate::ui::UiContext;

use super::resolver::{missing_config_message, missing_journal_message, resolve_config_path};

pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<SurfConfig>>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// The config file, or `None` if it does not exist.
    pub fn config(&self) -> anyhow::Result<Option<&SurfConfig>> {
        let config = self.config.get_or_try_init(|| -> anyhow::Result<_> {
            let path = resolve_config_path(self.cli)?;
            if !path.exists() {
                debug!(path = %path.display(), "no config file");
                return Ok(None);
            }
            read_config(&path).map(Some)
        })?;
        Ok(config.as_ref())
    }

    /// Journal path from `--journal`/`SURF_JOURNAL`, falling back to the config.
    pub fn journal_path(&self) -> anyhow::Result<PathBuf> {
        if let Some(path) = self.cli.journal.as_deref() {
            return Ok(PathBuf::from(path));
        }
        match self.config()? {
            Some(config) => Ok(PathBuf::from(&config.journal.path)),
            None => Err(anyhow::anyhow!(missing_config_message(
                &resolve_config_path(self.cli)?
            ))),
        }
    }

    /// Open the journal, which must already exist.
    pub fn open_store(&self) -> anyhow::Result<Arc<SqliteJournalStore>> {
        let path = self.journal_path()?;
        if !path.exists() {
            return Err(anyhow::anyhow!(missing_journal_message(&path)));
        }
        debug!(path = %path.display(), "opening journal");
        let store = SqliteJournalStore::open(&path)?;
        Ok(Arc::new(store))
    }

    /// Where `export` writes: the explicit override, the configured export
    /// directory, or the system temp directory.
    pub fn export_destination(&self, output: Option<&str>) -> anyhow::Result<PathBuf> {
        if let Some(path) = output {
            return Ok(PathBuf::from(path));
        }
        let configured = self
            .config()?
            .and_then(|config| config.export.directory.as_deref())
            .map(|dir| PathBuf::from(dir).join(EXPORT_FILE_NAME));
        Ok(configured.unwrap_or_else(surf_core::fs::default_export_path))
    }

    pub fn ui(&self, json: bool, format: Option<&str>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color, self.cli.ascii)
    }
}
