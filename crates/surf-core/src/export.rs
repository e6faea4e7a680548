//! CSV export of the whole journal.
//!
//! An export reads every entry on a background thread, writes one CSV line
//! per entry and reports back on the interactive queue. Only one export may
//! run at a time per pipeline.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use tracing::{debug, info, warn};

use crate::dispatch::QueueHandle;
use crate::error::{Result, SurfError};
use crate::fs::default_export_path;
use crate::storage::{EntryQuery, JournalEntry, JournalStore};

/// Export trigger state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportState {
    Idle,
    Exporting,
}

/// Summary of a finished export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub path: PathBuf,
    /// Lines written
    pub written: usize,
    /// Entries dropped because their text was not valid UTF-8
    pub skipped: usize,
}

/// Result handed to the completion callback.
#[derive(Debug)]
pub enum ExportOutcome {
    Finished(ExportReport),
    Failed(SurfError),
}

impl ExportOutcome {
    /// Path of the written file, if the export succeeded.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ExportOutcome::Finished(report) => Some(&report.path),
            ExportOutcome::Failed(_) => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ExportOutcome::Finished(_))
    }
}

/// Runs exports off the interactive thread.
pub struct ExportPipeline {
    store: Arc<dyn JournalStore>,
    queue: QueueHandle,
    destination: PathBuf,
    exporting: Arc<AtomicBool>,
}

impl ExportPipeline {
    /// Pipeline writing to `<temp dir>/export.csv`.
    pub fn new(store: Arc<dyn JournalStore>, queue: QueueHandle) -> Self {
        Self {
            store,
            queue,
            destination: default_export_path(),
            exporting: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Write exports to `destination` instead of the temp directory.
    pub fn with_destination(mut self, destination: impl Into<PathBuf>) -> Self {
        self.destination = destination.into();
        self
    }

    pub fn state(&self) -> ExportState {
        if self.exporting.load(Ordering::Acquire) {
            ExportState::Exporting
        } else {
            ExportState::Idle
        }
    }

    /// Start an export.
    ///
    /// `on_start` runs immediately on the calling thread. The fetch and the
    /// file writing happen on a background thread; `on_finish` is posted to
    /// the interactive queue once the file is closed, success or not. The
    /// pipeline is back to `Idle` by the time `on_finish` runs.
    ///
    /// # Errors
    ///
    /// Returns `SurfError::ExportInProgress`, without calling either
    /// callback, if an export is already running. Returns `SurfError::Io` if
    /// the background thread cannot be spawned; `on_start` has run by then
    /// and the caller must restore its own idle state.
    pub fn export<S, F>(&self, on_start: S, on_finish: F) -> Result<()>
    where
        S: FnOnce(),
        F: FnOnce(ExportOutcome) + Send + 'static,
    {
        if self
            .exporting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(SurfError::ExportInProgress);
        }

        on_start();

        let store = Arc::clone(&self.store);
        let queue = self.queue.clone();
        let destination = self.destination.clone();
        let exporting = Arc::clone(&self.exporting);

        let spawned = thread::Builder::new()
            .name("surf-export".to_string())
            .spawn(move || {
                let outcome = match export_to_path(store.as_ref(), &destination) {
                    Ok(report) => ExportOutcome::Finished(report),
                    Err(e) => {
                        warn!(error = %e, "export failed");
                        ExportOutcome::Failed(e)
                    }
                };

                let finished = Arc::clone(&exporting);
                let posted = queue.dispatch(move || {
                    finished.store(false, Ordering::Release);
                    on_finish(outcome);
                });
                if !posted {
                    warn!("interactive queue gone; export result dropped");
                    exporting.store(false, Ordering::Release);
                }
            });

        if let Err(e) = spawned {
            self.exporting.store(false, Ordering::Release);
            return Err(e.into());
        }
        Ok(())
    }
}

/// Fetch every entry from `store` and write the CSV file at `destination`.
///
/// A failed fetch is logged and exported as an empty file. Entries whose
/// text does not encode as strict UTF-8 are skipped.
///
/// # Errors
///
/// Returns `SurfError::FileOpen` if the destination cannot be created or
/// truncated, or `SurfError::Io` if writing to it fails.
pub fn export_to_path(store: &dyn JournalStore, destination: &Path) -> Result<ExportReport> {
    let entries = match store.fetch(&EntryQuery::all()) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(error = %e, "export fetch failed; exporting no entries");
            Vec::new()
        }
    };

    let file = File::create(destination).map_err(|source| SurfError::FileOpen {
        path: destination.to_path_buf(),
        source,
    })?;
    let (written, skipped) = write_entries(file, &entries)?;

    info!(
        path = %destination.display(),
        written,
        skipped,
        "export finished"
    );
    Ok(ExportReport {
        path: destination.to_path_buf(),
        written,
        skipped,
    })
}

/// Write one line per encodable entry; the file is closed when this returns.
fn write_entries(file: File, entries: &[JournalEntry]) -> std::io::Result<(usize, usize)> {
    let mut writer = BufWriter::new(file);
    let mut written = 0;
    let mut skipped = 0;

    for entry in entries {
        match encode_strict(entry) {
            Ok(bytes) => {
                writer.write_all(&bytes)?;
                written += 1;
            }
            Err(e) => {
                debug!(entry_id = %entry.id, error = %e, "skipping entry");
                skipped += 1;
            }
        }
    }

    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;
    Ok((written, skipped))
}

/// Strict UTF-8 encoding of one entry's CSV line.
fn encode_strict(entry: &JournalEntry) -> Result<Vec<u8>> {
    if entry.invalid_text {
        return Err(SurfError::Encoding(format!(
            "Entry {} has text that is not valid UTF-8",
            entry.id
        )));
    }
    Ok(entry.csv().into_bytes())
}
