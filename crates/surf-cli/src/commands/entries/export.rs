use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::time::Duration;

use surf_core::{ExportOutcome, ExportPipeline, InteractiveQueue, JournalStore};

use crate::app::AppContext;
use crate::cli::ExportArgs;
use crate::ui::{badge, kv, Badge, Spinner};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub fn handle_export(ctx: &AppContext<'_>, args: &ExportArgs) -> anyhow::Result<()> {
    let ui = ctx.ui(false, None);
    let destination = ctx.export_destination(args.output.as_deref())?;
    let store: Arc<dyn JournalStore> = ctx.open_store()?;

    let queue = InteractiveQueue::new();
    let pipeline = ExportPipeline::new(store, queue.handle()).with_destination(&destination);

    let (tx, rx) = mpsc::channel();
    let mut spinner = None;
    pipeline.export(
        || spinner = Some(Spinner::start(&ui, "Exporting journal")),
        move |outcome| {
            let _ = tx.send(outcome);
        },
    )?;

    let outcome = wait_for_outcome(&queue, &rx)?;

    match outcome {
        ExportOutcome::Finished(report) => {
            if ctx.quiet() {
                return Ok(());
            }
            match &spinner {
                Some(spinner) => spinner.finish("Export Finished"),
                None => println!("{}", badge(&ui, Badge::Ok, "Export Finished")),
            }
            if ui.mode.is_pretty() {
                println!(
                    "The exported CSV file can be found at {}",
                    report.path.display()
                );
            } else {
                println!("{}", kv(&ui, "Path", &report.path.to_string_lossy()));
            }
            println!("{}", kv(&ui, "Written", &report.written.to_string()));
            if report.skipped > 0 {
                println!("{}", kv(&ui, "Skipped", &report.skipped.to_string()));
            }
            Ok(())
        }
        ExportOutcome::Failed(e) => {
            drop(spinner);
            Err(anyhow::Error::new(e).context("Export failed"))
        }
    }
}

/// Drain the queue until the export reports back.
///
/// The sender lives in the completion callback; if the export thread dies
/// before posting it, the channel disconnects instead of waiting forever.
fn wait_for_outcome(
    queue: &InteractiveQueue,
    rx: &Receiver<ExportOutcome>,
) -> anyhow::Result<ExportOutcome> {
    loop {
        queue.wait_one(POLL_INTERVAL);
        match rx.try_recv() {
            Ok(outcome) => return Ok(outcome),
            Err(TryRecvError::Empty) => continue,
            Err(TryRecvError::Disconnected) => {
                return Err(anyhow::anyhow!(
                    "Export stopped without reporting a result"
                ))
            }
        }
    }
}
