use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use dialoguer::Confirm;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::helpers::resolve_position;
use crate::ui::{badge, kv, Badge};

use super::open_list;

pub fn handle_delete(ctx: &AppContext<'_>, args: &DeleteArgs) -> anyhow::Result<()> {
    let ui = ctx.ui(false, None);
    let (queue, list) = open_list(ctx)?;
    let path = resolve_position(&list, args.position)?;
    let entry = list.entry(path);

    if !args.force {
        if !ui.is_interactive() {
            return Err(anyhow::anyhow!(
                "Refusing to delete without confirmation\nHint: Re-run with --force."
            ));
        }
        let location = entry.location.as_deref().unwrap_or("unknown spot");
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete the {} session at {}?",
                entry.string_for_date(),
                location
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            if !ctx.quiet() {
                println!("{}", badge(&ui, Badge::Info, "Cancelled"));
            }
            return Ok(());
        }
    }

    let refreshed = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&refreshed);
    list.set_observer(Box::new(move || flag.store(true, Ordering::SeqCst)));

    list.delete(path)?;
    queue.run_pending();
    debug!(
        refreshed = refreshed.load(Ordering::SeqCst),
        "list view after delete"
    );

    if !ctx.quiet() {
        println!("{}", badge(&ui, Badge::Ok, "Entry deleted"));
        println!("{}", kv(&ui, "ID", &entry.id.to_string()));
        println!("{}", kv(&ui, "Remaining", &list.item_count(0).to_string()));
    }
    Ok(())
}
