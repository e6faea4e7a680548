//! Handlers for the journal entry commands.

mod add;
mod delete;
mod edit;
mod export;
mod list;
mod show;

pub use add::handle_add;
pub use delete::handle_delete;
pub use edit::handle_edit;
pub use export::handle_export;
pub use list::handle_list;
pub use show::handle_show;

use std::sync::Arc;

use surf_core::{InteractiveQueue, JournalStore, ListSynchronizer};

use crate::app::AppContext;

/// Open the journal and load the synchronized list view over it.
fn open_list(ctx: &AppContext<'_>) -> anyhow::Result<(InteractiveQueue, ListSynchronizer)> {
    let store: Arc<dyn JournalStore> = ctx.open_store()?;
    let queue = InteractiveQueue::new();
    let list = ListSynchronizer::initialize(store, queue.handle())?;
    Ok((queue, list))
}
