use chrono::Utc;

use surf_core::{DraftCommit, EntryDraft, JournalStore};

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::helpers::{apply_fields, parse_datetime};
use crate::ui::{badge, kv, Badge};

pub fn handle_add(ctx: &AppContext<'_>, args: &AddArgs) -> anyhow::Result<()> {
    let date = match args.date.as_deref() {
        Some(value) => parse_datetime(value)?,
        None => Utc::now(),
    };
    let store = ctx.open_store()?;

    let mut draft = EntryDraft::new_entry(store.clone(), date);
    apply_fields(&mut draft, &args.fields)?;
    let commit = draft.commit()?;

    if ctx.quiet() {
        return Ok(());
    }
    let ui = ctx.ui(false, None);
    if let DraftCommit::Inserted(id) = commit {
        println!("{}", badge(&ui, Badge::Ok, "Entry added"));
        println!("{}", kv(&ui, "ID", &id.to_string()));
        if let Some(entry) = store.get(&id)? {
            println!("{}", kv(&ui, "Date", &entry.string_for_date()));
        }
    }
    Ok(())
}
