use surf_core::DraftCommit;

use crate::app::AppContext;
use crate::cli::EditArgs;
use crate::helpers::{apply_fields, parse_datetime, resolve_position};
use crate::ui::{badge, kv, Badge};

use super::open_list;

pub fn handle_edit(ctx: &AppContext<'_>, args: &EditArgs) -> anyhow::Result<()> {
    let (queue, list) = open_list(ctx)?;
    let path = resolve_position(&list, args.position)?;

    let mut draft = list.draft(path);
    if let Some(value) = args.date.as_deref() {
        draft.set_date(parse_datetime(value)?);
    }
    if args.no_rating {
        draft.set_rating(None)?;
    }
    apply_fields(&mut draft, &args.fields)?;

    let commit = draft.commit()?;
    queue.run_pending();

    if ctx.quiet() {
        return Ok(());
    }
    let ui = ctx.ui(false, None);
    match commit {
        DraftCommit::Unchanged => println!("{}", badge(&ui, Badge::Info, "No changes")),
        DraftCommit::Updated(id) | DraftCommit::Inserted(id) => {
            println!("{}", badge(&ui, Badge::Ok, "Entry updated"));
            println!("{}", kv(&ui, "ID", &id.to_string()));
            if let Some(position) = list.snapshot().iter().position(|entry| entry.id == id) {
                println!("{}", kv(&ui, "Position", &(position + 1).to_string()));
            }
        }
    }
    Ok(())
}
