use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::helpers::resolve_position;
use crate::output::{entry_json, print_entry};

use super::open_list;

pub fn handle_show(ctx: &AppContext<'_>, args: &ShowArgs) -> anyhow::Result<()> {
    let ui = ctx.ui(args.json, None);
    let (_queue, list) = open_list(ctx)?;
    let path = resolve_position(&list, args.position)?;
    let entry = list.entry(path);

    if ui.mode.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&entry_json(&entry, Some(args.position)))?
        );
    } else {
        print_entry(&ui, args.position, &entry);
    }
    Ok(())
}
