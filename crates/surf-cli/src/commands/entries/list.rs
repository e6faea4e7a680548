use surf_core::IndexPath;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::output::{entries_json, entry_row, ENTRY_COLUMNS};
use crate::ui::{hint, simple_table};

use super::open_list;

pub fn handle_list(ctx: &AppContext<'_>, args: &ListArgs) -> anyhow::Result<()> {
    let ui = ctx.ui(args.json, args.format.as_deref());
    let (_queue, list) = open_list(ctx)?;

    if ui.mode.is_json() {
        let json = serde_json::to_string_pretty(&entries_json(&list.snapshot()))?;
        println!("{}", json);
        return Ok(());
    }

    let mut rows = Vec::new();
    for section in 0..list.section_count() {
        for row in 0..list.item_count(section) {
            let entry = list.entry(IndexPath::new(section, row));
            rows.push(entry_row(&ui, rows.len() + 1, &entry));
        }
    }

    if rows.is_empty() {
        if !ctx.quiet() {
            println!("No entries.");
            println!("{}", hint(&ui, "surf add --rating 4 --location <SPOT>"));
        }
        return Ok(());
    }

    println!("{}", simple_table(&ui, &ENTRY_COLUMNS, &rows));
    Ok(())
}
