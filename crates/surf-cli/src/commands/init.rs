use std::path::PathBuf;

use surf_core::SqliteJournalStore;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_journal_path, write_config, SurfConfig};
use crate::ui::{badge, hint, kv, Badge};

pub fn handle_init(ctx: &AppContext<'_>, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = resolve_config_path(ctx.cli())?;
    if config_path.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Config already exists at {}\nHint: Re-run with --force to overwrite it.",
            config_path.display()
        ));
    }

    let journal_path = match args.path.as_deref().or(ctx.cli().journal.as_deref()) {
        Some(path) => PathBuf::from(path),
        None => default_journal_path()?,
    };

    let store = SqliteJournalStore::open(&journal_path)?;
    let existing = store.count()?;

    let config = SurfConfig::new(journal_path.clone(), args.export_dir.as_ref().map(PathBuf::from));
    write_config(&config_path, &config)?;

    if !ctx.quiet() {
        let ui = ctx.ui(false, None);
        println!("{}", badge(&ui, Badge::Ok, "Journal ready"));
        println!("{}", kv(&ui, "Journal", &journal_path.to_string_lossy()));
        println!("{}", kv(&ui, "Config", &config_path.to_string_lossy()));
        println!("{}", kv(&ui, "Entries", &existing.to_string()));
        println!("{}", hint(&ui, "surf add --rating 4 --location <SPOT>"));
    }
    Ok(())
}
