//! Surf CLI - a journal of surf sessions
//!
//! Command-line front end over `surf-core`: list, edit, and delete journal
//! entries through the synchronized list view, and export them to CSV.

mod app;
mod cli;
mod commands;
mod config;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::{CommandFactory, Parser};
use tracing::debug;

use app::AppContext;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        let ui = ui::UiContext::from_env(false, None, cli.no_color, cli.ascii);
        ui::print_error(&ui, &format!("{:#}", err), None);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let ctx = AppContext::new(cli);
    debug!(journal = ?cli.journal, config = ?cli.config, "starting");

    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    match command {
        Commands::Init(args) => commands::init::handle_init(&ctx, args),
        Commands::List(args) => commands::entries::handle_list(&ctx, args),
        Commands::Show(args) => commands::entries::handle_show(&ctx, args),
        Commands::Add(args) => commands::entries::handle_add(&ctx, args),
        Commands::Edit(args) => commands::entries::handle_edit(&ctx, args),
        Commands::Delete(args) => commands::entries::handle_delete(&ctx, args),
        Commands::Export(args) => commands::entries::handle_export(&ctx, args),
        Commands::Check => commands::maintenance::handle_check(&ctx),
        Commands::Completions { shell } => commands::misc::handle_completions(*shell),
    }
}
