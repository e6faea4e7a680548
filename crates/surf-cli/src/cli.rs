use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use surf_core::VERSION;

/// Surf - a journal of surf sessions
#[derive(Parser)]
#[command(name = "surf")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the journal database
    #[arg(short, long, global = true, env = "SURF_JOURNAL")]
    pub journal: Option<String>,

    /// Path to the config file
    #[arg(long, global = true, env = "SURF_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a journal and write the config file
    Init(InitArgs),

    /// List journal entries, newest first
    List(ListArgs),

    /// Show the entry at a list position
    Show(ShowArgs),

    /// Add a new entry
    Add(AddArgs),

    /// Edit the entry at a list position
    Edit(EditArgs),

    /// Delete the entry at a list position
    Delete(DeleteArgs),

    /// Export every entry to a CSV file
    Export(ExportArgs),

    /// Check journal integrity
    Check,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the journal database will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Directory exports are written to (defaults to the temp directory)
    #[arg(long, value_name = "DIR")]
    pub export_dir: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// List position (1 is the newest entry)
    #[arg(value_name = "POSITION")]
    pub position: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Fields shared by `add` and `edit`
#[derive(Args, Default)]
pub struct EntryFieldArgs {
    /// Session rating (1-5)
    #[arg(short, long)]
    pub rating: Option<i32>,

    /// Wave height
    #[arg(long)]
    pub height: Option<String>,

    /// Swell period
    #[arg(long)]
    pub period: Option<String>,

    /// Wind conditions
    #[arg(long)]
    pub wind: Option<String>,

    /// Surf spot
    #[arg(short, long)]
    pub location: Option<String>,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Session date (YYYY-MM-DD or ISO-8601, defaults to now)
    #[arg(long)]
    pub date: Option<String>,

    #[command(flatten)]
    pub fields: EntryFieldArgs,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// List position (1 is the newest entry)
    #[arg(value_name = "POSITION")]
    pub position: usize,

    /// New session date (YYYY-MM-DD or ISO-8601)
    #[arg(long)]
    pub date: Option<String>,

    /// Remove the rating
    #[arg(long, conflicts_with = "rating")]
    pub no_rating: bool,

    #[command(flatten)]
    pub fields: EntryFieldArgs,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// List position (1 is the newest entry)
    #[arg(value_name = "POSITION")]
    pub position: usize,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Write the CSV here instead of <export dir>/export.csv
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,
}
