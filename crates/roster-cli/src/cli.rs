use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use roster_core::VERSION;

/// Roster - keep a small list of employees in a plain text file
#[derive(Parser)]
#[command(name = "roster")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the employee data file
    #[arg(short, long, global = true, env = "ROSTER_FILE")]
    pub file: Option<String>,

    /// Path to the config file
    #[arg(long, global = true, env = "ROSTER_CONFIG")]
    pub config: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols and table borders only
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
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

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for in names and titles
    #[arg(value_name = "TERM")]
    pub term: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive menu (default)
    Menu,

    /// Add one employee interactively
    Add,

    /// Update one employee interactively
    Update,

    /// Delete one employee interactively
    Delete,

    /// List all employees
    List(ListArgs),

    /// Search employees by name or title
    Search(SearchArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}
