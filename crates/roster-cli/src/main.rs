//! Roster CLI - keep a small employee roster in a plain text file
//!
//! This is the command-line interface for Roster. It drives the operations
//! in `roster-core` through an interactive menu or one-shot commands.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod logging;
mod output;
mod presenter;
mod ui;

use clap::Parser;

use crate::app::{AppContext, MenuChoice};
use crate::cli::{Cli, Commands};
use crate::errors::CliError;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = AppContext::new(&cli);
    if let Err(err) = run(&ctx) {
        let ui = ctx.ui_context(false, None);
        tracing::debug!(error = ?err, "command failed");
        match err.downcast_ref::<CliError>() {
            Some(cli_err) => {
                print_error(&ui, &cli_err.to_string(), cli_err.hint());
                std::process::exit(cli_err.exit_code());
            }
            None => {
                print_error(&ui, &format!("{:#}", err), None);
                std::process::exit(1);
            }
        }
    }
}

fn run(ctx: &AppContext) -> anyhow::Result<()> {
    match &ctx.cli().command {
        None | Some(Commands::Menu) => commands::handle_menu(ctx),
        Some(Commands::Add) => commands::handle_interactive(ctx, MenuChoice::Add),
        Some(Commands::Update) => commands::handle_interactive(ctx, MenuChoice::Update),
        Some(Commands::Delete) => commands::handle_interactive(ctx, MenuChoice::Delete),
        Some(Commands::List(args)) => commands::handle_list(ctx, args),
        Some(Commands::Search(args)) => commands::handle_search(ctx, args),
        Some(Commands::Completions { shell }) => commands::handle_completions(*shell),
    }
}
