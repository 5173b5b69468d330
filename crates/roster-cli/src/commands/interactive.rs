use std::io;

use roster_core::RecordStore;
use tracing::info;

use crate::app::{run_menu, run_single, AppContext, MenuChoice};
use crate::presenter::ConsolePresenter;

pub fn handle_menu(ctx: &AppContext) -> anyhow::Result<()> {
    let mut roster = ctx.open_roster()?;
    info!(
        path = %roster.store().location().display(),
        records = roster.len(),
        "starting menu"
    );
    let mut ui = ConsolePresenter::new(ctx.ui_context(false, None), io::stdin().lock(), io::stdout());
    run_menu(&mut roster, &mut ui)
}

/// Run one add, update, or delete and exit.
///
/// Mutations are saved by the operation itself; a declined or unmatched
/// request leaves the file untouched.
pub fn handle_interactive(ctx: &AppContext, choice: MenuChoice) -> anyhow::Result<()> {
    let mut roster = ctx.open_roster()?;
    let mut ui = ConsolePresenter::new(ctx.ui_context(false, None), io::stdin().lock(), io::stdout());
    let outcome = run_single(&mut roster, &mut ui, choice)?;
    info!(?outcome, saved = outcome.is_mutation(), "command finished");
    Ok(())
}
