use tracing::debug;

use crate::app::AppContext;
use crate::cli::SearchArgs;
use crate::output::{employees_json, print_employee_list};

use super::parse_output_format;

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.json, args.format.as_deref())?;
    let roster = ctx.open_roster()?;
    let matches = roster.find_all(&args.term);
    debug!(term = %args.term, matches = matches.len(), "search finished");

    let ui = ctx.ui_context(args.json, format);
    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&employees_json(&matches))?);
        return Ok(());
    }

    print_employee_list(&ui, &matches, "No employee found with that name or title.");
    Ok(())
}
