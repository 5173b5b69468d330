use roster_core::Employee;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::output::{employees_json, print_employee_list};

use super::parse_output_format;

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.json, args.format.as_deref())?;
    let roster = ctx.open_roster()?;
    let employees: Vec<&Employee> = roster.employees().iter().collect();

    let ui = ctx.ui_context(args.json, format);
    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&employees_json(&employees))?);
        return Ok(());
    }

    print_employee_list(&ui, &employees, "No employees found.");
    Ok(())
}
