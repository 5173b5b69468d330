//! Human-readable output for employee lists.

use roster_core::Employee;

use crate::ui::{badge, employee_table, Badge, UiContext};

/// Render a list of employees, or `empty_message` when there are none.
pub fn render_employee_list(ctx: &UiContext, employees: &[&Employee], empty_message: &str) -> String {
    if employees.is_empty() {
        return badge(ctx, Badge::Info, empty_message);
    }
    employee_table(ctx, employees)
}

pub fn print_employee_list(ctx: &UiContext, employees: &[&Employee], empty_message: &str) {
    println!("{}", render_employee_list(ctx, employees, empty_message));
}
