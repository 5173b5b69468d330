//! Output for the non-interactive `list` and `search` commands.

mod json;
mod text;

pub use json::{employee_json, employees_json};
pub use text::{print_employee_list, render_employee_list};
