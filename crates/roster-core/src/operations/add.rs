use tracing::{info, warn};

use super::{prompt_compensation, prompt_required_text, Outcome};
use crate::error::Result;
use crate::presenter::Presenter;
use crate::roster::Roster;
use crate::storage::{Employee, RecordStore};

/// Collect a new employee, append it, and persist.
///
/// The id is fixed before any prompting. Required prompts re-ask until
/// they get valid input, so this only fails if no id is left to assign,
/// input runs out, or the save fails. A failed save drops the new record
/// again.
pub fn add_employee<S: RecordStore>(
    roster: &mut Roster<S>,
    ui: &mut impl Presenter,
) -> Result<Outcome> {
    ui.heading("Add a New Employee");
    let id = roster.next_id()?;
    let name = prompt_required_text(ui, "Enter Employee Name")?;
    let title = prompt_required_text(ui, "Enter Employee Title")?;
    let department = prompt_required_text(ui, "Enter Employee Department")?;
    let compensation = prompt_compensation(ui, "Enter Compensation (must be a positive number)")?;

    roster.push(Employee::new(id, name, title, department, compensation));
    if let Err(err) = roster.save() {
        warn!(id, error = %err, "save failed, dropping new record");
        roster.pop();
        return Err(err);
    }

    info!(id, "employee added");
    ui.success("Employee added successfully!");
    Ok(Outcome::Added(id))
}
