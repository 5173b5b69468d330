use tracing::{info, warn};

use super::{Outcome, NOT_FOUND_MESSAGE};
use crate::error::Result;
use crate::presenter::Presenter;
use crate::roster::Roster;
use crate::storage::RecordStore;

/// Remove the first record whose name or title contains the search term,
/// after explicit confirmation.
pub fn delete_employee<S: RecordStore>(
    roster: &mut Roster<S>,
    ui: &mut impl Presenter,
) -> Result<Outcome> {
    ui.heading("Delete Employee Record");
    let term = ui.prompt("Enter Employee Name or Title to search")?;

    let Some(index) = roster.find_first(&term) else {
        ui.error(NOT_FOUND_MESSAGE);
        return Ok(Outcome::NotFound);
    };
    let Some(found) = roster.get(index).cloned() else {
        return Ok(Outcome::NotFound);
    };
    ui.show_employee(&found);

    if !ui.confirm("Are you sure you want to delete this employee?")? {
        info!(id = found.id, "delete declined");
        return Ok(Outcome::Declined);
    }

    let removed = roster.remove(index);
    if let Err(err) = roster.save() {
        warn!(id = removed.id, error = %err, "save failed, restoring record");
        roster.insert(index, removed);
        return Err(err);
    }

    info!(id = removed.id, "employee deleted");
    ui.success("Employee deleted successfully!");
    Ok(Outcome::Deleted(removed.id))
}
