use super::Outcome;
use crate::error::Result;
use crate::presenter::Presenter;
use crate::roster::Roster;
use crate::storage::RecordStore;

/// Show every record whose name or title contains the search term.
pub fn search_employees<S: RecordStore>(
    roster: &Roster<S>,
    ui: &mut impl Presenter,
) -> Result<Outcome> {
    ui.heading("Search Employee");
    let term = ui.prompt("Enter Employee Name or Title to search")?;

    let matches = roster.find_all(&term);
    if matches.is_empty() {
        ui.error("No employee found with that name or title.");
        return Ok(Outcome::NotFound);
    }
    ui.show_table(&matches);
    Ok(Outcome::Shown(matches.len()))
}
