use super::Outcome;
use crate::presenter::Presenter;
use crate::roster::Roster;
use crate::storage::RecordStore;

/// Show every record in order.
pub fn list_employees<S: RecordStore>(roster: &Roster<S>, ui: &mut impl Presenter) -> Outcome {
    ui.heading("View All Employees");
    if roster.is_empty() {
        ui.error("No employees found.");
        return Outcome::Empty;
    }
    let all: Vec<_> = roster.employees().iter().collect();
    ui.show_table(&all);
    Outcome::Shown(all.len())
}
