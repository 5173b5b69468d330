//! The interactive main menu.

use std::io::{BufRead, Write};

use roster_core::operations::{
    add_employee, delete_employee, list_employees, search_employees, update_employee, Outcome,
};
use roster_core::{Presenter, RecordStore, Roster, RosterError};
use tracing::{debug, warn};

use crate::presenter::ConsolePresenter;
use crate::ui::menu;

const MENU_TITLE: &str = "Employee Management System";

const MENU_ITEMS: [&str; 6] = [
    "Add Employee",
    "Update Employee",
    "Delete Employee",
    "View All Employees",
    "Search Employee",
    "Exit",
];

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Update,
    Delete,
    List,
    Search,
    Exit,
}

impl MenuChoice {
    /// Map the exact text typed at the menu prompt to a choice.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Self::Add),
            "2" => Some(Self::Update),
            "3" => Some(Self::Delete),
            "4" => Some(Self::List),
            "5" => Some(Self::Search),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Run the menu until the user exits or input ends.
///
/// Leaving the loop, either by choosing exit or by reaching end of input
/// at the menu prompt, saves the roster once more.
pub fn run_menu<S, R, W>(
    roster: &mut Roster<S>,
    ui: &mut ConsolePresenter<R, W>,
) -> anyhow::Result<()>
where
    S: RecordStore,
    R: BufRead,
    W: Write,
{
    loop {
        let rendered = menu(ui.ctx(), MENU_TITLE, &MENU_ITEMS);
        ui.line(&format!("\n{}", rendered));

        let choice = match ui.prompt("Enter your choice") {
            Ok(choice) => choice,
            Err(RosterError::Input(reason)) => {
                debug!(%reason, "menu input ended");
                break;
            }
            Err(err) => return Err(err.into()),
        };

        let result = match MenuChoice::parse(&choice) {
            Some(MenuChoice::Add) => add_employee(roster, ui),
            Some(MenuChoice::Update) => update_employee(roster, ui),
            Some(MenuChoice::Delete) => delete_employee(roster, ui),
            Some(MenuChoice::List) => Ok(list_employees(roster, ui)),
            Some(MenuChoice::Search) => search_employees(roster, ui),
            Some(MenuChoice::Exit) => break,
            None => {
                ui.error("Invalid choice. Please try again.");
                continue;
            }
        };

        match result {
            Ok(outcome) => debug!(?outcome, "operation finished"),
            Err(RosterError::Storage(reason)) => {
                warn!(%reason, "save failed");
                ui.error(&format!("Could not save changes: {}", reason));
            }
            Err(RosterError::Validation(reason)) => {
                warn!(%reason, "operation refused");
                ui.error(&reason);
            }
            Err(err) => return Err(err.into()),
        }
    }

    roster.save()?;
    ui.success("Exiting and saving data...");
    ui.success("Thank you for using the Employee Management System!");
    Ok(())
}

/// Run a single operation outside the menu.
pub fn run_single<S, R, W>(
    roster: &mut Roster<S>,
    ui: &mut ConsolePresenter<R, W>,
    choice: MenuChoice,
) -> anyhow::Result<Outcome>
where
    S: RecordStore,
    R: BufRead,
    W: Write,
{
    let outcome = match choice {
        MenuChoice::Add => add_employee(roster, ui)?,
        MenuChoice::Update => update_employee(roster, ui)?,
        MenuChoice::Delete => delete_employee(roster, ui)?,
        MenuChoice::List => list_employees(roster, ui),
        MenuChoice::Search => search_employees(roster, ui)?,
        MenuChoice::Exit => return Ok(Outcome::Empty),
    };
    Ok(outcome)
}
