use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use roster_core::operations::{
    add_employee, delete_employee, list_employees, search_employees, update_employee, Outcome,
};
use roster_core::storage::{Compensation, Employee, FlatFileStore, RecordStore};
use roster_core::{Presenter, Roster, RosterError};
use tempfile::{tempdir, TempDir};

/// Presenter fed from a fixed list of answers that records what it was asked to show.
#[derive(Default)]
struct ScriptedPresenter {
    answers: VecDeque<String>,
    prompts: Vec<String>,
    shown: Vec<u64>,
    tables: Vec<Vec<u64>>,
    infos: Vec<String>,
    successes: Vec<String>,
    errors: Vec<String>,
}

impl ScriptedPresenter {
    fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            ..Default::default()
        }
    }
}

impl Presenter for ScriptedPresenter {
    fn heading(&mut self, _title: &str) {}

    fn prompt(&mut self, label: &str) -> roster_core::Result<String> {
        self.prompts.push(label.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| RosterError::Input("script exhausted".to_string()))
    }

    fn show_employee(&mut self, employee: &Employee) {
        self.shown.push(employee.id);
    }

    fn show_table(&mut self, employees: &[&Employee]) {
        self.tables.push(employees.iter().map(|e| e.id).collect());
    }

    fn info(&mut self, message: &str) {
        self.infos.push(message.to_string());
    }

    fn success(&mut self, message: &str) {
        self.successes.push(message.to_string());
    }

    fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

struct Fixture {
    _dir: TempDir,
    path: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("employees.txt");
        Self { _dir: dir, path }
    }

    fn roster(&self) -> Roster<FlatFileStore> {
        Roster::open(FlatFileStore::new(&self.path)).expect("open roster")
    }

    fn seeded(&self, employees: &[Employee]) -> Roster<FlatFileStore> {
        FlatFileStore::new(&self.path)
            .save(employees)
            .expect("seed file");
        self.roster()
    }

    fn contents(&self) -> Option<String> {
        read_optional(&self.path)
    }
}

/// Store whose saves always fail, for checking that memory is left as it was.
struct BrokenStore {
    path: PathBuf,
}

impl RecordStore for BrokenStore {
    fn load(&self) -> roster_core::Result<Vec<Employee>> {
        Ok(Vec::new())
    }

    fn save(&self, _employees: &[Employee]) -> roster_core::Result<()> {
        Err(RosterError::Storage("disk full".to_string()))
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

fn broken_roster(employees: &[Employee]) -> Roster<BrokenStore> {
    let mut roster = Roster::empty(BrokenStore {
        path: PathBuf::from("broken.txt"),
    });
    for employee in employees {
        roster.push(employee.clone());
    }
    roster
}

fn read_optional(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok()
}

fn employee(id: u64, name: &str, title: &str, comp: f64) -> Employee {
    Employee::new(id, name, title, "R&D", Compensation::new(comp).unwrap())
}

fn add(roster: &mut Roster<FlatFileStore>, name: &str, title: &str, dept: &str, comp: &str) -> Outcome {
    let mut ui = ScriptedPresenter::new(&[name, title, dept, comp]);
    add_employee(roster, &mut ui).expect("add should succeed")
}

#[test]
fn test_add_delete_add_scenario() {
    let fixture = Fixture::new();
    let mut roster = fixture.roster();

    assert_eq!(add(&mut roster, "Bob", "Eng", "R&D", "50000"), Outcome::Added(1));
    assert_eq!(add(&mut roster, "Sue", "Mgr", "R&D", "80000"), Outcome::Added(2));

    let mut ui = ScriptedPresenter::new(&["Bob", "y"]);
    let outcome = delete_employee(&mut roster, &mut ui).unwrap();
    assert_eq!(outcome, Outcome::Deleted(1));
    assert_eq!(ui.shown, vec![1]);
    assert_eq!(ui.successes, vec!["Employee deleted successfully!"]);

    let ids: Vec<u64> = roster.employees().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2]);
    assert_eq!(fixture.contents().unwrap(), "2,Sue,Mgr,R&D,80000\n");

    assert_eq!(add(&mut roster, "Tom", "Ops", "R&D", "1"), Outcome::Added(3));
}

#[test]
fn test_add_assigns_sequential_ids() {
    let fixture = Fixture::new();
    let mut roster = fixture.roster();

    for expected in 1..=5u64 {
        let name = format!("Person {}", expected);
        assert_eq!(
            add(&mut roster, &name, "Eng", "R&D", "100"),
            Outcome::Added(expected)
        );
    }

    let reloaded = fixture.roster();
    let ids: Vec<u64> = reloaded.employees().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_add_reprompts_until_valid() {
    let fixture = Fixture::new();
    let mut roster = fixture.roster();
    let mut ui = ScriptedPresenter::new(&[
        "", "   ", " Bob ", "Eng", "Smith, Inc", "R&D", "abc", "-5", "0", "50000",
    ]);

    let outcome = add_employee(&mut roster, &mut ui).unwrap();

    assert_eq!(outcome, Outcome::Added(1));
    assert_eq!(ui.errors.len(), 6);
    let added = &roster.employees()[0];
    assert_eq!(added.name, "Bob");
    assert_eq!(added.department, "R&D");
    assert_eq!(added.compensation.value(), 50_000.0);
    assert_eq!(fixture.contents().unwrap(), "1,Bob,Eng,R&D,50000\n");
}

#[test]
fn test_add_fails_when_input_runs_out() {
    let fixture = Fixture::new();
    let mut roster = fixture.roster();
    let mut ui = ScriptedPresenter::new(&["Bob", "Eng"]);

    let result = add_employee(&mut roster, &mut ui);

    assert!(matches!(result, Err(RosterError::Input(_))));
    assert!(roster.is_empty());
    assert!(fixture.contents().is_none());
}

#[test]
fn test_deleting_newest_reissues_its_id() {
    let fixture = Fixture::new();
    let mut roster = fixture.seeded(&[employee(1, "Ann", "Eng", 1.0), employee(2, "Bob", "Eng", 1.0)]);

    let mut ui = ScriptedPresenter::new(&["Bob", "y"]);
    delete_employee(&mut roster, &mut ui).unwrap();

    assert_eq!(add(&mut roster, "Cat", "Eng", "R&D", "1"), Outcome::Added(2));
}

#[test]
fn test_update_only_department() {
    let fixture = Fixture::new();
    let mut roster = fixture.seeded(&[employee(1, "Alice", "Engineer", 50_000.0)]);
    let mut ui = ScriptedPresenter::new(&["alice", "", "", "Sales", ""]);

    let outcome = update_employee(&mut roster, &mut ui).unwrap();

    assert_eq!(outcome, Outcome::Updated(1));
    let updated = &roster.employees()[0];
    assert_eq!(updated.name, "Alice");
    assert_eq!(updated.title, "Engineer");
    assert_eq!(updated.department, "Sales");
    assert_eq!(updated.compensation.value(), 50_000.0);
    assert_eq!(fixture.contents().unwrap(), "1,Alice,Engineer,Sales,50000\n");
}

#[test]
fn test_update_acts_on_first_match_only() {
    let fixture = Fixture::new();
    let mut roster = fixture.seeded(&[
        employee(1, "Alice Smith", "Engineer", 1.0),
        employee(2, "alice jones", "Engineer", 1.0),
    ]);
    let mut ui = ScriptedPresenter::new(&["ALICE", "", "Lead", "", "2"]);

    update_employee(&mut roster, &mut ui).unwrap();

    assert_eq!(ui.shown, vec![1]);
    assert_eq!(roster.employees()[0].title, "Lead");
    assert_eq!(roster.employees()[0].compensation.value(), 2.0);
    assert_eq!(roster.employees()[1].title, "Engineer");
}

#[test]
fn test_update_invalid_compensation_changes_nothing() {
    let fixture = Fixture::new();
    let original = employee(1, "Alice", "Engineer", 50_000.0);
    let mut roster = fixture.seeded(&[original.clone()]);
    let before = fixture.contents();

    for bad in ["ten", "-1", "0"] {
        let mut ui = ScriptedPresenter::new(&["Alice", "Alicia", "Boss", "Exec", bad]);
        let outcome = update_employee(&mut roster, &mut ui).unwrap();

        assert!(matches!(outcome, Outcome::Rejected(_)));
        assert_eq!(ui.errors.len(), 1);
        assert!(ui.successes.is_empty());
        assert_eq!(roster.employees()[0], original);
        assert_eq!(fixture.contents(), before);
    }
}

#[test]
fn test_update_not_found_does_not_prompt_or_save() {
    let fixture = Fixture::new();
    let mut roster = fixture.roster();
    roster.push(employee(1, "Alice", "Engineer", 1.0));
    let mut ui = ScriptedPresenter::new(&["zed"]);

    let outcome = update_employee(&mut roster, &mut ui).unwrap();

    assert_eq!(outcome, Outcome::NotFound);
    assert_eq!(ui.prompts.len(), 1);
    assert!(fixture.contents().is_none());
}

#[test]
fn test_delete_requires_exact_confirmation() {
    let fixture = Fixture::new();
    let mut roster = fixture.seeded(&[employee(1, "Bob", "Eng", 1.0)]);
    let before = fixture.contents();

    for answer in ["n", "", "yes", " y", "no"] {
        let mut ui = ScriptedPresenter::new(&["bob", answer]);
        let outcome = delete_employee(&mut roster, &mut ui).unwrap();

        assert_eq!(outcome, Outcome::Declined);
        assert!(ui.successes.is_empty());
        assert!(ui.errors.is_empty());
        assert!(ui.infos.is_empty());
        assert_eq!(roster.len(), 1);
        assert_eq!(fixture.contents(), before);
    }

    let mut ui = ScriptedPresenter::new(&["bob", "Y"]);
    assert_eq!(
        delete_employee(&mut roster, &mut ui).unwrap(),
        Outcome::Deleted(1)
    );
    assert!(roster.is_empty());
    assert_eq!(fixture.contents().unwrap(), "");
}

#[test]
fn test_delete_not_found() {
    let fixture = Fixture::new();
    let mut roster = fixture.seeded(&[employee(1, "Bob", "Eng", 1.0)]);
    let mut ui = ScriptedPresenter::new(&["sue"]);

    assert_eq!(
        delete_employee(&mut roster, &mut ui).unwrap(),
        Outcome::NotFound
    );
    assert_eq!(ui.errors, vec!["Employee not found with that name or title."]);
    assert_eq!(roster.len(), 1);
}

#[test]
fn test_search_collects_all_matches_case_insensitive() {
    let fixture = Fixture::new();
    let roster = fixture.seeded(&[
        employee(1, "Alice Smith", "Engineer", 1.0),
        employee(2, "Carol", "Manager", 1.0),
        employee(3, "alice jones", "Analyst", 1.0),
    ]);

    let mut ui = ScriptedPresenter::new(&["ALICE"]);
    assert_eq!(search_employees(&roster, &mut ui).unwrap(), Outcome::Shown(2));
    assert_eq!(ui.tables, vec![vec![1, 3]]);

    let mut ui = ScriptedPresenter::new(&["manager"]);
    assert_eq!(search_employees(&roster, &mut ui).unwrap(), Outcome::Shown(1));
    assert_eq!(ui.tables, vec![vec![2]]);

    let mut ui = ScriptedPresenter::new(&["bob"]);
    assert_eq!(search_employees(&roster, &mut ui).unwrap(), Outcome::NotFound);
    assert!(ui.tables.is_empty());
    assert_eq!(ui.errors.len(), 1);
}

#[test]
fn test_search_ignores_department() {
    let fixture = Fixture::new();
    let roster = fixture.seeded(&[employee(1, "Alice", "Engineer", 1.0)]);
    let mut ui = ScriptedPresenter::new(&["R&D"]);

    assert_eq!(search_employees(&roster, &mut ui).unwrap(), Outcome::NotFound);
}

#[test]
fn test_empty_store_list_and_search() {
    let fixture = Fixture::new();
    let roster = fixture.roster();

    let mut ui = ScriptedPresenter::new(&[]);
    assert_eq!(list_employees(&roster, &mut ui), Outcome::Empty);
    assert_eq!(ui.errors, vec!["No employees found."]);
    assert!(ui.tables.is_empty());

    let mut ui = ScriptedPresenter::new(&["anyone"]);
    assert_eq!(search_employees(&roster, &mut ui).unwrap(), Outcome::NotFound);
}

#[test]
fn test_list_shows_everything_in_order() {
    let fixture = Fixture::new();
    let roster = fixture.seeded(&[
        employee(4, "D", "x", 1.0),
        employee(2, "B", "x", 1.0),
        employee(9, "I", "x", 1.0),
    ]);
    let mut ui = ScriptedPresenter::new(&[]);

    assert_eq!(list_employees(&roster, &mut ui), Outcome::Shown(3));
    assert_eq!(ui.tables, vec![vec![4, 2, 9]]);
}

#[test]
fn test_compensation_never_non_positive_after_operations() {
    let fixture = Fixture::new();
    let mut roster = fixture.roster();
    let mut ui = ScriptedPresenter::new(&["Bob", "Eng", "R&D", "-1", "0", "10"]);
    add_employee(&mut roster, &mut ui).unwrap();
    let mut ui = ScriptedPresenter::new(&["Bob", "", "", "", "-50"]);
    update_employee(&mut roster, &mut ui).unwrap();

    assert!(roster
        .employees()
        .iter()
        .all(|e| e.compensation.value() > 0.0));
    assert!(Outcome::Added(1).is_mutation());
    assert!(!Outcome::Declined.is_mutation());
}

#[test]
fn test_add_after_largest_id_is_refused() {
    let fixture = Fixture::new();
    let mut roster = fixture.seeded(&[employee(u64::MAX, "Bob", "Eng", 1.0)]);
    let before = fixture.contents();
    let mut ui = ScriptedPresenter::new(&["Sue", "Mgr", "R&D", "10"]);

    let err = add_employee(&mut roster, &mut ui).unwrap_err();

    assert!(matches!(err, RosterError::Validation(_)));
    assert!(ui.prompts.is_empty());
    assert_eq!(roster.len(), 1);
    assert_eq!(fixture.contents(), before);
}

#[test]
fn test_failed_save_drops_added_record() {
    let mut roster = broken_roster(&[employee(1, "Bob", "Eng", 1.0)]);
    let mut ui = ScriptedPresenter::new(&["Sue", "Mgr", "R&D", "10"]);

    let err = add_employee(&mut roster, &mut ui).unwrap_err();

    assert!(matches!(err, RosterError::Storage(_)));
    assert!(ui.successes.is_empty());
    assert_eq!(roster.len(), 1);
    assert_eq!(roster.next_id().unwrap(), 2);
}

#[test]
fn test_failed_save_restores_deleted_record() {
    let mut roster = broken_roster(&[
        employee(1, "Ann", "Eng", 1.0),
        employee(2, "Bob", "Eng", 2.0),
        employee(3, "Cy", "Eng", 3.0),
    ]);
    let mut ui = ScriptedPresenter::new(&["bob", "y"]);

    let err = delete_employee(&mut roster, &mut ui).unwrap_err();

    assert!(matches!(err, RosterError::Storage(_)));
    assert!(ui.successes.is_empty());
    let ids: Vec<u64> = roster.employees().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_failed_save_restores_updated_record() {
    let original = employee(1, "Ann", "Eng", 1.0);
    let mut roster = broken_roster(&[original.clone()]);
    let mut ui = ScriptedPresenter::new(&["ann", "Anna", "Lead", "Ops", "5"]);

    let err = update_employee(&mut roster, &mut ui).unwrap_err();

    assert!(matches!(err, RosterError::Storage(_)));
    assert!(ui.successes.is_empty());
    assert_eq!(roster.employees()[0], original);
}

#[test]
fn test_update_whitespace_answers_keep_current_values() {
    let fixture = Fixture::new();
    let mut roster = fixture.seeded(&[employee(1, "Alice", "Engineer", 50_000.0)]);
    let mut ui = ScriptedPresenter::new(&["alice", "   ", "\t", "  Sales  ", " "]);

    let outcome = update_employee(&mut roster, &mut ui).unwrap();

    assert_eq!(outcome, Outcome::Updated(1));
    let updated = &roster.employees()[0];
    assert_eq!(updated.name, "Alice");
    assert_eq!(updated.title, "Engineer");
    assert_eq!(updated.department, "Sales");
    assert_eq!(updated.compensation.value(), 50_000.0);
    assert_eq!(fixture.contents().unwrap(), "1,Alice,Engineer,Sales,50000\n");
}
