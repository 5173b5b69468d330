//! Line-oriented flat file backend.
//!
//! One record per line, five comma-separated fields in the order
//! `id,name,title,department,compensation`, no header, no quoting, and a
//! newline after every record.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::traits::RecordStore;
use super::types::{parse_compensation, Employee, FIELD_DELIMITER};
use crate::error::{Result, RosterError};
use crate::fs::write_atomic;

/// Default data file name, relative to the working directory.
pub const DEFAULT_FILE_NAME: &str = "employees.txt";

const FIELD_COUNT: usize = 5;

/// Flat file record store.
#[derive(Debug, Clone)]
pub struct FlatFileStore {
    path: PathBuf,
}

impl FlatFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FlatFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_NAME)
    }
}

impl RecordStore for FlatFileStore {
    fn load(&self) -> Result<Vec<Employee>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no data file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(err) => {
                return Err(RosterError::Storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    err
                )))
            }
        };

        let employees = decode(&contents).inspect_err(|err| {
            warn!(path = %self.path.display(), error = %err, "data file is malformed");
        })?;
        debug!(path = %self.path.display(), count = employees.len(), "loaded records");
        Ok(employees)
    }

    fn save(&self, employees: &[Employee]) -> Result<()> {
        let contents = encode(employees)?;
        write_atomic(&self.path, contents.as_bytes()).map_err(|err| {
            RosterError::Storage(format!("Failed to write {}: {}", self.path.display(), err))
        })?;
        debug!(path = %self.path.display(), count = employees.len(), "saved records");
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

/// Serialize records into flat file text.
pub fn encode(employees: &[Employee]) -> Result<String> {
    let mut out = String::new();
    for employee in employees {
        let fields = employee.fields();
        if let Some(bad) = fields
            .iter()
            .find(|f| f.contains(|c: char| c == FIELD_DELIMITER || c == '\n' || c == '\r'))
        {
            return Err(RosterError::Validation(format!(
                "employee {} has a field that cannot be stored: {:?}",
                employee.id, bad
            )));
        }
        out.push_str(&fields.join(&FIELD_DELIMITER.to_string()));
        out.push('\n');
    }
    Ok(out)
}

/// Parse flat file text into records.
pub fn decode(contents: &str) -> Result<Vec<Employee>> {
    contents
        .lines()
        .enumerate()
        .map(|(index, line)| decode_line(index + 1, line))
        .collect()
}

fn decode_line(line_no: usize, line: &str) -> Result<Employee> {
    let parts: Vec<&str> = line.trim().split(FIELD_DELIMITER).collect();
    let [id, name, title, department, compensation] = parts.as_slice() else {
        return Err(RosterError::malformed(
            line_no,
            format!("expected {} fields, found {}", FIELD_COUNT, parts.len()),
        ));
    };

    let id: u64 = id
        .parse()
        .map_err(|_| RosterError::malformed(line_no, format!("invalid id {:?}", id)))?;
    let compensation = parse_compensation(compensation).map_err(|err| {
        RosterError::malformed(line_no, format!("{} (found {:?})", err, compensation))
    })?;

    Ok(Employee::new(id, *name, *title, *department, compensation))
}
