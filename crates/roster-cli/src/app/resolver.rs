//! Path resolution for config and data files.

use std::path::PathBuf;

use roster_core::storage::DEFAULT_FILE_NAME;

use crate::config::{default_config_path, RosterConfig};

/// Resolve the config file path: `--config` / `ROSTER_CONFIG` first, then XDG.
pub fn resolve_config_path(flag: Option<&str>) -> anyhow::Result<PathBuf> {
    if let Some(value) = flag {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the data file path.
///
/// Order: `--file` / `ROSTER_FILE`, then `storage.path` from the config,
/// then `employees.txt` in the working directory.
pub fn resolve_data_path(flag: Option<&str>, config: &RosterConfig) -> PathBuf {
    if let Some(value) = flag.filter(|v| !v.trim().is_empty()) {
        return PathBuf::from(value);
    }
    if let Some(value) = config
        .storage
        .path
        .as_deref()
        .filter(|v| !v.trim().is_empty())
    {
        return PathBuf::from(value);
    }
    PathBuf::from(DEFAULT_FILE_NAME)
}
