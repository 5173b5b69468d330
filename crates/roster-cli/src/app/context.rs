//! Application context for the Roster CLI.
//!
//! Bundles CLI arguments with the lazily-loaded config file.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;
use roster_core::{FlatFileStore, Roster, RosterError};
use tracing::info;

use crate::cli::Cli;
use crate::config::{read_config_or_default, RosterConfig};
use crate::errors::CliError;
use crate::ui::{OutputFormat, UiContext, UiOptions};

use super::resolver::{resolve_config_path, resolve_data_path};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<RosterConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Get the config file contents, loading them on first use.
    pub fn config(&self) -> anyhow::Result<&RosterConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path(self.cli.config.as_deref())?;
            read_config_or_default(&path)
        })
    }

    pub fn data_path(&self) -> anyhow::Result<PathBuf> {
        Ok(resolve_data_path(self.cli.file.as_deref(), self.config()?))
    }

    /// Build the UI context for a command.
    ///
    /// Falls back to flag-only settings if the config cannot be read, so
    /// errors about the config itself can still be rendered.
    pub fn ui_context(&self, json: bool, format: Option<OutputFormat>) -> UiContext {
        let ui_config = self.config().ok().map(|c| &c.ui);
        UiContext::from_env(UiOptions {
            json,
            format,
            no_color: self.cli.no_color,
            ascii: self.cli.ascii || ui_config.and_then(|u| u.ascii).unwrap_or(false),
            config_color: ui_config.and_then(|u| u.color),
        })
    }

    /// Load the roster from the resolved data file.
    pub fn open_roster(&self) -> anyhow::Result<Roster<FlatFileStore>> {
        let path = self.data_path()?;
        info!(path = %path.display(), "opening roster");
        match Roster::open(FlatFileStore::new(&path)) {
            Ok(roster) => Ok(roster),
            Err(err @ RosterError::Malformed { .. }) => Err(CliError::malformed_data(
                format!("Cannot load {}: {}", path.display(), err),
                "Fix or remove the offending line, then run roster again.",
            )
            .into()),
            Err(err) => Err(err.into()),
        }
    }
}
