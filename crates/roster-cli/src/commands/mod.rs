mod interactive;
mod list;
mod misc;
mod search;

pub use interactive::{handle_interactive, handle_menu};
pub use list::handle_list;
pub use misc::handle_completions;
pub use search::handle_search;

use crate::errors::CliError;
use crate::ui::OutputFormat;

/// Parse `--format`, refusing it alongside `--json`.
pub(crate) fn parse_output_format(
    json: bool,
    format: Option<&str>,
) -> anyhow::Result<Option<OutputFormat>> {
    let Some(raw) = format else {
        return Ok(None);
    };
    if json {
        return Err(CliError::invalid_input("--format cannot be combined with --json").into());
    }
    raw.parse::<OutputFormat>()
        .map(Some)
        .map_err(|e| CliError::invalid_input(e).into())
}
