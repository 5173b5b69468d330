//! Terminal prompt primitives backed by dialoguer.

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

/// Read one line of free text from the terminal.
///
/// Empty answers are allowed; callers decide what blank means.
pub fn prompt_line(prompt: &str) -> anyhow::Result<String> {
    let theme = ColorfulTheme::default();
    let answer = Input::<String>::with_theme(&theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read input: {}", e))?;
    Ok(answer)
}
