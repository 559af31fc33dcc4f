use std::fmt;

use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::cli::core::CommandError;
use crate::cli::output::{self, OutputPreferences};
use crate::config::Config;

/// Print an informational message via the standard CLI output helpers.
pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

/// Print a warning message via the standard CLI output helpers.
pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

/// Print an error message via the standard CLI output helpers.
pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

/// Print a success message via the standard CLI output helpers.
pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

pub fn print_hint(message: impl fmt::Display) {
    output::hint(message);
}

/// Pushes output-related settings into the global output preferences.
pub fn apply_config(config: &Config, force_plain: bool) {
    let plain_mode = config.plain_output || force_plain;
    if plain_mode {
        colored::control::set_override(false);
    } else {
        colored::control::unset_override();
    }
    output::set_preferences(OutputPreferences {
        plain_mode,
        quiet_mode: false,
    });
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(prompt: &str) -> Result<bool, CommandError> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(true)
        .interact()
        .map_err(CommandError::from)
}
