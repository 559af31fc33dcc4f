use std::fmt;

use thiserror::Error;

/// Which input an amount was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountField {
    Budget,
    Expense,
}

impl fmt::Display for AmountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountField::Budget => f.write_str("budget"),
            AmountField::Expense => f.write_str("expense"),
        }
    }
}

/// Error type for rejected ledger mutations. A failed mutation leaves the
/// ledger untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    #[error("Please enter a valid {field} amount.")]
    InvalidAmount { field: AmountField, input: String },
}

impl LedgerError {
    pub(crate) fn invalid(field: AmountField, input: &str) -> Self {
        LedgerError::InvalidAmount {
            field,
            input: input.to_string(),
        }
    }
}

/// Failures while loading or storing the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid value for `{key}`: {message}")]
    InvalidValue { key: String, message: String },
    #[error("Unknown config key `{0}`")]
    UnknownKey(String),
}

/// Errors that abort the interactive shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_amount_messages_name_the_field() {
        let budget = LedgerError::invalid(AmountField::Budget, "-1");
        assert_eq!(budget.to_string(), "Please enter a valid budget amount.");

        let expense = LedgerError::invalid(AmountField::Expense, "abc");
        assert_eq!(expense.to_string(), "Please enter a valid expense amount.");
    }
}
