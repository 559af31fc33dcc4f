//! Shell context, command dispatch and error reporting.

use std::io;

use thiserror::Error;

use crate::{
    config::{Config, ConfigManager},
    currency::{format_money, symbol_for},
    errors::{CliError, ConfigError, LedgerError},
    tracker::BudgetTracker,
    view::{MemorySurface, ViewBinder},
};

use super::commands;
use super::io as cli_io;
use super::registry::{CommandEntry, CommandRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Failures of a single command. None of them end the shell except
/// `ExitRequested`.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Usage: {usage}")]
    Usage {
        command: &'static str,
        usage: &'static str,
    },
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("exit requested")]
    ExitRequested,
}

pub type CommandResult = Result<(), CommandError>;

/// Runtime state shared by every command: the tracker with its in-memory
/// surface plus the loaded configuration.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub tracker: BudgetTracker<MemorySurface>,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_config_manager(mode, ConfigManager::new())
    }

    pub fn with_config_manager(
        mode: CliMode,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config = config_manager.load()?;
        cli_io::apply_config(&config, mode == CliMode::Script);

        let binder = ViewBinder::with_symbol(MemorySurface::new(), symbol_for(&config.currency));
        let tracker = BudgetTracker::with_binder(binder);

        tracing::info!(?mode, config = %config_manager.path().display(), "shell started");

        Ok(Self {
            mode,
            registry,
            tracker,
            config_manager,
            config,
            last_command: None,
            running: true,
        })
    }

    pub fn prompt(&self) -> String {
        let symbol = self.tracker.binder().symbol();
        let remaining = format_money(symbol, self.tracker.ledger().remaining());
        format!("budget [{}]> ", remaining)
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.find(name)
    }

    pub fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let handler = match self.registry.find(command) {
            Some(entry) => entry.bind(args)?,
            None => {
                self.suggest_command(raw);
                return Ok(LoopControl::Continue);
            }
        };
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    /// Tokenizes and dispatches one line, as the shell loop does.
    pub fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match super::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                cli_io::print_warning(&err);
                return Ok(LoopControl::Continue);
            }
        };

        let Some(raw) = tokens.first() else {
            return Ok(LoopControl::Continue);
        };
        let command = raw.to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

        self.last_command = Some(line.trim().to_string());

        match self.dispatch(&command, raw, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        if let Some(name) = self.registry.closest(input) {
            cli_io::print_info(format!("Suggestion: `{}`?", name));
        }
    }

    pub fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        match cli_io::confirm_action("Exit budget tracker? The ledger is not saved.") {
            Ok(answer) => Ok(answer),
            Err(CommandError::Dialoguer(err)) => Err(err.into()),
            Err(_) => Ok(true),
        }
    }

    /// Reports a failed command. Validation failures surface as errors
    /// and the shell keeps running.
    pub fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::Usage { command, usage } => {
                cli_io::print_error(format!("Usage: {}", usage));
                cli_io::print_hint(format!("Run `help {}` for details.", command));
            }
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(message);
                cli_io::print_hint("Use `help <command>` for usage details.");
            }
            CommandError::Ledger(err) => {
                tracing::debug!(error = ?err, "command rejected by ledger");
                cli_io::print_error(err);
            }
            other => cli_io::print_error(other),
        }
    }

    /// Saves the configuration and pushes it to the output and the view.
    pub fn persist_config(&mut self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        cli_io::apply_config(&self.config, self.mode == CliMode::Script);
        self.tracker
            .binder_mut()
            .set_symbol(symbol_for(&self.config.currency));
        self.tracker.refresh();
        Ok(())
    }
}
