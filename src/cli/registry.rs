//! Command table. Every entry declares how many arguments it accepts, so a
//! malformed call is turned into a usage error before its handler runs.

use std::ops::RangeInclusive;

use strsim::levenshtein;

use crate::cli::core::{CommandError, CommandResult, ShellContext};

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// Largest edit distance still offered as a suggestion.
const SUGGESTION_DISTANCE: usize = 3;

pub struct CommandEntry {
    pub name: &'static str,
    pub usage: &'static str,
    pub summary: &'static str,
    arity: RangeInclusive<usize>,
    handler: CommandHandler,
}

impl CommandEntry {
    /// A command taking no arguments; widen with [`CommandEntry::takes`].
    pub fn new(
        name: &'static str,
        usage: &'static str,
        summary: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            usage,
            summary,
            arity: 0..=0,
            handler,
        }
    }

    pub fn takes(mut self, arity: RangeInclusive<usize>) -> Self {
        self.arity = arity;
        self
    }

    pub fn arity(&self) -> &RangeInclusive<usize> {
        &self.arity
    }

    pub fn usage_error(&self) -> CommandError {
        CommandError::Usage {
            command: self.name,
            usage: self.usage,
        }
    }

    /// Returns the handler when `args` fits the declared arity.
    pub fn bind(&self, args: &[&str]) -> Result<CommandHandler, CommandError> {
        if self.arity.contains(&args.len()) {
            Ok(self.handler)
        } else {
            Err(self.usage_error())
        }
    }
}

/// Command table in registration order. Re-registering a name replaces the
/// earlier entry in place.
#[derive(Default)]
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: CommandEntry) {
        match self.entries.iter_mut().find(|e| e.name == entry.name) {
            Some(slot) => *slot = entry,
            None => self.entries.push(entry),
        }
    }

    /// Looks a command up ignoring ASCII case.
    pub fn find(&self, name: &str) -> Option<&CommandEntry> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }

    /// Nearest command name to a mistyped `input`, if any is close enough.
    pub fn closest(&self, input: &str) -> Option<&'static str> {
        let needle = input.to_lowercase();
        self.names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance)
            .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
            .map(|(_, name)| name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
        Ok(())
    }

    fn registry() -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        registry.register(
            CommandEntry::new("budget", "budget <amount>", "Set", noop).takes(1..=1),
        );
        registry.register(CommandEntry::new("show", "show", "Show", noop));
        registry
    }

    #[test]
    fn bind_checks_argument_count() {
        let registry = registry();
        let budget = registry.find("budget").unwrap();
        assert!(budget.bind(&["10"]).is_ok());

        let err = budget.bind(&[]).unwrap_err();
        assert!(matches!(
            err,
            CommandError::Usage {
                command: "budget",
                usage: "budget <amount>"
            }
        ));
        assert_eq!(err.to_string(), "Usage: budget <amount>");
        assert!(registry.find("show").unwrap().bind(&["extra"]).is_err());
    }

    #[test]
    fn lookup_ignores_case_and_replaces_duplicates() {
        let mut registry = registry();
        assert_eq!(registry.find("SHOW").map(|e| e.name), Some("show"));

        registry.register(CommandEntry::new("budget", "budget", "Other", noop));
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["budget", "show"]);
        assert_eq!(registry.find("budget").unwrap().summary, "Other");
    }

    #[test]
    fn closest_stays_within_three_edits() {
        let registry = registry();
        assert_eq!(registry.closest("bugdet"), Some("budget"));
        assert_eq!(registry.closest("Shw"), Some("show"));
        assert_eq!(registry.closest("configure"), None);
    }
}
