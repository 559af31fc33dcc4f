use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::ui::table_renderer::{Alignment, Table, TableColumn};

/// One row per command: its usage line next to what it does.
pub fn overview_table(registry: &CommandRegistry) -> String {
    let rows = registry
        .entries()
        .iter()
        .map(|entry| vec![entry.usage.to_string(), entry.summary.to_string()])
        .collect();
    Table {
        columns: vec![
            TableColumn::new("USAGE", 12, Alignment::Left),
            TableColumn::new("DESCRIPTION", 11, Alignment::Left),
        ],
        rows,
        padding: 1,
    }
    .render()
}

pub fn print_overview(registry: &CommandRegistry) {
    output_section("Commands");
    io::print_info(overview_table(registry));
    io::print_hint("Arguments with spaces can be quoted: add 2024-01-01 \"Eating out\" 12");
}

/// Detail lines for one command, including how many arguments it accepts.
pub fn command_lines(entry: &CommandEntry) -> Vec<String> {
    let arity = entry.arity();
    let arguments = match (*arity.start(), *arity.end()) {
        (0, 0) => "none".to_string(),
        (min, max) if min == max => min.to_string(),
        (min, max) => format!("{} to {}", min, max),
    };
    vec![
        format!("  {}", entry.summary),
        format!("  Usage     : {}", entry.usage),
        format!("  Arguments : {}", arguments),
    ]
}

pub fn print_command(entry: &CommandEntry) {
    output_section(format!("Help: {}", entry.name));
    for line in command_lines(entry) {
        io::print_info(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;

    fn registry() -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        registry
    }

    #[test]
    fn overview_lists_usage_inline() {
        let table = overview_table(&registry());
        let add_line = table
            .lines()
            .find(|line| line.contains("add <date> <category> <amount>"))
            .unwrap();
        assert!(add_line.contains("Record an expense"));
        assert!(table.contains("sort <date|category|amount>"));
    }

    #[test]
    fn command_lines_describe_argument_counts() {
        let registry = registry();
        let list = command_lines(registry.find("list").unwrap());
        assert_eq!(list[1], "  Usage     : list [date|category|amount]");
        assert_eq!(list[2], "  Arguments : 0 to 1");

        let show = command_lines(registry.find("show").unwrap());
        assert_eq!(show[2], "  Arguments : none");

        let add = command_lines(registry.find("add").unwrap());
        assert_eq!(add[2], "  Arguments : 3");
    }
}
