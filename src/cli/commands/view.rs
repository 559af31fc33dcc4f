use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::registry::CommandEntry;
use crate::cli::ui::widget;
use crate::ledger::SortField;

const SORT_USAGE: &str = "sort <date|category|amount>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "sort",
            SORT_USAGE,
            "Reorder the displayed table (reset by the next change)",
            cmd_sort,
        )
        .takes(1..=1),
        CommandEntry::new(
            "show",
            "show",
            "Show the budget summary and expense table",
            cmd_show,
        ),
    ]
}

fn cmd_sort(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let field: SortField = args[0].parse().map_err(CommandError::InvalidArguments)?;
    context.tracker.select_sort(field);
    widget::print_surface(context.tracker.surface());
    Ok(())
}

fn cmd_show(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    widget::print_surface(context.tracker.surface());
    Ok(())
}
