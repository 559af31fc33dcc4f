use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::widget;

const USAGE: &str = "budget <amount>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new("budget", USAGE, "Set the monthly budget", cmd_budget).takes(1..=1)]
}

/// Types the amount into the budget field and presses update.
fn cmd_budget(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.tracker.surface_mut().type_budget(args[0]);
    context.tracker.update_budget()?;

    io::print_success("Budget updated.");
    if context.config.show_after_change {
        widget::print_surface(context.tracker.surface());
    }
    Ok(())
}
