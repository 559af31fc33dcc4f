use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::widget;
use crate::ledger::SortField;
use crate::tracker::FormOutcome;
use crate::view::ExpenseForm;

const ADD_USAGE: &str = "add <date> <category> <amount>";
const LIST_USAGE: &str = "list [date|category|amount]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("add", ADD_USAGE, "Record an expense", cmd_add).takes(3..=3),
        CommandEntry::new(
            "list",
            LIST_USAGE,
            "List recorded expenses in entry order or by a field",
            cmd_list,
        )
        .takes(0..=1),
    ]
}

/// Fills the expense form with the three arguments and submits it.
fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context
        .tracker
        .surface_mut()
        .fill_expense_form(ExpenseForm::new(args[0], args[1], args[2]));

    match context.tracker.submit_expense()? {
        FormOutcome::Recorded => {
            io::print_success("Expense added.");
            if context.config.show_after_change {
                widget::print_surface(context.tracker.surface());
            }
        }
        FormOutcome::Incomplete => {
            io::print_warning("Date, category and amount are all required.");
        }
    }
    Ok(())
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let ledger = context.tracker.ledger();

    let table = match args.first() {
        Some(raw) => {
            let field: SortField = raw.parse().map_err(CommandError::InvalidArguments)?;
            section(format!("Expenses by {}", field));
            widget::expenses_table(ledger.ordered_by(field))
        }
        None => {
            section("Expenses");
            widget::expenses_table(ledger.expenses())
        }
    };

    match table {
        Some(table) => io::print_info(table),
        None => io::print_info("  No expenses recorded."),
    }
    Ok(())
}
