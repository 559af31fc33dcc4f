#![allow(dead_code)]

use budget_tracker::{
    errors::LedgerError,
    tracker::{BudgetTracker, FormOutcome},
    view::{ExpenseForm, MemorySurface},
};

/// Tracker over a fresh in-memory surface.
pub fn tracker() -> BudgetTracker<MemorySurface> {
    budget_tracker::init();
    BudgetTracker::new(MemorySurface::new())
}

/// Types `value` into the budget field and presses update.
pub fn set_budget(
    tracker: &mut BudgetTracker<MemorySurface>,
    value: &str,
) -> Result<(), LedgerError> {
    tracker.surface_mut().type_budget(value);
    tracker.update_budget()
}

/// Fills and submits the expense form.
pub fn add_expense(
    tracker: &mut BudgetTracker<MemorySurface>,
    date: &str,
    category: &str,
    amount: &str,
) -> Result<FormOutcome, LedgerError> {
    tracker
        .surface_mut()
        .fill_expense_form(ExpenseForm::new(date, category, amount));
    tracker.submit_expense()
}
