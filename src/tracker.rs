//! Wires input events to ledger mutations and view refreshes.

use tracing::{debug, info};

use crate::errors::LedgerError;
use crate::ledger::{ExpenseLedger, SortField};
use crate::view::{InputSurface, ViewBinder, VisualTree};

/// Result of submitting the expense form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    /// The expense was recorded and the form reset.
    Recorded,
    /// At least one field was empty; nothing happened.
    Incomplete,
}

/// Owns the ledger and the surface it is shown on. Each event handler
/// finishes the ledger mutation before anything is re-rendered.
pub struct BudgetTracker<S> {
    ledger: ExpenseLedger,
    binder: ViewBinder<S>,
}

impl<S: VisualTree + InputSurface> BudgetTracker<S> {
    /// Builds a tracker over `surface` and renders the empty ledger.
    pub fn new(surface: S) -> Self {
        Self::with_binder(ViewBinder::new(surface))
    }

    pub fn with_binder(binder: ViewBinder<S>) -> Self {
        let mut tracker = Self {
            ledger: ExpenseLedger::new(),
            binder,
        };
        tracker.binder.render_all(&tracker.ledger);
        info!("budget tracker ready");
        tracker
    }

    pub fn ledger(&self) -> &ExpenseLedger {
        &self.ledger
    }

    pub fn binder(&self) -> &ViewBinder<S> {
        &self.binder
    }

    pub fn binder_mut(&mut self) -> &mut ViewBinder<S> {
        &mut self.binder
    }

    pub fn surface(&self) -> &S {
        self.binder.surface()
    }

    pub fn surface_mut(&mut self) -> &mut S {
        self.binder.surface_mut()
    }

    /// Handles the update-budget button: reads the budget field, applies
    /// it, refreshes the displays and clears the field. On error the field
    /// and the ledger stay as they were.
    pub fn update_budget(&mut self) -> Result<(), LedgerError> {
        let input = self.binder.surface().budget_input();
        let change = self.ledger.set_budget(&input)?;
        self.binder.apply(change, &self.ledger);
        self.binder.surface_mut().clear_budget_input();
        Ok(())
    }

    /// Handles expense form submission. Incomplete forms are ignored;
    /// otherwise the form is reset after the add attempt, even when the
    /// amount was rejected.
    pub fn submit_expense(&mut self) -> Result<FormOutcome, LedgerError> {
        let form = self.binder.surface().expense_form();
        if !form.is_complete() {
            debug!("expense form submitted with empty fields");
            return Ok(FormOutcome::Incomplete);
        }

        let result = self
            .ledger
            .add_expense(&form.date, &form.category, &form.amount);
        if let Ok(change) = &result {
            self.binder.apply(*change, &self.ledger);
        }
        self.binder.surface_mut().reset_expense_form();
        result.map(|_| FormOutcome::Recorded)
    }

    /// Handles a sort selector change by reordering the rendered rows.
    pub fn select_sort(&mut self, field: SortField) {
        self.binder.sort_rows(field.column(), field.cell_type());
    }

    /// Re-renders every display from the ledger, discarding any row sort.
    pub fn refresh(&mut self) {
        self.binder.render_all(&self.ledger);
    }
}
