use tracing::debug;

use crate::currency::{format_money, symbol_for, DEFAULT_CURRENCY};
use crate::ledger::ordering::compare_cells;
use crate::ledger::{CellType, ExpenseLedger, LedgerChange};

use super::surface::{Region, TableRow, VisualTree};

/// Writes ledger state into a [`VisualTree`] and reorders rendered rows.
///
/// The binder never holds ledger state itself: every render reads the
/// ledger it is handed, so the surface can be rebuilt at any time.
pub struct ViewBinder<S> {
    surface: S,
    symbol: String,
}

impl<S: VisualTree> ViewBinder<S> {
    pub fn new(surface: S) -> Self {
        Self::with_symbol(surface, symbol_for(DEFAULT_CURRENCY))
    }

    pub fn with_symbol(surface: S, symbol: impl Into<String>) -> Self {
        Self {
            surface,
            symbol: symbol.into(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Switches the currency symbol used by subsequent renders.
    pub fn set_symbol(&mut self, symbol: impl Into<String>) {
        self.symbol = symbol.into();
    }

    pub fn render_budget(&mut self, ledger: &ExpenseLedger) {
        self.render_region(Region::Budget, ledger.budget());
    }

    pub fn render_total(&mut self, ledger: &ExpenseLedger) {
        self.render_region(Region::TotalExpenses, ledger.total_expenses());
    }

    pub fn render_remaining(&mut self, ledger: &ExpenseLedger) {
        self.render_region(Region::RemainingBudget, ledger.remaining());
    }

    fn render_region(&mut self, region: Region, value: f64) {
        let text = format_money(&self.symbol, value);
        self.surface.set_region_text(region, &text);
    }

    /// Rebuilds the table body from the ledger, in insertion order.
    pub fn render_expense_table(&mut self, ledger: &ExpenseLedger) {
        self.surface.clear_table_body();
        for expense in ledger.expenses() {
            self.surface.append_row(TableRow::new(expense.cells()));
        }
        debug!(rows = ledger.expenses().len(), "expense table rendered");
    }

    /// Renders every region and the table.
    pub fn render_all(&mut self, ledger: &ExpenseLedger) {
        self.render_budget(ledger);
        self.render_total(ledger);
        self.render_remaining(ledger);
        self.render_expense_table(ledger);
    }

    /// Refreshes the displays a ledger mutation made stale.
    pub fn apply(&mut self, change: LedgerChange, ledger: &ExpenseLedger) {
        match change {
            LedgerChange::BudgetUpdated => {
                self.render_budget(ledger);
                self.render_remaining(ledger);
            }
            LedgerChange::ExpenseAdded => {
                self.render_expense_table(ledger);
                self.render_total(ledger);
                self.render_remaining(ledger);
            }
        }
    }

    /// Reorders the rows currently in the table body by the text of
    /// column `column`, ascending. Only the surface changes; the next
    /// table render restores ledger order.
    pub fn sort_rows(&mut self, column: usize, cell_type: CellType) {
        let mut rows = self.surface.table_rows();
        rows.sort_by(|a, b| {
            compare_cells(a.cell_text(column), b.cell_text(column), cell_type)
        });
        self.surface.clear_table_body();
        for row in rows {
            self.surface.append_row(row);
        }
        debug!(column, ?cell_type, "table rows sorted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::MemorySurface;

    fn binder_with_expenses(
        expenses: &[(&str, &str, &str)],
    ) -> (ViewBinder<MemorySurface>, ExpenseLedger) {
        let mut ledger = ExpenseLedger::new();
        for (date, category, amount) in expenses {
            ledger.add_expense(date, category, amount).unwrap();
        }
        let mut binder = ViewBinder::new(MemorySurface::new());
        binder.render_all(&ledger);
        (binder, ledger)
    }

    #[test]
    fn regions_use_symbol_and_amount_format() {
        let (mut binder, mut ledger) = binder_with_expenses(&[("2024-01-01", "Food", "49.5")]);
        ledger.set_budget("100").unwrap();
        binder.apply(LedgerChange::BudgetUpdated, &ledger);

        let surface = binder.surface();
        assert_eq!(surface.region_text(Region::Budget), "$100");
        assert_eq!(surface.region_text(Region::TotalExpenses), "$49.50");
        assert_eq!(surface.region_text(Region::RemainingBudget), "$50.50");
    }

    #[test]
    fn table_cells_carry_no_symbol() {
        let (binder, _) = binder_with_expenses(&[("2024-01-01", "Food", "50")]);
        let row = &binder.surface().rows()[0];
        assert_eq!(row.cells(), ["2024-01-01", "Food", "50"]);
    }

    #[test]
    fn rendering_twice_yields_the_same_rows() {
        let (mut binder, ledger) =
            binder_with_expenses(&[("2024-01-01", "Food", "5"), ("2024-01-02", "Bus", "2.25")]);
        let first = binder.surface().rows().to_vec();
        binder.render_expense_table(&ledger);
        assert_eq!(binder.surface().rows(), first.as_slice());
    }

    #[test]
    fn sort_rows_orders_by_column_type() {
        let (mut binder, _) = binder_with_expenses(&[
            ("2024-02-01", "rent", "100"),
            ("2024-01-20", "Food", "9.99"),
            ("2024-01-31", "bills", "25"),
        ]);

        binder.sort_rows(2, CellType::Number);
        assert_eq!(binder.surface().column(2), vec!["9.99", "25", "100"]);

        binder.sort_rows(0, CellType::Date);
        assert_eq!(
            binder.surface().column(0),
            vec!["2024-01-20", "2024-01-31", "2024-02-01"]
        );

        binder.sort_rows(1, CellType::Text);
        assert_eq!(binder.surface().column(1), vec!["bills", "Food", "rent"]);
    }

    #[test]
    fn sort_rows_tolerates_missing_columns() {
        let (mut binder, _) = binder_with_expenses(&[("b", "x", "2"), ("a", "y", "1")]);
        binder.sort_rows(7, CellType::Text);
        assert_eq!(binder.surface().column(0), vec!["b", "a"]);
    }

    #[test]
    fn symbol_can_change() {
        let (mut binder, ledger) = binder_with_expenses(&[("2024-01-01", "Food", "3")]);
        binder.set_symbol("€");
        binder.render_total(&ledger);
        assert_eq!(binder.surface().region_text(Region::TotalExpenses), "€3");
    }
}
