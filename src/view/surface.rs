//! Interfaces a host provides to display ledger state and collect input.

use std::fmt;

/// Display regions that hold a single formatted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Budget,
    TotalExpenses,
    RemainingBudget,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Budget, Region::TotalExpenses, Region::RemainingBudget];

    pub fn label(self) -> &'static str {
        match self {
            Region::Budget => "Monthly budget",
            Region::TotalExpenses => "Total expenses",
            Region::RemainingBudget => "Remaining budget",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One rendered row of the expense table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    cells: Vec<String>,
}

impl TableRow {
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    /// Trimmed text of the cell at `index`; missing cells read as empty.
    pub fn cell_text(&self, index: usize) -> &str {
        self.cells.get(index).map(|cell| cell.trim()).unwrap_or("")
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}

/// Values currently typed into the expense form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    pub date: String,
    pub category: String,
    pub amount: String,
}

impl ExpenseForm {
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount: amount.into(),
        }
    }

    /// A form submits only when every field holds some text.
    pub fn is_complete(&self) -> bool {
        !self.date.is_empty() && !self.category.is_empty() && !self.amount.is_empty()
    }
}

/// Output side of the host: display regions and the expense table body.
pub trait VisualTree {
    fn set_region_text(&mut self, region: Region, text: &str);

    fn clear_table_body(&mut self);

    fn append_row(&mut self, row: TableRow);

    /// Rows currently present in the table body, top to bottom.
    fn table_rows(&self) -> Vec<TableRow>;
}

/// Input side of the host: the budget field and the expense form.
pub trait InputSurface {
    fn budget_input(&self) -> String;

    fn clear_budget_input(&mut self);

    fn expense_form(&self) -> ExpenseForm;

    fn reset_expense_form(&mut self);
}
