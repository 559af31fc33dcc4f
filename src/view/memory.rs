use std::collections::HashMap;

use super::surface::{ExpenseForm, InputSurface, Region, TableRow, VisualTree};

/// Visual tree and input surface kept entirely in memory. The terminal
/// shell draws from it and tests inspect it directly.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    regions: HashMap<Region, String>,
    rows: Vec<TableRow>,
    budget_input: String,
    form: ExpenseForm,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text shown in `region`; empty until first rendered.
    pub fn region_text(&self, region: Region) -> &str {
        self.regions.get(&region).map(String::as_str).unwrap_or("")
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Text of column `index` for every row, top to bottom.
    pub fn column(&self, index: usize) -> Vec<&str> {
        self.rows.iter().map(|row| row.cell_text(index)).collect()
    }

    pub fn type_budget(&mut self, value: impl Into<String>) {
        self.budget_input = value.into();
    }

    pub fn fill_expense_form(&mut self, form: ExpenseForm) {
        self.form = form;
    }
}

impl VisualTree for MemorySurface {
    fn set_region_text(&mut self, region: Region, text: &str) {
        self.regions.insert(region, text.to_string());
    }

    fn clear_table_body(&mut self) {
        self.rows.clear();
    }

    fn append_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    fn table_rows(&self) -> Vec<TableRow> {
        self.rows.clone()
    }
}

impl InputSurface for MemorySurface {
    fn budget_input(&self) -> String {
        self.budget_input.clone()
    }

    fn clear_budget_input(&mut self) {
        self.budget_input.clear();
    }

    fn expense_form(&self) -> ExpenseForm {
        self.form.clone()
    }

    fn reset_expense_form(&mut self) {
        self.form = ExpenseForm::default();
    }
}
