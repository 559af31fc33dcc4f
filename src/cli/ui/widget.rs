//! Terminal drawing of the budget summary and expense table.

use crate::cli::io;
use crate::cli::output::section;
use crate::ledger::Expense;
use crate::view::{MemorySurface, Region};

use super::table_renderer::{Alignment, Table, TableColumn};

const CATEGORY_MAX_WIDTH: usize = 24;

fn expense_table(rows: Vec<Vec<String>>) -> Table {
    Table {
        columns: vec![
            TableColumn::new("DATE", 10, Alignment::Left),
            TableColumn::new("CATEGORY", 8, Alignment::Left).max_width(CATEGORY_MAX_WIDTH),
            TableColumn::new("AMOUNT", 6, Alignment::Right),
        ],
        rows,
        padding: 1,
    }
}

/// Summary lines for the three display regions, as shown on the surface.
pub fn summary_lines(surface: &MemorySurface) -> Vec<String> {
    Region::ALL
        .iter()
        .map(|region| format!("  {:<17}: {}", region.label(), surface.region_text(*region)))
        .collect()
}

/// The table body exactly as the surface currently holds it.
pub fn surface_table(surface: &MemorySurface) -> Option<String> {
    if surface.rows().is_empty() {
        return None;
    }
    let rows = surface.rows().iter().map(|row| row.cells().to_vec()).collect();
    Some(expense_table(rows).render())
}

/// Table of ledger records in the given order.
pub fn expenses_table<'a>(expenses: impl IntoIterator<Item = &'a Expense>) -> Option<String> {
    let rows: Vec<Vec<String>> = expenses
        .into_iter()
        .map(|expense| expense.cells().to_vec())
        .collect();
    if rows.is_empty() {
        return None;
    }
    Some(expense_table(rows).render())
}

pub fn print_surface(surface: &MemorySurface) {
    section("Budget");
    for line in summary_lines(surface) {
        io::print_info(line);
    }
    match surface_table(surface) {
        Some(table) => io::print_info(table),
        None => io::print_info("  No expenses recorded."),
    }
}
