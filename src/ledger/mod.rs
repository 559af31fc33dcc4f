//! In-memory budget and expense bookkeeping.

pub mod expense;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod ordering;

pub use expense::Expense;
pub use ledger::{ExpenseLedger, LedgerChange};
pub use ordering::{CellType, SortField};
