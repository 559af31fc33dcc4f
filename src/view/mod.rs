//! Projection of ledger state onto a visual surface.

pub mod binder;
pub mod memory;
pub mod surface;

pub use binder::ViewBinder;
pub use memory::MemorySurface;
pub use surface::{ExpenseForm, InputSurface, Region, TableRow, VisualTree};
