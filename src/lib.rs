#![doc(test(attr(deny(warnings))))]

//! Budget Tracker keeps a monthly budget and a list of dated expenses in
//! memory, and projects them onto a visual surface: budget, total and
//! remaining displays plus a sortable expense table.

pub mod cli;
pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod tracker;
pub mod utils;
pub mod view;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Budget Tracker tracing initialized.");
    });
}
