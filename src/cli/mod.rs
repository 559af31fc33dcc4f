//! Terminal host: a line-oriented shell that plays the part of the page,
//! feeding input events to the tracker and drawing its surface.

pub mod commands;
pub mod core;
pub mod help;
pub mod io;
pub mod output;
pub mod registry;
pub mod shell;
pub mod ui;

pub use shell::run_cli;
