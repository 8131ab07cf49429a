//! Dialog modules for the TUI
//!
//! Contains modal dialogs for adding expenses, setting the budget and
//! confirming destructive actions

pub mod budget;
pub mod confirm;
pub mod expense;
pub mod help;
