//! Terminal User Interface module
//!
//! Interactive session built on ratatui: a dashboard and an analysis view,
//! a sidebar with the budget metrics, modal dialogs for data entry and toast
//! notifications.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
