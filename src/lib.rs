//! Expense Tracker - Terminal-based personal expense tracker
//!
//! Records expenses against a single total budget for the length of one
//! session and shows where the money went: a dashboard with budget usage and
//! spending per category, and an analysis of category shares. Nothing but the
//! settings file is ever written to disk.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Core data models (money, categories, expenses)
//! - `session`: The in-memory expense list and budget
//! - `services`: Form submission and budget actions
//! - `reports`: Summary and analysis derived from a session
//! - `display`: Plain-text rendering for the command line
//! - `cli`: Command-line subcommands
//! - `tui`: The interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::services::{ExpenseDraft, ExpenseService};
//! use expense_tracker::models::Category;
//! use expense_tracker::reports::SpendingSummary;
//! use expense_tracker::session::Session;
//!
//! let mut session = Session::new();
//! ExpenseService::new(&mut session).submit(&ExpenseDraft::new("Coffee", "4.50", Category::Food))?;
//! let summary = SpendingSummary::generate(&session, 0.8);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod session;
pub mod tui;

pub use error::TrackerError;
