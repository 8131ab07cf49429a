//! Core data models for the expense tracker
//!
//! Money amounts, the fixed category set and the expense record itself.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::{Category, UnknownCategory};
pub use expense::{Expense, ExpenseValidationError};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
