//! Service layer for the expense tracker
//!
//! Services borrow the session they act on, validate user input, and log
//! every state change. Views never mutate the session directly.

pub mod budget;
pub mod expense;

pub use budget::BudgetService;
pub use expense::{ExpenseDraft, ExpenseService, INVALID_EXPENSE_MESSAGE};
