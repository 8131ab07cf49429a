//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod category;
pub mod config;
pub mod summary;

pub use category::handle_categories_command;
pub use config::handle_config_command;
pub use summary::{handle_summary_command, SummaryArgs};

use crate::models::{Category, Money};
use crate::services::ExpenseDraft;

/// Parse a budget argument; negative values are rejected
pub fn parse_budget(s: &str) -> Result<Money, String> {
    let budget = Money::parse(s).map_err(|e| e.to_string())?;
    if budget.is_negative() {
        return Err("Budget cannot be negative".to_string());
    }
    Ok(budget)
}

/// Parse a `DESCRIPTION:AMOUNT:CATEGORY` expense argument
///
/// Splits from the right so descriptions may contain colons. The amount and
/// description are kept as typed; the expense form validates them.
pub fn parse_expense(s: &str) -> Result<ExpenseDraft, String> {
    let mut parts = s.rsplitn(3, ':');
    let category = parts.next().unwrap_or_default();
    let (Some(amount), Some(description)) = (parts.next(), parts.next()) else {
        return Err(format!(
            "expected DESCRIPTION:AMOUNT:CATEGORY, got '{}'",
            s
        ));
    };

    let category: Category = category.trim().parse().map_err(|e| format!("{}", e))?;
    Ok(ExpenseDraft::new(description, amount.trim(), category))
}
