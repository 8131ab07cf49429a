//! Spending analysis
//!
//! Share of spending per category plus two headline facts: the
//! highest-spending category and the average expense. There is no analysis
//! for an empty session; `generate` returns `None` and views show a
//! placeholder instead.

use serde::Serialize;

use super::summary::{average_per_transaction, per_category_totals, top_category, CategoryTotal};
use crate::models::Money;
use crate::session::Session;

/// Analysis of a non-empty session
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Per-category totals with their share of spending
    pub shares: Vec<CategoryTotal>,
    /// Highest-spending category
    pub top_category: CategoryTotal,
    /// Mean expense amount
    pub average_per_transaction: Money,
    /// Number of expenses analysed
    pub expense_count: usize,
}

impl AnalysisReport {
    /// Generate the analysis, or `None` when there are no expenses
    pub fn generate(session: &Session) -> Option<Self> {
        let expenses = session.expenses();
        let average = average_per_transaction(expenses)?;
        let shares = per_category_totals(expenses);
        let top = top_category(&shares)?.clone();

        Some(Self {
            shares,
            top_category: top,
            average_per_transaction: average,
            expense_count: expenses.len(),
        })
    }
}
