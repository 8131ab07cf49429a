//! Spending summary
//!
//! Everything the dashboard shows, computed in one pass over a session
//! snapshot: totals, remaining budget, usage ratio, budget status and the
//! per-category breakdown.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Category, Expense, Money};
use crate::session::Session;

/// Default usage ratio above which the budget counts as nearly spent
pub const DEFAULT_NEAR_LIMIT_RATIO: f64 = 0.8;

/// Spending for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    /// Category
    pub category: Category,
    /// Sum of amounts in this category
    pub total: Money,
    /// Number of expenses in this category
    pub count: usize,
    /// Percentage of total spending (0-100)
    pub share: f64,
}

/// Where spending stands relative to the budget
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum BudgetStatus {
    /// No budget set; usage is not tracked
    Unset,
    /// Spending is comfortably within budget
    OnTrack,
    /// Spending has passed the near-limit ratio
    NearLimit,
    /// Spending exceeds the budget
    OverBudget { by: Money },
}

/// Dashboard figures for one session snapshot
#[derive(Debug, Clone, Serialize)]
pub struct SpendingSummary {
    /// Budget at the time of the snapshot
    pub budget: Money,
    /// Sum of all expenses
    pub total_spent: Money,
    /// Budget minus spending, may be negative
    pub remaining: Money,
    /// Unclamped spending-to-budget ratio, absent when the budget is zero
    pub progress_ratio: Option<f64>,
    /// Budget status derived from the ratio
    pub status: BudgetStatus,
    /// Totals for the categories that have spending, ordered by name
    pub per_category: Vec<CategoryTotal>,
    /// Number of expenses
    pub expense_count: usize,
}

impl SpendingSummary {
    /// Generate the summary for a session
    pub fn generate(session: &Session, near_limit_ratio: f64) -> Self {
        let expenses = session.expenses();
        let budget = session.budget();
        let total_spent = total_spent(expenses);
        let progress_ratio = total_spent.ratio_of(budget);

        let status = match progress_ratio {
            None => BudgetStatus::Unset,
            Some(_) if total_spent > budget => BudgetStatus::OverBudget {
                by: total_spent - budget,
            },
            Some(ratio) if ratio.min(1.0) > near_limit_ratio => BudgetStatus::NearLimit,
            Some(_) => BudgetStatus::OnTrack,
        };

        Self {
            budget,
            total_spent,
            remaining: budget - total_spent,
            progress_ratio,
            status,
            per_category: per_category_totals(expenses),
            expense_count: expenses.len(),
        }
    }

    /// Usage ratio clamped to at most 1.0 for the gauge
    pub fn progress_display(&self) -> Option<f64> {
        self.progress_ratio.map(|ratio| ratio.clamp(0.0, 1.0))
    }

    /// Whether there is anything to chart
    pub fn is_empty(&self) -> bool {
        self.expense_count == 0
    }

    /// Largest category total, used to scale bar charts
    pub fn max_category_total(&self) -> Money {
        self.per_category
            .iter()
            .map(|c| c.total)
            .max()
            .unwrap_or_default()
    }
}

/// Sum of all expense amounts
pub fn total_spent(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Group expenses by category and sum their amounts
///
/// Only categories with at least one expense appear. The result is ordered by
/// category name.
pub fn per_category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut grouped: BTreeMap<&'static str, (Category, Money, usize)> = BTreeMap::new();
    for expense in expenses {
        let entry = grouped
            .entry(expense.category.name())
            .or_insert((expense.category, Money::zero(), 0));
        entry.1 += expense.amount;
        entry.2 += 1;
    }

    let total = total_spent(expenses);
    grouped
        .into_values()
        .map(|(category, sum, count)| CategoryTotal {
            category,
            total: sum,
            count,
            share: sum.ratio_of(total).map(|r| r * 100.0).unwrap_or(0.0),
        })
        .collect()
}

/// Category with the highest total
///
/// Ties go to the category that comes first in [`per_category_totals`]
/// order, i.e. alphabetically by name.
pub fn top_category(totals: &[CategoryTotal]) -> Option<&CategoryTotal> {
    totals.iter().fold(None, |best, candidate| match best {
        Some(current) if current.total >= candidate.total => Some(current),
        _ => Some(candidate),
    })
}

/// Mean amount per expense, `None` for an empty list
pub fn average_per_transaction(expenses: &[Expense]) -> Option<Money> {
    total_spent(expenses).divide(expenses.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{ExpenseDraft, ExpenseService};

    fn session_with(budget_cents: i64, entries: &[(&str, &str, Category)]) -> Session {
        let mut session = Session::with_budget(Money::from_cents(budget_cents)).unwrap();
        for (description, amount, category) in entries {
            ExpenseService::new(&mut session)
                .submit(&ExpenseDraft::new(*description, *amount, *category))
                .unwrap();
        }
        session
    }

    #[test]
    fn test_empty_session() {
        let session = Session::new();
        let summary = SpendingSummary::generate(&session, DEFAULT_NEAR_LIMIT_RATIO);

        assert!(summary.total_spent.is_zero());
        assert!(summary.remaining.is_zero());
        assert!(summary.per_category.is_empty());
        assert_eq!(summary.status, BudgetStatus::Unset);
        assert!(summary.is_empty());
        assert!(average_per_transaction(session.expenses()).is_none());
    }

    #[test]
    fn test_coffee_and_bus_scenario() {
        let session = session_with(
            50_000,
            &[
                ("Coffee", "4.50", Category::Food),
                ("Bus", "2.00", Category::Transport),
            ],
        );
        let summary = SpendingSummary::generate(&session, DEFAULT_NEAR_LIMIT_RATIO);

        assert_eq!(summary.total_spent, Money::from_cents(650));
        assert_eq!(summary.remaining, Money::from_cents(49_350));
        assert_eq!(summary.per_category.len(), 2);
        assert_eq!(summary.per_category[0].category, Category::Food);
        assert_eq!(summary.per_category[0].total, Money::from_cents(450));
        assert_eq!(summary.per_category[1].category, Category::Transport);
        assert_eq!(summary.per_category[1].total, Money::from_cents(200));

        let ratio = summary.progress_ratio.unwrap();
        assert!((ratio - 0.013).abs() < 1e-9);
        assert_eq!(summary.status, BudgetStatus::OnTrack);
    }

    #[test]
    fn test_over_budget_scenario() {
        let session = session_with(10_000, &[("Rent", "150", Category::Utilities)]);
        let summary = SpendingSummary::generate(&session, DEFAULT_NEAR_LIMIT_RATIO);

        assert_eq!(summary.total_spent, Money::from_cents(15_000));
        assert_eq!(summary.remaining, Money::from_cents(-5_000));
        assert_eq!(
            summary.status,
            BudgetStatus::OverBudget {
                by: Money::from_cents(5_000)
            }
        );
        assert_eq!(summary.progress_ratio, Some(1.5));
        assert_eq!(summary.progress_display(), Some(1.0));
    }

    #[test]
    fn test_zero_budget_has_no_progress() {
        let session = session_with(0, &[("Lunch", "12", Category::Food)]);
        let summary = SpendingSummary::generate(&session, DEFAULT_NEAR_LIMIT_RATIO);

        assert!(summary.progress_ratio.is_none());
        assert!(summary.progress_display().is_none());
        assert_eq!(summary.status, BudgetStatus::Unset);
        assert_eq!(summary.remaining, Money::from_cents(-1_200));
    }

    #[test]
    fn test_near_limit_threshold() {
        let at_threshold = session_with(10_000, &[("Groceries", "80", Category::Food)]);
        let summary = SpendingSummary::generate(&at_threshold, DEFAULT_NEAR_LIMIT_RATIO);
        assert_eq!(summary.status, BudgetStatus::OnTrack);

        let past_threshold = session_with(10_000, &[("Groceries", "80.01", Category::Food)]);
        let summary = SpendingSummary::generate(&past_threshold, DEFAULT_NEAR_LIMIT_RATIO);
        assert_eq!(summary.status, BudgetStatus::NearLimit);

        // Spending exactly the budget is not over it
        let exact = session_with(10_000, &[("Groceries", "100", Category::Food)]);
        let summary = SpendingSummary::generate(&exact, DEFAULT_NEAR_LIMIT_RATIO);
        assert_eq!(summary.status, BudgetStatus::NearLimit);
        assert!(summary.remaining.is_zero());
    }

    #[test]
    fn test_category_totals_conserve_total() {
        let session = session_with(
            0,
            &[
                ("Coffee", "4.50", Category::Food),
                ("Bus", "2.00", Category::Transport),
                ("Lunch", "11.25", Category::Food),
                ("Cinema", "14", Category::Entertainment),
                ("Socks", "7.99", Category::Shopping),
            ],
        );
        let summary = SpendingSummary::generate(&session, DEFAULT_NEAR_LIMIT_RATIO);

        let sum: Money = summary.per_category.iter().map(|c| c.total).sum();
        assert_eq!(sum, summary.total_spent);

        let share_sum: f64 = summary.per_category.iter().map(|c| c.share).sum();
        assert!((share_sum - 100.0).abs() < 1e-9);

        let food = summary
            .per_category
            .iter()
            .find(|c| c.category == Category::Food)
            .unwrap();
        assert_eq!(food.count, 2);
        assert_eq!(food.total, Money::from_cents(1_575));

        let names: Vec<_> = summary.per_category.iter().map(|c| c.category.name()).collect();
        assert_eq!(names, vec!["Entertainment", "Food", "Shopping", "Transport"]);
        assert_eq!(summary.max_category_total(), Money::from_cents(1_575));
    }

    #[test]
    fn test_top_category_tie_goes_to_first_by_name() {
        let session = session_with(
            0,
            &[
                ("Train", "10", Category::Transport),
                ("Pizza", "10", Category::Food),
            ],
        );
        let totals = per_category_totals(session.expenses());
        let top = top_category(&totals).unwrap();
        assert_eq!(top.category, Category::Food);

        assert!(top_category(&[]).is_none());
    }

    #[test]
    fn test_average_per_transaction() {
        let session = session_with(
            0,
            &[
                ("Coffee", "4.50", Category::Food),
                ("Bus", "2.00", Category::Transport),
            ],
        );
        assert_eq!(
            average_per_transaction(session.expenses()),
            Some(Money::from_cents(325))
        );
    }
}
