//! In-memory session state
//!
//! A [`Session`] owns everything the user enters: the ordered expense list and
//! the budget. It is created empty when the application starts, handed to the
//! services that mutate it, and dropped when the application exits. Nothing
//! in here touches the disk.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, Money};

/// Expenses and budget for one run of the application
#[derive(Debug, Clone, Default)]
pub struct Session {
    expenses: Vec<Expense>,
    budget: Money,
}

impl Session {
    /// Create an empty session with a zero budget
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session starting from the given budget
    pub fn with_budget(budget: Money) -> TrackerResult<Self> {
        let mut session = Self::new();
        session.set_budget(budget)?;
        Ok(session)
    }

    /// Expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Current budget
    pub fn budget(&self) -> Money {
        self.budget
    }

    /// Number of recorded expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether no expenses have been recorded
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Append an expense to the end of the list
    ///
    /// Fails if the amount is not positive or if the running total would no
    /// longer fit in a [`Money`].
    pub fn push_expense(&mut self, expense: Expense) -> TrackerResult<&Expense> {
        if !expense.amount.is_positive() {
            return Err(TrackerError::validation(
                "Expense amount must be greater than zero",
            ));
        }
        if self.total().checked_add(expense.amount).is_none() {
            return Err(TrackerError::validation("Expense total is too large"));
        }
        self.expenses.push(expense);
        Ok(&self.expenses[self.expenses.len() - 1])
    }

    /// Sum of every recorded expense
    ///
    /// Exact: `push_expense` refuses anything that would overflow it.
    pub fn total(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Overwrite the budget
    pub fn set_budget(&mut self, budget: Money) -> TrackerResult<()> {
        if budget.is_negative() {
            return Err(TrackerError::validation("Budget cannot be negative"));
        }
        self.budget = budget;
        Ok(())
    }

    /// Remove every expense, leaving the budget alone
    ///
    /// Returns the number of expenses removed.
    pub fn clear_expenses(&mut self) -> usize {
        let removed = self.expenses.len();
        self.expenses.clear();
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn expense(description: &str, cents: i64, category: Category) -> Expense {
        Expense::new(description, Money::from_cents(cents), category).unwrap()
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert!(session.is_empty());
        assert!(session.budget().is_zero());
    }

    #[test]
    fn test_push_preserves_insertion_order() {
        let mut session = Session::new();
        session.push_expense(expense("Coffee", 450, Category::Food)).unwrap();
        session.push_expense(expense("Bus", 200, Category::Transport)).unwrap();
        session.push_expense(expense("Lunch", 1200, Category::Food)).unwrap();

        let names: Vec<_> = session
            .expenses()
            .iter()
            .map(|e| e.description.as_str())
            .collect();
        assert_eq!(names, vec!["Coffee", "Bus", "Lunch"]);
    }

    #[test]
    fn test_push_rejects_total_overflow() {
        let mut session = Session::new();
        let huge = Money::from_cents(i64::MAX - 10);
        session.push_expense(expense("Yacht", huge.cents(), Category::Shopping)).unwrap();
        session.push_expense(expense("Fuel", 10, Category::Transport)).unwrap();

        let err = session
            .push_expense(expense("Tip", 1, Category::Other))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(session.len(), 2);
        assert_eq!(session.total(), Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_budget_is_overwritten_not_accumulated() {
        let mut session = Session::new();
        session.set_budget(Money::from_cents(50_000)).unwrap();
        session.set_budget(Money::from_cents(20_000)).unwrap();
        assert_eq!(session.budget(), Money::from_cents(20_000));
    }

    #[test]
    fn test_negative_budget_rejected() {
        let mut session = Session::with_budget(Money::from_cents(100)).unwrap();
        let err = session.set_budget(Money::from_cents(-1)).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(session.budget(), Money::from_cents(100));
    }

    #[test]
    fn test_clear_keeps_budget() {
        let mut session = Session::with_budget(Money::from_cents(50_000)).unwrap();
        session.push_expense(expense("Coffee", 450, Category::Food)).unwrap();
        session.push_expense(expense("Bus", 200, Category::Transport)).unwrap();

        assert_eq!(session.clear_expenses(), 2);
        assert!(session.is_empty());
        assert_eq!(session.budget(), Money::from_cents(50_000));
        assert_eq!(session.clear_expenses(), 0);
    }
}
