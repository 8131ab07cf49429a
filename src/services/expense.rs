//! Expense service
//!
//! Turns raw form input into recorded expenses. Rejected input never reaches
//! the session; the caller gets a validation error to show as a notice.

use tracing::{debug, warn};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, Expense, Money};
use crate::session::Session;

/// Message shown whenever a submission is rejected
pub const INVALID_EXPENSE_MESSAGE: &str = "Please enter a description and a valid amount.";

/// Raw content of the add-expense form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    /// Description as typed
    pub description: String,
    /// Amount as typed
    pub amount: String,
    /// Selected category
    pub category: Category,
}

impl ExpenseDraft {
    /// Create a draft from already separated fields
    pub fn new(
        description: impl Into<String>,
        amount: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            category,
        }
    }
}

/// Service for recording expenses into a session
pub struct ExpenseService<'a> {
    session: &'a mut Session,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(session: &'a mut Session) -> Self {
        Self { session }
    }

    /// Validate a draft and append it to the session
    ///
    /// Accepts the draft only when the description is non-empty and the
    /// amount parses to more than zero.
    pub fn submit(&mut self, draft: &ExpenseDraft) -> TrackerResult<Expense> {
        let amount = match Money::parse(&draft.amount) {
            Ok(amount) if amount.is_positive() => amount,
            _ => {
                warn!(amount = %draft.amount, "rejected expense with invalid amount");
                return Err(TrackerError::validation(INVALID_EXPENSE_MESSAGE));
            }
        };

        let expense = Expense::new(draft.description.as_str(), amount, draft.category)
            .map_err(|e| {
                warn!(reason = %e, "rejected expense");
                TrackerError::validation(INVALID_EXPENSE_MESSAGE)
            })?;

        let recorded = self
            .session
            .push_expense(expense)
            .map_err(|e| {
                warn!(reason = %e, "rejected expense");
                TrackerError::validation(INVALID_EXPENSE_MESSAGE)
            })?
            .clone();
        debug!(
            id = %recorded.id,
            category = %recorded.category,
            amount = %recorded.amount,
            count = self.session.len(),
            "expense added"
        );

        Ok(recorded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::{AnalysisReport, SpendingSummary};

    #[test]
    fn test_valid_submission_appends_one() {
        let mut session = Session::new();
        let expense = ExpenseService::new(&mut session)
            .submit(&ExpenseDraft::new("Coffee", "4.50", Category::Food))
            .unwrap();

        assert_eq!(session.len(), 1);
        assert_eq!(session.expenses()[0], expense);
        assert_eq!(expense.description, "Coffee");
        assert_eq!(expense.amount, Money::from_cents(450));
        assert_eq!(expense.category, Category::Food);
    }

    #[test]
    fn test_empty_description_rejected() {
        let mut session = Session::new();
        let err = ExpenseService::new(&mut session)
            .submit(&ExpenseDraft::new("  ", "10", Category::Other))
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(err.to_string(), INVALID_EXPENSE_MESSAGE);
        assert!(session.is_empty());
    }

    #[test]
    fn test_non_positive_or_garbage_amount_rejected() {
        let mut session = Session::new();
        let mut service = ExpenseService::new(&mut session);

        for amount in ["0", "0.00", "-5", "", "abc", "0.001"] {
            let result = service.submit(&ExpenseDraft::new("Thing", amount, Category::Shopping));
            assert!(result.is_err(), "amount {:?} should be rejected", amount);
        }

        assert!(session.is_empty());
    }

    #[test]
    fn test_amount_overflowing_total_rejected() {
        let mut session = Session::new();
        let mut service = ExpenseService::new(&mut session);
        let draft = ExpenseDraft::new("Yacht", "90000000000000000", Category::Shopping);

        service.submit(&draft).unwrap();
        let err = service.submit(&draft).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), INVALID_EXPENSE_MESSAGE);
        assert_eq!(session.len(), 1);

        let summary = SpendingSummary::generate(&session, 0.8);
        assert_eq!(summary.total_spent, Money::from_cents(9_000_000_000_000_000_000));
        assert!(AnalysisReport::generate(&session).is_some());
    }

    #[test]
    fn test_maximal_budget_with_maximal_expense() {
        let mut session = Session::with_budget(Money::from_cents(i64::MAX)).unwrap();
        ExpenseService::new(&mut session)
            .submit(&ExpenseDraft::new("Yacht", "92233720368547758.07", Category::Shopping))
            .unwrap();

        let summary = SpendingSummary::generate(&session, 0.8);
        assert!(summary.remaining.is_zero());
    }

    #[test]
    fn test_each_valid_submission_grows_by_exactly_one() {
        let mut session = Session::new();
        let drafts = [
            ExpenseDraft::new("Coffee", "4.50", Category::Food),
            ExpenseDraft::new("", "4.50", Category::Food),
            ExpenseDraft::new("Bus", "2", Category::Transport),
            ExpenseDraft::new("Movie", "0", Category::Entertainment),
        ];

        let mut expected = 0;
        for draft in &drafts {
            let before = session.len();
            let ok = ExpenseService::new(&mut session).submit(draft).is_ok();
            if ok {
                expected += 1;
                assert_eq!(session.len(), before + 1);
            } else {
                assert_eq!(session.len(), before);
            }
        }
        assert_eq!(session.len(), expected);
        assert_eq!(expected, 2);
    }
}
