//! Expense record
//!
//! An expense is immutable once recorded. Construction goes through
//! [`Expense::new`], which enforces the record invariants.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;

/// A single recorded spend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// What the money was spent on
    pub description: String,

    /// Amount spent, always positive
    pub amount: Money,

    /// Spending category
    pub category: Category,

    /// When the expense was entered
    pub recorded_at: DateTime<Local>,
}

impl Expense {
    /// Create a new expense, validating description and amount
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        category: Category,
    ) -> Result<Self, ExpenseValidationError> {
        let description = description.into().trim().to_string();

        if description.is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        if !amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(amount));
        }

        Ok(Self {
            id: ExpenseId::new(),
            description,
            amount,
            category,
            recorded_at: Local::now(),
        })
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    NonPositiveAmount(Money),
}

impl std::fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero, got {}", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_expense_trims_description() {
        let expense = Expense::new("  Coffee ", Money::from_cents(450), Category::Food).unwrap();
        assert_eq!(expense.description, "Coffee");
        assert_eq!(expense.amount, Money::from_cents(450));
        assert_eq!(expense.category, Category::Food);
    }

    #[test]
    fn test_rejects_blank_description() {
        let err = Expense::new("   ", Money::from_cents(100), Category::Other).unwrap_err();
        assert_eq!(err, ExpenseValidationError::EmptyDescription);
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        assert!(matches!(
            Expense::new("Refund", Money::zero(), Category::Shopping),
            Err(ExpenseValidationError::NonPositiveAmount(_))
        ));
        assert!(matches!(
            Expense::new("Refund", Money::from_cents(-100), Category::Shopping),
            Err(ExpenseValidationError::NonPositiveAmount(_))
        ));
    }
}
