//! Budget service
//!
//! Commits the budget value typed into the budget editor and handles the
//! "clear all data" action.

use tracing::{info, warn};

use crate::error::{TrackerError, TrackerResult};
use crate::models::Money;
use crate::session::Session;

/// Service for budget management
pub struct BudgetService<'a> {
    session: &'a mut Session,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(session: &'a mut Session) -> Self {
        Self { session }
    }

    /// Parse and commit a budget value
    ///
    /// An empty input sets the budget to zero. Negative or unparsable input
    /// leaves the current budget in place.
    pub fn update_budget(&mut self, input: &str) -> TrackerResult<Money> {
        let budget = if input.trim().is_empty() {
            Money::zero()
        } else {
            Money::parse(input).map_err(|_| {
                warn!(input, "rejected unparsable budget");
                TrackerError::validation("Invalid budget amount")
            })?
        };

        self.set_budget(budget)
    }

    /// Commit an already parsed budget value
    pub fn set_budget(&mut self, budget: Money) -> TrackerResult<Money> {
        if let Err(e) = self.session.set_budget(budget) {
            warn!(%budget, "rejected negative budget");
            return Err(e);
        }

        info!(%budget, "budget updated");
        Ok(budget)
    }

    /// Remove all expenses; the budget is kept
    pub fn clear_all(&mut self) -> usize {
        let removed = self.session.clear_expenses();
        info!(removed, "cleared all expenses");
        removed
    }
}
