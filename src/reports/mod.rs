//! Reports module
//!
//! Pure computations over a session snapshot. Both the TUI and the
//! command-line output regenerate these after every action.

pub mod analysis;
pub mod summary;

pub use analysis::AnalysisReport;
pub use summary::{
    average_per_transaction, per_category_totals, top_category, total_spent, BudgetStatus,
    CategoryTotal, SpendingSummary, DEFAULT_NEAR_LIMIT_RATIO,
};
