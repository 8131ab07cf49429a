//! Display formatting for terminal output
//!
//! Plain-text rendering of the dashboard, analysis and history for the
//! command-line mode.

pub mod report;
pub mod summary;

pub use summary::{
    budget_banner, format_analysis, format_dashboard, format_delta, format_history, BannerKind,
    EMPTY_ANALYSIS_MESSAGE, EMPTY_DASHBOARD_MESSAGE,
};
