//! Dashboard and analysis formatting
//!
//! Renders a [`SpendingSummary`] and [`AnalysisReport`] as plain text for the
//! command-line mode. Banner and placeholder wording is shared with the TUI.

use tabled::{settings::Style, Table, Tabled};

use super::report::{format_bar, format_percentage, separator, truncate};
use crate::models::{Expense, Money};
use crate::reports::{AnalysisReport, BudgetStatus, SpendingSummary};

/// Shown instead of charts and history when nothing has been recorded
pub const EMPTY_DASHBOARD_MESSAGE: &str = "Start by adding an expense!";

/// Shown instead of the analysis when nothing has been recorded
pub const EMPTY_ANALYSIS_MESSAGE: &str = "Add some expenses to see the spending analysis.";

const BAR_WIDTH: usize = 30;
const LINE_WIDTH: usize = 60;

/// Severity of a budget banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Warning,
    Error,
}

/// Banner for the budget status, if one should be shown
pub fn budget_banner(status: &BudgetStatus, symbol: &str) -> Option<(BannerKind, String)> {
    match status {
        BudgetStatus::OverBudget { by } => Some((
            BannerKind::Error,
            format!("You are over budget by {}!", by.format_with_symbol(symbol)),
        )),
        BudgetStatus::NearLimit => Some((
            BannerKind::Warning,
            "You are nearing your budget limit.".to_string(),
        )),
        BudgetStatus::Unset | BudgetStatus::OnTrack => None,
    }
}

/// Signed delta shown next to the remaining budget ("+493.50", "-50.00")
pub fn format_delta(amount: Money) -> String {
    let plain = amount.format_with_symbol("");
    if amount.is_negative() {
        plain
    } else {
        format!("+{}", plain)
    }
}

/// Format the dashboard: metrics, usage bar, banner, category chart, history
pub fn format_dashboard(summary: &SpendingSummary, expenses: &[Expense], symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Total Budget: {}\n",
        summary.budget.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total Spent:  {}\n",
        summary.total_spent.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Remaining:    {} ({})\n",
        summary.remaining.format_with_symbol(symbol),
        format_delta(summary.remaining)
    ));

    if let Some(progress) = summary.progress_display() {
        output.push('\n');
        output.push_str("Budget Usage\n");
        output.push_str(&format!(
            "{} {}\n",
            format_bar(progress, 1.0, BAR_WIDTH),
            format_percentage(progress * 100.0)
        ));
    }

    if let Some((kind, message)) = budget_banner(&summary.status, symbol) {
        let prefix = match kind {
            BannerKind::Warning => "WARNING",
            BannerKind::Error => "OVER BUDGET",
        };
        output.push_str(&format!("{}: {}\n", prefix, message));
    }

    output.push('\n');

    if summary.is_empty() {
        output.push_str(EMPTY_DASHBOARD_MESSAGE);
        output.push('\n');
        return output;
    }

    output.push_str("Expenses by Category\n");
    output.push_str(&separator(LINE_WIDTH));
    output.push('\n');

    let max = summary.max_category_total().as_f64();
    for entry in &summary.per_category {
        output.push_str(&format!(
            "{:<14} {} {:>12}\n",
            entry.category.name(),
            format_bar(entry.total.as_f64(), max, BAR_WIDTH),
            entry.total.format_with_symbol(symbol)
        ));
    }

    output.push('\n');
    output.push_str("History\n");
    output.push_str(&format_history(expenses, symbol));
    output.push('\n');

    output
}

/// Format the analysis: category shares, top category, average expense
pub fn format_analysis(report: Option<&AnalysisReport>, symbol: &str) -> String {
    let Some(report) = report else {
        return format!("{}\n", EMPTY_ANALYSIS_MESSAGE);
    };

    let mut output = String::new();
    output.push_str("Spending Share\n");
    output.push_str(&separator(LINE_WIDTH));
    output.push('\n');

    for entry in &report.shares {
        output.push_str(&format!(
            "{:<14} {:>6}  ({} expense{})\n",
            entry.category.name(),
            format_percentage(entry.share),
            entry.count,
            if entry.count == 1 { "" } else { "s" }
        ));
    }

    output.push('\n');
    output.push_str(&format!(
        "Highest spending category: {} ({})\n",
        report.top_category.category,
        report.top_category.total.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Average per transaction:   {}\n",
        report.average_per_transaction.format_with_symbol(symbol)
    ));

    output
}

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Time")]
    time: String,
}

/// Format the expense history as a table, in insertion order
pub fn format_history(expenses: &[Expense], symbol: &str) -> String {
    let rows: Vec<HistoryRow> = expenses
        .iter()
        .map(|e| HistoryRow {
            description: truncate(&e.description, 30),
            amount: e.amount.format_with_symbol(symbol),
            category: e.category.to_string(),
            time: e.recorded_at.format("%H:%M:%S").to_string(),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}
