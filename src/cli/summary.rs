//! One-shot summary command
//!
//! Builds a throwaway session from command-line arguments and prints the
//! dashboard and analysis, as text or JSON.

use clap::Args;
use serde::Serialize;
use tracing::debug;

use crate::config::settings::Settings;
use crate::display::{format_analysis, format_dashboard};
use crate::error::TrackerResult;
use crate::models::Money;
use crate::reports::{AnalysisReport, SpendingSummary};
use crate::services::{ExpenseDraft, ExpenseService};
use crate::session::Session;

use super::{parse_budget, parse_expense};

/// Arguments for `expenses summary`
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Total budget (e.g. "500" or "1,250.00"); defaults to the configured budget
    #[arg(short, long, env = "EXPENSE_TRACKER_BUDGET", value_parser = parse_budget)]
    pub budget: Option<Money>,

    /// Expense as "Description:Amount:Category" (repeatable)
    #[arg(short, long = "expense", value_name = "EXPENSE", value_parser = parse_expense)]
    pub expenses: Vec<ExpenseDraft>,

    /// Print JSON (amounts in cents) instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct SummaryReport<'a> {
    summary: &'a SpendingSummary,
    analysis: Option<&'a AnalysisReport>,
}

/// Run the summary command and return what was printed
pub fn render_summary(settings: &Settings, args: &SummaryArgs) -> TrackerResult<String> {
    let budget = args.budget.unwrap_or(settings.default_budget);
    let mut session = Session::with_budget(budget)?;

    let mut service = ExpenseService::new(&mut session);
    for draft in &args.expenses {
        match service.submit(draft) {
            Ok(expense) => debug!(id = %expense.id, "applied expense argument"),
            // Rejected entries are reported and skipped
            Err(e) if e.is_validation() => {
                eprintln!("Skipped '{}:{}': {}", draft.description, draft.amount, e);
            }
            Err(e) => return Err(e),
        }
    }

    let summary = SpendingSummary::generate(&session, settings.near_limit_ratio);
    let analysis = AnalysisReport::generate(&session);

    if args.json {
        let report = SummaryReport {
            summary: &summary,
            analysis: analysis.as_ref(),
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let symbol = &settings.currency_symbol;
    let mut output = format_dashboard(&summary, session.expenses(), symbol);
    output.push('\n');
    output.push_str(&format_analysis(analysis.as_ref(), symbol));
    Ok(output)
}

/// Handle `expenses summary`
pub fn handle_summary_command(settings: &Settings, args: &SummaryArgs) -> TrackerResult<()> {
    let output = render_summary(settings, args)?;
    println!("{}", output.trim_end());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn args(budget: Option<i64>, expenses: Vec<ExpenseDraft>, json: bool) -> SummaryArgs {
        SummaryArgs {
            budget: budget.map(Money::from_cents),
            expenses,
            json,
        }
    }

    #[test]
    fn test_text_summary() {
        let settings = Settings::default();
        let output = render_summary(
            &settings,
            &args(
                Some(50_000),
                vec![
                    ExpenseDraft::new("Coffee", "4.50", Category::Food),
                    ExpenseDraft::new("Bus", "2.00", Category::Transport),
                ],
                false,
            ),
        )
        .unwrap();

        assert!(output.contains("Total Spent:  $6.50"));
        assert!(output.contains("Remaining:    $493.50 (+493.50)"));
        assert!(output.contains("Highest spending category: Food ($4.50)"));
        assert!(!output.contains("WARNING"));
    }

    #[test]
    fn test_invalid_entries_are_skipped() {
        let settings = Settings::default();
        let output = render_summary(
            &settings,
            &args(
                None,
                vec![
                    ExpenseDraft::new("", "4.50", Category::Food),
                    ExpenseDraft::new("Gift", "0", Category::Shopping),
                    ExpenseDraft::new("Film", "12", Category::Entertainment),
                ],
                true,
            ),
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["summary"]["expense_count"], 1);
        assert_eq!(value["summary"]["total_spent"], 1200);
        assert_eq!(value["summary"]["status"]["state"], "unset");
        assert_eq!(value["analysis"]["top_category"]["category"], "Entertainment");
    }

    #[test]
    fn test_empty_json_has_null_analysis() {
        let settings = Settings::default();
        let output = render_summary(&settings, &args(Some(10_000), vec![], true)).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(value["analysis"].is_null());
        assert_eq!(value["summary"]["remaining"], 10_000);
    }

    #[test]
    fn test_default_budget_from_settings() {
        let settings = Settings {
            default_budget: Money::from_cents(20_000),
            ..Settings::default()
        };
        let output = render_summary(&settings, &args(None, vec![], false)).unwrap();
        assert!(output.contains("Total Budget: $200.00"));
    }
}
