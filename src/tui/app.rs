//! Application state for the TUI
//!
//! The App struct owns the session and holds all state needed for rendering
//! and handling events. Every action goes through the services; views read a
//! freshly generated summary on each draw.

use std::time::Duration;

use crate::config::settings::Settings;
use crate::error::TrackerError;
use crate::models::Money;
use crate::reports::{AnalysisReport, SpendingSummary};
use crate::services::{BudgetService, ExpenseService};
use crate::session::Session;

use super::dialogs::budget::BudgetFormState;
use super::dialogs::expense::ExpenseFormState;
use super::widgets::{Notification, NotificationQueue};

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Dashboard,
    Analysis,
}

impl ActiveView {
    /// Next view in tab order
    pub fn next(self) -> Self {
        match self {
            Self::Dashboard => Self::Analysis,
            Self::Analysis => Self::Dashboard,
        }
    }

    /// Title shown on the main panel
    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Analysis => "Analysis",
        }
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddExpense,
    EditBudget,
    ConfirmClear,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// The expenses and budget of this session
    pub session: Session,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected row in the history table
    pub history_index: usize,

    /// Add expense form state
    pub expense_form: ExpenseFormState,

    /// Budget editor state
    pub budget_form: BudgetFormState,

    /// Toast notifications
    pub notifications: NotificationQueue,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings, session: Session) -> Self {
        Self {
            settings,
            session,
            should_quit: false,
            active_view: ActiveView::default(),
            active_dialog: ActiveDialog::default(),
            history_index: 0,
            expense_form: ExpenseFormState::new(),
            budget_form: BudgetFormState::new(),
            notifications: NotificationQueue::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Switch to a specific view
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
    }

    /// Cycle to the next view
    pub fn next_view(&mut self) {
        self.active_view = self.active_view.next();
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match dialog {
            ActiveDialog::AddExpense => self.expense_form.clear_error(),
            ActiveDialog::EditBudget => self.budget_form.init(self.session.budget()),
            _ => {}
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Summary of the current session
    pub fn summary(&self) -> SpendingSummary {
        SpendingSummary::generate(&self.session, self.settings.near_limit_ratio)
    }

    /// Analysis of the current session, `None` when nothing is recorded
    pub fn analysis(&self) -> Option<AnalysisReport> {
        AnalysisReport::generate(&self.session)
    }

    /// Format an amount with the configured currency symbol
    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.settings.currency_symbol)
    }

    /// Show a toast for the configured duration
    pub fn notify(&mut self, notification: Notification) {
        let duration = Duration::from_secs(self.settings.notification_secs);
        self.notifications.push(notification.with_duration(duration));
    }

    /// Submit the add expense form
    ///
    /// On success the form is reset and stays open for the next entry. On
    /// failure the typed values are kept and the message is shown inline.
    pub fn submit_expense(&mut self) {
        let draft = self.expense_form.draft();
        let result = ExpenseService::new(&mut self.session).submit(&draft);

        match result {
            Ok(_) => {
                self.expense_form.reset();
                self.history_index = self.session.len().saturating_sub(1);
                self.notify(Notification::success("Expense added!"));
            }
            Err(e) => {
                self.expense_form.set_error(e.to_string());
                self.notify_failure(e);
            }
        }
    }

    /// Commit the value typed into the budget editor
    pub fn commit_budget(&mut self) {
        let input = self.budget_form.input.value().to_string();
        let result = BudgetService::new(&mut self.session).update_budget(&input);

        match result {
            Ok(budget) => {
                self.close_dialog();
                let message = format!("Budget set to {}", self.money(budget));
                self.notify(Notification::success(message));
            }
            Err(e) => {
                self.budget_form.set_error(e.to_string());
                self.notify_failure(e);
            }
        }
    }

    /// Remove every expense, keeping the budget
    pub fn clear_all(&mut self) {
        let removed = BudgetService::new(&mut self.session).clear_all();
        self.history_index = 0;
        self.close_dialog();
        self.notify(Notification::info(format!(
            "Cleared {} expense{}",
            removed,
            if removed == 1 { "" } else { "s" }
        )));
    }

    fn notify_failure(&mut self, error: TrackerError) {
        if error.is_validation() {
            self.notify(Notification::warning(error.to_string()));
        } else {
            self.notify(Notification::error(error.to_string()));
        }
    }

    /// Move the history selection down
    pub fn scroll_down(&mut self) {
        if self.history_index + 1 < self.session.len() {
            self.history_index += 1;
        }
    }

    /// Move the history selection up
    pub fn scroll_up(&mut self) {
        self.history_index = self.history_index.saturating_sub(1);
    }
}
