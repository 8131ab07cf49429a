//! TUI Views module
//!
//! Contains the dashboard and analysis views, the sidebar and status bar.

pub mod analysis;
pub mod dashboard;
pub mod sidebar;
pub mod status_bar;

use ratatui::{style::Color, Frame};

use crate::models::Category;

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());
    let summary = app.summary();

    sidebar::render(frame, app, &summary, layout.sidebar);

    // Render main view based on active view
    match app.active_view {
        ActiveView::Dashboard => {
            dashboard::render(frame, app, &summary, layout.main);
        }
        ActiveView::Analysis => {
            let report = app.analysis();
            analysis::render(frame, app, report.as_ref(), layout.main);
        }
    }

    status_bar::render(frame, app, &summary, layout.status_bar);

    // Render dialog if active
    if app.has_dialog() {
        render_dialog(frame, app);
    }

    // Toasts sit above everything else
    if let Some(notification) = app.notifications.current() {
        let area = NotificationWidget::area(frame.area());
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog {
        ActiveDialog::AddExpense => dialogs::expense::render(frame, app),
        ActiveDialog::EditBudget => dialogs::budget::render(frame, app),
        ActiveDialog::ConfirmClear => dialogs::confirm::render(frame, app),
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::None => {}
    }
}

/// Chart and legend color for a category
pub fn category_color(category: Category) -> Color {
    match category {
        Category::Food => Color::Green,
        Category::Transport => Color::Blue,
        Category::Utilities => Color::Yellow,
        Category::Entertainment => Color::Magenta,
        Category::Shopping => Color::Cyan,
        Category::Other => Color::Gray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::display::{EMPTY_ANALYSIS_MESSAGE, EMPTY_DASHBOARD_MESSAGE};
    use crate::models::{Expense, Money};
    use crate::session::Session;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn draw(app: &mut App) -> Buffer {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn session_with(budget_cents: i64, entries: &[(&str, i64, Category)]) -> Session {
        let mut session = Session::with_budget(Money::from_cents(budget_cents)).unwrap();
        for (description, cents, category) in entries {
            session
                .push_expense(Expense::new(*description, Money::from_cents(*cents), *category).unwrap())
                .unwrap();
        }
        session
    }

    #[test]
    fn test_empty_dashboard_shows_placeholder() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Session::new());

        let text = screen_text(&draw(&mut app));

        assert!(text.contains(EMPTY_DASHBOARD_MESSAGE));
        assert!(!text.contains("History"));
        assert!(!text.contains("Budget Usage"));
    }

    #[test]
    fn test_empty_analysis_shows_placeholder() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Session::new());
        app.switch_view(ActiveView::Analysis);

        let text = screen_text(&draw(&mut app));

        assert!(text.contains(EMPTY_ANALYSIS_MESSAGE));
        assert!(!text.contains("Highest spending category"));
    }

    #[test]
    fn test_over_budget_dashboard() {
        let settings = Settings::default();
        let session = session_with(10_000, &[("Rent", 15_000, Category::Utilities)]);
        let mut app = App::new(&settings, session);

        let text = screen_text(&draw(&mut app));

        assert!(text.contains("You are over budget by $50.00!"));
        assert!(text.contains("Budget Usage"));
        assert!(text.contains("100%"));
        assert!(text.contains("-50.00"));
        assert!(text.contains("Rent"));
    }

    #[test]
    fn test_no_budget_hides_gauge_and_banner() {
        let settings = Settings::default();
        let session = session_with(0, &[("Lunch", 1_200, Category::Food)]);
        let mut app = App::new(&settings, session);

        let text = screen_text(&draw(&mut app));

        assert!(!text.contains("Budget Usage"));
        assert!(!text.contains("over budget"));
        assert!(!text.contains("nearing"));
        assert!(text.contains("Lunch"));
    }

    #[test]
    fn test_analysis_shows_highlights() {
        let settings = Settings::default();
        let session = session_with(
            50_000,
            &[
                ("Coffee", 450, Category::Food),
                ("Bus", 200, Category::Transport),
            ],
        );
        let mut app = App::new(&settings, session);
        app.switch_view(ActiveView::Analysis);

        let text = screen_text(&draw(&mut app));

        assert!(text.contains("Highest spending category"));
        assert!(text.contains("Food ($4.50)"));
        assert!(text.contains("$3.25"));
    }

    #[test]
    fn test_dialog_and_toast_render() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Session::new());
        app.open_dialog(ActiveDialog::AddExpense);
        app.submit_expense();

        let text = screen_text(&draw(&mut app));

        assert!(text.contains("Add Expense"));
        assert!(text.contains("Check input"));
    }
}
