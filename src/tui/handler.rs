//! Event handler for the TUI
//!
//! Routes keyboard events to the active dialog or to the global and
//! view-specific keys.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ctrl+C quits from anywhere, dialogs included
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    // Check if we're in a dialog first
    if app.has_dialog() {
        handle_dialog_key(app, key);
        return Ok(());
    }

    handle_normal_key(app, key);
    Ok(())
}

/// Route keys to the active dialog
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::AddExpense => {
            dialogs::expense::handle_key(app, key);
        }
        ActiveDialog::EditBudget => {
            dialogs::budget::handle_key(app, key);
        }
        ActiveDialog::ConfirmClear => {
            dialogs::confirm::handle_key(app, key);
        }
        // Any key closes help
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::None => {}
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        // Actions
        KeyCode::Char('a') => app.open_dialog(ActiveDialog::AddExpense),
        KeyCode::Char('b') => app.open_dialog(ActiveDialog::EditBudget),
        KeyCode::Char('C') => app.open_dialog(ActiveDialog::ConfirmClear),

        // View switching
        KeyCode::Char('1') => app.switch_view(ActiveView::Dashboard),
        KeyCode::Char('2') => app.switch_view(ActiveView::Analysis),
        KeyCode::Tab => app.next_view(),

        _ => {
            if app.active_view == ActiveView::Dashboard {
                handle_dashboard_key(app, key);
            }
        }
    }
}

/// Handle keys when the dashboard is shown
fn handle_dashboard_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),
        KeyCode::Char('g') | KeyCode::Home => app.history_index = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.history_index = app.session.len().saturating_sub(1);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::models::{Category, Money};
    use crate::session::Session;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_add_expense_through_keys() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Session::new());

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.active_dialog, ActiveDialog::AddExpense);

        type_text(&mut app, "Bus ticket");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "2.00");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.len(), 1);
        let expense = &app.session.expenses()[0];
        assert_eq!(expense.description, "Bus ticket");
        assert_eq!(expense.amount, Money::from_cents(200));
        assert_eq!(expense.category, Category::Transport);
        // Form stays open for the next entry
        assert_eq!(app.active_dialog, ActiveDialog::AddExpense);

        press(&mut app, KeyCode::Esc);
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_letters_in_dialog_do_not_trigger_actions() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Session::new());

        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "quick bite");

        assert!(!app.should_quit);
        assert_eq!(app.expense_form.description_input.value(), "quick bite");
    }

    #[test]
    fn test_budget_only_commits_on_enter() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Session::new());

        press(&mut app, KeyCode::Char('b'));
        press(&mut app, KeyCode::End);
        for _ in 0..4 {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "250");
        assert_eq!(app.session.budget(), Money::zero());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.budget(), Money::from_cents(25_000));
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_escape_discards_budget_edit() {
        let settings = Settings::default();
        let session = Session::with_budget(Money::from_cents(10_000)).unwrap();
        let mut app = App::new(&settings, session);

        press(&mut app, KeyCode::Char('b'));
        type_text(&mut app, "9");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.session.budget(), Money::from_cents(10_000));
    }

    #[test]
    fn test_clear_requires_confirmation() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Session::new());
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Tea");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "3");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);

        press(&mut app, KeyCode::Char('C'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.session.len(), 1);

        press(&mut app, KeyCode::Char('C'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.session.is_empty());
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_view_switching_and_quit() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Session::new());

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.active_view, ActiveView::Analysis);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_view, ActiveView::Dashboard);

        press(&mut app, KeyCode::Char('?'));
        press(&mut app, KeyCode::Char('q'));
        // First key only closes help
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_dialog() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Session::new());
        press(&mut app, KeyCode::Char('a'));

        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        )
        .unwrap();

        assert!(app.should_quit);
    }
}
