//! Budget dialog
//!
//! Edits the total budget. The value is only committed on Enter.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

/// State for the budget dialog
#[derive(Debug, Clone)]
pub struct BudgetFormState {
    /// Amount input
    pub input: TextInput,
    /// Budget when the dialog was opened
    pub current: Money,
    /// Error message
    pub error_message: Option<String>,
}

impl Default for BudgetFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl BudgetFormState {
    pub fn new() -> Self {
        Self {
            input: TextInput::new().label("Budget").placeholder("0.00"),
            current: Money::zero(),
            error_message: None,
        }
    }

    /// Initialize the dialog with the current budget
    pub fn init(&mut self, current: Money) {
        self.current = current;
        self.input.set_value(current.to_plain_string());
        self.input.focused = true;
        self.error_message = None;
    }

    /// Insert character at cursor
    pub fn insert_char(&mut self, c: char) {
        if c.is_ascii_digit() || c == '.' {
            self.input.insert(c);
            self.error_message = None;
        }
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        self.input.backspace();
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the budget dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect_fixed(46, 9, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Set Budget ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Current
            Constraint::Length(1), // Input
            Constraint::Length(1), // Error
            Constraint::Min(1),    // Hints
        ])
        .split(inner);

    let current = Line::from(vec![
        Span::styled("Current: ", Style::default().fg(Color::Gray)),
        Span::styled(
            app.money(app.budget_form.current),
            Style::default().fg(Color::White),
        ),
    ]);
    frame.render_widget(Paragraph::new(current), chunks[0]);

    frame.render_widget(app.budget_form.input.clone(), chunks[1]);

    if let Some(ref error) = app.budget_form.error_message {
        let error_line = Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red));
        frame.render_widget(error_line, chunks[2]);
    }

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[3]);
}

/// Handle key input for the budget dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => app.commit_budget(),
        KeyCode::Backspace => app.budget_form.backspace(),
        KeyCode::Delete => app.budget_form.input.delete(),
        KeyCode::Left => app.budget_form.input.move_left(),
        KeyCode::Right => app.budget_form.input.move_right(),
        KeyCode::Home => app.budget_form.input.move_start(),
        KeyCode::End => app.budget_form.input.move_end(),
        KeyCode::Char(c) => app.budget_form.insert_char(c),
        _ => return false,
    }

    true
}
