//! Add expense dialog
//!
//! Modal form with a description, an amount and a category selector. Tab
//! moves between fields, Enter submits. The dialog stays open after a
//! successful submission so several expenses can be entered in a row.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::Category;
use crate::services::ExpenseDraft;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

/// Which field is currently focused in the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Description,
    Amount,
    Category,
}

impl ExpenseField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Description => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Description,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Description => Self::Category,
            Self::Amount => Self::Description,
            Self::Category => Self::Amount,
        }
    }
}

/// State for the add expense dialog
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    /// Currently focused field
    pub focused_field: ExpenseField,

    /// Description input
    pub description_input: TextInput,

    /// Amount input, digits and a decimal point only
    pub amount_input: TextInput,

    /// Selected category
    pub category: Category,

    /// Error message to display
    pub error_message: Option<String>,
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseFormState {
    /// Create a new form state with default values
    pub fn new() -> Self {
        Self {
            focused_field: ExpenseField::Description,
            description_input: TextInput::new()
                .label("Description")
                .placeholder("e.g. Groceries"),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            category: Category::default(),
            error_message: None,
        }
    }

    /// Clear every field for the next entry
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// The input behind the focused field, if it is a text field
    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            ExpenseField::Description => Some(&mut self.description_input),
            ExpenseField::Amount => Some(&mut self.amount_input),
            ExpenseField::Category => None,
        }
    }

    /// Type a character into the focused field
    pub fn insert_char(&mut self, c: char) {
        self.clear_error();
        match self.focused_field {
            ExpenseField::Description => self.description_input.insert(c),
            ExpenseField::Amount => {
                if c.is_ascii_digit() || c == '.' {
                    self.amount_input.insert(c);
                }
            }
            ExpenseField::Category => {}
        }
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        self.clear_error();
        if let Some(input) = self.focused_input() {
            input.backspace();
        }
    }

    /// Left arrow: cursor movement, or previous category
    pub fn left(&mut self) {
        match self.focused_input() {
            Some(input) => input.move_left(),
            None => self.category = self.category.prev(),
        }
    }

    /// Right arrow: cursor movement, or next category
    pub fn right(&mut self) {
        match self.focused_input() {
            Some(input) => input.move_right(),
            None => self.category = self.category.next(),
        }
    }

    /// Raw form content
    pub fn draft(&self) -> ExpenseDraft {
        ExpenseDraft::new(
            self.description_input.value(),
            self.amount_input.value(),
            self.category,
        )
    }

    /// Show an error below the fields
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    /// Hide the error
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

/// Render the add expense dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect_fixed(56, 13, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Expense ")
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
            Constraint::Length(1), // Description
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Category
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Min(1),    // Hints
        ])
        .split(inner);

    let form = &app.expense_form;

    let mut description = form.description_input.clone();
    description.focused = form.focused_field == ExpenseField::Description;
    frame.render_widget(description, chunks[0]);

    let mut amount = form.amount_input.clone();
    amount.focused = form.focused_field == ExpenseField::Amount;
    frame.render_widget(amount, chunks[2]);

    render_category_selector(frame, form, chunks[4]);

    if let Some(ref error) = form.error_message {
        let error_line = Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red));
        frame.render_widget(error_line, chunks[6]);
    }

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Add  "),
        Span::styled("[Tab]", Style::default().fg(Color::Cyan)),
        Span::raw(" Next field  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Close"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[7]);
}

fn render_category_selector(frame: &mut Frame, form: &ExpenseFormState, area: Rect) {
    let focused = form.focused_field == ExpenseField::Category;
    let label_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };
    let value_style = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let line = Line::from(vec![
        Span::styled("Category", label_style),
        Span::raw(": "),
        Span::styled("◀ ", label_style),
        Span::styled(form.category.name(), value_style),
        Span::styled(" ▶", label_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Handle key input for the add expense dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let form = &mut app.expense_form;

    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
        }
        KeyCode::Enter => {
            app.submit_expense();
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                form.prev_field();
            } else {
                form.next_field();
            }
        }
        KeyCode::BackTab => form.prev_field(),
        KeyCode::Up => form.prev_field(),
        KeyCode::Down => form.next_field(),
        KeyCode::Left => form.left(),
        KeyCode::Right => form.right(),
        KeyCode::Home => {
            if let Some(input) = form.focused_input() {
                input.move_start();
            }
        }
        KeyCode::End => {
            if let Some(input) = form.focused_input() {
                input.move_end();
            }
        }
        KeyCode::Backspace => form.backspace(),
        KeyCode::Delete => {
            if let Some(input) = form.focused_input() {
                input.delete();
            }
        }
        KeyCode::Char(c) => form.insert_char(c),
        _ => return false,
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_accepts_digits_and_point_only() {
        let mut form = ExpenseFormState::new();
        form.focused_field = ExpenseField::Amount;
        for c in "1a2.5-0".chars() {
            form.insert_char(c);
        }
        assert_eq!(form.amount_input.value(), "12.50");
    }

    #[test]
    fn test_category_cycles_with_arrows() {
        let mut form = ExpenseFormState::new();
        assert_eq!(form.category, Category::Food);

        form.focused_field = ExpenseField::Category;
        form.right();
        assert_eq!(form.category, Category::Transport);
        form.left();
        form.left();
        assert_eq!(form.category, Category::Other);
    }

    #[test]
    fn test_field_navigation_wraps() {
        let mut form = ExpenseFormState::new();
        form.prev_field();
        assert_eq!(form.focused_field, ExpenseField::Category);
        form.next_field();
        assert_eq!(form.focused_field, ExpenseField::Description);
    }

    #[test]
    fn test_draft_carries_raw_values() {
        let mut form = ExpenseFormState::new();
        for c in "Taxi".chars() {
            form.insert_char(c);
        }
        form.next_field();
        for c in "18".chars() {
            form.insert_char(c);
        }
        form.next_field();
        form.right();

        assert_eq!(
            form.draft(),
            ExpenseDraft::new("Taxi", "18", Category::Transport)
        );
    }

    #[test]
    fn test_typing_clears_error() {
        let mut form = ExpenseFormState::new();
        form.set_error("bad");
        form.insert_char('x');
        assert!(form.error_message.is_none());
    }
}
