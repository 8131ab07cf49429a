//! Status bar view
//!
//! Shows the expense count, budget state and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::reports::{BudgetStatus, SpendingSummary};
use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, summary: &SpendingSummary, area: Rect) {
    let mut spans = vec![];

    spans.push(Span::styled(
        format!(
            " {} expense{} ",
            summary.expense_count,
            if summary.expense_count == 1 { "" } else { "s" }
        ),
        Style::default().fg(Color::White),
    ));

    spans.push(Span::raw("│ "));

    let (state, color) = match summary.status {
        BudgetStatus::Unset => ("No budget".to_string(), Color::DarkGray),
        BudgetStatus::OnTrack => ("On track".to_string(), Color::Green),
        BudgetStatus::NearLimit => ("Near limit".to_string(), Color::Yellow),
        BudgetStatus::OverBudget { by } => (format!("Over by {}", app.money(by)), Color::Red),
    };
    spans.push(Span::styled(
        state,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));

    spans.push(Span::raw(" │ "));
    spans.push(Span::styled(
        app.active_view.title(),
        Style::default().fg(Color::Cyan),
    ));

    // Key hints (right-aligned)
    let hints = " a:Add  b:Budget  q:Quit  ?:Help ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
