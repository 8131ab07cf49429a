//! Sidebar view
//!
//! Shows budget metrics, the view switcher and action keys

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::reports::SpendingSummary;
use crate::tui::app::{ActiveView, App};
use crate::tui::layout::SidebarLayout;

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &App, summary: &SpendingSummary, area: Rect) {
    let layout = SidebarLayout::new(area);

    render_header(frame, layout.header);
    render_metrics(frame, app, summary, layout.metrics);
    render_view_switcher(frame, app, layout.view_switcher);
    render_actions(frame, layout.actions);
}

/// Render sidebar header
fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Expenses ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let version = Paragraph::new(concat!("v", env!("CARGO_PKG_VERSION")))
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(version, area);
}

/// Render budget, spent and remaining
fn render_metrics(frame: &mut Frame, app: &App, summary: &SpendingSummary, area: Rect) {
    let block = Block::default()
        .title(" Budget ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let remaining_color = if summary.remaining.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let lines = vec![
        metric_line("Budget", app.money(summary.budget), Color::White),
        metric_line("Spent", app.money(summary.total_spent), Color::Yellow),
        metric_line("Left", app.money(summary.remaining), remaining_color),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn metric_line(label: &'static str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<8}", label), Style::default().fg(Color::Gray)),
        Span::styled(format!("{:>14}", value), Style::default().fg(color)),
    ])
}

/// Render view switcher
fn render_view_switcher(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Views ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let views = [
        ("1", ActiveView::Dashboard),
        ("2", ActiveView::Analysis),
    ];

    let items: Vec<ListItem> = views
        .iter()
        .map(|(key, view)| {
            let style = if app.active_view == *view {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let indicator = if app.active_view == *view { "▶" } else { " " };

            let line = Line::from(vec![
                Span::styled(format!("{} ", indicator), style),
                Span::styled(format!("[{}] ", key), Style::default().fg(Color::Yellow)),
                Span::styled(view.title(), style),
            ]);

            ListItem::new(line)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Render the action keys
fn render_actions(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let actions = [
        ("a", "Add expense"),
        ("b", "Set budget"),
        ("C", "Clear all"),
        ("?", "Help"),
    ];

    let lines: Vec<Line> = actions
        .iter()
        .map(|(key, label)| {
            Line::from(vec![
                Span::styled(format!("[{}] ", key), Style::default().fg(Color::Yellow)),
                Span::styled(*label, Style::default().fg(Color::White)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
