//! Dashboard view
//!
//! Budget metrics, usage gauge, budget banner, spending per category and the
//! expense history. With no expenses the chart and history are replaced by a
//! placeholder.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Bar, BarChart, BarGroup, Block, Borders, Cell, Gauge, Paragraph, Row, Table, TableState,
        Wrap,
    },
    Frame,
};

use crate::display::report::truncate;
use crate::display::{budget_banner, format_delta, BannerKind, EMPTY_DASHBOARD_MESSAGE};
use crate::reports::SpendingSummary;
use crate::tui::app::App;
use crate::tui::layout::DashboardLayout;

use super::category_color;

/// Render the dashboard
pub fn render(frame: &mut Frame, app: &App, summary: &SpendingSummary, area: Rect) {
    let block = Block::default()
        .title(" Dashboard ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let banner = budget_banner(&summary.status, &app.settings.currency_symbol);
    let progress = summary.progress_display();
    let layout = DashboardLayout::new(inner, progress.is_some(), banner.is_some());

    render_metrics(frame, app, summary, layout.metrics);

    if let Some(ratio) = progress {
        render_gauge(frame, ratio, layout.gauge);
    }

    if let Some((kind, message)) = banner {
        render_banner(frame, kind, &message, layout.banner);
    }

    if summary.is_empty() {
        // Placeholder takes the chart and history space
        let placeholder_area = Rect {
            height: layout.chart.height + layout.history.height,
            ..layout.chart
        };
        render_placeholder(frame, placeholder_area);
        return;
    }

    render_chart(frame, app, summary, layout.chart);
    render_history(frame, app, layout.history);
}

/// Three metric cards: budget, spent, remaining
fn render_metrics(frame: &mut Frame, app: &App, summary: &SpendingSummary, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let delta_color = if summary.remaining.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    metric_card(
        frame,
        "Total Budget",
        Line::from(Span::styled(
            app.money(summary.budget),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        cards[0],
    );
    metric_card(
        frame,
        "Total Spent",
        Line::from(Span::styled(
            app.money(summary.total_spent),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        cards[1],
    );
    metric_card(
        frame,
        "Remaining",
        Line::from(vec![
            Span::styled(
                app.money(summary.remaining),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                format_delta(summary.remaining),
                Style::default().fg(delta_color),
            ),
        ]),
        cards[2],
    );
}

fn metric_card(frame: &mut Frame, title: &str, value: Line, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(value).block(block), area);
}

/// Budget usage, clamped to 100%
fn render_gauge(frame: &mut Frame, ratio: f64, area: Rect) {
    let color = if ratio >= 1.0 {
        Color::Red
    } else {
        Color::Green
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Budget Usage ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(Style::default().fg(color).bg(Color::DarkGray))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{:.0}%", ratio * 100.0));

    frame.render_widget(gauge, area);
}

fn render_banner(frame: &mut Frame, kind: BannerKind, message: &str, area: Rect) {
    let color = match kind {
        BannerKind::Warning => Color::Yellow,
        BannerKind::Error => Color::Red,
    };

    let banner = Paragraph::new(message)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

    frame.render_widget(banner, area);
}

/// Per-category totals as vertical bars
fn render_chart(frame: &mut Frame, app: &App, summary: &SpendingSummary, area: Rect) {
    let block = Block::default()
        .title(" Expenses by Category ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let bars: Vec<Bar> = summary
        .per_category
        .iter()
        .map(|entry| {
            Bar::default()
                .value(entry.total.cents().max(0) as u64)
                .text_value(app.money(entry.total))
                .label(Line::from(entry.category.name()))
                .style(Style::default().fg(category_color(entry.category)))
        })
        .collect();

    // Spread bars across the available width
    let inner_width = area.width.saturating_sub(2);
    let count = bars.len().max(1) as u16;
    let bar_width = (inner_width / count).saturating_sub(2).clamp(3, 16);

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(2)
        .value_style(
            Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .label_style(Style::default().fg(Color::White));

    frame.render_widget(chart, area);
}

/// Expense history in insertion order
fn render_history(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" History ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let widths = [
        Constraint::Min(16),    // Description
        Constraint::Length(14), // Amount
        Constraint::Length(15), // Category
        Constraint::Length(10), // Time
    ];

    let header = Row::new(vec![
        Cell::from("Description").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Time").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .bottom_margin(1);

    let rows: Vec<Row> = app
        .session
        .expenses()
        .iter()
        .map(|expense| {
            Row::new(vec![
                Cell::from(truncate(&expense.description, 40)),
                Cell::from(app.money(expense.amount)),
                Cell::from(expense.category.name())
                    .style(Style::default().fg(category_color(expense.category))),
                Cell::from(expense.recorded_at.format("%H:%M:%S").to_string()),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.history_index));

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_placeholder(frame: &mut Frame, area: Rect) {
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(EMPTY_DASHBOARD_MESSAGE),
        Line::from(""),
        Line::from(Span::styled(
            "Press [a] to record your first expense.",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .style(Style::default().fg(Color::Blue))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(text, area);
}
