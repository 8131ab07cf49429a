//! Analysis view
//!
//! Donut chart of category shares with a legend, plus the highest spending
//! category and the average amount per transaction.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::display::report::format_percentage;
use crate::display::EMPTY_ANALYSIS_MESSAGE;
use crate::reports::AnalysisReport;
use crate::tui::app::App;
use crate::tui::widgets::{DonutChart, Slice};

use super::category_color;

/// Render the analysis view
pub fn render(frame: &mut Frame, app: &App, report: Option<&AnalysisReport>, area: Rect) {
    let block = Block::default()
        .title(" Analysis ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(report) = report else {
        let text = Paragraph::new(vec![Line::from(""), Line::from(EMPTY_ANALYSIS_MESSAGE)])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::Blue));
        frame.render_widget(text, inner);
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    let slices: Vec<Slice> = report
        .shares
        .iter()
        .map(|entry| Slice {
            fraction: entry.share / 100.0,
            color: category_color(entry.category),
        })
        .collect();

    let donut = DonutChart::new(&slices).block(
        Block::default()
            .title(" Spending Share ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(donut, columns[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(6)])
        .split(columns[1]);

    render_legend(frame, app, report, side[0]);
    render_facts(frame, app, report, side[1]);
}

fn render_legend(frame: &mut Frame, app: &App, report: &AnalysisReport, area: Rect) {
    let block = Block::default()
        .title(" Categories ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines: Vec<Line> = report
        .shares
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(category_color(entry.category))),
                Span::styled(
                    format!("{:<14}", entry.category.name()),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:>5}", format_percentage(entry.share)),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!(" {:>12}", app.money(entry.total)),
                    Style::default().fg(Color::Gray),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_facts(frame: &mut Frame, app: &App, report: &AnalysisReport, area: Rect) {
    let block = Block::default()
        .title(" Highlights ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let top = &report.top_category;
    let lines = vec![
        Line::from(Span::styled(
            "Highest spending category",
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::styled(
                top.category.name(),
                Style::default()
                    .fg(category_color(top.category))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" ({})", app.money(top.total))),
        ]),
        Line::from(Span::styled(
            "Average per transaction",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            app.money(report.average_per_transaction),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
