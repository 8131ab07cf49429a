//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: sidebar, main panel, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Sidebar area (metrics, view switcher, key hints)
    pub sidebar: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        // Split into main area and status bar
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        // Split main area into sidebar and content
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(28), // Sidebar (fixed width)
                Constraint::Min(40),    // Main content
            ])
            .split(vertical[0]);

        Self {
            sidebar: horizontal[0],
            main: horizontal[1],
            status_bar: vertical[1],
        }
    }
}

/// Layout for the sidebar
pub struct SidebarLayout {
    /// Title/header area
    pub header: Rect,
    /// Budget metrics
    pub metrics: Rect,
    /// View switcher area
    pub view_switcher: Rect,
    /// Action key hints
    pub actions: Rect,
}

impl SidebarLayout {
    /// Calculate sidebar layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(5), // Metrics
                Constraint::Length(4), // View switcher
                Constraint::Min(3),    // Actions
            ])
            .split(area);

        Self {
            header: chunks[0],
            metrics: chunks[1],
            view_switcher: chunks[2],
            actions: chunks[3],
        }
    }
}

/// Layout for the dashboard view
pub struct DashboardLayout {
    /// Budget, spent and remaining
    pub metrics: Rect,
    /// Usage gauge (zero height when no budget is set)
    pub gauge: Rect,
    /// Warning or error banner (zero height when not needed)
    pub banner: Rect,
    /// Per-category bar chart
    pub chart: Rect,
    /// Expense history table
    pub history: Rect,
}

impl DashboardLayout {
    /// Calculate dashboard layout
    pub fn new(area: Rect, show_gauge: bool, show_banner: bool) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Metrics
                Constraint::Length(if show_gauge { 3 } else { 0 }),
                Constraint::Length(if show_banner { 3 } else { 0 }),
                Constraint::Percentage(50), // Chart
                Constraint::Min(4),         // History
            ])
            .split(area);

        Self {
            metrics: chunks[0],
            gauge: chunks[1],
            banner: chunks[2],
            chart: chunks[3],
            history: chunks[4],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
