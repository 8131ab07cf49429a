//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;
use tracing::info;

use crate::config::settings::Settings;
use crate::session::Session;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    // Enable raw mode and enter alternate screen
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Create terminal
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the interactive session until the user quits
///
/// Returns the session so the caller can report what was recorded.
pub fn run_tui(settings: &Settings, session: Session) -> Result<Session> {
    let mut terminal = init_terminal()?;
    let mut app = App::new(settings, session);

    let result = event_loop(&mut terminal, &mut app);

    // Restore even when the loop failed
    restore_terminal()?;
    result?;

    info!(expenses = app.session.len(), "session ended");
    Ok(app.session)
}

fn event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let events = EventHandler::new(Duration::from_millis(app.settings.tick_rate_ms.max(1)));

    loop {
        // Render
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        // Handle events
        match events.next()? {
            Event::Tick => app.notifications.remove_expired(),
            // Terminal will redraw on the next pass
            Event::Resize(_, _) => {}
            event => handle_event(app, event)?,
        }

        // Check if we should quit
        if app.should_quit {
            return Ok(());
        }
    }
}
