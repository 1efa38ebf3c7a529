//! TSRM - Terminal Student Records
//!
//! A terminal-based student record manager backed by SQLite. Five flows
//! are offered from a sidebar: add, view, update, delete, and search, each
//! backed by a single statement against one table.

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;

mod domain;
mod application;
mod infrastructure;
mod presentation;

use application::{App, AppMode};
use infrastructure::{DEFAULT_DB_PATH, StudentRepository};
use presentation::{InputHandler, render_ui};

/// Entry point for the TSRM student record manager.
///
/// Opens (creating if needed) the database file, sets up the terminal
/// interface, and runs the main event loop until the user quits.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or if terminal setup
/// fails. Data errors during a session never reach this level; they are
/// shown in the status bar instead.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let repository = StudentRepository::open(DEFAULT_DB_PATH)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(repository);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Main application event loop.
///
/// Redraws the screen after every key event and dispatches input to the
/// current mode's handler. Continues running until the user presses 'q'
/// while the sidebar has focus.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') if matches!(app.mode, AppMode::Menu) => return Ok(()),
                    _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
                }
            }
        }
    }
}
