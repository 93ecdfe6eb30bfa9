//! Terminal user interface for playing the game.

// Private module declarations
mod app;
mod input;
mod ui;

// Public re-exports
pub use app::GameSummary;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::game::GameSession;
use crate::store::HighscoreStore;

use app::{App, Flow};
use input::map_key;

/// Runs the interactive game until the player leaves, then reports the
/// run's totals.
///
/// The terminal is switched to raw mode and the alternate screen for
/// the duration of the run and restored on every exit path.
///
/// # Errors
///
/// Returns an error when the terminal cannot be set up or drawn to.
pub fn run_game(session: &mut GameSession, store: &HighscoreStore) -> Result<GameSummary> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, session, store);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    session: &mut GameSession,
    store: &HighscoreStore,
) -> Result<GameSummary> {
    let mut app = App::new(session, store);
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if let Some(action) = map_key(key.code)
                && app.handle_action(action) == Flow::Exit
            {
                break;
            }
        }
    }
    let summary = app.summary();
    info!(score = summary.score(), lines = summary.lines(), "Game loop finished");
    Ok(summary)
}
