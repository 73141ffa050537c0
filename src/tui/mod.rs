//! Terminal user interface
//!
//! The event loop polls the listing query, drives animations, draws, then
//! waits for input. Fetches run on a worker thread so the loop never blocks
//! on the network.

mod app;
mod event;
mod theme;
mod ui;

use std::io;
use std::time::Instant;

use anyhow::Result;
use tracing::info;

pub use app::App;
pub use theme::{Theme, ThemeVariant};

use crate::browse::MemoryHistory;
use crate::config::MarqueeConfig;
use crate::db::Database;
use crate::source::Query;

/// Disables mouse capture and restores the terminal when dropped
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<(ratatui::DefaultTerminal, Self)> {
        let terminal = ratatui::init();
        let guard = Self;
        crossterm::execute!(io::stdout(), crossterm::event::EnableMouseCapture)?;
        Ok((terminal, guard))
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = crossterm::execute!(io::stdout(), crossterm::event::DisableMouseCapture);
        ratatui::restore();
    }
}

/// Run the browser until the user quits
///
/// `start_path` is the initial location, so `/items/<id>` opens straight
/// into the detail overlay.
pub fn run(config: MarqueeConfig, db: &Database, query: Query, start_path: &str) -> Result<()> {
    info!(start_path, key = query.key().as_str(), "starting browser");
    let mut app = App::new(config, query, MemoryHistory::new(start_path));

    let (mut terminal, _guard) = TerminalGuard::enter()?;

    while app.running {
        app.poll_query(Some(db));
        app.tick(Instant::now());
        terminal.draw(|frame| ui::render(frame, &mut app))?;
        event::handle_events(&mut app)?;
    }

    info!("browser closed");
    Ok(())
}
