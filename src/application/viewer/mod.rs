//! Interactive Explorer UI
//!
//! Terminal UI over the explorer service: a navigable market list and a
//! per-market trade history view. One logical UI thread draws frames and
//! handles keys; fetches run on the tokio runtime and report back over a
//! channel (see [`app::App`] for the stale-response handling).

pub mod app;
pub mod state;
pub mod ui;

pub use app::App;
pub use state::{FetchOutcome, Route, ViewState};

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::runtime::Handle;

use crate::application::service::ExplorerService;
use crate::config::ExplorerSection;
use crate::ports::market_data::MarketDataPort;

/// How long to wait for a key event between frames
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Run the interactive explorer until the user quits.
///
/// Takes over the terminal (raw mode + alternate screen) for the duration.
pub fn run<P: MarketDataPort + 'static>(
    runtime: Handle,
    service: Arc<ExplorerService<P>>,
    links: ExplorerSection,
) -> Result<()> {
    let mut app = App::new(runtime, service, links);
    app.open_markets();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend, P: MarketDataPort + 'static>(
    terminal: &mut Terminal<B>,
    app: &mut App<P>,
) -> Result<()> {
    loop {
        // Apply any fetch results that settled since the last frame
        app.poll();

        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(TICK_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') => app.should_quit = true,
                        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
                        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
                        KeyCode::Enter => app.open_selected(),
                        KeyCode::Esc | KeyCode::Char('b') => app.back(),
                        KeyCode::Char('r') => app.refresh(),
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
