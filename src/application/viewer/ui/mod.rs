//! UI widgets for the interactive explorer

pub mod markets;
pub mod trades;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::application::viewer::state::{Route, ViewState};
use crate::application::viewer::App;
use crate::ports::market_data::MarketDataPort;

/// Draw the main UI layout
pub fn draw<P: MarketDataPort + 'static>(frame: &mut Frame, app: &App<P>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);
    draw_main(frame, app, chunks[1]);
    draw_footer(frame, app, chunks[2]);
}

fn draw_header<P: MarketDataPort + 'static>(frame: &mut Frame, app: &App<P>, area: Rect) {
    let header_text = match &app.route {
        Route::Markets => match &app.markets {
            ViewState::Ready(markets) => format!(" Markets: {}", markets.len()),
            ViewState::Loading => " Loading...".to_string(),
            ViewState::Failed(_) => " Markets".to_string(),
        },
        Route::Detail(query) => format!(" Market: {}", query),
    };

    let header = Paragraph::new(header_text)
        .style(Style::default().fg(Color::Cyan))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Attention Markets "),
        );

    frame.render_widget(header, area);
}

fn draw_main<P: MarketDataPort + 'static>(frame: &mut Frame, app: &App<P>, area: Rect) {
    match app.route {
        Route::Markets => markets::draw(frame, app, area),
        Route::Detail(_) => trades::draw(frame, app, area),
    }
}

fn draw_footer<P: MarketDataPort + 'static>(frame: &mut Frame, app: &App<P>, area: Rect) {
    let hints = match app.route {
        Route::Markets => " q=quit  j/k=nav  Enter=open  r=refresh",
        Route::Detail(_) => " q=quit  Esc=back  r=refresh",
    };

    let footer = Paragraph::new(hints).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
