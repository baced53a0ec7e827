//! Trade history widget for the market detail view

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::application::service::MarketDetail;
use crate::application::viewer::state::ViewState;
use crate::application::viewer::App;
use crate::domain::{
    abbreviate_address, format_amount, format_sol, format_timestamp, Trade, TradeSide,
};
use crate::ports::market_data::MarketDataPort;

/// Whether any trade in the history carries the backend's outcome flag.
/// The status column is only rendered when it does.
pub fn has_status_column(trades: &[Trade]) -> bool {
    trades.iter().any(|t| t.succeeded.is_some())
}

/// Row cells for one trade, in table column order
pub fn trade_row_cells(trade: &Trade, include_status: bool) -> Vec<String> {
    let mut cells = vec![
        trade.side.label().to_string(),
        format_sol(trade.sol_amount),
        format_amount(trade.token_amount),
        format_timestamp(trade.timestamp),
        abbreviate_address(&trade.signer),
        abbreviate_address(&trade.signature),
    ];
    if include_status {
        cells.push(trade.status_label().unwrap_or("-").to_string());
    }
    cells
}

/// Draw the market detail view
pub fn draw<P: MarketDataPort + 'static>(frame: &mut Frame, app: &App<P>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Trading History ");

    match &app.detail {
        ViewState::Loading => {
            let loading = Paragraph::new(" Loading market details...").block(block);
            frame.render_widget(loading, area);
        }
        ViewState::Failed(message) => {
            let error = Paragraph::new(format!(" {}", message))
                .style(Style::default().fg(Color::Red))
                .block(block);
            frame.render_widget(error, area);
        }
        ViewState::Ready(detail) => draw_detail(frame, app, detail, area),
    }
}

fn draw_detail<P: MarketDataPort + 'static>(
    frame: &mut Frame,
    app: &App<P>,
    detail: &MarketDetail,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Market header
            Constraint::Min(0),    // Trade table
        ])
        .split(area);

    let market = &detail.market;
    let header_lines = vec![
        Line::from(format!(" {} (id {})", market.slug, market.id)),
        Line::from(format!(
            " {}  {}",
            abbreviate_address(&market.address),
            app.links.address_url(&market.address)
        )),
    ];
    let header = Paragraph::new(header_lines)
        .block(Block::default().borders(Borders::ALL).title(" Market "));
    frame.render_widget(header, chunks[0]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Trading History ");

    if detail.trades.is_empty() {
        let empty = Paragraph::new(" No trades found for this market.").block(block);
        frame.render_widget(empty, chunks[1]);
        return;
    }

    let include_status = has_status_column(&detail.trades);

    let mut header_cells = vec!["TYPE", "SOL AMOUNT", "TOKEN AMOUNT", "DATE", "SIGNER", "TX"];
    if include_status {
        header_cells.push("STATUS");
    }
    let header_row = Row::new(header_cells).style(Style::default().fg(Color::Gray));

    let rows: Vec<Row> = detail
        .trades
        .iter()
        .map(|trade| {
            let side_color = match trade.side {
                TradeSide::Buy => Color::Green,
                TradeSide::Sell => Color::Red,
            };
            let cells = trade_row_cells(trade, include_status);
            let mut styled: Vec<Cell> = Vec::with_capacity(cells.len());
            for (i, text) in cells.into_iter().enumerate() {
                let cell = if i == 0 {
                    Cell::from(text).style(Style::default().fg(side_color))
                } else {
                    Cell::from(text)
                };
                styled.push(cell);
            }
            Row::new(styled)
        })
        .collect();

    let mut widths = vec![
        Constraint::Length(5),
        Constraint::Length(17),
        Constraint::Length(14),
        Constraint::Length(20),
        Constraint::Length(12),
        Constraint::Length(12),
    ];
    if include_status {
        widths.push(Constraint::Length(10));
    }

    let table = Table::new(rows, widths)
        .header(header_row)
        .column_spacing(2)
        .block(block);

    frame.render_widget(table, chunks[1]);
}
