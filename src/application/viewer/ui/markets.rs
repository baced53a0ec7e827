//! Market list widget

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::application::viewer::state::ViewState;
use crate::application::viewer::App;
use crate::domain::{abbreviate_address, Market};
use crate::ports::market_data::MarketDataPort;

/// One market list row: slug, id and abbreviated address
pub fn market_line(market: &Market) -> String {
    format!(
        "{:<24} #{:<6} {}",
        market.slug,
        market.id,
        abbreviate_address(&market.address)
    )
}

/// Draw the market list view
pub fn draw<P: MarketDataPort + 'static>(frame: &mut Frame, app: &App<P>, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Markets ");

    match &app.markets {
        ViewState::Loading => {
            let loading = Paragraph::new(" Loading markets...").block(block);
            frame.render_widget(loading, area);
        }
        ViewState::Failed(message) => {
            let error = Paragraph::new(format!(" {}", message))
                .style(Style::default().fg(Color::Red))
                .block(block);
            frame.render_widget(error, area);
        }
        ViewState::Ready(markets) if markets.is_empty() => {
            let empty = Paragraph::new(" No markets available").block(block);
            frame.render_widget(empty, area);
        }
        ViewState::Ready(markets) => {
            let items: Vec<ListItem> = markets
                .iter()
                .enumerate()
                .map(|(i, market)| {
                    let style = if i == app.selected {
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    let prefix = if i == app.selected { "> " } else { "  " };
                    ListItem::new(format!("{}{}", prefix, market_line(market))).style(style)
                })
                .collect();

            let list = List::new(items)
                .block(block)
                .highlight_style(Style::default().add_modifier(Modifier::BOLD));

            let mut state = ListState::default();
            state.select(Some(app.selected));

            frame.render_stateful_widget(list, area, &mut state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_line() {
        let market = Market {
            id: 1,
            slug: "foo".to_string(),
            image_url: "i.png".to_string(),
            address: "AAAABBBBCCCC".to_string(),
        };
        let line = market_line(&market);
        assert!(line.starts_with("foo"));
        assert!(line.contains("#1"));
        assert!(line.ends_with("AAAA...CCCC"));
    }
}
