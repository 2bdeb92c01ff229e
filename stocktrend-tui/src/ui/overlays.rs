//! Overlay widgets.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::theme;
use crate::ui::centered_rect;

/// Shown while a submitted query is waiting on the provider.
pub fn render_fetching(f: &mut Frame, area: Rect, symbol: &str) {
    let popup = centered_rect(50, 25, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::warning())
        .title(" Loading ")
        .title_style(theme::warning());

    let text = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Fetching data for ", theme::text()),
            Span::styled(symbol, theme::accent_bold()),
            Span::styled("...", theme::text()),
        ]),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}
