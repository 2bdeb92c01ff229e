//! Page header and footer.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use stocktrend_core::shell;

use crate::theme;

pub const HEADER_HEIGHT: u16 = 5;
pub const FOOTER_HEIGHT: u16 = 2;

pub fn render_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(shell::PAGE_TITLE, theme::accent_bold())),
        Line::from(Span::styled(shell::PAGE_DESCRIPTION, theme::text())),
        Line::from(Span::styled(shell::PAGE_CREDIT, theme::muted())),
    ];
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme::muted());
    let para = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(para, area);
}

pub fn render_footer(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme::muted());
    let para = Paragraph::new(Line::from(Span::styled(shell::FOOTER, theme::muted()))).block(block);
    f.render_widget(para, area);
}
