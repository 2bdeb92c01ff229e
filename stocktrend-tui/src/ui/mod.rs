//! Top-level UI layout: sidebar form, page shell, result body, status bar.

pub mod chart_panel;
pub mod overlays;
pub mod shell;
pub mod sidebar;
pub mod status_bar;
pub mod table_panel;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use stocktrend_core::view::{Dashboard, RenderModel};

use crate::app::{AppState, Tab};
use crate::theme;

const SIDEBAR_WIDTH: u16 = 34;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: main area + 1-line status bar.
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(rows[0]);

    sidebar::render(f, columns[0], app);
    draw_page(f, columns[1], app);
    status_bar::render(f, rows[1], app);

    if let Some(symbol) = app.fetching_symbol() {
        overlays::render_fetching(f, columns[1], symbol);
    }
}

/// Header, body and footer of the main page.
fn draw_page(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(shell::HEADER_HEIGHT),
            Constraint::Min(5),
            Constraint::Length(shell::FOOTER_HEIGHT),
        ])
        .split(area);

    shell::render_header(f, chunks[0]);
    draw_body(f, chunks[1], app);
    shell::render_footer(f, chunks[2]);
}

fn draw_body(f: &mut Frame, area: Rect, app: &AppState) {
    match &app.view {
        RenderModel::Instructions { message } => render_instructions(f, area, message),
        RenderModel::Unavailable { message, .. } => render_unavailable(f, area, message),
        RenderModel::Ready(dash) => render_dashboard(f, area, app.tab, app.table_scroll, dash),
    }
}

fn render_instructions(f: &mut Frame, area: Rect, message: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent());
    let para = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(message, theme::accent())),
    ])
    .block(block)
    .wrap(Wrap { trim: true });
    f.render_widget(para, area);
}

fn render_unavailable(f: &mut Frame, area: Rect, message: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::negative())
        .title(" Error ")
        .title_style(theme::negative().add_modifier(Modifier::BOLD));
    let para = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(message, theme::negative())),
    ])
    .block(block)
    .wrap(Wrap { trim: true });
    f.render_widget(para, area);
}

fn render_dashboard(f: &mut Frame, area: Rect, tab: Tab, scroll: usize, dash: &Dashboard) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(area);

    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|t| Line::from(format!(" {} ", t.label())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(tab.index())
        .style(theme::muted())
        .highlight_style(theme::accent_bold().add_modifier(Modifier::UNDERLINED))
        .divider(Span::styled("│", theme::muted()))
        .block(Block::default().borders(Borders::BOTTOM).border_style(theme::muted()));
    f.render_widget(tabs, chunks[0]);

    match tab {
        Tab::PriceChart => chart_panel::render(f, chunks[1], &dash.chart),
        Tab::RawData => table_panel::render(f, chunks[1], &dash.table, scroll),
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
