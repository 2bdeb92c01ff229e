//! Raw Data tab: newest-first rows of the fetched series.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use stocktrend_core::series::TrendRow;
use stocktrend_core::view::{TableView, TREND_COLOR};

use crate::app::DATE_FORMAT;
use crate::theme;

const WIDTHS: [Constraint; 8] = [
    Constraint::Length(12),
    Constraint::Length(11),
    Constraint::Length(11),
    Constraint::Length(11),
    Constraint::Length(11),
    Constraint::Length(11),
    Constraint::Length(14),
    Constraint::Length(11),
];

pub fn render(f: &mut Frame, area: Rect, table: &TableView, scroll: usize) {
    let header = Row::new(
        table
            .columns
            .iter()
            .map(|c| Cell::from(*c).style(theme::accent_bold())),
    )
    .bottom_margin(1);

    let rows: Vec<Row> = table.rows.iter().skip(scroll).map(table_row).collect();

    let shown = table.rows.len();
    let title = Line::from(vec![
        Span::styled(format!(" {} ", table.title), theme::accent_bold()),
        Span::styled(
            format!("({shown} of {} rows, newest first) ", table.total_rows),
            theme::muted(),
        ),
    ]);

    let widget = Table::new(rows, WIDTHS)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::muted())
                .title(title),
        )
        .column_spacing(1);

    f.render_widget(widget, area);
}

fn table_row(row: &TrendRow) -> Row<'static> {
    let bar = &row.bar;
    let trend_style = if row.sma_20.is_some() {
        Style::default().fg(theme::hex(TREND_COLOR))
    } else {
        theme::muted()
    };
    Row::new(vec![
        Cell::from(bar.date.format(DATE_FORMAT).to_string()).style(theme::text()),
        Cell::from(fmt_price(bar.open)),
        Cell::from(fmt_price(bar.high)),
        Cell::from(fmt_price(bar.low)),
        Cell::from(fmt_price(bar.close)).style(theme::text().add_modifier(Modifier::BOLD)),
        Cell::from(fmt_price(bar.adj_close)),
        Cell::from(bar.volume.to_string()),
        Cell::from(fmt_trend(row.sma_20)).style(trend_style),
    ])
    .style(theme::text_secondary())
}

pub fn fmt_price(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}")
    } else {
        "-".to_string()
    }
}

pub fn fmt_trend(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), fmt_price)
}
