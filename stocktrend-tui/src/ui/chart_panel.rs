//! Price Chart tab: closing price and 20-day trend over trading dates.

use chrono::NaiveDate;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, LegendPosition, Paragraph, Wrap};
use ratatui::Frame;

use stocktrend_core::view::{ChartView, LineSeries};

use crate::app::DATE_FORMAT;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, chart: &ChartView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            chart.subtitle.as_str(),
            theme::accent_bold(),
        ))),
        chunks[0],
    );

    render_chart(f, chunks[1], chart);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(chart.caption, theme::muted())))
            .wrap(Wrap { trim: true }),
        chunks[2],
    );
}

fn render_chart(f: &mut Frame, area: Rect, chart: &ChartView) {
    let Some(origin) = chart.close.points.first().map(|(d, _)| *d) else {
        return;
    };
    let last = chart.close.points.last().map(|(d, _)| *d).unwrap_or(origin);

    let close_data = to_xy(&chart.close, origin);
    let trend_data = to_xy(&chart.trend, origin);

    let (y_min, y_max) = y_bounds(&chart.close, &chart.trend);
    let x_max = ((last - origin).num_days() as f64).max(1.0);

    let datasets = vec![
        line_dataset(&chart.close, &close_data),
        line_dataset(&chart.trend, &trend_data),
    ];

    let mid = origin + chrono::Duration::days((last - origin).num_days() / 2);

    let widget = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .title(Span::styled("Date", theme::muted()))
                .style(theme::muted())
                .bounds([0.0, x_max])
                .labels(vec![
                    date_label(origin),
                    date_label(mid),
                    date_label(last),
                ]),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("Price", theme::muted()))
                .style(theme::muted())
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::styled(format!("{y_min:.0}"), theme::muted()),
                    Span::styled(format!("{:.0}", (y_min + y_max) / 2.0), theme::muted()),
                    Span::styled(format!("{y_max:.0}"), theme::muted()),
                ]),
        )
        .legend_position(Some(LegendPosition::TopLeft))
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

    f.render_widget(widget, area);
}

fn line_dataset<'a>(series: &'a LineSeries, data: &'a [(f64, f64)]) -> Dataset<'a> {
    Dataset::default()
        .name(series.label)
        .marker(symbols::Marker::Braille)
        .style(Style::default().fg(theme::hex(series.color)))
        .graph_type(GraphType::Line)
        .data(data)
}

/// Days since `origin` on x. Points without a value are left out.
fn to_xy(series: &LineSeries, origin: NaiveDate) -> Vec<(f64, f64)> {
    series
        .defined()
        .filter(|(_, v)| v.is_finite())
        .map(|(d, v)| ((d - origin).num_days() as f64, v))
        .collect()
}

/// Combined value range of both lines with 5% padding.
fn y_bounds(close: &LineSeries, trend: &LineSeries) -> (f64, f64) {
    let (lo, hi) = [close.bounds(), trend.bounds()]
        .into_iter()
        .flatten()
        .filter(|(lo, hi)| lo.is_finite() && hi.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(a, b), (lo, hi)| {
            (a.min(lo), b.max(hi))
        });

    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }

    let padding = ((hi - lo).abs() * 0.05).max(lo.abs() * 0.01).max(0.5);
    (lo - padding, hi + padding)
}

fn date_label(date: NaiveDate) -> Span<'static> {
    Span::styled(date.format(DATE_FORMAT).to_string(), theme::muted())
}
