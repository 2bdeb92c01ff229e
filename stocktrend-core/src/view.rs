//! Request/response handler: one input snapshot in, one render model out.
//!
//! Front ends call [`handle`] once per user interaction and draw whatever
//! comes back. Nothing here re-executes on its own; the only state touched is
//! the service's memo table.

use chrono::NaiveDate;
use serde::Serialize;

use crate::data::TrendService;
use crate::series::{TrendRow, TrendSeries};
use crate::shell;

/// Maximum rows shown in the raw data table.
pub const TABLE_ROW_LIMIT: usize = 50;

pub const CLOSE_LABEL: &str = "Closing Price";
pub const TREND_LABEL: &str = "20-Day Trend (SMA)";
pub const CLOSE_COLOR: &str = "#2980b9";
pub const TREND_COLOR: &str = "#e74c3c";

pub const TABLE_COLUMNS: [&str; 8] = [
    "Date", "Open", "High", "Low", "Close", "Adj Close", "Volume", "SMA 20",
];

/// The three inputs of the form, as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    pub symbol: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// What the user asked for on this interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Inputs shown, trigger not pressed.
    Idle,
    /// Trigger pressed with these inputs.
    Submit(Query),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RenderModel {
    Instructions { message: String },
    Unavailable { symbol: String, message: String },
    Ready(Dashboard),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub symbol: String,
    pub chart: ChartView,
    pub table: TableView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    pub subtitle: String,
    pub caption: &'static str,
    pub close: LineSeries,
    pub trend: LineSeries,
}

/// One line of the chart. Points without a value are gaps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    pub label: &'static str,
    pub color: &'static str,
    pub points: Vec<(NaiveDate, Option<f64>)>,
}

impl LineSeries {
    /// Points that have a value.
    pub fn defined(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.points
            .iter()
            .filter_map(|&(date, value)| value.map(|v| (date, v)))
    }

    /// (min, max) over the defined points.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.defined().fold(None, |acc, (_, v)| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub title: &'static str,
    pub columns: [&'static str; 8],
    /// Newest first, at most [`TABLE_ROW_LIMIT`].
    pub rows: Vec<TrendRow>,
    /// Rows in the full series, before truncation.
    pub total_rows: usize,
}

pub fn unavailable_message(symbol: &str) -> String {
    format!(
        "Failed to fetch data for symbol '{symbol}'. Check that the symbol is correct \
         or try a different date range."
    )
}

/// Compute the view for one interaction.
pub fn handle(service: &TrendService, request: &Request) -> RenderModel {
    match request {
        Request::Idle => RenderModel::Instructions {
            message: shell::INSTRUCTIONS.to_string(),
        },
        Request::Submit(query) => {
            tracing::info!(symbol = %query.symbol, start = %query.start, end = %query.end, "loading data");
            match service.get_data(&query.symbol, query.start, query.end) {
                Some(series) => RenderModel::Ready(build_dashboard(&series)),
                None => RenderModel::Unavailable {
                    symbol: query.symbol.clone(),
                    message: unavailable_message(&query.symbol),
                },
            }
        }
    }
}

pub fn build_dashboard(series: &TrendSeries) -> Dashboard {
    Dashboard {
        symbol: series.symbol.clone(),
        chart: build_chart(series),
        table: build_table(series),
    }
}

fn build_chart(series: &TrendSeries) -> ChartView {
    let close = series
        .rows
        .iter()
        .map(|r| (r.bar.date, r.bar.close_value()))
        .collect();
    let trend = series.rows.iter().map(|r| (r.bar.date, r.sma_20)).collect();

    ChartView {
        subtitle: format!("Closing Price Movement: {}", series.symbol),
        caption: shell::CHART_CAPTION,
        close: LineSeries {
            label: CLOSE_LABEL,
            color: CLOSE_COLOR,
            points: close,
        },
        trend: LineSeries {
            label: TREND_LABEL,
            color: TREND_COLOR,
            points: trend,
        },
    }
}

fn build_table(series: &TrendSeries) -> TableView {
    TableView {
        title: shell::TABLE_TITLE,
        columns: TABLE_COLUMNS,
        rows: series.newest_first(TABLE_ROW_LIMIT).cloned().collect(),
        total_rows: series.len(),
    }
}
