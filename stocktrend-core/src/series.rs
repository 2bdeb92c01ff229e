//! Price series with its derived 20-day trend column.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::Bar;
use crate::indicators::Sma;

/// One table row: the provider's columns plus the trend value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendRow {
    #[serde(flatten)]
    pub bar: Bar,
    /// 20-day trailing mean of `close`; `None` until 20 observations exist.
    pub sma_20: Option<f64>,
}

/// A fetched price series, ascending by trading date, with `sma_20` attached.
///
/// Built once per fetch and never mutated afterwards; the memo table hands
/// out shared references to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSeries {
    pub symbol: String,
    pub rows: Vec<TrendRow>,
}

impl TrendSeries {
    /// Attach the 20-day SMA to a set of bars.
    pub fn derive(symbol: impl Into<String>, mut bars: Vec<Bar>) -> Self {
        bars.sort_by_key(|b| b.date);
        let trend = Sma::default().compute(&bars);
        let rows = bars
            .into_iter()
            .zip(trend)
            .map(|(bar, sma_20)| TrendRow { bar, sma_20 })
            .collect();
        Self {
            symbol: symbol.into(),
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.rows.iter().map(|r| r.bar.date).collect()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.bar.close).collect()
    }

    pub fn trend(&self) -> Vec<Option<f64>> {
        self.rows.iter().map(|r| r.sma_20).collect()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.rows.last().map(|r| r.bar.date)
    }

    /// The most recent `limit` rows, newest first.
    pub fn newest_first(&self, limit: usize) -> impl Iterator<Item = &TrendRow> {
        self.rows.iter().rev().take(limit)
    }
}
