//! Bar: one trading day of price data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily OHLCV bar as delivered by the market data provider.
///
/// Fields the provider left blank are NaN (prices) or 0 (volume).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub adj_close: f64,
    pub volume: u64,
}

impl Bar {
    /// Returns true if any price field is NaN.
    pub fn is_void(&self) -> bool {
        self.open.is_nan()
            || self.high.is_nan()
            || self.low.is_nan()
            || self.close.is_nan()
            || self.adj_close.is_nan()
    }

    /// Closing price, or `None` when the provider left it blank.
    pub fn close_value(&self) -> Option<f64> {
        if self.close.is_nan() {
            None
        } else {
            Some(self.close)
        }
    }
}
