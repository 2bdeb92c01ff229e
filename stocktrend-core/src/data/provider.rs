//! Data provider trait and structured error types.
//!
//! The DataProvider trait abstracts over market data sources so the service can
//! be exercised with in-memory providers in tests. Callers above this module
//! only ever see "data" or "no data": [`fetch_series`] collapses every
//! `DataError` and every empty result into `None`.

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::Bar;

/// Structured error types for provider calls.
///
/// These never reach the user; they are logged and then folded into the
/// single "data unavailable" outcome.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("HTTP {status} for {symbol}")]
    HttpStatus { status: u16, symbol: String },

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),
}

/// Trait for market data providers.
///
/// Implementations fetch daily bars for `[start, end)` using whatever date
/// semantics the provider defines, and return them sorted by date ascending.
/// Providers know nothing about the memo table.
pub trait DataProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch daily OHLCV bars for a symbol over a date range.
    ///
    /// `start > end` is not rejected here; the provider answers as it sees fit.
    fn fetch(&self, symbol: &str, start: NaiveDate, end: NaiveDate)
        -> Result<Vec<Bar>, DataError>;
}

/// Fetch bars, merging provider failures and empty results into `None`.
pub fn fetch_series(
    provider: &dyn DataProvider,
    symbol: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Option<Vec<Bar>> {
    match provider.fetch(symbol, start, end) {
        Ok(bars) if bars.is_empty() => {
            tracing::info!(
                provider = provider.name(),
                symbol,
                %start,
                %end,
                "provider returned no rows"
            );
            None
        }
        Ok(bars) => {
            tracing::info!(
                provider = provider.name(),
                symbol,
                %start,
                %end,
                rows = bars.len(),
                "fetched price series"
            );
            Some(bars)
        }
        Err(e) => {
            tracing::warn!(
                provider = provider.name(),
                symbol,
                %start,
                %end,
                error = %e,
                "fetch failed, reporting no data"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Result<Vec<Bar>, fn() -> DataError>);

    impl DataProvider for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        fn fetch(&self, _: &str, _: NaiveDate, _: NaiveDate) -> Result<Vec<Bar>, DataError> {
            match &self.0 {
                Ok(bars) => Ok(bars.clone()),
                Err(make) => Err(make()),
            }
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn bar(d: u32, close: f64) -> Bar {
        Bar {
            date: day(d),
            open: close,
            high: close,
            low: close,
            close,
            adj_close: close,
            volume: 10,
        }
    }

    #[test]
    fn rows_pass_through() {
        let provider = Fixed(Ok(vec![bar(4, 10.0), bar(5, 11.0)]));
        let bars = fetch_series(&provider, "ANY", day(1), day(10)).unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[1].close, 11.0);
    }

    #[test]
    fn empty_result_is_none() {
        let provider = Fixed(Ok(Vec::new()));
        assert!(fetch_series(&provider, "ANY", day(1), day(10)).is_none());
    }

    #[test]
    fn every_error_kind_is_none() {
        let makers: [fn() -> DataError; 4] = [
            || DataError::NetworkUnreachable("dns".into()),
            || DataError::HttpStatus {
                status: 500,
                symbol: "ANY".into(),
            },
            || DataError::ResponseFormatChanged("no chart".into()),
            || DataError::SymbolNotFound {
                symbol: "ANY".into(),
            },
        ];
        for make in makers {
            let provider = Fixed(Err(make));
            assert!(fetch_series(&provider, "ANY", day(1), day(10)).is_none());
        }
    }

    #[test]
    fn error_messages_name_the_symbol() {
        let err = DataError::SymbolNotFound {
            symbol: "NOSUCHTICKER".into(),
        };
        assert_eq!(err.to_string(), "symbol not found: NOSUCHTICKER");
    }
}
