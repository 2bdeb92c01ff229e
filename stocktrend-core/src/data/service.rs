//! Memoized fetch-and-derive.
//!
//! `TrendService::get_data` fetches bars through the provider, attaches the
//! 20-day SMA, and records the outcome in the injected [`MemoTable`]. The
//! provider is called at most once per distinct (symbol, start, end).

use std::sync::Arc;

use chrono::NaiveDate;

use super::memo::{FetchKey, MemoTable};
use super::provider::{fetch_series, DataProvider};
use crate::series::TrendSeries;

pub struct TrendService {
    provider: Arc<dyn DataProvider>,
    memo: Arc<MemoTable>,
}

impl TrendService {
    pub fn new(provider: Arc<dyn DataProvider>, memo: Arc<MemoTable>) -> Self {
        Self { provider, memo }
    }

    pub fn memo(&self) -> &MemoTable {
        &self.memo
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Price series with its trend column, or `None` when the provider had no
    /// data or failed. Both cases are memoized.
    pub fn get_data(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Option<Arc<TrendSeries>> {
        let key = FetchKey::new(symbol, start, end);

        if let Some(stored) = self.memo.get(&key) {
            tracing::debug!(symbol, %start, %end, available = stored.is_some(), "memo hit");
            return stored;
        }

        let derived = fetch_series(self.provider.as_ref(), symbol, start, end)
            .map(|bars| Arc::new(TrendSeries::derive(symbol, bars)));

        self.memo.insert(key, derived)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataError;
    use crate::domain::Bar;
    use crate::indicators::make_bars;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counting {
        calls: AtomicUsize,
        bars: Vec<Bar>,
    }

    impl DataProvider for Counting {
        fn name(&self) -> &str {
            "counting"
        }

        fn fetch(&self, _: &str, _: NaiveDate, _: NaiveDate) -> Result<Vec<Bar>, DataError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.bars.clone())
        }
    }

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, m, d).unwrap()
    }

    #[test]
    fn second_call_is_served_from_memo() {
        let provider = Arc::new(Counting {
            calls: AtomicUsize::new(0),
            bars: make_bars(&[1.0, 2.0, 3.0]),
        });
        let service = TrendService::new(provider.clone(), Arc::new(MemoTable::new()));

        let a = service.get_data("TLKM.JK", date(1, 1), date(2, 1)).unwrap();
        let b = service.get_data("TLKM.JK", date(1, 1), date(2, 1)).unwrap();

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
        assert_eq!(service.memo().len(), 1);
    }

    #[test]
    fn different_range_fetches_again() {
        let provider = Arc::new(Counting {
            calls: AtomicUsize::new(0),
            bars: make_bars(&[1.0]),
        });
        let service = TrendService::new(provider.clone(), Arc::new(MemoTable::new()));

        service.get_data("TLKM.JK", date(1, 1), date(2, 1));
        service.get_data("TLKM.JK", date(1, 2), date(2, 1));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn empty_result_is_memoized_as_no_data() {
        let provider = Arc::new(Counting {
            calls: AtomicUsize::new(0),
            bars: Vec::new(),
        });
        let service = TrendService::new(provider.clone(), Arc::new(MemoTable::new()));

        assert!(service.get_data("NOSUCHTICKER", date(1, 1), date(2, 1)).is_none());
        assert!(service.get_data("NOSUCHTICKER", date(1, 1), date(2, 1)).is_none());
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn memo_is_shared_between_services() {
        let provider = Arc::new(Counting {
            calls: AtomicUsize::new(0),
            bars: make_bars(&[1.0]),
        });
        let memo = Arc::new(MemoTable::new());
        let first = TrendService::new(provider.clone(), memo.clone());
        let second = TrendService::new(provider.clone(), memo);

        first.get_data("GOOG", date(1, 1), date(2, 1));
        second.get_data("GOOG", date(1, 1), date(2, 1));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }
}
