//! End-to-end tests of fetch → trend → memo → render model with scripted providers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use stocktrend_core::data::{DataError, DataProvider, FetchKey, MemoTable, TrendService};
use stocktrend_core::view::{handle, Query, RenderModel, Request, TABLE_ROW_LIMIT};
use stocktrend_core::Bar;

/// What the scripted provider does on every call.
enum Script {
    /// Weekday bars in `[start, end)` with closes `first_close, first_close + 1, ...`.
    Weekdays { first_close: f64 },
    Empty,
    Fail,
}

struct ScriptedProvider {
    script: Script,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    fn new(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DataProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn fetch(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> Result<Vec<Bar>, DataError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.script {
            Script::Weekdays { first_close } => Ok(weekday_bars(start, end, first_close)),
            Script::Empty => Ok(Vec::new()),
            Script::Fail => Err(DataError::NetworkUnreachable(format!(
                "connection refused while fetching {symbol}"
            ))),
        }
    }
}

fn weekday_bars(start: NaiveDate, end: NaiveDate, first_close: f64) -> Vec<Bar> {
    let mut bars = Vec::new();
    let mut day = start;
    let mut close = first_close;
    while day < end {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            bars.push(Bar {
                date: day,
                open: close,
                high: close + 1.0,
                low: close - 1.0,
                close,
                adj_close: close,
                volume: 1_000,
            });
            close += 1.0;
        }
        day += Duration::days(1);
    }
    bars
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn service_with(provider: Arc<ScriptedProvider>) -> TrendService {
    TrendService::new(provider, Arc::new(MemoTable::new()))
}

#[test]
fn twenty_trading_days_give_one_trend_value() {
    let provider = ScriptedProvider::new(Script::Weekdays { first_close: 100.0 });
    let service = service_with(provider.clone());

    // 2023-01-02 (Mon) .. 2023-01-27 (Fri) is exactly 20 weekdays.
    let series = service
        .get_data("TLKM.JK", date(2023, 1, 2), date(2023, 1, 28))
        .unwrap();

    assert_eq!(series.len(), 20);
    assert_eq!(series.closes(), (100..120).map(f64::from).collect::<Vec<_>>());

    let trend = series.trend();
    assert!(trend[..19].iter().all(Option::is_none));
    let last = trend[19].unwrap();
    assert!((last - 109.5).abs() < 1e-9, "got {last}");
}

#[test]
fn full_month_range_defines_trend_from_twentieth_row() {
    let provider = ScriptedProvider::new(Script::Weekdays { first_close: 100.0 });
    let service = service_with(provider);

    let series = service
        .get_data("TLKM.JK", date(2023, 1, 1), date(2023, 2, 1))
        .unwrap();

    assert!(series.len() >= 20);
    let trend = series.trend();
    let closes = series.closes();
    for (i, value) in trend.iter().enumerate() {
        if i < 19 {
            assert!(value.is_none(), "index {i} should have no trend value");
        } else {
            let expected = closes[i - 19..=i].iter().sum::<f64>() / 20.0;
            assert!((value.unwrap() - expected).abs() < 1e-9);
        }
    }
}

#[test]
fn unknown_symbol_renders_error_naming_it() {
    let provider = ScriptedProvider::new(Script::Empty);
    let service = service_with(provider.clone());

    let request = Request::Submit(Query {
        symbol: "NOSUCHTICKER".into(),
        start: date(2024, 1, 1),
        end: date(2024, 12, 31),
    });

    match handle(&service, &request) {
        RenderModel::Unavailable { symbol, message } => {
            assert_eq!(symbol, "NOSUCHTICKER");
            assert!(message.contains("NOSUCHTICKER"));
        }
        other => panic!("expected Unavailable, got {other:?}"),
    }
    assert_eq!(provider.calls(), 1);
}

#[test]
fn provider_failure_is_no_data_not_a_panic() {
    let provider = ScriptedProvider::new(Script::Fail);
    let service = service_with(provider.clone());

    assert!(service
        .get_data("BBRI.JK", date(2024, 1, 1), date(2024, 2, 1))
        .is_none());
    // The failure is memoized like an empty result.
    assert!(service
        .get_data("BBRI.JK", date(2024, 1, 1), date(2024, 2, 1))
        .is_none());
    assert_eq!(provider.calls(), 1);
}

#[test]
fn same_day_range_has_no_trend_values() {
    let provider = ScriptedProvider::new(Script::Weekdays { first_close: 50.0 });
    let service = service_with(provider);

    let day = date(2024, 5, 15);
    match service.get_data("GOOG", day, day) {
        None => {}
        Some(series) => {
            assert!(series.len() <= 1);
            assert!(series.trend().iter().all(Option::is_none));
        }
    }
}

#[test]
fn reversed_range_does_not_crash() {
    let provider = ScriptedProvider::new(Script::Weekdays { first_close: 50.0 });
    let service = service_with(provider.clone());

    let request = Request::Submit(Query {
        symbol: "GOOG".into(),
        start: date(2024, 6, 1),
        end: date(2024, 1, 1),
    });
    assert!(matches!(
        handle(&service, &request),
        RenderModel::Unavailable { .. }
    ));
    // The provider still decides; it was asked once.
    assert_eq!(provider.calls(), 1);
}

#[test]
fn repeated_interaction_is_bit_identical_and_fetches_once() {
    let provider = ScriptedProvider::new(Script::Weekdays { first_close: 4_000.0 });
    let service = service_with(provider.clone());

    let request = Request::Submit(Query {
        symbol: "BBRI.JK".into(),
        start: date(2023, 6, 1),
        end: date(2024, 6, 1),
    });

    let first = handle(&service, &request);
    let second = handle(&service, &request);
    assert_eq!(first, second);
    assert_eq!(provider.calls(), 1);

    let RenderModel::Ready(dash) = first else {
        panic!("expected Ready");
    };
    assert_eq!(dash.table.rows.len(), TABLE_ROW_LIMIT);
    assert!(dash.table.rows.windows(2).all(|w| w[0].bar.date > w[1].bar.date));
}

#[test]
fn concurrent_callers_agree_on_one_stored_result() {
    let provider = ScriptedProvider::new(Script::Weekdays { first_close: 10.0 });
    let memo = Arc::new(MemoTable::new());
    let service = Arc::new(TrendService::new(provider.clone(), memo.clone()));
    let barrier = Arc::new(Barrier::new(8));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = service.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                service
                    .get_data("TLKM.JK", date(2024, 1, 1), date(2024, 3, 1))
                    .unwrap()
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    for r in &results[1..] {
        assert!(Arc::ptr_eq(r, &results[0]));
    }
    assert_eq!(memo.len(), 1);
    assert!(memo.contains(&FetchKey::new("TLKM.JK", date(2024, 1, 1), date(2024, 3, 1))));
    // Racing misses may each fetch, but never more than once per caller.
    assert!((1..=8).contains(&provider.calls()));
}
