//! Market data: provider boundary, memo table, fetch-and-derive service.

pub mod memo;
pub mod provider;
pub mod service;
pub mod yahoo;

pub use memo::{FetchKey, MemoTable};
pub use provider::{fetch_series, DataError, DataProvider};
pub use service::TrendService;
pub use yahoo::YahooProvider;
