//! Stock Trend Core: price fetching, trend computation, memo table, render model.
//!
//! This crate contains everything the dashboard does apart from drawing:
//! - Domain types (daily OHLCV bars)
//! - Market data provider trait and the Yahoo Finance implementation
//! - 20-day simple moving average
//! - Memoized fetch-and-derive service keyed by (symbol, start, end)
//! - Request/response handler producing a render model for any front end
//! - Dashboard configuration and static page text

pub mod config;
pub mod data;
pub mod domain;
pub mod indicators;
pub mod series;
pub mod shell;
pub mod view;

pub use config::{ConfigError, DashboardConfig, ProviderConfig};
pub use data::{DataError, DataProvider, FetchKey, MemoTable, TrendService, YahooProvider};
pub use domain::Bar;
pub use indicators::{compute_sma, Sma, SMA_WINDOW};
pub use series::{TrendRow, TrendSeries};
pub use view::{handle, Dashboard, Query, RenderModel, Request};
