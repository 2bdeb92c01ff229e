//! Static page text shared by the dashboard and the CLI.

pub const PAGE_TITLE: &str = "📈 Stock Trend Visualizer";

pub const PAGE_DESCRIPTION: &str = "Fetches historical prices from Yahoo Finance and plots the daily \
closing price together with a simple moving average trend indicator.";

pub const PAGE_CREDIT: &str = "Built with Rust & ratatui.";

pub const FOOTER: &str = "Developed by Daniel Asher | Mathematics Student - Data Analytics Portfolio";

pub const SIDEBAR_TITLE: &str = "Data Configuration";

pub const SYMBOL_LABEL: &str = "Stock symbol (Yahoo Finance):";

pub const START_LABEL: &str = "Start date";

pub const END_LABEL: &str = "End date";

pub const SUBMIT_LABEL: &str = "Show Data";

pub const INSTRUCTIONS: &str = "👈 Enter a stock symbol (e.g. BBRI.JK, TLKM.JK or GOOG) in the sidebar \
and press 'Show Data'.";

pub const CHART_TAB: &str = "📊 Price Chart";

pub const TABLE_TAB: &str = "📄 Raw Data";

pub const TABLE_TITLE: &str = "Latest Historical Data";

pub const CHART_CAPTION: &str = "Blue line: daily closing price. Red line: 20-day moving average \
(trend indicator).";
