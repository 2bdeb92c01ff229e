//! Stock trend TUI: ticker form in a sidebar, results in two tabs.
//!
//! Layout:
//! - Sidebar: symbol, start date, end date, "Show Data" button
//! - Header: page title and description
//! - Body: instructions, an error, or the Price Chart / Raw Data tabs
//! - Footer and status bar

pub mod app;
pub mod input;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use input::handle_key;
