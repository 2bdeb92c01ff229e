//! Application state: single-owner, main-thread only.
//!
//! The form holds raw text; every edit queues `Request::Idle` and the trigger
//! queues `Request::Submit`. The main loop hands queued requests to the core
//! handler and stores the render model it returns.

use chrono::NaiveDate;

use stocktrend_core::shell;
use stocktrend_core::view::{Query, RenderModel, Request};
use stocktrend_core::DashboardConfig;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Which form control has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Symbol,
    Start,
    End,
    Submit,
}

impl Field {
    pub fn index(self) -> usize {
        match self {
            Field::Symbol => 0,
            Field::Start => 1,
            Field::End => 2,
            Field::Submit => 3,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Field::Symbol),
            1 => Some(Field::Start),
            2 => Some(Field::End),
            3 => Some(Field::Submit),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Symbol => shell::SYMBOL_LABEL,
            Field::Start => shell::START_LABEL,
            Field::End => shell::END_LABEL,
            Field::Submit => shell::SUBMIT_LABEL,
        }
    }

    pub fn is_text(self) -> bool {
        !matches!(self, Field::Submit)
    }

    pub fn next(self) -> Field {
        Field::from_index((self.index() + 1) % 4).unwrap_or(Field::Symbol)
    }

    pub fn prev(self) -> Field {
        Field::from_index((self.index() + 3) % 4).unwrap_or(Field::Symbol)
    }
}

/// Result tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    PriceChart,
    RawData,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::PriceChart, Tab::RawData];

    pub fn index(self) -> usize {
        match self {
            Tab::PriceChart => 0,
            Tab::RawData => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::PriceChart => shell::CHART_TAB,
            Tab::RawData => shell::TABLE_TAB,
        }
    }

    pub fn toggle(self) -> Tab {
        match self {
            Tab::PriceChart => Tab::RawData,
            Tab::RawData => Tab::PriceChart,
        }
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Raw text of the three inputs plus focus.
#[derive(Debug, Clone)]
pub struct FormState {
    pub symbol: String,
    pub start: String,
    pub end: String,
    pub focus: Field,
}

impl FormState {
    pub fn new(symbol: &str, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            symbol: symbol.to_string(),
            start: start.format(DATE_FORMAT).to_string(),
            end: end.format(DATE_FORMAT).to_string(),
            focus: Field::Symbol,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Symbol => &self.symbol,
            Field::Start => &self.start,
            Field::End => &self.end,
            Field::Submit => "",
        }
    }

    pub fn field_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Symbol => Some(&mut self.symbol),
            Field::Start => Some(&mut self.start),
            Field::End => Some(&mut self.end),
            Field::Submit => None,
        }
    }

    /// Snapshot the inputs. Dates must be `YYYY-MM-DD`; the symbol is trimmed
    /// but otherwise passed through for the provider to judge.
    pub fn to_query(&self) -> Result<Query, String> {
        let start = parse_date(&self.start)
            .ok_or_else(|| format!("Invalid start date '{}' (expected YYYY-MM-DD)", self.start))?;
        let end = parse_date(&self.end)
            .ok_or_else(|| format!("Invalid end date '{}' (expected YYYY-MM-DD)", self.end))?;
        Ok(Query {
            symbol: self.symbol.trim().to_string(),
            start,
            end,
        })
    }
}

pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}

/// Top-level application state.
pub struct AppState {
    pub running: bool,
    pub form: FormState,
    pub tab: Tab,
    pub view: RenderModel,
    /// Request waiting for the main loop to run it through the handler.
    pub pending: Option<Request>,
    pub table_scroll: usize,
    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    pub fn new(config: &DashboardConfig, today: NaiveDate) -> Self {
        let (start, end) = config.default_range(today);
        Self {
            running: true,
            form: FormState::new(&config.default_symbol, start, end),
            tab: Tab::PriceChart,
            view: RenderModel::Instructions {
                message: shell::INSTRUCTIONS.to_string(),
            },
            pending: Some(Request::Idle),
            table_scroll: 0,
            status_message: None,
        }
    }

    /// Symbol of a queued submit, used for the fetching overlay.
    pub fn fetching_symbol(&self) -> Option<&str> {
        match &self.pending {
            Some(Request::Submit(query)) => Some(query.symbol.as_str()),
            _ => None,
        }
    }

    /// An input changed: the next view is computed without a trigger.
    pub fn inputs_changed(&mut self) {
        self.pending = Some(Request::Idle);
    }

    /// Trigger pressed.
    pub fn submit(&mut self) {
        match self.form.to_query() {
            Ok(query) => self.pending = Some(Request::Submit(query)),
            Err(msg) => self.set_warning(msg),
        }
    }

    pub fn take_pending(&mut self) -> Option<Request> {
        self.pending.take()
    }

    /// Store the handler's answer.
    pub fn apply(&mut self, model: RenderModel) {
        match &model {
            RenderModel::Ready(dash) => {
                self.set_status(format!(
                    "Loaded {} rows for {}",
                    dash.table.total_rows, dash.symbol
                ));
            }
            RenderModel::Unavailable { message, .. } => {
                self.set_error(message.clone());
            }
            RenderModel::Instructions { .. } => {}
        }
        self.view = model;
        self.tab = Tab::PriceChart;
        self.table_scroll = 0;
    }

    /// Rows in the current table, or 0 when no data is shown.
    pub fn table_len(&self) -> usize {
        match &self.view {
            RenderModel::Ready(dash) => dash.table.rows.len(),
            _ => 0,
        }
    }

    pub fn scroll_table(&mut self, delta: isize) {
        let max = self.table_len().saturating_sub(1);
        let next = self.table_scroll.saturating_add_signed(delta);
        self.table_scroll = next.min(max);
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stocktrend_core::series::TrendSeries;
    use stocktrend_core::view::build_dashboard;
    use stocktrend_core::Bar;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn app() -> AppState {
        AppState::new(&DashboardConfig::default(), today())
    }

    fn dashboard(rows: usize) -> RenderModel {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let bars = (0..rows)
            .map(|i| Bar {
                date: base + chrono::Duration::days(i as i64),
                open: 1.0,
                high: 1.0,
                low: 1.0,
                close: 1.0,
                adj_close: 1.0,
                volume: 1,
            })
            .collect();
        RenderModel::Ready(build_dashboard(&TrendSeries::derive("TLKM.JK", bars)))
    }

    #[test]
    fn field_cycle() {
        assert_eq!(Field::Symbol.next(), Field::Start);
        assert_eq!(Field::Submit.next(), Field::Symbol);
        assert_eq!(Field::Symbol.prev(), Field::Submit);
        assert_eq!(Field::End.prev(), Field::Start);
    }

    #[test]
    fn field_from_index() {
        for i in 0..4 {
            assert_eq!(Field::from_index(i).unwrap().index(), i);
        }
        assert!(Field::from_index(4).is_none());
    }

    #[test]
    fn defaults_fill_the_form() {
        let app = app();
        assert_eq!(app.form.symbol, "BBRI.JK");
        assert_eq!(app.form.start, "2023-03-02");
        assert_eq!(app.form.end, "2024-03-01");
        assert_eq!(app.pending, Some(Request::Idle));
        assert!(matches!(app.view, RenderModel::Instructions { .. }));
    }

    #[test]
    fn submit_builds_trimmed_query() {
        let mut app = app();
        app.take_pending();
        app.form.symbol = "  TLKM.JK ".into();
        app.submit();

        match app.take_pending() {
            Some(Request::Submit(q)) => {
                assert_eq!(q.symbol, "TLKM.JK");
                assert_eq!(q.start, NaiveDate::from_ymd_opt(2023, 3, 2).unwrap());
                assert_eq!(q.end, today());
            }
            other => panic!("expected Submit, got {other:?}"),
        }
    }

    #[test]
    fn malformed_date_warns_and_queues_nothing() {
        let mut app = app();
        app.take_pending();
        app.form.end = "2024-13-01".into();
        app.submit();

        assert!(app.pending.is_none());
        let (msg, level) = app.status_message.clone().unwrap();
        assert_eq!(level, StatusLevel::Warning);
        assert!(msg.contains("end date"));
    }

    #[test]
    fn reversed_dates_are_still_submitted() {
        let mut app = app();
        app.take_pending();
        app.form.start = "2024-06-01".into();
        app.form.end = "2024-01-01".into();
        app.submit();
        assert!(matches!(app.pending, Some(Request::Submit(_))));
    }

    #[test]
    fn fetching_symbol_only_for_submit() {
        let mut app = app();
        assert!(app.fetching_symbol().is_none());
        app.submit();
        assert_eq!(app.fetching_symbol(), Some("BBRI.JK"));
    }

    #[test]
    fn apply_resets_tab_and_scroll() {
        let mut app = app();
        app.tab = Tab::RawData;
        app.table_scroll = 7;
        app.apply(dashboard(30));

        assert_eq!(app.tab, Tab::PriceChart);
        assert_eq!(app.table_scroll, 0);
        assert_eq!(app.table_len(), 30);
        assert_eq!(app.status_message.as_ref().unwrap().1, StatusLevel::Info);
    }

    #[test]
    fn apply_unavailable_sets_error_status() {
        let mut app = app();
        app.apply(RenderModel::Unavailable {
            symbol: "NOSUCHTICKER".into(),
            message: "Failed to fetch data for symbol 'NOSUCHTICKER'.".into(),
        });
        let (msg, level) = app.status_message.clone().unwrap();
        assert_eq!(level, StatusLevel::Error);
        assert!(msg.contains("NOSUCHTICKER"));
    }

    #[test]
    fn scroll_is_clamped_to_table() {
        let mut app = app();
        app.scroll_table(5);
        assert_eq!(app.table_scroll, 0);

        app.apply(dashboard(80));
        app.scroll_table(100);
        assert_eq!(app.table_scroll, 49);
        app.scroll_table(-200);
        assert_eq!(app.table_scroll, 0);
    }

    #[test]
    fn parse_date_accepts_padding() {
        assert_eq!(
            parse_date(" 2023-01-01 "),
            NaiveDate::from_ymd_opt(2023, 1, 1)
        );
        assert!(parse_date("01/02/2023").is_none());
        assert!(parse_date("").is_none());
    }
}
