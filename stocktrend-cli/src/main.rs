//! Stock trend CLI: one-shot queries against the same handler the TUI uses.
//!
//! Commands:
//! - `show`: fetch a symbol, attach the 20-day trend, print the latest rows
//! - `config`: print the effective configuration as TOML

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use stocktrend_core::shell;
use stocktrend_core::view::{self, Dashboard, Query, RenderModel, Request};
use stocktrend_core::{DashboardConfig, MemoTable, TrendService, YahooProvider};

#[derive(Parser)]
#[command(
    name = "stocktrend",
    about = "Stock trend CLI, daily closes with a 20-day moving average"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch daily prices for a symbol and print the latest rows with the trend.
    Show {
        /// Yahoo Finance symbol (e.g., BBRI.JK, TLKM.JK, GOOG).
        symbol: String,

        /// Start date (YYYY-MM-DD). Defaults to `lookback_days` before today.
        #[arg(long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        end: Option<String>,

        /// Print the render model as JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Path to a TOML config file.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the effective configuration.
    Config {
        /// Path to a TOML config file.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            symbol,
            start,
            end,
            json,
            config,
        } => run_show(symbol, start, end, json, config.as_deref()),
        Commands::Config { config } => run_config(config.as_deref()),
    }
}

fn run_show(
    symbol: String,
    start: Option<String>,
    end: Option<String>,
    json: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = DashboardConfig::load_or_default(config_path)?;
    let today = chrono::Local::now().date_naive();
    let (default_start, default_end) = config.default_range(today);

    let start = parse_date_arg("start", start.as_deref())?.unwrap_or(default_start);
    let end = parse_date_arg("end", end.as_deref())?.unwrap_or(default_end);
    tracing::debug!(%symbol, %start, %end, "resolved query");

    let provider = YahooProvider::new(&config.provider)?;
    let service = TrendService::new(Arc::new(provider), Arc::new(MemoTable::new()));

    let request = Request::Submit(Query { symbol, start, end });
    let model = view::handle(&service, &request);

    if json {
        println!("{}", serde_json::to_string_pretty(&model)?);
    }

    match model {
        RenderModel::Ready(dash) => {
            if !json {
                print_dashboard(&dash);
            }
            Ok(())
        }
        RenderModel::Unavailable { message, .. } => {
            eprintln!("{message}");
            std::process::exit(1);
        }
        RenderModel::Instructions { message } => {
            println!("{message}");
            Ok(())
        }
    }
}

fn run_config(config_path: Option<&Path>) -> Result<()> {
    let config = DashboardConfig::load_or_default(config_path)?;
    match config_path
        .map(Path::to_path_buf)
        .or_else(DashboardConfig::default_path)
    {
        Some(path) => println!("# {}", path.display()),
        None => println!("# no config directory; using defaults"),
    }
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

fn parse_date_arg(name: &str, value: Option<&str>) -> Result<Option<NaiveDate>> {
    value
        .map(|s| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .with_context(|| format!("invalid --{name} date '{s}' (expected YYYY-MM-DD)"))
        })
        .transpose()
}

fn print_dashboard(dash: &Dashboard) {
    println!("{}", shell::PAGE_TITLE);
    println!("{}", dash.chart.subtitle);
    println!();
    println!(
        "{} ({} of {} rows, newest first)",
        dash.table.title,
        dash.table.rows.len(),
        dash.table.total_rows
    );
    println!(
        "{:<12} {:>12} {:>12} {:>12} {:>12} {:>12} {:>14} {:>12}",
        dash.table.columns[0],
        dash.table.columns[1],
        dash.table.columns[2],
        dash.table.columns[3],
        dash.table.columns[4],
        dash.table.columns[5],
        dash.table.columns[6],
        dash.table.columns[7],
    );
    println!("{}", "-".repeat(105));
    for row in &dash.table.rows {
        let bar = &row.bar;
        println!(
            "{:<12} {:>12} {:>12} {:>12} {:>12} {:>12} {:>14} {:>12}",
            bar.date.format("%Y-%m-%d").to_string(),
            format_price(bar.open),
            format_price(bar.high),
            format_price(bar.low),
            format_price(bar.close),
            format_price(bar.adj_close),
            bar.volume,
            row.sma_20.map_or_else(|| "-".to_string(), format_price),
        );
    }
    println!();
    println!("{}", dash.chart.caption);
}

fn format_price(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}")
    } else {
        "-".to_string()
    }
}
