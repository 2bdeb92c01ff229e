//! Stock trend TUI: ticker form, price chart and raw data table.
//!
//! The terminal owns stdout, so logs go to a file.

use std::fs::{self, File};
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use stocktrend_core::view;
use stocktrend_core::{DashboardConfig, MemoTable, TrendService, YahooProvider};
use stocktrend_tui::{handle_key, ui, AppState};

#[derive(Parser)]
#[command(name = "stocktrend-tui", about = "Stock trend dashboard in the terminal")]
struct Args {
    /// Config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file (defaults to stocktrend.log in the user config directory)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_path = args.log_file.unwrap_or_else(default_log_path);
    init_logging(&log_path)?;

    let config = DashboardConfig::load_or_default(args.config.as_deref())?;
    let provider = YahooProvider::new(&config.provider)?;
    let service = TrendService::new(Arc::new(provider), Arc::new(MemoTable::new()));
    tracing::info!(provider = service.provider_name(), "starting dashboard");

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let today = chrono::Local::now().date_naive();
    let mut app = AppState::new(&config, today);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app, &service);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(memoized = service.memo().len(), "dashboard closed");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    service: &TrendService,
) -> Result<()> {
    loop {
        // 1. Render (shows the fetching overlay while a submit is queued)
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Run a queued interaction through the handler
        if let Some(request) = app.take_pending() {
            let model = view::handle(service, &request);
            app.apply(model);
            continue;
        }

        // 3. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                handle_key(app, key);
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

fn default_log_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stocktrend")
        .join("stocktrend.log")
}

fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file =
        File::create(path).with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
