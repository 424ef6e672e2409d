mod action;
mod app;
mod backend;
mod chart;
mod command;
mod config;
mod controller;
mod error;
mod headless;
mod ui;
mod ui_state;
mod view;

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use clap::Parser;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use action::Action;
use app::App;
use backend::{HttpSentimentApi, InputMode};
use command::CommandParser;
use config::Config;
use error::{Error, Result};
use ui::{draw, results_scroll_limit};
use ui_state::Screen;

#[derive(Parser)]
#[command(name = "xsentiment", version, about = "Analyze the sentiment of a tweet")]
struct Cli {
    /// Config file (defaults to <config dir>/xsentiment/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sentiment API base address
    #[arg(long)]
    api_url: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Write interactive-mode logs here
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Analyze this tweet URL once and print the result
    #[arg(long, conflicts_with = "text")]
    url: Option<String>,

    /// Analyze this text once and print the result
    #[arg(long)]
    text: Option<String>,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_env();
    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }
    if let Some(ms) = cli.timeout_ms {
        config.timeout_ms = ms;
    }
    if let Some(path) = cli.log_file {
        config.log_file = Some(path);
    }
    config.validate()?;

    let api = Arc::new(HttpSentimentApi::new(&config.api_base_url, config.timeout())?);

    let one_shot = match (cli.url, cli.text) {
        (Some(url), _) => Some((InputMode::Url, url)),
        (None, Some(text)) => Some((InputMode::Text, text)),
        (None, None) => None,
    };
    if let Some((mode, value)) = one_shot {
        init_logging(&config, false)?;
        tracing::debug!(api = api.base_url(), ?mode, "headless analysis");
        return headless::run(api.as_ref(), mode, &value, &mut io::stdout(), &mut io::stderr()).await;
    }

    init_logging(&config, true)?;
    tracing::info!(api = api.base_url(), "starting interactive session");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(api, tokio::runtime::Handle::current(), &config);

    let result = run_app(&mut terminal, &mut app, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableBracketedPaste)?;
    terminal.show_cursor()?;

    result
}

fn init_logging(config: &Config, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| Error::Logging(e.to_string()))?;

    if !interactive {
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init()
            .map_err(|e| Error::Logging(e.to_string()));
    }

    // The terminal belongs to the UI, so interactive logs go to a file or nowhere
    let Some(path) = config.log_path() else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    config: &Config,
) -> Result<()> {
    let tick_rate = config.tick_rate();

    loop {
        app.tick();
        app.poll_completions();

        app.ui.results_scroll_limit = results_scroll_limit(app, terminal.size()?.width);
        terminal.draw(|frame| draw(frame, app))?;

        if !event::poll(tick_rate)? {
            continue;
        }

        let action = match event::read()? {
            Event::Key(key) => CommandParser::parse_key(key, app.key_context()),
            // Bracketed paste only lands in the form
            Event::Paste(text) if app.ui.screen == Screen::Analyze => Some(Action::Paste(text)),
            _ => None,
        };

        if let Some(action) = action {
            if !app.apply(action) {
                tracing::info!("quit requested");
                return Ok(());
            }
        }
    }
}
