use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use guardsearch::app::App;
use guardsearch::config::{self, Config};
use guardsearch::search::HttpSearchBackend;

/// How long to wait for input before running housekeeping
const TICK_RATE: Duration = Duration::from_millis(50);

/// Search guard records as you type
#[derive(Parser, Debug)]
#[command(name = "guardsearch", version, about)]
struct Args {
    /// Config file to use instead of ~/.config/guardsearch/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Base URL of the dashboard API
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Bearer token for the search endpoint
    #[arg(long, env = "GUARDSEARCH_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Wait this long after the last keystroke before searching (0 searches on every keystroke)
    #[arg(long, value_name = "MS")]
    debounce_ms: Option<u64>,

    /// Write logs here (RUST_LOG controls the level)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    // Fail before touching the terminal
    let config = resolve_config(&args)?;
    let backend = HttpSearchBackend::from_config(&config.api)?;

    let mut app = App::new(&config);
    app.start_search_worker(backend);
    log::info!("Searching {}{}", config.api.base_url, config.api.search_path);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;

    let result = run(terminal, &mut app);

    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

/// Config file first, then command line overrides
fn resolve_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::load_config()?,
    };

    if let Some(url) = &args.api_url {
        config.api.base_url = url.clone();
    }
    if let Some(token) = &args.token {
        config.api.token = Some(token.clone());
    }
    if let Some(debounce_ms) = args.debounce_ms {
        config.search.debounce_ms = debounce_ms;
    }

    config::validate_api_url(&config.api.base_url)?;
    Ok(config)
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(TICK_RATE)? {
            app.handle_event(event::read()?);
        }
        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
