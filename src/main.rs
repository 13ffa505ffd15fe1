use std::fs;
use std::io;
use std::sync::Arc;

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use podex::adapters::{ReqwestHttpClient, SqliteUserStore};
use podex::api::CatalogClient;
use podex::app::App;
use podex::config::Config;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--version") {
        println!("podex {VERSION}");
        return Ok(());
    }

    color_eyre::install()?;

    let config = Config::from_env();
    fs::create_dir_all(config.data_dir())?;
    init_tracing(&config)?;
    tracing::info!(version = VERSION, api = %config.api_base_url, "starting");

    // Construct the collaborators once and hand them down by reference.
    let store = Arc::new(SqliteUserStore::open(&config.db_path)?);
    let api = Arc::new(CatalogClient::with_base_url(
        ReqwestHttpClient::new(),
        config.api_base_url.clone(),
    ));
    let app = App::new(api, store, config.page_size);

    setup_panic_hook();
    let mut terminal = setup_terminal()?;
    let result = app.run(&mut terminal).await;
    restore_terminal()?;
    result
}

/// Log to a file inside the data directory so the TUI stays clean.
/// `PODEX_LOG` takes the usual env-filter syntax.
fn init_tracing(config: &Config) -> Result<()> {
    let log_file = fs::File::create(config.data_dir().join("podex.log"))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("PODEX_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;
    Ok(())
}

/// Make sure a panic does not leave the terminal in raw mode.
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}
