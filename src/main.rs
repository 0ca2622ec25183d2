mod app;
mod cache;
mod config;
mod error;
mod events;
mod intent;
mod nlp;
mod recommend;
mod spotify;
mod ui;
#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

use crate::{
    app::App,
    cache::Cache,
    config::Config,
    intent::Interpreter,
    recommend::Recommender,
    spotify::{build_spotify_client, search::SpotifySearch},
};

const LOG_PATH: &str = "/tmp/melobot.log";

#[tokio::main]
async fn main() -> Result<()> {
    // ── Logging setup ────────────────────────────────────────────────────────
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("melobot=info"));
    // Write logs to file so they don't corrupt the TUI
    if let Ok(file) = std::fs::File::create(LOG_PATH) {
        fmt()
            .with_env_filter(filter)
            .with_writer(std::sync::Mutex::new(file))
            .init();
    }

    // ── Config + Spotify, before the terminal is taken over ──────────────────
    let config = Config::load()?;
    let cache = Cache::connect(&config.redis_url).await;
    let spotify = build_spotify_client(&config, &cache)
        .await
        .context("Could not authenticate with Spotify")?;

    let recommender = Recommender::new(
        Interpreter::default(),
        std::sync::Arc::new(SpotifySearch::new(spotify)),
        config.search_timeout,
        config.result_limit,
    );

    // ── Terminal setup ────────────────────────────────────────────────────────
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // ── Panic hook to restore terminal on crash ──────────────────────────────
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        disable_raw_mode().ok();
        execute!(io::stdout(), LeaveAlternateScreen).ok();
        original_hook(panic_info);
    }));

    // ── Run the app ──────────────────────────────────────────────────────────
    let result = {
        let mut app = App::new(recommender);
        app.run(&mut terminal).await
    };

    // ── Restore terminal ─────────────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        error!("App error: {e:?}");
        eprintln!("\n\x1b[31mmelobot crashed:\x1b[0m {e}");
        eprintln!("Check {LOG_PATH} for details");
    }

    Ok(())
}
