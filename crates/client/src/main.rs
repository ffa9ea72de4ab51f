//! Frontier game client binary.
//!
//! Composition root: loads configuration, installs logging, assembles the
//! [`GameSession`] and hands it to the terminal frontend.
mod app;
mod input;
mod logging;
mod terminal;
mod ui;

use anyhow::Result;
use frontier_runtime::{GameSession, RuntimeConfig};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    dotenvy::dotenv().ok();

    let config = RuntimeConfig::from_env();
    logging::setup_logging()?;

    tracing::info!("Starting Frontier client");
    tracing::info!("Save file: {}", config.save_path.display());

    let session = GameSession::start(&config)?;

    let mut tui = terminal::init()?;
    let _guard = terminal::TerminalGuard;
    app::App::new(session).run(&mut tui)?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
