//! File-only tracing setup; the TUI owns the terminal.
use std::path::PathBuf;

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs a subscriber writing to `<cache dir>/logs/client.log`.
///
/// The level comes from `RUST_LOG`, with `info` always enabled.
pub fn setup_logging() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // Leak the guard to keep the file writer alive for the whole process.
    std::mem::forget(guard);

    tracing::info!("Log file: {}/client.log", log_dir.display());
    Ok(())
}

fn log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "frontier")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("frontier").join("logs"))
}
