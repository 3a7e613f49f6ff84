//! Tracing subscriber setup.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "PROMPTBOX_LOG";

/// Where log lines go.
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    /// Browse mode without a log file: stderr would draw over the TUI.
    Discard,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(target: LogTarget<'_>) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter());

    let _ = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Discard => builder.with_writer(std::io::sink).try_init(),
    };

    Ok(())
}
