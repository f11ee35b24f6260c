use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Standard error, for non-interactive commands
    Stderr,
    /// Append to a file; the TUI owns the terminal so it can only log here
    File(&'a Path),
    /// No subscriber at all
    Disabled,
}

/// `RUST_LOG` when set, WARN otherwise; `RUST_LOG=debug` shows every controller operation
fn env_filter() -> EnvFilter {
    EnvFilter::builder().with_default_directive(LevelFilter::WARN.into()).from_env_lossy()
}

/// Install the global tracing subscriber
pub fn init_logging(target: LogTarget<'_>) -> Result<()> {
    let result = match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Disabled => return Ok(()),
    };

    result.map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}
