// src/telemetry.rs
use std::{fs::OpenOptions, path::Path, sync::Mutex};

use anyhow::{Context, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

pub const DEFAULT_FILTER: &str = "waterwise_chat=info";

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Log to stderr. Used when the terminal is not taken over by the full-screen UI.
pub fn init_stderr() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))
}

/// Log to `path`, appending. The full-screen UI owns stdout and stderr.
pub fn init_file(path: &Path) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    fmt()
        .with_env_filter(filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow!(e))
}
