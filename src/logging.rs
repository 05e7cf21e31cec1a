//! Tracing setup for the terminal binary.
//!
//! The terminal is owned by the renderer, so logs only go to a file. Without a
//! log path no subscriber is installed and tracing macros are no-ops.

use std::fs::File;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Install a file-backed subscriber. Filter comes from `RUST_LOG`, default `info`.
///
/// Returns false when no path was given. Fails if a global subscriber is
/// already installed.
pub fn init(log_path: Option<&str>) -> Result<bool> {
    let Some(path) = log_path else {
        return Ok(false);
    };

    let file = File::create(path).with_context(|| format!("creating log file {path}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!(e))
        .context("installing tracing subscriber")?;
    Ok(true)
}
