//! Engine configuration from environment variables.
//!
//! - `SLIDE15_SIZE`: starting side length (default 4)
//! - `SLIDE15_SEED`: shuffle seed (default: derived from the clock)
//! - `SLIDE15_LOG_PATH`: file to write tracing output to (default: no logging)
//!
//! Values that fail to parse fall back to their defaults.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::DEFAULT_SIZE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub size: usize,
    pub seed: u32,
    pub log_path: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            seed: 1,
            log_path: None,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (tests pass a closure over a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let size = lookup("SLIDE15_SIZE")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_SIZE);

        let seed = lookup("SLIDE15_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = lookup("SLIDE15_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            size,
            seed,
            log_path,
        }
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
