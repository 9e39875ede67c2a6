// src/logging.rs

//! `tracing` subscriber for the `tasksort` binary.
//!
//! The level comes from `--log-level`, then `TASKSORT_LOG`, then `info`.
//! Everything is written to stderr; stdout carries `--dry-run` and
//! `--graph` output only.

use anyhow::{anyhow, Result};
use tracing_subscriber::fmt;

use crate::cli::LogLevel;

/// Install the global fmt subscriber. Fails if one is already installed.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let level = match cli_level {
        Some(lvl) => level_from_log_level(lvl),
        None => std::env::var("TASKSORT_LOG")
            .ok()
            .and_then(|s| parse_level_str(&s))
            .unwrap_or(tracing::Level::INFO),
    };

    fmt()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logging: {e}"))
}

fn level_from_log_level(lvl: LogLevel) -> tracing::Level {
    match lvl {
        LogLevel::Error => tracing::Level::ERROR,
        LogLevel::Warn => tracing::Level::WARN,
        LogLevel::Info => tracing::Level::INFO,
        LogLevel::Debug => tracing::Level::DEBUG,
        LogLevel::Trace => tracing::Level::TRACE,
    }
}

fn parse_level_str(s: &str) -> Option<tracing::Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(tracing::Level::ERROR),
        "warn" | "warning" => Some(tracing::Level::WARN),
        "info" => Some(tracing::Level::INFO),
        "debug" => Some(tracing::Level::DEBUG),
        "trace" => Some(tracing::Level::TRACE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_level_strings() {
        assert_eq!(parse_level_str(" Debug "), Some(tracing::Level::DEBUG));
        assert_eq!(parse_level_str("warning"), Some(tracing::Level::WARN));
        assert_eq!(parse_level_str("loud"), None);
    }
}
