// src/logging.rs

//! Logging setup for binaries embedding `fanout`, using `tracing` +
//! `tracing-subscriber`.
//!
//! The library itself only emits `tracing` events; nothing is printed unless
//! the host installs a subscriber. This module is a convenience for hosts
//! that don't have one yet.
//!
//! Priority for determining the log level:
//! 1. explicit `level` argument (if provided)
//! 2. `FANOUT_LOG` environment variable (e.g. "info", "debug")
//! 3. default to `info`
//!
//! Logs go to STDERR.

use std::str::FromStr;

use anyhow::anyhow;
use tracing_subscriber::fmt;

use crate::errors::{FanoutError, Result};

/// Environment variable consulted when no explicit level is given.
pub const LOG_ENV: &str = "FANOUT_LOG";

/// Log level accepted by [`init_logging`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!(
                "invalid log level: {other} (expected error, warn, info, debug or trace)"
            )),
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(lvl: LogLevel) -> Self {
        match lvl {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Resolve the effective level from the argument and `FANOUT_LOG`.
pub fn resolve_level(level: Option<LogLevel>) -> tracing::Level {
    level
        .or_else(|| {
            std::env::var(LOG_ENV)
                .ok()
                .and_then(|s| s.parse::<LogLevel>().ok())
        })
        .map(tracing::Level::from)
        .unwrap_or(tracing::Level::INFO)
}

/// Initialise the global logging subscriber.
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(level: Option<LogLevel>) -> Result<()> {
    fmt()
        .with_max_level(resolve_level(level))
        .with_target(true)
        .with_thread_names(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| FanoutError::Other(anyhow!("installing tracing subscriber: {e}")))
}
