// src/errors.rs

//! Crate-wide error aliases and helpers.
//!
//! Per-key task failures are not in here: they live in
//! [`crate::exec::TaskError`] and are aggregated by
//! [`crate::exec::ParallelTaskError`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FanoutError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Blocking run did not complete: {0}")]
    JoinError(#[from] tokio::task::JoinError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, FanoutError>;
