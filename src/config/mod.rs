// src/config/mod.rs

//! Pool configuration.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate the raw values before they reach a [`crate::Pool`]
//!   (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, parse_and_validate};
pub use model::{ConfigFile, PoolConfig, RawConfigFile, DEFAULT_CHUNK_SIZE};
