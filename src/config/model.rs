// src/config/model.rs

use serde::Deserialize;

/// Chunk size used when `[pool].chunk_size` is not set.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Configuration exactly as read from TOML, before validation.
///
/// ```toml
/// [pool]
/// threads = 8
/// chunk_size = 256
/// ```
///
/// The section and both fields are optional.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    #[serde(default)]
    pub pool: PoolConfig,
}

/// `[pool]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PoolConfig {
    /// Requested worker count. Defaults to the number of logical CPUs.
    #[serde(default = "default_threads")]
    pub threads: usize,

    /// Elements per chunk for chunked runs.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

fn default_threads() -> usize {
    num_cpus::get()
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            threads: default_threads(),
            chunk_size: default_chunk_size(),
        }
    }
}

/// Validated configuration.
///
/// Only obtainable through `TryFrom<RawConfigFile>` (see `validate.rs`), so
/// holding one means `threads >= 1` and `chunk_size >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigFile {
    pool: PoolConfig,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(pool: PoolConfig) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PoolConfig {
        &self.pool
    }
}
