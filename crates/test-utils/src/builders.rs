#![allow(dead_code)]

use fanout::config::{ConfigFile, PoolConfig};

/// Builder for `ConfigFile` to simplify test setup.
pub struct PoolConfigBuilder {
    pool: PoolConfig,
}

impl PoolConfigBuilder {
    pub fn new() -> Self {
        Self {
            pool: PoolConfig::default(),
        }
    }

    pub fn threads(mut self, threads: usize) -> Self {
        self.pool.threads = threads;
        self
    }

    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.pool.chunk_size = chunk_size;
        self
    }

    pub fn raw(self) -> PoolConfig {
        self.pool
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.pool).expect("Failed to build valid config from builder")
    }
}

impl Default for PoolConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
