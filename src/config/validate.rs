// src/config/validate.rs

use crate::config::model::{ConfigFile, PoolConfig, RawConfigFile};
use crate::errors::{FanoutError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = FanoutError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_pool(&raw.pool)?;
        Ok(ConfigFile::new_unchecked(raw.pool))
    }
}

impl TryFrom<PoolConfig> for ConfigFile {
    type Error = FanoutError;

    fn try_from(pool: PoolConfig) -> std::result::Result<Self, Self::Error> {
        ConfigFile::try_from(RawConfigFile { pool })
    }
}

fn validate_pool(pool: &PoolConfig) -> Result<()> {
    // The executor treats zero as "do nothing"; in a config file that is
    // always a mistake.
    if pool.threads == 0 {
        return Err(FanoutError::ConfigError(
            "[pool].threads must be >= 1 (got 0)".to_string(),
        ));
    }

    if pool.chunk_size == 0 {
        return Err(FanoutError::ConfigError(
            "[pool].chunk_size must be >= 1 (got 0)".to_string(),
        ));
    }

    Ok(())
}
