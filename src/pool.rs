// src/pool.rs

//! Executor entry points bound to a validated configuration.

use std::hash::Hash;

use crate::chunk::{execute_chunk, execute_chunk_with_worker};
use crate::config::{ConfigFile, PoolConfig};
use crate::exec::{ParallelTaskError, TaskResult, WorkerId, execute, execute_with_worker};

/// Worker count and chunk size taken from a [`ConfigFile`].
///
/// Each call is independent; a `Pool` holds no threads between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pool {
    threads: usize,
    chunk_size: usize,
}

impl Pool {
    pub fn from_config(cfg: &ConfigFile) -> Self {
        let PoolConfig {
            threads,
            chunk_size,
        } = *cfg.pool();
        Self {
            threads,
            chunk_size,
        }
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn execute<K, F>(&self, keys: &[K], task: F) -> Result<(), ParallelTaskError<K>>
    where
        K: Eq + Hash + Clone + Send + Sync,
        F: Fn(&K) -> TaskResult + Sync,
    {
        execute(keys, self.threads, task)
    }

    pub fn execute_with_worker<K, F>(&self, keys: &[K], task: F) -> Result<(), ParallelTaskError<K>>
    where
        K: Eq + Hash + Clone + Send + Sync,
        F: Fn(WorkerId, &K) -> TaskResult + Sync,
    {
        execute_with_worker(keys, self.threads, task)
    }

    pub fn execute_chunk<T, F>(&self, collection: &[T], handler: F) -> Result<(), ParallelTaskError<usize>>
    where
        T: Sync,
        F: Fn(&[T]) -> TaskResult + Sync,
    {
        execute_chunk(collection, self.chunk_size, self.threads, handler)
    }

    pub fn execute_chunk_with_worker<T, F>(
        &self,
        collection: &[T],
        handler: F,
    ) -> Result<(), ParallelTaskError<usize>>
    where
        T: Sync,
        F: Fn(WorkerId, &[T]) -> TaskResult + Sync,
    {
        execute_chunk_with_worker(collection, self.chunk_size, self.threads, handler)
    }
}
