// src/exec/spawn.rs

//! Async entry point.
//!
//! The executor blocks the calling thread until every key is done, which
//! must not happen on a Tokio worker. [`execute_async`] moves the whole run
//! onto the blocking pool and awaits it.

use std::hash::Hash;

use tracing::debug;

use crate::errors::{FanoutError, Result};

use super::error_set::ParallelTaskError;
use super::executor::execute_with_worker;
use super::task::{TaskResult, WorkerId};

/// Run [`execute_with_worker`] on Tokio's blocking pool.
///
/// The outer `Result` fails only if the blocking task could not complete
/// (runtime shutting down); the inner one is the executor's own result.
pub async fn execute_async<K, F>(
    keys: Vec<K>,
    threads: usize,
    task: F,
) -> Result<std::result::Result<(), ParallelTaskError<K>>>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    F: Fn(WorkerId, &K) -> TaskResult + Send + Sync + 'static,
{
    debug!(keys = keys.len(), threads, "handing parallel run to blocking pool");

    tokio::task::spawn_blocking(move || execute_with_worker(&keys, threads, task))
        .await
        .map_err(FanoutError::from)
}
