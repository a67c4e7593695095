// src/exec/task.rs

//! Task shapes accepted by the executor.

/// Outcome of a single task invocation.
///
/// Task bodies only report failure; any output is the caller's business
/// (written through whatever the closure captures).
pub type TaskResult = anyhow::Result<()>;

/// Identity of a worker within one executor call, in `0..effective_workers`.
///
/// Stable for the lifetime of the call, so a handler can use it to index
/// per-worker scratch state. It says nothing about which keys a worker gets.
pub type WorkerId = usize;

/// Adapt a key-only task to the worker-aware shape by discarding the id.
pub(crate) fn ignore_worker<K, F>(task: F) -> impl Fn(WorkerId, &K) -> TaskResult + Sync
where
    F: Fn(&K) -> TaskResult + Sync,
{
    move |_worker, key| task(key)
}
