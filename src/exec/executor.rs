// src/exec/executor.rs

//! Bounded worker pool over a list of keys.

use std::collections::HashMap;
use std::hash::Hash;
use std::thread::{self, Scope};

use crossbeam_channel::{Receiver, bounded};
use parking_lot::Mutex;
use tracing::{debug, warn};

use super::error_set::ParallelTaskError;
use super::guard::run_guarded;
use super::task::{TaskResult, WorkerId, ignore_worker};
use super::task_error::TaskError;

type ErrorMap<K> = Mutex<HashMap<K, TaskError>>;

/// Run `task` once per key on at most `threads` workers.
///
/// Returns `Ok(())` when every key succeeded (or there was nothing to do),
/// otherwise one [`ParallelTaskError`] holding every failing key.
///
/// See [`execute_with_worker`] for the full contract.
pub fn execute<K, F>(keys: &[K], threads: usize, task: F) -> Result<(), ParallelTaskError<K>>
where
    K: Eq + Hash + Clone + Send + Sync,
    F: Fn(&K) -> TaskResult + Sync,
{
    execute_with_worker(keys, threads, ignore_worker::<K, F>(task))
}

/// Like [`execute`], but the task may be absent; `None` is a no-op.
pub fn execute_optional<K, F>(
    keys: &[K],
    threads: usize,
    task: Option<F>,
) -> Result<(), ParallelTaskError<K>>
where
    K: Eq + Hash + Clone + Send + Sync,
    F: Fn(&K) -> TaskResult + Sync,
{
    execute_optional_with_worker(keys, threads, task.map(ignore_worker::<K, F>))
}

/// Run `task` once per key, passing the id of the worker that runs it.
///
/// - Empty `keys` or `threads == 0` return `Ok(())` without calling `task`.
/// - The pool has `min(threads, keys.len())` workers; ids are
///   `0..that`.
/// - Keys are fed in input order through a bounded queue whose capacity is
///   the worker count. No ordering holds between keys once dequeued.
/// - Each invocation runs inside a fault boundary: a panic is recorded as
///   [`TaskError::Panicked`] for that key and the worker moves on.
/// - Returns after every key has been attempted. No cancellation.
///
/// # Panics
///
/// Panics if the OS refuses to start a thread, like [`std::thread::spawn`].
pub fn execute_with_worker<K, F>(
    keys: &[K],
    threads: usize,
    task: F,
) -> Result<(), ParallelTaskError<K>>
where
    K: Eq + Hash + Clone + Send + Sync,
    F: Fn(WorkerId, &K) -> TaskResult + Sync,
{
    execute_optional_with_worker(keys, threads, Some(task))
}

/// Worker-aware form of [`execute_optional`].
pub fn execute_optional_with_worker<K, F>(
    keys: &[K],
    threads: usize,
    task: Option<F>,
) -> Result<(), ParallelTaskError<K>>
where
    K: Eq + Hash + Clone + Send + Sync,
    F: Fn(WorkerId, &K) -> TaskResult + Sync,
{
    let Some(task) = task else {
        debug!(keys = keys.len(), "no task supplied; nothing to do");
        return Ok(());
    };
    if keys.is_empty() || threads == 0 {
        debug!(keys = keys.len(), threads, "empty key list or zero threads; nothing to do");
        return Ok(());
    }

    let workers = threads.min(keys.len());
    debug!(keys = keys.len(), requested = threads, workers, "starting parallel run");

    let errors: ErrorMap<K> = Mutex::new(HashMap::new());
    let (key_tx, key_rx) = bounded::<&K>(workers);

    thread::scope(|scope| {
        spawn_named(scope, "fanout-producer".to_string(), move || {
            for key in keys {
                // Only fails once every worker is gone.
                if key_tx.send(key).is_err() {
                    break;
                }
            }
            // Dropping the sender closes the queue.
        });

        for worker in 0..workers {
            let rx = key_rx.clone();
            let task = &task;
            let errors = &errors;
            spawn_named(scope, format!("fanout-worker-{worker}"), move || {
                worker_loop(worker, rx, task, errors)
            });
        }
        drop(key_rx);
    });

    let errors = errors.into_inner();
    if errors.is_empty() {
        debug!(keys = keys.len(), workers, "parallel run finished without failures");
        return Ok(());
    }

    debug!(
        keys = keys.len(),
        workers,
        failed = errors.len(),
        "parallel run finished with failures"
    );
    Err(ParallelTaskError::from_map(errors))
}

fn worker_loop<K, F>(worker: WorkerId, keys: Receiver<&K>, task: &F, errors: &ErrorMap<K>)
where
    K: Eq + Hash + Clone,
    F: Fn(WorkerId, &K) -> TaskResult,
{
    let mut handled = 0usize;

    for key in keys.iter() {
        handled += 1;
        let Err(err) = run_guarded(|| task(worker, key)) else {
            continue;
        };

        match &err {
            TaskError::Panicked { message, .. } => {
                warn!(worker, panic = %message, "task panicked; recorded as failure");
            }
            TaskError::Failed(cause) => {
                debug!(worker, error = %cause, "task failed");
            }
        }
        errors.lock().insert(key.clone(), err);
    }

    debug!(worker, handled, "worker drained queue");
}

/// Start a named scoped thread; joined when `scope` ends.
fn spawn_named<'scope, 'env, F>(scope: &'scope Scope<'scope, 'env>, name: String, f: F)
where
    F: FnOnce() + Send + 'scope,
{
    if let Err(err) = thread::Builder::new().name(name.clone()).spawn_scoped(scope, f) {
        panic!("failed to spawn thread {name}: {err}");
    }
}
