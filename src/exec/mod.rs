// src/exec/mod.rs

//! Parallel execution layer.
//!
//! - [`executor`] owns the worker pool: a producer feeding keys through a
//!   bounded queue, `min(threads, keys)` consumers, and the shared error map.
//! - [`guard`] is the per-invocation fault boundary that turns panics into
//!   [`TaskError::Panicked`].
//! - [`task`] defines the task shapes and the worker-id adapter.
//! - [`error_set`] is the aggregated error returned to the caller.
//! - [`spawn`] bridges the blocking executor into async code.

pub mod error_set;
pub mod executor;
pub mod guard;
pub mod spawn;
pub mod task;
pub mod task_error;

pub use error_set::ParallelTaskError;
pub use executor::{
    execute, execute_optional, execute_optional_with_worker, execute_with_worker,
};
pub use spawn::execute_async;
pub use task::{TaskResult, WorkerId};
pub use task_error::TaskError;
