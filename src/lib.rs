// src/lib.rs

//! Bounded-concurrency parallel map over keyed work items.
//!
//! [`execute`] runs a task once per key on `min(threads, keys)` worker
//! threads, contains panics at the single-task boundary, and returns either
//! `Ok(())` or one [`ParallelTaskError`] mapping every failing key to its
//! cause. [`execute_chunk`] does the same over fixed-size slices of a
//! collection, keyed by chunk index.
//!
//! ```
//! use fanout::execute;
//!
//! let keys = vec![1u32, 2, 3, 4];
//! let result = execute(&keys, 2, |&k| {
//!     anyhow::ensure!(k != 3, "three is not allowed");
//!     Ok(())
//! });
//!
//! let errors = result.unwrap_err();
//! assert_eq!(errors.len(), 1);
//! assert!(errors.contains_key(&3));
//! ```

pub mod chunk;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod pool;

pub use chunk::{chunk, execute_chunk, execute_chunk_with_worker};
pub use exec::{
    ParallelTaskError, TaskError, TaskResult, WorkerId, execute, execute_async,
    execute_optional, execute_optional_with_worker, execute_with_worker,
};
pub use pool::Pool;
