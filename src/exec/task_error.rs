// src/exec/task_error.rs

use thiserror::Error;

/// Why a single key failed.
#[derive(Error, Debug)]
pub enum TaskError {
    /// The task returned an error.
    #[error(transparent)]
    Failed(#[from] anyhow::Error),

    /// The task panicked; the panic was contained at the task boundary.
    #[error("panic: {message}\nstack: {stack}")]
    Panicked { message: String, stack: String },
}

impl TaskError {
    pub fn is_panic(&self) -> bool {
        matches!(self, TaskError::Panicked { .. })
    }

    /// Panic message, if this failure was a contained panic.
    pub fn panic_message(&self) -> Option<&str> {
        match self {
            TaskError::Panicked { message, .. } => Some(message),
            TaskError::Failed(_) => None,
        }
    }
}
