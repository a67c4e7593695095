// src/exec/guard.rs

//! Per-invocation fault boundary.
//!
//! Every task call goes through [`run_guarded`], which turns an unwinding
//! panic into a [`TaskError::Panicked`] carrying the panic message and the
//! stack captured at the panic site. The worker thread that hosted the call
//! keeps running.
//!
//! The stack is captured by a process-wide panic hook, installed once. The
//! hook only acts while a guarded call is active on the current thread; any
//! other panic is forwarded to whatever hook was installed before us.
//!
//! Limitations:
//! - A panic the task catches itself (its own `catch_unwind`) still happens
//!   inside the guard, so it never reaches the previous hook either.
//! - A panic raised with `resume_unwind` skips the hook; its stack is the
//!   one at the guard, not at the origin.
//! - Built with `panic = "abort"` nothing can be contained.

use std::any::Any;
use std::backtrace::Backtrace;
use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

use super::task::TaskResult;
use super::task_error::TaskError;

static HOOK: Once = Once::new();

thread_local! {
    /// Nesting depth of guarded calls on this thread.
    static GUARD_DEPTH: Cell<usize> = const { Cell::new(0) };
    /// Stack captured by the hook for the most recent guarded panic.
    static CAPTURED_STACK: RefCell<Option<String>> = const { RefCell::new(None) };
}

fn install_hook() {
    HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if GUARD_DEPTH.with(Cell::get) > 0 {
                let location = info
                    .location()
                    .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
                    .unwrap_or_else(|| "<unknown>".to_string());
                let stack = format!("at {location}\n{}", Backtrace::force_capture());
                CAPTURED_STACK.with(|slot| *slot.borrow_mut() = Some(stack));
            } else {
                previous(info);
            }
        }));
    });
}

/// Decrements the guard depth even if the guarded call unwinds.
struct DepthGuard;

impl DepthGuard {
    fn enter() -> Self {
        GUARD_DEPTH.with(|d| d.set(d.get() + 1));
        DepthGuard
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        GUARD_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}

/// Run `f` inside a fault boundary.
///
/// - `Ok(Ok(()))` / `Ok(Err(e))` from the body map to `Ok(())` /
///   `Err(TaskError::Failed(e))`.
/// - A panic maps to `Err(TaskError::Panicked { .. })`.
pub fn run_guarded<F>(f: F) -> Result<(), TaskError>
where
    F: FnOnce() -> TaskResult,
{
    install_hook();
    // Drop whatever a previous call on this thread left behind (e.g. a panic
    // the task caught itself).
    CAPTURED_STACK.with(|slot| slot.borrow_mut().take());

    let outcome = {
        let _depth = DepthGuard::enter();
        panic::catch_unwind(AssertUnwindSafe(f))
    };

    match outcome {
        Ok(Ok(())) => Ok(()),
        Ok(Err(err)) => Err(TaskError::Failed(err)),
        Err(payload) => {
            let stack = CAPTURED_STACK
                .with(|slot| slot.borrow_mut().take())
                .unwrap_or_else(|| Backtrace::force_capture().to_string());
            Err(TaskError::Panicked {
                message: panic_message(payload.as_ref()),
                stack,
            })
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
