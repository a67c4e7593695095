#![allow(dead_code)]

use std::collections::HashSet;
use std::hash::Hash;

use fanout::ParallelTaskError;

pub use fanout_test_utils::init_tracing;
pub use fanout_test_utils::recorder::CallRecorder;

/// Failing keys of a run, as a set (empty when the run succeeded).
pub fn failed_keys<K: Clone + Eq + Hash>(result: Result<(), ParallelTaskError<K>>) -> HashSet<K> {
    match result {
        Ok(()) => HashSet::new(),
        Err(errors) => errors.keys().cloned().collect(),
    }
}
