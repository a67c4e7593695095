use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use anyhow::bail;
use fanout::{TaskResult, WorkerId};
use parking_lot::Mutex;

/// Records every `(worker, key)` invocation a task receives.
///
/// Share it by reference with the task closure; the executor's scoped
/// threads make `Arc` unnecessary.
pub struct CallRecorder<K> {
    calls: Mutex<Vec<(WorkerId, K)>>,
}

impl<K: Clone + Eq + Hash + Ord> CallRecorder<K> {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn record(&self, worker: WorkerId, key: &K) {
        self.calls.lock().push((worker, key.clone()));
    }

    /// Record the call, then fail if `key` is in `failing`.
    pub fn record_and_fail_on(&self, worker: WorkerId, key: &K, failing: &HashSet<K>) -> TaskResult {
        self.record(worker, key);
        if failing.contains(key) {
            bail!("configured failure");
        }
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Keys in the order the task received them.
    pub fn keys_in_call_order(&self) -> Vec<K> {
        self.calls.lock().iter().map(|(_, k)| k.clone()).collect()
    }

    /// Keys seen, sorted, duplicates kept.
    pub fn keys_sorted(&self) -> Vec<K> {
        let mut keys: Vec<K> = self.calls.lock().iter().map(|(_, k)| k.clone()).collect();
        keys.sort();
        keys
    }

    pub fn workers_seen(&self) -> HashSet<WorkerId> {
        self.calls.lock().iter().map(|(w, _)| *w).collect()
    }

    /// How many times each key was handed to the task.
    pub fn calls_per_key(&self) -> HashMap<K, usize> {
        let mut counts = HashMap::new();
        for (_, key) in self.calls.lock().iter() {
            *counts.entry(key.clone()).or_insert(0) += 1;
        }
        counts
    }
}

impl<K: Clone + Eq + Hash + Ord> Default for CallRecorder<K> {
    fn default() -> Self {
        Self::new()
    }
}
