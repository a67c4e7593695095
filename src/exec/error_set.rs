// src/exec/error_set.rs

//! Aggregated per-key failures of one executor call.

use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::hash::Hash;

use super::task_error::TaskError;

/// Every key that failed during one executor call, mapped to its cause.
///
/// Only ever returned when at least one key failed. If the same key was
/// submitted twice and both invocations failed, the later failure replaces
/// the earlier one.
///
/// `Display` renders `key: message;` for each entry, in map iteration order
/// (unordered).
#[derive(Debug)]
pub struct ParallelTaskError<K> {
    errors: HashMap<K, TaskError>,
}

impl<K: Eq + Hash> ParallelTaskError<K> {
    pub(crate) fn from_map(errors: HashMap<K, TaskError>) -> Self {
        Self { errors }
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, key: &K) -> Option<&TaskError> {
        self.errors.get(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.errors.contains_key(key)
    }

    pub fn keys(&self) -> hash_map::Keys<'_, K, TaskError> {
        self.errors.keys()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, K, TaskError> {
        self.errors.iter()
    }

    /// Number of failures that were contained panics.
    pub fn panic_count(&self) -> usize {
        self.errors.values().filter(|e| e.is_panic()).count()
    }

    pub fn into_inner(self) -> HashMap<K, TaskError> {
        self.errors
    }
}

impl<K: fmt::Display> fmt::Display for ParallelTaskError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, err) in &self.errors {
            write!(f, "{key}: {err};")?;
        }
        Ok(())
    }
}

impl<K: fmt::Debug + fmt::Display> std::error::Error for ParallelTaskError<K> {}

impl<K> IntoIterator for ParallelTaskError<K> {
    type Item = (K, TaskError);
    type IntoIter = hash_map::IntoIter<K, TaskError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a, K> IntoIterator for &'a ParallelTaskError<K> {
    type Item = (&'a K, &'a TaskError);
    type IntoIter = hash_map::Iter<'a, K, TaskError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
