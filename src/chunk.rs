// src/chunk.rs

//! Chunk-level parallelism.
//!
//! A collection is cut into contiguous, order-preserving slices of at most
//! `size` elements; chunk `i` covers `[i * size, min((i + 1) * size, len))`.
//! The executor then runs over the chunk indices, so failures are keyed by
//! chunk index and every executor rule (no-op fast path, worker clamping,
//! panic containment) carries over unchanged.

use tracing::debug;

use crate::exec::{ParallelTaskError, TaskResult, WorkerId, execute_with_worker};

/// Split `collection` into borrowed chunks of at most `size` elements.
///
/// Returns no chunks when `size == 0`. Otherwise there are exactly
/// `ceil(len / size)` chunks and only the last may be shorter than `size`.
pub fn chunk<T>(collection: &[T], size: usize) -> Vec<&[T]> {
    if size == 0 {
        return Vec::new();
    }
    collection.chunks(size).collect()
}

/// Run `handler` once per chunk on at most `threads` workers.
///
/// Errors are keyed by chunk index.
pub fn execute_chunk<T, F>(
    collection: &[T],
    size: usize,
    threads: usize,
    handler: F,
) -> Result<(), ParallelTaskError<usize>>
where
    T: Sync,
    F: Fn(&[T]) -> TaskResult + Sync,
{
    execute_chunk_with_worker(collection, size, threads, move |_worker, piece| handler(piece))
}

/// Worker-aware form of [`execute_chunk`].
pub fn execute_chunk_with_worker<T, F>(
    collection: &[T],
    size: usize,
    threads: usize,
    handler: F,
) -> Result<(), ParallelTaskError<usize>>
where
    T: Sync,
    F: Fn(WorkerId, &[T]) -> TaskResult + Sync,
{
    let chunks = chunk(collection, size);
    let indices: Vec<usize> = (0..chunks.len()).collect();

    debug!(
        len = collection.len(),
        size,
        chunks = chunks.len(),
        threads,
        "running chunked parallel job"
    );

    execute_with_worker(&indices, threads, |worker, &index| {
        handler(worker, chunks[index])
    })
}
