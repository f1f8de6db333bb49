//! Order-preserving parallel map on Bevy's compute task pool.

use bevy::tasks::{ComputeTaskPool, TaskPool};

/// Applies `f` to every item across the compute pool, results in input order.
///
/// The pool is the process-wide one; it is created on first use when no Bevy
/// `App` has set it up yet. Items are split into one contiguous chunk per
/// worker thread.
pub fn par_map<T, R, F>(items: &[T], f: F) -> Vec<R>
where
    T: Sync,
    R: Send + 'static,
    F: Fn(&T) -> R + Sync,
{
    if items.is_empty() {
        return Vec::new();
    }
    let pool = ComputeTaskPool::get_or_init(TaskPool::default);
    let chunk_size = items.len().div_ceil(pool.thread_num().max(1)).max(1);
    let f = &f;
    let chunks: Vec<Vec<R>> = pool.scope(|s| {
        for chunk in items.chunks(chunk_size) {
            s.spawn(async move { chunk.iter().map(f).collect::<Vec<R>>() });
        }
    });
    chunks.into_iter().flatten().collect()
}
