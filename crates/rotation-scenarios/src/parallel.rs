//! Conditional parallel iteration.
//!
//! Uses rayon when the `parallel` feature is enabled and the collection is
//! large enough; otherwise iterates sequentially. Output order always
//! matches input order.

use crate::config::EvaluationConfig;

/// Maps a function over items, conditionally using parallel iteration.
///
/// Uses parallel iteration when:
/// - The `parallel` feature is enabled
/// - `config.parallel` is true
/// - The collection size reaches `config.parallel_threshold`
#[allow(unused_variables)]
pub fn maybe_parallel_map<T, U, F>(items: &[T], config: &EvaluationConfig, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(items.len()) {
            return items.par_iter().map(f).collect();
        }
    }

    items.iter().map(f).collect()
}

/// Maps a fallible function over items, stopping at the first error.
///
/// Sequential evaluation reports the earliest failing item. Parallel
/// evaluation reports some failing item.
#[allow(unused_variables)]
pub fn maybe_parallel_try_map<T, U, E, F>(
    items: &[T],
    config: &EvaluationConfig,
    f: F,
) -> Result<Vec<U>, E>
where
    T: Sync,
    U: Send,
    E: Send,
    F: Fn(&T) -> Result<U, E> + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(items.len()) {
            return items.par_iter().map(f).collect();
        }
    }

    items.iter().map(f).collect()
}
