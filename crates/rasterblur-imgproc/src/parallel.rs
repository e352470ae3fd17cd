//! Parallelization utilities for the filter passes.

/// Pixel count at which `Auto` switches to the rayon pool.
const AUTO_PARALLEL_THRESHOLD: usize = 100_000;

/// Controls how filter passes are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, debugging, or when the overhead of
    /// parallelization outweighs the benefits.
    Serial,

    /// Process rows on the global rayon thread pool.
    Parallel,

    /// Pick parallel execution for images of at least 100K pixels.
    #[default]
    Auto,
}

impl ExecutionStrategy {
    /// Whether this strategy runs on the thread pool for the given pixel count.
    pub fn is_parallel(&self, num_pixels: usize) -> bool {
        match self {
            Self::Serial => false,
            Self::Parallel => true,
            Self::Auto => num_pixels >= AUTO_PARALLEL_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_dispatch() {
        assert!(!ExecutionStrategy::Serial.is_parallel(usize::MAX));
        assert!(ExecutionStrategy::Parallel.is_parallel(0));
        assert!(!ExecutionStrategy::Auto.is_parallel(99_999));
        assert!(ExecutionStrategy::Auto.is_parallel(100_000));
    }
}
