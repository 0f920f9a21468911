//! Parallelism configuration for per-filing expansion.

use serde::{Deserialize, Serialize};

/// Default value for parallel processing enabled
fn default_enabled() -> bool {
    true
}

/// Smallest batch worth fanning out across threads
fn default_min_batch() -> usize {
    64
}

/// Configuration for parallel filing expansion.
///
/// Each filing expands independently, so the expansion stage can fan out
/// across rayon workers and collect back in input order. Results are
/// identical to sequential expansion.
///
/// # Example
///
/// ```rust
/// use insidermap::config::ParallelConfig;
///
/// let config = ParallelConfig {
///     enabled: true,
///     max_concurrency: Some(4),
///     min_batch: 16,
/// };
/// assert!(config.should_parallelize(100));
/// assert!(!config.should_parallelize(8));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParallelConfig {
    /// Enable parallel processing (default: true)
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Maximum worker threads (default: the global rayon pool)
    ///
    /// When set, a dedicated pool of this size is built for the run.
    #[serde(default)]
    pub max_concurrency: Option<usize>,

    /// Batches smaller than this are expanded sequentially (default: 64)
    #[serde(default = "default_min_batch")]
    pub min_batch: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            max_concurrency: None,
            min_batch: default_min_batch(),
        }
    }
}

impl ParallelConfig {
    /// Create a config with parallel processing disabled.
    pub fn sequential() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Cap the worker count. Zero means "use the global pool".
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.max_concurrency = (jobs > 0).then_some(jobs);
        self
    }

    pub fn should_parallelize(&self, batch_len: usize) -> bool {
        self.enabled && batch_len >= self.min_batch.max(2)
    }
}
