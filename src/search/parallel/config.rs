//! Configuration for parallel search execution.

use std::time::Duration;

/// Configuration for parallel search execution.
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Upper bound on worker threads; never more than one per branch is used.
    pub num_workers: usize,
    /// Overall timeout; branches still running when it expires are aborted.
    pub timeout: Option<Duration>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_workers: num_cpus::get(),
            timeout: None,
        }
    }
}

impl ParallelConfig {
    /// Create a new parallel config with the specified number of workers.
    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers.max(1);
        self
    }

    /// Set the worker count from an Option, keeping the default for `None`.
    pub fn with_workers_option(self, num_workers: Option<usize>) -> Self {
        match num_workers {
            Some(n) => self.with_workers(n),
            None => self,
        }
    }

    /// Set the overall timeout for parallel search.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the overall timeout from an Option, keeping the default for `None`.
    pub fn with_timeout_option(self, timeout: Option<Duration>) -> Self {
        match timeout {
            Some(t) => self.with_timeout(t),
            None => self,
        }
    }

    /// Number of threads to start for `branches` units of work.
    pub fn workers_for(&self, branches: usize) -> usize {
        self.num_workers.min(branches).max(1)
    }
}
