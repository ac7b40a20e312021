//! Solvers that enumerate every N-Queens placement
//!
//! Two solvers share the same backtracking routine and board:
//! - Sequential: one depth-first search over rows 0..n on the current thread
//! - Parallel: one branch per first-row column, explored on a worker pool
//!   and merged once every branch has finished

pub mod backtrack;
pub mod config;
pub mod parallel;
pub mod result;
pub mod sequential;

pub use config::{Algorithm, SearchConfig};
pub use parallel::{ParallelConfig, ParallelSolver};
pub use result::{SearchResult, SearchStatistics};
pub use sequential::SequentialSolver;

use crate::error::SolveError;

/// Trait for solvers that enumerate N-Queens solutions
pub trait Solver {
    /// Enumerate every solution on the board described by `config`
    ///
    /// # Arguments
    /// * `config` - Board size and whether to keep the solutions themselves
    ///
    /// # Returns
    /// The solution count (and list, if requested) once the whole search
    /// space has been explored, or an error if the size is invalid or the
    /// search could not be completed
    fn solve(&mut self, config: &SearchConfig) -> Result<SearchResult, SolveError>;

    /// Get statistics from the most recent search
    fn statistics(&self) -> SearchStatistics;

    /// Reset the solver state for a new search
    fn reset(&mut self);
}

/// Build the solver for `algorithm`
pub fn solver_for(algorithm: Algorithm, parallel: ParallelConfig) -> Box<dyn Solver> {
    match algorithm {
        Algorithm::Sequential => Box::new(SequentialSolver::new()),
        Algorithm::Parallel => Box::new(ParallelSolver::new(parallel)),
    }
}
