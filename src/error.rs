//! Error types for the N-Queens solvers
//!
//! Invalid input is rejected before any search starts. The search itself
//! cannot fail; the only run-time failure is a parallel run in which some
//! branch did not complete, which is reported as an incomplete result rather
//! than a (possibly too low) solution count.

use thiserror::Error;

/// Errors produced while configuring or running a search
#[derive(Error, Debug)]
pub enum SolveError {
    /// The board needs at least one row
    #[error("invalid board size {size}: the board must have at least one row")]
    InvalidSize { size: usize },

    /// The board is too large for an exhaustive enumeration
    #[error("board size {size} is too large: at most {max} rows are supported")]
    SizeTooLarge { size: usize, max: usize },

    /// Some branches of a parallel run never finished
    #[error("incomplete result: branches {failed:?} did not finish ({reason})")]
    Incomplete { failed: Vec<usize>, reason: String },

    /// A worker thread could not be started
    #[error("failed to spawn worker thread: {0}")]
    WorkerSpawn(#[from] std::io::Error),
}
