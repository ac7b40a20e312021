//! Configuration types for the N-Queens solvers

use crate::error::SolveError;

/// Largest board accepted for exhaustive enumeration
pub const MAX_BOARD_SIZE: usize = 20;

/// Board size used when none is given
pub const DEFAULT_BOARD_SIZE: usize = 12;

/// Solver selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Single-threaded depth-first backtracking
    #[default]
    Sequential,
    /// One branch per first-row column, run on a worker pool
    Parallel,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Sequential => write!(f, "sequential"),
            Algorithm::Parallel => write!(f, "parallel"),
        }
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sequential" | "seq" => Ok(Algorithm::Sequential),
            "parallel" | "par" => Ok(Algorithm::Parallel),
            _ => Err(format!(
                "Unknown algorithm: '{}'. Valid options: sequential, parallel",
                s
            )),
        }
    }
}

/// Configuration shared by both solvers
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Number of rows and columns on the board
    pub size: usize,
    /// Keep a copy of every solution, not just the count
    pub collect_solutions: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            collect_solutions: false,
        }
    }
}

impl SearchConfig {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn with_collect_solutions(mut self, collect: bool) -> Self {
        self.collect_solutions = collect;
        self
    }

    /// Reject sizes that are empty or too large to enumerate
    pub fn validate(&self) -> Result<(), SolveError> {
        if self.size == 0 {
            return Err(SolveError::InvalidSize { size: self.size });
        }
        if self.size > MAX_BOARD_SIZE {
            return Err(SolveError::SizeTooLarge {
                size: self.size,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(())
    }
}
