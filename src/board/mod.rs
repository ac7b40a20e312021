//! Board representation shared by the sequential and parallel solvers

pub mod solution;
pub mod types;

// Re-export commonly used types
pub use solution::{Solution, check_solution_set};
pub use types::Board;
