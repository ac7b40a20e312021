//! Parallel search execution across the first-row branches.
//!
//! # Architecture
//!
//! The parallel search system consists of:
//! - A **coordinator** that queues one branch per first-row column, waits for
//!   every branch report and merges them in branch order
//! - A fixed pool of **workers** that pull branches from the queue and run
//!   the backtracking search from row 1 on a private board
//! - A **channel system** carrying branches to workers and reports back
//! - A **shared tally** with the atomic solution counter and the stop flag
//!
//! # Example
//!
//! ```ignore
//! use nqueens::search::parallel::{ParallelConfig, run_parallel_search};
//!
//! let config = ParallelConfig::default()
//!     .with_workers(4)
//!     .with_timeout(Duration::from_secs(60));
//!
//! let result = run_parallel_search(&SearchConfig::new(12), &config)?;
//! ```

pub mod channel;
pub mod config;
pub mod coordinator;

pub use config::ParallelConfig;
pub use coordinator::{ParallelSolver, run_parallel_search};
