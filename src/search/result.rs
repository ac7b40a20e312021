//! Search result types and statistics

use crate::board::Solution;
use crate::search::config::Algorithm;
use std::time::Duration;

/// Result of a completed search
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Board size the search ran on
    pub size: usize,
    /// Number of distinct solutions found
    pub solution_count: u64,
    /// Every solution, if collection was enabled
    pub solutions: Vec<Solution>,
    /// Statistics from the search
    pub statistics: SearchStatistics,
}

impl SearchResult {
    pub fn new(size: usize, statistics: SearchStatistics) -> Self {
        Self {
            size,
            solution_count: 0,
            solutions: Vec::new(),
            statistics,
        }
    }
}

/// Statistics from a search
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    /// Solver that produced the result
    pub algorithm: Algorithm,
    /// Wall-clock time of the whole search
    pub elapsed_time: Duration,
    /// Queens placed during the search (recursive calls past the root)
    pub nodes_visited: u64,
    /// Independent branches the search was split into
    pub branches: usize,
    /// Worker threads used
    pub workers: usize,
}

impl SearchStatistics {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Default::default()
        }
    }

    /// Placements per second
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed_time.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.nodes_visited as f64 / secs
        }
    }

    /// Format statistics as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Algorithm: {}\n", self.algorithm));
        s.push_str(&format!("Time: {:.2?}\n", self.elapsed_time));
        s.push_str(&format!("Nodes visited: {}\n", self.nodes_visited));
        s.push_str(&format!("Throughput: {:.0} nodes/sec\n", self.throughput()));
        if self.algorithm == Algorithm::Parallel {
            s.push_str(&format!("Branches: {}\n", self.branches));
            s.push_str(&format!("Workers: {}\n", self.workers));
        }
        s
    }
}
