//! Single-threaded N-Queens enumeration

use crate::board::Board;
use crate::error::SolveError;
use crate::search::Solver;
use crate::search::backtrack::{Backtracker, LocalTally};
use crate::search::config::{Algorithm, SearchConfig};
use crate::search::result::{SearchResult, SearchStatistics};
use std::time::Instant;
use tracing::{debug, info};

/// Depth-first search over rows `0..n` on a single board
#[derive(Debug, Default)]
pub struct SequentialSolver {
    statistics: SearchStatistics,
}

impl SequentialSolver {
    pub fn new() -> Self {
        Self {
            statistics: SearchStatistics::new(Algorithm::Sequential),
        }
    }
}

impl Solver for SequentialSolver {
    fn solve(&mut self, config: &SearchConfig) -> Result<SearchResult, SolveError> {
        config.validate()?;
        self.reset();

        let start_time = Instant::now();
        debug!(size = config.size, "starting sequential search");

        let mut search = Backtracker::new(
            Board::new(config.size),
            LocalTally::new(config.collect_solutions),
        );
        // Without a stop flag the search always runs to completion
        search.run(0);
        let nodes_visited = search.nodes_visited();
        let tally = search.into_sink();

        self.statistics.elapsed_time = start_time.elapsed();
        self.statistics.nodes_visited = nodes_visited;
        self.statistics.branches = 1;
        self.statistics.workers = 1;

        info!(
            size = config.size,
            solutions = tally.count,
            elapsed = ?self.statistics.elapsed_time,
            "sequential search finished"
        );

        let mut result = SearchResult::new(config.size, self.statistics.clone());
        result.solution_count = tally.count;
        result.solutions = tally.solutions;
        Ok(result)
    }

    fn statistics(&self) -> SearchStatistics {
        self.statistics.clone()
    }

    fn reset(&mut self) {
        self.statistics = SearchStatistics::new(Algorithm::Sequential);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn count(n: usize) -> u64 {
        SequentialSolver::new()
            .solve(&SearchConfig::new(n))
            .expect("valid size")
            .solution_count
    }

    #[test]
    fn test_known_solution_counts() {
        let expected = [
            (1, 1),
            (2, 0),
            (3, 0),
            (4, 2),
            (5, 10),
            (6, 4),
            (7, 40),
            (8, 92),
            (9, 352),
            (10, 724),
        ];
        for (n, solutions) in expected {
            assert_eq!(count(n), solutions, "wrong count for n = {}", n);
        }
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let err = SequentialSolver::new()
            .solve(&SearchConfig::new(0))
            .unwrap_err();
        assert!(matches!(err, SolveError::InvalidSize { size: 0 }));
    }

    #[test]
    fn test_oversized_board_is_rejected() {
        let err = SequentialSolver::new()
            .solve(&SearchConfig::new(64))
            .unwrap_err();
        assert!(matches!(err, SolveError::SizeTooLarge { .. }));
    }

    #[test]
    fn test_collected_solutions_match_count() {
        let config = SearchConfig::new(8).with_collect_solutions(true);
        let result = SequentialSolver::new().solve(&config).unwrap();
        assert_eq!(result.solutions.len() as u64, result.solution_count);
        assert!(result.solutions.iter().all(|s| s.is_valid() && s.size() == 8));
    }

    #[test]
    fn test_solutions_are_lexicographically_ordered() {
        let config = SearchConfig::new(6).with_collect_solutions(true);
        let result = SequentialSolver::new().solve(&config).unwrap();
        let mut sorted = result.solutions.clone();
        sorted.sort();
        assert_eq!(result.solutions, sorted);
    }

    #[test]
    fn test_mirror_closure() {
        let config = SearchConfig::new(7).with_collect_solutions(true);
        let result = SequentialSolver::new().solve(&config).unwrap();
        let set: HashSet<_> = result.solutions.iter().cloned().collect();
        for solution in &result.solutions {
            let mirrored = solution.mirrored();
            assert!(mirrored.is_valid());
            assert!(set.contains(&mirrored));
        }
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let config = SearchConfig::new(8).with_collect_solutions(true);
        let mut solver = SequentialSolver::new();
        let first = solver.solve(&config).unwrap();
        let second = solver.solve(&config).unwrap();
        assert_eq!(first.solution_count, second.solution_count);
        assert_eq!(first.solutions, second.solutions);
    }

    #[test]
    fn test_statistics_after_solve() {
        let mut solver = SequentialSolver::new();
        solver.solve(&SearchConfig::new(6)).unwrap();
        let stats = solver.statistics();
        assert_eq!(stats.algorithm, Algorithm::Sequential);
        assert!(stats.nodes_visited > 0);
        assert_eq!(stats.branches, 1);

        solver.reset();
        assert_eq!(solver.statistics().nodes_visited, 0);
    }
}
