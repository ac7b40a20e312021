//! Depth-first backtracking shared by both solvers
//!
//! A `Backtracker` owns one board and fills it row by row from a starting
//! row. Every complete placement is handed to a `SolutionSink`, which decides
//! how the solution is counted and stored. The sequential solver runs one
//! backtracker from row 0; the parallel solver runs one per branch from row 1.

use crate::board::{Board, Solution};
use std::sync::atomic::{AtomicBool, Ordering};

/// Receives every complete placement found by a backtracker
pub trait SolutionSink {
    /// Record a complete, valid board
    fn record(&mut self, board: &Board);
}

/// Solution counter with an optional solution list
#[derive(Debug, Clone, Default)]
pub struct LocalTally {
    /// Solutions recorded so far
    pub count: u64,
    /// Recorded solutions in discovery order (empty unless collecting)
    pub solutions: Vec<Solution>,
    collect: bool,
}

impl LocalTally {
    pub fn new(collect: bool) -> Self {
        Self {
            collect,
            ..Self::default()
        }
    }
}

impl SolutionSink for LocalTally {
    fn record(&mut self, board: &Board) {
        debug_assert!(board.is_complete());
        self.count += 1;
        if self.collect
            && let Some(solution) = board.snapshot()
        {
            debug_assert!(solution.is_valid());
            self.solutions.push(solution);
        }
    }
}

/// How a backtracking run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every placement below the starting row was explored
    Completed,
    /// The stop flag was raised before the subtree was exhausted
    Aborted,
}

/// Recursive placement search over a privately owned board
pub struct Backtracker<'a, S: SolutionSink> {
    board: Board,
    sink: S,
    stop: Option<&'a AtomicBool>,
    nodes_visited: u64,
}

impl<'a, S: SolutionSink> Backtracker<'a, S> {
    /// Create a backtracker over `board`; rows before the starting row must
    /// already hold a conflict-free placement
    pub fn new(board: Board, sink: S) -> Self {
        Self {
            board,
            sink,
            stop: None,
            nodes_visited: 0,
        }
    }

    /// Check `flag` at every recursive call and abort once it is set
    pub fn with_stop_flag(mut self, flag: &'a AtomicBool) -> Self {
        self.stop = Some(flag);
        self
    }

    /// Explore every placement of rows `start_row..n`
    pub fn run(&mut self, start_row: usize) -> Outcome {
        self.solve(start_row)
    }

    fn solve(&mut self, row: usize) -> Outcome {
        if self.stop.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            return Outcome::Aborted;
        }

        let n = self.board.size();
        if row == n {
            self.sink.record(&self.board);
            return Outcome::Completed;
        }

        for col in 0..n {
            if self.board.is_safe(row, col) {
                self.board.place(row, col);
                self.nodes_visited += 1;
                if self.solve(row + 1) == Outcome::Aborted {
                    return Outcome::Aborted;
                }
            }
        }
        self.board.clear(row);

        Outcome::Completed
    }

    /// Queens placed so far
    pub fn nodes_visited(&self) -> u64 {
        self.nodes_visited
    }

    /// Consume the backtracker and return its sink
    pub fn into_sink(self) -> S {
        self.sink
    }
}
