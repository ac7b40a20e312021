//! Parallel search coordinator that manages worker threads.
//!
//! The board is split at row 0 into one branch per column. Branches are
//! queued up front and pulled by a fixed pool of workers. Each worker counts
//! solutions into the shared atomic tally and keeps its own solution list,
//! which travels back to the coordinator in the branch report. The
//! coordinator waits until every branch has reported and every worker has
//! been joined before it builds a result.

use crate::board::{Board, Solution};
use crate::error::SolveError;
use crate::search::Solver;
use crate::search::backtrack::{Backtracker, LocalTally, Outcome, SolutionSink};
use crate::search::config::{Algorithm, SearchConfig};
use crate::search::parallel::channel::{
    BranchTask, CoordinatorChannels, SharedTally, WorkerChannels, WorkerMessage, create_channels,
};
use crate::search::parallel::config::ParallelConfig;
use crate::search::result::{SearchResult, SearchStatistics};
use crossbeam_channel::{Receiver, RecvTimeoutError};
use std::any::Any;
use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::AtomicBool;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Per-branch outcome of a successful parallel run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchReport {
    /// Column of the first-row queen.
    pub branch: usize,
    /// Worker that explored the branch.
    pub worker_id: usize,
    pub solution_count: u64,
    pub nodes_visited: u64,
}

/// Result from parallel search execution.
#[derive(Debug)]
pub struct ParallelResult {
    /// Merged result across all branches.
    pub result: SearchResult,
    /// One report per branch, ordered by branch.
    pub branch_reports: Vec<BranchReport>,
}

/// Solver that explores the first-row branches concurrently.
#[derive(Debug, Default)]
pub struct ParallelSolver {
    config: ParallelConfig,
    statistics: SearchStatistics,
}

impl ParallelSolver {
    pub fn new(config: ParallelConfig) -> Self {
        Self {
            config,
            statistics: SearchStatistics::new(Algorithm::Parallel),
        }
    }
}

impl Solver for ParallelSolver {
    fn solve(&mut self, config: &SearchConfig) -> Result<SearchResult, SolveError> {
        self.reset();
        let parallel = run_parallel_search(config, &self.config)?;
        self.statistics = parallel.result.statistics.clone();
        Ok(parallel.result)
    }

    fn statistics(&self) -> SearchStatistics {
        self.statistics.clone()
    }

    fn reset(&mut self) {
        self.statistics = SearchStatistics::new(Algorithm::Parallel);
    }
}

/// Run parallel search with the given configuration.
///
/// Fails with [`SolveError::Incomplete`] when any branch panicked, was
/// aborted by the timeout, or never reported back.
pub fn run_parallel_search(
    search_config: &SearchConfig,
    parallel_config: &ParallelConfig,
) -> Result<ParallelResult, SolveError> {
    search_config.validate()?;

    let start_time = Instant::now();
    let size = search_config.size;
    let num_workers = parallel_config.workers_for(size);
    let collect = search_config.collect_solutions;

    info!(size, workers = num_workers, "starting parallel search");

    let (coordinator, worker_channels) = create_channels(num_workers);
    let CoordinatorChannels {
        to_workers,
        from_workers,
        shared,
    } = coordinator;

    // Queue every branch, then close the queue so idle workers exit
    for branch in 0..size {
        if to_workers.send(BranchTask::new(size, branch)).is_err() {
            warn!(branch, "task queue closed before branch was queued");
        }
    }
    drop(to_workers);

    // A deadline that has already passed aborts every branch before it starts
    let deadline = parallel_config.timeout.map(|t| start_time + t);
    if deadline.is_some_and(|d| Instant::now() >= d) {
        warn!("parallel search timed out before workers started");
        shared.signal_stop();
    }

    let mut handles: Vec<JoinHandle<()>> = Vec::with_capacity(num_workers);
    for (worker_id, channels) in worker_channels.into_iter().enumerate() {
        let spawned = thread::Builder::new()
            .name(format!("nqueens-worker-{}", worker_id))
            .spawn(move || run_worker(worker_id, channels, collect));
        match spawned {
            Ok(handle) => handles.push(handle),
            Err(e) => {
                error!(worker_id, error = %e, "failed to spawn worker");
                shared.signal_stop();
                join_workers(handles);
                return Err(SolveError::WorkerSpawn(e));
            }
        }
    }

    let reports = collect_reports(&from_workers, &shared, size, deadline);

    // Barrier: nothing is read until every worker has exited
    join_workers(handles);

    let merged = merge_reports(reports, size, &shared)?;

    let mut statistics = SearchStatistics::new(Algorithm::Parallel);
    statistics.elapsed_time = start_time.elapsed();
    statistics.nodes_visited = merged.nodes_visited;
    statistics.branches = size;
    statistics.workers = num_workers;

    info!(
        size,
        solutions = merged.solution_count,
        elapsed = ?statistics.elapsed_time,
        "parallel search finished"
    );

    Ok(ParallelResult {
        result: SearchResult {
            size,
            solution_count: merged.solution_count,
            solutions: merged.solutions,
            statistics,
        },
        branch_reports: merged.branch_reports,
    })
}

/// Receive branch reports until all branches reported or every worker exited.
fn collect_reports(
    from_workers: &Receiver<WorkerMessage>,
    shared: &SharedTally,
    branches: usize,
    deadline: Option<Instant>,
) -> BTreeMap<usize, WorkerMessage> {
    let mut reports = BTreeMap::new();

    while reports.len() < branches {
        if deadline.is_some_and(|d| Instant::now() >= d) && !shared.should_stop() {
            warn!("parallel search timed out, stopping workers");
            shared.signal_stop();
        }

        // Receive with timeout to allow periodic deadline checks
        match from_workers.recv_timeout(Duration::from_millis(100)) {
            Ok(msg) => {
                let branch = msg.branch();
                if reports.insert(branch, msg).is_some() {
                    warn!(branch, "duplicate report for branch");
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                // All senders dropped, no more reports can arrive
                break;
            }
        }
    }

    reports
}

#[derive(Debug, Default)]
struct MergedReports {
    solution_count: u64,
    solutions: Vec<Solution>,
    nodes_visited: u64,
    branch_reports: Vec<BranchReport>,
}

/// Combine branch reports in branch order, failing if any branch is missing
/// or did not complete.
fn merge_reports(
    mut reports: BTreeMap<usize, WorkerMessage>,
    branches: usize,
    shared: &SharedTally,
) -> Result<MergedReports, SolveError> {
    let mut merged = MergedReports::default();
    let mut failed = Vec::new();
    let (mut panicked, mut aborted, mut missing) = (0, 0, 0);

    for branch in 0..branches {
        match reports.remove(&branch) {
            Some(WorkerMessage::BranchDone {
                worker_id,
                solution_count,
                solutions,
                nodes_visited,
                ..
            }) => {
                merged.solution_count += solution_count;
                merged.nodes_visited += nodes_visited;
                merged.solutions.extend(solutions);
                merged.branch_reports.push(BranchReport {
                    branch,
                    worker_id,
                    solution_count,
                    nodes_visited,
                });
            }
            Some(WorkerMessage::BranchAborted {
                worker_id,
                nodes_visited,
                ..
            }) => {
                warn!(branch, worker_id, nodes_visited, "branch did not finish");
                aborted += 1;
                failed.push(branch);
            }
            Some(WorkerMessage::BranchFailed {
                worker_id, message, ..
            }) => {
                error!(branch, worker_id, %message, "branch failed");
                panicked += 1;
                failed.push(branch);
            }
            None => {
                error!(branch, "branch never reported");
                missing += 1;
                failed.push(branch);
            }
        }
    }

    if !failed.is_empty() {
        let reason = format!(
            "{} panicked, {} aborted, {} never reported",
            panicked, aborted, missing
        );
        error!(failed = ?failed, %reason, "parallel search incomplete");
        return Err(SolveError::Incomplete { failed, reason });
    }

    let shared_count = shared.solution_count();
    if shared_count != merged.solution_count {
        error!(
            shared = shared_count,
            reported = merged.solution_count,
            "solution counter disagrees with branch reports"
        );
        return Err(SolveError::Incomplete {
            failed,
            reason: format!(
                "shared counter saw {} solutions but branches reported {}",
                shared_count, merged.solution_count
            ),
        });
    }

    Ok(merged)
}

fn join_workers(handles: Vec<JoinHandle<()>>) {
    for handle in handles {
        if handle.join().is_err() {
            error!("worker thread panicked outside of a branch");
        }
    }
}

/// Counts every solution into the shared tally and keeps a branch-local copy.
struct BranchTally<'a> {
    shared: &'a SharedTally,
    local: LocalTally,
}

impl SolutionSink for BranchTally<'_> {
    fn record(&mut self, board: &Board) {
        self.shared.record_solution();
        self.local.record(board);
    }
}

/// Worker loop: explore queued branches until the queue is drained.
fn run_worker(worker_id: usize, channels: WorkerChannels, collect: bool) {
    for task in channels.tasks.iter() {
        let report = run_branch(worker_id, task, &channels.shared, collect);
        if channels.to_coordinator.send(report).is_err() {
            // Coordinator is gone, nobody will read further reports
            break;
        }
    }
    debug!(worker_id, "worker finished");
}

/// Explore one branch, feeding solutions to the shared counter and a local tally.
fn run_branch(
    worker_id: usize,
    task: BranchTask,
    shared: &SharedTally,
    collect: bool,
) -> WorkerMessage {
    let sink = BranchTally {
        shared,
        local: LocalTally::new(collect),
    };
    explore_branch(worker_id, task, shared.stop_flag(), sink, |tally| tally.local)
}

/// Run the backtracker from row 1, turning a panic into a failure report.
fn explore_branch<S, F>(
    worker_id: usize,
    task: BranchTask,
    stop: &AtomicBool,
    sink: S,
    into_tally: F,
) -> WorkerMessage
where
    S: SolutionSink,
    F: FnOnce(S) -> LocalTally,
{
    let branch = task.branch;
    debug!(worker_id, branch, "starting branch");

    let explored = panic::catch_unwind(AssertUnwindSafe(move || {
        let mut search = Backtracker::new(task.board, sink).with_stop_flag(stop);
        let outcome = search.run(1);
        let nodes_visited = search.nodes_visited();
        (outcome, nodes_visited, into_tally(search.into_sink()))
    }));

    match explored {
        Ok((Outcome::Completed, nodes_visited, tally)) => {
            debug!(worker_id, branch, solutions = tally.count, "branch done");
            WorkerMessage::BranchDone {
                worker_id,
                branch,
                solution_count: tally.count,
                solutions: tally.solutions,
                nodes_visited,
            }
        }
        Ok((Outcome::Aborted, nodes_visited, _)) => {
            debug!(worker_id, branch, "branch aborted");
            WorkerMessage::BranchAborted {
                worker_id,
                branch,
                nodes_visited,
            }
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            error!(worker_id, branch, %message, "branch panicked");
            WorkerMessage::BranchFailed {
                worker_id,
                branch,
                message,
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
