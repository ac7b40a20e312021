//! Task queue, branch reports and shared tally for parallel search workers.

use crate::board::{Board, Solution};
use crossbeam_channel::{Receiver, Sender, unbounded};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// One unit of parallel work: the subtree below a fixed first-row queen.
#[derive(Debug, Clone)]
pub struct BranchTask {
    /// Column of the first-row queen, which also identifies the branch.
    pub branch: usize,
    /// Board with row 0 already placed.
    pub board: Board,
}

impl BranchTask {
    pub fn new(size: usize, branch: usize) -> Self {
        Self {
            branch,
            board: Board::with_first_queen(size, branch),
        }
    }
}

/// Message sent from workers to the coordinator.
#[derive(Debug, Clone)]
pub enum WorkerMessage {
    /// Worker explored the whole branch.
    BranchDone {
        worker_id: usize,
        branch: usize,
        solution_count: u64,
        solutions: Vec<Solution>,
        nodes_visited: u64,
    },
    /// Worker stopped the branch early because the stop flag was raised.
    BranchAborted {
        worker_id: usize,
        branch: usize,
        nodes_visited: u64,
    },
    /// Worker hit a panic while exploring the branch.
    BranchFailed {
        worker_id: usize,
        branch: usize,
        message: String,
    },
}

impl WorkerMessage {
    /// Branch the message reports on.
    pub fn branch(&self) -> usize {
        match self {
            WorkerMessage::BranchDone { branch, .. }
            | WorkerMessage::BranchAborted { branch, .. }
            | WorkerMessage::BranchFailed { branch, .. } => *branch,
        }
    }
}

/// State shared by every worker of one run.
#[derive(Debug, Default)]
pub struct SharedTally {
    /// Solutions found across all branches.
    solution_count: AtomicU64,
    /// Flag to signal all workers to stop.
    should_stop: AtomicBool,
}

impl SharedTally {
    /// Count one more solution.
    pub fn record_solution(&self) {
        self.solution_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Solutions counted so far. Exact once every worker has been joined.
    pub fn solution_count(&self) -> u64 {
        self.solution_count.load(Ordering::SeqCst)
    }

    /// Check if we should stop searching.
    pub fn should_stop(&self) -> bool {
        self.should_stop.load(Ordering::SeqCst)
    }

    /// Signal all workers to stop.
    pub fn signal_stop(&self) {
        self.should_stop.store(true, Ordering::SeqCst);
    }

    /// The raw stop flag, for checking inside the recursion.
    pub fn stop_flag(&self) -> &AtomicBool {
        &self.should_stop
    }
}

/// Channel endpoints for a worker.
pub struct WorkerChannels {
    /// Receive branches to explore.
    pub tasks: Receiver<BranchTask>,
    /// Send branch reports to the coordinator.
    pub to_coordinator: Sender<WorkerMessage>,
    /// Shared state.
    pub shared: Arc<SharedTally>,
}

/// Channel endpoints for the coordinator.
pub struct CoordinatorChannels {
    /// Queue branches for the workers.
    pub to_workers: Sender<BranchTask>,
    /// Receive branch reports from workers.
    pub from_workers: Receiver<WorkerMessage>,
    /// Shared state.
    pub shared: Arc<SharedTally>,
}

/// Create channels for parallel search with the given number of workers.
///
/// All workers pull from one task queue. The coordinator holds no report
/// sender, so the report channel disconnects once every worker has exited.
pub fn create_channels(num_workers: usize) -> (CoordinatorChannels, Vec<WorkerChannels>) {
    let shared = Arc::new(SharedTally::default());

    let (task_tx, task_rx) = unbounded();
    // Unbounded channel from workers to coordinator (workers shouldn't block)
    let (report_tx, report_rx) = unbounded();

    let worker_channels = (0..num_workers)
        .map(|_| WorkerChannels {
            tasks: task_rx.clone(),
            to_coordinator: report_tx.clone(),
            shared: Arc::clone(&shared),
        })
        .collect();

    let coordinator = CoordinatorChannels {
        to_workers: task_tx,
        from_workers: report_rx,
        shared,
    };

    (coordinator, worker_channels)
}
