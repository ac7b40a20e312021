use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, BufWriter, Write};
use std::time::Duration;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod board;
mod error;
mod report;
mod search;

use board::check_solution_set;
use report::{format_execution_time, write_report};
use search::config::DEFAULT_BOARD_SIZE;
use search::parallel::{ParallelConfig, run_parallel_search};
use search::{Algorithm, SearchConfig, SequentialSolver, Solver, solver_for};

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "nqueens")]
#[command(about = "nqueens - enumerate every N-Queens solution")]
#[command(version)]
#[command(subcommand_required = true)]
#[command(arg_required_else_help = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// CLI algorithm selection
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliAlgorithm {
    /// Single-threaded backtracking
    Sequential,
    /// One branch per first-row column on a worker pool
    Parallel,
}

impl From<CliAlgorithm> for Algorithm {
    fn from(cli: CliAlgorithm) -> Self {
        match cli {
            CliAlgorithm::Sequential => Algorithm::Sequential,
            CliAlgorithm::Parallel => Algorithm::Parallel,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Count (and optionally print) every solution for an NxN board
    Solve {
        /// Board size N
        #[arg(default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        /// Solver to use
        #[arg(long, value_enum, default_value = "sequential")]
        algorithm: CliAlgorithm,
        /// Number of worker threads for the parallel solver
        #[arg(long, short = 'j')]
        workers: Option<usize>,
        /// Abort the parallel solver after this many seconds
        #[arg(long)]
        timeout: Option<u64>,
        /// Print every solution before the summary
        #[arg(long)]
        print_solutions: bool,
        /// Enable verbose output
        #[arg(long, short)]
        verbose: bool,
    },
    /// Run both solvers and check that their counts agree
    Compare {
        /// Board size N
        #[arg(default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        /// Number of worker threads for the parallel solver
        #[arg(long, short = 'j')]
        workers: Option<usize>,
        /// Enable verbose output
        #[arg(long, short)]
        verbose: bool,
    },
}

/// Options for a single solve run
struct SolveOptions {
    size: usize,
    algorithm: Algorithm,
    workers: Option<usize>,
    timeout: Option<Duration>,
    print_solutions: bool,
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let default_filter = if verbose {
        "nqueens=debug,warn"
    } else {
        "nqueens=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Parallel-only flags given to a run that does not use the parallel solver
fn ignored_parallel_options(options: &SolveOptions) -> Vec<&'static str> {
    if options.algorithm == Algorithm::Parallel {
        return Vec::new();
    }
    let mut ignored = Vec::new();
    if options.workers.is_some() {
        ignored.push("--workers");
    }
    if options.timeout.is_some() {
        ignored.push("--timeout");
    }
    ignored
}

fn run_solve(options: &SolveOptions) -> Result<(), Box<dyn std::error::Error>> {
    for flag in ignored_parallel_options(options) {
        warn!(flag, "option only applies to the parallel solver, ignoring it");
    }

    let config = SearchConfig::new(options.size).with_collect_solutions(options.print_solutions);
    let parallel = ParallelConfig::default()
        .with_workers_option(options.workers)
        .with_timeout_option(options.timeout);

    let mut solver = solver_for(options.algorithm, parallel);
    let result = solver.solve(&config)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_report(&mut out, &result, options.print_solutions)?;
    out.flush()?;

    if options.verbose {
        eprintln!("Board size: {}", result.size);
        eprint!("{}", solver.statistics().format_summary());
    }

    Ok(())
}

fn run_compare(
    size: usize,
    workers: Option<usize>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = SearchConfig::new(size).with_collect_solutions(true);

    let sequential = SequentialSolver::new().solve(&config)?;
    let parallel = run_parallel_search(
        &config,
        &ParallelConfig::default().with_workers_option(workers),
    )?;

    for report in &parallel.branch_reports {
        debug!(
            branch = report.branch,
            worker_id = report.worker_id,
            solutions = report.solution_count,
            nodes = report.nodes_visited,
            "branch report"
        );
    }

    for (label, result) in [("sequential", &sequential), ("parallel", &parallel.result)] {
        println!(
            "[{}] {}",
            label,
            format_execution_time(result.statistics.elapsed_time)
        );
        println!("[{}] Total solutions: {}", label, result.solution_count);
        if verbose {
            eprint!("{}", result.statistics.format_summary());
        }
    }

    if sequential.solution_count != parallel.result.solution_count {
        return Err(format!(
            "solution counts differ: sequential found {}, parallel found {}",
            sequential.solution_count, parallel.result.solution_count
        )
        .into());
    }
    println!("Counts match");

    if sequential.solutions != parallel.result.solutions {
        return Err("solution lists differ between sequential and parallel runs".into());
    }
    check_solution_set(size, &sequential.solutions)?;
    println!("Mirror check passed");

    Ok(())
}

// --- Main Function ---
fn main() {
    let args = Args::parse();

    match args.command {
        Commands::Solve {
            size,
            algorithm,
            workers,
            timeout,
            print_solutions,
            verbose,
        } => {
            setup_logging(verbose);

            let options = SolveOptions {
                size,
                algorithm: algorithm.into(),
                workers,
                timeout: timeout.map(Duration::from_secs),
                print_solutions,
                verbose,
            };

            if let Err(e) = run_solve(&options) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Compare {
            size,
            workers,
            verbose,
        } => {
            setup_logging(verbose);

            if let Err(e) = run_compare(size, workers, verbose) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
