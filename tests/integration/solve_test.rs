use std::path::PathBuf;
use std::process::{Command, Output};

fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_nqueens"))
}

fn run_nqueens(args: &[&str]) -> Output {
    Command::new(get_binary_path())
        .args(args)
        .output()
        .expect("Failed to execute nqueens")
}

fn assert_success(output: &Output) -> String {
    if !output.status.success() {
        panic!(
            "Command failed with status: {:?}\nstderr: {}\nstdout: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr),
            String::from_utf8_lossy(&output.stdout)
        );
    }
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_solve_sequential_eight() {
    let output = run_nqueens(&["solve", "8"]);
    let stdout = assert_success(&output);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "Expected exactly two lines, got: {}", stdout);
    assert!(
        lines[0].starts_with("Execution time: "),
        "First line should report the execution time"
    );
    assert!(
        lines[0].ends_with("nanoseconds")
            || lines[0].ends_with("milliseconds")
            || lines[0].ends_with("seconds"),
        "Execution time should carry a unit: {}",
        lines[0]
    );
    assert_eq!(lines[1], "Total solutions: 92");
}

#[test]
fn test_solve_parallel_matches_known_count() {
    let output = run_nqueens(&["solve", "9", "--algorithm", "parallel", "-j", "4"]);
    let stdout = assert_success(&output);
    assert!(
        stdout.contains("Total solutions: 352"),
        "Parallel solver should find 352 solutions for n = 9"
    );
}

#[test]
fn test_solve_prints_solutions() {
    let output = run_nqueens(&["solve", "4", "--print-solutions"]);
    let stdout = assert_success(&output);

    let expected_boards = "\
. Q . .
. . . Q
Q . . .
. . Q .

. . Q .
Q . . .
. . . Q
. Q . .

";
    assert!(
        stdout.starts_with(expected_boards),
        "Unexpected solution dump:\n{}",
        stdout
    );
    assert!(stdout.ends_with("Total solutions: 2\n"));
}

#[test]
fn test_solve_no_solutions() {
    let output = run_nqueens(&["solve", "3", "--algorithm", "parallel"]);
    let stdout = assert_success(&output);
    assert!(stdout.contains("Total solutions: 0"));
}

#[test]
fn test_solve_rejects_zero() {
    let output = run_nqueens(&["solve", "0"]);
    assert_eq!(output.status.code(), Some(1), "n = 0 must be rejected");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.is_empty(), "No result may be printed on error");
    assert!(stderr.contains("Error:"), "Should report the error");
    assert!(stderr.contains("invalid board size 0"));
}

#[test]
fn test_solve_timeout_fails_without_result() {
    let output = run_nqueens(&["solve", "8", "--algorithm", "parallel", "--timeout", "0"]);
    assert_eq!(output.status.code(), Some(1), "timed out run must fail");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.is_empty(), "No count may be printed for an aborted run");
    assert!(stderr.contains("Error: incomplete result"));
}

#[test]
fn test_solve_warns_about_parallel_flags() {
    let output = run_nqueens(&["solve", "6", "-j", "2", "--timeout", "30"]);
    let stdout = assert_success(&output);
    assert!(stdout.contains("Total solutions: 4"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("only applies to the parallel solver"));
    assert!(stderr.contains("--workers"));
    assert!(stderr.contains("--timeout"));
}

#[test]
fn test_solve_rejects_oversized_board() {
    let output = run_nqueens(&["solve", "25"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("too large"));
}

#[test]
fn test_solve_rejects_negative_size() {
    let output = run_nqueens(&["solve", "--", "-4"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).is_empty());
}

#[test]
fn test_solve_rejects_unknown_algorithm() {
    let output = run_nqueens(&["solve", "8", "--algorithm", "random"]);
    assert!(!output.status.success());
}
