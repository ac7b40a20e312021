use std::path::PathBuf;
use std::process::Command;

fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_nqueens"))
}

#[test]
fn test_compare_counts_match() {
    let output = Command::new(get_binary_path())
        .args(["compare", "8", "-j", "3"])
        .output()
        .expect("Failed to execute nqueens");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        output.status.success(),
        "compare failed\nstderr: {}\nstdout: {}",
        String::from_utf8_lossy(&output.stderr),
        stdout
    );

    assert!(stdout.contains("[sequential] Total solutions: 92"));
    assert!(stdout.contains("[parallel] Total solutions: 92"));
    assert!(stdout.contains("[sequential] Execution time: "));
    assert!(stdout.contains("[parallel] Execution time: "));
    assert!(stdout.contains("Counts match"));
    assert!(stdout.contains("Mirror check passed"));
}

#[test]
fn test_compare_rejects_zero() {
    let output = Command::new(get_binary_path())
        .args(["compare", "0"])
        .output()
        .expect("Failed to execute nqueens");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).is_empty());
}
