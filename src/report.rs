//! Text report for a finished search

use crate::search::SearchResult;
use std::io::{self, Write};
use std::time::Duration;

const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Format a duration in the coarsest unit that keeps it non-zero
///
/// Below one millisecond the value is in nanoseconds, below one second in
/// whole milliseconds, otherwise in whole seconds. Values are truncated.
pub fn format_execution_time(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    if nanos < NANOS_PER_MILLI {
        format!("Execution time: {} nanoseconds", nanos)
    } else if nanos < NANOS_PER_SEC {
        format!("Execution time: {} milliseconds", nanos / NANOS_PER_MILLI)
    } else {
        format!("Execution time: {} seconds", nanos / NANOS_PER_SEC)
    }
}

/// Write the optional solution dump, the time line and the count line
pub fn write_report<W: Write>(
    out: &mut W,
    result: &SearchResult,
    print_solutions: bool,
) -> io::Result<()> {
    if print_solutions {
        for solution in &result.solutions {
            write!(out, "{}", solution.render())?;
            writeln!(out)?;
        }
    }

    writeln!(
        out,
        "{}",
        format_execution_time(result.statistics.elapsed_time)
    )?;
    writeln!(out, "Total solutions: {}", result.solution_count)?;
    Ok(())
}
