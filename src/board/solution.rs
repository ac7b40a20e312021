//! Complete placements and their text rendering

use std::collections::HashSet;
use std::fmt;

/// An immutable snapshot of a complete board
///
/// `columns()[row]` is the column of the queen in `row`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Solution {
    columns: Vec<usize>,
}

impl Solution {
    pub fn new(columns: Vec<usize>) -> Self {
        Self { columns }
    }

    pub fn size(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Re-check that no two queens share a column or a diagonal
    pub fn is_valid(&self) -> bool {
        let n = self.columns.len();
        self.columns.iter().all(|&col| col < n)
            && self.columns.iter().enumerate().all(|(i, &a)| {
                self.columns[i + 1..]
                    .iter()
                    .enumerate()
                    .all(|(offset, &b)| a != b && a.abs_diff(b) != offset + 1)
            })
    }

    /// Reflect the placement horizontally (column `c` becomes `n - 1 - c`)
    pub fn mirrored(&self) -> Self {
        let n = self.columns.len();
        Self {
            columns: self.columns.iter().map(|&col| n - 1 - col).collect(),
        }
    }

    /// Render as `n` lines of `n` space-separated tokens
    ///
    /// The queen's square is `Q`, every other square is `.`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.columns.len();
        for &queen in &self.columns {
            let line: Vec<&str> = (0..n)
                .map(|col| if col == queen { "Q" } else { "." })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Check that every solution is a valid `size`-queens placement and that the
/// set is closed under horizontal reflection
pub fn check_solution_set(size: usize, solutions: &[Solution]) -> Result<(), String> {
    if let Some(bad) = solutions.iter().find(|s| s.size() != size || !s.is_valid()) {
        return Err(format!(
            "{:?} is not a valid {}-queens placement",
            bad.columns(),
            size
        ));
    }

    let known: HashSet<&Solution> = solutions.iter().collect();
    if let Some(lonely) = solutions.iter().find(|s| !known.contains(&s.mirrored())) {
        return Err(format!(
            "mirror of {:?} is missing from the solution set",
            lonely.columns()
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_four_queens() {
        let solution = Solution::new(vec![1, 3, 0, 2]);
        let rendered = solution.render();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], ". Q . .");
        assert_eq!(lines[1], ". . . Q");
        assert_eq!(lines[2], "Q . . .");
        assert_eq!(lines[3], ". . Q .");

        for (row, line) in lines.iter().enumerate() {
            let tokens: Vec<&str> = line.split(' ').collect();
            assert_eq!(tokens.len(), 4);
            assert_eq!(tokens.iter().filter(|t| **t == "Q").count(), 1);
            assert_eq!(tokens[solution.columns()[row]], "Q");
        }
    }

    #[test]
    fn test_render_single_queen() {
        assert_eq!(Solution::new(vec![0]).render(), "Q\n");
    }

    #[test]
    fn test_is_valid() {
        assert!(Solution::new(vec![1, 3, 0, 2]).is_valid());
        assert!(Solution::new(vec![0]).is_valid());
        // Same column
        assert!(!Solution::new(vec![1, 1, 0, 2]).is_valid());
        // Diagonal between rows 0 and 2
        assert!(!Solution::new(vec![0, 3, 2, 1]).is_valid());
        // Column out of range
        assert!(!Solution::new(vec![1, 4, 0, 2]).is_valid());
    }

    #[test]
    fn test_mirrored_stays_valid() {
        let solution = Solution::new(vec![1, 3, 0, 2]);
        let mirrored = solution.mirrored();
        assert_eq!(mirrored.columns(), &[2, 0, 3, 1]);
        assert!(mirrored.is_valid());
        assert_eq!(mirrored.mirrored(), solution);
    }

    #[test]
    fn test_check_solution_set() {
        let four = vec![Solution::new(vec![1, 3, 0, 2]), Solution::new(vec![2, 0, 3, 1])];
        assert!(check_solution_set(4, &four).is_ok());
        assert!(check_solution_set(6, &[]).is_ok());

        let err = check_solution_set(4, &four[..1]).unwrap_err();
        assert!(err.contains("mirror of [1, 3, 0, 2]"));

        let err = check_solution_set(5, &four).unwrap_err();
        assert!(err.contains("not a valid 5-queens placement"));

        let err = check_solution_set(4, &[Solution::new(vec![1, 1, 0, 2])]).unwrap_err();
        assert!(err.contains("[1, 1, 0, 2]"));
    }
}
