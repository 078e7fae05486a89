//! Screening results tracking

use crate::cone::Violation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a single candidate vector was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screening {
    /// The zero vector, never checked
    Zero,
    /// A scalar multiple of a smaller integer vector, skipped
    Unreduced,
    /// Passed the sign-alternation test
    Compatible,
    /// Failed, with the first violating triple
    Violated(Violation),
}

/// A vector that failed, with its witness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolatingVector {
    /// The candidate vector
    pub vector: Vec<i64>,
    /// The first violating triple
    pub violation: Violation,
}

/// Results of one screening run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Candidates seen, including skipped ones
    pub examined: usize,
    /// Zero vectors skipped
    pub skipped_zero: usize,
    /// Non-reduced vectors skipped
    pub skipped_unreduced: usize,
    /// Vectors that passed, in candidate order
    pub compatible: Vec<Vec<i64>>,
    /// Vectors that failed, in candidate order
    pub violations: Vec<ViolatingVector>,
}

impl SearchReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one classified candidate.
    pub fn record(&mut self, vector: Vec<i64>, screening: Screening) {
        self.examined += 1;
        match screening {
            Screening::Zero => self.skipped_zero += 1,
            Screening::Unreduced => self.skipped_unreduced += 1,
            Screening::Compatible => self.compatible.push(vector),
            Screening::Violated(violation) => {
                self.violations.push(ViolatingVector { vector, violation })
            }
        }
    }

    /// Number of vectors that passed
    pub fn passed(&self) -> usize {
        self.compatible.len()
    }

    /// Number of vectors that failed
    pub fn failed(&self) -> usize {
        self.violations.len()
    }

    /// Number of vectors actually checked against the cone
    pub fn checked(&self) -> usize {
        self.passed() + self.failed()
    }

    /// Whether every checked vector passed
    pub fn all_compatible(&self) -> bool {
        self.violations.is_empty()
    }

    /// Whether `vector` was recorded as compatible
    pub fn is_compatible(&self, vector: &[i64]) -> bool {
        self.compatible.iter().any(|v| v.as_slice() == vector)
    }

    /// Export per-vector results in CSV format
    pub fn to_csv(&self) -> String {
        let mut csv = String::from("vector,result,dual_row,primal_col,coordinate\n");
        for v in &self.compatible {
            csv.push_str(&format!("\"{:?}\",compatible,,,\n", v));
        }
        for v in &self.violations {
            csv.push_str(&format!(
                "\"{:?}\",violated,{},{},{}\n",
                v.vector, v.violation.dual_row, v.violation.primal_col, v.violation.coordinate
            ));
        }
        csv
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Screening Summary ===")?;
        writeln!(f, "Candidates examined: {}", self.examined)?;
        writeln!(
            f,
            "Skipped: {} zero, {} not reduced",
            self.skipped_zero, self.skipped_unreduced
        )?;
        writeln!(f, "Compatible: {}", self.passed())?;
        write!(f, "Violations: {}", self.failed())?;
        for v in &self.violations {
            write!(f, "\n  {:?} failed: {}", v.vector, v.violation)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record() {
        let mut report = SearchReport::new();
        report.record(vec![0, 0], Screening::Zero);
        report.record(vec![2, 2], Screening::Unreduced);
        report.record(vec![1, 0], Screening::Compatible);
        let violation = Violation {
            dual_row: 1,
            primal_col: 0,
            coordinate: 1,
        };
        report.record(vec![0, 1], Screening::Violated(violation));

        assert_eq!(report.examined, 4);
        assert_eq!(report.skipped_zero, 1);
        assert_eq!(report.skipped_unreduced, 1);
        assert_eq!(report.checked(), 2);
        assert!(report.is_compatible(&[1, 0]));
        assert!(!report.is_compatible(&[0, 1]));
        assert!(!report.all_compatible());
    }

    #[test]
    fn test_csv_and_display() {
        let mut report = SearchReport::new();
        report.record(vec![1, -1], Screening::Compatible);
        report.record(
            vec![1, 1],
            Screening::Violated(Violation {
                dual_row: 0,
                primal_col: 1,
                coordinate: 0,
            }),
        );
        let csv = report.to_csv();
        assert_eq!(csv.lines().count(), 3);
        assert!(csv.contains("\"[1, 1]\",violated,0,1,0"));

        let text = report.to_string();
        assert!(text.contains("Compatible: 1"));
        assert!(text.contains("[1, 1] failed"));
    }
}
