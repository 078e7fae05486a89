//! Integer matrices for cone descriptions.
//!
//! Cone generators are small integer vectors, so matrices are stored as
//! dense rows of `i64`. Products are accumulated in `i128` and rejected
//! if they do not fit back into `i64`.

use crate::utils::errors::{CrnError, CrnResult};
use num_integer::Integer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rectangular matrix with integer entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i64>>", into = "Vec<Vec<i64>>")]
pub struct IntMatrix {
    data: Vec<Vec<i64>>,
    rows: usize,
    cols: usize,
}

impl IntMatrix {
    /// Create a new matrix with the given dimensions, initialized to zero.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![vec![0; cols]; rows],
            rows,
            cols,
        }
    }

    /// Create a matrix from its rows. All rows must have the same length.
    pub fn from_rows(data: Vec<Vec<i64>>) -> CrnResult<Self> {
        let rows = data.len();
        let cols = data.first().map_or(0, Vec::len);
        if let Some((i, row)) = data.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(CrnError::invalid(format!(
                "row {} has {} entries, expected {}",
                i,
                row.len(),
                cols
            )));
        }
        Ok(Self { data, rows, cols })
    }

    /// Get the number of rows.
    pub fn nrows(&self) -> usize {
        self.rows
    }

    /// Get the number of columns.
    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// Shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Get an element.
    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        self.data.get(row)?.get(col).copied()
    }

    /// Get a row as a slice.
    pub fn row(&self, row: usize) -> Option<&[i64]> {
        self.data.get(row).map(Vec::as_slice)
    }

    /// Iterate over rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[i64]> {
        self.data.iter().map(Vec::as_slice)
    }

    /// Matrix multiplication `self · other`.
    pub fn mul(&self, other: &Self) -> CrnResult<Self> {
        if self.cols != other.rows {
            return Err(CrnError::invalid(format!(
                "cannot multiply {}x{} by {}x{}",
                self.rows, self.cols, other.rows, other.cols
            )));
        }
        let columns: Vec<Vec<i64>> = (0..other.cols)
            .map(|j| other.data.iter().map(|row| row[j]).collect())
            .collect();
        let mut result = Self::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for (j, column) in columns.iter().enumerate() {
                result.data[i][j] = dot(&self.data[i], column)
                    .and_then(|sum| i64::try_from(sum).ok())
                    .ok_or_else(|| {
                        CrnError::invalid(format!("product entry ({}, {}) overflows i64", i, j))
                    })?;
            }
        }
        Ok(result)
    }

    /// Whether every entry is zero or positive.
    pub fn is_nonnegative(&self) -> bool {
        self.data.iter().all(|row| row.iter().all(|&v| v >= 0))
    }
}

impl TryFrom<Vec<Vec<i64>>> for IntMatrix {
    type Error = CrnError;

    fn try_from(data: Vec<Vec<i64>>) -> CrnResult<Self> {
        Self::from_rows(data)
    }
}

impl From<IntMatrix> for Vec<Vec<i64>> {
    fn from(mat: IntMatrix) -> Self {
        mat.data
    }
}

impl fmt::Display for IntMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        for row in &self.data {
            write!(f, "  [")?;
            for (j, val) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", val)?;
            }
            writeln!(f, "]")?;
        }
        write!(f, "]")
    }
}

/// Exact dot product of two integer vectors of equal length.
///
/// Each term fits in `i128`; `None` if the running sum does not.
pub fn dot(a: &[i64], b: &[i64]) -> Option<i128> {
    a.iter()
        .zip(b)
        .try_fold(0i128, |acc, (&x, &y)| acc.checked_add(i128::from(x) * i128::from(y)))
}

/// Compute the GCD of the absolute values of a vector of integers.
///
/// Works on magnitudes so that `i64::MIN` is handled; the result is `2^63`
/// for `[i64::MIN]`.
pub fn vector_gcd(v: &[i64]) -> u64 {
    v.iter().fold(0u64, |acc, &x| acc.gcd(&x.unsigned_abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_creation() {
        let m = IntMatrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.ncols(), 3);
        assert_eq!(m.get(1, 2), Some(6));
        assert_eq!(m.get(2, 0), None);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = IntMatrix::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_matrix_multiply() {
        let a = IntMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let b = IntMatrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
        let c = a.mul(&b).unwrap();
        assert_eq!(c.row(0), Some(&[19, 22][..]));
        assert_eq!(c.row(1), Some(&[43, 50][..]));
    }

    #[test]
    fn test_multiply_shape_mismatch() {
        let a = IntMatrix::zeros(2, 3);
        let b = IntMatrix::zeros(2, 3);
        assert!(a.mul(&b).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_multiply_overflow() {
        let a = IntMatrix::from_rows(vec![vec![i64::MAX, i64::MAX]]).unwrap();
        let b = IntMatrix::from_rows(vec![vec![1], vec![1]]).unwrap();
        assert!(a.mul(&b).is_err());
    }

    #[test]
    fn test_multiply_accumulator_overflow() {
        // Every term fits in i128 but the sum of the four does not.
        let a = IntMatrix::from_rows(vec![vec![i64::MIN; 4]]).unwrap();
        let b = IntMatrix::from_rows(vec![vec![i64::MIN]; 4]).unwrap();
        assert!(a.mul(&b).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_dot() {
        assert_eq!(dot(&[1, 2, 3], &[4, -5, 6]), Some(12));
        assert_eq!(dot(&[i64::MAX], &[i64::MAX]), Some(i128::from(i64::MAX).pow(2)));
        assert_eq!(dot(&[i64::MIN; 2], &[i64::MIN; 2]), None);
    }

    #[test]
    fn test_vector_gcd() {
        assert_eq!(vector_gcd(&[4, -6, 8]), 2);
        assert_eq!(vector_gcd(&[0, 0]), 0);
        assert_eq!(vector_gcd(&[-3]), 3);
        assert_eq!(vector_gcd(&[i64::MIN]), 1u64 << 63);
        assert_eq!(vector_gcd(&[i64::MIN, 6]), 2);
    }

    #[test]
    fn test_serde_revalidates_shape() {
        let m = IntMatrix::from_rows(vec![vec![1, -2], vec![0, 3]]).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[1,-2],[0,3]]");
        assert_eq!(serde_json::from_str::<IntMatrix>(&json).unwrap(), m);
        assert!(serde_json::from_str::<IntMatrix>("[[1,2],[3]]").is_err());
    }
}
