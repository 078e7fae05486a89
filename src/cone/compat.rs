//! The sign-alternation test between a cone and its dual.
//!
//! For every pair of a dual generator `Ks[i]` and a primal generator
//! `K[:, j]` that are orthogonal (`(Ks·K)[i][j] == 0`), a candidate vector
//! `s` violates the condition if some coordinate `l` gives
//!
//! ```text
//! dot(Ks[i], s) * s[l] * K[l][j] > 0
//! ```
//!
//! The scan visits `i`, then `j`, then `l` in increasing order and stops at
//! the first violating triple. The verdict itself does not depend on the
//! order.

use crate::utils::errors::{CrnError, CrnResult};
use crate::utils::matrix::{dot, IntMatrix};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The first violating triple found for a vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Violation {
    /// Row `i` of the transposed dual
    pub dual_row: usize,
    /// Column `j` of the primal cone
    pub primal_col: usize,
    /// Coordinate `l` of the candidate vector
    pub coordinate: usize,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dual generator {} / primal generator {} at coordinate {}",
            self.dual_row, self.primal_col, self.coordinate
        )
    }
}

/// Whether `s` passes the test for the cone `K` (`d × q`) with transposed
/// dual `Ks` (`p × d`).
///
/// The dimensions are checked against the matrices and the vector; any
/// mismatch, or a zero dimension, is an `InvalidArgument` error.
pub fn cone_compatible(
    k: &IntMatrix,
    ks: &IntMatrix,
    s: &[i64],
    d: usize,
    p: usize,
    q: usize,
) -> CrnResult<bool> {
    check_dimensions(k, ks, d, p, q)?;
    check_vector(s, d)?;
    let product = ks.mul(k)?;
    Ok(first_violation(k, ks, s, orthogonal_pairs(&product))?.is_none())
}

/// Validate `K` as `d × q` and `Ks` as `p × d`, all dimensions positive.
pub(crate) fn check_dimensions(
    k: &IntMatrix,
    ks: &IntMatrix,
    d: usize,
    p: usize,
    q: usize,
) -> CrnResult<()> {
    if d == 0 || p == 0 || q == 0 {
        return Err(CrnError::invalid(format!(
            "dimensions must be positive, got d={}, p={}, q={}",
            d, p, q
        )));
    }
    if k.shape() != (d, q) {
        return Err(CrnError::invalid(format!(
            "K is {}x{}, expected {}x{}",
            k.nrows(),
            k.ncols(),
            d,
            q
        )));
    }
    if ks.shape() != (p, d) {
        return Err(CrnError::invalid(format!(
            "Ks is {}x{}, expected {}x{}",
            ks.nrows(),
            ks.ncols(),
            p,
            d
        )));
    }
    Ok(())
}

pub(crate) fn check_vector(s: &[i64], d: usize) -> CrnResult<()> {
    if s.len() != d {
        return Err(CrnError::invalid(format!(
            "vector has length {}, expected {}",
            s.len(),
            d
        )));
    }
    Ok(())
}

/// Positions of the zero entries of `Ks·K`, in row-major order.
pub(crate) fn orthogonal_pairs(product: &IntMatrix) -> impl Iterator<Item = (usize, usize)> + '_ {
    product.iter_rows().enumerate().flat_map(|(i, row)| {
        row.iter()
            .enumerate()
            .filter(|(_, &v)| v == 0)
            .map(move |(j, _)| (i, j))
    })
}

/// Scan the given orthogonal pairs, which must be in row-major order.
///
/// Only signs matter, so the triple product is never formed. The dot
/// product `Ks[i]·s` is exact; if it does not fit in `i128` the result is an
/// `InvalidArgument` error.
pub(crate) fn first_violation(
    k: &IntMatrix,
    ks: &IntMatrix,
    s: &[i64],
    pairs: impl IntoIterator<Item = (usize, usize)>,
) -> CrnResult<Option<Violation>> {
    // dot(Ks[i], s) only depends on i, so it is cached per row.
    let mut cached: Option<(usize, i64)> = None;
    for (i, j) in pairs {
        let sigma = match cached {
            Some((row, sign)) if row == i => sign,
            _ => {
                let sign = row_sign(ks, i, s)?;
                cached = Some((i, sign));
                sign
            }
        };
        if sigma == 0 {
            continue;
        }
        for (l, &sl) in s.iter().enumerate() {
            let klj = k.get(l, j).unwrap_or(0);
            if sigma * sl.signum() * klj.signum() > 0 {
                return Ok(Some(Violation {
                    dual_row: i,
                    primal_col: j,
                    coordinate: l,
                }));
            }
        }
    }
    Ok(None)
}

fn row_sign(ks: &IntMatrix, i: usize, s: &[i64]) -> CrnResult<i64> {
    let row = ks.row(i).unwrap_or(&[]);
    let value = dot(row, s).ok_or_else(|| {
        CrnError::invalid(format!("dot product of dual row {} with {:?} overflows", i, s))
    })?;
    Ok(value.signum() as i64)
}
