//! Primitivity of integer vectors.
//!
//! A vector is reduced (primitive) when its coordinates share no integer
//! factor greater than one. Testing every candidate divisor in
//! `2..=max|s_k|` is equivalent to asking whether the gcd exceeds one,
//! which is what is computed here.

use crate::utils::errors::{CrnError, CrnResult};
use crate::utils::matrix::vector_gcd;

/// Whether `s` is a non-trivial multiple of a smaller integer vector.
///
/// Fails with `InvalidArgument` on the empty or zero vector, which has no
/// meaningful primitivity.
pub fn is_not_reduced(s: &[i64]) -> CrnResult<bool> {
    Ok(nonzero_gcd(s)? > 1)
}

/// Negation of [`is_not_reduced`].
pub fn is_reduced(s: &[i64]) -> CrnResult<bool> {
    Ok(nonzero_gcd(s)? == 1)
}

/// Divide `s` by the gcd of its coordinates.
pub fn primitive_vector(s: &[i64]) -> CrnResult<Vec<i64>> {
    let g = nonzero_gcd(s)?;
    match i64::try_from(g) {
        Ok(g) => Ok(s.iter().map(|&v| v / g).collect()),
        // A gcd of 2^63 leaves only 0 and i64::MIN as coordinates.
        Err(_) => Ok(s.iter().map(|&v| v.signum()).collect()),
    }
}

fn nonzero_gcd(s: &[i64]) -> CrnResult<u64> {
    if s.is_empty() {
        return Err(CrnError::invalid("vector is empty"));
    }
    match vector_gcd(s) {
        0 => Err(CrnError::invalid("zero vector has no primitive form")),
        g => Ok(g),
    }
}
