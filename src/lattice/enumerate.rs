//! Odometer enumeration of bounded lattice vectors.
//!
//! Vectors are produced with coordinate 0 varying fastest, so for a
//! 2-dimensional binary lattice the order is
//! `[0,0], [1,0], [0,1], [1,1]`. Read from the last coordinate to the
//! first, the sequence is strictly increasing.

use super::LatticeScalar;
use crate::utils::errors::{CrnError, CrnResult};
use std::iter::FusedIterator;

/// Lazy enumerator over every vector whose coordinates lie in
/// `{offset, offset + step, ...}` without exceeding `limit`.
#[derive(Debug, Clone)]
pub struct VectorEnumerator<T> {
    /// The next vector to yield, `None` once exhausted
    current: Option<Vec<T>>,
    limit: T,
    offset: T,
    step: T,
}

impl<T: LatticeScalar> VectorEnumerator<T> {
    /// Enumerate from the all-`offset` vector.
    pub fn new(dimension: usize, limit: T, offset: T, step: T) -> CrnResult<Self> {
        if dimension == 0 {
            return Err(CrnError::invalid("dimension must be positive"));
        }
        Self::from_seed(vec![offset; dimension], limit, offset, step)
    }

    /// Enumerate from an arbitrary seed, which is yielded first.
    pub fn from_seed(seed: Vec<T>, limit: T, offset: T, step: T) -> CrnResult<Self> {
        if seed.is_empty() {
            return Err(CrnError::invalid("seed vector is empty"));
        }
        check_step(step)?;
        check_bounds(&seed, limit, offset)?;
        Ok(Self {
            current: Some(seed),
            limit,
            offset,
            step,
        })
    }

    /// Inclusive upper bound per coordinate.
    pub fn limit(&self) -> T {
        self.limit
    }

    /// Inclusive lower bound per coordinate.
    pub fn offset(&self) -> T {
        self.offset
    }

    /// Increment size.
    pub fn step(&self) -> T {
        self.step
    }
}

impl<T: LatticeScalar> Iterator for VectorEnumerator<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        let out = self.current.take()?;
        let mut next = out.clone();
        if advance(&mut next, self.limit, self.offset, self.step) {
            self.current = Some(next);
        }
        Some(out)
    }
}

impl<T: LatticeScalar> FusedIterator for VectorEnumerator<T> {}

/// Advance `vector` to its successor in place.
///
/// Returns `false` when every coordinate is already maximal; the vector
/// then rolls over to all-`offset`, like an odometer. Every coordinate
/// must lie in `[offset, limit]` or the call fails with `OutOfRange`.
pub fn increment_vector<T: LatticeScalar>(
    vector: &mut [T],
    limit: T,
    offset: T,
    step: T,
) -> CrnResult<bool> {
    check_step(step)?;
    check_bounds(vector, limit, offset)?;
    Ok(advance(vector, limit, offset, step))
}

/// All vectors of `dimension` coordinates in `[offset, limit]`, in
/// enumeration order.
pub fn enumerate_vectors<T: LatticeScalar>(
    dimension: usize,
    limit: T,
    offset: T,
    step: T,
) -> CrnResult<Vec<Vec<T>>> {
    Ok(VectorEnumerator::new(dimension, limit, offset, step)?.collect())
}

/// Same as [`enumerate_vectors`] with the range given by its width:
/// coordinates run over `[offset, base + offset]`.
///
/// `generate_vectors(3, 3, -1, 1)` yields every `{-1, 0, 1, 2}`-vector
/// in three dimensions.
pub fn generate_vectors<T: LatticeScalar>(
    dimension: usize,
    base: T,
    offset: T,
    step: T,
) -> CrnResult<Vec<Vec<T>>> {
    let limit = base.checked_add(&offset).ok_or_else(|| {
        CrnError::invalid(format!("base {} + offset {} overflows", base, offset))
    })?;
    enumerate_vectors(dimension, limit, offset, step)
}

/// Odometer step without bounds validation. Amortized O(1): coordinate `i`
/// is reached only after every coordinate before it rolled over.
///
/// A coordinate whose successor overflows `T` is already maximal.
fn advance<T: LatticeScalar>(vector: &mut [T], limit: T, offset: T, step: T) -> bool {
    for value in vector.iter_mut() {
        match value.checked_add(&step) {
            Some(next) if next <= limit => {
                *value = next;
                return true;
            }
            _ => *value = offset,
        }
    }
    false
}

fn check_step<T: LatticeScalar>(step: T) -> CrnResult<()> {
    if step > T::zero() {
        Ok(())
    } else {
        Err(CrnError::invalid(format!("step must be positive, got {}", step)))
    }
}

fn check_bounds<T: LatticeScalar>(vector: &[T], limit: T, offset: T) -> CrnResult<()> {
    // Written so that incomparable values (NaN) are rejected too.
    match vector.iter().find(|&&v| !(offset <= v && v <= limit)) {
        Some(&v) => Err(CrnError::out_of_range(v, offset, limit)),
        None => Ok(()),
    }
}
