//! Search-space generation over small integer lattices.
//!
//! This module provides:
//! - Odometer enumeration of bounded lattice vectors
//! - Fixed-size combinations of those vectors
//! - The primitivity (reducedness) test used to drop scalar multiples

pub mod enumerate;
pub mod combinations;
pub mod reduced;

pub use enumerate::{enumerate_vectors, generate_vectors, increment_vector, VectorEnumerator};
pub use combinations::{binomial, combinations, Combinations};
pub use reduced::{is_not_reduced, is_reduced, primitive_vector};

use crate::utils::errors::CrnResult;
use num_traits::{CheckedAdd, Num};
use std::fmt::Display;

/// Coordinate type of an enumerated lattice: machine integers or exact
/// rationals. Steps are overflow-checked, so floats are not accepted.
pub trait LatticeScalar: Num + CheckedAdd + Copy + PartialOrd + Display {}

impl<T: Num + CheckedAdd + Copy + PartialOrd + Display> LatticeScalar for T {}

/// Every set of `k` distinct vectors drawn from the lattice
/// `[offset, base + offset]^dimension`.
pub fn generate_vector_sets<T: LatticeScalar>(
    dimension: usize,
    base: T,
    offset: T,
    step: T,
    k: usize,
) -> CrnResult<Vec<Vec<Vec<T>>>> {
    let vectors = generate_vectors(dimension, base, offset, step)?;
    combinations(&vectors, k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_sets_of_binary_plane() {
        let sets = generate_vector_sets(2, 1, 0, 1, 4).unwrap();
        assert_eq!(sets, vec![vec![vec![0, 0], vec![1, 0], vec![0, 1], vec![1, 1]]]);

        let pairs = generate_vector_sets(2, 1, 0, 1, 2).unwrap();
        assert_eq!(pairs.len(), 6);
        assert_eq!(pairs[0], vec![vec![0, 0], vec![1, 0]]);
    }

    #[test]
    fn test_vector_sets_too_large() {
        assert!(generate_vector_sets(2, 1, 0, 1, 5).is_err());
    }
}
