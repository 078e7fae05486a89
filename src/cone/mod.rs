//! Cones and their duals.
//!
//! A [`Cone`] pairs the generators of a polyhedral cone `K` (as columns of
//! a `d × q` matrix) with the generators of its dual `K*` (as rows of a
//! `p × d` matrix). The product `Ks·K` and its zero pattern are computed
//! once, so screening many candidate vectors against the same cone only
//! pays for the sign scan.

pub mod compat;

pub use compat::{cone_compatible, Violation};

use crate::utils::errors::CrnResult;
use crate::utils::matrix::IntMatrix;
use log::{debug, warn};

/// A cone `K` together with its transposed dual `Ks`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cone {
    generators: IntMatrix,
    dual: IntMatrix,
    product: IntMatrix,
    orthogonal: Vec<(usize, usize)>,
}

impl Cone {
    /// Build a cone from `K` (`d × q`) and `Ks` (`p × d`).
    pub fn new(generators: IntMatrix, dual: IntMatrix) -> CrnResult<Self> {
        let (d, q) = generators.shape();
        let p = dual.nrows();
        Self::with_dimensions(generators, dual, d, p, q)
    }

    /// Build a cone, checking the matrices against explicit dimensions.
    pub fn with_dimensions(
        generators: IntMatrix,
        dual: IntMatrix,
        d: usize,
        p: usize,
        q: usize,
    ) -> CrnResult<Self> {
        compat::check_dimensions(&generators, &dual, d, p, q)?;
        let product = dual.mul(&generators)?;
        let orthogonal: Vec<_> = compat::orthogonal_pairs(&product).collect();

        debug!(
            "cone: d={}, q={} generators, p={} dual generators, {} orthogonal pairs",
            d,
            q,
            p,
            orthogonal.len()
        );
        if !product.is_nonnegative() {
            warn!("Ks·K has negative entries; Ks does not generate the dual of K");
        }

        Ok(Self {
            generators,
            dual,
            product,
            orthogonal,
        })
    }

    /// Build a cone from literal rows of `K` and `Ks`.
    pub fn from_rows(generators: Vec<Vec<i64>>, dual: Vec<Vec<i64>>) -> CrnResult<Self> {
        Self::new(IntMatrix::from_rows(generators)?, IntMatrix::from_rows(dual)?)
    }

    /// Ambient dimension `d`.
    pub fn dimension(&self) -> usize {
        self.generators.nrows()
    }

    /// Number of primal generators `q`.
    pub fn generator_count(&self) -> usize {
        self.generators.ncols()
    }

    /// Number of dual generators `p`.
    pub fn dual_count(&self) -> usize {
        self.dual.nrows()
    }

    /// `K`, generators as columns.
    pub fn generators(&self) -> &IntMatrix {
        &self.generators
    }

    /// `Ks`, dual generators as rows.
    pub fn dual(&self) -> &IntMatrix {
        &self.dual
    }

    /// `Ks·K`.
    pub fn product(&self) -> &IntMatrix {
        &self.product
    }

    /// Zero entries of `Ks·K` in row-major order.
    pub fn orthogonal_pairs(&self) -> &[(usize, usize)] {
        &self.orthogonal
    }

    /// Whether `Ks·K` is entrywise non-negative, as it must be when `Ks`
    /// generates the dual of `K`.
    pub fn is_dual_pair(&self) -> bool {
        self.product.is_nonnegative()
    }

    /// Whether `s` passes the sign-alternation test.
    pub fn is_compatible(&self, s: &[i64]) -> CrnResult<bool> {
        Ok(self.find_violation(s)?.is_none())
    }

    /// The first violating triple for `s`, if any.
    pub fn find_violation(&self, s: &[i64]) -> CrnResult<Option<Violation>> {
        compat::check_vector(s, self.dimension())?;
        compat::first_violation(
            &self.generators,
            &self.dual,
            s,
            self.orthogonal.iter().copied(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_cone() -> Cone {
        Cone::from_rows(
            vec![vec![0, 0, 1, 1], vec![0, 1, 0, -1], vec![1, 0, -1, 0]],
            vec![vec![1, 1, 1], vec![1, 1, 0], vec![1, 0, 1], vec![1, 0, 0]],
        )
        .unwrap()
    }

    #[test]
    fn test_cone_shape() {
        let cone = example_cone();
        assert_eq!(cone.dimension(), 3);
        assert_eq!(cone.generator_count(), 4);
        assert_eq!(cone.dual_count(), 4);
        assert!(cone.is_dual_pair());
        assert_eq!(
            cone.orthogonal_pairs(),
            &[(0, 2), (0, 3), (1, 0), (1, 3), (2, 1), (2, 2), (3, 0), (3, 1)]
        );
    }

    #[test]
    fn test_matches_free_function() {
        let cone = example_cone();
        for s in crate::lattice::enumerate_vectors(3, 1i64, -1, 1).unwrap() {
            assert_eq!(
                cone.is_compatible(&s).unwrap(),
                cone_compatible(cone.generators(), cone.dual(), &s, 3, 4, 4).unwrap()
            );
        }
    }

    #[test]
    fn test_find_violation() {
        let cone = example_cone();
        assert_eq!(cone.find_violation(&[2, -2, -2]).unwrap(), None);
        let v = cone.find_violation(&[1, 1, 0]).unwrap().unwrap();
        assert_eq!((v.dual_row, v.primal_col, v.coordinate), (0, 2, 0));
    }

    #[test]
    fn test_wrong_vector_length() {
        let cone = example_cone();
        assert!(cone.is_compatible(&[1, 0]).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_mismatched_matrices() {
        let err = Cone::from_rows(vec![vec![1, 0], vec![0, 1]], vec![vec![1, 0, 0]]).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(Cone::from_rows(vec![], vec![]).is_err());
    }

    #[test]
    fn test_not_a_dual_pair() {
        let cone = Cone::from_rows(vec![vec![1, 0], vec![0, 1]], vec![vec![1, -1]]).unwrap();
        assert!(!cone.is_dual_pair());
    }
}
