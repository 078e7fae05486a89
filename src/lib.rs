//! # crnmono - Cone monotonicity screening for reaction networks
//!
//! Tools for screening candidate sign vectors against a polyhedral cone `K`
//! and its dual `K*`, as used when studying monotonicity of chemical
//! reaction network dynamics:
//! - Odometer enumeration of small integer lattices
//! - Fixed-size combinations of lattice vectors
//! - Primitivity test to discard scalar multiples
//! - The cone/dual sign-alternation test
//! - A driver tying these together, optionally in parallel
//!
//! ## Architecture
//!
//! ```text
//! Lattice enumeration → Zero / reducedness filter → Cone check → Report
//! ```
//!
//! ## Example
//!
//! ```
//! use crnmono::prelude::*;
//!
//! let k = IntMatrix::from_rows(vec![
//!     vec![0, 0, 1, 1],
//!     vec![0, 1, 0, -1],
//!     vec![1, 0, -1, 0],
//! ])?;
//! let ks = IntMatrix::from_rows(vec![
//!     vec![1, 1, 1],
//!     vec![1, 1, 0],
//!     vec![1, 0, 1],
//!     vec![1, 0, 0],
//! ])?;
//!
//! assert!(cone_compatible(&k, &ks, &[2, -2, -2], 3, 4, 4)?);
//! assert!(is_not_reduced(&[2, -2, -2])?);
//! # Ok::<(), CrnError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cone;
pub mod lattice;
pub mod search;
pub mod utils;

pub use utils::errors::{CrnError, CrnResult};

// Re-export commonly used types
pub mod prelude {
    //! Convenient re-exports of commonly used types and functions.

    pub use crate::cone::{cone_compatible, Cone, Violation};
    pub use crate::lattice::{
        combinations, enumerate_vectors, generate_vector_sets, generate_vectors,
        increment_vector, is_not_reduced, is_reduced, primitive_vector, Combinations,
        VectorEnumerator,
    };
    pub use crate::search::{ConeSearch, Screening, SearchConfig, SearchReport};
    pub use crate::utils::errors::*;
    pub use crate::utils::matrix::IntMatrix;
}

use anyhow::{Context, Result};

/// Screen a cone given as literal rows of `K` (`d × q`) and of the
/// transposed dual `Ks` (`p × d`).
pub fn screen_cone(
    generators: Vec<Vec<i64>>,
    dual: Vec<Vec<i64>>,
    config: search::SearchConfig,
) -> Result<search::SearchReport> {
    let k = utils::IntMatrix::from_rows(generators).context("Invalid cone matrix K")?;
    let ks = utils::IntMatrix::from_rows(dual).context("Invalid dual matrix Ks")?;
    let cone = cone::Cone::new(k, ks).context("Inconsistent cone and dual")?;
    let search = search::ConeSearch::new(cone, config).context("Invalid search configuration")?;
    search.run().context("Screening failed")
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_screen_cone_context() {
        let err = screen_cone(vec![vec![1, 0], vec![1]], vec![vec![1, 1]], Default::default())
            .unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid cone matrix K"));
        assert!(err.downcast_ref::<CrnError>().is_some());
    }
}
