//! Search configuration

use crate::utils::errors::{CrnError, CrnResult};
use serde::{Deserialize, Serialize};

/// Configuration for screening a cone against a lattice of candidates.
///
/// Candidates are the integer vectors with coordinates in
/// `{offset, offset + step, ...}` up to `base + offset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Width of the coordinate range
    pub base: i64,

    /// Smallest coordinate value
    pub offset: i64,

    /// Increment between coordinate values
    pub step: i64,

    /// Skip vectors that are scalar multiples of smaller integer vectors
    pub reduced_only: bool,

    /// Check candidates on the rayon thread pool
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base: 2,
            offset: -1,
            step: 1,
            reduced_only: true,
            parallel: false,
        }
    }
}

impl SearchConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign vectors: coordinates in `{-1, 0, 1}`
    pub fn signs() -> Self {
        Self::default()
    }

    /// Binary vectors: coordinates in `{0, 1}`
    pub fn binary() -> Self {
        Self {
            base: 1,
            offset: 0,
            ..Default::default()
        }
    }

    /// Set the width of the coordinate range
    pub fn base(mut self, base: i64) -> Self {
        self.base = base;
        self
    }

    /// Set the smallest coordinate value
    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    /// Set the step size
    pub fn step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }

    /// Enable/disable skipping of non-reduced vectors
    pub fn reduced_only(mut self, v: bool) -> Self {
        self.reduced_only = v;
        self
    }

    /// Enable/disable parallel checking
    pub fn parallel(mut self, v: bool) -> Self {
        self.parallel = v;
        self
    }

    /// Largest coordinate value, `base + offset`.
    pub fn limit(&self) -> CrnResult<i64> {
        self.base
            .checked_add(self.offset)
            .ok_or_else(|| CrnError::invalid("base + offset overflows i64"))
    }

    /// Validate the configuration
    pub fn validate(&self) -> CrnResult<()> {
        if self.base < 0 {
            return Err(CrnError::invalid(format!(
                "base must be non-negative, got {}",
                self.base
            )));
        }
        if self.step <= 0 {
            return Err(CrnError::invalid(format!(
                "step must be positive, got {}",
                self.step
            )));
        }
        self.limit().map(|_| ())
    }
}
