//! Exhaustive screening of candidate vectors against a cone.
//!
//! The driver composes the rest of the crate:
//!
//! 1. Enumerate the lattice `[offset, base + offset]^d` for the cone's
//!    ambient dimension `d`
//! 2. Drop the zero vector, and non-reduced vectors when configured
//! 3. Run the sign-alternation test on what is left
//!
//! # Example
//!
//! ```
//! use crnmono::cone::Cone;
//! use crnmono::search::{ConeSearch, SearchConfig};
//!
//! let cone = Cone::from_rows(
//!     vec![vec![0, 0, 1, 1], vec![0, 1, 0, -1], vec![1, 0, -1, 0]],
//!     vec![vec![1, 1, 1], vec![1, 1, 0], vec![1, 0, 1], vec![1, 0, 0]],
//! )?;
//! let report = ConeSearch::new(cone, SearchConfig::signs())?.run()?;
//! assert_eq!(report.examined, 27);
//! # Ok::<(), crnmono::CrnError>(())
//! ```
//!
//! Every check is a pure function of its inputs, so with
//! `parallel` set in [`SearchConfig`] the candidates are checked on the rayon
//! thread pool. The report keeps candidate order either way.

mod config;
mod report;

pub use config::SearchConfig;
pub use report::{SearchReport, Screening, ViolatingVector};

use crate::cone::Cone;
use crate::lattice::{is_not_reduced, VectorEnumerator};
use crate::utils::errors::CrnResult;
use log::{debug, info, trace};
use rayon::prelude::*;

/// A cone paired with the lattice of candidates to screen against it.
#[derive(Debug, Clone)]
pub struct ConeSearch {
    cone: Cone,
    config: SearchConfig,
}

impl ConeSearch {
    /// Create a search; fails if the configuration is invalid.
    pub fn new(cone: Cone, config: SearchConfig) -> CrnResult<Self> {
        config.validate()?;
        Ok(Self { cone, config })
    }

    /// The cone under study.
    pub fn cone(&self) -> &Cone {
        &self.cone
    }

    /// The search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Lazy iterator over the configured lattice.
    pub fn candidates(&self) -> CrnResult<VectorEnumerator<i64>> {
        VectorEnumerator::new(
            self.cone.dimension(),
            self.config.limit()?,
            self.config.offset,
            self.config.step,
        )
    }

    /// Screen every vector of the configured lattice.
    pub fn run(&self) -> CrnResult<SearchReport> {
        info!(
            "Screening {}-dimensional lattice [{}, {}] step {}",
            self.cone.dimension(),
            self.config.offset,
            self.config.limit()?,
            self.config.step
        );
        let report = self.screen(self.candidates()?)?;
        info!(
            "Screened {} candidates: {} compatible, {} violations",
            report.examined,
            report.passed(),
            report.failed()
        );
        Ok(report)
    }

    /// Screen caller-supplied candidates.
    pub fn screen<I>(&self, candidates: I) -> CrnResult<SearchReport>
    where
        I: IntoIterator<Item = Vec<i64>>,
    {
        let mut report = SearchReport::new();
        if self.config.parallel {
            let candidates: Vec<Vec<i64>> = candidates.into_iter().collect();
            debug!("Checking {} candidates in parallel", candidates.len());
            let outcomes = candidates
                .par_iter()
                .map(|s| self.classify(s))
                .collect::<CrnResult<Vec<_>>>()?;
            for (s, outcome) in candidates.into_iter().zip(outcomes) {
                report.record(s, outcome);
            }
        } else {
            for s in candidates {
                let outcome = self.classify(&s)?;
                report.record(s, outcome);
            }
        }
        Ok(report)
    }

    /// Classify a single candidate.
    pub fn classify(&self, s: &[i64]) -> CrnResult<Screening> {
        if s.iter().all(|&v| v == 0) {
            // The length is still validated.
            self.cone.find_violation(s)?;
            return Ok(Screening::Zero);
        }
        if self.config.reduced_only && is_not_reduced(s)? {
            return Ok(Screening::Unreduced);
        }
        match self.cone.find_violation(s)? {
            Some(violation) => {
                trace!("{:?} violates at {}", s, violation);
                Ok(Screening::Violated(violation))
            }
            None => Ok(Screening::Compatible),
        }
    }
}
