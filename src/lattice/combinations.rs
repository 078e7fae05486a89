//! Fixed-size subsets of a vector list.

use crate::utils::errors::{CrnError, CrnResult};
use std::iter::FusedIterator;

/// Lazy iterator over every `k`-subset of a slice.
///
/// Each subset keeps the source order of its items, and subsets come out
/// in lexicographic order of their index tuples.
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    done: bool,
}

impl<'a, T: Clone> Combinations<'a, T> {
    /// Create an iterator over all `k`-subsets of `items`.
    pub fn new(items: &'a [T], k: usize) -> CrnResult<Self> {
        if k > items.len() {
            return Err(CrnError::invalid(format!(
                "cannot choose {} items out of {}",
                k,
                items.len()
            )));
        }
        Ok(Self {
            items,
            indices: (0..k).collect(),
            done: false,
        })
    }

    /// Subset size.
    pub fn k(&self) -> usize {
        self.indices.len()
    }

    fn advance(&mut self) {
        let n = self.items.len();
        let k = self.indices.len();
        // Rightmost index that has not reached its final position.
        match (0..k).rev().find(|&i| self.indices[i] != i + n - k) {
            Some(i) => {
                self.indices[i] += 1;
                for j in (i + 1)..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.done = true,
        }
    }
}

impl<'a, T: Clone> Iterator for Combinations<'a, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        let subset = self.indices.iter().map(|&i| self.items[i].clone()).collect();
        self.advance();
        Some(subset)
    }
}

impl<'a, T: Clone> FusedIterator for Combinations<'a, T> {}

/// All `k`-subsets of `items`.
pub fn combinations<T: Clone>(items: &[T], k: usize) -> CrnResult<Vec<Vec<T>>> {
    Ok(Combinations::new(items, k)?.collect())
}

/// Binomial coefficient `C(n, k)`, or `None` if it does not fit in `u64`.
pub fn binomial(n: usize, k: usize) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // acc * (n - i) is always divisible by i + 1 at this point
        acc = acc.checked_mul((n - i) as u128)? / (i as u128 + 1);
    }
    u64::try_from(acc).ok()
}
