//! Utility modules shared by the rest of the crate.
//!
//! - Error types
//! - Integer matrix operations

pub mod errors;
pub mod matrix;

// Re-exports
pub use errors::*;
pub use matrix::{dot, vector_gcd, IntMatrix};
