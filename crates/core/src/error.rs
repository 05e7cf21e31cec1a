//! Error types for grid construction.

use derive_more::{Display, Error};

/// Largest side length whose labels fit in a `u16`.
pub const MAX_GRID_SIZE: usize = 256;

/// Rejected grid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// Side length outside `min..=max`.
    #[display("invalid grid size {size}: side length must be between {min} and {max}")]
    InvalidSize { size: usize, min: usize, max: usize },

    /// Explicit values are not each of `0..expected` exactly once.
    #[display("grid values are not a permutation of 0..{expected}")]
    NotAPermutation { expected: usize },
}

impl GridError {
    pub(crate) fn invalid_size(size: usize) -> Self {
        GridError::InvalidSize {
            size,
            min: slide15_types::MIN_SIZE,
            max: MAX_GRID_SIZE,
        }
    }
}
