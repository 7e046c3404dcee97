//! Permutation-table noise data
//!
//! Plain data only. Sampling lives in noise_operations.rs.

use crate::constants::core::PERMUTATION_SIZE;

/// Seeded 1D pseudo-gradient noise source.
///
/// `permutation` holds a shuffle of `0..256` followed by a second copy of the
/// same shuffle, so `permutation[xi + 1]` is valid for every `xi < 256`.
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationNoise1D {
    pub seed: u64,
    pub permutation: Vec<u8>,
}

impl PermutationNoise1D {
    /// Length of the doubled table
    pub const TABLE_LEN: usize = PERMUTATION_SIZE * 2;
}
