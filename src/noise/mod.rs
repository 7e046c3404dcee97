/// Noise Module - 1D coherent noise for terrain heightmaps
///
/// - noise_data.rs: the permutation table
/// - noise_operations.rs: construction and sampling functions

pub mod noise_data;
pub mod noise_operations;

pub use noise_data::PermutationNoise1D;

pub use noise_operations::{
    // Construction
    create_noise,
    create_noise_from_rng,

    // Sampling
    sample,
    fade,
    gradient,
    lerp,
};
