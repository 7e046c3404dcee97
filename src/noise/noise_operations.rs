//! Noise operations - building and sampling the 1D generator

use super::noise_data::PermutationNoise1D;
use crate::constants::core::PERMUTATION_SIZE;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// CONSTRUCTION
// ============================================================================

/// Build a generator for `seed`.
///
/// The table is a Fisher-Yates shuffle (`SliceRandom::shuffle`) of `0..256`
/// driven by `ChaCha8Rng::seed_from_u64(seed)`, then doubled. ChaCha8 has a
/// stable output stream, so the same seed yields the same table everywhere.
pub fn create_noise(seed: u64) -> PermutationNoise1D {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut noise = create_noise_from_rng(&mut rng);
    noise.seed = seed;
    noise
}

/// Build a generator from an already-seeded RNG. `seed` is left at 0.
pub fn create_noise_from_rng<R: Rng + ?Sized>(rng: &mut R) -> PermutationNoise1D {
    let mut base: Vec<u8> = (0..PERMUTATION_SIZE).map(|i| i as u8).collect();
    base.shuffle(rng);

    let mut permutation = Vec::with_capacity(PermutationNoise1D::TABLE_LEN);
    permutation.extend_from_slice(&base);
    permutation.extend_from_slice(&base);

    log::trace!(
        "[create_noise_from_rng] Built permutation table, head={:?}",
        &permutation[..4]
    );

    PermutationNoise1D {
        seed: 0,
        permutation,
    }
}

// ============================================================================
// SAMPLING
// ============================================================================

/// Quintic smoothstep `t^3 (t (6t - 15) + 10)`
#[inline]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Pseudo-gradient for a lattice hash, scaled by the offset `x`.
///
/// The low 4 bits pick a magnitude in 1..=8 (bits 0-2) and a sign (bit 3).
#[inline]
pub fn gradient(hash: u8, x: f64) -> f64 {
    let h = hash & 15;
    let magnitude = f64::from(1 + (h & 7));
    let grad = if h & 8 != 0 { -magnitude } else { magnitude };
    grad * x
}

/// Sample the generator at `x`.
///
/// Deterministic for a given table. The raw gradient products can reach
/// `±8 * 0.5`, so the interpolated value is clamped into `[-1, 1]`.
pub fn sample(noise: &PermutationNoise1D, x: f64) -> f64 {
    if !x.is_finite() {
        return 0.0;
    }

    let floor = x.floor();
    let xi = (floor as i64).rem_euclid(PERMUTATION_SIZE as i64) as usize;
    let xf = x - floor;

    let u = fade(xf);

    let a = noise.permutation[xi];
    let b = noise.permutation[xi + 1];

    lerp(gradient(a, xf), gradient(b, xf - 1.0), u).clamp(-1.0, 1.0)
}

impl ::noise::NoiseFn<f64, 1> for PermutationNoise1D {
    fn get(&self, point: [f64; 1]) -> f64 {
        sample(self, point[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::noise::NoiseFn;

    #[test]
    fn test_table_is_doubled_permutation() {
        let noise = create_noise(42);
        assert_eq!(noise.permutation.len(), 512);
        assert_eq!(noise.permutation[..256], noise.permutation[256..]);

        let mut sorted = noise.permutation[..256].to_vec();
        sorted.sort_unstable();
        let expected: Vec<u8> = (0..=255).collect();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_same_seed_same_table() {
        assert_eq!(create_noise(7), create_noise(7));
        assert_ne!(create_noise(7).permutation, create_noise(8).permutation);
    }

    #[test]
    fn test_noise_is_zero_on_lattice_points() {
        let noise = create_noise(1234);
        for i in -300..300 {
            assert_eq!(sample(&noise, i as f64), 0.0);
        }
    }

    #[test]
    fn test_noise_bounds() {
        let noise = create_noise(99);
        let mut x = -700.0;
        while x < 700.0 {
            let v = sample(&noise, x);
            assert!((-1.0..=1.0).contains(&v), "noise({}) = {}", x, v);
            x += 0.037;
        }
    }

    #[test]
    fn test_fade_endpoints() {
        assert_eq!(fade(0.0), 0.0);
        assert_eq!(fade(1.0), 1.0);
        assert!((fade(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_gradient_sign_and_magnitude() {
        assert_eq!(gradient(0, 1.0), 1.0);
        assert_eq!(gradient(7, 1.0), 8.0);
        assert_eq!(gradient(8, 1.0), -1.0);
        assert_eq!(gradient(15, 0.5), -4.0);
        // only the low nibble matters
        assert_eq!(gradient(0x17, 1.0), gradient(0x07, 1.0));
    }

    #[test]
    fn test_negative_inputs_wrap() {
        let noise = create_noise(5);
        assert_eq!(sample(&noise, -0.25), sample(&noise, 255.75));
    }

    #[test]
    fn test_noise_fn_matches_sample() {
        let noise = create_noise(3);
        assert_eq!(noise.get([2.5]), sample(&noise, 2.5));
    }

    #[test]
    fn test_non_finite_input() {
        let noise = create_noise(3);
        assert_eq!(sample(&noise, f64::NAN), 0.0);
        assert_eq!(sample(&noise, f64::INFINITY), 0.0);
    }
}
