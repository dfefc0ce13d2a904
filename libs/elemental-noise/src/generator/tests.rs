//! # Value Noise Tests
//!
//! Tests for white noise, per-octave smoothing, and octave blending.

use super::*;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_white(width: usize, height: usize, seed: u64) -> NoiseField {
    let mut rng = StdRng::seed_from_u64(seed);
    white_noise(width, height, &mut rng).unwrap()
}

// =============================================================================
// WHITE NOISE
// =============================================================================

#[test]
fn test_white_noise_is_binary() {
    let field = seeded_white(16, 9, 3);
    assert_eq!(field.values().len(), 16 * 9);
    assert!(field.values().iter().all(|&v| v == 0.0 || v == 1.0));
}

#[test]
fn test_white_noise_uses_both_values() {
    let field = seeded_white(32, 32, 11);
    assert_eq!(field.min_value(), 0.0);
    assert_eq!(field.max_value(), 1.0);
}

#[test]
fn test_white_noise_rejects_empty() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(white_noise(0, 4, &mut rng).is_err());
    assert!(white_noise(4, 0, &mut rng).is_err());
}

// =============================================================================
// SMOOTH NOISE
// =============================================================================

#[test]
fn test_smooth_octave_zero_is_identity() {
    let base = seeded_white(8, 8, 5);
    let smooth = smooth_noise(&base, 0).unwrap();
    assert_eq!(smooth, base);
}

#[test]
fn test_smooth_keeps_block_corners() {
    let base = seeded_white(8, 8, 5);
    let smooth = smooth_noise(&base, 2).unwrap();
    for y in (0..8).step_by(4) {
        for x in (0..8).step_by(4) {
            assert_eq!(smooth.get(x, y), base.get(x, y));
        }
    }
}

#[test]
fn test_smooth_wraps_horizontally() {
    let base = NoiseField::from_values(4, 1, vec![1.0, 0.0, 0.0, 0.0]).unwrap();
    let smooth = smooth_noise(&base, 1).unwrap();
    // Cell 3 blends cell 2 with cell 0 across the edge
    assert_eq!(smooth.get(3, 0), 0.5);
    assert_eq!(smooth.get(1, 0), 0.5);
}

#[test]
fn test_smooth_wraps_vertically() {
    let base = NoiseField::from_values(1, 4, vec![0.0, 0.0, 1.0, 0.0]).unwrap();
    let smooth = smooth_noise(&base, 1).unwrap();
    assert_eq!(smooth.get(0, 3), 0.5);
    assert_eq!(smooth.get(0, 1), 0.5);
}

#[test]
fn test_smooth_period_larger_than_grid() {
    let base = NoiseField::from_values(2, 2, vec![0.25, 1.0, 0.0, 0.5]).unwrap();
    let smooth = smooth_noise(&base, 3).unwrap();
    assert!(smooth.values().iter().all(|&v| v == 0.25));
}

#[test]
fn test_smooth_constant_field_stays_constant() {
    let base = NoiseField::from_values(6, 6, vec![0.4; 36]).unwrap();
    let smooth = smooth_noise(&base, 2).unwrap();
    for &v in smooth.values() {
        assert_relative_eq!(v, 0.4, epsilon = 1e-12);
    }
}

#[test]
fn test_smooth_rejects_huge_octave() {
    let base = seeded_white(2, 2, 1);
    assert!(smooth_noise(&base, 40).is_err());
}

// =============================================================================
// OCTAVE BLENDING
// =============================================================================

#[test]
fn test_single_octave_equals_smooth_noise() {
    let base = seeded_white(16, 16, 9);
    let blended = blend_octaves(&base, 1).unwrap();
    let smooth = smooth_noise(&base, 1).unwrap();
    assert_eq!(blended, smooth);
}

#[test]
fn test_two_octaves_weighted_average() {
    let base = seeded_white(8, 8, 21);
    let blended = blend_octaves(&base, 2).unwrap();
    let first = smooth_noise(&base, 1).unwrap();
    let second = smooth_noise(&base, 2).unwrap();
    for y in 0..8 {
        for x in 0..8 {
            let expected = (0.5 * first.get(x, y) + 0.25 * second.get(x, y)) / 0.75;
            assert_relative_eq!(blended.get(x, y), expected, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_blend_stays_in_unit_range() {
    for octaves in 1..=7 {
        let base = seeded_white(33, 17, u64::from(octaves));
        let blended = blend_octaves(&base, octaves).unwrap();
        assert!(blended.min_value() >= 0.0);
        assert!(blended.max_value() <= 1.0);
    }
}

#[test]
fn test_blend_rejects_zero_octaves() {
    let base = seeded_white(4, 4, 2);
    assert!(matches!(
        blend_octaves(&base, 0),
        Err(NoiseError::InvalidShape { .. })
    ));
}

// =============================================================================
// GENERATOR
// =============================================================================

#[test]
fn test_value_noise_validates() {
    assert!(ValueNoise::new(0, 8, 3).is_err());
    assert!(ValueNoise::new(8, 0, 3).is_err());
    assert!(ValueNoise::new(8, 8, 0).is_err());
    assert!(ValueNoise::new(8, 8, 3).is_ok());
}

#[test]
fn test_value_noise_is_deterministic_per_seed() {
    let noise = ValueNoise::new(24, 24, 4).unwrap();
    let a = noise.generate(&mut StdRng::seed_from_u64(99)).unwrap();
    let b = noise.generate(&mut StdRng::seed_from_u64(99)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_value_noise_generate_from_matches_blend() {
    let base = seeded_white(12, 10, 4);
    let noise = ValueNoise::new(12, 10, 3).unwrap();
    assert_eq!(
        noise.generate_from(&base).unwrap(),
        blend_octaves(&base, 3).unwrap()
    );
}

#[test]
fn test_value_noise_dimension_mismatch() {
    let base = seeded_white(4, 4, 4);
    let noise = ValueNoise::new(8, 4, 2).unwrap();
    assert_eq!(
        noise.generate_from(&base).unwrap_err(),
        NoiseError::DimensionMismatch {
            expected_width: 8,
            expected_height: 4,
            width: 4,
            height: 4,
        }
    );
}

#[test]
fn test_lerp_endpoints() {
    assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
    assert_eq!(lerp(2.0, 6.0, 0.25), 3.0);
}
