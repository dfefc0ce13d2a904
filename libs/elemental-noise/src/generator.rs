//! # Value Noise Generator
//!
//! Three stages turn a random source into a smooth height field:
//!
//! 1. **White noise**: every cell independently set to 0 or 1
//! 2. **Smooth noise**: per octave `o`, corners of the enclosing
//!    `2^o`-aligned block are bilinearly interpolated, wrapping around the
//!    grid edges so the result tiles seamlessly
//! 3. **Blend**: octaves summed with amplitude `0.5^o`, then divided by the
//!    total amplitude so the output stays in `[0, 1]`
//!
//! This is value noise. It is often called "Perlin noise" but has no
//! gradient vectors.

use crate::error::NoiseError;
use crate::field::NoiseField;
use crate::random::RandomSource;
use config::constants::{MAX_OCTAVES, MIN_OCTAVES, NOISE_PERSISTENCE};
use serde::{Deserialize, Serialize};

/// Linear interpolation between `a` and `b` with weight `t` in `[0, 1]`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (1.0 - t) * a + t * b
}

fn check_dimensions(width: usize, height: usize) -> Result<(), NoiseError> {
    if width == 0 || height == 0 {
        log::warn!("rejected noise dimensions {}x{}", width, height);
        return Err(NoiseError::invalid_shape(format!(
            "Noise dimensions must be at least 1x1: {}x{}",
            width, height
        )));
    }
    Ok(())
}

fn check_octaves(octave_count: u32) -> Result<(), NoiseError> {
    if !(MIN_OCTAVES..=MAX_OCTAVES).contains(&octave_count) {
        log::warn!("rejected octave count {}", octave_count);
        return Err(NoiseError::invalid_shape(format!(
            "Octave count must be in {}..={}: {}",
            MIN_OCTAVES, MAX_OCTAVES, octave_count
        )));
    }
    Ok(())
}

/// Fills a `width x height` field with independent binary samples.
///
/// Each cell is 0 or 1 with equal probability. The coarse binary input is
/// what gives the blended output its contrast.
///
/// # Example
///
/// ```rust
/// use elemental_noise::white_noise;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let field = white_noise(8, 8, &mut rng).unwrap();
/// assert!(field.values().iter().all(|&v| v == 0.0 || v == 1.0));
/// ```
pub fn white_noise<R>(width: usize, height: usize, rng: &mut R) -> Result<NoiseField, NoiseError>
where
    R: RandomSource + ?Sized,
{
    check_dimensions(width, height)?;

    let mut field = NoiseField::zeros(width, height);
    for value in field.values_mut() {
        *value = rng.int_in_range(0, 1) as f64;
    }
    Ok(field)
}

/// Bilinear sample of `base` at `(x, y)` for a block size of `period`.
///
/// The far corners wrap modulo the field dimensions.
#[inline]
fn smooth_sample(base: &NoiseField, x: usize, y: usize, period: usize) -> f64 {
    let frequency = 1.0 / period as f64;

    let x0 = (x / period) * period;
    let x1 = (x0 + period) % base.width();
    let horizontal_blend = (x - x0) as f64 * frequency;

    let y0 = (y / period) * period;
    let y1 = (y0 + period) % base.height();
    let vertical_blend = (y - y0) as f64 * frequency;

    let top = lerp(base.get(x0, y0), base.get(x1, y0), horizontal_blend);
    let bottom = lerp(base.get(x0, y1), base.get(x1, y1), horizontal_blend);

    lerp(top, bottom, vertical_blend)
}

/// Smooths `base` at the frequency of a single octave.
///
/// The sample period is `2^octave`; octave 0 reproduces `base` exactly.
///
/// # Example
///
/// ```rust
/// use elemental_noise::{smooth_noise, NoiseField};
///
/// let base = NoiseField::from_values(4, 1, vec![0.0, 1.0, 1.0, 1.0]).unwrap();
/// let smooth = smooth_noise(&base, 1).unwrap();
/// // Halfway between cell 0 (0.0) and cell 2 (1.0)
/// assert_eq!(smooth.get(1, 0), 0.5);
/// ```
pub fn smooth_noise(base: &NoiseField, octave: u32) -> Result<NoiseField, NoiseError> {
    if octave > MAX_OCTAVES {
        return Err(NoiseError::invalid_shape(format!(
            "Octave must be at most {}: {}",
            MAX_OCTAVES, octave
        )));
    }

    let period = 1usize << octave;
    let mut field = NoiseField::zeros(base.width(), base.height());
    for y in 0..base.height() {
        for x in 0..base.width() {
            field.set(x, y, smooth_sample(base, x, y, period));
        }
    }
    Ok(field)
}

/// Blends octaves `1..=octave_count` of `base` into a normalized field.
///
/// A single accumulation buffer is allocated; each octave is sampled
/// straight into it.
pub fn blend_octaves(base: &NoiseField, octave_count: u32) -> Result<NoiseField, NoiseError> {
    check_octaves(octave_count)?;

    let mut field = NoiseField::zeros(base.width(), base.height());
    let mut amplitude = 1.0;
    let mut total_amplitude = 0.0;

    for octave in 1..=octave_count {
        amplitude *= NOISE_PERSISTENCE;
        total_amplitude += amplitude;

        let period = 1usize << octave;
        for y in 0..base.height() {
            for x in 0..base.width() {
                let accumulated = field.get(x, y) + smooth_sample(base, x, y, period) * amplitude;
                field.set(x, y, accumulated);
            }
        }
    }

    for value in field.values_mut() {
        *value = (*value / total_amplitude).clamp(0.0, 1.0);
    }

    Ok(field)
}

/// Parameters of a multi-octave value noise field.
///
/// # Example
///
/// ```rust
/// use elemental_noise::ValueNoise;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let noise = ValueNoise::new(64, 32, 5).unwrap();
/// let field = noise.generate(&mut StdRng::seed_from_u64(1)).unwrap();
/// assert_eq!((field.width(), field.height()), (64, 32));
/// assert!(field.values().iter().all(|v| (0.0..=1.0).contains(v)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueNoise {
    width: usize,
    height: usize,
    octaves: u32,
}

impl ValueNoise {
    /// Creates a generator, rejecting empty dimensions and octave counts
    /// outside `1..=31`.
    pub fn new(width: usize, height: usize, octaves: u32) -> Result<Self, NoiseError> {
        check_dimensions(width, height)?;
        check_octaves(octaves)?;
        Ok(Self {
            width,
            height,
            octaves,
        })
    }

    /// Output width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Output height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of blended octaves.
    pub fn octaves(&self) -> u32 {
        self.octaves
    }

    /// Draws fresh white noise from `rng` and blends it.
    pub fn generate<R>(&self, rng: &mut R) -> Result<NoiseField, NoiseError>
    where
        R: RandomSource + ?Sized,
    {
        let base = white_noise(self.width, self.height, rng)?;
        self.generate_from(&base)
    }

    /// Blends a caller-supplied seed grid, which must match the generator's
    /// dimensions. The result is a pure function of `base`.
    pub fn generate_from(&self, base: &NoiseField) -> Result<NoiseField, NoiseError> {
        if base.width() != self.width || base.height() != self.height {
            return Err(NoiseError::DimensionMismatch {
                expected_width: self.width,
                expected_height: self.height,
                width: base.width(),
                height: base.height(),
            });
        }

        let field = blend_octaves(base, self.octaves)?;
        log::debug!(
            "generated {}x{} value noise with {} octaves (range {:.3}..{:.3})",
            self.width,
            self.height,
            self.octaves,
            field.min_value(),
            field.max_value()
        );
        Ok(field)
    }
}

#[cfg(test)]
mod tests;
