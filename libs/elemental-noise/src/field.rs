//! # Noise Field
//!
//! Immutable 2D grid of noise samples in `[0, 1]`.

use crate::error::NoiseError;
use image::{GrayImage, Luma};
use serde::{Deserialize, Serialize};

/// A `width x height` grid of samples, stored row-major.
///
/// Fields are produced by the generator functions in this crate or built
/// from explicit samples with [`NoiseField::from_values`]. Nothing mutates
/// a field once it has been handed to the caller.
///
/// # Example
///
/// ```rust
/// use elemental_noise::NoiseField;
///
/// let field = NoiseField::from_values(2, 1, vec![0.0, 1.0]).unwrap();
/// assert_eq!(field.get(1, 0), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawNoiseField")]
pub struct NoiseField {
    width: usize,
    height: usize,
    values: Vec<f64>,
}

/// Wire form of a [`NoiseField`]; checked by [`NoiseField::from_values`]
/// before a field exists.
#[derive(Deserialize)]
struct RawNoiseField {
    width: usize,
    height: usize,
    values: Vec<f64>,
}

impl TryFrom<RawNoiseField> for NoiseField {
    type Error = NoiseError;

    fn try_from(raw: RawNoiseField) -> Result<Self, Self::Error> {
        NoiseField::from_values(raw.width, raw.height, raw.values)
    }
}

impl NoiseField {
    /// Allocates a zero-filled field. Dimensions are validated by callers.
    pub(crate) fn zeros(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            values: vec![0.0; width * height],
        }
    }

    /// Builds a field from row-major samples.
    ///
    /// Fails when either dimension is zero, when the sample count does not
    /// match `width * height`, or when a sample lies outside `[0, 1]`.
    pub fn from_values(width: usize, height: usize, values: Vec<f64>) -> Result<Self, NoiseError> {
        if width == 0 || height == 0 {
            return Err(NoiseError::invalid_shape(format!(
                "Noise field dimensions must be at least 1x1: {}x{}",
                width, height
            )));
        }

        let expected = width.checked_mul(height).ok_or_else(|| {
            NoiseError::invalid_shape(format!(
                "Noise field dimensions overflow: {}x{}",
                width, height
            ))
        })?;

        if values.len() != expected {
            return Err(NoiseError::invalid_shape(format!(
                "Expected {} samples for a {}x{} field, got {}",
                expected,
                width,
                height,
                values.len()
            )));
        }

        if let Some(bad) = values.iter().find(|v| !(0.0..=1.0).contains(*v)) {
            return Err(NoiseError::invalid_shape(format!(
                "Noise samples must lie in [0, 1]: {}",
                bad
            )));
        }

        Ok(Self {
            width,
            height,
            values,
        })
    }

    /// Returns the number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the sample at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the field.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.values[y * self.width + x]
    }

    #[inline]
    pub(crate) fn set(&mut self, x: usize, y: usize, value: f64) {
        self.values[y * self.width + x] = value;
    }

    /// Returns all samples in row-major order.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Smallest sample in the field.
    pub fn min_value(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest sample in the field.
    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Renders the field as an 8-bit grayscale image, one pixel per sample.
    ///
    /// # Example
    ///
    /// ```rust
    /// use elemental_noise::NoiseField;
    ///
    /// let field = NoiseField::from_values(2, 1, vec![0.0, 1.0]).unwrap();
    /// let image = field.to_gray_image();
    /// assert_eq!(image.get_pixel(0, 0).0, [0]);
    /// assert_eq!(image.get_pixel(1, 0).0, [255]);
    /// ```
    pub fn to_gray_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            Luma([self.gray_level(x as usize, y as usize)])
        })
    }

    /// Sample at `(x, y)` scaled to an 8-bit gray level.
    #[inline]
    pub fn gray_level(&self, x: usize, y: usize) -> u8 {
        (self.get(x, y).clamp(0.0, 1.0) * 255.0).round() as u8
    }
}
