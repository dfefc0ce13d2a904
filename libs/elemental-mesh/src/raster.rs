//! # Raster Sources
//!
//! Read-only access to decoded RGBA pixels for the heightmap modifier and
//! texture blending.
//!
//! Decoding is not done here: callers hand over an in-memory buffer, either
//! an [`image::RgbaImage`], a [`RasterImage`], or (with the `noise` feature)
//! a [`NoiseField`] read as an opaque grayscale image.

use crate::error::MeshError;
use config::constants::MAX_CHANNEL_VALUE;
use image::RgbaImage;
#[cfg(feature = "noise")]
use elemental_noise::{lerp, NoiseField};

/// Anything that can be sampled as an RGBA8 image.
pub trait PixelSource {
    /// Image width in pixels.
    fn width(&self) -> u32;

    /// Image height in pixels.
    fn height(&self) -> u32;

    /// RGBA of the pixel at column `x`, row `y`.
    ///
    /// Callers stay within `width x height`; implementations may panic
    /// otherwise.
    fn pixel(&self, x: u32, y: u32) -> [u8; 4];
}

/// Average of the red, green and blue channels, normalized to `[0, 1]`.
///
/// Alpha is ignored.
#[inline]
pub fn luminance(pixel: [u8; 4]) -> f64 {
    let [r, g, b, _] = pixel;
    (r as f64 + g as f64 + b as f64) / 3.0 / MAX_CHANNEL_VALUE
}

/// Nearest pixel index when stretching `len` pixels across `count` steps.
///
/// Step `i` maps to `floor(i * len / count)`, clamped to the last pixel so
/// the far edge of a grid lands on the image's last column or row.
#[inline]
pub(crate) fn proportional_index(i: u32, count: u32, len: u32) -> u32 {
    let index = (i as u64 * len as u64) / count.max(1) as u64;
    index.min(len.saturating_sub(1) as u64) as u32
}

/// Tightly packed RGBA8 pixels, row-major.
///
/// # Example
///
/// ```rust
/// use elemental_mesh::{PixelSource, RasterImage};
///
/// let mut image = RasterImage::filled(2, 2, [0, 0, 0, 255]);
/// image.set_pixel(1, 0, [255, 255, 255, 255]);
/// assert_eq!(image.pixel(1, 0), [255, 255, 255, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterImage {
    /// Creates a transparent black image.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, [0; 4])
    }

    /// Creates an image with every pixel set to `rgba`.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let count = width as usize * height as usize;
        let data = rgba.iter().copied().cycle().take(count * 4).collect();
        Self {
            width,
            height,
            data,
        }
    }

    /// Wraps existing RGBA8 bytes.
    ///
    /// Fails unless `data` holds exactly `width * height * 4` bytes.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, MeshError> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(MeshError::precondition(format!(
                "RGBA buffer for {}x{} needs {} bytes, got {}",
                width,
                height,
                expected,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Raw RGBA8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Overwrites one pixel.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the image.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let offset = self.offset(x, y);
        self.data[offset..offset + 4].copy_from_slice(&rgba);
    }

    /// Converts into an [`image::RgbaImage`], e.g. for saving.
    pub fn into_rgba_image(self) -> Option<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.data)
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(x < self.width && y < self.height, "pixel ({}, {}) out of bounds", x, y);
        (y as usize * self.width as usize + x as usize) * 4
    }
}

impl PixelSource for RasterImage {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let offset = self.offset(x, y);
        [
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
            self.data[offset + 3],
        ]
    }
}

impl PixelSource for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.get_pixel(x, y).0
    }
}

#[cfg(feature = "noise")]
impl PixelSource for NoiseField {
    fn width(&self) -> u32 {
        u32::try_from(NoiseField::width(self)).unwrap_or(u32::MAX)
    }

    fn height(&self) -> u32 {
        u32::try_from(NoiseField::height(self)).unwrap_or(u32::MAX)
    }

    fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let level = self.gray_level(x as usize, y as usize);
        [level, level, level, 255]
    }
}

/// Mixes two images through a noise mask.
///
/// The result has the size of `a`. Each output pixel is
/// `lerp(a, b, mask)` per channel, where `b` and `mask` are sampled at the
/// proportionally nearest position, so all three inputs may differ in
/// size. A mask value of 0 keeps `a`, 1 takes `b`.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "noise")]
/// # fn main() {
/// use elemental_mesh::{blend_rasters, PixelSource, RasterImage};
/// use elemental_noise::NoiseField;
///
/// let grass = RasterImage::filled(4, 4, [0, 200, 0, 255]);
/// let rock = RasterImage::filled(2, 2, [100, 100, 100, 255]);
/// let mask = NoiseField::from_values(1, 1, vec![0.5]).unwrap();
///
/// let mixed = blend_rasters(&grass, &rock, &mask).unwrap();
/// assert_eq!(mixed.pixel(3, 3), [50, 150, 50, 255]);
/// # }
/// # #[cfg(not(feature = "noise"))]
/// # fn main() {}
/// ```
#[cfg(feature = "noise")]
pub fn blend_rasters<A, B>(a: &A, b: &B, mask: &NoiseField) -> Result<RasterImage, MeshError>
where
    A: PixelSource + ?Sized,
    B: PixelSource + ?Sized,
{
    for (name, width, height) in [
        ("first image", a.width(), a.height()),
        ("second image", b.width(), b.height()),
        ("mask", PixelSource::width(mask), PixelSource::height(mask)),
    ] {
        if width == 0 || height == 0 {
            return Err(MeshError::precondition(format!(
                "Cannot blend an empty {} ({}x{})",
                name, width, height
            )));
        }
    }

    let (width, height) = (a.width(), a.height());
    let mut out = RasterImage::new(width, height);

    for y in 0..height {
        let by = proportional_index(y, height, b.height());
        let my = proportional_index(y, height, PixelSource::height(mask));
        for x in 0..width {
            let bx = proportional_index(x, width, b.width());
            let mx = proportional_index(x, width, PixelSource::width(mask));

            let t = mask.get(mx as usize, my as usize);
            let pa = a.pixel(x, y);
            let pb = b.pixel(bx, by);

            let mut mixed = [0u8; 4];
            for (channel, (&ca, &cb)) in mixed.iter_mut().zip(pa.iter().zip(&pb)) {
                let value = lerp(ca as f64, cb as f64, t).round();
                *channel = value.clamp(0.0, MAX_CHANNEL_VALUE) as u8;
            }
            out.set_pixel(x, y, mixed);
        }
    }

    log::debug!(
        "blended {}x{} raster with {}x{} mask",
        width,
        height,
        mask.width(),
        mask.height()
    );

    Ok(out)
}
