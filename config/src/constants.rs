//! # Configuration Constants
//!
//! Centralized constants for the Elemental toolkit. Shape limits, texture
//! atlas layout, noise parameters and raster normalization are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Shape Limits**: Minimum segment and point counts accepted by builders
//! - **Shape Defaults**: Defaults for optional builder parameters
//! - **Texture Atlas**: Cube-map atlas grid and bleed inset
//! - **Noise**: Value noise blending parameters
//! - **Raster**: Channel normalization for heightmaps

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used when checking whether two coordinates are "equal" within numerical
/// tolerance, e.g. when verifying that a 360 degree bend closes on itself.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// SHAPE LIMITS
// =============================================================================

/// Minimum number of quad segments along either axis of a grid shape.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_GRID_SEGMENTS;
///
/// let requested = 0;
/// assert!(requested < MIN_GRID_SEGMENTS);
/// ```
pub const MIN_GRID_SEGMENTS: u32 = 1;

/// Minimum number of segments around a cylinder ring.
///
/// Fewer than three vertex pairs cannot enclose any area.
pub const MIN_RING_SEGMENTS: u32 = 3;

/// Minimum number of path points for a ribbon.
///
/// A single point has no direction to extrude along.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_PATH_POINTS;
///
/// let path = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]];
/// assert!(path.len() >= MIN_PATH_POINTS);
/// ```
pub const MIN_PATH_POINTS: usize = 2;

/// Inclusive bound on the magnitude of a pivot offset along any axis.
///
/// A pivot of `-1` moves the origin to the negative face of the shape,
/// `1` to the positive face and `0` keeps it centered.
pub const PIVOT_LIMIT: f64 = 1.0;

// =============================================================================
// SHAPE DEFAULTS
// =============================================================================

/// Default number of quad segments along each grid axis.
pub const DEFAULT_GRID_SEGMENTS: u32 = 1;

/// Default chamfering fraction of a cylinder (tire).
///
/// The effective half-width of the tire is `width / 2 * chamfering`.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_CHAMFERING;
///
/// let width = 10.0;
/// let half_width = width / 2.0 * DEFAULT_CHAMFERING;
/// assert!((half_width - 4.0).abs() < 1e-12);
/// ```
pub const DEFAULT_CHAMFERING: f64 = 0.80;

/// Default multiplier applied to normalized heightmap luminance.
pub const DEFAULT_HEIGHTMAP_STRENGTH: f64 = 1.0;

// =============================================================================
// TEXTURE ATLAS CONSTANTS
// =============================================================================

/// Number of columns in the cube-map atlas.
///
/// The four side faces (left, front, right, back) occupy one row of
/// this many cells.
pub const ATLAS_COLUMNS: u32 = 4;

/// Number of rows in the cube-map atlas.
///
/// Bottom face in row 0, the side strip in row 1, top face in row 2.
pub const ATLAS_ROWS: u32 = 3;

/// Inset applied to every atlas cell edge.
///
/// Texture filtering near a cell boundary would otherwise sample texels of
/// the neighboring cell.
///
/// # Example
///
/// ```rust
/// use config::constants::{ATLAS_COLUMNS, EDGE_BLEED_FIX};
///
/// let cell_width = 1.0 / ATLAS_COLUMNS as f64;
/// let u1 = cell_width + EDGE_BLEED_FIX;
/// let u2 = 2.0 * cell_width - EDGE_BLEED_FIX;
/// assert!(u2 > u1);
/// ```
pub const EDGE_BLEED_FIX: f64 = 0.001;

// =============================================================================
// NOISE CONSTANTS
// =============================================================================

/// Per-octave amplitude decay of the value noise blend.
///
/// Octave `o` contributes with amplitude `NOISE_PERSISTENCE^o`.
///
/// # Example
///
/// ```rust
/// use config::constants::NOISE_PERSISTENCE;
///
/// let amplitudes: Vec<f64> = (1..=3).map(|o| NOISE_PERSISTENCE.powi(o)).collect();
/// assert_eq!(amplitudes, vec![0.5, 0.25, 0.125]);
/// ```
pub const NOISE_PERSISTENCE: f64 = 0.5;

/// Minimum number of octaves accepted by the noise generator.
pub const MIN_OCTAVES: u32 = 1;

/// Largest octave whose sample period (`2^octave`) still fits a `u32` shift.
pub const MAX_OCTAVES: u32 = 31;

// =============================================================================
// RASTER CONSTANTS
// =============================================================================

/// Maximum value of an 8-bit color channel.
///
/// Luminance is divided by this value to normalize it into `[0, 1]`.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_CHANNEL_VALUE;
///
/// let (r, g, b) = (255.0, 255.0, 255.0);
/// let luminance = (r + g + b) / 3.0 / MAX_CHANNEL_VALUE;
/// assert_eq!(luminance, 1.0);
/// ```
pub const MAX_CHANNEL_VALUE: f64 = 255.0;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two floating-point values are approximately equal.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(0.1 + 0.2, 0.3));
/// assert!(!approx_equal(1.0, 1.001));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a floating-point value is approximately zero.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-12));
/// assert!(!approx_zero(1e-3));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
