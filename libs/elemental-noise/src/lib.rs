//! # Elemental Noise
//!
//! Toroidal multi-octave value noise, usable as a height field, a texture
//! blend mask, or a heightmap source for mesh displacement.
//!
//! ## Architecture
//!
//! ```text
//! RandomSource → white_noise → smooth_noise (per octave) → blend_octaves → NoiseField
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use elemental_noise::ValueNoise;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(2024);
//! let field = ValueNoise::new(128, 128, 6)?.generate(&mut rng)?;
//! assert!(field.max_value() <= 1.0);
//! # Ok::<(), elemental_noise::NoiseError>(())
//! ```

pub mod error;
pub mod field;
pub mod generator;
pub mod random;

pub use error::NoiseError;
pub use field::NoiseField;
pub use generator::{blend_octaves, lerp, smooth_noise, white_noise, ValueNoise};
pub use random::RandomSource;
