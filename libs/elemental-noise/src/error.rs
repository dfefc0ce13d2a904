//! # Noise Errors
//!
//! Error types for noise generation.

use thiserror::Error;

/// Errors that can occur while generating or assembling a noise field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NoiseError {
    /// Non-positive dimensions, octave count out of range, or invalid samples
    #[error("Invalid shape: {message}")]
    InvalidShape {
        /// What was rejected
        message: String,
    },

    /// A base field does not match the dimensions a generator was built for
    #[error("Dimension mismatch: expected {expected_width}x{expected_height}, got {width}x{height}")]
    DimensionMismatch {
        /// Width the generator was built for
        expected_width: usize,
        /// Height the generator was built for
        expected_height: usize,
        /// Width of the supplied field
        width: usize,
        /// Height of the supplied field
        height: usize,
    },
}

impl NoiseError {
    /// Creates an invalid shape error.
    pub fn invalid_shape(message: impl Into<String>) -> Self {
        Self::InvalidShape {
            message: message.into(),
        }
    }
}
