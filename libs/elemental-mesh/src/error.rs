//! # Mesh Errors
//!
//! Error types for mesh building, UV mapping and mesh modification.
//!
//! Every operation validates its inputs before touching a mesh, so an error
//! never leaves a partially built or partially modified mesh behind.

use thiserror::Error;

/// Errors that can occur while building or modifying a mesh.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Non-positive or out-of-range size, segment, radius or pivot parameter
    #[error("Invalid shape: {message}")]
    InvalidShape {
        /// What was rejected
        message: String,
    },

    /// Fewer input points than the builder needs
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData {
        /// Minimum number of points
        required: usize,
        /// Number of points supplied
        actual: usize,
    },

    /// Modifier axis outside the supported set
    #[error("Unsupported axis: {axis}")]
    UnsupportedAxis {
        /// Axis as given by the caller
        axis: String,
    },

    /// Operation invoked on a mesh lacking what it requires
    #[error("Precondition failed: {message}")]
    Precondition {
        /// Which requirement was not met
        message: String,
    },

    /// Noise field could not be produced or sampled
    #[cfg(feature = "noise")]
    #[error("Noise error: {0}")]
    Noise(#[from] elemental_noise::NoiseError),
}

impl MeshError {
    /// Creates an invalid shape error.
    pub fn invalid_shape(message: impl Into<String>) -> Self {
        Self::InvalidShape {
            message: message.into(),
        }
    }

    /// Creates an unsupported axis error.
    pub fn unsupported_axis(axis: impl Into<String>) -> Self {
        Self::UnsupportedAxis { axis: axis.into() }
    }

    /// Creates a precondition error.
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition {
            message: message.into(),
        }
    }
}

/// Rejects NaN and infinite parameters.
pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<(), MeshError> {
    if value.is_finite() {
        Ok(())
    } else {
        log::warn!("rejected non-finite {}: {}", name, value);
        Err(MeshError::invalid_shape(format!(
            "{} must be finite: {}",
            name, value
        )))
    }
}

/// Rejects parameters that are not strictly positive (including NaN).
pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<(), MeshError> {
    ensure_finite(name, value)?;
    if value <= 0.0 {
        log::warn!("rejected non-positive {}: {}", name, value);
        return Err(MeshError::invalid_shape(format!(
            "{} must be positive: {}",
            name, value
        )));
    }
    Ok(())
}
