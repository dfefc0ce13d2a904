//! # Builder Options
//!
//! Per-call configuration shared by all shape builders.

use crate::error::{ensure_finite, MeshError};
use config::constants::{DEFAULT_GRID_SEGMENTS, MIN_GRID_SEGMENTS, PIVOT_LIMIT};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Fractional shift of a shape's local origin along each axis.
///
/// `0` keeps the shape centered; `-1` and `1` move it by half its extent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Pivot {
    /// Offset along X
    pub x: f64,
    /// Offset along Y
    pub y: f64,
    /// Offset along Z
    pub z: f64,
}

impl Pivot {
    /// Centered pivot.
    pub const CENTER: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a pivot from per-axis offsets.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The offsets as a vector.
    pub fn as_vec(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    /// Checks every offset lies in `[-1, 1]`.
    pub fn validate(&self) -> Result<(), MeshError> {
        for (name, value) in [("pivot.x", self.x), ("pivot.y", self.y), ("pivot.z", self.z)] {
            ensure_finite(name, value)?;
            if value.abs() > PIVOT_LIMIT {
                return Err(MeshError::invalid_shape(format!(
                    "{} must lie in [-{}, {}]: {}",
                    name, PIVOT_LIMIT, PIVOT_LIMIT, value
                )));
            }
        }
        Ok(())
    }
}

/// Cell placement of the cube's top and bottom faces in the 4x3 atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AtlasLayout {
    /// Caps above and below the front face (column 1), the usual cross
    #[default]
    Cross,
    /// Caps with their inset u origin doubled, landing in column 2
    Doubled,
}

/// How face UVs are assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UvMethod {
    /// Every quad or strip segment covers the whole texture
    #[default]
    Tiled,
    /// One texture stretched over the whole shape
    Spanning,
    /// Cube faces laid out on a cube-map atlas
    AtlasCross(AtlasLayout),
}

/// Configuration for a single builder call.
///
/// Every field has a documented default; nothing is inferred from "falsy"
/// values. A segment count of `0` is an error rather than a request for the
/// default.
///
/// # Example
///
/// ```rust
/// use elemental_mesh::{ShapeConfig, UvMethod};
///
/// let config = ShapeConfig::default()
///     .with_segments(8, 4)
///     .with_uv_method(UvMethod::Spanning)
///     .with_vertex_normals(true);
/// assert!(config.validate().is_ok());
/// assert!(config.compute_face_normals);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    /// Quad segments along X for grid shapes (default 1)
    pub segments_x: u32,
    /// Quad segments along Y for grid shapes (default 1)
    pub segments_y: u32,
    /// Compute per-face normals after construction (default true)
    pub compute_face_normals: bool,
    /// Compute per-vertex normals after construction (default false)
    pub compute_vertex_normals: bool,
    /// UV assignment policy (default [`UvMethod::Tiled`])
    pub uv_method: UvMethod,
    /// Origin offsets (default centered)
    pub pivot: Pivot,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            segments_x: DEFAULT_GRID_SEGMENTS,
            segments_y: DEFAULT_GRID_SEGMENTS,
            compute_face_normals: true,
            compute_vertex_normals: false,
            uv_method: UvMethod::default(),
            pivot: Pivot::CENTER,
        }
    }
}

impl ShapeConfig {
    /// Sets the grid segment counts.
    pub fn with_segments(mut self, x: u32, y: u32) -> Self {
        self.segments_x = x;
        self.segments_y = y;
        self
    }

    /// Sets the face normal flag.
    pub fn with_face_normals(mut self, enabled: bool) -> Self {
        self.compute_face_normals = enabled;
        self
    }

    /// Sets the vertex normal flag.
    pub fn with_vertex_normals(mut self, enabled: bool) -> Self {
        self.compute_vertex_normals = enabled;
        self
    }

    /// Sets the UV method.
    pub fn with_uv_method(mut self, method: UvMethod) -> Self {
        self.uv_method = method;
        self
    }

    /// Sets the pivot.
    pub fn with_pivot(mut self, pivot: Pivot) -> Self {
        self.pivot = pivot;
        self
    }

    /// Validates segment counts and pivot.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.segments_x < MIN_GRID_SEGMENTS || self.segments_y < MIN_GRID_SEGMENTS {
            return Err(MeshError::invalid_shape(format!(
                "Grid segments must be at least {}: {}x{}",
                MIN_GRID_SEGMENTS, self.segments_x, self.segments_y
            )));
        }
        self.pivot.validate()
    }
}
