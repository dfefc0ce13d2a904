//! # Cylinder Primitive
//!
//! Generates an open ring of quads around the Z axis (a tire without caps).

use super::finish;
use crate::error::{ensure_positive, MeshError};
use crate::mesh::Mesh;
use crate::options::ShapeConfig;
use crate::shape::{Shape, ShapeKind};
use crate::uv;
use config::constants::{DEFAULT_CHAMFERING, MIN_RING_SEGMENTS};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Parameters of a cylinder (tire).
///
/// # Example
///
/// ```rust
/// use elemental_mesh::CylinderParams;
///
/// let params = CylinderParams::new(5.0, 2.0, 24).with_chamfering(0.5);
/// assert_eq!(params.half_width(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CylinderParams {
    /// Ring radius
    pub radius: f64,
    /// Full width along Z before chamfering
    pub width: f64,
    /// Vertex pairs around the ring
    pub segments: u32,
    /// Fraction of the half-width actually used, in `(0, 1]`
    pub chamfering: f64,
}

impl CylinderParams {
    /// Creates parameters with the default chamfering of 0.80.
    pub fn new(radius: f64, width: f64, segments: u32) -> Self {
        Self {
            radius,
            width,
            segments,
            chamfering: DEFAULT_CHAMFERING,
        }
    }

    /// Sets the chamfering fraction.
    pub fn with_chamfering(mut self, chamfering: f64) -> Self {
        self.chamfering = chamfering;
        self
    }

    /// Effective half-width: `width / 2 * chamfering`.
    pub fn half_width(&self) -> f64 {
        (self.width / 2.0) * self.chamfering
    }

    /// Validates radius, width, segment count and chamfering.
    pub fn validate(&self) -> Result<(), MeshError> {
        ensure_positive("Cylinder radius", self.radius)?;
        ensure_positive("Cylinder width", self.width)?;
        ensure_positive("Cylinder chamfering", self.chamfering)?;

        if self.chamfering > 1.0 {
            return Err(MeshError::invalid_shape(format!(
                "Cylinder chamfering must be at most 1: {}",
                self.chamfering
            )));
        }

        if self.segments < MIN_RING_SEGMENTS {
            return Err(MeshError::invalid_shape(format!(
                "Cylinder segments must be at least {}: {}",
                MIN_RING_SEGMENTS, self.segments
            )));
        }

        if self.segments > u32::MAX / 2 {
            return Err(MeshError::invalid_shape(format!(
                "Cylinder segments exceed the index range: {}",
                self.segments
            )));
        }

        Ok(())
    }
}

/// Creates an open cylinder of `segments` quads around the Z axis.
///
/// Pair `v` sits at angle `2*pi*v/segments` with its back vertex
/// (`z = +half_width`) at index `2v` and its front vertex at `2v + 1`. Each
/// segment joins its pair to the next one with `(p, p+1, next)` and
/// `(next, p+1, next+1)`; the last segment's next pair is pair 0, which
/// closes the ring without duplicating vertices:
///
/// ```text
///   (0) (2) (4)               (4) (0)
///                  last seg:
///   (1) (3) (5)               (5) (1)
/// ```
///
/// The pivot is not used.
///
/// # Example
///
/// ```rust
/// use elemental_mesh::{create_cylinder, CylinderParams, ShapeConfig};
///
/// let tire = create_cylinder(&CylinderParams::new(5.0, 2.0, 16), &ShapeConfig::default()).unwrap();
/// assert_eq!(tire.mesh().vertex_count(), 32);
/// assert_eq!(tire.mesh().face_count(), 32);
/// ```
pub fn create_cylinder(params: &CylinderParams, config: &ShapeConfig) -> Result<Shape, MeshError> {
    params.validate()?;

    let kind = ShapeKind::Cylinder {
        segments: params.segments,
    };
    uv::check_method(kind, config.uv_method)?;

    let segments = params.segments;
    let half_width = params.half_width();
    let angle_step = TAU / segments as f64;

    let mut mesh = Mesh::with_capacity(2 * segments as usize, 2 * segments as usize);

    for v in 0..segments {
        let angle = angle_step * v as f64;
        let x = angle.cos() * params.radius;
        let y = angle.sin() * params.radius;

        let p = mesh.add_vertex(DVec3::new(x, y, half_width));
        mesh.add_vertex(DVec3::new(x, y, -half_width));

        let next = if v < segments - 1 { p + 2 } else { 0 };

        mesh.add_face(p, p + 1, next);
        mesh.add_face(next, p + 1, next + 1);
    }

    finish(mesh, kind, None, config)
}
