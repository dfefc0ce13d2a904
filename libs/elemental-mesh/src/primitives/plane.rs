//! # Plane Primitive
//!
//! Generates a segmented plane on the XY plane.

use super::finish;
use crate::error::{ensure_positive, MeshError};
use crate::mesh::Mesh;
use crate::options::ShapeConfig;
use crate::shape::{Dimensions, GridSegments, Shape, ShapeKind, ShapeMetadata};
use crate::uv;
use glam::DVec3;

/// Creates a `width x height` plane of `segments_x x segments_y` quads.
///
/// The `(segments_x + 1) x (segments_y + 1)` vertices are laid out row by
/// row from `(-width/2, -height/2)`, so vertex `(x, y)` has index
/// `y * (segments_x + 1) + x`. Each quad is split along the same diagonal
/// into two counter-clockwise triangles (viewed from +Z).
///
/// # Arguments
///
/// * `width` - Extent along X
/// * `height` - Extent along Y
/// * `config` - Segment counts, normals, UV method and pivot (X/Y used)
///
/// # Example
///
/// ```rust
/// use elemental_mesh::{create_plane, ShapeConfig};
///
/// let plane = create_plane(2.0, 2.0, &ShapeConfig::default()).unwrap();
/// assert_eq!(plane.mesh().vertex_count(), 4);
/// assert_eq!(plane.mesh().faces(), &[[0, 1, 2], [1, 3, 2]]);
/// ```
pub fn create_plane(width: f64, height: f64, config: &ShapeConfig) -> Result<Shape, MeshError> {
    ensure_positive("Plane width", width)?;
    ensure_positive("Plane height", height)?;
    config.validate()?;
    uv::check_method(ShapeKind::Plane, config.uv_method)?;

    let segments = GridSegments {
        x: config.segments_x,
        y: config.segments_y,
    };
    if segments.vertex_count() > u32::MAX as usize {
        return Err(MeshError::invalid_shape(format!(
            "Plane grid {}x{} exceeds the index range",
            segments.x, segments.y
        )));
    }

    let face_count = 2 * segments.x as usize * segments.y as usize;
    let mut mesh = Mesh::with_capacity(segments.vertex_count(), face_count);

    let half = DVec3::new(width / 2.0, height / 2.0, 0.0);
    let pivot = DVec3::new(config.pivot.x, config.pivot.y, 0.0);
    let origin = -half + half * pivot;
    let step_x = width / segments.x as f64;
    let step_y = height / segments.y as f64;

    for y in 0..=segments.y {
        for x in 0..=segments.x {
            mesh.add_vertex(origin + DVec3::new(step_x * x as f64, step_y * y as f64, 0.0));
        }
    }

    for y in 0..segments.y {
        for x in 0..segments.x {
            let a = segments.index(x, y);
            let b = segments.index(x, y + 1);
            let c = segments.index(x + 1, y + 1);
            let d = segments.index(x + 1, y);

            mesh.add_face(a, d, b);
            mesh.add_face(d, c, b);
        }
    }

    let metadata = ShapeMetadata {
        segments,
        dimensions: Dimensions { width, height },
    };

    finish(mesh, ShapeKind::Plane, Some(metadata), config)
}
