//! # Ribbon Primitive
//!
//! Extrudes a polyline vertically into a strip of quads.

use super::finish;
use crate::error::{ensure_positive, MeshError};
use crate::mesh::Mesh;
use crate::options::ShapeConfig;
use crate::shape::{Shape, ShapeKind};
use crate::uv;
use config::constants::MIN_PATH_POINTS;
use glam::DVec3;

/// Creates a vertical ribbon of `height` following `points`.
///
/// Each path point contributes an upper vertex (index `2s`) and a lower
/// vertex (index `2s + 1`). The lower vertex sits at the point offset by
/// `height / 2 * (pivot.y - 1)` along Y, so the default pivot centers the
/// ribbon on the path and `pivot.y = 1` puts the path on its lower edge.
/// Consecutive points are joined by triangles `(2s, 2s+1, 2s+2)` and
/// `(2s+2, 2s+1, 2s+3)`.
///
/// # Errors
///
/// [`MeshError::InsufficientData`] when fewer than two points are given.
///
/// # Example
///
/// ```rust
/// use elemental_mesh::{create_ribbon, ShapeConfig};
/// use glam::DVec3;
///
/// let path = [DVec3::ZERO, DVec3::X, DVec3::new(2.0, 0.0, 1.0)];
/// let ribbon = create_ribbon(&path, 1.0, &ShapeConfig::default()).unwrap();
/// assert_eq!(ribbon.mesh().vertex_count(), 6);
/// assert_eq!(ribbon.mesh().face_count(), 4);
/// ```
pub fn create_ribbon(points: &[DVec3], height: f64, config: &ShapeConfig) -> Result<Shape, MeshError> {
    if points.len() < MIN_PATH_POINTS {
        log::warn!("ribbon needs {} points, got {}", MIN_PATH_POINTS, points.len());
        return Err(MeshError::InsufficientData {
            required: MIN_PATH_POINTS,
            actual: points.len(),
        });
    }
    if points.len() > (u32::MAX / 2) as usize {
        return Err(MeshError::invalid_shape(format!(
            "Ribbon path of {} points exceeds the index range",
            points.len()
        )));
    }
    if let Some(bad) = points.iter().find(|p| !p.is_finite()) {
        return Err(MeshError::invalid_shape(format!(
            "Ribbon path points must be finite: {:?}",
            bad
        )));
    }
    ensure_positive("Ribbon height", height)?;
    config.pivot.validate()?;

    let segments = (points.len() - 1) as u32;
    let kind = ShapeKind::Ribbon { segments };
    uv::check_method(kind, config.uv_method)?;

    let mut mesh = Mesh::with_capacity(points.len() * 2, segments as usize * 2);

    let lower_offset = DVec3::new(0.0, (height / 2.0) * (config.pivot.y - 1.0), 0.0);
    let rise = DVec3::new(0.0, height, 0.0);

    for point in points {
        let lower = *point + lower_offset;
        mesh.add_vertex(lower + rise);
        mesh.add_vertex(lower);
    }

    for s in 0..segments {
        let top = 2 * s;
        mesh.add_face(top, top + 1, top + 2);
        mesh.add_face(top + 2, top + 1, top + 3);
    }

    finish(mesh, kind, None, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Pivot;

    fn straight_path(n: usize) -> Vec<DVec3> {
        (0..n).map(|i| DVec3::new(i as f64, 0.0, 0.0)).collect()
    }

    #[test]
    fn test_ribbon_counts() {
        for n in 2..10 {
            let ribbon = create_ribbon(&straight_path(n), 2.0, &ShapeConfig::default()).unwrap();
            assert_eq!(ribbon.mesh().vertex_count(), 2 * n);
            assert_eq!(ribbon.mesh().face_count(), 2 * (n - 1));
            assert!(ribbon.mesh().validate());
            assert_eq!(ribbon.kind(), ShapeKind::Ribbon { segments: (n - 1) as u32 });
        }
    }

    #[test]
    fn test_ribbon_too_few_points() {
        for n in 0..2 {
            let result = create_ribbon(&straight_path(n), 1.0, &ShapeConfig::default());
            assert_eq!(
                result.unwrap_err(),
                MeshError::InsufficientData {
                    required: 2,
                    actual: n
                }
            );
        }
    }

    #[test]
    fn test_ribbon_vertices_centered_on_path() {
        let ribbon = create_ribbon(&straight_path(2), 2.0, &ShapeConfig::default()).unwrap();
        let v = ribbon.mesh().vertices();
        assert_eq!(v[0], DVec3::new(0.0, 1.0, 0.0));
        assert_eq!(v[1], DVec3::new(0.0, -1.0, 0.0));
        assert_eq!(v[2], DVec3::new(1.0, 1.0, 0.0));
        assert_eq!(v[3], DVec3::new(1.0, -1.0, 0.0));
    }

    #[test]
    fn test_ribbon_pivot_raises_strip() {
        let config = ShapeConfig::default().with_pivot(Pivot::new(0.0, 1.0, 0.0));
        let ribbon = create_ribbon(&straight_path(2), 2.0, &config).unwrap();
        let (min, max) = ribbon.mesh().bounding_box();
        assert_eq!(min.y, 0.0);
        assert_eq!(max.y, 2.0);
    }

    #[test]
    fn test_ribbon_faces() {
        let ribbon = create_ribbon(&straight_path(3), 1.0, &ShapeConfig::default()).unwrap();
        assert_eq!(
            ribbon.mesh().faces(),
            &[[0, 1, 2], [2, 1, 3], [2, 3, 4], [4, 3, 5]]
        );
    }

    #[test]
    fn test_ribbon_faces_consistent_side() {
        let ribbon = create_ribbon(&straight_path(4), 1.0, &ShapeConfig::default()).unwrap();
        let normals = ribbon.mesh().face_normals().unwrap();
        for normal in normals {
            assert!((*normal - DVec3::Z).length() < 1e-12);
        }
    }

    #[test]
    fn test_ribbon_invalid_height() {
        assert!(create_ribbon(&straight_path(2), 0.0, &ShapeConfig::default()).is_err());
    }

    #[test]
    fn test_ribbon_non_finite_point() {
        let path = [DVec3::ZERO, DVec3::new(f64::INFINITY, 0.0, 0.0)];
        assert!(matches!(
            create_ribbon(&path, 1.0, &ShapeConfig::default()),
            Err(MeshError::InvalidShape { .. })
        ));
    }
}
