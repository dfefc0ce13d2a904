//! Arc bending by discrete trigonometric integration.

use super::{grid_layout, Axis};
use crate::error::{ensure_finite, MeshError};
use crate::mesh::Mesh;
use crate::shape::ShapeMetadata;

/// Bends a plane grid into a circular arc of `amount` degrees.
///
/// The first column (for [`Axis::X`]) or row (for [`Axis::Y`]) stays in
/// place. Every following column `i` is placed one segment length away from
/// column `i - 1`, turned by `i * amount / segments` degrees out of the XY
/// plane:
///
/// ```text
/// x[i] = x[i-1] + d * cos(i * step)
/// z[i] = z[i-1] + d * sin(i * step)      (- with reverse)
/// ```
///
/// so `amount = 360` closes the grid into a loop. The coordinate across the
/// bend axis is left alone. `reverse` curls the arc towards -Z instead of +Z.
///
/// # Errors
///
/// - [`MeshError::UnsupportedAxis`] for [`Axis::Z`]
/// - [`MeshError::Precondition`] without grid metadata
/// - [`MeshError::InvalidShape`] for a non-finite `amount`
///
/// The mesh is not touched when an error is returned.
pub fn bend<'m>(
    mesh: &'m mut Mesh,
    metadata: Option<&ShapeMetadata>,
    axis: Axis,
    amount: f64,
    reverse: bool,
) -> Result<&'m Mesh, MeshError> {
    if axis == Axis::Z {
        return Err(MeshError::unsupported_axis(axis.to_string()));
    }
    let metadata = grid_layout(mesh, metadata, "Bend")?;
    ensure_finite("Bend amount", amount)?;

    let segments = metadata.segments;
    let (bent_segments, span) = match axis {
        Axis::X => (segments.x, metadata.dimensions.width),
        _ => (segments.y, metadata.dimensions.height),
    };
    let segment_length = span / bent_segments as f64;
    let step = (amount / bent_segments as f64).to_radians();
    let direction = if reverse { -1.0 } else { 1.0 };

    let vertices = mesh.vertices_mut();

    for i in 1..=bent_segments {
        let (sin, cos) = (step * i as f64).sin_cos();
        let advance = cos * segment_length;
        let lift = direction * sin * segment_length;

        match axis {
            Axis::X => {
                for y in 0..=segments.y {
                    let id = segments.index(i, y) as usize;
                    let prev = vertices[id - 1];
                    vertices[id].x = prev.x + advance;
                    vertices[id].z = prev.z + lift;
                }
            }
            _ => {
                for x in 0..=segments.x {
                    let id = segments.index(x, i) as usize;
                    let prev = vertices[segments.index(x, i - 1) as usize];
                    vertices[id].y = prev.y + advance;
                    vertices[id].z = prev.z + lift;
                }
            }
        }
    }

    mesh.refresh_normals();

    log::debug!(
        "bent {}x{} grid by {} degrees around {}{}",
        segments.x,
        segments.y,
        amount,
        axis,
        if reverse { " (reversed)" } else { "" }
    );

    Ok(&*mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ShapeConfig;
    use crate::primitives::create_plane;
    use crate::shape::Shape;
    use approx::assert_abs_diff_eq;
    use config::constants::{approx_equal, approx_zero};

    fn plane(width: f64, height: f64, sx: u32, sy: u32) -> Shape {
        create_plane(width, height, &ShapeConfig::default().with_segments(sx, sy)).unwrap()
    }

    #[test]
    fn test_zero_bend_is_identity() {
        let mut shape = plane(6.0, 3.0, 6, 3);
        let before = shape.mesh().vertices().to_vec();

        for axis in [Axis::X, Axis::Y] {
            let after = shape.bend(axis, 0.0, false).unwrap();
            for (a, b) in before.iter().zip(after.vertices()) {
                assert!((*a - *b).length() < 1e-12);
            }
        }
    }

    #[test]
    fn test_full_circle_closes_loop() {
        let mut shape = plane(4.0, 2.0, 8, 2);
        let segments = shape.metadata().unwrap().segments;
        let mesh = shape.bend(Axis::X, 360.0, false).unwrap();

        for y in 0..=segments.y {
            let first = mesh.vertex(segments.index(0, y));
            let last = mesh.vertex(segments.index(segments.x, y));
            assert!(approx_equal(first.x, last.x));
            assert!(approx_zero(last.z));
        }
    }

    #[test]
    fn test_full_circle_closes_loop_on_y() {
        let mut shape = plane(2.0, 6.0, 3, 12);
        let segments = shape.metadata().unwrap().segments;
        let mesh = shape.bend(Axis::Y, 360.0, false).unwrap();

        for x in 0..=segments.x {
            let first = mesh.vertex(segments.index(x, 0));
            let last = mesh.vertex(segments.index(x, segments.y));
            assert!(approx_equal(first.y, last.y));
            assert!(approx_zero(last.z));
            assert_eq!(first.x, last.x);
        }
    }

    #[test]
    fn test_half_circle_on_x() {
        let mut shape = plane(2.0, 2.0, 2, 1);
        let mesh = shape.bend(Axis::X, 180.0, false).unwrap();

        // Column 1 turns straight up, column 2 folds back over column 0.
        let v1 = mesh.vertex(1);
        assert_abs_diff_eq!(v1.x, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v1.z, 1.0, epsilon = 1e-12);
        let v2 = mesh.vertex(2);
        assert_abs_diff_eq!(v2.x, -2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v2.z, 1.0, epsilon = 1e-12);
        assert_eq!(v2.y, -1.0);
    }

    #[test]
    fn test_half_circle_on_y() {
        let mut shape = plane(2.0, 2.0, 1, 2);
        let mesh = shape.bend(Axis::Y, 180.0, false).unwrap();

        for x in 0..=1 {
            let row1 = mesh.vertex(2 + x);
            assert_abs_diff_eq!(row1.y, -1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(row1.z, 1.0, epsilon = 1e-12);
            let row2 = mesh.vertex(4 + x);
            assert_abs_diff_eq!(row2.y, -2.0, epsilon = 1e-12);
            assert_abs_diff_eq!(row2.z, 1.0, epsilon = 1e-12);
        }
        assert_eq!(mesh.vertex(5).x, 1.0);
    }

    #[test]
    fn test_reverse_mirrors_z() {
        let mut forward = plane(5.0, 2.0, 10, 2);
        let mut backward = forward.clone();
        let a = forward.bend(Axis::X, 120.0, false).unwrap();
        let b = backward.bend(Axis::X, 120.0, true).unwrap();

        for (p, q) in a.vertices().iter().zip(b.vertices()) {
            assert_eq!(p.x, q.x);
            assert_eq!(p.y, q.y);
            assert_eq!(p.z, -q.z);
        }
    }

    #[test]
    fn test_bend_keeps_topology_and_uvs() {
        let mut shape = plane(3.0, 3.0, 3, 3);
        let faces = shape.mesh().faces().to_vec();
        let uvs = shape.mesh().face_uvs().to_vec();
        let mesh = shape.bend(Axis::Y, 45.0, false).unwrap();
        assert_eq!(mesh.faces(), faces.as_slice());
        assert_eq!(mesh.face_uvs(), uvs.as_slice());
    }

    #[test]
    fn test_bend_refreshes_normals_and_flags() {
        let mut shape = plane(2.0, 2.0, 1, 1);
        let mut mesh = shape.mesh().clone();
        mesh.clear_update_flags();
        let metadata = *shape.metadata().unwrap();

        let bent = bend(&mut mesh, Some(&metadata), Axis::X, 90.0, false).unwrap();
        assert!(bent.vertices_need_update());
        for normal in bent.face_normals().unwrap() {
            assert!(normal.x < -0.99);
        }

        // Shape-level call goes through the same path.
        shape.bend(Axis::X, 90.0, false).unwrap();
        assert_eq!(shape.mesh().vertices(), mesh.vertices());
    }

    #[test]
    fn test_bend_z_axis_unsupported() {
        let mut shape = plane(2.0, 2.0, 2, 2);
        let before = shape.mesh().clone();
        let result = shape.bend(Axis::Z, 90.0, false);
        assert!(matches!(result, Err(MeshError::UnsupportedAxis { .. })));
        assert_eq!(shape.mesh(), &before);
    }

    #[test]
    fn test_bend_without_metadata() {
        let mut shape = plane(2.0, 2.0, 2, 2);
        let mut mesh = shape.mesh().clone();
        let result = bend(&mut mesh, None, Axis::X, 90.0, false);
        assert!(matches!(result, Err(MeshError::Precondition { .. })));
        assert_eq!(&mesh, shape.mesh());

        let mut cube = crate::primitives::create_cube(1.0, &ShapeConfig::default()).unwrap();
        assert!(matches!(
            cube.bend(Axis::X, 10.0, false),
            Err(MeshError::Precondition { .. })
        ));
        assert!(shape.bend(Axis::X, 10.0, false).is_ok());
    }

    #[test]
    fn test_bend_metadata_mismatch() {
        let small = plane(1.0, 1.0, 1, 1);
        let large = plane(1.0, 1.0, 4, 4);
        let mut mesh = small.mesh().clone();
        let result = bend(&mut mesh, large.metadata(), Axis::X, 30.0, false);
        assert!(matches!(result, Err(MeshError::Precondition { .. })));
    }

    #[test]
    fn test_bend_non_finite_amount() {
        let mut shape = plane(2.0, 2.0, 2, 2);
        assert!(matches!(
            shape.bend(Axis::X, f64::NAN, false),
            Err(MeshError::InvalidShape { .. })
        ));
    }
}
