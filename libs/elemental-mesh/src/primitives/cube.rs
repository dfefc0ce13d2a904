//! # Cube Primitive
//!
//! Generates an eight-vertex cube whose faces share corners.

use super::finish;
use crate::error::{ensure_positive, MeshError};
use crate::mesh::Mesh;
use crate::options::ShapeConfig;
use crate::shape::{Shape, ShapeKind};
use crate::uv;
use glam::DVec3;

/// The six cube faces, in the order their triangles are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubeFace {
    /// -X
    Left,
    /// +Z
    Front,
    /// +X
    Right,
    /// -Z
    Back,
    /// -Y
    Bottom,
    /// +Y
    Top,
}

impl CubeFace {
    /// All faces in emission order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::Left,
        CubeFace::Front,
        CubeFace::Right,
        CubeFace::Back,
        CubeFace::Bottom,
        CubeFace::Top,
    ];

    /// Position in [`CubeFace::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The face's two counter-clockwise triangles.
    ///
    /// Vertices 0-3 are the front corners (top-left, bottom-left,
    /// bottom-right, top-right seen from +Z), 4-7 the back corners with the
    /// same x/y order.
    pub fn triangles(self) -> [[u32; 3]; 2] {
        match self {
            CubeFace::Left => [[4, 5, 0], [5, 1, 0]],
            CubeFace::Front => [[0, 1, 3], [1, 2, 3]],
            CubeFace::Right => [[3, 2, 7], [2, 6, 7]],
            CubeFace::Back => [[7, 6, 4], [6, 5, 4]],
            CubeFace::Bottom => [[1, 5, 2], [5, 6, 2]],
            CubeFace::Top => [[4, 0, 7], [0, 3, 7]],
        }
    }
}

/// Creates a cube of edge length `size` from 8 shared vertices and 12
/// triangles.
///
/// The pivot moves the cube by `size / 2 * pivot` on each axis, so a pivot
/// of `(1, 1, 1)` puts the cube's minimum corner at the origin.
///
/// # Example
///
/// ```rust
/// use elemental_mesh::{create_cube, ShapeConfig};
///
/// let cube = create_cube(10.0, &ShapeConfig::default()).unwrap();
/// assert_eq!(cube.mesh().vertex_count(), 8);
/// assert_eq!(cube.mesh().face_count(), 12);
/// ```
pub fn create_cube(size: f64, config: &ShapeConfig) -> Result<Shape, MeshError> {
    ensure_positive("Cube size", size)?;
    config.pivot.validate()?;
    uv::check_method(ShapeKind::Cube, config.uv_method)?;

    let half = size / 2.0;
    let offset = config.pivot.as_vec() * half;

    let mut mesh = Mesh::with_capacity(8, 12);

    // Front corners (z = +half), then back corners (z = -half)
    for z in [half, -half] {
        mesh.add_vertex(DVec3::new(-half, half, z) + offset);
        mesh.add_vertex(DVec3::new(-half, -half, z) + offset);
        mesh.add_vertex(DVec3::new(half, -half, z) + offset);
        mesh.add_vertex(DVec3::new(half, half, z) + offset);
    }

    for face in CubeFace::ALL {
        for [a, b, c] in face.triangles() {
            mesh.add_face(a, b, c);
        }
    }

    finish(mesh, ShapeKind::Cube, None, config)
}
