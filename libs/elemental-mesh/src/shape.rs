//! # Shapes
//!
//! A built [`Mesh`] together with what the UV mapper and the modifiers need
//! to know about how it was built.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::modifiers::{self, Axis};
use crate::options::UvMethod;
use crate::raster::PixelSource;
use crate::uv;
use serde::{Deserialize, Serialize};

/// Quad counts along each axis of a grid shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSegments {
    /// Quads along X
    pub x: u32,
    /// Quads along Y
    pub y: u32,
}

impl GridSegments {
    /// Number of vertices in one row of the grid.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.x as usize + 1
    }

    /// Total number of grid vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.row_len() * (self.y as usize + 1)
    }

    /// Index of the grid vertex at column `x`, row `y`.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> u32 {
        y * (self.x + 1) + x
    }
}

/// Extent of a grid shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Extent along X
    pub width: f64,
    /// Extent along Y
    pub height: f64,
}

/// Layout of a grid shape, required by the grid UV mapping and by the
/// modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeMetadata {
    /// Quad counts
    pub segments: GridSegments,
    /// Extent
    pub dimensions: Dimensions,
}

/// Which builder produced a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Segmented plane (grid)
    Plane,
    /// Eight-vertex cube
    Cube,
    /// Vertical strip along a path
    Ribbon {
        /// Strip segments (path points - 1)
        segments: u32,
    },
    /// Open ring of quads (tire)
    Cylinder {
        /// Segments around the ring
        segments: u32,
    },
}

/// Result of a builder call.
///
/// # Example
///
/// ```rust
/// use elemental_mesh::{create_plane, Axis, ShapeConfig};
///
/// let mut plane = create_plane(4.0, 4.0, &ShapeConfig::default().with_segments(8, 8))?;
/// plane.bend(Axis::X, 90.0, false)?;
/// let mesh = plane.into_mesh();
/// assert_eq!(mesh.vertex_count(), 81);
/// # Ok::<(), elemental_mesh::MeshError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawShape")]
pub struct Shape {
    mesh: Mesh,
    kind: ShapeKind,
    metadata: Option<ShapeMetadata>,
}

/// Wire form of a [`Shape`]; the mesh is already checked on its own.
#[derive(Deserialize)]
struct RawShape {
    mesh: Mesh,
    kind: ShapeKind,
    metadata: Option<ShapeMetadata>,
}

impl TryFrom<RawShape> for Shape {
    type Error = MeshError;

    /// Rejects shapes whose topology does not match what their builder
    /// would have produced.
    fn try_from(raw: RawShape) -> Result<Self, Self::Error> {
        let mesh = &raw.mesh;
        let (vertices, faces) = match (raw.kind, raw.metadata.as_ref()) {
            (ShapeKind::Plane, Some(metadata)) => {
                let segments = metadata.segments;
                (
                    segments.vertex_count(),
                    2 * segments.x as usize * segments.y as usize,
                )
            }
            (ShapeKind::Plane, None) => {
                return Err(MeshError::precondition("Plane shape without grid metadata"));
            }
            (_, Some(_)) => {
                return Err(MeshError::precondition(format!(
                    "{:?} shape cannot carry grid metadata",
                    raw.kind
                )));
            }
            (ShapeKind::Cube, None) => (8, 12),
            (ShapeKind::Ribbon { segments }, None) => {
                (2 * (segments as usize + 1), 2 * segments as usize)
            }
            (ShapeKind::Cylinder { segments }, None) => {
                (2 * segments as usize, 2 * segments as usize)
            }
        };

        if mesh.vertex_count() != vertices || mesh.face_count() != faces {
            return Err(MeshError::precondition(format!(
                "{:?} shape expects {} vertices and {} faces, mesh has {} and {}",
                raw.kind,
                vertices,
                faces,
                mesh.vertex_count(),
                mesh.face_count()
            )));
        }

        Ok(Shape::new(raw.mesh, raw.kind, raw.metadata))
    }
}

impl Shape {
    pub(crate) fn new(mesh: Mesh, kind: ShapeKind, metadata: Option<ShapeMetadata>) -> Self {
        Self {
            mesh,
            kind,
            metadata,
        }
    }

    /// The built mesh.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Which builder produced this shape.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Grid layout, present only for planes.
    pub fn metadata(&self) -> Option<&ShapeMetadata> {
        self.metadata.as_ref()
    }

    /// Releases the mesh.
    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }

    /// Recomputes the face UVs with another method.
    ///
    /// Topology is unchanged; the mesh is flagged for UV re-upload.
    pub fn set_uvs(&mut self, method: UvMethod) -> Result<(), MeshError> {
        uv::apply_uvs(&mut self.mesh, self.kind, self.metadata.as_ref(), method)
    }

    /// Bends the grid into an arc. See [`modifiers::bend`].
    pub fn bend(&mut self, axis: Axis, amount: f64, reverse: bool) -> Result<&Mesh, MeshError> {
        modifiers::bend(&mut self.mesh, self.metadata.as_ref(), axis, amount, reverse)
    }

    /// Displaces the grid along Z by image luminance times `strength`
    /// (usually [`DEFAULT_HEIGHTMAP_STRENGTH`](crate::DEFAULT_HEIGHTMAP_STRENGTH)).
    /// See [`modifiers::apply_heightmap`].
    pub fn apply_heightmap<S>(&mut self, source: &S, strength: f64) -> Result<&Mesh, MeshError>
    where
        S: PixelSource + ?Sized,
    {
        modifiers::apply_heightmap(&mut self.mesh, self.metadata.as_ref(), source, strength)
    }
}
