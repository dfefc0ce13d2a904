//! # Primitives
//!
//! Shared-vertex builders for planes, cubes, ribbons and cylinders.
//!
//! Every builder validates all of its inputs first, then builds the
//! topology, computes the normals requested by the [`ShapeConfig`] and
//! assigns UVs with the configured [`UvMethod`](crate::UvMethod).

pub mod cube;
pub mod cylinder;
pub mod plane;
pub mod ribbon;

pub use cube::{create_cube, CubeFace};
pub use cylinder::{create_cylinder, CylinderParams};
pub use plane::create_plane;
pub use ribbon::create_ribbon;

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::options::ShapeConfig;
use crate::shape::{Shape, ShapeKind, ShapeMetadata};
use crate::uv;

/// Computes normals and UVs for a freshly built mesh and wraps it.
fn finish(
    mut mesh: Mesh,
    kind: ShapeKind,
    metadata: Option<ShapeMetadata>,
    config: &ShapeConfig,
) -> Result<Shape, MeshError> {
    if config.compute_vertex_normals {
        mesh.compute_vertex_normals();
    }
    if config.compute_face_normals {
        mesh.compute_face_normals();
    }

    uv::apply_uvs(&mut mesh, kind, metadata.as_ref(), config.uv_method)?;

    log::debug!(
        "built {:?}: {} vertices, {} faces",
        kind,
        mesh.vertex_count(),
        mesh.face_count()
    );

    Ok(Shape::new(mesh, kind, metadata))
}
