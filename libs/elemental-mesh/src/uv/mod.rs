//! # UV Mapping
//!
//! Assigns per-face texture coordinates to a built mesh.
//!
//! - **Tiled**: every quad (or strip segment) covers the full unit square
//! - **Spanning**: one texture stretched across all segments
//! - **AtlasCross**: cube faces placed on a 4x3 cube-map atlas
//!
//! Face order matches the order in which the builders emit faces, so a UV
//! list can be recomputed at any time without touching topology.

mod atlas;
mod grid;
mod strip;


pub use atlas::{atlas_cell, cube_uvs, UvRect};
pub use grid::grid_uvs;
pub use strip::strip_uvs;

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::options::UvMethod;
use crate::shape::{ShapeKind, ShapeMetadata};
use glam::DVec2;

/// Rejects method/shape pairings that have no meaning.
///
/// The atlas layout only exists for cubes, and a cube has no segment axis to
/// span a texture across.
pub fn check_method(kind: ShapeKind, method: UvMethod) -> Result<(), MeshError> {
    let result = match (kind, method) {
        (ShapeKind::Cube, UvMethod::Spanning) => Err(MeshError::precondition(
            "Spanning UVs are not defined for cubes; use Tiled or AtlasCross",
        )),
        (ShapeKind::Cube, _) => Ok(()),
        (_, UvMethod::AtlasCross(_)) => Err(MeshError::precondition(format!(
            "AtlasCross UVs require a cube, got {:?}",
            kind
        ))),
        _ => Ok(()),
    };
    if result.is_err() {
        log::warn!("rejected {:?} UVs for {:?}", method, kind);
    }
    result
}

/// Computes the face UVs of a shape without touching any mesh.
pub fn compute_uvs(
    kind: ShapeKind,
    metadata: Option<&ShapeMetadata>,
    method: UvMethod,
) -> Result<Vec<[DVec2; 3]>, MeshError> {
    check_method(kind, method)?;

    let spanning = method == UvMethod::Spanning;
    let uvs = match kind {
        ShapeKind::Plane => {
            let metadata = metadata.ok_or_else(|| {
                MeshError::precondition("Plane UVs need grid metadata")
            })?;
            grid_uvs(metadata.segments, spanning)
        }
        ShapeKind::Cube => cube_uvs(method),
        ShapeKind::Ribbon { segments } | ShapeKind::Cylinder { segments } => {
            strip_uvs(segments, spanning)
        }
    };
    Ok(uvs)
}

/// Computes and stores the face UVs of `mesh`, flagging them for re-upload.
///
/// On error the mesh is left untouched.
pub fn apply_uvs(
    mesh: &mut Mesh,
    kind: ShapeKind,
    metadata: Option<&ShapeMetadata>,
    method: UvMethod,
) -> Result<(), MeshError> {
    let uvs = compute_uvs(kind, metadata, method)?;
    mesh.set_face_uvs(uvs)?;
    log::debug!("assigned {:?} UVs to {} faces of {:?}", method, mesh.face_count(), kind);
    Ok(())
}
