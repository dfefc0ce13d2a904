//! # Mesh Modifiers
//!
//! In-place deformations of plane-built grids.
//!
//! Modifiers only move vertices: the face list, the face UVs and every vertex
//! index stay as the builder left them. Whichever normals the mesh already
//! carries are recomputed, and the mesh is flagged for a position re-upload.
//!
//! Both modifiers need the grid layout recorded by
//! [`create_plane`](crate::create_plane); calling them without it is a
//! [`MeshError::Precondition`].

mod bend;
mod heightmap;

pub use bend::bend;
pub use heightmap::{apply_heightmap, DEFAULT_HEIGHTMAP_STRENGTH};

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::shape::ShapeMetadata;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coordinate axis named by a modifier call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Grid columns
    X,
    /// Grid rows
    Y,
    /// Plane normal; never a valid bend axis
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

impl FromStr for Axis {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            _ => Err(MeshError::unsupported_axis(s)),
        }
    }
}

/// Returns the grid layout of `mesh`, or a precondition error if there is
/// none or it no longer matches the vertex count.
fn grid_layout<'a>(
    mesh: &Mesh,
    metadata: Option<&'a ShapeMetadata>,
    operation: &str,
) -> Result<&'a ShapeMetadata, MeshError> {
    let Some(metadata) = metadata else {
        log::warn!("{} called on a mesh without grid metadata", operation);
        return Err(MeshError::precondition(format!(
            "{} requires a plane-built mesh",
            operation
        )));
    };

    let expected = metadata.segments.vertex_count();
    if mesh.vertex_count() != expected {
        return Err(MeshError::precondition(format!(
            "{}: grid {}x{} expects {} vertices, mesh has {}",
            operation,
            metadata.segments.x,
            metadata.segments.y,
            expected,
            mesh.vertex_count()
        )));
    }

    Ok(metadata)
}
