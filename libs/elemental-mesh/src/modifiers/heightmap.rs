//! Raster-driven displacement.

use super::grid_layout;
use crate::error::{ensure_finite, MeshError};
use crate::mesh::Mesh;
use crate::raster::{luminance, proportional_index, PixelSource};
use crate::shape::ShapeMetadata;
pub use config::constants::DEFAULT_HEIGHTMAP_STRENGTH;

/// Sets every grid vertex's Z to the luminance of its nearest pixel times
/// `strength`.
///
/// Grid vertex `(x, y)` reads pixel
/// `(floor(x * width / segments_x), floor(y * height / segments_y))`, clamped
/// to the image, without interpolation. Luminance is the mean of the RGB
/// channels scaled to `[0, 1]`. The value replaces Z rather than adding to
/// it, so applying the same map twice is the same as applying it once.
///
/// Pass [`DEFAULT_HEIGHTMAP_STRENGTH`] (1.0) to map white to a height of
/// one unit.
///
/// # Errors
///
/// - [`MeshError::Precondition`] for an empty image or a mesh without grid
///   metadata
/// - [`MeshError::InvalidShape`] for a non-finite `strength`
///
/// The mesh is not touched when an error is returned.
pub fn apply_heightmap<'m, S>(
    mesh: &'m mut Mesh,
    metadata: Option<&ShapeMetadata>,
    source: &S,
    strength: f64,
) -> Result<&'m Mesh, MeshError>
where
    S: PixelSource + ?Sized,
{
    let (width, height) = (source.width(), source.height());
    if width == 0 || height == 0 {
        log::warn!("rejected empty heightmap ({}x{})", width, height);
        return Err(MeshError::precondition(format!(
            "Heightmap image is empty: {}x{}",
            width, height
        )));
    }
    let metadata = grid_layout(mesh, metadata, "Heightmap")?;
    ensure_finite("Heightmap strength", strength)?;

    let segments = metadata.segments;
    let vertices = mesh.vertices_mut();

    for y in 0..=segments.y {
        let py = proportional_index(y, segments.y, height);
        for x in 0..=segments.x {
            let px = proportional_index(x, segments.x, width);
            let id = segments.index(x, y) as usize;
            vertices[id].z = luminance(source.pixel(px, py)) * strength;
        }
    }

    mesh.refresh_normals();

    log::debug!(
        "applied {}x{} heightmap to {}x{} grid (strength {})",
        width,
        height,
        segments.x,
        segments.y,
        strength
    );

    Ok(&*mesh)
}
