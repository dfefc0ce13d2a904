//! # Elemental Mesh
//!
//! Shared-vertex procedural meshes with per-face UVs and in-place
//! modifiers.
//!
//! ## Architecture
//!
//! ```text
//! ShapeConfig → primitives (Mesh + ShapeMetadata) → uv → modifiers
//!                                                          ↑
//!                          PixelSource (RgbaImage, RasterImage, NoiseField)
//! ```
//!
//! ## Shapes
//!
//! - **Plane**: `segments_x x segments_y` quad grid on the XY plane
//! - **Cube**: 8 shared corners, 12 triangles
//! - **Ribbon**: vertical strip along a path of points
//! - **Cylinder**: open ring of quads around the Z axis
//!
//! Vertices are never duplicated between adjacent faces. Texture seams are
//! handled by storing UVs per face instead.
//!
//! ## Usage
//!
//! ```rust
//! use elemental_mesh::{create_plane, Axis, ShapeConfig, UvMethod};
//!
//! let config = ShapeConfig::default()
//!     .with_segments(32, 32)
//!     .with_uv_method(UvMethod::Spanning);
//! let mut terrain = create_plane(100.0, 100.0, &config)?;
//! terrain.bend(Axis::Y, 30.0, false)?;
//!
//! let mesh = terrain.into_mesh();
//! assert_eq!(mesh.indices_u32().len(), 32 * 32 * 2 * 3);
//! # Ok::<(), elemental_mesh::MeshError>(())
//! ```
//!
//! With the default `noise` feature a value noise field can drive the
//! heightmap directly:
//!
//! ```rust
//! # #[cfg(feature = "noise")]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use elemental_mesh::{create_plane, ShapeConfig};
//! use elemental_noise::ValueNoise;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut terrain = create_plane(100.0, 100.0, &ShapeConfig::default().with_segments(32, 32))?;
//! let mut rng = StdRng::seed_from_u64(7);
//! let heights = ValueNoise::new(64, 64, 5)?.generate(&mut rng)?;
//! terrain.apply_heightmap(&heights, 12.0)?;
//! assert!(terrain.mesh().bounding_box().1.z <= 12.0);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "noise"))]
//! # fn main() {}
//! ```

pub mod error;
pub mod mesh;
pub mod modifiers;
pub mod options;
pub mod primitives;
pub mod raster;
pub mod shape;
pub mod uv;

pub use error::MeshError;
pub use mesh::Mesh;
pub use modifiers::{apply_heightmap, bend, Axis, DEFAULT_HEIGHTMAP_STRENGTH};
pub use options::{AtlasLayout, Pivot, ShapeConfig, UvMethod};
pub use primitives::{
    create_cube, create_cylinder, create_plane, create_ribbon, CubeFace, CylinderParams,
};
#[cfg(feature = "noise")]
pub use raster::blend_rasters;
pub use raster::{luminance, PixelSource, RasterImage};
pub use shape::{Dimensions, GridSegments, Shape, ShapeKind, ShapeMetadata};
