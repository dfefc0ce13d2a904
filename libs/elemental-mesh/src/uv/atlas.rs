//! Cube UVs: tiled faces or a cube-map atlas.
//!
//! ```text
//!  v
//!  1 +------+------+------+------+
//!    |      | top  |      |      |      Cross layout: caps in column 1
//!    +------+------+------+------+
//!    | left |front |right | back |
//!    +------+------+------+------+
//!    |      |bottom|      |      |
//!  0 +------+------+------+------+ u
//!    0                           1
//! ```

use crate::options::{AtlasLayout, UvMethod};
use crate::primitives::cube::CubeFace;
use config::constants::{ATLAS_COLUMNS, ATLAS_ROWS, EDGE_BLEED_FIX};
use glam::DVec2;

/// Axis-aligned rectangle in texture space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvRect {
    /// Left edge
    pub u1: f64,
    /// Bottom edge
    pub v1: f64,
    /// Right edge
    pub u2: f64,
    /// Top edge
    pub v2: f64,
}

impl UvRect {
    /// The full texture.
    pub const UNIT: Self = Self {
        u1: 0.0,
        v1: 0.0,
        u2: 1.0,
        v2: 1.0,
    };

    /// Both triangles of one cube face, in the corner order of the cube's
    /// face table.
    fn face_uvs(&self) -> [[DVec2; 3]; 2] {
        [
            [
                DVec2::new(self.u1, self.v2),
                DVec2::new(self.u1, self.v1),
                DVec2::new(self.u2, self.v2),
            ],
            [
                DVec2::new(self.u1, self.v1),
                DVec2::new(self.u2, self.v1),
                DVec2::new(self.u2, self.v2),
            ],
        ]
    }
}

/// Atlas cell of a cube face, inset by [`EDGE_BLEED_FIX`] on every edge.
pub fn atlas_cell(face: CubeFace, layout: AtlasLayout) -> UvRect {
    let cell_width = 1.0 / ATLAS_COLUMNS as f64;
    let cell_height = 1.0 / ATLAS_ROWS as f64;

    let row = match face {
        CubeFace::Bottom => 0,
        CubeFace::Top => 2,
        _ => 1,
    };
    let v1 = row as f64 * cell_height + EDGE_BLEED_FIX;
    let v2 = (row + 1) as f64 * cell_height - EDGE_BLEED_FIX;

    let (u1, u2) = match (face, layout) {
        (CubeFace::Bottom | CubeFace::Top, AtlasLayout::Cross) => {
            let u1 = cell_width + EDGE_BLEED_FIX;
            (u1, u1 + cell_width - 2.0 * EDGE_BLEED_FIX)
        }
        (CubeFace::Bottom | CubeFace::Top, AtlasLayout::Doubled) => {
            // The inset origin itself is doubled, not just the column.
            let u1 = 2.0 * (cell_width + EDGE_BLEED_FIX);
            (u1, u1 + cell_width - 2.0 * EDGE_BLEED_FIX)
        }
        (side, _) => {
            let column = side.index() as f64;
            (
                column * cell_width + EDGE_BLEED_FIX,
                (column + 1.0) * cell_width - EDGE_BLEED_FIX,
            )
        }
    };

    UvRect { u1, v1, u2, v2 }
}

/// UVs for the twelve cube triangles.
///
/// [`UvMethod::Spanning`] is rejected before this is reached and maps like
/// `Tiled` here.
pub fn cube_uvs(method: UvMethod) -> Vec<[DVec2; 3]> {
    CubeFace::ALL
        .iter()
        .flat_map(|&face| {
            let rect = match method {
                UvMethod::AtlasCross(layout) => atlas_cell(face, layout),
                UvMethod::Tiled | UvMethod::Spanning => UvRect::UNIT,
            };
            rect.face_uvs()
        })
        .collect()
}
