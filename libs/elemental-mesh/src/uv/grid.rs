//! Grid (plane) UVs.

use crate::shape::GridSegments;
use glam::DVec2;

/// UVs for a grid built cell by cell, row-major from the bottom-left.
///
/// Each cell's triangles are `(a, d, b)` and `(d, c, b)` with `a` the
/// cell's lower-left corner, `d` lower-right, `c` upper-right and `b`
/// upper-left.
pub fn grid_uvs(segments: GridSegments, spanning: bool) -> Vec<[DVec2; 3]> {
    let x_interval = 1.0 / segments.x as f64;
    let y_interval = 1.0 / segments.y as f64;

    let mut uvs = Vec::with_capacity(2 * segments.x as usize * segments.y as usize);

    for y in 0..segments.y {
        for x in 0..segments.x {
            let (u1, u2, v1, v2) = if spanning {
                (
                    x as f64 * x_interval,
                    (x + 1) as f64 * x_interval,
                    y as f64 * y_interval,
                    (y + 1) as f64 * y_interval,
                )
            } else {
                (0.0, 1.0, 0.0, 1.0)
            };

            uvs.push([DVec2::new(u1, v1), DVec2::new(u2, v1), DVec2::new(u1, v2)]);
            uvs.push([DVec2::new(u2, v1), DVec2::new(u2, v2), DVec2::new(u1, v2)]);
        }
    }

    uvs
}
