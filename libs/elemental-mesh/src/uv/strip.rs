//! Strip UVs, shared by ribbons and cylinders.
//!
//! Both emit their vertices in pairs (upper vertex first) and two triangles
//! per segment, `(2s, 2s+1, next)` and `(next, 2s+1, next+1)`, so one layout
//! serves both.

use glam::DVec2;

/// UVs for `segments` strip segments. `u` runs along the strip, `v` is 1 on
/// the upper edge and 0 on the lower edge.
pub fn strip_uvs(segments: u32, spanning: bool) -> Vec<[DVec2; 3]> {
    let interval = 1.0 / segments as f64;
    let mut uvs = Vec::with_capacity(2 * segments as usize);

    for s in 0..segments {
        let (s1, s2) = if spanning {
            (s as f64 * interval, (s + 1) as f64 * interval)
        } else {
            (0.0, 1.0)
        };

        uvs.push([DVec2::new(s1, 1.0), DVec2::new(s1, 0.0), DVec2::new(s2, 1.0)]);
        uvs.push([DVec2::new(s2, 1.0), DVec2::new(s1, 0.0), DVec2::new(s2, 0.0)]);
    }

    uvs
}
