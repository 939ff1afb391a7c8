/// Number of vertices submitted per draw call (12 triangles).
pub const VERTEX_COUNT: i32 = 36;

/// Cube positions, half-extent 0.25, centered at the origin.
///
/// Corner numbering (far face 0-1-2-3, near face 4-5-6-7):
///
/// ```text
///          0        3
///       7        4
///
///          1        2
///       6        5
/// ```
#[rustfmt::skip]
pub const VERTEX_POSITIONS: [f32; 108] = [
    // far face (-Z)
    -0.25, -0.25, -0.25, // 1
    -0.25,  0.25, -0.25, // 0
     0.25, -0.25, -0.25, // 2

     0.25,  0.25, -0.25, // 3
     0.25, -0.25, -0.25, // 2
    -0.25,  0.25, -0.25, // 0

    // right face (+X)
     0.25, -0.25, -0.25, // 2
     0.25,  0.25, -0.25, // 3
     0.25, -0.25,  0.25, // 5

     0.25,  0.25,  0.25, // 4
     0.25, -0.25,  0.25, // 5
     0.25,  0.25, -0.25, // 3

    // near face (+Z) — the textured one
     0.25, -0.25,  0.25, // 5
     0.25,  0.25,  0.25, // 4
    -0.25, -0.25,  0.25, // 6

    -0.25,  0.25,  0.25, // 7
    -0.25, -0.25,  0.25, // 6
     0.25,  0.25,  0.25, // 4

    // left face (-X)
    -0.25, -0.25,  0.25, // 6
    -0.25,  0.25,  0.25, // 7
    -0.25, -0.25, -0.25, // 1

    -0.25,  0.25, -0.25, // 0
    -0.25, -0.25, -0.25, // 1
    -0.25,  0.25,  0.25, // 7

    // bottom face (-Y)
     0.25, -0.25, -0.25, // 2
     0.25, -0.25,  0.25, // 5
    -0.25, -0.25, -0.25, // 1

    -0.25, -0.25,  0.25, // 6
    -0.25, -0.25, -0.25, // 1
     0.25, -0.25,  0.25, // 5

    // top face (+Y)
     0.25,  0.25,  0.25, // 4
     0.25,  0.25, -0.25, // 3
    -0.25,  0.25,  0.25, // 7

    -0.25,  0.25, -0.25, // 0
    -0.25,  0.25,  0.25, // 7
     0.25,  0.25, -0.25, // 3
];

/// Per-vertex texture coordinates, parallel to [`VERTEX_POSITIONS`].
///
/// Only the near (+Z) face carries real 0..1 coordinates; every other
/// entry is the (-1,-1) sentinel the fragment shader uses to fall back to
/// the position-derived gradient color. One textured face is the intended
/// effect.
#[rustfmt::skip]
pub const TEX_COORDS: [f32; 72] = [
    // far face (-Z)
    -1.0, -1.0,
    -1.0, -1.0,
    -1.0, -1.0,

    -1.0, -1.0,
    -1.0, -1.0,
    -1.0, -1.0,

    // right face (+X)
    -1.0, -1.0,
    -1.0, -1.0,
    -1.0, -1.0,

    -1.0, -1.0,
    -1.0, -1.0,
    -1.0, -1.0,

    // near face (+Z) — the textured one
     1.0,  0.0, // 5
     1.0,  1.0, // 4
     0.0,  0.0, // 6

     0.0,  1.0, // 7
     0.0,  0.0, // 6
     1.0,  1.0, // 4

    // left face (-X)
    -1.0, -1.0,
    -1.0, -1.0,
    -1.0, -1.0,

    -1.0, -1.0,
    -1.0, -1.0,
    -1.0, -1.0,

    // bottom face (-Y)
    -1.0, -1.0,
    -1.0, -1.0,
    -1.0, -1.0,

    -1.0, -1.0,
    -1.0, -1.0,
    -1.0, -1.0,

    // top face (+Y)
    -1.0, -1.0,
    -1.0, -1.0,
    -1.0, -1.0,

    -1.0, -1.0,
    -1.0, -1.0,
    -1.0, -1.0,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_buffer_holds_twelve_triangles() {
        assert_eq!(VERTEX_POSITIONS.len(), VERTEX_COUNT as usize * 3);
        assert_eq!(VERTEX_COUNT % 3, 0);
        assert_eq!(VERTEX_COUNT / 3, 12);
    }

    #[test]
    fn every_coordinate_sits_on_the_half_extent() {
        for (i, c) in VERTEX_POSITIONS.iter().enumerate() {
            assert_eq!(c.abs(), 0.25, "coordinate {i} off the cube surface");
        }
    }

    #[test]
    fn texcoord_buffer_is_parallel_to_positions() {
        assert_eq!(TEX_COORDS.len(), VERTEX_COUNT as usize * 2);
    }

    #[test]
    fn exactly_one_face_carries_real_texcoords() {
        // Vertices 12..18 are the two near-face triangles; everything else
        // must be the (-1,-1) sentinel.
        for (i, uv) in TEX_COORDS.chunks_exact(2).enumerate() {
            if (12..18).contains(&i) {
                assert!(
                    (0.0..=1.0).contains(&uv[0]) && (0.0..=1.0).contains(&uv[1]),
                    "vertex {i} should carry a real texcoord"
                );
            } else {
                assert_eq!(uv, [-1.0, -1.0], "vertex {i} should be the sentinel");
            }
        }
    }

    #[test]
    fn textured_face_is_planar() {
        // All six textured vertices lie on the +Z face.
        for i in 12..18 {
            assert_eq!(VERTEX_POSITIONS[i * 3 + 2], 0.25);
        }
    }
}
