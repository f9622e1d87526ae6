//! Procedural mesh generators.
//!
//! Every function here is pure: it only builds a [`MeshData`], nothing touches
//! the GPU until the result is handed to a `Model`.

use crate::engine::components::mesh::MeshData;
use crate::engine::utils::math::{
    Vec2, Vec3, WORLD_UP, vec3_add, vec3_cross, vec3_scale, vec3_sub, vec3_try_normalize,
};

/// Half of the cable ribbon width.
pub const CABLE_HALF_WIDTH: f32 = 0.03;

const DEGENERATE_EPSILON: f32 = 1e-6;
const FALLBACK_AXIS: Vec3 = [1.0, 0.0, 0.0];

pub const ROOM_SIZE: Vec3 = [6.0, 4.0, 6.0];

/// Flat colors for the room faces, in `BOX_FACES` order.
pub const ROOM_FACE_COLORS: [Vec3; 6] = [
    [0.8, 0.8, 1.0], // back
    [1.0, 0.8, 0.8], // front
    [0.8, 1.0, 0.8], // left
    [1.0, 1.0, 0.7], // right
    [0.9, 0.9, 0.9], // top
    [0.5, 0.4, 0.3], // bottom
];

const BOX_CORNER_SIGNS: [Vec3; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

/// Corner quads per face, counter-clockwise seen from outside.
/// Order: back, front, left, right, top, bottom.
const BOX_FACES: [[u32; 4]; 6] = [
    [1, 0, 3, 2],
    [4, 5, 6, 7],
    [0, 4, 7, 3],
    [5, 1, 2, 6],
    [7, 6, 2, 3],
    [0, 1, 5, 4],
];

const FACE_UVS: [Vec2; 4] = [
    [0.0, 0.0],
    [1.0, 0.0],
    [1.0, 1.0],
    [0.0, 1.0],
];

fn box_corners(center: Vec3, size: Vec3) -> [Vec3; 8] {
    let hs = vec3_scale(size, 0.5);
    BOX_CORNER_SIGNS.map(|s| vec3_add(center, [s[0] * hs[0], s[1] * hs[1], s[2] * hs[2]]))
}

/// Axis-aligned box with 8 shared corners and one color.
///
/// `invert` flips the winding of every triangle so the box is visible from
/// inside.
pub fn make_box(center: Vec3, size: Vec3, color: Vec3, invert: bool) -> MeshData {
    let mut mesh = MeshData::new();
    for corner in box_corners(center, size) {
        mesh.push_vertex(corner, color);
    }
    for [a, b, c, d] in BOX_FACES {
        mesh.push_triangle(a, b, c);
        mesh.push_triangle(a, c, d);
    }
    if invert {
        mesh.flip_winding();
    }
    mesh
}

// 4 vertices per face so faces can carry their own color / UVs.
fn push_box_faces(
    mesh: &mut MeshData,
    center: Vec3,
    size: Vec3,
    face_color: impl Fn(usize) -> Vec3,
    inward: bool
) {
    let corners = box_corners(center, size);
    for (face, quad) in BOX_FACES.iter().enumerate() {
        let color = face_color(face);
        let base = mesh.vertex_count() as u32;
        for &corner in quad {
            mesh.push_vertex(corners[corner as usize], color);
        }
        if inward {
            mesh.push_triangle(base, base + 2, base + 1);
            mesh.push_triangle(base, base + 3, base + 2);
        } else {
            mesh.push_triangle(base, base + 1, base + 2);
            mesh.push_triangle(base, base + 2, base + 3);
        }
    }
}

/// The 6x4x6 room around the origin, one flat color per wall.
pub fn make_colored_room() -> MeshData {
    let mut mesh = MeshData::new();
    push_box_faces(&mut mesh, [0.0; 3], ROOM_SIZE, |face| ROOM_FACE_COLORS[face], true);
    mesh
}

/// Box with white vertex colors and the full texture on every face.
pub fn make_textured_box(center: Vec3, size: Vec3) -> MeshData {
    let mut mesh = MeshData::new();
    push_box_faces(&mut mesh, center, size, |_| [1.0; 3], false);
    mesh.uvs = Some(FACE_UVS.iter().copied().cycle().take(mesh.vertex_count()).collect());
    mesh
}

/// Point on the quadratic Bézier through `p0`, `p1`, `p2`.
pub fn quadratic_bezier(p0: Vec3, p1: Vec3, p2: Vec3, t: f32) -> Vec3 {
    let u = 1.0 - t;
    vec3_add(
        vec3_add(vec3_scale(p0, u * u), vec3_scale(p1, 2.0 * u * t)),
        vec3_scale(p2, t * t)
    )
}

/// Derivative of [`quadratic_bezier`] with respect to `t`.
pub fn quadratic_bezier_tangent(p0: Vec3, p1: Vec3, p2: Vec3, t: f32) -> Vec3 {
    vec3_add(
        vec3_scale(vec3_sub(p1, p0), 2.0 * (1.0 - t)),
        vec3_scale(vec3_sub(p2, p1), 2.0 * t)
    )
}

/// Flat ribbon along a quadratic Bézier curve.
///
/// The curve is sampled `segments + 1` times; each sample becomes two vertices
/// offset by [`CABLE_HALF_WIDTH`] along `tangent x up`. When the tangent
/// vanishes the chord `p2 - p0` is used, then +X. When the tangent is parallel
/// to up the previous sample's binormal is reused, or +X for the first sample.
/// `segments == 0` is treated as 1.
pub fn make_cable(p0: Vec3, p1: Vec3, p2: Vec3, segments: u32, color: Vec3) -> MeshData {
    let segments = segments.max(1);
    let mut mesh = MeshData::new();
    let mut last_binormal: Option<Vec3> = None;

    for i in 0..=segments {
        let t = (i as f32) / (segments as f32);
        let point = quadratic_bezier(p0, p1, p2, t);

        let tangent = vec3_try_normalize(quadratic_bezier_tangent(p0, p1, p2, t), DEGENERATE_EPSILON)
            .or_else(|| vec3_try_normalize(vec3_sub(p2, p0), DEGENERATE_EPSILON))
            .unwrap_or(FALLBACK_AXIS);

        let binormal = vec3_try_normalize(vec3_cross(tangent, WORLD_UP), DEGENERATE_EPSILON)
            .or(last_binormal)
            .unwrap_or(FALLBACK_AXIS);
        last_binormal = Some(binormal);

        let offset = vec3_scale(binormal, CABLE_HALF_WIDTH);
        mesh.push_vertex(vec3_sub(point, offset), color);
        mesh.push_vertex(vec3_add(point, offset), color);

        if i > 0 {
            let base = mesh.vertex_count() as u32 - 4;
            mesh.push_triangle(base, base + 1, base + 2);
            mesh.push_triangle(base + 1, base + 3, base + 2);
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::utils::math::{ vec3_dot, vec3_length };
    use approx::assert_abs_diff_eq;

    const RED: Vec3 = [1.0, 0.0, 0.0];

    fn face_normal(mesh: &MeshData, tri: [u32; 3]) -> Vec3 {
        let a = mesh.positions[tri[0] as usize];
        let b = mesh.positions[tri[1] as usize];
        let c = mesh.positions[tri[2] as usize];
        vec3_cross(vec3_sub(b, a), vec3_sub(c, a))
    }

    fn centroid(mesh: &MeshData, tri: [u32; 3]) -> Vec3 {
        let sum = tri
            .iter()
            .fold([0.0; 3], |acc, &i| vec3_add(acc, mesh.positions[i as usize]));
        vec3_scale(sum, 1.0 / 3.0)
    }

    #[test]
    fn test_box_counts() {
        let mesh = make_box([1.0, 2.0, 3.0], [2.0, 0.2, 1.0], RED, false);
        assert_eq!(mesh.positions.len(), 8);
        assert_eq!(mesh.colors.len(), 8);
        assert_eq!(mesh.indices.len(), 36);
        assert_eq!(mesh.triangle_count(), 12);
        assert!(mesh.indices.iter().all(|&i| i < 8));
        assert!(mesh.colors.iter().all(|&c| c == RED));
        assert!(mesh.uvs.is_none());
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_box_corners_span_size() {
        let mesh = make_box([0.0, -1.2, 0.0], [2.0, 0.2, 1.0], RED, false);
        for p in &mesh.positions {
            assert_abs_diff_eq!(p[0].abs(), 1.0, epsilon = 1e-6);
            assert_abs_diff_eq!((p[1] + 1.2).abs(), 0.1, epsilon = 1e-6);
            assert_abs_diff_eq!(p[2].abs(), 0.5, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_box_faces_outward() {
        let center = [0.5, 0.5, 0.5];
        let mesh = make_box(center, [1.0, 2.0, 3.0], RED, false);
        for tri in mesh.triangles() {
            let outward = vec3_sub(centroid(&mesh, tri), center);
            assert!(vec3_dot(face_normal(&mesh, tri), outward) > 0.0);
        }
    }

    #[test]
    fn test_invert_swaps_last_two_indices() {
        let normal = make_box([0.0; 3], [1.0; 3], RED, false);
        let inverted = make_box([0.0; 3], [1.0; 3], RED, true);
        assert_eq!(normal.positions, inverted.positions);
        for (a, b) in normal.triangles().zip(inverted.triangles()) {
            assert_eq!([a[0], a[2], a[1]], b);
        }

        let mut twice = inverted.clone();
        twice.flip_winding();
        assert_eq!(twice.indices, normal.indices);
    }

    #[test]
    fn test_colored_room_layout() {
        let mesh = make_colored_room();
        assert_eq!(mesh.positions.len(), 24);
        assert_eq!(mesh.colors.len(), 24);
        assert_eq!(mesh.indices.len(), 36);

        for (face, block) in mesh.indices.chunks(6).enumerate() {
            let base = (face * 4) as u32;
            assert!(block.iter().all(|&i| i >= base && i <= base + 3));
            for v in base..base + 4 {
                assert_eq!(mesh.colors[v as usize], ROOM_FACE_COLORS[face]);
            }
        }
    }

    #[test]
    fn test_colored_room_visible_from_inside() {
        let mesh = make_colored_room();
        for tri in mesh.triangles() {
            let toward_wall = centroid(&mesh, tri);
            assert!(vec3_dot(face_normal(&mesh, tri), toward_wall) < 0.0);
        }
    }

    #[test]
    fn test_textured_box_uvs() {
        let mesh = make_textured_box([0.0; 3], [0.5; 3]);
        assert_eq!(mesh.positions.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
        let uvs = mesh.uvs.as_ref().expect("textured box has uvs");
        assert_eq!(uvs.len(), 24);
        for face in uvs.chunks(4) {
            assert_eq!(face, &FACE_UVS[..]);
        }
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_cable_counts() {
        for n in [1u32, 2, 7, 48] {
            let mesh = make_cable([2.92, -0.25, 0.82], [1.2, -0.6, 0.9], [0.38, -1.05, 0.0], n, RED);
            assert_eq!(mesh.positions.len(), 2 * (n as usize + 1));
            assert_eq!(mesh.indices.len(), 6 * n as usize);
            assert!(mesh.validate().is_ok());
        }
    }

    #[test]
    fn test_cable_endpoints_and_width() {
        let p0 = [0.0, 0.0, 0.0];
        let p2 = [2.0, 0.0, 0.0];
        let mesh = make_cable(p0, [1.0, 0.0, 1.0], p2, 8, RED);

        let start = vec3_scale(vec3_add(mesh.positions[0], mesh.positions[1]), 0.5);
        let end = vec3_scale(vec3_add(mesh.positions[16], mesh.positions[17]), 0.5);
        assert_abs_diff_eq!(vec3_length(vec3_sub(start, p0)), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(vec3_length(vec3_sub(end, p2)), 0.0, epsilon = 1e-5);

        for pair in mesh.positions.chunks(2) {
            let width = vec3_length(vec3_sub(pair[1], pair[0]));
            assert_abs_diff_eq!(width, 2.0 * CABLE_HALF_WIDTH, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_cable_degenerate_is_finite() {
        let p = [0.3, -1.0, 0.2];
        let mesh = make_cable(p, p, p, 4, RED);
        assert_eq!(mesh.positions.len(), 10);
        for v in &mesh.positions {
            assert!(v.iter().all(|c| c.is_finite()));
        }
        // +X tangent fallback gives a +Z binormal
        assert_abs_diff_eq!(mesh.positions[0][0], p[0], epsilon = 1e-6);
        assert_abs_diff_eq!(mesh.positions[0][2], p[2] - CABLE_HALF_WIDTH, epsilon = 1e-6);
        assert_eq!(mesh, make_cable(p, p, p, 4, RED));
    }

    #[test]
    fn test_cable_vertical_tangent_is_finite() {
        let mesh = make_cable([0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 2.0, 0.0], 3, RED);
        for v in &mesh.positions {
            assert!(v.iter().all(|c| c.is_finite()));
        }
    }

    #[test]
    fn test_cable_zero_segments() {
        let mesh = make_cable([0.0; 3], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0], 0, RED);
        assert_eq!(mesh.positions.len(), 4);
        assert_eq!(mesh.indices.len(), 6);
    }
}
