// Row-major 4x4 matrices. Upload with `transpose = true`.
pub type Mat4x4 = [f32; 16];
pub type Vec3 = [f32; 3];
pub type Vec2 = [f32; 2];

pub const WORLD_UP: Vec3 = [0.0, 1.0, 0.0];

pub fn mat4x4_identity() -> Mat4x4 {
    [
      1.0, 0.0, 0.0, 0.0,
      0.0, 1.0, 0.0, 0.0,
      0.0, 0.0, 1.0, 0.0,
      0.0, 0.0, 0.0, 1.0
    ]
}

pub fn mat4x4_translate(x: f32, y: f32, z: f32) -> Mat4x4 {
    [
      1.0, 0.0, 0.0,  x,
      0.0, 1.0, 0.0,  y,
      0.0, 0.0, 1.0,  z,
      0.0, 0.0, 0.0, 1.0
    ]
}

pub fn vec4_dot(a: [f32; 4], b: [f32; 4]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

pub fn mat4x4_row(mat: &Mat4x4, row: usize) -> [f32; 4] {
    let start_idx = row * 4;
    [mat[start_idx], mat[start_idx + 1], mat[start_idx + 2], mat[start_idx + 3]]
}

pub fn mat4x4_col(mat: &Mat4x4, col: usize) -> [f32; 4] {
    [mat[col], mat[4 + col], mat[8 + col], mat[12 + col]]
}

pub fn mat4x4_mul(a: Mat4x4, b: Mat4x4) -> Mat4x4 {
    let mut ret = [0.0; 16];
    for i in 0..16 {
        let row = i / 4;
        let col = i % 4;
        ret[i] = vec4_dot(mat4x4_row(&a, row), mat4x4_col(&b, col));
    }
    ret
}

/// Applies `mat` to a point (w = 1).
pub fn mat4x4_transform_point(mat: &Mat4x4, p: Vec3) -> Vec3 {
    let v = [p[0], p[1], p[2], 1.0];
    [
        vec4_dot(mat4x4_row(mat, 0), v),
        vec4_dot(mat4x4_row(mat, 1), v),
        vec4_dot(mat4x4_row(mat, 2), v),
    ]
}

pub fn mat4x4_extract_translation(mat: &Mat4x4) -> Vec3 {
    [mat[3], mat[7], mat[11]]
}

pub fn mat4x4_perspective(fov_y_radians: f32, aspect_ratio: f32, near: f32, far: f32) -> Mat4x4 {
    let f = 1.0 / (fov_y_radians * 0.5).tan();
    let range_inv = 1.0 / (near - far);

    [
        f / aspect_ratio, 0.0, 0.0,                          0.0,
        0.0,              f,   0.0,                          0.0,
        0.0,              0.0, (near + far) * range_inv,     (2.0 * near * far) * range_inv,
        0.0,              0.0, -1.0,                         0.0,
    ]
}

/// Right-handed look-at view matrix.
pub fn mat4x4_look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4x4 {
    let f = vec3_normalize(vec3_sub(target, eye));
    let s = vec3_normalize(vec3_cross(f, up));
    let u = vec3_cross(s, f);

    [
        s[0],  s[1],  s[2],  -vec3_dot(s, eye),
        u[0],  u[1],  u[2],  -vec3_dot(u, eye),
        -f[0], -f[1], -f[2],  vec3_dot(f, eye),
        0.0,   0.0,   0.0,    1.0,
    ]
}

pub fn vec3_add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

pub fn vec3_sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn vec3_scale(a: Vec3, s: f32) -> Vec3 {
    [a[0] * s, a[1] * s, a[2] * s]
}

pub fn vec3_dot(a: Vec3, b: Vec3) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn vec3_cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

pub fn vec3_length(a: Vec3) -> f32 {
    vec3_dot(a, a).sqrt()
}

/// Unit vector in the direction of `a`. A zero vector stays zero.
pub fn vec3_normalize(a: Vec3) -> Vec3 {
    let len = vec3_length(a);
    if len > 0.0 {
        vec3_scale(a, 1.0 / len)
    } else {
        a
    }
}

/// `normalize(a)`, or `None` when `|a|` is below `epsilon`.
pub fn vec3_try_normalize(a: Vec3, epsilon: f32) -> Option<Vec3> {
    let len = vec3_length(a);
    if len.is_finite() && len >= epsilon {
        Some(vec3_scale(a, 1.0 / len))
    } else {
        None
    }
}
