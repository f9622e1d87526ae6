use crate::engine::utils::math::{ Mat4x4, Vec3, mat4x4_mul, mat4x4_translate };

/// Placement of a model in the world. Translation only.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub position_x: f32,
    pub position_y: f32,
    pub position_z: f32,
}

impl Transform {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position_x: x,
            position_y: y,
            position_z: z,
        }
    }

    pub fn identity() -> Self {
        Self::default()
    }

    pub fn from_position(position: Vec3) -> Self {
        Self::new(position[0], position[1], position[2])
    }

    pub fn get_position(&self) -> Vec3 {
        [self.position_x, self.position_y, self.position_z]
    }

    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.position_x = x;
        self.position_y = y;
        self.position_z = z;
    }

    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        self.position_x += x;
        self.position_y += y;
        self.position_z += z;
    }

    pub fn get_matrix(&self) -> Mat4x4 {
        mat4x4_translate(self.position_x, self.position_y, self.position_z)
    }

    /// World matrix of a child placed at `self` relative to `parent`.
    pub fn relative_to(&self, parent: &Transform) -> Mat4x4 {
        mat4x4_mul(parent.get_matrix(), self.get_matrix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::utils::math::mat4x4_extract_translation;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_identity_matrix() {
        assert_eq!(Transform::identity().get_matrix(), crate::engine::utils::math::mat4x4_identity());
    }

    #[test]
    fn test_translate_accumulates() {
        let mut t = Transform::new(1.0, 0.0, 0.0);
        t.translate(0.5, -1.0, 2.0);
        assert_eq!(t.get_position(), [1.5, -1.0, 2.0]);
    }

    #[test]
    fn test_relative_to_parent() {
        let parent = Transform::new(0.5, 0.0, -0.25);
        let child = Transform::new(-0.9, -0.45, 0.4);
        let world = child.relative_to(&parent);
        let p = mat4x4_extract_translation(&world);
        assert_abs_diff_eq!(p[0], -0.4, epsilon = 1e-6);
        assert_abs_diff_eq!(p[1], -0.45, epsilon = 1e-6);
        assert_abs_diff_eq!(p[2], 0.15, epsilon = 1e-6);
    }
}
