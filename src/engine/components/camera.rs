use crate::engine::systems::keyboard_input_system::CameraControls;
use crate::engine::utils::math::{
    Mat4x4, Vec3, WORLD_UP, mat4x4_look_at, vec3_add, vec3_cross, vec3_normalize, vec3_scale,
};

pub const MOVE_SPEED: f32 = 2.0;
/// Degrees per second.
pub const YAW_SPEED: f32 = 60.0;
/// Degrees per second.
pub const PITCH_SPEED: f32 = 40.0;
pub const PITCH_LIMIT: f32 = 89.0;

/// Free-fly camera. Angles are in degrees; yaw 0 looks down -Z.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    yaw: f32,
    pitch: f32,
}

impl Camera {
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
        }
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Add rotation delta, keeping pitch inside `[-PITCH_LIMIT, PITCH_LIMIT]`.
    pub fn add_rotation_delta(&mut self, pitch_delta: f32, yaw_delta: f32) {
        if yaw_delta.is_finite() {
            self.yaw = (self.yaw + yaw_delta) % 360.0;
        }
        if pitch_delta.is_finite() {
            self.pitch = (self.pitch + pitch_delta).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
    }

    /// Horizontal forward and right vectors, used for WASD movement.
    pub fn get_basis_vectors(&self) -> (Vec3, Vec3) {
        let yaw = self.yaw.to_radians();
        let forward = [yaw.sin(), 0.0, -yaw.cos()];
        let right = vec3_normalize(vec3_cross(forward, WORLD_UP));
        (forward, right)
    }

    /// Unit view direction: yaw about +Y, then pitch.
    pub fn direction(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        [yaw.sin() * pitch.cos(), pitch.sin(), -yaw.cos() * pitch.cos()]
    }

    /// Integrates one frame of held keys.
    pub fn apply_controls(&mut self, controls: &CameraControls, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let (forward, right) = self.get_basis_vectors();
        let step = MOVE_SPEED * dt;
        self.position = vec3_add(self.position, vec3_scale(forward, controls.forward * step));
        self.position = vec3_add(self.position, vec3_scale(right, controls.strafe * step));
        self.position[1] += controls.vertical * step;

        self.add_rotation_delta(controls.pitch * PITCH_SPEED * dt, controls.yaw * YAW_SPEED * dt);
    }

    pub fn get_view_matrix(&self) -> Mat4x4 {
        mat4x4_look_at(self.position, vec3_add(self.position, self.direction()), WORLD_UP)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new([0.0, 0.0, 2.5], 0.0, 0.0)
    }
}
