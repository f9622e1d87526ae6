use crate::engine::rendering::bridge::GpuBridge;
use crate::engine::utils::math::{ Mat4x4, mat4x4_perspective };

pub const FIELD_OF_VIEW_DEGREES: f32 = 60.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 100.0;

/// Framebuffer size as last reported by the window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderContext {
    width: u32,
    height: u32,
}

impl RenderContext {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width over height; a minimised window (zero height) reports 1.0.
    pub fn aspect_ratio(&self) -> f32 {
        if self.width == 0 || self.height == 0 {
            1.0
        } else {
            (self.width as f32) / (self.height as f32)
        }
    }

    pub fn projection(&self) -> Mat4x4 {
        mat4x4_perspective(FIELD_OF_VIEW_DEGREES.to_radians(), self.aspect_ratio(), NEAR_PLANE, FAR_PLANE)
    }

    pub fn resize<G: GpuBridge>(&mut self, gl: &G, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.apply_viewport(gl);
    }

    pub fn apply_viewport<G: GpuBridge>(&self, gl: &G) {
        gl.viewport(0, 0, self.width as i32, self.height as i32);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::rendering::recording_bridge::{ GlCall, RecordingBridge };
    use approx::assert_relative_eq;

    #[test]
    fn test_aspect_ratio() {
        assert_relative_eq!(RenderContext::new(1024, 768).aspect_ratio(), 4.0 / 3.0);
        assert_relative_eq!(RenderContext::new(800, 0).aspect_ratio(), 1.0);
    }

    #[test]
    fn test_projection_uses_aspect() {
        let proj = RenderContext::new(1024, 768).projection();
        let f = 1.0 / (FIELD_OF_VIEW_DEGREES.to_radians() * 0.5).tan();
        assert_relative_eq!(proj[5], f, epsilon = 1e-6);
        assert_relative_eq!(proj[0], f * 768.0 / 1024.0, epsilon = 1e-6);
    }

    #[test]
    fn test_resize_updates_viewport() {
        let gl = RecordingBridge::new();
        let mut ctx = RenderContext::new(1024, 768);
        ctx.resize(&gl, 640, 480);
        assert_eq!(ctx.width(), 640);
        assert_eq!(ctx.height(), 480);
        assert_eq!(gl.calls(), vec![GlCall::Viewport(0, 0, 640, 480)]);
    }
}
