use std::rc::Rc;

use crate::engine::components::shapes::make_box;
use crate::engine::config::ShaderPaths;
use crate::engine::error::EngineResult;
use crate::engine::rendering::GpuBridge;
use crate::engine::utils::math::Vec3;

use super::SceneObject;

/// Resting on the table top, right of center.
pub const PHONE_CENTER: Vec3 = [0.3, -1.05, 0.0];
pub const PHONE_SIZE: Vec3 = [0.2, 0.02, 0.12];
const PHONE_COLOR: Vec3 = [0.05, 0.05, 0.05];

pub fn spawn_phone<G: GpuBridge>(gl: &Rc<G>, shaders: &ShaderPaths) -> EngineResult<SceneObject<G>> {
    let mesh = make_box(PHONE_CENTER, PHONE_SIZE, PHONE_COLOR, false);
    SceneObject::build(gl, "Phone", &mesh, &shaders.vertex, &shaders.fragment)
}
