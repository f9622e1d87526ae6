use std::rc::Rc;

use crate::engine::components::shapes::make_textured_box;
use crate::engine::config::ShaderPaths;
use crate::engine::error::EngineResult;
use crate::engine::rendering::GpuBridge;
use crate::engine::utils::math::Vec3;

use super::SceneObject;

/// Sits on the floor in the back-left corner.
pub const STORAGE_BOX_CENTER: Vec3 = [-1.8, -1.75, -1.8];
pub const STORAGE_BOX_SIZE: Vec3 = [0.5, 0.5, 0.5];

pub fn spawn_storage_box<G: GpuBridge>(gl: &Rc<G>, shaders: &ShaderPaths) -> EngineResult<SceneObject<G>> {
    let mesh = make_textured_box(STORAGE_BOX_CENTER, STORAGE_BOX_SIZE);
    SceneObject::build(gl, "Storage box", &mesh, &shaders.textured_vertex, &shaders.textured_fragment)
}
