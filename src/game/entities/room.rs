use std::rc::Rc;

use crate::engine::components::shapes::make_colored_room;
use crate::engine::config::ShaderPaths;
use crate::engine::error::EngineResult;
use crate::engine::rendering::GpuBridge;

use super::SceneObject;

pub fn spawn_room<G: GpuBridge>(gl: &Rc<G>, shaders: &ShaderPaths) -> EngineResult<SceneObject<G>> {
    SceneObject::build(gl, "Room", &make_colored_room(), &shaders.vertex, &shaders.fragment)
}
