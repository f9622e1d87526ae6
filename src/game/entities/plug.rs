use std::rc::Rc;

use crate::engine::components::shapes::make_box;
use crate::engine::config::ShaderPaths;
use crate::engine::error::EngineResult;
use crate::engine::rendering::GpuBridge;
use crate::engine::utils::math::Vec3;

use super::SceneObject;

/// Wall socket on the +X wall.
pub const PLUG_CENTER: Vec3 = [2.98, -0.2, 0.8];
pub const PLUG_SIZE: Vec3 = [0.08, 0.06, 0.04];
const PLUG_COLOR: Vec3 = [0.15, 0.15, 0.15];

pub fn spawn_plug<G: GpuBridge>(gl: &Rc<G>, shaders: &ShaderPaths) -> EngineResult<SceneObject<G>> {
    let mesh = make_box(PLUG_CENTER, PLUG_SIZE, PLUG_COLOR, false);
    SceneObject::build(gl, "Plug", &mesh, &shaders.vertex, &shaders.fragment)
}
