use std::rc::Rc;

use crate::engine::components::shapes::make_cable;
use crate::engine::config::ShaderPaths;
use crate::engine::error::EngineResult;
use crate::engine::rendering::GpuBridge;
use crate::engine::utils::math::Vec3;

use super::SceneObject;

/// Leaves the plug, sags toward the table and ends at the phone's edge.
pub const CABLE_CONTROL_POINTS: [Vec3; 3] = [
    [2.92, -0.25, 0.82],
    [1.2, -0.6, 0.9],
    [0.38, -1.05, 0.0],
];
pub const CABLE_SEGMENTS: u32 = 48;
const CABLE_COLOR: Vec3 = [0.1, 0.1, 0.1];

pub fn spawn_cable<G: GpuBridge>(gl: &Rc<G>, shaders: &ShaderPaths) -> EngineResult<SceneObject<G>> {
    let [p0, p1, p2] = CABLE_CONTROL_POINTS;
    let mesh = make_cable(p0, p1, p2, CABLE_SEGMENTS, CABLE_COLOR);
    SceneObject::build(gl, "Cable", &mesh, &shaders.vertex, &shaders.cable_fragment)
}
