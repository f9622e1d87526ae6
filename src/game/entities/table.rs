use std::rc::Rc;

use crate::engine::components::shapes::make_box;
use crate::engine::components::transform::Transform;
use crate::engine::config::ShaderPaths;
use crate::engine::error::EngineResult;
use crate::engine::rendering::GpuBridge;
use crate::engine::utils::math::Vec3;

use super::SceneObject;

pub const TABLE_CENTER: Vec3 = [0.0, -1.2, 0.0];
pub const TABLE_SIZE: Vec3 = [2.0, 0.2, 1.0];
const TABLE_COLOR: Vec3 = [0.6, 0.3, 0.1];

pub const LEG_SIZE: Vec3 = [0.1, 0.7, 0.1];
/// Leg centers relative to the table's offset; they span from the floor
/// (y = -2) to the underside of the top.
pub const LEG_ANCHORS: [Vec3; 4] = [
    [-0.9, -1.65, -0.4],
    [0.9, -1.65, -0.4],
    [0.9, -1.65, 0.4],
    [-0.9, -1.65, 0.4],
];

pub fn spawn_table<G: GpuBridge>(gl: &Rc<G>, shaders: &ShaderPaths) -> EngineResult<SceneObject<G>> {
    let mesh = make_box(TABLE_CENTER, TABLE_SIZE, TABLE_COLOR, false);
    SceneObject::build(gl, "Table", &mesh, &shaders.vertex, &shaders.fragment)
}

/// Legs are modeled around the origin; their transform holds the local anchor
/// and is composed with the table's every frame.
pub fn spawn_table_legs<G: GpuBridge>(gl: &Rc<G>, shaders: &ShaderPaths) -> EngineResult<Vec<SceneObject<G>>> {
    let mesh = make_box([0.0; 3], LEG_SIZE, TABLE_COLOR, false);
    LEG_ANCHORS.iter()
        .map(|&anchor| {
            Ok(
                SceneObject::build(gl, "Table leg", &mesh, &shaders.vertex, &shaders.fragment)?.with_transform(
                    Transform::from_position(anchor)
                )
            )
        })
        .collect()
}
