//! Every object of the phone charging scene, one spawner per file.

pub mod cable;
pub mod phone;
pub mod plug;
pub mod room;
pub mod storage_box;
pub mod table;

pub use cable::spawn_cable;
pub use phone::spawn_phone;
pub use plug::spawn_plug;
pub use room::spawn_room;
pub use storage_box::spawn_storage_box;
pub use table::{ spawn_table, spawn_table_legs, TABLE_CENTER, TABLE_SIZE };

use std::path::Path;
use std::rc::Rc;

use crate::engine::components::mesh::MeshData;
use crate::engine::components::model::Model;
use crate::engine::components::transform::Transform;
use crate::engine::error::EngineResult;
use crate::engine::rendering::GpuBridge;

/// A named model plus where it sits in the world.
pub struct SceneObject<G: GpuBridge> {
    pub name: &'static str,
    pub model: Model<G>,
    pub transform: Transform,
    pub textured: bool,
}

impl<G: GpuBridge> SceneObject<G> {
    /// Loads `mesh` and the shader pair into a fresh model at the origin.
    pub fn build(
        gl: &Rc<G>,
        name: &'static str,
        mesh: &MeshData,
        vertex_shader: &Path,
        fragment_shader: &Path
    ) -> EngineResult<Self> {
        let mut model = Model::new(gl.clone())?;
        model.load_shaders(vertex_shader, fragment_shader)?;
        model.load_mesh(mesh)?;
        log::debug!("Spawned {} ({} vertices, {} indices)", name, model.vertex_count(), model.index_count());
        Ok(Self {
            name,
            model,
            transform: Transform::identity(),
            textured: mesh.uvs.is_some(),
        })
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }
}
