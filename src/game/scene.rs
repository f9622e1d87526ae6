use std::rc::Rc;

use crate::engine::components::camera::Camera;
use crate::engine::components::texture::Texture;
use crate::engine::config::AppConfig;
use crate::engine::error::EngineResult;
use crate::engine::managers::assets_manager::load_texture;
use crate::engine::rendering::{ GpuBridge, RenderContext };
use crate::engine::systems::keyboard_input_system::KeyboardInputSystem;
use crate::engine::utils::math::Mat4x4;
use crate::game::entities::phone::{ PHONE_CENTER, PHONE_SIZE };
use crate::game::entities::{
    spawn_cable,
    spawn_phone,
    spawn_plug,
    spawn_room,
    spawn_storage_box,
    spawn_table,
    spawn_table_legs,
    SceneObject,
    TABLE_CENTER,
    TABLE_SIZE,
};
use crate::game::systems::movement_system::{ table_offset_bounds, MovementSystem, TableBounds };
use crate::game::systems::render_system::{ render_model, RenderSystem };

/// Everything drawn each frame, plus the state input can change.
pub struct Scene<G: GpuBridge> {
    gl: Rc<G>,
    room: SceneObject<G>,
    table: SceneObject<G>,
    legs: Vec<SceneObject<G>>,
    props: Vec<SceneObject<G>>,
    texture: Option<Texture<G>>,
    camera: Camera,
    table_bounds: TableBounds,
}

impl<G: GpuBridge> Scene<G> {
    /// Builds every model. GPU allocation failures are returned; shader and
    /// texture problems are only logged.
    pub fn new(gl: Rc<G>, config: &AppConfig) -> EngineResult<Self> {
        let shaders = &config.shaders;
        let room = spawn_room(&gl, shaders)?;
        let table = spawn_table(&gl, shaders)?;
        let legs = spawn_table_legs(&gl, shaders)?;
        let props = vec![
            spawn_phone(&gl, shaders)?,
            spawn_plug(&gl, shaders)?,
            spawn_cable(&gl, shaders)?,
            spawn_storage_box(&gl, shaders)?
        ];
        let texture = load_texture(&gl, &config.texture);

        let scene = Self {
            gl,
            room,
            table,
            legs,
            props,
            texture,
            camera: Camera::default(),
            table_bounds: table_offset_bounds(TABLE_CENTER, TABLE_SIZE, PHONE_CENTER, PHONE_SIZE),
        };
        log::info!("Scene ready with {} objects", scene.object_count());
        Ok(scene)
    }

    pub fn object_count(&self) -> usize {
        2 + self.legs.len() + self.props.len()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn table_offset(&self) -> (f32, f32) {
        (self.table.transform.position_x, self.table.transform.position_z)
    }

    pub fn table_bounds(&self) -> &TableBounds {
        &self.table_bounds
    }

    /// Applies one frame of held keys to the camera and the table.
    pub fn update(&mut self, input: &KeyboardInputSystem, dt: f32) {
        self.camera.apply_controls(&input.camera_controls(), dt);
        MovementSystem::move_table(&mut self.table.transform, &input.table_controls(), &self.table_bounds, dt);
    }

    /// Name and world matrix of every object, in draw order. Leg matrices are
    /// recomposed from the current table offset.
    pub fn world_matrices(&self) -> Vec<(&'static str, Mat4x4)> {
        let mut matrices = Vec::with_capacity(self.object_count());
        matrices.push((self.room.name, self.room.transform.get_matrix()));
        matrices.push((self.table.name, self.table.transform.get_matrix()));
        for leg in &self.legs {
            matrices.push((leg.name, leg.transform.relative_to(&self.table.transform)));
        }
        for prop in &self.props {
            matrices.push((prop.name, prop.transform.get_matrix()));
        }
        matrices
    }

    /// Clears the frame and draws every renderable object. Returns how many
    /// were drawn.
    pub fn render(&self, context: &RenderContext, time: f32) -> usize {
        RenderSystem::begin_frame(&*self.gl, context);

        let view = self.camera.get_view_matrix();
        let projection = context.projection();
        let objects = [&self.room, &self.table]
            .into_iter()
            .chain(self.legs.iter())
            .chain(self.props.iter());

        let mut drawn = 0;
        for (object, (_, model_matrix)) in objects.zip(self.world_matrices()) {
            let texture = if object.textured { self.texture.as_ref() } else { None };
            if render_model(&object.model, &model_matrix, &view, &projection, time, texture) {
                drawn += 1;
            }
        }
        log::trace!("Drew {} of {} objects", drawn, self.object_count());
        drawn
    }
}
