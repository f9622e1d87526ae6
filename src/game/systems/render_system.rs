use crate::engine::components::model::Model;
use crate::engine::components::texture::Texture;
use crate::engine::rendering::{ GpuBridge, RenderContext };
use crate::engine::utils::math::{ Mat4x4, mat4x4_mul };

pub const MVP_UNIFORM: &str = "MVP";
pub const MODEL_MATRIX_UNIFORM: &str = "ModelMat";
pub const TIME_UNIFORM: &str = "u_time";
pub const TEXTURE_UNIFORM: &str = "u_texture";

#[derive(Debug)]
pub struct RenderSystem;

impl RenderSystem {
    /// One-time GL state for the scene.
    pub fn init<G: GpuBridge>(gl: &G, clear_color: [f32; 4]) {
        gl.enable(glow::DEPTH_TEST);
        gl.depth_func(glow::LESS);
        gl.clear_color(clear_color[0], clear_color[1], clear_color[2], clear_color[3]);
    }

    pub fn begin_frame<G: GpuBridge>(gl: &G, context: &RenderContext) {
        context.apply_viewport(gl);
        gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
    }
}

/// Draws one model with `MVP = projection * view * model_matrix`.
///
/// Uniforms the program does not declare are skipped. Models whose program
/// failed to build are not drawn; the return value says whether a draw
/// happened.
pub fn render_model<G: GpuBridge>(
    model: &Model<G>,
    model_matrix: &Mat4x4,
    view: &Mat4x4,
    projection: &Mat4x4,
    time: f32,
    texture: Option<&Texture<G>>
) -> bool {
    let program = match model.shader_program() {
        Some(program) if model.is_renderable() => program,
        _ => {
            return false;
        }
    };
    let gl = model.bridge();
    let mvp = mat4x4_mul(*projection, mat4x4_mul(*view, *model_matrix));

    gl.use_program(Some(program));
    if let Some(loc) = gl.get_uniform_location(program, MVP_UNIFORM) {
        gl.uniform_matrix_4_f32_slice(&loc, true, &mvp);
    }
    if let Some(loc) = gl.get_uniform_location(program, MODEL_MATRIX_UNIFORM) {
        gl.uniform_matrix_4_f32_slice(&loc, true, model_matrix);
    }
    if let Some(loc) = gl.get_uniform_location(program, TIME_UNIFORM) {
        gl.uniform_1_f32(&loc, time);
    }
    if let Some(texture) = texture {
        texture.bind(0);
        if let Some(loc) = gl.get_uniform_location(program, TEXTURE_UNIFORM) {
            gl.uniform_1_i32(&loc, 0);
        }
    }

    model.render(glow::TRIANGLES);
    true
}
