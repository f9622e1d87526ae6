use std::path::Path;
use std::rc::Rc;

use crate::engine::components::mesh::MeshData;
use crate::engine::error::{ EngineError, EngineResult };
use crate::engine::managers::assets_manager::read_shader_source;
use crate::engine::rendering::GpuBridge;
use crate::engine::utils::math::{ Vec2, Vec3 };

/// Vertex attribute slots, bound by name before every link.
pub const POSITION_ATTRIBUTE: (u32, &str) = (0, "a_position");
pub const COLOR_ATTRIBUTE: (u32, &str) = (1, "a_color");
pub const UV_ATTRIBUTE: (u32, &str) = (2, "a_uv");

/// GPU-side copy of one mesh plus the program that draws it.
///
/// Buffers are created on the first matching `load_*` call and overwritten by
/// later ones. Everything the model allocated is released on drop.
pub struct Model<G: GpuBridge> {
    gl: Rc<G>,
    vao: G::VertexArray,
    vbo_coords: Option<G::Buffer>,
    vbo_colors: Option<G::Buffer>,
    vbo_uvs: Option<G::Buffer>,
    ibo: Option<G::Buffer>,
    vertex_count: usize,
    index_count: usize,
    shader_program: Option<G::Program>,
    program_linked: bool,
}

impl<G: GpuBridge> Model<G> {
    pub fn new(gl: Rc<G>) -> EngineResult<Self> {
        let vao = gl.create_vertex_array().map_err(EngineError::Gpu)?;
        Ok(Self {
            gl,
            vao,
            vbo_coords: None,
            vbo_colors: None,
            vbo_uvs: None,
            ibo: None,
            vertex_count: 0,
            index_count: 0,
            shader_program: None,
            program_linked: false,
        })
    }

    pub fn bridge(&self) -> &G {
        &self.gl
    }

    pub fn shader_program(&self) -> Option<G::Program> {
        self.shader_program
    }

    /// A model draws only once its program compiled and linked.
    pub fn is_renderable(&self) -> bool {
        self.shader_program.is_some() && self.program_linked
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn index_count(&self) -> usize {
        self.index_count
    }

    /// Reads, compiles and links a vertex + fragment shader pair.
    ///
    /// Shader problems never fail the call: they are logged and the model is
    /// left holding a program that [`is_renderable`](Self::is_renderable)
    /// reports as unusable.
    pub fn load_shaders(&mut self, vertex_path: impl AsRef<Path>, fragment_path: impl AsRef<Path>) -> EngineResult<()> {
        let vertex_path = vertex_path.as_ref();
        let fragment_path = fragment_path.as_ref();
        let vs_src = read_shader_source(vertex_path);
        let fs_src = read_shader_source(fragment_path);
        let label = format!("{} + {}", vertex_path.display(), fragment_path.display());
        self.load_shader_sources(&vs_src, &fs_src, &label)
    }

    /// Same as [`load_shaders`](Self::load_shaders) from in-memory sources.
    /// Only GL object allocation can fail.
    pub fn load_shader_sources(&mut self, vertex_source: &str, fragment_source: &str, label: &str) -> EngineResult<()> {
        let gl = &*self.gl;
        let vs = compile_shader(gl, glow::VERTEX_SHADER, vertex_source, label)?;
        let fs = match compile_shader(gl, glow::FRAGMENT_SHADER, fragment_source, label) {
            Ok(fs) => fs,
            Err(e) => {
                gl.delete_shader(vs.handle);
                return Err(e);
            }
        };

        let program = match gl.create_program() {
            Ok(program) => program,
            Err(e) => {
                gl.delete_shader(vs.handle);
                gl.delete_shader(fs.handle);
                return Err(EngineError::Gpu(e));
            }
        };
        gl.attach_shader(program, vs.handle);
        gl.attach_shader(program, fs.handle);
        for (index, name) in [POSITION_ATTRIBUTE, COLOR_ATTRIBUTE, UV_ATTRIBUTE] {
            gl.bind_attrib_location(program, index, name);
        }
        gl.link_program(program);

        let linked = gl.get_program_link_status(program);
        if !linked {
            log::error!("Program link error ({}): {}", label, gl.get_program_info_log(program));
        }

        gl.delete_shader(vs.handle);
        gl.delete_shader(fs.handle);

        if let Some(old) = self.shader_program.replace(program) {
            gl.delete_program(old);
        }
        self.program_linked = linked && vs.compiled && fs.compiled;
        if self.program_linked {
            log::debug!("Linked shader program {}", label);
        } else {
            log::warn!("Model with program {} will not be drawn", label);
        }
        Ok(())
    }

    pub fn load_coords(&mut self, vertices: &[Vec3]) -> EngineResult<()> {
        let buffer = self.upload(self.vbo_coords, glow::ARRAY_BUFFER, bytemuck::cast_slice(vertices))?;
        self.vbo_coords = Some(buffer);
        self.vertex_count = vertices.len();
        Ok(())
    }

    pub fn load_colors(&mut self, colors: &[Vec3]) -> EngineResult<()> {
        let buffer = self.upload(self.vbo_colors, glow::ARRAY_BUFFER, bytemuck::cast_slice(colors))?;
        self.vbo_colors = Some(buffer);
        Ok(())
    }

    pub fn load_uvs(&mut self, uvs: &[Vec2]) -> EngineResult<()> {
        let buffer = self.upload(self.vbo_uvs, glow::ARRAY_BUFFER, bytemuck::cast_slice(uvs))?;
        self.vbo_uvs = Some(buffer);
        Ok(())
    }

    pub fn load_indices(&mut self, indices: &[u32]) -> EngineResult<()> {
        let buffer = self.upload(self.ibo, glow::ELEMENT_ARRAY_BUFFER, bytemuck::cast_slice(indices))?;
        self.ibo = Some(buffer);
        self.index_count = indices.len();
        Ok(())
    }

    /// Validates `mesh` and uploads every stream it carries.
    pub fn load_mesh(&mut self, mesh: &MeshData) -> EngineResult<()> {
        mesh.validate()?;
        self.load_coords(&mesh.positions)?;
        self.load_colors(&mesh.colors)?;
        if let Some(uvs) = &mesh.uvs {
            self.load_uvs(uvs)?;
        }
        self.load_indices(&mesh.indices)
    }

    fn upload(&self, existing: Option<G::Buffer>, target: u32, bytes: &[u8]) -> EngineResult<G::Buffer> {
        let gl = &*self.gl;
        let buffer = match existing {
            Some(buffer) => buffer,
            None => gl.create_buffer().map_err(EngineError::Gpu)?,
        };
        gl.bind_vertex_array(Some(self.vao));
        gl.bind_buffer(target, Some(buffer));
        gl.buffer_data_u8_slice(target, bytes, glow::STATIC_DRAW);
        gl.bind_vertex_array(None);
        Ok(buffer)
    }

    /// Draws the loaded geometry with whatever program is current.
    ///
    /// Leaves vertex array 0 bound and every attribute stream it enabled
    /// disabled again. Program, uniforms and textures are the caller's job.
    pub fn render(&self, mode: u32) {
        let gl = &*self.gl;
        gl.bind_vertex_array(Some(self.vao));

        let streams = [
            (self.vbo_coords, POSITION_ATTRIBUTE.0, 3),
            (self.vbo_colors, COLOR_ATTRIBUTE.0, 3),
            (self.vbo_uvs, UV_ATTRIBUTE.0, 2),
        ];
        for (buffer, index, size) in streams {
            if let Some(buffer) = buffer {
                gl.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
                gl.enable_vertex_attrib_array(index);
                gl.vertex_attrib_pointer_f32(index, size, 0, 0);
            }
        }

        if let Some(ibo) = self.ibo {
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ibo));
            gl.draw_elements(mode, self.index_count as i32, glow::UNSIGNED_INT, 0);
        } else {
            gl.draw_arrays(mode, 0, self.vertex_count as i32);
        }

        for (buffer, index, _) in streams {
            if buffer.is_some() {
                gl.disable_vertex_attrib_array(index);
            }
        }
        gl.bind_vertex_array(None);
    }
}

impl<G: GpuBridge> Drop for Model<G> {
    fn drop(&mut self) {
        let gl = &*self.gl;
        for buffer in [self.vbo_coords, self.vbo_colors, self.vbo_uvs, self.ibo].into_iter().flatten() {
            gl.delete_buffer(buffer);
        }
        if let Some(program) = self.shader_program {
            gl.delete_program(program);
        }
        gl.delete_vertex_array(self.vao);
    }
}

struct CompiledShader<S> {
    handle: S,
    compiled: bool,
}

fn compile_shader<G: GpuBridge>(
    gl: &G,
    shader_type: u32,
    source: &str,
    label: &str
) -> EngineResult<CompiledShader<G::Shader>> {
    let handle = gl.create_shader(shader_type).map_err(EngineError::Gpu)?;
    gl.shader_source(handle, source);
    gl.compile_shader(handle);

    let compiled = gl.get_shader_compile_status(handle);
    if !compiled {
        let stage = if shader_type == glow::VERTEX_SHADER { "vertex" } else { "fragment" };
        log::error!("Shader compile error ({} {}): {}", label, stage, gl.get_shader_info_log(handle));
    }
    Ok(CompiledShader { handle, compiled })
}
