//! In-memory `GpuBridge` that records every call, for unit tests.

use std::cell::{ Cell, RefCell };
use std::collections::HashSet;

use super::bridge::GpuBridge;

#[derive(Clone, Debug, PartialEq)]
pub enum GlCall {
    CreateVertexArray(u32),
    BindVertexArray(Option<u32>),
    DeleteVertexArray(u32),
    CreateBuffer(u32),
    BindBuffer(u32, Option<u32>),
    BufferData { target: u32, len: usize, usage: u32 },
    DeleteBuffer(u32),
    EnableAttrib(u32),
    DisableAttrib(u32),
    AttribPointer { index: u32, size: i32 },
    DrawElements { mode: u32, count: i32, element_type: u32 },
    DrawArrays { mode: u32, first: i32, count: i32 },
    CreateShader(u32),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader(u32, u32),
    BindAttribLocation(u32, u32, String),
    LinkProgram(u32),
    UseProgram(Option<u32>),
    DeleteProgram(u32),
    UniformMatrix4 { name: String, values: Vec<f32> },
    Uniform1f { name: String, value: f32 },
    Uniform1i { name: String, value: i32 },
    CreateTexture(u32),
    ActiveTexture(u32),
    BindTexture(u32, Option<u32>),
    TexImage2d { width: i32, height: i32, format: u32, len: usize },
    TexParameter(u32, u32, i32),
    GenerateMipmap(u32),
    DeleteTexture(u32),
    Viewport(i32, i32, i32, i32),
    ClearColor,
    Clear(u32),
    Enable(u32),
    DepthFunc(u32),
}

pub struct RecordingBridge {
    calls: RefCell<Vec<GlCall>>,
    next_handle: Cell<u32>,
    pub compile_ok: Cell<bool>,
    pub link_ok: Cell<bool>,
    pub fail_allocation: Cell<bool>,
    /// Allocations left before every further one fails; `None` is unlimited.
    pub allocation_budget: Cell<Option<u32>>,
    pub uniforms: RefCell<HashSet<String>>,
}

impl RecordingBridge {
    pub fn new() -> Self {
        let uniforms = ["MVP", "ModelMat", "u_time", "u_texture"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        Self {
            calls: RefCell::new(Vec::new()),
            next_handle: Cell::new(1),
            compile_ok: Cell::new(true),
            link_ok: Cell::new(true),
            fail_allocation: Cell::new(false),
            allocation_budget: Cell::new(None),
            uniforms: RefCell::new(uniforms),
        }
    }

    pub fn calls(&self) -> Vec<GlCall> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn count(&self, pred: impl Fn(&GlCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: GlCall) {
        self.calls.borrow_mut().push(call);
    }

    fn allocate(&self) -> Result<u32, String> {
        if self.fail_allocation.get() {
            return Err("out of handles".to_string());
        }
        match self.allocation_budget.get() {
            Some(0) => {
                return Err("out of handles".to_string());
            }
            Some(left) => self.allocation_budget.set(Some(left - 1)),
            None => {}
        }
        let handle = self.next_handle.get();
        self.next_handle.set(handle + 1);
        Ok(handle)
    }
}

impl GpuBridge for RecordingBridge {
    type Buffer = u32;
    type VertexArray = u32;
    type Shader = u32;
    type Program = u32;
    type Texture = u32;
    type UniformLocation = String;

    fn create_vertex_array(&self) -> Result<u32, String> {
        let handle = self.allocate()?;
        self.record(GlCall::CreateVertexArray(handle));
        Ok(handle)
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        self.record(GlCall::BindVertexArray(vertex_array));
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        self.record(GlCall::DeleteVertexArray(vertex_array));
    }

    fn create_buffer(&self) -> Result<u32, String> {
        let handle = self.allocate()?;
        self.record(GlCall::CreateBuffer(handle));
        Ok(handle)
    }

    fn bind_buffer(&self, target: u32, buffer: Option<u32>) {
        self.record(GlCall::BindBuffer(target, buffer));
    }

    fn buffer_data_u8_slice(&self, target: u32, data: &[u8], usage: u32) {
        self.record(GlCall::BufferData { target, len: data.len(), usage });
    }

    fn delete_buffer(&self, buffer: u32) {
        self.record(GlCall::DeleteBuffer(buffer));
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(GlCall::EnableAttrib(index));
    }

    fn disable_vertex_attrib_array(&self, index: u32) {
        self.record(GlCall::DisableAttrib(index));
    }

    fn vertex_attrib_pointer_f32(&self, index: u32, size: i32, _stride: i32, _offset: i32) {
        self.record(GlCall::AttribPointer { index, size });
    }

    fn draw_elements(&self, mode: u32, count: i32, element_type: u32, _offset: i32) {
        self.record(GlCall::DrawElements { mode, count, element_type });
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        self.record(GlCall::DrawArrays { mode, first, count });
    }

    fn create_shader(&self, _shader_type: u32) -> Result<u32, String> {
        let handle = self.allocate()?;
        self.record(GlCall::CreateShader(handle));
        Ok(handle)
    }

    fn shader_source(&self, _shader: u32, _source: &str) {}

    fn compile_shader(&self, shader: u32) {
        self.record(GlCall::CompileShader(shader));
    }

    fn get_shader_compile_status(&self, _shader: u32) -> bool {
        self.compile_ok.get()
    }

    fn get_shader_info_log(&self, _shader: u32) -> String {
        "0:1(1): error: syntax error".to_string()
    }

    fn delete_shader(&self, shader: u32) {
        self.record(GlCall::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        let handle = self.allocate()?;
        self.record(GlCall::CreateProgram(handle));
        Ok(handle)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.record(GlCall::AttachShader(program, shader));
    }

    fn bind_attrib_location(&self, program: u32, index: u32, name: &str) {
        self.record(GlCall::BindAttribLocation(program, index, name.to_string()));
    }

    fn link_program(&self, program: u32) {
        self.record(GlCall::LinkProgram(program));
    }

    fn get_program_link_status(&self, _program: u32) -> bool {
        self.link_ok.get() && self.compile_ok.get()
    }

    fn get_program_info_log(&self, _program: u32) -> String {
        "error: linking with uncompiled shader".to_string()
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(GlCall::UseProgram(program));
    }

    fn delete_program(&self, program: u32) {
        self.record(GlCall::DeleteProgram(program));
    }

    fn get_uniform_location(&self, _program: u32, name: &str) -> Option<String> {
        self.uniforms.borrow().contains(name).then(|| name.to_string())
    }

    fn uniform_matrix_4_f32_slice(&self, location: &String, _transpose: bool, values: &[f32]) {
        self.record(GlCall::UniformMatrix4 { name: location.clone(), values: values.to_vec() });
    }

    fn uniform_1_f32(&self, location: &String, value: f32) {
        self.record(GlCall::Uniform1f { name: location.clone(), value });
    }

    fn uniform_1_i32(&self, location: &String, value: i32) {
        self.record(GlCall::Uniform1i { name: location.clone(), value });
    }

    fn create_texture(&self) -> Result<u32, String> {
        let handle = self.allocate()?;
        self.record(GlCall::CreateTexture(handle));
        Ok(handle)
    }

    fn active_texture(&self, unit: u32) {
        self.record(GlCall::ActiveTexture(unit));
    }

    fn bind_texture(&self, target: u32, texture: Option<u32>) {
        self.record(GlCall::BindTexture(target, texture));
    }

    fn tex_image_2d_u8(&self, width: i32, height: i32, format: u32, pixels: &[u8]) {
        self.record(GlCall::TexImage2d { width, height, format, len: pixels.len() });
    }

    fn tex_parameter_i32(&self, target: u32, parameter: u32, value: i32) {
        self.record(GlCall::TexParameter(target, parameter, value));
    }

    fn generate_mipmap(&self, target: u32) {
        self.record(GlCall::GenerateMipmap(target));
    }

    fn delete_texture(&self, texture: u32) {
        self.record(GlCall::DeleteTexture(texture));
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(GlCall::Viewport(x, y, width, height));
    }

    fn clear_color(&self, _red: f32, _green: f32, _blue: f32, _alpha: f32) {
        self.record(GlCall::ClearColor);
    }

    fn clear(&self, mask: u32) {
        self.record(GlCall::Clear(mask));
    }

    fn enable(&self, capability: u32) {
        self.record(GlCall::Enable(capability));
    }

    fn depth_func(&self, func: u32) {
        self.record(GlCall::DepthFunc(func));
    }
}
