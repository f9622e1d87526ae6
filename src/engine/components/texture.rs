use std::rc::Rc;

use crate::engine::error::{ EngineError, EngineResult };
use crate::engine::rendering::GpuBridge;

/// A 2D texture owned by the GL context it was created in.
pub struct Texture<G: GpuBridge> {
    gl: Rc<G>,
    handle: G::Texture,
    width: u32,
    height: u32,
}

impl<G: GpuBridge> Texture<G> {
    /// Uploads tightly packed 8-bit pixels with 3 (RGB) or 4 (RGBA) channels.
    pub fn from_pixels(gl: Rc<G>, width: u32, height: u32, channels: u8, pixels: &[u8]) -> EngineResult<Self> {
        let format = match channels {
            3 => glow::RGB,
            4 => glow::RGBA,
            other => {
                return Err(EngineError::Gpu(format!("unsupported channel count {}", other)));
            }
        };
        let expected = (width as usize) * (height as usize) * (channels as usize);
        if pixels.len() != expected {
            return Err(EngineError::Gpu(format!(
                "texture data is {} bytes, expected {}",
                pixels.len(),
                expected
            )));
        }

        let handle = gl.create_texture().map_err(EngineError::Gpu)?;
        gl.bind_texture(glow::TEXTURE_2D, Some(handle));
        gl.tex_image_2d_u8(width as i32, height as i32, format, pixels);
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, glow::LINEAR_MIPMAP_LINEAR as i32);
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, glow::LINEAR as i32);
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::REPEAT as i32);
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::REPEAT as i32);
        gl.generate_mipmap(glow::TEXTURE_2D);
        gl.bind_texture(glow::TEXTURE_2D, None);

        Ok(Self { gl, handle, width, height })
    }

    pub fn handle(&self) -> G::Texture {
        self.handle
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn bind(&self, unit: u32) {
        self.gl.active_texture(glow::TEXTURE0 + unit);
        self.gl.bind_texture(glow::TEXTURE_2D, Some(self.handle));
    }
}

impl<G: GpuBridge> Drop for Texture<G> {
    fn drop(&mut self) {
        self.gl.delete_texture(self.handle);
    }
}
