use std::fs;
use std::path::Path;
use std::rc::Rc;

use image::io::Reader as ImageReader;

use crate::engine::components::texture::Texture;
use crate::engine::error::{ EngineError, EngineResult };
use crate::engine::rendering::GpuBridge;

/// Decoded 8-bit image, rows tightly packed.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub pixels: Vec<u8>,
}

/// Reads a shader file. A missing or unreadable file is logged and yields an
/// empty string, which then fails to compile.
pub fn read_shader_source(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            log::error!("Cannot open shader file {}: {}", path.display(), e);
            String::new()
        }
    }
}

/// Decodes an image file to RGB (`desired_channels == 3`) or RGBA (otherwise).
pub fn decode_image(path: impl AsRef<Path>, desired_channels: u8) -> EngineResult<DecodedImage> {
    let path = path.as_ref();
    let img = ImageReader::open(path)
        .map_err(|source| EngineError::Io { path: path.to_path_buf(), source })?
        .with_guessed_format()
        .map_err(|source| EngineError::Io { path: path.to_path_buf(), source })?
        .decode()
        .map_err(|source| EngineError::Image { path: path.to_path_buf(), source })?;

    log::debug!("Decoded {} ({:?})", path.display(), img.color());

    let decoded = if desired_channels == 3 {
        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();
        DecodedImage { width, height, channels: 3, pixels: rgb.into_raw() }
    } else {
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        DecodedImage { width, height, channels: 4, pixels: rgba.into_raw() }
    };
    Ok(decoded)
}

/// Decodes `path` as RGB and uploads it. Any failure is logged and gives
/// `None`; callers then render without the texture.
pub fn load_texture<G: GpuBridge>(gl: &Rc<G>, path: impl AsRef<Path>) -> Option<Texture<G>> {
    let path = path.as_ref();
    let image = match decode_image(path, 3) {
        Ok(image) => image,
        Err(e) => {
            log::error!("Texture not loaded: {}", e);
            return None;
        }
    };

    match Texture::from_pixels(gl.clone(), image.width, image.height, image.channels, &image.pixels) {
        Ok(texture) => {
            log::info!("✅ Texture loaded: {} ({}x{})", path.display(), image.width, image.height);
            Some(texture)
        }
        Err(e) => {
            log::error!("Texture upload failed for {}: {}", path.display(), e);
            None
        }
    }
}
