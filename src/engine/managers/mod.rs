pub mod assets_manager;

pub use assets_manager::{ decode_image, load_texture, read_shader_source, DecodedImage };
