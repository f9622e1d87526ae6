pub mod camera;
pub mod mesh;
pub mod model;
pub mod shapes;
pub mod texture;
pub mod transform;

// Re-export the main component types
pub use camera::Camera;
pub use mesh::MeshData;
pub use model::Model;
pub use texture::Texture;
pub use transform::Transform;
