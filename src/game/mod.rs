pub mod entities;
pub mod scene;
pub mod systems;

pub use scene::Scene;
