pub mod movement_system;
pub mod render_system;

// Re-export commonly used types
pub use movement_system::{ MovementSystem, TableBounds };
pub use render_system::{ render_model, RenderSystem };
