pub mod bridge;
pub mod glow_bridge;
pub mod render_context;
#[cfg(test)]
pub mod recording_bridge;

pub use bridge::GpuBridge;
pub use render_context::RenderContext;
