pub mod config;
pub mod error;
pub mod utils;
pub mod systems;
pub mod components;
pub mod rendering;
pub mod managers;

pub use error::{ EngineError, EngineResult };
