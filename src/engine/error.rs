use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("window creation failed: {0}")]
    Window(String),

    #[error("OpenGL context setup failed: {0}")]
    Context(String),

    #[error("GPU object allocation failed: {0}")]
    Gpu(String),

    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid mesh: {0}")]
    InvalidMesh(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
