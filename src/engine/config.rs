use std::fs;
use std::path::{ Path, PathBuf };

use serde::{ Deserialize, Serialize };

use crate::engine::error::{ EngineError, EngineResult };

pub const WINDOW_WIDTH: u32 = 1024;
pub const WINDOW_HEIGHT: u32 = 768;
pub const FULLSCREEN: bool = false;

/// Optional override file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "scene_config.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            fullscreen: FULLSCREEN,
            title: "Phone Charging Scene".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ShaderPaths {
    pub vertex: PathBuf,
    pub fragment: PathBuf,
    pub cable_fragment: PathBuf,
    pub textured_vertex: PathBuf,
    pub textured_fragment: PathBuf,
}

impl Default for ShaderPaths {
    fn default() -> Self {
        Self {
            vertex: "assets/shaders/vs.glsl".into(),
            fragment: "assets/shaders/fs.glsl".into(),
            cable_fragment: "assets/shaders/fs_cable.glsl".into(),
            textured_vertex: "assets/shaders/vs_textured.glsl".into(),
            textured_fragment: "assets/shaders/fs_textured.glsl".into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub shaders: ShaderPaths,
    pub texture: PathBuf,
    pub clear_color: [f32; 4],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            shaders: ShaderPaths::default(),
            texture: "assets/textures/box.png".into(),
            clear_color: [0.85, 0.9, 0.95, 1.0],
        }
    }
}

impl AppConfig {
    /// Defaults when `path` does not exist, an error when it is malformed.
    pub fn load(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .map_err(|source| EngineError::Io { path: path.to_path_buf(), source })?;
        let config = serde_json::from_str(&text)?;
        log::info!("Loaded config overrides from {}", path.display());
        Ok(config)
    }

    /// [`load`](Self::load), logging and falling back to defaults on error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("Ignoring config file: {}", e);
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("phone_scene_cfg_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = AppConfig::load(temp_path("missing.json")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!((config.window.width, config.window.height), (1024, 768));
        assert!(!config.window.fullscreen);
    }

    #[test]
    fn test_partial_override() {
        let path = temp_path("partial.json");
        fs::write(&path, r#"{ "window": { "fullscreen": true }, "texture": "wood.png" }"#).unwrap();
        let config = AppConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert!(config.window.fullscreen);
        assert_eq!(config.window.width, WINDOW_WIDTH);
        assert_eq!(config.texture, PathBuf::from("wood.png"));
        assert_eq!(config.shaders, ShaderPaths::default());
    }

    #[test]
    fn test_malformed_file() {
        let path = temp_path("bad.json");
        fs::write(&path, "{ window: ").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(EngineError::Config(_))));
        assert_eq!(AppConfig::load_or_default(&path), AppConfig::default());
        fs::remove_file(&path).unwrap();
    }
}
