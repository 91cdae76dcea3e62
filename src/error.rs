//! Errors from loading and drawing scenes.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Failed to read scene file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Invalid TOML scene: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON scene: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write drawing: {0}")]
    Io(#[from] io::Error),
}

impl SceneError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}
