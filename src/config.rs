//! Shared JSON config file helpers.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {1}", .0.display())]
    Read(PathBuf, #[source] std::io::Error),
    #[error("Failed to parse config file {}: {1}", .0.display())]
    Parse(PathBuf, #[source] serde_json::Error),
    #[error("Failed to create config directory {}: {1}", .0.display())]
    CreateDir(PathBuf, #[source] std::io::Error),
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to write config file {}: {1}", .0.display())]
    Write(PathBuf, #[source] std::io::Error),
}

/// Application data directory shared by every Kokoro config file.
pub fn app_data_dir() -> PathBuf {
    dirs_next::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("com.chyin.kokoro")
}

/// Read a JSON config. `Ok(None)` when the file does not exist; callers
/// decide how to fall back.
pub fn read_json_config<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(ConfigError::Read(path.to_path_buf(), e)),
    };
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
}

/// Pretty-print a config to `path`, creating parent directories.
pub fn write_json_config<T: Serialize>(path: &Path, config: &T) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| ConfigError::CreateDir(parent.to_path_buf(), e))?;
    }
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json).map_err(|e| ConfigError::Write(path.to_path_buf(), e))
}
