use crate::domain::errors::ConfigError;
use crate::domain::models::ConfigFile;
use std::path::{Path, PathBuf};

pub fn config_path() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config/aclscan/config.toml"))
}

pub fn load_config() -> Result<ConfigFile, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(ConfigFile::default()),
    }
}

pub fn load_config_from(path: &Path) -> Result<ConfigFile, ConfigError> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let invalid = |reason: String| ConfigError {
        path: path.to_path_buf(),
        reason,
    };
    let raw = std::fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
    toml::from_str(&raw).map_err(|e| invalid(e.to_string()))
}
