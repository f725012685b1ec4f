/// Persistent SimpleStats settings: the Hypixel key and chat geometry
use crate::api::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Not a valid API key: {0}")]
    InvalidKey(String),
}

/// Chat geometry of the host client, used to size the breakline banner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatOptions {
    pub width: f32,
    pub scale: f32,
}

impl Default for ChatOptions {
    fn default() -> Self {
        Self {
            width: 1.0,
            scale: 1.0,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleStatsConfig {
    #[serde(default)]
    hypixel_key: String,
    #[serde(default = "default_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub chat: ChatOptions,
    #[serde(skip)]
    dirty: bool,
}

impl Default for SimpleStatsConfig {
    fn default() -> Self {
        Self {
            hypixel_key: String::new(),
            api_base_url: default_base_url(),
            chat: ChatOptions::default(),
            dirty: false,
        }
    }
}

impl SimpleStatsConfig {
    /// `<config dir>/simplestats/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("simplestats").join("config.json"))
    }

    /// Load configuration from disk. A missing file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Persist only when something changed since the last write.
    /// Returns whether the file was written.
    pub fn write_data<P: AsRef<Path>>(&mut self, path: P) -> Result<bool, ConfigError> {
        if !self.dirty {
            return Ok(false);
        }
        self.save(path)?;
        self.dirty = false;
        Ok(true)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The stored key, if it parses as a UUID.
    pub fn hypixel_key(&self) -> Option<Uuid> {
        Uuid::parse_str(self.hypixel_key.trim()).ok()
    }

    /// Store a new key. Anything that is not a UUID is refused before it
    /// reaches the file.
    pub fn set_hypixel_key(&mut self, key: &str) -> Result<Uuid, ConfigError> {
        let key = key.trim();
        let parsed = Uuid::parse_str(key).map_err(|_| ConfigError::InvalidKey(key.to_string()))?;
        self.hypixel_key = parsed.hyphenated().to_string();
        self.mark_dirty();
        Ok(parsed)
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const KEY: &str = "0d3c1a2b-1111-4222-8333-444455556666";

    #[test]
    fn test_default_config() {
        let config = SimpleStatsConfig::default();
        assert_eq!(config.hypixel_key(), None);
        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.chat, ChatOptions::default());
        assert!(!config.is_dirty());
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let config = SimpleStatsConfig::load(dir.path().join("config.json")).unwrap();
        assert_eq!(config.hypixel_key(), None);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = SimpleStatsConfig::from_json(&format!(r#"{{"hypixelKey": "{KEY}"}}"#)).unwrap();
        assert_eq!(config.hypixel_key().unwrap().to_string(), KEY);
        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.chat.scale, 1.0);
    }

    #[test]
    fn test_set_key_rejects_garbage() {
        let mut config = SimpleStatsConfig::default();
        let err = config.set_hypixel_key("not-a-key").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidKey(_)));
        assert!(!config.is_dirty());
    }

    #[test]
    fn test_write_data_only_when_dirty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = SimpleStatsConfig::default();
        assert!(!config.write_data(&path).unwrap());
        assert!(!path.exists());

        config.set_hypixel_key(&format!("  {}  ", KEY.to_uppercase())).unwrap();
        assert!(config.write_data(&path).unwrap());
        assert!(!config.is_dirty());
        assert!(!config.write_data(&path).unwrap());

        let reloaded = SimpleStatsConfig::load(&path).unwrap();
        assert_eq!(reloaded.hypixel_key().unwrap().to_string(), KEY);
        assert!(!reloaded.is_dirty());
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ nope").unwrap();
        assert!(matches!(
            SimpleStatsConfig::load(&path),
            Err(ConfigError::Parse(_))
        ));
    }
}
