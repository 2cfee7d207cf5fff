//! Grid configuration
//!
//! Stored in `~/.config/panel-grid/config.yaml`:
//!
//! ```yaml
//! storage_key: businessPortalState
//! presentation: surface   # or end-of-flow
//! gap: 16
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::model::Presentation;
use crate::store::DEFAULT_STORAGE_KEY;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Key the arrangement blob is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Where a lifted panel is placed while it floats
    #[serde(default)]
    pub presentation: Presentation,
    /// Vertical spacing between stacked items, in pixels
    #[serde(default = "default_gap")]
    pub gap: f32,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_gap() -> f32 {
    16.0
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            presentation: Presentation::default(),
            gap: default_gap(),
        }
    }
}

impl GridConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GridConfig::default();
        assert_eq!(config.storage_key, "businessPortalState");
        assert_eq!(config.presentation, Presentation::Surface);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: GridConfig = serde_yaml::from_str("presentation: end-of-flow\n").unwrap();
        assert_eq!(config.presentation, Presentation::EndOfFlow);
        assert_eq!(config.storage_key, "businessPortalState");
        assert_eq!(config.gap, 16.0);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GridConfig::load_from(&dir.path().join("nope.yaml"));
        assert_eq!(config, GridConfig::default());
    }

    #[test]
    fn test_bad_yaml_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "gap: [not a number").unwrap();
        assert_eq!(GridConfig::load_from(&path), GridConfig::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let config = GridConfig {
            storage_key: "custom".to_string(),
            presentation: Presentation::EndOfFlow,
            gap: 8.0,
        };
        config.save_to(&path).unwrap();
        assert_eq!(GridConfig::load_from(&path), config);
    }
}
