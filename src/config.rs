//! Vault configuration
//!
//! Stored as JSON. Missing keys fall back to their defaults.

use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::error::Result;
use crate::generator::GenerationSettings;
use crate::DATABASE_FILENAME;

/// Vault settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    /// Database file name inside the vault folder
    pub database_filename: String,
    /// Settings used when generating without explicit settings
    pub generation: GenerationSettings,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            database_filename: DATABASE_FILENAME.to_string(),
            generation: GenerationSettings::default(),
        }
    }
}

impl VaultConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config = serde_json::from_str(&text)?;
        debug!(path = %path.display(), "loaded vault config");
        Ok(config)
    }

    /// Load configuration, or use defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Save configuration as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use crate::error::VaultError;

    #[test]
    fn test_default() {
        let config = VaultConfig::default();
        assert_eq!(config.database_filename, "passwords.db");
        assert_eq!(config.generation, GenerationSettings::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");

        let mut config = VaultConfig::default();
        config.generation.length = 24;
        config.generation.include_symbols = false;
        config.save(&path).unwrap();

        assert_eq!(VaultConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"generation": {"length": 8}}"#).unwrap();

        let config = VaultConfig::load(&path).unwrap();
        assert_eq!(config.database_filename, "passwords.db");
        assert_eq!(config.generation.length, 8);
        assert!(config.generation.include_uppercase);
    }

    #[test]
    fn test_load_or_default_missing() {
        let temp_dir = TempDir::new().unwrap();
        let config = VaultConfig::load_or_default(&temp_dir.path().join("none.json")).unwrap();
        assert_eq!(config, VaultConfig::default());
    }

    #[test]
    fn test_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(VaultConfig::load(&path), Err(VaultError::ConfigError(_))));
    }
}
