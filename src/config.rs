use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{UtilError, UtilResult};
use crate::format::{DEFAULT_CURRENCY, DEFAULT_HUMAN_DATE_FORMAT};
use crate::string::DEFAULT_TEXT_LIMIT;

/// Defaults applied by the command line when a flag is omitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currency_code: String,
    pub human_date_format: String,
    pub text_limit: usize,
    pub similarity_cutoff: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_code: DEFAULT_CURRENCY.to_string(),
            human_date_format: DEFAULT_HUMAN_DATE_FORMAT.to_string(),
            text_limit: DEFAULT_TEXT_LIMIT,
            similarity_cutoff: 0.6,
        }
    }
}

impl Config {
    /// Load config from the default location, or fall back to defaults
    pub fn load() -> UtilResult<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from a specific file.
    ///
    /// A missing file yields defaults. A corrupt file is moved aside to
    /// `*.json.corrupt` and defaults are used.
    pub fn load_from(path: &Path) -> UtilResult<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str::<Self>(&content) {
            Ok(config) => config.validated(),
            Err(e) => {
                warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                let backup_path = path.with_extension("json.corrupt");
                let _ = std::fs::rename(path, &backup_path);
                Ok(Self::default())
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> UtilResult<()> {
        self.save_to(&config_path())
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> UtilResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validated(self) -> UtilResult<Self> {
        if !(0.0..=1.0).contains(&self.similarity_cutoff) {
            return Err(UtilError::Config(format!(
                "similarity_cutoff must be within 0.0..=1.0, got {}",
                self.similarity_cutoff
            )));
        }
        if self.currency_code.trim().is_empty() {
            return Err(UtilError::Config("currency_code is empty".to_string()));
        }
        Ok(self)
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("utilkit")
        .join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.currency_code, "ZAR");
        assert_eq!(config.human_date_format, "D MMM YYYY HH:mm");
        assert_eq!(config.text_limit, 50);
        assert_eq!(config.similarity_cutoff, 0.6);
    }

    #[test]
    fn test_config_roundtrip_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested/config.json");

        let config = Config {
            currency_code: "USD".to_string(),
            text_limit: 20,
            ..Config::default()
        };
        config.save_to(&path).expect("Failed to save");

        let restored = Config::load_from(&path).expect("Failed to load");
        assert_eq!(restored, config);
    }

    #[test]
    fn test_config_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = Config::load_from(&dir.path().join("absent.json")).expect("Failed to load");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "text_limit": 10 }"#).expect("Failed to write");

        let config = Config::load_from(&path).expect("Failed to load");
        assert_eq!(config.text_limit, 10);
        assert_eq!(config.currency_code, "ZAR");
    }

    #[test]
    fn test_config_corrupt_json_handling() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not valid json").expect("Failed to write");

        let config = Config::load_from(&path).expect("Corrupt config should fall back");
        assert_eq!(config, Config::default());
        assert!(!path.exists());
        assert!(dir.path().join("config.json.corrupt").exists());
    }

    #[test]
    fn test_config_rejects_out_of_range_cutoff() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "similarity_cutoff": 1.5 }"#).expect("Failed to write");

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(UtilError::Config(_))));
    }
}
