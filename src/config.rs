//! Settings persistence for the dashboard.
//!
//! Exactly one value is persisted: the backend health endpoint URL. Reads
//! are layered (hard-coded default, then environment, then the saved file)
//! so a previously saved value always wins. No URL syntax validation is
//! performed before persisting or fetching.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Fallback endpoint when neither the saved file nor the environment
/// supplies one.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3000/health";

/// Environment prefix; `PULSEWATCH_BACKEND_URL` supplies a deploy-time
/// default URL.
const ENV_PREFIX: &str = "PULSEWATCH";

/// Persisted dashboard settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub backend_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

impl Settings {
    /// Default location of the settings file.
    pub fn default_path() -> PathBuf {
        dirs_next::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pulsewatch")
            .join("config.json")
    }

    /// Load settings from `path`.
    ///
    /// Precedence, lowest to highest: hard-coded default, environment
    /// (`PULSEWATCH_BACKEND_URL`), saved file. A missing file is not an
    /// error.
    pub fn load(path: &Path) -> Result<Self> {
        let cfg = Config::builder()
            .set_default("backend_url", DEFAULT_BACKEND_URL)?
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .add_source(File::from(path).required(false))
            .build()?;

        let settings = cfg
            .try_deserialize()
            .with_context(|| format!("reading settings from {}", path.display()))?;
        Ok(settings)
    }

    /// Persist the settings to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating config directory {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("writing settings to {}", path.display()))?;
        debug!(path = %path.display(), "settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_uses_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.backend_url, DEFAULT_BACKEND_URL);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let settings = Settings {
            backend_url: "http://x/health".to_string(),
        };
        settings.save(&path).unwrap();

        // A fresh read returns the persisted value.
        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded.backend_url, "http://x/health");
    }

    #[test]
    fn test_saved_file_wins_over_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"backend_url": "http://saved/health"}"#).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.backend_url, "http://saved/health");
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        Settings {
            backend_url: "http://first/health".to_string(),
        }
        .save(&path)
        .unwrap();
        Settings {
            backend_url: "http://second/health".to_string(),
        }
        .save(&path)
        .unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded.backend_url, "http://second/health");
    }
}
