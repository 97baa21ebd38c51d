// SPDX-License-Identifier: MPL-2.0
//! This module handles the persisted language preference, stored as a single
//! `majorMatchLanguage` entry in a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use major_match_i18n::config::{self, Config};
//! use std::path::PathBuf;
//!
//! let config = Config {
//!     language: Some("ar".to_string()),
//! };
//!
//! // Load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.language, Some("ar".to_string()));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

use crate::error::Result;
pub use defaults::{APP_NAME, CONFIG_FILE, DEFAULT_LOCALE_CODE, STORAGE_KEY};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Last selected locale code. Unknown codes are kept as written and
    /// resolved to the default locale by the reader. The field name must
    /// stay equal to [`STORAGE_KEY`].
    #[serde(
        rename = "majorMatchLanguage",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub language: Option<String>,
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

/// Where the language manager reads and writes the selected locale code.
pub trait PreferenceStore {
    /// Returns the stored code, if any. Validation is the caller's job.
    fn load(&self) -> Option<String>;

    fn store(&mut self, code: &str) -> Result<()>;
}

/// Keeps the preference in a TOML settings file.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by the per-user settings file, if a config dir exists.
    pub fn user() -> Option<Self> {
        default_config_path().map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Option<String> {
        if !self.path.exists() {
            return None;
        }
        match load_from_path(&self.path) {
            Ok(config) => config.language,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), "failed to read language preference: {err}");
                None
            }
        }
    }

    fn store(&mut self, code: &str) -> Result<()> {
        let mut config = if self.path.exists() {
            load_from_path(&self.path)?
        } else {
            Config::default()
        };
        config.language = Some(code.to_string());
        save_to_path(&config, &self.path)
    }
}

/// Keeps the preference in memory only; one per request or per test.
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferenceStore {
    value: Option<String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(code: impl Into<String>) -> Self {
        Self {
            value: Some(code.into()),
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn store(&mut self, code: &str) -> Result<()> {
        self.value = Some(code.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_language() {
        let config = Config {
            language: Some("ar".to_string()),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn language_is_written_under_storage_key() {
        let config = Config {
            language: Some("ar".to_string()),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let raw = fs::read_to_string(&config_path).expect("failed to read back");
        let table: toml::Table = toml::from_str(&raw).expect("saved file should be valid toml");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(STORAGE_KEY).and_then(|v| v.as_str()), Some("ar"));

        let parsed: Config = toml::from_str(&format!("{STORAGE_KEY} = \"en\"")).unwrap();
        assert_eq!(parsed.language.as_deref(), Some("en"));
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.language.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn file_store_is_empty_until_written() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut store = FilePreferenceStore::new(temp_dir.path().join("settings.toml"));
        assert_eq!(store.load(), None);

        store.store("ar").expect("store should succeed");
        assert_eq!(store.load().as_deref(), Some("ar"));

        store.store("en").expect("store should succeed");
        assert_eq!(store.load().as_deref(), Some("en"));
    }

    #[test]
    fn memory_store_keeps_last_value() {
        let mut store = MemoryPreferenceStore::with_value("ar");
        assert_eq!(store.load().as_deref(), Some("ar"));
        store.store("en").unwrap();
        assert_eq!(store.value(), Some("en"));
    }
}
