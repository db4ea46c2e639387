use std::collections::HashSet;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::ReelmatchError;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub matching: MatchingConfig,
    pub providers: ProvidersConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Characters replaced with spaces before building a series title pattern.
    pub title_chars_to_ignore: String,
    /// Whole words dropped from series titles, compared case-insensitively.
    pub title_words_to_ignore: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    pub tmdb: ServiceKey,
    pub tvdb: ServiceKey,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceKey {
    pub api_key: Option<String>,
}

impl AppConfig {
    /// Load config: user file if it exists, built-in defaults otherwise.
    pub fn load() -> Result<Self, ReelmatchError> {
        let user_path = Self::config_path();
        if user_path.exists() {
            let user_str = std::fs::read_to_string(&user_path)?;
            toml::from_str(&user_str).map_err(|e| ReelmatchError::Config(e.to_string()))
        } else {
            toml::from_str(DEFAULT_CONFIG).map_err(|e| ReelmatchError::Config(e.to_string()))
        }
    }

    /// Save current config to the user config file.
    pub fn save(&self) -> Result<(), ReelmatchError> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| ReelmatchError::Config(e.to_string()))?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Path to the user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        Self::project_dirs()
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Path to the catalog database file.
    pub fn db_path() -> PathBuf {
        Self::project_dirs()
            .map(|d| d.data_dir().join("catalog.db"))
            .unwrap_or_else(|| PathBuf::from("catalog.db"))
    }

    /// Ensure the data directory exists and return the catalog path.
    pub fn ensure_db_path() -> Result<PathBuf, ReelmatchError> {
        let path = Self::db_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(path)
    }

    /// Characters stripped from series titles before pattern construction.
    pub fn title_chars_to_ignore(&self) -> HashSet<char> {
        self.matching.title_chars_to_ignore.chars().collect()
    }

    /// Words dropped from series titles, lowercased for comparison.
    pub fn title_words_to_ignore(&self) -> HashSet<String> {
        self.matching
            .title_words_to_ignore
            .iter()
            .map(|w| w.to_lowercase())
            .collect()
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "reelmatch")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}
