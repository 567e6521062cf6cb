use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{format::SunriseClock, provider::openweather::DEFAULT_BASE_URL};

/// Environment variable that overrides the API key stored on disk.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// `[openweather]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenWeatherConfig {
    pub api_key: Option<String>,
    /// Defaults to the public OpenWeather host.
    pub base_url: Option<String>,
}

/// `[display]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub sunrise_clock: SunriseClock,
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// [openweather]
/// api_key = "..."
///
/// [display]
/// sunrise_clock = "city"
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub openweather: OpenWeatherConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    /// Key taken from the environment; never written back to disk.
    #[serde(skip)]
    api_key_override: Option<String>,
}

impl Config {
    /// Load config from disk (or an empty default on first run) and apply
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        let cfg = Self::load_from(&path)?;

        Ok(cfg.with_api_key_override(std::env::var(API_KEY_ENV).ok()))
    }

    /// Load config from an explicit path without looking at the environment.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skyview", "skyview")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Use `key` instead of the stored one; blank values are ignored.
    pub fn with_api_key_override(mut self, key: Option<String>) -> Self {
        self.api_key_override = key.filter(|k| !k.trim().is_empty());
        self
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.openweather.api_key = Some(api_key);
    }

    /// API key to use, preferring the environment over the file.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key_override
            .as_deref()
            .or(self.openweather.api_key.as_deref())
            .filter(|k| !k.trim().is_empty())
    }

    pub fn resolve_api_key(&self) -> Result<String> {
        self.api_key().map(str::to_owned).ok_or_else(|| {
            anyhow!(
                "No OpenWeather API key configured.\n\
                 Hint: run `skyview configure` or set {API_KEY_ENV}."
            )
        })
    }

    pub fn base_url(&self) -> &str {
        self.openweather.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn sunrise_clock(&self) -> SunriseClock {
        self.display.sunrise_clock
    }
}
