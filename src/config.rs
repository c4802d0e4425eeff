//! Configuration management for the application.
//!
//! Configuration is TOML on disk, under the platform config directory, with
//! defaults that work out of the box for everything except the classifier
//! endpoint (which has no sensible default).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::APP_NAME;

/// Server bind settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

/// Catalog file locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// Product catalog JSON file.
    pub products: Option<PathBuf>,
    /// Outfit catalog JSON file.
    pub outfits: Option<PathBuf>,
}

/// Classifier backend settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ClassifierConfig {
    /// Classification service endpoint. When unset, classification requests
    /// fail with a retryable error while the rest of the API stays up.
    pub endpoint: Option<String>,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Tonematch/config.toml`
/// - macOS: `~/Library/Application Support/Tonematch/config.toml`
/// - Windows: `%APPDATA%\Tonematch\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server bind settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Catalog file locations.
    #[serde(default)]
    pub catalogs: CatalogConfig,
    /// Classifier backend settings.
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - catalog paths, when set, point at existing files
    /// - the classifier endpoint, when set, is not blank
    pub fn validate(&self) -> Result<()> {
        if let Some(products) = &self.catalogs.products {
            if !products.is_file() {
                anyhow::bail!("Product catalog not found: {}", products.display());
            }
        }

        if let Some(outfits) = &self.catalogs.outfits {
            if !outfits.is_file() {
                anyhow::bail!("Outfit catalog not found: {}", outfits.display());
            }
        }

        if let Some(endpoint) = &self.classifier.endpoint {
            if endpoint.trim().is_empty() {
                anyhow::bail!("Classifier endpoint must not be blank");
            }
        }

        Ok(())
    }
}
