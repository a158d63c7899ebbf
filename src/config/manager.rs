//! Configuration manager for loading and saving launcher configuration
//!
//! This module loads and saves configuration to
//! `<config root>/LaunchBoard/config.json`, writing through a temporary file
//! that is atomically persisted over the old one.
//!
//! The config root is the first of `$XDG_CONFIG_HOME`, `$HOME/.config`,
//! `%APPDATA%` that is set, falling back to the working directory.

use crate::config::models::LauncherConfig;
use crate::error::{LaunchBoardError, Result, StringError};
use std::path::PathBuf;
use tracing::{info, warn};

/// Name of the per-application directory under the config root
const APP_DIR_NAME: &str = "LaunchBoard";

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Directory holding the config file and logs
    pub fn app_dir() -> PathBuf {
        let root = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
            .or_else(|| std::env::var_os("APPDATA").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."));
        root.join(APP_DIR_NAME)
    }

    /// Get the path to the configuration file
    pub fn get_config_path() -> PathBuf {
        Self::app_dir().join("config.json")
    }

    /// Ensure the configuration directory exists
    pub fn ensure_config_dir() -> Result<PathBuf> {
        let config_path = Self::get_config_path();
        let config_dir = config_path.parent().ok_or_else(|| {
            LaunchBoardError::ConfigError(StringError::new("Invalid config path"))
        })?;

        std::fs::create_dir_all(config_dir)?;
        Ok(config_dir.to_path_buf())
    }

    /// Load configuration from disk
    ///
    /// If the configuration file doesn't exist or is corrupt, returns default configuration.
    pub fn load() -> Result<LauncherConfig> {
        let config_path = Self::get_config_path();

        if !config_path.exists() {
            info!("Configuration file not found, using defaults");
            return Ok(LauncherConfig::default());
        }

        let json = std::fs::read_to_string(&config_path)?;

        match serde_json::from_str(&json) {
            Ok(config) => {
                info!("Configuration loaded from {:?}", config_path);
                Ok(config)
            }
            Err(e) => {
                warn!("Failed to parse configuration, using defaults: {}", e);
                Ok(LauncherConfig::default())
            }
        }
    }

    /// Save configuration to disk with atomic write
    ///
    /// Serializes into a temporary file in the config directory, then
    /// persists it over the config file in a single rename.
    pub fn save(config: &LauncherConfig) -> Result<()> {
        let config_dir = Self::ensure_config_dir()?;

        let mut temp_file = tempfile::NamedTempFile::new_in(&config_dir)?;
        serde_json::to_writer_pretty(&mut temp_file, config)?;
        temp_file
            .persist(Self::get_config_path())
            .map_err(|e| LaunchBoardError::ConfigError(Box::new(e)))?;

        info!("Configuration saved successfully");
        Ok(())
    }
}
