//! Configuration management module
//!
//! This module handles loading, saving, and managing launcher preferences.
//! Configuration is stored as JSON in `<config root>/LaunchBoard/config.json`
//! with atomic writes to prevent corruption.

pub mod manager;
pub mod models;

pub use manager::ConfigManager;
pub use models::{LauncherConfig, Preferences};
