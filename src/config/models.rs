//! Configuration data models
//!
//! This module defines the data structures used for launcher configuration.
//! Every field has a default, so partial or older config files still load.

use crate::catalog::DEFAULT_PAGE_SIZE;
use crate::discovery::{DEFAULT_BUNDLE_EXTENSION, DEFAULT_ICON_SIZE};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default number of grid columns per page row
pub const DEFAULT_GRID_COLUMNS: usize = 7;

/// Top-level launcher configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// User preferences
    pub preferences: Preferences,
}

/// User preferences and settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Tiles per launcher page
    pub page_size: usize,
    /// Tiles per grid row
    pub grid_columns: usize,
    /// Icon edge length in pixels
    pub icon_size: u32,
    /// Extension marking an application bundle, without the dot
    pub bundle_extension: String,
    /// Directories to scan instead of the default applications directories (empty = defaults)
    pub application_directories: Vec<PathBuf>,
    /// Whether to show a bundle only once when the same location is found twice
    pub deduplicate_locations: bool,
    /// Whether the launcher closes itself after starting an application
    pub dismiss_after_launch: bool,
    /// Whether bundles without artwork get a generic icon instead of being hidden
    pub fallback_to_placeholder_icon: bool,
}

impl Preferences {
    /// Clamp sizes that would make the grid unusable
    #[must_use]
    pub fn validated(mut self) -> Self {
        self.page_size = self.page_size.max(1);
        self.grid_columns = self.grid_columns.max(1);
        self.icon_size = self.icon_size.max(1);
        if self.bundle_extension.trim_start_matches('.').is_empty() {
            self.bundle_extension = DEFAULT_BUNDLE_EXTENSION.to_string();
        }
        self
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            grid_columns: DEFAULT_GRID_COLUMNS,
            icon_size: DEFAULT_ICON_SIZE,
            bundle_extension: DEFAULT_BUNDLE_EXTENSION.to_string(),
            application_directories: Vec::new(),
            deduplicate_locations: false,
            dismiss_after_launch: true,
            fallback_to_placeholder_icon: true,
        }
    }
}
