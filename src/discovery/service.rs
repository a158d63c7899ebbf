//! Application discovery service

use crate::config::Preferences;
use crate::discovery::icon_resolver::{BundleIconResolver, IconResolver};
use crate::discovery::scanner::{self, DEFAULT_BUNDLE_EXTENSION};
use crate::record::AppRecord;
use rayon::prelude::*;
use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info};

/// Scans applications directories and builds sorted application records
#[derive(Clone)]
pub struct Discovery {
    directories: Vec<PathBuf>,
    extension: String,
    deduplicate_locations: bool,
    icon_resolver: Arc<dyn IconResolver>,
}

impl Discovery {
    /// Discovery over the default applications directories using `icon_resolver`
    pub fn new(icon_resolver: impl IconResolver + 'static) -> Self {
        Self {
            directories: scanner::application_directories(),
            extension: DEFAULT_BUNDLE_EXTENSION.to_string(),
            deduplicate_locations: false,
            icon_resolver: Arc::new(icon_resolver),
        }
    }

    /// Discovery configured from user preferences, resolving icons from bundle artwork
    pub fn from_preferences(preferences: &Preferences) -> Self {
        let resolver = BundleIconResolver::new(preferences.icon_size)
            .with_placeholder_fallback(preferences.fallback_to_placeholder_icon);

        let mut discovery = Self::new(resolver)
            .with_extension(&preferences.bundle_extension)
            .with_deduplication(preferences.deduplicate_locations);
        if !preferences.application_directories.is_empty() {
            discovery = discovery.with_directories(preferences.application_directories.clone());
        }
        discovery
    }

    /// Replace the directories to scan
    #[must_use]
    pub fn with_directories(mut self, directories: Vec<PathBuf>) -> Self {
        self.directories = directories;
        self
    }

    /// Replace the bundle extension to match (without the dot)
    #[must_use]
    pub fn with_extension(mut self, extension: &str) -> Self {
        extension
            .trim_start_matches('.')
            .clone_into(&mut self.extension);
        self
    }

    /// Drop bundles whose location was already seen in an earlier directory
    #[must_use]
    pub fn with_deduplication(mut self, enabled: bool) -> Self {
        self.deduplicate_locations = enabled;
        self
    }

    /// Directories that will be scanned, in order
    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    /// Run discovery to completion
    ///
    /// Never fails: bundles whose name or icon cannot be resolved are left
    /// out of the result.
    pub fn discover(&self) -> Vec<AppRecord> {
        self.run(&AtomicBool::new(false)).unwrap_or_default()
    }

    /// Run discovery, checking `cancelled` between directories and entries
    ///
    /// Returns `None` if cancellation was observed.
    pub(crate) fn run(&self, cancelled: &AtomicBool) -> Option<Vec<AppRecord>> {
        info!(
            "Starting application search in {} directories",
            self.directories.len()
        );

        let mut locations = Vec::new();
        for directory in &self.directories {
            if cancelled.load(Ordering::Relaxed) {
                return None;
            }
            let found = scanner::scan_directory(directory, &self.extension);
            debug!("Found {} bundles in {:?}", found.len(), directory);
            locations.extend(found);
        }

        if self.deduplicate_locations {
            let mut seen = HashSet::with_capacity(locations.len());
            locations.retain(|location| seen.insert(location.clone()));
        }

        let mut records: Vec<AppRecord> = locations
            .into_par_iter()
            .filter_map(|location| {
                if cancelled.load(Ordering::Relaxed) {
                    return None;
                }
                self.resolve_entry(location)
            })
            .collect();

        if cancelled.load(Ordering::Relaxed) {
            return None;
        }

        sort_by_name(&mut records);
        info!("Found {} applications", records.len());
        Some(records)
    }

    fn resolve_entry(&self, location: PathBuf) -> Option<AppRecord> {
        let Some(name) = scanner::display_name(&location) else {
            debug!("Dropping {:?}: no usable display name", location);
            return None;
        };

        match self.icon_resolver.resolve(&location) {
            Ok(icon) => Some(AppRecord::new(location, name, icon)),
            Err(e) => {
                debug!("Dropping {:?}: {}", location, e);
                None
            }
        }
    }
}

impl fmt::Debug for Discovery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Discovery")
            .field("directories", &self.directories)
            .field("extension", &self.extension)
            .field("deduplicate_locations", &self.deduplicate_locations)
            .finish_non_exhaustive()
    }
}

/// Sort records by display name, ignoring case; equal names keep their order
pub fn sort_by_name(records: &mut [AppRecord]) {
    records.sort_by_cached_key(|record| record.name().to_lowercase());
}
