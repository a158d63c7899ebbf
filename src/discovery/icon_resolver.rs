//! Icon resolution for application bundles
//!
//! Icon lookup sits behind the [`IconResolver`] trait so discovery can be
//! driven by the OS icon service, the bundle's own artwork, or a stub in tests.
//!
//! [`BundleIconResolver`] reads PNG artwork from `Contents/Resources` inside
//! the bundle:
//! 1. `AppIcon.png` if present
//! 2. otherwise the first `*.png` in file name order
//!
//! When the bundle carries no usable PNG it can fall back to the generic
//! placeholder icon, the same way the OS hands out a generic icon for
//! unknown files.

use crate::error::{LaunchBoardError, Result};
use crate::record::Icon;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default icon edge length in pixels
pub const DEFAULT_ICON_SIZE: u32 = 64;

/// Preferred artwork file name inside `Contents/Resources`
const PREFERRED_ICON_FILE: &str = "AppIcon.png";

/// Resolves the icon for an application bundle
pub trait IconResolver: Send + Sync {
    /// Produce an icon for the bundle at `location`
    fn resolve(&self, location: &Path) -> Result<Icon>;
}

impl<F> IconResolver for F
where
    F: Fn(&Path) -> Result<Icon> + Send + Sync,
{
    fn resolve(&self, location: &Path) -> Result<Icon> {
        self(location)
    }
}

/// Loads icons from PNG artwork shipped inside the bundle
#[derive(Debug, Clone)]
pub struct BundleIconResolver {
    icon_size: u32,
    fallback_to_placeholder: bool,
}

impl BundleIconResolver {
    /// Create a resolver producing `icon_size`x`icon_size` icons, with placeholder fallback
    pub fn new(icon_size: u32) -> Self {
        Self {
            icon_size: icon_size.max(1),
            fallback_to_placeholder: true,
        }
    }

    /// Choose whether bundles without usable artwork get the placeholder icon
    /// (`true`) or fail resolution and are dropped from discovery (`false`)
    #[must_use]
    pub fn with_placeholder_fallback(mut self, enabled: bool) -> Self {
        self.fallback_to_placeholder = enabled;
        self
    }

    /// Locate PNG artwork inside the bundle
    pub fn find_icon_file(location: &Path) -> Option<PathBuf> {
        let resources = location.join("Contents").join("Resources");

        let preferred = resources.join(PREFERRED_ICON_FILE);
        if preferred.is_file() {
            return Some(preferred);
        }

        let mut candidates: Vec<PathBuf> = std::fs::read_dir(&resources)
            .ok()?
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .filter(|path| path.is_file() && path.extension() == Some(OsStr::new("png")))
            .collect();
        candidates.sort();
        candidates.into_iter().next()
    }

    fn fallback(&self, location: &Path, reason: LaunchBoardError) -> Result<Icon> {
        if self.fallback_to_placeholder {
            debug!("Using placeholder icon for {:?}: {}", location, reason);
            Ok(Icon::placeholder(self.icon_size))
        } else {
            Err(reason)
        }
    }
}

impl Default for BundleIconResolver {
    fn default() -> Self {
        Self::new(DEFAULT_ICON_SIZE)
    }
}

impl IconResolver for BundleIconResolver {
    fn resolve(&self, location: &Path) -> Result<Icon> {
        let Some(icon_file) = Self::find_icon_file(location) else {
            return self.fallback(
                location,
                LaunchBoardError::IconResolutionFailed(location.display().to_string()),
            );
        };

        match image::open(&icon_file) {
            Ok(image) => Ok(Icon::from_image(&image, self.icon_size)),
            Err(e) => {
                warn!("Failed to decode icon {:?}: {}", icon_file, e);
                self.fallback(location, LaunchBoardError::ImageError(e))
            }
        }
    }
}
