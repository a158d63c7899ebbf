//! Application directory enumeration
//!
//! Lists the direct children of the well-known "Applications" directories
//! and keeps the ones carrying the application bundle extension.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default application bundle extension
pub const DEFAULT_BUNDLE_EXTENSION: &str = "app";

/// Search domain for installed applications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// The current user's own applications
    User,
    /// Applications installed for every user on this machine
    Local,
    /// Applications shared over the network
    Network,
    /// Applications shipped with the operating system
    System,
}

impl Domain {
    /// All domains, in search order
    pub const ALL: [Domain; 4] = [Domain::User, Domain::Local, Domain::Network, Domain::System];

    /// The applications directory for this domain
    ///
    /// The user domain needs a home directory; it yields `None` without one.
    pub fn applications_dir(self, home: Option<&Path>) -> Option<PathBuf> {
        match self {
            Domain::User => home.map(|home| home.join("Applications")),
            Domain::Local => Some(PathBuf::from("/Applications")),
            Domain::Network => Some(PathBuf::from("/Network/Applications")),
            Domain::System => Some(PathBuf::from("/System/Applications")),
        }
    }
}

/// Applications directories across all domains for the current user
pub fn application_directories() -> Vec<PathBuf> {
    let home = home_dir();
    Domain::ALL
        .iter()
        .filter_map(|domain| domain.applications_dir(home.as_deref()))
        .collect()
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("USERPROFILE").map(PathBuf::from))
}

/// List bundles directly inside `dir` whose extension equals `extension`
///
/// Hidden (dot-prefixed) entries are skipped. A missing or unreadable
/// directory contributes nothing. Results are sorted by path so repeated
/// scans see the same order.
pub fn scan_directory(dir: &Path, extension: &str) -> Vec<PathBuf> {
    let read_dir = match std::fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(e) => {
            debug!("Skipping applications directory {:?}: {}", dir, e);
            return Vec::new();
        }
    };

    let mut bundles: Vec<PathBuf> = read_dir
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                debug!("Failed to read entry in {:?}: {}", dir, e);
                None
            }
        })
        .filter(|path| !is_hidden(path))
        .filter(|path| path.extension() == Some(OsStr::new(extension)))
        .collect();

    bundles.sort();
    bundles
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(OsStr::to_str)
        .is_some_and(|name| name.starts_with('.'))
}

/// Display name for a bundle: its file name without the extension
///
/// Returns `None` when the name is empty or not valid UTF-8.
pub fn display_name(location: &Path) -> Option<String> {
    location
        .file_stem()
        .and_then(OsStr::to_str)
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
}
