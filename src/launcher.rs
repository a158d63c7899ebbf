//! Launching applications through the operating system
//!
//! The launcher is a seam: the presentation layer holds a [`Launcher`] and
//! tests substitute a recording implementation.

use crate::error::{LaunchBoardError, Result};
use crate::record::{Entry, EntryId};
use std::path::Path;
use tracing::{error, info};

/// Starts the application at a location
pub trait Launcher {
    /// Ask the OS to open the application bundle at `location`
    fn launch(&self, location: &Path) -> Result<()>;
}

/// Launcher backed by the platform's default opener
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&self, location: &Path) -> Result<()> {
        open::that_detached(location).map_err(|source| LaunchBoardError::LaunchFailed {
            path: location.to_path_buf(),
            source,
        })
    }
}

/// What activating a tile did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// An application was handed to the OS
    Launched,
    /// The tile is a folder and should be opened instead
    OpenFolder(EntryId),
}

/// Activate `entry`: launch an application, or report that a folder should open
pub fn launch_entry(launcher: &dyn Launcher, entry: &Entry) -> Result<LaunchOutcome> {
    match entry {
        Entry::App(app) => {
            info!("Launching {} from {:?}", app.name(), app.location());
            launcher.launch(app.location()).inspect_err(|e| {
                error!("Failed to launch {}: {}", app.name(), e);
            })?;
            Ok(LaunchOutcome::Launched)
        }
        Entry::Folder(folder) => Ok(LaunchOutcome::OpenFolder(folder.id())),
    }
}
