//! `LaunchBoard` - full-screen application launcher
//!
//! Discovers installed applications, then shows them as a paged grid of tiles
//! that can be searched, reordered, grouped into folders and launched.

// The text shell is only in the binary, not the library
mod shell;

use anyhow::{Context, Result};
use launchboard::{
    catalog::Catalog,
    config::ConfigManager,
    discovery::{Discovery, DiscoveryTask},
    launcher::SystemLauncher,
    utils,
};
use shell::Shell;
use tracing::info;

/// Main entry point for the application
///
/// Initializes logging and configuration, starts application discovery on a
/// background thread and runs the text shell while it completes.
fn main() -> Result<()> {
    utils::init_logging().context("Failed to initialize logging system")?;

    let config = ConfigManager::load().context("Failed to load launcher configuration")?;
    let preferences = config.preferences.validated();
    info!(
        "Configuration loaded: page size {}, {} columns",
        preferences.page_size, preferences.grid_columns
    );

    let discovery = Discovery::from_preferences(&preferences);
    let task = DiscoveryTask::spawn(discovery).context("Failed to start application discovery")?;

    // The shell starts empty and fills in once discovery delivers
    let mut shell = Shell::new(Catalog::with_page_size(preferences.page_size), SystemLauncher)
        .with_grid_columns(preferences.grid_columns)
        .with_dismiss_after_launch(preferences.dismiss_after_launch)
        .with_discovery(task);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shell
        .run(stdin.lock(), stdout.lock())
        .context("Launcher shell stopped unexpectedly")?;

    info!(
        "LaunchBoard shutting down with {} top-level entries",
        shell.catalog().len()
    );
    Ok(())
}
