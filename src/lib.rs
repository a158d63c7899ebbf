//! `LaunchBoard` - full-screen application launcher
//!
//! Discovers installed application bundles and presents them as a paged grid
//! that can be searched, reordered and grouped into folders. `Discovery`
//! builds the application records on a background thread, `Catalog` owns the
//! canonical entry list and its filtered, paginated view, and `Launcher`
//! hands activated applications to the operating system.
//!
//! # Layout
//!
//! - [`record`]: application records, folders and icons
//! - [`discovery`]: applications directory scanning and icon resolution
//! - [`catalog`]: filtering, pagination, reordering and folders
//! - [`launcher`]: opening applications through the OS
//! - [`config`]: persisted preferences

// Module declarations
pub mod catalog;
pub mod config;
pub mod discovery;
pub mod error;
pub mod launcher;
pub mod record;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use error::{LaunchBoardError, Result};
