//! Error types for `LaunchBoard`
//!
//! This module defines all error types used throughout the application,
//! providing clear error messages and proper error propagation.
//!
//! Error variants use `#[source]` to preserve error chains so the full cause
//! is visible in logs.

use std::path::PathBuf;
use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for `LaunchBoard`
#[derive(Debug, Error)]
pub enum LaunchBoardError {
    /// Application discovery failed as a whole
    /// Preserves the underlying error source for full error chain transparency
    #[error("Application discovery failed: {0}")]
    DiscoveryError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Discovery was cancelled before it produced a result
    #[error("Application discovery was cancelled")]
    DiscoveryCancelled,

    /// No icon could be resolved for an application bundle
    #[error("Icon resolution failed: {0}")]
    IconResolutionFailed(String),

    /// Icon image could not be decoded
    #[error("Image error: {0}")]
    ImageError(#[from] image::ImageError),

    /// The OS refused to launch an application
    #[error("Failed to launch {}: {source}", path.display())]
    LaunchFailed {
        /// Location of the application that failed to launch
        path: PathBuf,
        /// Underlying launch error
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    /// Preserves the underlying error source for full error chain transparency
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for `LaunchBoard` operations
pub type Result<T> = std::result::Result<T, LaunchBoardError>;

/// Convert an error to a user-friendly message
///
/// Returns a message suitable for showing to end users, with a short hint
/// on how to resolve the problem.
pub fn get_user_friendly_error(error: &LaunchBoardError) -> String {
    match error {
        LaunchBoardError::DiscoveryError(_) => "Unable to list installed applications.\n\n\
             Please check that the Applications folders exist and are readable."
            .to_string(),
        LaunchBoardError::DiscoveryCancelled => {
            "Application search was interrupted before it finished.".to_string()
        }
        LaunchBoardError::IconResolutionFailed(path) => {
            format!(
                "Failed to load the icon for: {path}\n\n\
                 The application will not be shown in the launcher."
            )
        }
        LaunchBoardError::ImageError(e) => {
            format!(
                "An application icon could not be decoded:\n\n{e}\n\n\
                 The icon file may be corrupted."
            )
        }
        LaunchBoardError::LaunchFailed { path, source } => {
            format!(
                "Could not open {}:\n\n{source}\n\n\
                 The application may have been moved or deleted.",
                path.display()
            )
        }
        LaunchBoardError::ConfigError(_) => "Failed to load or save configuration.\n\n\
             Your settings may not persist.\n\
             Check that you have write permissions to the LaunchBoard config folder."
            .to_string(),
        LaunchBoardError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and disk space."
            )
        }
        LaunchBoardError::JsonError(e) => {
            format!(
                "Configuration file is corrupted:\n\n{e}\n\n\
                 The application will use default settings."
            )
        }
    }
}
