//! Application discovery module
//!
//! Finds installed applications and turns each into an [`AppRecord`](crate::record::AppRecord).
//!
//! # Algorithm
//!
//! 1. List the direct children of every applications directory
//!    (user, local, network and system domains), skipping hidden entries
//! 2. Keep entries whose extension is the bundle marker (`app`)
//! 3. Resolve a display name and an icon for each bundle in parallel;
//!    bundles where either fails are dropped silently
//! 4. Sort by display name, case-insensitively and stably
//!
//! # Threading
//!
//! [`DiscoveryTask`] runs a [`Discovery`] once on a background thread and
//! hands the result back over a channel. The task can be cancelled; dropping
//! it cancels too, so an abandoned scan stops early.

pub mod icon_resolver;
pub mod scanner;
pub mod service;
pub mod task;

pub use icon_resolver::{BundleIconResolver, DEFAULT_ICON_SIZE, IconResolver};
pub use scanner::{DEFAULT_BUNDLE_EXTENSION, Domain, application_directories};
pub use service::Discovery;
pub use task::DiscoveryTask;
