//! Launcher entry records
//!
//! An entry is either a discovered application or a user-created folder
//! grouping applications. Folders hold [`AppRecord`]s directly, so a folder
//! can never contain another folder.
//!
//! Application records compare equal when they point at the same location on
//! disk, even if they were discovered separately. Every record also carries a
//! process-local [`EntryId`] used by the catalog for identity-based removal.

pub mod entry;
pub mod icon;

pub use entry::{AppRecord, Entry, EntryId, Folder, GridPosition};
pub use icon::Icon;
