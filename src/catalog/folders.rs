//! Folder grouping operations on the catalog
//!
//! Folders are created only by explicit grouping and live only in memory.
//! There is no operation to take an application back out of a folder,
//! delete a folder or rename it.

use crate::catalog::Catalog;
use crate::record::{Entry, EntryId, Folder};
use tracing::{debug, info};

impl Catalog {
    /// Group top-level applications into a new folder named `name`
    ///
    /// Applications are moved into the folder in the order of `members`.
    /// Ids that are not top-level applications (unknown ids, folders, or
    /// repeats) are skipped. The folder is appended to the canonical list and
    /// the search query is reset to empty. Returns the new folder's id.
    pub fn create_folder(&mut self, members: &[EntryId], name: impl Into<String>) -> EntryId {
        let mut children = Vec::with_capacity(members.len());

        for &member in members {
            let Some(index) = self
                .entries
                .iter()
                .position(|entry| entry.id() == member && !entry.is_folder())
            else {
                debug!("Skipping folder member {}: not a top-level application", member);
                continue;
            };

            if let Entry::App(app) = self.entries.remove(index) {
                children.push(app);
            }
        }

        let folder = Folder::new(name, children);
        let folder_id = folder.id();
        info!(
            "Created folder {:?} with {} applications",
            folder.name(),
            folder.len()
        );

        self.entries.push(Entry::Folder(folder));
        self.set_filter("");
        folder_id
    }

    /// Move a top-level application into an existing folder
    ///
    /// Does nothing and returns `false` when `folder` is not a top-level
    /// folder or `entry` is not a top-level application. On success the
    /// application is appended to the folder and the search query is reset.
    pub fn add_to_folder(&mut self, entry: EntryId, folder: EntryId) -> bool {
        let Some(folder_index) = self
            .entries
            .iter()
            .position(|candidate| candidate.id() == folder && candidate.is_folder())
        else {
            debug!("Ignoring add to {}: not a folder", folder);
            return false;
        };

        let Some(entry_index) = self
            .entries
            .iter()
            .position(|candidate| candidate.id() == entry && !candidate.is_folder())
        else {
            debug!("Ignoring add of {}: not a top-level application", entry);
            return false;
        };

        let Entry::App(app) = self.entries.remove(entry_index) else {
            return false;
        };
        let folder_index = if entry_index < folder_index {
            folder_index - 1
        } else {
            folder_index
        };

        if let Some(target) = self.entries[folder_index].as_folder_mut() {
            info!("Adding {:?} to folder {:?}", app.name(), target.name());
            target.push(app);
        }

        self.set_filter("");
        true
    }

    /// Expand a folder for display
    ///
    /// Returns `false` and leaves state unchanged if `folder` is not a
    /// top-level folder.
    pub fn open_folder(&mut self, folder: EntryId) -> bool {
        let is_folder = self.find(folder).is_some_and(Entry::is_folder);
        if is_folder {
            self.open_folder = Some(folder);
        }
        is_folder
    }

    /// Collapse the open folder, if any
    pub fn close_folder(&mut self) {
        self.open_folder = None;
    }

    /// The folder currently expanded, if any
    pub fn opened_folder(&self) -> Option<&Folder> {
        self.open_folder
            .and_then(|id| self.find(id))
            .and_then(Entry::as_folder)
    }
}
