//! Application and folder entries

use crate::record::Icon;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Process-local identity of an entry
///
/// Generated fresh for every record, so two records re-discovered from the
/// same location still have distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Generate a new random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Layout hint for an entry's grid cell (reserved, not used for ordering)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GridPosition {
    /// Horizontal offset
    pub x: f64,
    /// Vertical offset
    pub y: f64,
}

/// A launchable application discovered on disk
#[derive(Debug, Clone)]
pub struct AppRecord {
    id: EntryId,
    location: PathBuf,
    name: String,
    icon: Icon,
    /// Reserved layout hint
    pub position: GridPosition,
}

impl AppRecord {
    /// Create a record for the application at `location`
    pub fn new(location: impl Into<PathBuf>, name: impl Into<String>, icon: Icon) -> Self {
        Self {
            id: EntryId::new(),
            location: location.into(),
            name: name.into(),
            icon,
            position: GridPosition::default(),
        }
    }

    /// Process-local identity
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// Bundle location, the stable key for equality
    pub fn location(&self) -> &Path {
        &self.location
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tile icon
    pub fn icon(&self) -> &Icon {
        &self.icon
    }
}

// Records describe the same application when they share a location
impl PartialEq for AppRecord {
    fn eq(&self, other: &Self) -> bool {
        self.location == other.location
    }
}

impl Eq for AppRecord {}

impl Hash for AppRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.location.hash(state);
    }
}

/// A user-created group of applications
#[derive(Debug, Clone)]
pub struct Folder {
    id: EntryId,
    name: String,
    children: Vec<AppRecord>,
    /// Reserved layout hint
    pub position: GridPosition,
}

impl Folder {
    pub(crate) fn new(name: impl Into<String>, children: Vec<AppRecord>) -> Self {
        Self {
            id: EntryId::new(),
            name: name.into(),
            children,
            position: GridPosition::default(),
        }
    }

    /// Process-local identity
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// Folder name as given at creation
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Applications in the folder, in insertion order
    pub fn children(&self) -> &[AppRecord] {
        &self.children
    }

    /// Number of applications in the folder
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the folder holds no applications
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn push(&mut self, app: AppRecord) {
        self.children.push(app);
    }
}

/// A top-level launcher entry
#[derive(Debug, Clone)]
pub enum Entry {
    /// A single application
    App(AppRecord),
    /// A folder of applications
    Folder(Folder),
}

impl Entry {
    /// Identity of the wrapped app or folder
    pub fn id(&self) -> EntryId {
        match self {
            Entry::App(app) => app.id(),
            Entry::Folder(folder) => folder.id(),
        }
    }

    /// Display name; folders match the search by this name only
    pub fn name(&self) -> &str {
        match self {
            Entry::App(app) => app.name(),
            Entry::Folder(folder) => folder.name(),
        }
    }

    /// Whether this entry is a folder
    pub fn is_folder(&self) -> bool {
        matches!(self, Entry::Folder(_))
    }

    /// The application record, if this is an application
    pub fn as_app(&self) -> Option<&AppRecord> {
        match self {
            Entry::App(app) => Some(app),
            Entry::Folder(_) => None,
        }
    }

    /// The folder, if this is a folder
    pub fn as_folder(&self) -> Option<&Folder> {
        match self {
            Entry::App(_) => None,
            Entry::Folder(folder) => Some(folder),
        }
    }

    pub(crate) fn as_folder_mut(&mut self) -> Option<&mut Folder> {
        match self {
            Entry::App(_) => None,
            Entry::Folder(folder) => Some(folder),
        }
    }
}

impl From<AppRecord> for Entry {
    fn from(app: AppRecord) -> Self {
        Entry::App(app)
    }
}

impl From<Folder> for Entry {
    fn from(folder: Folder) -> Self {
        Entry::Folder(folder)
    }
}
