//! Integration tests for `LaunchBoard`
//!
//! Tests discovery over real directory trees, the catalog's filter, paging and
//! folder behaviour, configuration persistence and launching, across the
//! public API.

use image::{ImageFormat, RgbaImage};
use launchboard::{
    catalog::Catalog,
    config::{LauncherConfig, Preferences},
    discovery::{BundleIconResolver, Discovery, DiscoveryTask},
    error::{LaunchBoardError, get_user_friendly_error},
    launcher::{LaunchOutcome, Launcher, launch_entry},
    record::{AppRecord, Entry, EntryId, Icon},
};
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};

fn record(name: &str) -> AppRecord {
    AppRecord::new(
        format!("/Applications/{name}.app"),
        name,
        Icon::placeholder(1),
    )
}

fn numbered(count: usize) -> Vec<AppRecord> {
    (0..count).map(|i| record(&format!("App {i:03}"))).collect()
}

fn view_names(catalog: &Catalog) -> Vec<String> {
    catalog
        .paged_view()
        .iter()
        .map(|entry| entry.name().to_string())
        .collect()
}

fn make_bundle(root: &Path, name: &str, icon_pixel: Option<[u8; 4]>) -> PathBuf {
    let bundle = root.join(name);
    let resources = bundle.join("Contents").join("Resources");
    fs::create_dir_all(&resources).unwrap();
    if let Some(pixel) = icon_pixel {
        RgbaImage::from_pixel(16, 16, image::Rgba(pixel))
            .save_with_format(resources.join("AppIcon.png"), ImageFormat::Png)
            .unwrap();
    }
    bundle
}

/// Filtering keeps canonical (name-sorted) order and matches case-insensitively
#[test]
fn test_filter_scenario() {
    let mut catalog = Catalog::new();
    catalog.populate(vec![record("Safari"), record("Xcode"), record("Mail")]);
    assert_eq!(view_names(&catalog), vec!["Mail", "Safari", "Xcode"]);

    catalog.set_filter("a");

    assert_eq!(view_names(&catalog), vec!["Mail", "Safari"]);
}

/// Populating sorts unsorted input by name, ignoring case
#[test]
fn test_populate_sorts_unsorted_input() {
    let mut catalog = Catalog::new();
    catalog.populate(vec![record("zed"), record("Mail"), record("calendar")]);

    let names: Vec<&str> = catalog.entries().iter().map(Entry::name).collect();
    assert_eq!(names, vec!["calendar", "Mail", "zed"]);
}

/// 70 entries fill two pages exactly; a 71st starts a third page
#[test]
fn test_paging_scenario() {
    let mut catalog = Catalog::new();

    catalog.populate(numbered(70));
    let sizes: Vec<usize> = catalog.paged_view().pages().iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![35, 35]);

    catalog.populate(numbered(71));
    let sizes: Vec<usize> = catalog.paged_view().pages().iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![35, 35, 1]);
}

/// Grouping replaces the members with one folder at the end of the list
#[test]
fn test_create_folder_scenario() {
    let a = record("A");
    let b = record("B");
    let c = record("C");
    let (b_id, c_id) = (b.id(), c.id());

    let mut catalog = Catalog::new();
    catalog.populate(vec![a, b, c]);
    catalog.set_filter("b");

    catalog.create_folder(&[b_id, c_id], "Utilities");

    assert_eq!(catalog.query(), "");
    assert_eq!(catalog.paged_view().len(), 2);
    let entries = catalog.entries();
    assert_eq!(entries[0].name(), "A");
    let folder = entries[1].as_folder().unwrap();
    assert_eq!(folder.name(), "Utilities");
    let children: Vec<&str> = folder.children().iter().map(AppRecord::name).collect();
    assert_eq!(children, vec!["B", "C"]);
}

/// Moving to the page length appends instead of failing
#[test]
fn test_move_to_end_scenario() {
    let mut catalog = Catalog::new();
    catalog.populate(vec![record("A"), record("B"), record("C")]);

    let page_len = catalog.paged_view().page(0).unwrap().len();
    catalog.move_entry(0, 0, page_len);

    assert_eq!(view_names(&catalog), vec!["B", "C", "A"]);
}

/// Folders are matched by their own name, not their children's
#[test]
fn test_filter_does_not_search_folder_contents() {
    let xcode = record("Xcode");
    let xcode_id = xcode.id();
    let mut catalog = Catalog::new();
    catalog.populate(vec![record("Safari"), xcode]);
    catalog.create_folder(&[xcode_id], "Dev");

    catalog.set_filter("xcode");
    assert!(catalog.paged_view().is_empty());

    catalog.set_filter("dev");
    assert_eq!(view_names(&catalog), vec!["Dev"]);
}

/// Folder operations ignore entries that are not top-level applications
#[test]
fn test_folder_operations_ignore_invalid_ids() {
    let mut catalog = Catalog::new();
    catalog.populate(vec![record("A"), record("B")]);
    let folder = catalog.create_folder(&[EntryId::new()], "Empty");

    assert!(catalog.find(folder).unwrap().as_folder().unwrap().is_empty());
    assert!(!catalog.add_to_folder(folder, folder));
    assert!(!catalog.add_to_folder(EntryId::new(), folder));
    assert!(!catalog.open_folder(catalog.entries()[0].id()));
    assert_eq!(catalog.len(), 3);
}

/// Discovery over a directory tree feeds the catalog end to end
#[test]
fn test_discovery_to_catalog_integration() {
    let user = tempfile::tempdir().unwrap();
    let local = tempfile::tempdir().unwrap();
    make_bundle(user.path(), "Notes.app", Some([255, 0, 0, 255]));
    make_bundle(local.path(), "calculator.app", None);
    make_bundle(local.path(), ".Hidden.app", None);
    fs::write(local.path().join("README.txt"), "not an app").unwrap();

    let discovery = Discovery::new(BundleIconResolver::new(8))
        .with_directories(vec![user.path().to_path_buf(), local.path().to_path_buf()]);
    let records = DiscoveryTask::spawn(discovery).unwrap().wait().unwrap();

    let names: Vec<&str> = records.iter().map(AppRecord::name).collect();
    assert_eq!(names, vec!["calculator", "Notes"]);
    assert!(records.iter().all(|record| record.icon().width() == 8));

    let mut catalog = Catalog::with_page_size(1);
    catalog.populate(records);
    assert_eq!(catalog.paged_view().page_count(), 2);
}

/// Preferences select directories, extension and icon fallback
#[test]
fn test_discovery_from_preferences() {
    let dir = tempfile::tempdir().unwrap();
    make_bundle(dir.path(), "Tool.plugin", None);
    make_bundle(dir.path(), "Painter.plugin", Some([0, 0, 0, 255]));
    make_bundle(dir.path(), "Mail.app", None);

    let preferences = Preferences {
        application_directories: vec![dir.path().to_path_buf()],
        bundle_extension: "plugin".to_string(),
        fallback_to_placeholder_icon: false,
        icon_size: 4,
        ..Preferences::default()
    };

    let records = Discovery::from_preferences(&preferences).discover();

    let names: Vec<&str> = records.iter().map(AppRecord::name).collect();
    assert_eq!(names, vec!["Painter"]);
}

/// A missing applications directory yields no records rather than an error
#[test]
fn test_discovery_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let discovery = Discovery::new(BundleIconResolver::default())
        .with_directories(vec![dir.path().join("does-not-exist")]);

    assert!(discovery.discover().is_empty());
}

/// Configuration survives a JSON round trip through the file system
#[test]
fn test_config_persistence_integration() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.json");

    let mut config = LauncherConfig::default();
    config.preferences.page_size = 24;
    config.preferences.application_directories = vec![PathBuf::from("/opt/apps")];
    fs::write(&config_path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

    let loaded: LauncherConfig =
        serde_json::from_str(&fs::read_to_string(&config_path).unwrap()).unwrap();
    assert_eq!(loaded, config);
}

#[derive(Default)]
struct RecordingLauncher {
    launched: Mutex<Vec<PathBuf>>,
}

impl Launcher for RecordingLauncher {
    fn launch(&self, location: &Path) -> launchboard::Result<()> {
        self.launched.lock().push(location.to_path_buf());
        Ok(())
    }
}

/// Activating tiles launches apps and opens folders
#[test]
fn test_launch_integration() {
    let mail = record("Mail");
    let mail_id = mail.id();
    let mut catalog = Catalog::new();
    catalog.populate(vec![record("Safari"), mail]);
    let folder_id = catalog.create_folder(&[mail_id], "Comms");
    let launcher = RecordingLauncher::default();

    let safari = &catalog.paged_view().page(0).unwrap()[0];
    assert_eq!(
        launch_entry(&launcher, safari).unwrap(),
        LaunchOutcome::Launched
    );

    let folder = catalog.find(folder_id).unwrap().clone();
    let outcome = launch_entry(&launcher, &folder).unwrap();
    assert_eq!(outcome, LaunchOutcome::OpenFolder(folder_id));
    assert!(catalog.open_folder(folder_id));

    let child = Entry::App(catalog.opened_folder().unwrap().children()[0].clone());
    launch_entry(&launcher, &child).unwrap();

    assert_eq!(
        *launcher.launched.lock(),
        vec![
            PathBuf::from("/Applications/Safari.app"),
            PathBuf::from("/Applications/Mail.app"),
        ]
    );
}

/// Launch failures carry the location into the user-facing message
#[test]
fn test_launch_failure_message() {
    let error = LaunchBoardError::LaunchFailed {
        path: PathBuf::from("/Applications/Gone.app"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
    };

    let message = get_user_friendly_error(&error);
    assert!(message.contains("/Applications/Gone.app"));
}
