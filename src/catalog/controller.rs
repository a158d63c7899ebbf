//! Canonical entry list with search filtering and pagination

use crate::catalog::PagedView;
use crate::discovery::service::sort_by_name;
use crate::record::{AppRecord, Entry, EntryId};
use tracing::debug;

/// Number of tiles per launcher page
pub const DEFAULT_PAGE_SIZE: usize = 35;

/// Launcher state: canonical entries, search query and the derived paged view
///
/// All mutation goes through `&mut self`, so the owner of the catalog is the
/// only writer. The paged view is recomputed eagerly on every change.
#[derive(Debug)]
pub struct Catalog {
    /// Top-level applications and folders, in display order
    pub(crate) entries: Vec<Entry>,
    /// Current search query (empty shows everything)
    query: String,
    /// Maximum entries per page
    page_size: usize,
    /// Filtered, paginated projection of `entries`
    view: PagedView,
    /// Folder currently expanded by the presentation layer
    pub(crate) open_folder: Option<EntryId>,
}

impl Catalog {
    /// Create an empty catalog with the default page size
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Create an empty catalog; a `page_size` of zero is treated as one
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            entries: Vec::new(),
            query: String::new(),
            page_size: page_size.max(1),
            view: PagedView::default(),
            open_folder: None,
        }
    }

    /// Replace the canonical list with discovered applications
    ///
    /// Records are sorted by name, ignoring case; records with equal names
    /// keep their relative order. Any open folder is closed and the current
    /// query is re-applied.
    pub fn populate(&mut self, mut records: Vec<AppRecord>) {
        debug!("Populating catalog with {} applications", records.len());
        sort_by_name(&mut records);
        self.entries = records.into_iter().map(Entry::App).collect();
        self.open_folder = None;
        self.recompute();
    }

    /// Canonical list of top-level entries
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of top-level entries, ignoring the filter
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the canonical list is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current search query
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Maximum entries per page
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Look up a top-level entry by id
    pub fn find(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Set the search query and recompute the paged view
    ///
    /// An empty query shows the whole canonical list; otherwise entries whose
    /// name contains `query` case-insensitively are kept, in canonical order.
    /// Folder contents are not searched.
    pub fn set_filter(&mut self, query: &str) {
        query.clone_into(&mut self.query);
        self.recompute();
    }

    /// Current paged view
    pub fn paged_view(&self) -> &PagedView {
        &self.view
    }

    /// Reorder an entry within one page of the current view
    ///
    /// The element at `from` is placed before the element originally at `to`;
    /// `to` equal to the page length moves it to the end. Out-of-range
    /// arguments are ignored. The canonical list is not changed, so the next
    /// filter recompute restores canonical order.
    pub fn move_entry(&mut self, page: usize, from: usize, to: usize) {
        if !self.view.move_within_page(page, from, to) {
            debug!(
                "Ignoring out-of-range move on page {}: {} -> {}",
                page, from, to
            );
        }
    }

    /// Rebuild the paged view from the canonical list and current query
    pub(crate) fn recompute(&mut self) {
        let needle = self.query.to_lowercase();
        let matching = self
            .entries
            .iter()
            .filter(|entry| needle.is_empty() || entry.name().to_lowercase().contains(&needle))
            .cloned();

        self.view = PagedView::paginate(matching, self.page_size);
        debug!(
            "Recomputed view for query {:?}: {} entries on {} pages",
            self.query,
            self.view.len(),
            self.view.page_count()
        );
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
