//! Fixed-size pagination of filtered entries

use crate::record::Entry;

/// Filtered entries split into pages for display
///
/// Every page except the last holds exactly `page_size` entries; the last
/// holds between 1 and `page_size`. No entries means no pages.
#[derive(Debug, Clone, Default)]
pub struct PagedView {
    pages: Vec<Vec<Entry>>,
}

impl PagedView {
    /// Chunk `entries` into pages of at most `page_size`, preserving order
    ///
    /// A `page_size` of zero is treated as one.
    pub fn paginate(entries: impl IntoIterator<Item = Entry>, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let mut pages: Vec<Vec<Entry>> = Vec::new();

        for entry in entries {
            match pages.last_mut() {
                Some(page) if page.len() < page_size => page.push(entry),
                _ => {
                    let mut page = Vec::with_capacity(page_size);
                    page.push(entry);
                    pages.push(page);
                }
            }
        }

        Self { pages }
    }

    /// All pages in order
    pub fn pages(&self) -> &[Vec<Entry>] {
        &self.pages
    }

    /// A single page, if `index` is in range
    pub fn page(&self, index: usize) -> Option<&[Entry]> {
        self.pages.get(index).map(Vec::as_slice)
    }

    /// Number of pages
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Total number of entries across all pages
    pub fn len(&self) -> usize {
        self.pages.iter().map(Vec::len).sum()
    }

    /// Whether the view holds no entries (and therefore no pages)
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Entries across all pages, in display order
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.pages.iter().flatten()
    }

    /// Move the entry at `from` so it sits before the entry originally at `to`
    ///
    /// `to == page.len()` moves the entry to the end. Out-of-range arguments
    /// leave the view untouched.
    pub(crate) fn move_within_page(&mut self, page: usize, from: usize, to: usize) -> bool {
        let Some(entries) = self.pages.get_mut(page) else {
            return false;
        };
        if from >= entries.len() || to > entries.len() {
            return false;
        }

        let entry = entries.remove(from);
        let destination = if to > from { to - 1 } else { to };
        entries.insert(destination, entry);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{AppRecord, Icon};

    fn entries(count: usize) -> Vec<Entry> {
        (0..count)
            .map(|i| {
                Entry::from(AppRecord::new(
                    format!("/Applications/App{i}.app"),
                    format!("App{i}"),
                    Icon::placeholder(1),
                ))
            })
            .collect()
    }

    fn names(page: &[Entry]) -> Vec<&str> {
        page.iter().map(Entry::name).collect()
    }

    #[test]
    fn test_empty_input_yields_zero_pages() {
        let view = PagedView::paginate(Vec::new(), 35);
        assert_eq!(view.page_count(), 0);
        assert!(view.is_empty());
        assert_eq!(view.len(), 0);
        assert!(view.page(0).is_none());
    }

    #[test]
    fn test_exact_multiple_fills_every_page() {
        let view = PagedView::paginate(entries(70), 35);
        assert_eq!(view.page_count(), 2);
        assert!(view.pages().iter().all(|page| page.len() == 35));
    }

    #[test]
    fn test_remainder_goes_to_last_page() {
        let view = PagedView::paginate(entries(71), 35);
        let sizes: Vec<usize> = view.pages().iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![35, 35, 1]);
        assert_eq!(view.len(), 71);
    }

    #[test]
    fn test_zero_page_size_is_treated_as_one() {
        let view = PagedView::paginate(entries(3), 0);
        assert_eq!(view.page_count(), 3);
    }

    #[test]
    fn test_order_is_preserved_across_pages() {
        let view = PagedView::paginate(entries(5), 2);
        let flattened: Vec<&str> = view.iter().map(Entry::name).collect();
        assert_eq!(flattened, vec!["App0", "App1", "App2", "App3", "App4"]);
    }

    #[test]
    fn test_move_forward_inserts_before_target() {
        let mut view = PagedView::paginate(entries(4), 35);
        assert!(view.move_within_page(0, 0, 2));
        assert_eq!(
            names(view.page(0).unwrap()),
            vec!["App1", "App0", "App2", "App3"]
        );
    }

    #[test]
    fn test_move_backward() {
        let mut view = PagedView::paginate(entries(4), 35);
        assert!(view.move_within_page(0, 3, 0));
        assert_eq!(
            names(view.page(0).unwrap()),
            vec!["App3", "App0", "App1", "App2"]
        );
    }

    #[test]
    fn test_move_to_page_length_appends() {
        let mut view = PagedView::paginate(entries(4), 35);
        assert!(view.move_within_page(0, 1, 4));
        assert_eq!(
            names(view.page(0).unwrap()),
            vec!["App0", "App2", "App3", "App1"]
        );
    }

    #[test]
    fn test_out_of_range_moves_are_ignored() {
        let mut view = PagedView::paginate(entries(4), 35);
        assert!(!view.move_within_page(0, 4, 0));
        assert!(!view.move_within_page(0, 0, 5));
        assert!(!view.move_within_page(1, 0, 0));
        assert_eq!(
            names(view.page(0).unwrap()),
            vec!["App0", "App1", "App2", "App3"]
        );
    }
}
