//! Launcher catalog module
//!
//! Owns the canonical list of top-level entries and derives the paged,
//! filtered view the presentation layer renders.
//!
//! # Overview
//!
//! The [`Catalog`] is the single writer for launcher state:
//! - **Canonical list**: every top-level application and folder, in display order
//! - **Filter**: case-insensitive substring match on entry names
//! - **Paged view**: the filtered list chunked into pages of at most `page_size` entries
//! - **Folders**: grouping of applications into named folders
//!
//! # Recompute Flow
//!
//! ```text
//! populate / set_filter / create_folder / add_to_folder
//!                     ↓
//!        canonical list → filter → paginate → PagedView
//! ```
//!
//! Folder mutations always reset the search query to empty before
//! recomputing. Reordering within a page via [`Catalog::move_entry`] only
//! touches the paged view and is lost on the next recompute.

pub mod controller;
pub mod folders;
pub mod paged_view;

pub use controller::{Catalog, DEFAULT_PAGE_SIZE};
pub use paged_view::PagedView;
