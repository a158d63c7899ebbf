//! Text shell
//!
//! Renders the current launcher page as a grid of numbered tiles and drives the
//! catalog from line commands. Stands in for a graphical overlay.
//!
//! Discovery keeps running in the background while the shell is interactive.
//! The shell checks for its result before every render and fills the catalog
//! once it arrives; until then the grid is empty.

pub mod command;

pub use command::{Command, USAGE, parse_command};

use anyhow::{Context, Result};
use launchboard::{
    catalog::Catalog,
    discovery::DiscoveryTask,
    error::get_user_friendly_error,
    launcher::{LaunchOutcome, Launcher, launch_entry},
    record::{Entry, EntryId},
};
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Whether the shell keeps reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep going
    Continue,
    /// Leave the shell
    Exit,
}

/// Interactive launcher over a [`Catalog`]
pub struct Shell<L: Launcher> {
    catalog: Catalog,
    launcher: L,
    page: usize,
    grid_columns: usize,
    dismiss_after_launch: bool,
    /// Discovery still running in the background
    discovery: Option<DiscoveryTask>,
    /// One-line status shown under the grid
    message: Option<String>,
}

impl<L: Launcher> Shell<L> {
    /// Create a shell showing the first page of `catalog`
    pub fn new(catalog: Catalog, launcher: L) -> Self {
        Self {
            catalog,
            launcher,
            page: 0,
            grid_columns: launchboard::config::models::DEFAULT_GRID_COLUMNS,
            dismiss_after_launch: true,
            discovery: None,
            message: None,
        }
    }

    /// Fill the catalog from `task` once it finishes
    #[must_use]
    pub fn with_discovery(mut self, task: DiscoveryTask) -> Self {
        self.discovery = Some(task);
        self
    }

    /// Set the number of tiles per grid row; zero is treated as one
    #[must_use]
    pub fn with_grid_columns(mut self, columns: usize) -> Self {
        self.grid_columns = columns.max(1);
        self
    }

    /// Whether a successful launch ends the shell
    #[must_use]
    pub fn with_dismiss_after_launch(mut self, dismiss: bool) -> Self {
        self.dismiss_after_launch = dismiss;
        self
    }

    /// The catalog being shown
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Index of the page being shown
    pub fn page(&self) -> usize {
        self.page
    }

    /// Whether background discovery has not delivered its result yet
    pub fn is_discovering(&self) -> bool {
        self.discovery.is_some()
    }

    /// Take the discovery result if it has arrived, without blocking
    ///
    /// Returns `true` when the catalog was populated by this call.
    pub fn poll_discovery(&mut self) -> bool {
        let Some(task) = self.discovery.as_mut() else {
            return false;
        };
        let Some(outcome) = task.try_result() else {
            return false;
        };
        self.discovery = None;

        match outcome {
            Ok(records) => {
                info!("Discovery delivered {} applications", records.len());
                self.catalog.populate(records);
                self.clamp_page();
                true
            }
            Err(e) => {
                warn!("Discovery failed: {}", e);
                self.message = Some(get_user_friendly_error(&e));
                false
            }
        }
    }

    /// Read commands from `input` until `q`, end of input or a dismissing launch
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        self.poll_discovery();
        self.render(&mut output)?;

        for line in input.lines() {
            let line = line.context("Failed to read command")?;
            if line.trim().is_empty() {
                continue;
            }

            let flow = match parse_command(&line) {
                Ok(command) => self.handle(command),
                Err(e) => {
                    self.message = Some(format!("{e:#}"));
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
            self.poll_discovery();
            self.render(&mut output)?;
        }

        Ok(())
    }

    /// Apply one command
    pub fn handle(&mut self, command: Command) -> Flow {
        self.message = None;

        match command {
            Command::Search(query) => {
                self.catalog.set_filter(&query);
                self.page = 0;
            }
            Command::NextPage => {
                if self.page + 1 < self.catalog.paged_view().page_count() {
                    self.page += 1;
                }
            }
            Command::PrevPage => self.page = self.page.saturating_sub(1),
            Command::Activate(tile) => return self.activate(tile),
            Command::Group { .. } | Command::AddToFolder { .. } | Command::Move { .. }
                if self.catalog.opened_folder().is_some() =>
            {
                self.message = Some("Close the folder first".to_string());
            }
            Command::Group { name, members } => {
                let ids: Vec<EntryId> = members
                    .iter()
                    .filter_map(|&tile| self.tile_id(tile))
                    .collect();
                self.catalog.create_folder(&ids, name);
                self.clamp_page();
            }
            Command::AddToFolder { entry, folder } => {
                let added = match (self.tile_id(entry), self.tile_id(folder)) {
                    (Some(entry), Some(folder)) => self.catalog.add_to_folder(entry, folder),
                    _ => false,
                };
                if !added {
                    self.message = Some("Nothing to add: pick an application and a folder".into());
                }
                self.clamp_page();
            }
            Command::Move { from, to } => {
                self.catalog.move_entry(self.page, from - 1, to - 1);
            }
            Command::Close => self.catalog.close_folder(),
            Command::Help => self.message = Some(USAGE.to_string()),
            Command::Quit => return Flow::Exit,
        }

        Flow::Continue
    }

    /// Write the current page, or the open folder, to `out`
    pub fn render(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out)?;

        if let Some(folder) = self.catalog.opened_folder() {
            writeln!(out, "[{}]  (\"close\" to go back)", folder.name())?;
            let names: Vec<String> = folder
                .children()
                .iter()
                .map(|app| app.name().to_string())
                .collect();
            self.render_grid(out, &names)?;
        } else {
            let view = self.catalog.paged_view();
            let query = self.catalog.query();
            if query.is_empty() {
                writeln!(out, "Page {}/{}", self.page() + 1, view.page_count().max(1))?;
            } else {
                writeln!(
                    out,
                    "Page {}/{}  search: {query:?}",
                    self.page() + 1,
                    view.page_count().max(1)
                )?;
            }

            let names: Vec<String> = view
                .page(self.page())
                .unwrap_or_default()
                .iter()
                .map(tile_label)
                .collect();
            if names.is_empty() {
                writeln!(out, "No applications found")?;
            } else {
                self.render_grid(out, &names)?;
            }
            if self.is_discovering() {
                writeln!(out, "Searching for applications...")?;
            }
        }

        if let Some(message) = &self.message {
            writeln!(out, "{message}")?;
        }
        write!(out, "> ")?;
        out.flush()
    }

    fn render_grid(&self, out: &mut impl Write, labels: &[String]) -> std::io::Result<()> {
        for (row, chunk) in labels.chunks(self.grid_columns).enumerate() {
            let line: Vec<String> = chunk
                .iter()
                .enumerate()
                .map(|(column, label)| {
                    format!("{:>3} {:<18}", row * self.grid_columns + column + 1, label)
                })
                .collect();
            writeln!(out, "{}", line.join(" ").trim_end())?;
        }
        Ok(())
    }

    fn activate(&mut self, tile: usize) -> Flow {
        let entry = if let Some(folder) = self.catalog.opened_folder() {
            folder.children().get(tile - 1).cloned().map(Entry::App)
        } else {
            self.catalog
                .paged_view()
                .page(self.page)
                .and_then(|page| page.get(tile - 1))
                .cloned()
        };

        let Some(entry) = entry else {
            self.message = Some(format!("No tile {tile} on this page"));
            return Flow::Continue;
        };

        match launch_entry(&self.launcher, &entry) {
            Ok(LaunchOutcome::Launched) => {
                self.message = Some(format!("Opened {}", entry.name()));
                if self.dismiss_after_launch {
                    info!("Dismissing launcher after launch");
                    return Flow::Exit;
                }
            }
            Ok(LaunchOutcome::OpenFolder(id)) => {
                self.catalog.open_folder(id);
            }
            Err(e) => {
                warn!("Launch failed: {}", e);
                self.message = Some(get_user_friendly_error(&e));
            }
        }

        Flow::Continue
    }

    fn tile_id(&self, tile: usize) -> Option<EntryId> {
        self.catalog
            .paged_view()
            .page(self.page)
            .and_then(|page| page.get(tile - 1))
            .map(Entry::id)
    }

    fn clamp_page(&mut self) {
        let last = self.catalog.paged_view().page_count().saturating_sub(1);
        self.page = self.page.min(last);
    }
}

fn tile_label(entry: &Entry) -> String {
    match entry {
        Entry::App(app) => app.name().to_string(),
        Entry::Folder(folder) => format!("[{}] ({})", folder.name(), folder.len()),
    }
}
