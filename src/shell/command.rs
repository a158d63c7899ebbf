//! Line commands understood by the text shell

use anyhow::{Context, Result, bail};

/// A parsed shell command
///
/// Tile numbers are 1-based positions on the page currently shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/text` sets the search query; `/` alone clears it
    Search(String),
    /// `n`
    NextPage,
    /// `p`
    PrevPage,
    /// `<number>` launches an application or opens a folder
    Activate(usize),
    /// `folder <name> <n>...`
    Group {
        /// Folder name
        name: String,
        /// Tiles to move into the folder
        members: Vec<usize>,
    },
    /// `add <n> <folder n>`
    AddToFolder {
        /// Tile holding the application
        entry: usize,
        /// Tile holding the folder
        folder: usize,
    },
    /// `move <from> <to>`
    Move {
        /// Tile to move
        from: usize,
        /// Tile it is placed before; one past the last tile moves it to the end
        to: usize,
    },
    /// `close`
    Close,
    /// `?` or `help`
    Help,
    /// `q`
    Quit,
}

/// Usage text shown by `help`
pub const USAGE: &str = "\
commands:
  /text             search (\"/\" alone clears)
  n, p              next / previous page
  <n>               launch tile n, or open it if it is a folder
  folder <name> <n>...
                    group tiles into a new folder
  add <n> <folder>  move tile n into the folder at tile <folder>
  move <from> <to>  reorder tiles on this page
  close             close the open folder
  q                 quit";

/// Parse one input line
pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();

    if let Some(query) = line.strip_prefix('/') {
        return Ok(Command::Search(query.to_string()));
    }

    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        bail!("empty command");
    };
    let rest: Vec<&str> = words.collect();

    let command = match (head, rest.as_slice()) {
        ("n", []) => Command::NextPage,
        ("p", []) => Command::PrevPage,
        ("q" | "quit", []) => Command::Quit,
        ("close", []) => Command::Close,
        ("?" | "help", []) => Command::Help,
        ("folder", [name, members @ ..]) if !members.is_empty() => Command::Group {
            name: (*name).to_string(),
            members: members
                .iter()
                .map(|word| tile_number(word))
                .collect::<Result<_>>()?,
        },
        ("add", [entry, folder]) => Command::AddToFolder {
            entry: tile_number(entry)?,
            folder: tile_number(folder)?,
        },
        ("move", [from, to]) => Command::Move {
            from: tile_number(from)?,
            to: tile_number(to)?,
        },
        (number, []) if number.starts_with(|c: char| c.is_ascii_digit()) => {
            Command::Activate(tile_number(number)?)
        }
        _ => bail!("unknown command {line:?}, type \"help\" for a list"),
    };

    Ok(command)
}

fn tile_number(word: &str) -> Result<usize> {
    let number: usize = word
        .parse()
        .with_context(|| format!("{word:?} is not a tile number"))?;
    if number == 0 {
        bail!("tile numbers start at 1");
    }
    Ok(number)
}
