//! CLI command implementations.

pub mod args;
pub mod output;

pub mod frontmatter;
pub mod parse;

pub use args::{Cli, Commands};
pub use output::Output;

use crate::error::{NoteError, Result};
use crate::note::Note;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

/// Load a note from `path`, or from stdin when no path is given.
pub fn read_note(path: Option<&Path>) -> Result<Note> {
    match path {
        Some(path) => Note::load(path),
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                return Err(NoteError::NoInput);
            }
            let mut buffer = String::new();
            stdin.lock().read_to_string(&mut buffer)?;
            Ok(Note::new("-", buffer))
        }
    }
}
