//! Note files on disk.

use crate::error::{NoteError, Result};
use crate::parser::{Frontmatter, MarkdownParser};
use crate::types::Content;
use std::path::{Path, PathBuf};

/// A note loaded from disk (or stdin).
#[derive(Debug, Clone)]
pub struct Note {
    /// Where the note came from, as given by the caller.
    pub path: PathBuf,

    /// Raw content of the note.
    pub content: String,
}

impl Note {
    /// Create a new note from path and content.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Load a note from disk.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(NoteError::NoteNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        log::debug!("loaded {} ({} bytes)", path.display(), content.len());
        Ok(Self::new(path, content))
    }

    /// Get the note name (filename without extension).
    pub fn name(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
    }

    /// Extract the title, body and lead.
    pub fn parse(&self, parser: &MarkdownParser) -> Result<Content> {
        parser.parse(&self.content)
    }

    /// Locate and decode the frontmatter.
    pub fn frontmatter(&self, parser: &MarkdownParser) -> Result<Frontmatter> {
        parser.frontmatter(&self.content)
    }
}
