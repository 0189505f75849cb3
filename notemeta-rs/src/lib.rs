//! notemeta - extract the title, body and lead of Markdown notes.
//!
//! # Overview
//!
//! A note is Markdown text with an optional YAML frontmatter block. notemeta
//! derives:
//! - the **title**, from the frontmatter `title`/`Title` key or else from the
//!   most significant heading
//! - the **body**, everything after the title (or the frontmatter)
//! - the **lead**, the first paragraph of the body
//!
//! # Example
//!
//! ```
//! use notemeta::MarkdownParser;
//!
//! let parser = MarkdownParser::new();
//! let content = parser.parse("# Title\n\nFirst paragraph.\n\nMore.").unwrap();
//!
//! assert_eq!(content.title.as_deref(), Some("Title"));
//! assert_eq!(content.lead.as_deref(), Some("First paragraph."));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod note;
pub mod parser;
pub mod types;

use std::sync::LazyLock;

// Re-export main types at crate root
pub use config::Config;
pub use error::{NoteError, Result};
pub use note::Note;
pub use parser::{Frontmatter, MarkdownParser};
pub use types::{Content, OptString};

static DEFAULT_PARSER: LazyLock<MarkdownParser> = LazyLock::new(MarkdownParser::new);

/// Parse a note with the process-wide default parser.
pub fn parse(source: &str) -> Result<Content> {
    DEFAULT_PARSER.parse(source)
}
