//! Parsers for Markdown notes.

pub mod body;
pub mod document;
pub mod frontmatter;
pub mod lead;
pub mod markdown;
pub mod title;

pub use body::extract_body;
pub use document::{walk, DocNode, DocumentParser, LineSpan, Node, NodeKind, ParseContext, WalkStatus};
pub use frontmatter::{
    decode_metadata, frontmatter_from_block, locate_frontmatter, parse_frontmatter, BlockSpan,
    Frontmatter,
};
pub use lead::extract_lead;
pub use markdown::MarkdownParser;
pub use title::{resolve_title, ResolvedTitle, TITLE_KEYS};
