//! Markdown note parser: assembles frontmatter, title, body and lead.

use crate::config::MarkdownConfig;
use crate::error::Result;
use crate::parser::body::extract_body;
use crate::parser::document::{DocNode, DocumentParser, ParseContext};
use crate::parser::frontmatter::{
    frontmatter_from_block, locate_frontmatter, BlockSpan, Frontmatter,
};
use crate::parser::lead::extract_lead;
use crate::parser::title::resolve_title;
use crate::types::Content;

/// Parses the content of Markdown notes.
///
/// The parser only holds immutable configuration. Build one and share it
/// across threads; every call to [`MarkdownParser::parse`] gets its own
/// parsing context.
#[derive(Debug, Clone, Default)]
pub struct MarkdownParser {
    document: DocumentParser,
}

impl MarkdownParser {
    /// Create a parser with the default Markdown extensions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with the given Markdown extensions.
    pub fn with_config(config: &MarkdownConfig) -> Self {
        Self {
            document: DocumentParser::new(config),
        }
    }

    /// Extract the title, body and lead of a note.
    pub fn parse(&self, source: &str) -> Result<Content> {
        let (root, frontmatter) = self.read(source)?;
        let resolved = resolve_title(&frontmatter, &root)?;

        let body = extract_body(source, resolved.body_start);
        let lead = extract_lead(&body);
        log::trace!(
            "parsed note: title={:?} body_start={}",
            resolved.title.as_deref(),
            resolved.body_start
        );

        Ok(Content {
            title: resolved.title,
            body,
            lead,
        })
    }

    /// Locate and decode the frontmatter of a note.
    pub fn frontmatter(&self, source: &str) -> Result<Frontmatter> {
        self.read(source).map(|(_, frontmatter)| frontmatter)
    }

    /// Build the document tree and decode the frontmatter with one parsing
    /// context.
    fn read(&self, source: &str) -> Result<(DocNode, Frontmatter)> {
        let block = locate_frontmatter(source);

        let mut context = ParseContext::new();
        let mut root = self.document.parse(source, &mut context);
        let opens_document = block.as_ref().is_some_and(BlockSpan::opens_document);
        if context.metadata().is_some() && !opens_document {
            // Not frontmatter: the dashed line and what follows are Markdown.
            log::debug!("metadata block without a closing dash line, reading it as Markdown");
            context = ParseContext::new();
            root = self.document.without_metadata().parse(source, &mut context);
        }

        let frontmatter = frontmatter_from_block(&mut context, source, block)?;
        Ok((root, frontmatter))
    }
}
