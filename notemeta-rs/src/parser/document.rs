//! Markdown document tree built on top of `pulldown-cmark`.
//!
//! The parser produces an owned tree of [`DocNode`]s carrying byte spans into
//! the source. YAML-style metadata blocks are always enabled: the parser
//! stores the raw block in the per-call [`ParseContext`] so it can be decoded
//! later without scanning the source a second time.
//!
//! Traversal goes through the [`Node`] capability trait and [`walk`], so the
//! title resolution logic does not depend on the concrete tree type.

use crate::config::MarkdownConfig;
use crate::error::Result;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag};
use std::ops::Range;

/// Byte span of a single source line, without its line terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    pub start: usize,
    pub stop: usize,
}

/// Minimal view of a document node needed to walk a tree and inspect
/// headings.
pub trait Node: Sized {
    fn children(&self) -> &[Self];

    /// Heading level (1 is the most significant), or `None` for any other
    /// node.
    fn heading_level(&self) -> Option<u8>;

    /// Plain text of the node with inline formatting removed.
    fn text(&self) -> String;

    /// Source lines spanned by the node, in order.
    fn lines(&self) -> &[LineSpan];
}

/// What the visitor wants [`walk`] to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStatus {
    Continue,
    /// Do not descend into the current node's children.
    SkipChildren,
    /// Abort the walk.
    Stop,
}

enum Step<'a, N> {
    Enter(&'a N),
    Leave(&'a N),
}

/// Depth-first, pre-order walk.
///
/// The visitor is called with `entering = true` before a node's children and
/// with `entering = false` after them. Returning [`WalkStatus::Stop`] from
/// either call ends the walk immediately, and a visitor error ends it with
/// that error. Pending nodes live on a heap stack, so nesting depth is not
/// limited by the thread stack.
pub fn walk<'a, N, F>(root: &'a N, mut visit: F) -> Result<WalkStatus>
where
    N: Node,
    F: FnMut(&'a N, bool) -> Result<WalkStatus>,
{
    let mut pending = vec![Step::Enter(root)];

    while let Some(step) = pending.pop() {
        match step {
            Step::Enter(node) => match visit(node, true)? {
                WalkStatus::Stop => return Ok(WalkStatus::Stop),
                WalkStatus::SkipChildren => pending.push(Step::Leave(node)),
                WalkStatus::Continue => {
                    pending.push(Step::Leave(node));
                    pending.extend(node.children().iter().rev().map(Step::Enter));
                }
            },
            Step::Leave(node) => {
                if visit(node, false)? == WalkStatus::Stop {
                    return Ok(WalkStatus::Stop);
                }
            }
        }
    }

    Ok(WalkStatus::Continue)
}

/// Kind of a [`DocNode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    MetadataBlock,
    Heading(u8),
    Paragraph,
    BlockQuote,
    CodeBlock,
    List,
    Item,
    Table,
    /// Any other container (emphasis, links, footnote definitions, ...).
    Container,
    Text(String),
    Code(String),
    Html(String),
    Break,
    Rule,
    Other,
}

/// A node of the parsed document.
#[derive(Debug, PartialEq, Eq)]
pub struct DocNode {
    pub kind: NodeKind,
    /// Byte range of the node in the source.
    pub range: Range<usize>,
    lines: Vec<LineSpan>,
    children: Vec<DocNode>,
}

impl DocNode {
    pub fn new(kind: NodeKind, range: Range<usize>) -> Self {
        Self {
            kind,
            range,
            lines: Vec::new(),
            children: Vec::new(),
        }
    }

    fn push(&mut self, child: DocNode) {
        self.children.push(child);
    }

    fn collect_text(&self, out: &mut String) {
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            match &node.kind {
                NodeKind::Text(text) | NodeKind::Code(text) => out.push_str(text),
                NodeKind::Break => out.push(' '),
                _ => pending.extend(node.children.iter().rev()),
            }
        }
    }
}

// Iterative: deeply nested notes must not overflow the stack on drop.
impl Drop for DocNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl Node for DocNode {
    fn children(&self) -> &[Self] {
        &self.children
    }

    fn heading_level(&self) -> Option<u8> {
        match self.kind {
            NodeKind::Heading(level) => Some(level),
            _ => None,
        }
    }

    fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn lines(&self) -> &[LineSpan] {
        &self.lines
    }
}

/// State collected while parsing a single document.
///
/// A fresh context is created for every parse so nothing leaks between
/// notes.
#[derive(Debug, Default)]
pub struct ParseContext {
    metadata: Option<String>,
}

impl ParseContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw content of the metadata block, without its delimiters.
    pub fn metadata(&self) -> Option<&str> {
        self.metadata.as_deref()
    }

    /// Record the content of a metadata block.
    pub fn set_metadata(&mut self, raw: impl Into<String>) {
        self.metadata = Some(raw.into());
    }

    fn push_metadata(&mut self, raw: &str) {
        self.metadata.get_or_insert_with(String::new).push_str(raw);
    }
}

/// Configured Markdown parser.
///
/// Holds only immutable options; build it once and share it.
#[derive(Debug, Clone, Copy)]
pub struct DocumentParser {
    options: Options,
}

impl DocumentParser {
    pub fn new(config: &MarkdownConfig) -> Self {
        let mut options = Options::ENABLE_YAML_STYLE_METADATA_BLOCKS;
        options.set(Options::ENABLE_TABLES, config.tables);
        options.set(Options::ENABLE_FOOTNOTES, config.footnotes);
        options.set(Options::ENABLE_STRIKETHROUGH, config.strikethrough);
        options.set(Options::ENABLE_TASKLISTS, config.tasklists);
        options.set(Options::ENABLE_SMART_PUNCTUATION, config.smart_punctuation);
        options.set(Options::ENABLE_HEADING_ATTRIBUTES, config.heading_attributes);
        Self { options }
    }

    pub fn options(&self) -> Options {
        self.options
    }

    /// The same parser with metadata blocks read as plain Markdown.
    pub fn without_metadata(&self) -> Self {
        let mut options = self.options;
        options.remove(Options::ENABLE_YAML_STYLE_METADATA_BLOCKS);
        Self { options }
    }

    /// Parse `source` into a document tree, recording the metadata block (if
    /// any) in `context`.
    pub fn parse(&self, source: &str, context: &mut ParseContext) -> DocNode {
        let mut stack = vec![DocNode::new(NodeKind::Document, 0..source.len())];

        for (event, range) in Parser::new_ext(source, self.options).into_offset_iter() {
            match event {
                Event::Start(tag) => {
                    stack.push(DocNode::new(node_kind(&tag), range));
                }
                Event::End(_) => {
                    // The root is never popped: pulldown-cmark balances its
                    // start and end events.
                    if stack.len() > 1 {
                        if let Some(mut node) = stack.pop() {
                            if node.heading_level().is_some() {
                                node.lines = line_spans(source, &node.range);
                            }
                            if let Some(parent) = stack.last_mut() {
                                parent.push(node);
                            }
                        }
                    }
                }
                Event::Text(text) => {
                    if let Some(parent) = stack.last_mut() {
                        if parent.kind == NodeKind::MetadataBlock {
                            context.push_metadata(&text);
                        }
                        parent.push(DocNode::new(NodeKind::Text(text.to_string()), range));
                    }
                }
                other => {
                    let kind = match other {
                        Event::Code(code) => NodeKind::Code(code.to_string()),
                        Event::Html(html) | Event::InlineHtml(html) => {
                            NodeKind::Html(html.to_string())
                        }
                        Event::SoftBreak | Event::HardBreak => NodeKind::Break,
                        Event::Rule => NodeKind::Rule,
                        _ => NodeKind::Other,
                    };
                    if let Some(parent) = stack.last_mut() {
                        parent.push(DocNode::new(kind, range));
                    }
                }
            }
        }

        // Fold anything left open back into the root.
        while stack.len() > 1 {
            if let Some(node) = stack.pop() {
                if let Some(parent) = stack.last_mut() {
                    parent.push(node);
                }
            }
        }

        let root = stack.pop().unwrap_or_else(|| DocNode::new(NodeKind::Document, 0..0));
        log::trace!("parsed document with {} top-level nodes", root.children.len());
        root
    }
}

impl Default for DocumentParser {
    fn default() -> Self {
        Self::new(&MarkdownConfig::default())
    }
}

fn node_kind(tag: &Tag<'_>) -> NodeKind {
    match tag {
        Tag::Heading { level, .. } => NodeKind::Heading(heading_level_to_u8(*level)),
        Tag::MetadataBlock(_) => NodeKind::MetadataBlock,
        Tag::Paragraph => NodeKind::Paragraph,
        Tag::BlockQuote(_) => NodeKind::BlockQuote,
        Tag::CodeBlock(_) => NodeKind::CodeBlock,
        Tag::List(_) => NodeKind::List,
        Tag::Item => NodeKind::Item,
        Tag::Table(_) => NodeKind::Table,
        _ => NodeKind::Container,
    }
}

fn heading_level_to_u8(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Split a byte range of `source` into non-empty line spans.
fn line_spans(source: &str, range: &Range<usize>) -> Vec<LineSpan> {
    let Some(region) = source.get(range.clone()) else {
        return Vec::new();
    };

    let mut spans = Vec::new();
    let mut start = range.start;
    for line in region.split_inclusive('\n') {
        let content = line.trim_end_matches(['\n', '\r']);
        if !content.is_empty() {
            spans.push(LineSpan {
                start,
                stop: start + content.len(),
            });
        }
        start += line.len();
    }
    spans
}
