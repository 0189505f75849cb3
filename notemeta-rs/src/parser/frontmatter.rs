//! YAML frontmatter location and decoding.

use crate::error::{NoteError, Result};
use crate::parser::document::ParseContext;
use crate::types::OptString;
use regex::Regex;
use serde::Serialize;
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::ops::Range;
use std::sync::LazyLock;

// A block opened and closed by lines made of three or more dashes.
static FRONTMATTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)^\s*-{3,}\s*$(.*?)^\s*-{3,}\s*$").unwrap()
});

/// Byte spans of a dash-delimited block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSpan {
    /// The whole block, delimiters included.
    pub range: Range<usize>,
    /// The text between the delimiter lines.
    pub content: Range<usize>,
}

impl BlockSpan {
    /// Only a block opening the note holds metadata.
    pub fn opens_document(&self) -> bool {
        self.range.start == 0
    }
}

/// Decoded frontmatter metadata and the byte span of its block.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Frontmatter {
    /// Decoded key/value pairs, `None` when no metadata block was decoded.
    pub values: Option<BTreeMap<String, Value>>,
    /// Start offset of the delimited block (0 when none was found).
    pub start: usize,
    /// Offset right after the closing delimiter (0 when none was found).
    pub end: usize,
}

impl Frontmatter {
    /// Returns the first string value found for any of the given keys.
    ///
    /// Keys are tried in order. A key holding a non-string value is skipped;
    /// the first string value ends the search, even when it is empty.
    pub fn get_string(&self, keys: &[&str]) -> OptString {
        let Some(values) = &self.values else {
            return OptString::NONE;
        };

        for key in keys {
            if let Some(Value::String(value)) = values.get(*key) {
                return OptString::new(value.as_str());
            }
        }
        OptString::NONE
    }

    /// Whether a metadata block was decoded.
    pub fn is_present(&self) -> bool {
        self.values.is_some()
    }

    /// Where the body may start at the earliest: after a decoded block, or
    /// the beginning of the source.
    pub fn body_floor(&self) -> usize {
        if self.is_present() { self.end } else { 0 }
    }
}

/// Find the first dash-delimited block in `source`.
pub fn locate_frontmatter(source: &str) -> Option<BlockSpan> {
    let captures = FRONTMATTER.captures(source)?;
    let range = captures.get(0)?.range();
    let content = captures.get(1)?.range();
    Some(BlockSpan { range, content })
}

/// Decode the metadata block captured in `context`, if any.
///
/// The block must decode to a mapping with string keys. An empty block is an
/// empty mapping.
pub fn decode_metadata(context: &ParseContext) -> Result<Option<BTreeMap<String, Value>>> {
    let Some(raw) = context.metadata() else {
        return Ok(None);
    };

    let value: Value = serde_yaml::from_str(raw)
        .map_err(|e| NoteError::frontmatter_decode(e.to_string()))?;

    match value {
        Value::Null => Ok(Some(BTreeMap::new())),
        Value::Mapping(map) => {
            let mut values = BTreeMap::new();
            for (key, value) in map {
                match key {
                    Value::String(key) => {
                        values.insert(key, value);
                    }
                    other => {
                        return Err(NoteError::frontmatter_decode(format!(
                            "non-string key found: {:?}",
                            other
                        )));
                    }
                }
            }
            Ok(Some(values))
        }
        other => Err(NoteError::frontmatter_decode(format!(
            "expected a mapping, found {}",
            value_kind(&other)
        ))),
    }
}

/// Locate the frontmatter block in `source` and decode its metadata through
/// `context`.
pub fn parse_frontmatter(context: &mut ParseContext, source: &str) -> Result<Frontmatter> {
    frontmatter_from_block(context, source, locate_frontmatter(source))
}

/// Decode the metadata of an already located `block` through `context`.
///
/// The located block decides what the metadata is. When the document parser
/// captured nothing or something else (other delimiters, a `...` closer), the
/// context is given the text between the block's delimiter lines. A block
/// that does not open the note keeps its span but has no values.
pub fn frontmatter_from_block(
    context: &mut ParseContext,
    source: &str,
    block: Option<BlockSpan>,
) -> Result<Frontmatter> {
    let Some(block) = block else {
        return Ok(Frontmatter::default());
    };

    let values = if block.opens_document() {
        let raw = &source[block.content.clone()];
        if context.metadata().map(str::trim) != Some(raw.trim()) {
            log::debug!("reading metadata from the delimited block");
            context.set_metadata(raw);
        }
        decode_metadata(context)?
    } else {
        None
    };

    log::debug!(
        "frontmatter block at {}..{} ({} keys)",
        block.range.start,
        block.range.end,
        values.as_ref().map_or(0, BTreeMap::len)
    );

    Ok(Frontmatter {
        values,
        start: block.range.start,
        end: block.range.end,
    })
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
