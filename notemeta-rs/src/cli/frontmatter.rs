//! Frontmatter command implementation.

use crate::cli::args::FrontmatterArgs;
use crate::cli::output::Output;
use crate::cli::read_note;
use crate::error::{exit_code, Result};
use crate::parser::MarkdownParser;
use serde::Serialize;
use serde_yaml::Value;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
pub struct FrontmatterResponse {
    pub path: String,
    pub start: usize,
    pub end: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<BTreeMap<String, Value>>,
}

pub fn run(args: &FrontmatterArgs, parser: &MarkdownParser, output: &Output) -> Result<i32> {
    let note = read_note(args.path.as_deref())?;
    let frontmatter = note.frontmatter(parser)?;

    if !frontmatter.is_present() {
        output.info(&format!("{}: no frontmatter", note.path.display()));
    }

    output.print(&FrontmatterResponse {
        path: note.path.display().to_string(),
        start: frontmatter.start,
        end: frontmatter.end,
        values: frontmatter.values,
    })?;
    Ok(exit_code::SUCCESS)
}
