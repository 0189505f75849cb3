//! Parse command implementation.

use crate::cli::args::{Field, ParseArgs};
use crate::cli::output::Output;
use crate::cli::read_note;
use crate::error::{exit_code, NoteError, Result};
use crate::note::Note;
use crate::parser::MarkdownParser;
use crate::types::{Content, OptString};
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Parsed metadata of one note.
#[derive(Debug, Serialize)]
pub struct ParsedNote {
    pub path: String,
    pub title: OptString,
    pub body: OptString,
    pub lead: OptString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ParsedNote {
    fn parsed(path: &Path, content: Content) -> Self {
        Self {
            path: path.display().to_string(),
            title: content.title,
            body: content.body,
            lead: content.lead,
            error: None,
        }
    }

    fn failed(path: &Path, error: &NoteError) -> Self {
        Self {
            path: path.display().to_string(),
            title: OptString::NONE,
            body: OptString::NONE,
            lead: OptString::NONE,
            error: Some(error.to_string()),
        }
    }

    fn field(&self, field: Field) -> &OptString {
        match field {
            Field::Title => &self.title,
            Field::Body => &self.body,
            Field::Lead => &self.lead,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ParseResponse<'a> {
    pub total: usize,
    pub notes: &'a [ParsedNote],
}

/// Collect the note paths named on the command line and matched by the glob.
pub fn collect_paths(args: &ParseArgs) -> Result<Vec<PathBuf>> {
    let mut paths = args.paths.clone();
    if let Some(pattern) = &args.glob {
        for entry in glob::glob(pattern)? {
            let path = entry?;
            if path.is_file() {
                paths.push(path);
            }
        }
    }
    Ok(paths)
}

pub fn run(args: &ParseArgs, parser: &MarkdownParser, output: &Output) -> Result<i32> {
    if args.paths.is_empty() && args.glob.is_none() {
        let note = read_note(None)?;
        let parsed = ParsedNote::parsed(&note.path, note.parse(parser)?);
        print_notes(std::slice::from_ref(&parsed), args.field, output, true)?;
        return Ok(exit_code::SUCCESS);
    }

    // A single named note fails like any other command.
    if let (None, [path]) = (&args.glob, args.paths.as_slice()) {
        let content = Note::load(path)?.parse(parser)?;
        let parsed = ParsedNote::parsed(path, content);
        print_notes(std::slice::from_ref(&parsed), args.field, output, true)?;
        return Ok(exit_code::SUCCESS);
    }

    let paths = collect_paths(args)?;
    if paths.is_empty() {
        output.info("No notes matched");
    }

    let outcomes: Vec<(PathBuf, Result<Content>)> = paths
        .par_iter()
        .map(|path| (path.clone(), Note::load(path).and_then(|note| note.parse(parser))))
        .collect();

    let mut code = exit_code::SUCCESS;
    let mut notes = Vec::with_capacity(outcomes.len());
    for (path, outcome) in outcomes {
        match outcome {
            Ok(content) => notes.push(ParsedNote::parsed(&path, content)),
            Err(e) => {
                output.warn(&format!("{}: {}", path.display(), e));
                if code == exit_code::SUCCESS {
                    code = e.exit_code();
                }
                notes.push(ParsedNote::failed(&path, &e));
            }
        }
    }
    log::info!("parsed {} notes", notes.len());

    print_notes(&notes, args.field, output, false)?;
    Ok(code)
}

fn print_notes(notes: &[ParsedNote], field: Option<Field>, output: &Output, single: bool) -> Result<()> {
    if let Some(field) = field {
        for note in notes {
            if let Some(text) = note.field(field).as_deref() {
                output.print_raw(text);
            }
        }
        return Ok(());
    }

    match notes {
        [note] if single => output.print(note),
        _ => output.print(&ParseResponse {
            total: notes.len(),
            notes,
        }),
    }
}
