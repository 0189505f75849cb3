//! Error types and exit codes for notemeta.

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes used by the CLI.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOTE_NOT_FOUND: i32 = 2;
    pub const INVALID_FRONTMATTER: i32 = 5;
    pub const DOCUMENT_WALK_FAILED: i32 = 6;
}

/// Main error type for notemeta operations.
#[derive(Error, Debug)]
pub enum NoteError {
    /// The metadata block was found but its content is not a valid
    /// string-keyed mapping.
    #[error("Invalid frontmatter: {message}")]
    FrontmatterDecode { message: String },

    /// The document tree could not be traversed.
    #[error("Document walk failed: {message}")]
    DocumentWalk { message: String },

    #[error("Note not found: {0}")]
    NoteNotFound(PathBuf),

    #[error("No input provided (pass a path, --glob, or pipe a note on stdin)")]
    NoInput,

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),

    #[error("Glob error: {0}")]
    Glob(#[from] glob::GlobError),
}

impl NoteError {
    pub fn frontmatter_decode(message: impl Into<String>) -> Self {
        NoteError::FrontmatterDecode {
            message: message.into(),
        }
    }

    pub fn document_walk(message: impl Into<String>) -> Self {
        NoteError::DocumentWalk {
            message: message.into(),
        }
    }

    /// Returns the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            NoteError::NoteNotFound(_) => exit_code::NOTE_NOT_FOUND,
            NoteError::FrontmatterDecode { .. } => exit_code::INVALID_FRONTMATTER,
            NoteError::DocumentWalk { .. } => exit_code::DOCUMENT_WALK_FAILED,
            _ => exit_code::GENERAL_ERROR,
        }
    }
}

/// Result type alias for notemeta operations.
pub type Result<T> = std::result::Result<T, NoteError>;
