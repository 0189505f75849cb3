//! Shared types for notemeta.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A string that is either absent or non-empty.
///
/// Every constructor collapses the empty string to absent, so there is no
/// way to tell "empty" and "missing" apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub struct OptString(Option<String>);

impl OptString {
    /// Absent value.
    pub const NONE: OptString = OptString(None);

    /// Create a value, normalizing the empty string to absent.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            Self(None)
        } else {
            Self(Some(value))
        }
    }

    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    pub fn is_some(&self) -> bool {
        self.0.is_some()
    }

    /// Borrow the inner string, if present.
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn into_inner(self) -> Option<String> {
        self.0
    }

    /// The inner string, or `""` when absent.
    pub fn as_str(&self) -> &str {
        self.0.as_deref().unwrap_or("")
    }
}

impl From<Option<String>> for OptString {
    fn from(value: Option<String>) -> Self {
        value.map(OptString::new).unwrap_or_default()
    }
}

impl From<OptString> for Option<String> {
    fn from(value: OptString) -> Self {
        value.0
    }
}

impl From<&str> for OptString {
    fn from(value: &str) -> Self {
        OptString::new(value)
    }
}

impl From<String> for OptString {
    fn from(value: String) -> Self {
        OptString::new(value)
    }
}

impl fmt::Display for OptString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata extracted from a single note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    /// Title from the frontmatter, or from the most significant heading.
    pub title: OptString,

    /// Everything after the title (or the frontmatter), trimmed.
    pub body: OptString,

    /// The first paragraph of the body.
    pub lead: OptString,
}
