//! Note body extraction.

use crate::types::OptString;

/// Extract the body: everything from `start` to the end of `source`, trimmed.
///
/// An offset past the end of the source yields an absent body.
pub fn extract_body(source: &str, start: usize) -> OptString {
    source
        .get(start..)
        .map(|body| OptString::new(body.trim()))
        .unwrap_or_default()
}
