//! Lead (first paragraph) extraction.

use crate::types::OptString;

/// Extract the body content until the first blank line.
pub fn extract_lead(body: &OptString) -> OptString {
    let Some(body) = body.as_deref() else {
        return OptString::NONE;
    };

    let mut lead = String::new();
    for line in body.lines() {
        if line.trim().is_empty() {
            break;
        }
        lead.push_str(line);
        lead.push('\n');
    }

    OptString::new(lead.trim())
}
