//! Gist reference parsing

use anyhow::{Result, anyhow};

/// Extract the gist id from a permalink or a bare id
///
/// Accepted formats:
/// - Full URL: `https://gist.github.com/a2a510376da5ffcb93f9`
/// - Owner URL: `https://gist.github.com/user/a2a510376da5ffcb93f9`
/// - Bare id: `a2a510376da5ffcb93f9`
///
/// The reference is split on `/` and the last non-empty segment is returned,
/// so trailing slashes are tolerated. Query strings and fragments are ignored.
///
/// # Errors
/// Returns an error if the reference contains no usable segment, or if the
/// last segment is `.` or `..`
pub fn extract_gist_id(reference: &str) -> Result<String> {
    let path = reference.trim().split(['?', '#']).next().unwrap_or("");

    path.split('/')
        .rev()
        .find(|segment| !segment.is_empty())
        .filter(|segment| !matches!(*segment, "." | ".."))
        .map(str::to_string)
        .ok_or_else(|| anyhow!("Invalid gist reference: '{}'", reference))
}
