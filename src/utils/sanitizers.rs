//! String sanitization utilities for file names and diagnostics

use crate::constants::gist::ACCESS_TOKEN_PARAM;

/// Check whether a remote file name is safe to create in the output directory
///
/// Rejects empty names, path separators, and the `.`/`..` directory entries.
pub fn is_safe_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
        && !name.contains('\0')
}

/// Hide the access token in a URL before printing it
pub fn redact_access_token(url: &str) -> String {
    let marker = format!("{}=", ACCESS_TOKEN_PARAM);
    let Some(start) = url.find(&marker) else {
        return url.to_string();
    };

    let value_start = start + marker.len();
    let value_end = url[value_start..]
        .find(['&', '#'])
        .map(|offset| value_start + offset)
        .unwrap_or(url.len());

    format!("{}***{}", &url[..value_start], &url[value_end..])
}
