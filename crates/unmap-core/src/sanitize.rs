//! Identifier-to-path normalization for the reconstructed tree.
//!
//! Source identifiers come from a third-party document and cannot be trusted
//! as filesystem paths. The rules here guarantee the result is always a
//! relative path with no traversal segments, or no path at all.

use std::path::PathBuf;

/// Synthetic scheme some bundlers use to mark in-memory module origins.
const SYNTHETIC_SCHEME: &str = "webpack://";

/// Marker for third-party dependency directories.
const DEP_MARKER: &str = "node_modules";

/// Marker for bundler-internal artifacts (e.g. `webpack/bootstrap`).
const BUNDLER_MARKER: &str = "webpack";

const NAME_MAX: usize = 255;

/// Normalizes an original-source identifier into a safe relative path.
///
/// Returns `None` when the identifier should not be materialized at all:
/// third-party dependency paths, bundler-internal artifacts, and identifiers
/// with nothing left after cleanup.
///
/// - the `webpack://` scheme prefix is stripped
/// - `.` and `..` segments are dropped, never honored
/// - a leading separator (absolute path) is ignored
/// - NUL, control characters, and backslashes inside a segment become `_`
pub fn sanitize_identifier(identifier: &str) -> Option<PathBuf> {
    let stripped = identifier.strip_prefix(SYNTHETIC_SCHEME).unwrap_or(identifier);

    if stripped.contains(DEP_MARKER) || stripped.contains(BUNDLER_MARKER) {
        return None;
    }

    let mut path = PathBuf::new();
    for segment in stripped.split('/') {
        if segment.is_empty() || segment == "." || segment == ".." {
            continue;
        }
        let cleaned = clean_segment(segment);
        if cleaned.is_empty() {
            continue;
        }
        path.push(cleaned);
    }

    if path.as_os_str().is_empty() {
        None
    } else {
        Some(path)
    }
}

/// Cleans a single path segment for safe use on Linux.
fn clean_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for c in segment.chars() {
        if c == '\0' || c == '\\' || c.is_control() {
            out.push('_');
        } else {
            out.push(c);
        }
    }

    let trimmed = out.trim_matches(|c| c == ' ' || c == '.');
    if trimmed.len() > NAME_MAX {
        let mut take = NAME_MAX;
        while take > 0 && !trimmed.is_char_boundary(take) {
            take -= 1;
        }
        trimmed[..take].to_string()
    } else {
        trimmed.to_string()
    }
}
