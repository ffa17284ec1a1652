//! Tree writer: put decoded original files on disk under a destination root.
//!
//! The batch is best effort with per-file fault isolation. One file failing
//! to write is logged and counted, never fatal; the run's exit status does
//! not depend on individual file failures.

use std::fs;
use std::path::Path;

use crate::decode::DecodedSources;
use crate::sanitize::sanitize_identifier;

/// Outcome tally for one materialization batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WriteReport {
    /// Files written successfully.
    pub written: usize,
    /// Identifiers skipped: filtered by the sanitizer or without embedded content.
    pub skipped: usize,
    /// Files whose write failed (path invalid on disk, permissions, ...).
    pub failed: usize,
}

/// Writes every identifier with embedded content under `dest_root`.
///
/// Identifiers are processed in source-set order, so when two identifiers
/// normalize to the same relative path, the later one's content remains
/// (last write wins). Pre-existing directories are not an error; running the
/// same batch twice yields the same tree.
pub fn materialize(decoded: &DecodedSources, dest_root: &Path) -> WriteReport {
    let mut report = WriteReport::default();

    for identifier in &decoded.sources {
        let Some(content) = decoded.contents.get(identifier) else {
            tracing::debug!(source = %identifier, "no content, skipping");
            report.skipped += 1;
            continue;
        };

        let Some(rel_path) = sanitize_identifier(identifier) else {
            tracing::info!(source = %identifier, "skipping filtered identifier");
            report.skipped += 1;
            continue;
        };

        let dest = dest_root.join(&rel_path);
        debug_assert!(dest.starts_with(dest_root));

        match write_one(&dest, content) {
            Ok(()) => {
                tracing::debug!(path = %dest.display(), "wrote original source");
                report.written += 1;
            }
            Err(e) => {
                tracing::warn!(source = %identifier, "file write failed: {e}");
                report.failed += 1;
            }
        }
    }

    tracing::info!(
        written = report.written,
        skipped = report.skipped,
        failed = report.failed,
        "materialized original sources"
    );
    report
}

fn write_one(dest: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, content)
}
