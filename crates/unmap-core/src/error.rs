//! Error taxonomy for one extraction run.
//!
//! Per-file write failures are deliberately NOT represented here: they are
//! counted in a [`crate::materialize::WriteReport`] and never propagate.

/// Failure of a pipeline stage. The orchestrator decides which variants are
/// fatal for the run (see `pipeline`).
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// Network error, non-2xx status, or unreadable body for one GET.
    #[error("fetch failed for {url}: {reason}")]
    FetchFailed { url: String, reason: String },

    /// The landing page contains no script tag with a src attribute.
    #[error("no script src declaration found in page")]
    NoScriptFound,

    /// The bundle text carries no sourceMappingURL directive.
    #[error("bundle has no sourceMappingURL directive")]
    NoSourceMapDirective,

    /// The map document could not be parsed as a source map.
    #[error("malformed source map: {0}")]
    MalformedSourceMap(#[from] sourcemap::Error),

    /// A directive or script src could not be resolved to an absolute URL.
    #[error("cannot resolve {reference:?} against {base}: {source}")]
    BadUrl {
        reference: String,
        base: String,
        #[source]
        source: url::ParseError,
    },
}
