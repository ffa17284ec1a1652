//! Source-map directive extraction from bundle text.
//!
//! Bundlers append a trailing comment naming the map file, e.g.
//! `//# sourceMappingURL=main.abc123.js.map`. If several appear (concatenated
//! bundles), the last occurrence wins, mirroring the entry-point convention.

use url::Url;

use crate::error::ExtractError;

const DIRECTIVE: &str = "sourceMappingURL=";

/// Returns the value of the last sourceMappingURL directive in `bundle`,
/// trimmed to the end of its line.
pub fn find_source_map_directive(bundle: &str) -> Result<&str, ExtractError> {
    let pos = bundle
        .rfind(DIRECTIVE)
        .ok_or(ExtractError::NoSourceMapDirective)?;
    let value = &bundle[pos + DIRECTIVE.len()..];
    let value = value
        .split(['\n', '\r'])
        .next()
        .unwrap_or(value)
        .trim()
        .trim_end_matches("*/")
        .trim();
    if value.is_empty() {
        return Err(ExtractError::NoSourceMapDirective);
    }
    Ok(value)
}

/// Resolves the bundle's map directive against the bundle's own URL.
pub fn resolve_source_map_url(bundle: &str, bundle_url: &str) -> Result<String, ExtractError> {
    let name = find_source_map_directive(bundle)?;
    let base = Url::parse(bundle_url).map_err(|e| ExtractError::BadUrl {
        reference: name.to_string(),
        base: bundle_url.to_string(),
        source: e,
    })?;
    let resolved = base.join(name).map_err(|e| ExtractError::BadUrl {
        reference: name.to_string(),
        base: bundle_url.to_string(),
        source: e,
    })?;
    Ok(resolved.into())
}
