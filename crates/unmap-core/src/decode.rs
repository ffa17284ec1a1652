//! Source-map decoding: which original files does the map reference, and
//! what content does it embed for them.
//!
//! Decoding is best effort, never all or nothing: a mapping entry without a
//! source identifier is expected (generated glue code), and an identifier
//! without embedded content is simply left out of the table. Only an
//! unparseable map document fails the whole decode.

use std::collections::{HashMap, HashSet};

use sourcemap::SourceMap;

use crate::error::ExtractError;

/// Result of decoding one map document.
#[derive(Debug, Default)]
pub struct DecodedSources {
    /// Distinct original-source identifiers, in the order the mapping
    /// entries first reference them.
    pub sources: Vec<String>,
    /// Embedded original content per identifier. Always a subset of
    /// `sources`; identifiers whose content the map does not carry are
    /// absent here.
    pub contents: HashMap<String, String>,
}

/// Parses `map_text` and extracts the original source set and file table.
///
/// Fails only with `MalformedSourceMap`; missing content for any number of
/// individual sources is tolerated.
pub fn decode(map_text: &str) -> Result<DecodedSources, ExtractError> {
    let map = SourceMap::from_slice(map_text.as_bytes())?;

    // Scan every mapping entry in encoding order; dedup keeps first position.
    let mut sources: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for token in map.tokens() {
        if let Some(src) = token.get_source() {
            if seen.insert(src.to_string()) {
                sources.push(src.to_string());
            }
        }
    }

    // The sources array gives each identifier its content index. If the same
    // identifier appears twice in the array, the first index wins.
    let mut index_of: HashMap<&str, u32> = HashMap::new();
    for (idx, src) in map.sources().enumerate() {
        index_of.entry(src).or_insert(idx as u32);
    }

    let mut contents: HashMap<String, String> = HashMap::new();
    for id in &sources {
        let Some(&idx) = index_of.get(id.as_str()) else {
            tracing::debug!(source = %id, "identifier missing from sources array");
            continue;
        };
        match map.get_source_contents(idx) {
            Some(content) => {
                contents.insert(id.clone(), content.to_string());
            }
            None => {
                tracing::debug!(source = %id, "map carries no embedded content");
            }
        }
    }

    Ok(DecodedSources { sources, contents })
}
