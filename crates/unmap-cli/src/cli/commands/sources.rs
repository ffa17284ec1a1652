//! `unmap sources <map>` – list original source identifiers in a local map.

use anyhow::{Context, Result};
use std::path::Path;
use unmap_core::decode;

pub fn run_sources(map_path: &Path, json: bool) -> Result<()> {
    let map_text = std::fs::read_to_string(map_path)
        .with_context(|| format!("read map file {}", map_path.display()))?;
    let decoded = decode::decode(&map_text)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&decoded.sources)?);
    } else {
        for source in &decoded.sources {
            let content = if decoded.contents.contains_key(source) {
                "embedded"
            } else {
                "no content"
            };
            println!("{source}  [{content}]");
        }
        println!(
            "{} sources, {} with embedded content",
            decoded.sources.len(),
            decoded.contents.len()
        );
    }
    Ok(())
}
