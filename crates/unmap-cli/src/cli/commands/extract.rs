//! `unmap extract` – full network run: fetch bundle + map, rebuild the tree.

use anyhow::Result;
use std::path::Path;
use unmap_core::config::UnmapConfig;
use unmap_core::pipeline;

pub fn run_extract(cfg: &UnmapConfig, out: &Path) -> Result<()> {
    let outcome = pipeline::run_extract(cfg, out)?;
    println!("Bundle:     {}", outcome.bundle_url);
    println!("Source map: {}", outcome.map_url);
    println!(
        "Wrote {} original files to {} ({} skipped, {} failed)",
        outcome.report.written,
        out.display(),
        outcome.report.skipped,
        outcome.report.failed
    );
    Ok(())
}
