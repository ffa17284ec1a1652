//! `unmap unpack <map>` – rebuild the tree from a local source-map file.

use anyhow::{Context, Result};
use std::path::Path;
use unmap_core::{decode, materialize, outdir};

pub fn run_unpack(map_path: &Path, out: &Path) -> Result<()> {
    let map_text = std::fs::read_to_string(map_path)
        .with_context(|| format!("read map file {}", map_path.display()))?;
    let decoded = decode::decode(&map_text)?;

    outdir::clean(out)?;
    let report = materialize::materialize(&decoded, out);
    println!(
        "Wrote {} original files to {} ({} skipped, {} failed)",
        report.written,
        out.display(),
        report.skipped,
        report.failed
    );
    Ok(())
}
