//! One end-to-end extraction run: fetch, resolve, decode, materialize.
//!
//! The pipeline is strictly sequential; each stage feeds the next. Raw
//! artifacts (bundle, map, locale) are persisted as soon as they are
//! available, so a later failure never undoes them.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::UnmapConfig;
use crate::decode;
use crate::directive;
use crate::entrypoint;
use crate::fetch;
use crate::materialize::{self, WriteReport};
use crate::outdir;

/// Raw bundle artifact name in the destination root.
pub const BUNDLE_FILE: &str = "minified.js";
/// Raw map artifact name (JSON string encoding of the map text).
pub const MAP_FILE: &str = "sourceMap.js";
/// Locale artifact name.
pub const LOCALE_FILE: &str = "translation.json";

/// What one completed run produced.
#[derive(Debug)]
pub struct ExtractOutcome {
    /// Resolved URL the bundle was fetched from.
    pub bundle_url: String,
    /// Resolved URL the map was fetched from.
    pub map_url: String,
    /// Tally of the materialization batch.
    pub report: WriteReport,
}

/// Runs the whole extraction into `dest_root`.
///
/// Fatal: landing/bundle fetch failures, a missing or unfetchable map, a
/// malformed map. Recoverable: locale fetch failure and any number of
/// per-file write failures.
pub fn run_extract(cfg: &UnmapConfig, dest_root: &Path) -> Result<ExtractOutcome> {
    tracing::info!("cleaning destination {}", dest_root.display());
    outdir::clean(dest_root)?;

    let bundle_url = match &cfg.bundle_url {
        Some(url) => url.clone(),
        None => {
            tracing::info!("fetching landing page {}", cfg.landing_url);
            let html = fetch::fetch_text(&cfg.landing_url, &cfg.user_agent)
                .context("landing page fetch")?;
            let url = entrypoint::resolve_entry_script(&html, &cfg.landing_url)?;
            tracing::info!("entry script resolved to {url}");
            url
        }
    };

    tracing::info!("fetching bundle {bundle_url}");
    let bundle = fetch::fetch_text(&bundle_url, &cfg.user_agent).context("bundle fetch")?;
    let bundle_path = dest_root.join(BUNDLE_FILE);
    fs::write(&bundle_path, &bundle)
        .with_context(|| format!("write {}", bundle_path.display()))?;

    let map_url = directive::resolve_source_map_url(&bundle, &bundle_url)?;
    tracing::info!("fetching source map {map_url}");
    // Recoverable at the fetch layer; still fatal for reconstruction below.
    let map_text = match fetch::fetch_text(&map_url, &cfg.user_agent) {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::warn!("source map fetch failed: {e}");
            None
        }
    };

    let Some(map_text) = map_text else {
        anyhow::bail!("source map yielded no content; bundle kept at {}", bundle_path.display());
    };

    let map_path = dest_root.join(MAP_FILE);
    let encoded = serde_json::to_string(&map_text).context("encode map artifact")?;
    fs::write(&map_path, encoded).with_context(|| format!("write {}", map_path.display()))?;

    if let Some(locale_url) = &cfg.locale_url {
        save_locale(locale_url, &cfg.user_agent, dest_root);
    }

    tracing::info!("decoding source map ({} bytes)", map_text.len());
    let decoded = decode::decode(&map_text)?;
    tracing::info!("map references {} original sources", decoded.sources.len());

    let report = materialize::materialize(&decoded, dest_root);

    Ok(ExtractOutcome {
        bundle_url,
        map_url,
        report,
    })
}

/// Locale is a side artifact: failure is logged and the run continues.
fn save_locale(url: &str, user_agent: &str, dest_root: &Path) {
    tracing::info!("fetching locale {url}");
    match fetch::fetch_json(url, user_agent) {
        Ok(value) => {
            let path = dest_root.join(LOCALE_FILE);
            match serde_json::to_string(&value) {
                Ok(text) => {
                    if let Err(e) = fs::write(&path, text) {
                        tracing::warn!("locale write failed: {e}");
                    }
                }
                Err(e) => tracing::warn!("locale re-encode failed: {e}"),
            }
        }
        Err(e) => tracing::warn!("locale fetch failed: {e}"),
    }
}
