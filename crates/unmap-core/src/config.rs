use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::fetch::DEFAULT_USER_AGENT;

/// Global configuration loaded from `~/.config/unmap/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnmapConfig {
    /// Landing page whose last script tag names the deployed bundle.
    pub landing_url: String,
    /// Locale/translation resource saved alongside the tree (optional artifact).
    #[serde(default)]
    pub locale_url: Option<String>,
    /// Explicit bundle URL; when set, the landing page is not fetched at all.
    #[serde(default)]
    pub bundle_url: Option<String>,
    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Default for UnmapConfig {
    fn default() -> Self {
        Self {
            landing_url: "https://classcharts.com/mobile/student".to_string(),
            locale_url: Some(
                "https://www.classcharts.com/mobile/locales/en_gb/translation.json".to_string(),
            ),
            bundle_url: None,
            user_agent: default_user_agent(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("unmap")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UnmapConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UnmapConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: UnmapConfig = toml::from_str(&data)?;
    Ok(cfg)
}
