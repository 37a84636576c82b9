use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::defer::DeferTier;

/// Global configuration loaded from `~/.config/frl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrlConfig {
    /// Connect timeout for a single probe, in seconds.
    pub connect_timeout_secs: u64,
    /// Total request timeout for a single probe, in seconds.
    pub request_timeout_secs: u64,
    /// Optional User-Agent header sent with probes (None = curl default).
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Optional deferral tier pin: "frame", "load", or "immediate".
    /// If missing, the tier is resolved from host capabilities at startup.
    #[serde(default)]
    pub defer_tier: Option<DeferTier>,
}

impl Default for FrlConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            request_timeout_secs: 30,
            user_agent: None,
            defer_tier: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("frl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FrlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FrlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FrlConfig = toml::from_str(&data)?;
    Ok(cfg)
}
