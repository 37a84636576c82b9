//! `frl probe` – one-shot reachability check for a single URL.

use anyhow::{Context, Result};
use frl_core::config::FrlConfig;
use frl_core::probe::{self, ProbeOptions};

pub async fn run_probe(cfg: &FrlConfig, url: &str) -> Result<()> {
    url::Url::parse(url).with_context(|| format!("invalid URL: {url}"))?;

    let opts = ProbeOptions::from_config(cfg);
    let url_owned = url.to_string();
    let result = tokio::task::spawn_blocking(move || probe::fetch(&url_owned, &opts))
        .await
        .context("probe task failed")??;

    println!(
        "HTTP {}  {}  {}",
        result.status,
        result.content_type.as_deref().unwrap_or("-"),
        url
    );
    Ok(())
}
