//! `frl script` / `frl style` – resolve the first working candidate.

use anyhow::{Context, Result};
use frl_core::config::FrlConfig;
use frl_core::defer::{resolve_scheduler, DeferTier, NativeCapabilities, Scheduler};
use frl_core::dom::{Document, HttpHost, ResourceKind};
use frl_core::loader::Loader;
use frl_core::probe::ProbeOptions;

/// Builds the deferral scheduler for a CLI process. A plain process has no
/// frame source or page lifecycle, so a pinned frame/load tier degrades to
/// immediate execution.
fn scheduler_for_cli(cfg: &FrlConfig) -> Scheduler {
    match cfg.defer_tier {
        None | Some(DeferTier::Immediate) => resolve_scheduler(&NativeCapabilities),
        Some(tier) => {
            tracing::warn!("defer_tier {tier:?} has no driver in a CLI process, using immediate");
            Scheduler::Immediate
        }
    }
}

pub async fn run_load(
    cfg: &FrlConfig,
    kind: ResourceKind,
    urls: Vec<String>,
    emit_document: bool,
) -> Result<()> {
    for url in &urls {
        url::Url::parse(url).with_context(|| format!("invalid candidate URL: {url}"))?;
    }

    let host = HttpHost::new(Document::new(), ProbeOptions::from_config(cfg));
    let mut loader = Loader::new(host, scheduler_for_cli(cfg));

    let loaded = match kind {
        ResourceKind::Script => loader.script(urls).await,
        ResourceKind::Style => loader.style(urls).await,
    }
    .with_context(|| format!("no {} candidate loaded", kind.as_str()))?;

    println!(
        "loaded {} after {} attempt(s)",
        loaded.url, loaded.attempts
    );
    let host = loader.into_host();
    if emit_document {
        print!("{}", host.document().render());
    } else if let Some(tag) = host.document().render_node(loaded.node) {
        println!("{tag}");
    }
    Ok(())
}
