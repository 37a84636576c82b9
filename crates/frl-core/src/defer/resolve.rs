//! Capability probing and one-shot scheduler resolution.

use super::scheduler::{FrameClock, PageSignal, Scheduler};

/// Host scheduling capabilities. Probes return `Ok(None)` when the
/// capability is absent; an `Err` is also treated as absent, so quirky
/// hosts cannot propagate a failure out of resolution.
pub trait Capabilities {
    fn frame_clock(&self) -> anyhow::Result<Option<FrameClock>>;
    fn page_signal(&self) -> anyhow::Result<Option<PageSignal>>;
}

/// Capabilities of a plain native process: no render frames, no page
/// lifecycle, so deferral degrades to immediate execution.
#[derive(Debug, Default)]
pub struct NativeCapabilities;

impl Capabilities for NativeCapabilities {
    fn frame_clock(&self) -> anyhow::Result<Option<FrameClock>> {
        Ok(None)
    }

    fn page_signal(&self) -> anyhow::Result<Option<PageSignal>> {
        Ok(None)
    }
}

/// Resolves the deferral scheduler once, first available tier wins:
/// frame callback, then page-load event, else immediate.
pub fn resolve_scheduler(caps: &dyn Capabilities) -> Scheduler {
    match caps.frame_clock() {
        Ok(Some(clock)) => return Scheduler::Frame(clock),
        Ok(None) => {}
        Err(e) => tracing::debug!("frame clock probe failed, treating as unavailable: {e:#}"),
    }
    match caps.page_signal() {
        Ok(Some(signal)) => return Scheduler::PageLoad(signal),
        Ok(None) => {}
        Err(e) => tracing::debug!("page signal probe failed, treating as unavailable: {e:#}"),
    }
    Scheduler::Immediate
}
