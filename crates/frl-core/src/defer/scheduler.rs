//! Scheduler tiers: frame callback, page-load event, immediate.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;

/// Which deferral tier a scheduler uses, in order of preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeferTier {
    /// Run before the next repaint (frame tick).
    #[serde(rename = "frame")]
    FrameCallback,
    /// Run once the page's "fully loaded" signal has fired.
    #[serde(rename = "load")]
    LoadEvent,
    /// Run synchronously, right away.
    #[serde(rename = "immediate")]
    Immediate,
}

/// Source of frame ticks. `tick()` releases everything waiting on the
/// next frame; each `defer()` waits for a tick published after it started.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frames: Arc<watch::Sender<u64>>,
}

impl FrameClock {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0u64);
        Self {
            frames: Arc::new(tx),
        }
    }

    /// Publish the next frame, waking all pending deferrals.
    pub fn tick(&self) {
        self.frames.send_modify(|f| *f += 1);
    }

    async fn next_frame(&self) {
        let mut rx = self.frames.subscribe();
        let seen = *rx.borrow();
        // The sender lives inside self, so wait_for only errors if the
        // clock itself is gone; degrade to running immediately.
        let _ = rx.wait_for(|f| *f > seen).await;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Latched page-load signal. Deferrals started after `fire()` complete
/// immediately; the signal never un-fires.
#[derive(Debug, Clone)]
pub struct PageSignal {
    loaded: Arc<watch::Sender<bool>>,
}

impl PageSignal {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self {
            loaded: Arc::new(tx),
        }
    }

    /// Mark the page as fully loaded. Idempotent.
    pub fn fire(&self) {
        self.loaded.send_replace(true);
    }

    pub fn has_fired(&self) -> bool {
        *self.loaded.subscribe().borrow()
    }

    async fn wait(&self) {
        let mut rx = self.loaded.subscribe();
        let _ = rx.wait_for(|loaded| *loaded).await;
    }
}

impl Default for PageSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Deferral scheduler, resolved once at startup (see [`super::resolve_scheduler`]).
///
/// `defer()` is the suspension point the loader awaits before its first
/// attempt and before every retry, so that no attempt blocks rendering.
#[derive(Debug, Clone)]
pub enum Scheduler {
    Frame(FrameClock),
    PageLoad(PageSignal),
    Immediate,
}

impl Scheduler {
    pub fn tier(&self) -> DeferTier {
        match self {
            Scheduler::Frame(_) => DeferTier::FrameCallback,
            Scheduler::PageLoad(_) => DeferTier::LoadEvent,
            Scheduler::Immediate => DeferTier::Immediate,
        }
    }

    /// Completes at the next non-render-blocking moment for this tier.
    pub async fn defer(&self) {
        match self {
            Scheduler::Frame(clock) => clock.next_frame().await,
            Scheduler::PageLoad(signal) => signal.wait().await,
            Scheduler::Immediate => {}
        }
    }

    /// Defers `work` and runs it exactly once, returning its result.
    pub async fn run_deferred<T>(&self, work: impl FnOnce() -> T) -> T {
        self.defer().await;
        work()
    }
}
