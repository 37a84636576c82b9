//! Non-render-blocking deferral.
//!
//! This module encapsulates the "run this after the next paint" strategy:
//! a scheduler with three tiers (frame callback, page-load event, immediate)
//! and a capability-probing resolver that picks the best available tier once
//! at startup so that higher layers never probe per call.

mod resolve;
mod scheduler;

pub use resolve::{resolve_scheduler, Capabilities, NativeCapabilities};
pub use scheduler::{DeferTier, FrameClock, PageSignal, Scheduler};
