//! Document model and the host seam the loader drives.
//!
//! The loader only depends on the [`ResourceHost`] trait and does not know
//! how a node actually gets fetched; [`HttpHost`] is the concrete host that
//! backs load/error events with an HTTP probe.

mod document;
mod host;

pub use document::{Document, NodeId, ResourceKind};
pub use host::{AttemptOutcome, HttpHost, ResourceHost};
