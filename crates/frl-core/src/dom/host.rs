//! The host seam: attach a node, await its load/error event, detach it.

use std::future::Future;

use crate::probe::{self, ProbeOptions};

use super::document::{Document, NodeId, ResourceKind};

/// Terminal event of one load attempt, the platform's load/error event
/// collapsed into a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    Loaded,
    Failed,
}

/// Platform seam the fallback state machine drives. The loader owns the
/// retry logic; the host owns document mutation and the actual fetch.
pub trait ResourceHost {
    /// Create and insert a node for `url`. Document mutation happens here.
    fn attach(&mut self, kind: ResourceKind, url: &str) -> NodeId;

    /// Resolves once the node's load or error event fires.
    fn outcome(&mut self, node: NodeId) -> impl Future<Output = AttemptOutcome> + Send;

    /// Remove a failed node from the document before a retry.
    fn detach(&mut self, node: NodeId);
}

/// Host backed by an in-memory [`Document`] and an HTTP reachability
/// probe: a 2xx response is a load event, anything else is an error event.
#[derive(Debug)]
pub struct HttpHost {
    document: Document,
    probe: ProbeOptions,
}

impl HttpHost {
    pub fn new(document: Document, probe: ProbeOptions) -> Self {
        Self { document, probe }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }
}

impl ResourceHost for HttpHost {
    fn attach(&mut self, kind: ResourceKind, url: &str) -> NodeId {
        self.document.insert(kind, url)
    }

    fn outcome(&mut self, node: NodeId) -> impl Future<Output = AttemptOutcome> + Send {
        let url = self.document.url_of(node).map(str::to_string);
        let opts = self.probe.clone();
        async move {
            let Some(url) = url else {
                // Node vanished before the attempt resolved.
                return AttemptOutcome::Failed;
            };
            // Probe runs blocking libcurl; keep it off the async threads.
            let result =
                tokio::task::spawn_blocking(move || probe::fetch(&url, &opts)).await;
            match result {
                Ok(Ok(response)) => {
                    tracing::debug!("probe ok: HTTP {}", response.status);
                    AttemptOutcome::Loaded
                }
                Ok(Err(e)) => {
                    tracing::debug!("probe failed: {e:#}");
                    AttemptOutcome::Failed
                }
                Err(e) => {
                    tracing::warn!("probe task failed: {e}");
                    AttemptOutcome::Failed
                }
            }
        }
    }

    fn detach(&mut self, node: NodeId) {
        self.document.remove(node);
    }
}
