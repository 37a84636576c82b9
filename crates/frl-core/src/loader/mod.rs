//! Fallback loading: one working resource out of an ordered candidate list.
//!
//! The state machine lives in [`run`]; [`Loader`] packages it with a host
//! and a scheduler as an explicit service object, one per document. Script
//! and style loading share the same machine and are fully independent per
//! call.

mod error;
mod run;

pub use error::LoadError;
pub use run::run;

use crate::candidates::CandidateList;
use crate::defer::Scheduler;
use crate::dom::{NodeId, ResourceHost, ResourceKind};

/// Successful terminal result of a load request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded {
    /// The candidate URL that loaded.
    pub url: String,
    /// Handle of the node left in the document.
    pub node: NodeId,
    /// Attempts made, including the successful one.
    pub attempts: u32,
}

/// Resource-loading service for one document.
///
/// Holds the host (document + fetch backend) and the deferral scheduler
/// resolved at startup. Each call owns its candidate list and node; calls
/// do not interact.
#[derive(Debug)]
pub struct Loader<H> {
    host: H,
    scheduler: Scheduler,
}

impl<H: ResourceHost> Loader<H> {
    pub fn new(host: H, scheduler: Scheduler) -> Self {
        Self { host, scheduler }
    }

    /// Load the first working script from `urls` (a single URL or a list).
    pub async fn script(&mut self, urls: impl Into<CandidateList>) -> Result<Loaded, LoadError> {
        run(&mut self.host, &self.scheduler, ResourceKind::Script, urls).await
    }

    /// Load the first working stylesheet from `urls`.
    pub async fn style(&mut self, urls: impl Into<CandidateList>) -> Result<Loaded, LoadError> {
        run(&mut self.host, &self.scheduler, ResourceKind::Style, urls).await
    }

    /// Completes at the next non-render-blocking moment.
    pub async fn defer(&self) {
        self.scheduler.defer().await;
    }

    /// Defer `work` and run it exactly once, returning its result.
    pub async fn run_deferred<T>(&self, work: impl FnOnce() -> T) -> T {
        self.scheduler.run_deferred(work).await
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defer::FrameClock;
    use crate::dom::{AttemptOutcome, Document};
    use std::collections::HashSet;
    use std::future::{ready, Future};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Host whose load/error events are scripted per URL.
    #[derive(Default)]
    struct ScriptedHost {
        doc: Document,
        good: HashSet<String>,
        attached: Vec<String>,
        detach_count: usize,
    }

    impl ScriptedHost {
        fn with_good(urls: &[&str]) -> Self {
            Self {
                good: urls.iter().map(|u| u.to_string()).collect(),
                ..Self::default()
            }
        }

        fn decide(&self, node: NodeId) -> AttemptOutcome {
            let loaded = self
                .doc
                .url_of(node)
                .map(|u| self.good.contains(u))
                .unwrap_or(false);
            if loaded {
                AttemptOutcome::Loaded
            } else {
                AttemptOutcome::Failed
            }
        }
    }

    impl ResourceHost for ScriptedHost {
        fn attach(&mut self, kind: ResourceKind, url: &str) -> NodeId {
            self.attached.push(url.to_string());
            self.doc.insert(kind, url)
        }

        fn outcome(&mut self, node: NodeId) -> impl Future<Output = AttemptOutcome> + Send {
            ready(self.decide(node))
        }

        fn detach(&mut self, node: NodeId) {
            self.doc.remove(node);
            self.detach_count += 1;
        }
    }

    /// ScriptedHost behind a lock, inspectable while a load task runs.
    #[derive(Clone)]
    struct SharedHost(Arc<Mutex<ScriptedHost>>);

    impl ResourceHost for SharedHost {
        fn attach(&mut self, kind: ResourceKind, url: &str) -> NodeId {
            self.0.lock().unwrap().attach(kind, url)
        }

        fn outcome(&mut self, node: NodeId) -> impl Future<Output = AttemptOutcome> + Send {
            let out = self.0.lock().unwrap().decide(node);
            ready(out)
        }

        fn detach(&mut self, node: NodeId) {
            self.0.lock().unwrap().detach(node)
        }
    }

    #[tokio::test]
    async fn first_candidate_loads_with_one_attempt() {
        let host = ScriptedHost::with_good(&["https://good.example/a.js"]);
        let mut loader = Loader::new(host, Scheduler::Immediate);

        let loaded = loader
            .script(["https://good.example/a.js", "https://other.example/a.js"])
            .await
            .unwrap();
        assert_eq!(loaded.url, "https://good.example/a.js");
        assert_eq!(loaded.attempts, 1);

        let host = loader.into_host();
        assert_eq!(host.attached, vec!["https://good.example/a.js"]);
        assert_eq!(host.detach_count, 0);
        assert!(host.doc.contains(loaded.node));
    }

    #[tokio::test]
    async fn falls_back_in_order_until_one_loads() {
        let host = ScriptedHost::with_good(&["https://c.example/x.js"]);
        let mut loader = Loader::new(host, Scheduler::Immediate);

        let loaded = loader
            .script([
                "https://a.example/x.js",
                "https://b.example/x.js",
                "https://c.example/x.js",
            ])
            .await
            .unwrap();
        assert_eq!(loaded.url, "https://c.example/x.js");
        assert_eq!(loaded.attempts, 3);

        let host = loader.into_host();
        assert_eq!(
            host.attached,
            vec![
                "https://a.example/x.js",
                "https://b.example/x.js",
                "https://c.example/x.js"
            ]
        );
        // Both failed nodes were removed; only the winner remains.
        assert_eq!(host.detach_count, 2);
        assert_eq!(host.doc.node_count(), 1);
        assert_eq!(host.doc.script_urls(), vec!["https://c.example/x.js"]);
    }

    #[tokio::test]
    async fn exhaustion_after_every_candidate_fails() {
        let host = ScriptedHost::with_good(&[]);
        let mut loader = Loader::new(host, Scheduler::Immediate);

        let err = loader
            .style([
                "https://a.example/t.css",
                "https://b.example/t.css",
                "https://c.example/t.css",
            ])
            .await
            .unwrap_err();
        assert_eq!(err, LoadError::Exhausted { attempts: 3 });

        let host = loader.into_host();
        assert_eq!(host.attached.len(), 3);
        // The final failed node is left in place; only mid-list failures
        // are detached.
        assert_eq!(host.detach_count, 2);
        assert_eq!(host.doc.style_urls(), vec!["https://c.example/t.css"]);
    }

    #[tokio::test]
    async fn scalar_url_behaves_like_one_element_list() {
        let host = ScriptedHost::with_good(&[]);
        let mut loader = Loader::new(host, Scheduler::Immediate);
        let scalar = loader.style("https://bad.example/only.css").await;

        let host = ScriptedHost::with_good(&[]);
        let mut loader2 = Loader::new(host, Scheduler::Immediate);
        let list = loader2
            .style(vec!["https://bad.example/only.css".to_string()])
            .await;

        assert_eq!(scalar, list);
        assert_eq!(scalar.unwrap_err(), LoadError::Exhausted { attempts: 1 });
        assert_eq!(loader.into_host().attached, loader2.into_host().attached);
    }

    #[tokio::test]
    async fn empty_candidate_list_attempts_nothing() {
        let host = ScriptedHost::with_good(&["https://good.example/a.js"]);
        let mut loader = Loader::new(host, Scheduler::Immediate);

        let err = loader.script(Vec::<String>::new()).await.unwrap_err();
        assert_eq!(err, LoadError::NoCandidates);

        let host = loader.into_host();
        assert!(host.attached.is_empty());
        assert_eq!(host.doc.node_count(), 0);
    }

    #[tokio::test]
    async fn style_and_script_paths_are_independent() {
        // A style exhaustion must not disturb a later script load on the
        // same loader.
        let host = ScriptedHost::with_good(&["https://cdn.example/app.js"]);
        let mut loader = Loader::new(host, Scheduler::Immediate);

        loader.style("https://dead.example/t.css").await.unwrap_err();
        let loaded = loader.script("https://cdn.example/app.js").await.unwrap();
        assert_eq!(loaded.url, "https://cdn.example/app.js");
        assert_eq!(loaded.attempts, 1);
    }

    #[tokio::test]
    async fn first_attempt_and_retries_wait_for_frame_ticks() {
        let clock = FrameClock::new();
        let host = SharedHost(Arc::new(Mutex::new(ScriptedHost::with_good(&[
            "https://b.example/x.js",
        ]))));
        let mut loader = Loader::new(host.clone(), Scheduler::Frame(clock.clone()));

        let task = tokio::spawn(async move {
            loader
                .script(["https://a.example/x.js", "https://b.example/x.js"])
                .await
        });

        // No attempt before the first frame tick.
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(host.0.lock().unwrap().attached.is_empty());

        // First tick releases the first attempt, which fails; the retry
        // must wait for the next tick.
        clock.tick();
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(host.0.lock().unwrap().attached.len(), 1);
        assert!(!task.is_finished());

        clock.tick();
        let loaded = task.await.unwrap().unwrap();
        assert_eq!(loaded.url, "https://b.example/x.js");
        assert_eq!(loaded.attempts, 2);
    }
}
