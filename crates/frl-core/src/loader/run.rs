//! Attempt loop: try candidates head first until one loads or none remain.

use crate::candidates::CandidateList;
use crate::defer::Scheduler;
use crate::dom::{AttemptOutcome, ResourceHost, ResourceKind};

use super::error::LoadError;
use super::Loaded;

/// Step decision after one attempt resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transition {
    /// The attempt loaded; terminate with success.
    Done,
    /// The attempt failed but candidates remain; detach and re-attempt.
    Retry,
    /// The attempt failed and it was the last candidate; terminate.
    Fail,
}

/// Decide the next step from an attempt's outcome and the number of
/// candidates still in the list (including the one just attempted).
pub(crate) fn transition(outcome: AttemptOutcome, remaining: usize) -> Transition {
    match outcome {
        AttemptOutcome::Loaded => Transition::Done,
        AttemptOutcome::Failed if remaining > 1 => Transition::Retry,
        AttemptOutcome::Failed => Transition::Fail,
    }
}

/// Load exactly one working resource from `candidates`, falling back in
/// list order. The first attempt and every retry are deferred through
/// `scheduler` so no attempt blocks rendering.
///
/// Exactly one terminal result per call: the successful node stays in the
/// document; nodes failed mid-list are removed before the next attempt;
/// on exhaustion the final failed node is left in place.
pub async fn run<H: ResourceHost>(
    host: &mut H,
    scheduler: &Scheduler,
    kind: ResourceKind,
    candidates: impl Into<CandidateList>,
) -> Result<Loaded, LoadError> {
    let mut candidates = candidates.into();
    if candidates.is_empty() {
        return Err(LoadError::NoCandidates);
    }

    let mut attempts = 0u32;
    scheduler.defer().await;
    loop {
        let url = candidates
            .head()
            .expect("candidate list is non-empty during an attempt")
            .to_string();
        attempts += 1;
        tracing::debug!("attempt {} for {} {}", attempts, kind.as_str(), url);

        let node = host.attach(kind, &url);
        let outcome = host.outcome(node).await;
        match transition(outcome, candidates.len()) {
            Transition::Done => {
                tracing::info!("{} loaded from {} after {} attempt(s)", kind.as_str(), url, attempts);
                return Ok(Loaded {
                    url,
                    node,
                    attempts,
                });
            }
            Transition::Retry => {
                tracing::debug!("{} candidate failed, falling back: {}", kind.as_str(), url);
                host.detach(node);
                candidates.advance();
                scheduler.defer().await;
            }
            Transition::Fail => {
                tracing::warn!(
                    "{} load exhausted after {} attempt(s), last candidate: {}",
                    kind.as_str(),
                    attempts,
                    url
                );
                return Err(LoadError::Exhausted { attempts });
            }
        }
    }
}
