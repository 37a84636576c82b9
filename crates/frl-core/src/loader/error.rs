//! Terminal load failure type.

use std::fmt;

/// Terminal failure of a load request. Partial failures (a prefix of dead
/// candidates) never surface here; they are recovered by falling back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadError {
    /// The candidate list was empty; nothing was attempted.
    NoCandidates,
    /// Every candidate was attempted, in order, and all failed.
    Exhausted { attempts: u32 },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NoCandidates => write!(f, "no candidate URLs given"),
            LoadError::Exhausted { attempts } => {
                write!(f, "all {} candidate URLs failed to load", attempts)
            }
        }
    }
}

impl std::error::Error for LoadError {}
