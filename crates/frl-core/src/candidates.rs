//! Ordered candidate URL queue for one logical resource.
//!
//! The loader consumes candidates into this owned queue instead of mutating
//! a caller-supplied list in place. A single URL and a list of URLs build
//! the same type, so entry points accept either.

use std::collections::VecDeque;

/// Ordered URLs for one logical resource, tried head first until one loads.
#[derive(Debug, Clone, Default)]
pub struct CandidateList {
    urls: VecDeque<String>,
}

impl CandidateList {
    /// The candidate the next attempt will use.
    pub fn head(&self) -> Option<&str> {
        self.urls.front().map(String::as_str)
    }

    /// Drops the failed head candidate. Returns it for logging.
    pub fn advance(&mut self) -> Option<String> {
        self.urls.pop_front()
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

impl From<&str> for CandidateList {
    fn from(url: &str) -> Self {
        Self {
            urls: VecDeque::from([url.to_string()]),
        }
    }
}

impl From<String> for CandidateList {
    fn from(url: String) -> Self {
        Self {
            urls: VecDeque::from([url]),
        }
    }
}

impl From<Vec<String>> for CandidateList {
    fn from(urls: Vec<String>) -> Self {
        Self { urls: urls.into() }
    }
}

impl From<&[&str]> for CandidateList {
    fn from(urls: &[&str]) -> Self {
        urls.iter().map(|u| u.to_string()).collect()
    }
}

impl<const N: usize> From<[&str; N]> for CandidateList {
    fn from(urls: [&str; N]) -> Self {
        urls.as_slice().into()
    }
}

impl FromIterator<String> for CandidateList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            urls: iter.into_iter().collect(),
        }
    }
}
