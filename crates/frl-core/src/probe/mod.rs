//! HTTP reachability probe for injected resources.
//!
//! Uses the curl crate (libcurl) to GET a candidate URL, discarding the
//! body: a 2xx response means the resource would load, anything else
//! (network failure, bad status) means the candidate is dead. There is
//! deliberately no finer error taxonomy; every failure takes the same
//! fallback path.

mod parse;

use anyhow::{Context, Result};
use std::str;
use std::time::Duration;

/// Probe tuning, typically derived from [`crate::config::FrlConfig`].
#[derive(Debug, Clone)]
pub struct ProbeOptions {
    pub connect_timeout: Duration,
    pub timeout: Duration,
    /// Optional User-Agent header (None = curl default).
    pub user_agent: Option<String>,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(30),
            user_agent: None,
        }
    }
}

impl ProbeOptions {
    pub fn from_config(cfg: &crate::config::FrlConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.request_timeout_secs),
            user_agent: cfg.user_agent.clone(),
        }
    }
}

/// Result of a successful probe: status and the key response header.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    pub status: u32,
    /// `Content-Type` value if present.
    pub content_type: Option<String>,
}

/// Performs a GET and confirms the resource is loadable (2xx).
///
/// Follows redirects; the body is read and discarded. Runs in the current
/// thread; call from `spawn_blocking` if used from async code.
pub fn fetch(url: &str, opts: &ProbeOptions) -> Result<ProbeResult> {
    let mut headers: Vec<String> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.timeout)?;
    if let Some(ua) = &opts.user_agent {
        easy.useragent(ua)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                headers.push(s.trim_end().to_string());
            }
            true
        })?;
        // Body is irrelevant; sink it.
        transfer.write_function(|data| Ok(data.len()))?;
        transfer.perform().context("GET request failed")?;
    }

    let code = easy.response_code().context("no response code")?;
    if !(200..300).contains(&code) {
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }

    Ok(parse::parse_headers(code, &headers))
}
