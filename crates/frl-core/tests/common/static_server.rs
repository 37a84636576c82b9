//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed body under one "good" path and answers 404 for anything
//! else, counting requests so tests can assert how many attempts hit the
//! server. Runs until the process exits.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Clone)]
pub struct StaticServer {
    base_url: String,
    hits: Arc<Mutex<HashMap<String, usize>>>,
    total: Arc<AtomicUsize>,
}

impl StaticServer {
    /// URL for `path` on this server (path must start with '/').
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Requests seen for `path`.
    pub fn hits(&self, path: &str) -> usize {
        self.hits.lock().unwrap().get(path).copied().unwrap_or(0)
    }

    /// Total requests seen.
    pub fn total_hits(&self) -> usize {
        self.total.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread serving `body` under `good_path`;
/// every other path gets 404.
pub fn start(good_path: &str, body: &[u8]) -> StaticServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let hits: Arc<Mutex<HashMap<String, usize>>> = Arc::new(Mutex::new(HashMap::new()));
    let total = Arc::new(AtomicUsize::new(0));

    let good_path = good_path.to_string();
    let body = body.to_vec();
    let server = StaticServer {
        base_url: format!("http://127.0.0.1:{}/", port),
        hits: Arc::clone(&hits),
        total: Arc::clone(&total),
    };

    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let good_path = good_path.clone();
            let body = body.clone();
            let hits = Arc::clone(&hits);
            let total = Arc::clone(&total);
            thread::spawn(move || handle(stream, &good_path, &body, &hits, &total));
        }
    });

    server
}

fn handle(
    mut stream: std::net::TcpStream,
    good_path: &str,
    body: &[u8],
    hits: &Mutex<HashMap<String, usize>>,
    total: &AtomicUsize,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let path = match parse_path(request) {
        Some(p) => p,
        None => return,
    };

    total.fetch_add(1, Ordering::SeqCst);
    *hits.lock().unwrap().entry(path.clone()).or_insert(0) += 1;

    if path == good_path {
        let content_type = if good_path.ends_with(".css") {
            "text/css"
        } else {
            "application/javascript"
        };
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nContent-Type: {}\r\n\r\n",
            body.len(),
            content_type
        );
        let _ = stream.write_all(response.as_bytes());
        let _ = stream.write_all(body);
    } else {
        let _ = stream.write_all(b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\n\r\n");
    }
}

/// Returns the request path from the request line, if any.
fn parse_path(request: &str) -> Option<String> {
    let line = request.lines().next()?;
    let mut parts = line.split_whitespace();
    let _method = parts.next()?;
    parts.next().map(|p| p.to_string())
}
