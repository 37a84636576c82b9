//! Parse HTTP response header lines into ProbeResult.

use super::ProbeResult;

/// Parse collected header lines into ProbeResult.
pub(crate) fn parse_headers(status: u32, lines: &[String]) -> ProbeResult {
    let mut content_type = None;

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-type") {
                content_type = Some(value.trim().to_string());
            }
        }
    }

    ProbeResult {
        status,
        content_type,
    }
}
