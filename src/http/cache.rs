//! HTTP cache control module
//!
//! `ETag` generation, conditional request handling, and derivation of the
//! `Cache-Control` directive from a registration's cache period.

use chrono::{DateTime, Utc};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::SystemTime;

/// Generate a quoted `ETag` from content bytes, e.g. `"abc123def"`
pub fn generate_etag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    let v = hasher.finish();
    format!("\"{v:x}\"")
}

/// Check if the client's `If-None-Match` header matches the server's `ETag`.
///
/// Supports single tags, comma-separated lists, and the `*` wildcard.
/// Returns true if matched (should return 304).
pub fn check_etag_match(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|client_etag| {
        client_etag
            .split(',')
            .any(|e| e.trim() == etag || e.trim() == "*")
    })
}

/// `Cache-Control` header value for a cache period.
///
/// No period configured means no directive at all (the handler relies on
/// `Last-Modified` only). Zero means explicit `no-cache`; a positive period
/// advertises `max-age`.
pub fn cache_control_value(cache_seconds: Option<u32>) -> Option<String> {
    match cache_seconds {
        None => None,
        Some(0) => Some("no-cache".to_string()),
        Some(max_age) => Some(format!("max-age={max_age}")),
    }
}

/// Format a timestamp as an RFC 7231 IMF-fixdate, e.g.
/// `Sun, 06 Nov 1994 08:49:37 GMT`
pub fn http_date(time: SystemTime) -> String {
    let datetime: DateTime<Utc> = time.into();
    datetime.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Parse an HTTP date header value. Malformed values yield `None`.
pub fn parse_http_date(value: &str) -> Option<SystemTime> {
    DateTime::parse_from_rfc2822(value)
        .ok()
        .map(SystemTime::from)
}

/// Check an `If-Modified-Since` header against a file modification time.
///
/// HTTP dates carry second granularity, so the comparison truncates to whole
/// seconds. Returns true if the client's copy is current (should return 304).
pub fn check_modified_since(if_modified_since: Option<&str>, modified: SystemTime) -> bool {
    let Some(since) = if_modified_since.and_then(parse_http_date) else {
        return false;
    };
    let to_secs = |t: SystemTime| {
        t.duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    };
    to_secs(modified) <= to_secs(since)
}
