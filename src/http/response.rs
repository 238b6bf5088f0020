//! HTTP response building module
//!
//! Builders for the responses a resource handler emits, decoupled from
//! resolution and configuration.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tracing::warn;

/// Conditional headers carried alongside a 200 response
#[derive(Debug, Default)]
pub struct ResponseHeaders {
    pub etag: String,
    pub last_modified: Option<String>,
    pub cache_control: Option<String>,
}

/// Build a 200 response for resolved resource content.
///
/// HEAD requests get the full header set with an empty body.
pub fn build_resource_response(
    data: Bytes,
    content_type: &str,
    headers: &ResponseHeaders,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { data };

    let mut builder = Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .header("ETag", &headers.etag);

    if let Some(ref last_modified) = headers.last_modified {
        builder = builder.header("Last-Modified", last_modified);
    }
    if let Some(ref cache_control) = headers.cache_control {
        builder = builder.header("Cache-Control", cache_control);
    }

    builder.body(Full::new(body)).unwrap_or_else(|e| {
        log_build_error("200", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build 304 Not Modified response.
///
/// Carries the same validator and cache headers the 200 would, so clients
/// keep revalidating correctly.
pub fn build_304_response(headers: &ResponseHeaders) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(304)
        .header("ETag", &headers.etag);
    if let Some(ref last_modified) = headers.last_modified {
        builder = builder.header("Last-Modified", last_modified);
    }
    if let Some(ref cache_control) = headers.cache_control {
        builder = builder.header("Cache-Control", cache_control);
    }
    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("304", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

fn log_build_error(kind: &str, e: &hyper::http::Error) {
    warn!("Failed to build {kind} response: {e}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_response_headers() {
        let headers = ResponseHeaders {
            etag: "\"abc\"".to_string(),
            last_modified: Some("Sun, 06 Nov 1994 08:49:37 GMT".to_string()),
            cache_control: Some("max-age=3600".to_string()),
        };
        let resp = build_resource_response(Bytes::from_static(b"body"), "text/plain", &headers, false);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["ETag"], "\"abc\"");
        assert_eq!(resp.headers()["Cache-Control"], "max-age=3600");
        assert_eq!(resp.headers()["Last-Modified"], "Sun, 06 Nov 1994 08:49:37 GMT");
        assert_eq!(resp.headers()["Content-Length"], "4");
    }

    #[test]
    fn test_resource_response_without_cache_directive() {
        let headers = ResponseHeaders {
            etag: "\"abc\"".to_string(),
            last_modified: None,
            cache_control: None,
        };
        let resp = build_resource_response(Bytes::from_static(b"body"), "text/plain", &headers, false);
        assert!(!resp.headers().contains_key("Cache-Control"));
        assert!(!resp.headers().contains_key("Last-Modified"));
    }

    #[test]
    fn test_head_response_has_empty_body_and_length() {
        let headers = ResponseHeaders {
            etag: "\"abc\"".to_string(),
            ..ResponseHeaders::default()
        };
        let resp = build_resource_response(Bytes::from_static(b"body"), "text/plain", &headers, true);
        assert_eq!(resp.headers()["Content-Length"], "4");
    }

    #[test]
    fn test_304_response() {
        let headers = ResponseHeaders {
            etag: "\"abc\"".to_string(),
            last_modified: Some("Sun, 06 Nov 1994 08:49:37 GMT".to_string()),
            cache_control: Some("no-cache".to_string()),
        };
        let resp = build_304_response(&headers);
        assert_eq!(resp.status(), 304);
        assert_eq!(resp.headers()["ETag"], "\"abc\"");
        assert_eq!(resp.headers()["Cache-Control"], "no-cache");
        assert_eq!(resp.headers()["Last-Modified"], "Sun, 06 Nov 1994 08:49:37 GMT");

        let bare = ResponseHeaders {
            etag: "\"abc\"".to_string(),
            ..ResponseHeaders::default()
        };
        let resp = build_304_response(&bare);
        assert!(!resp.headers().contains_key("Cache-Control"));
        assert!(!resp.headers().contains_key("Last-Modified"));
    }

    #[test]
    fn test_error_responses() {
        assert_eq!(build_404_response().status(), 404);
        assert_eq!(build_405_response().status(), 405);
    }
}
