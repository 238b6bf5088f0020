//! Resource transformation module
//!
//! Post-processing of resolved resource bytes before serving. No transformers
//! are configured by default; handlers apply a configured chain in order.

use hyper::body::Bytes;

/// Strategy that rewrites a resolved resource's bytes before they are served.
pub trait ResourceTransformer: Send + Sync {
    fn transform(&self, request_path: &str, content: Bytes) -> Bytes;
}
