//! Resource request handler module
//!
//! The handler a registration materializes: serves GET/HEAD requests for
//! static content by resolving the request path against its locations,
//! applying transformers, and emitting conditional and cache headers.

use crate::http::response::{self, ResponseHeaders};
use crate::http::{cache, mime};
use crate::loader::Resource;
use crate::resolver::{self, PathResourceResolver, ResourceResolver};
use crate::transform::ResourceTransformer;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;
use tracing::{debug, warn};

/// Request context encapsulating what the handler needs from a request
pub struct RequestContext<'a> {
    /// Request path as received, e.g. `/resources/css/app.css`
    pub path: &'a str,
    /// Route prefix the dispatch layer matched, stripped before resolution
    pub route_prefix: &'a str,
    /// HEAD requests get headers without a body
    pub is_head: bool,
    pub if_none_match: Option<String>,
    pub if_modified_since: Option<String>,
}

impl<'a> RequestContext<'a> {
    /// Context for a GET request with no conditional headers
    pub fn get(path: &'a str, route_prefix: &'a str) -> Self {
        Self {
            path,
            route_prefix,
            is_head: false,
            if_none_match: None,
            if_modified_since: None,
        }
    }
}

/// Serves static resources from an ordered set of locations.
///
/// Defaults: a single [`PathResourceResolver`], no transformers, no cache
/// period. Registrations overwrite only what was explicitly configured.
pub struct ResourceRequestHandler {
    locations: Vec<Resource>,
    resolvers: Vec<Box<dyn ResourceResolver>>,
    transformers: Vec<Box<dyn ResourceTransformer>>,
    cache_seconds: Option<u32>,
}

// Manual impl, the chains hold trait objects
impl std::fmt::Debug for ResourceRequestHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceRequestHandler")
            .field("locations", &self.locations)
            .field("resolvers", &self.resolvers.len())
            .field("transformers", &self.transformers.len())
            .field("cache_seconds", &self.cache_seconds)
            .finish()
    }
}

impl Default for ResourceRequestHandler {
    fn default() -> Self {
        Self {
            locations: Vec::new(),
            resolvers: vec![Box::new(PathResourceResolver::default())],
            transformers: Vec::new(),
            cache_seconds: None,
        }
    }
}

impl ResourceRequestHandler {
    pub fn set_locations(&mut self, locations: Vec<Resource>) {
        self.locations = locations;
    }

    pub fn set_resolvers(&mut self, resolvers: Vec<Box<dyn ResourceResolver>>) {
        self.resolvers = resolvers;
    }

    pub fn set_transformers(&mut self, transformers: Vec<Box<dyn ResourceTransformer>>) {
        self.transformers = transformers;
    }

    pub fn set_cache_seconds(&mut self, seconds: Option<u32>) {
        self.cache_seconds = seconds;
    }

    /// Locations in lookup precedence order
    pub fn locations(&self) -> &[Resource] {
        &self.locations
    }

    pub fn resolvers(&self) -> &[Box<dyn ResourceResolver>] {
        &self.resolvers
    }

    pub fn transformers(&self) -> &[Box<dyn ResourceTransformer>] {
        &self.transformers
    }

    pub fn cache_seconds(&self) -> Option<u32> {
        self.cache_seconds
    }

    /// `Cache-Control` value this handler attaches to responses, if any
    pub fn cache_control(&self) -> Option<String> {
        cache::cache_control_value(self.cache_seconds)
    }

    /// Handle a GET/HEAD request for a static resource.
    ///
    /// Resolvers run in configured order; the first hit is served. Misses and
    /// read failures both surface as 404 to the client.
    pub async fn handle(&self, ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
        let Some(file_path) = self.resolve(ctx) else {
            debug!("No resource for {}", ctx.path);
            return response::build_404_response();
        };

        let content = match fs::read(&file_path).await {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read file '{}': {}", file_path.display(), e);
                return response::build_404_response();
            }
        };

        let content = self.apply_transformers(ctx.path, Bytes::from(content));
        self.build_response(ctx, &file_path, content).await
    }

    fn resolve(&self, ctx: &RequestContext<'_>) -> Option<std::path::PathBuf> {
        self.resolvers
            .iter()
            .find_map(|r| r.resolve(ctx.path, ctx.route_prefix, &self.locations))
    }

    fn apply_transformers(&self, request_path: &str, content: Bytes) -> Bytes {
        self.transformers
            .iter()
            .fold(content, |content, t| t.transform(request_path, content))
    }

    async fn build_response(
        &self,
        ctx: &RequestContext<'_>,
        file_path: &Path,
        content: Bytes,
    ) -> Response<Full<Bytes>> {
        let modified = fs::metadata(file_path)
            .await
            .ok()
            .and_then(|m| m.modified().ok());
        let headers = ResponseHeaders {
            etag: cache::generate_etag(&content),
            last_modified: modified.map(cache::http_date),
            cache_control: self.cache_control(),
        };

        if cache::check_etag_match(ctx.if_none_match.as_deref(), &headers.etag) {
            return response::build_304_response(&headers);
        }

        // Last-modified revalidation, second granularity. RFC 7232: evaluated
        // only when the request carries no If-None-Match.
        if ctx.if_none_match.is_none() {
            if let Some(modified) = modified {
                if cache::check_modified_since(ctx.if_modified_since.as_deref(), modified) {
                    return response::build_304_response(&headers);
                }
            }
        }

        let content_type = mime::content_type(resolver::extension(file_path));
        response::build_resource_response(content, content_type, &headers, ctx.is_head)
    }
}
