//! Resource handler registration module
//!
//! A registration accumulates everything required to create one resource
//! handler: the URL path patterns it answers for, the locations it serves
//! from, and optional cache/resolution/transformation settings. It is created
//! once per registration call, configured through chained calls, and consumed
//! exactly once to materialize a [`ResourceRequestHandler`].

use crate::error::Error;
use crate::handler::ResourceRequestHandler;
use crate::loader::{Resource, ResourceLoader};
use crate::resolver::ResourceResolver;
use crate::transform::ResourceTransformer;
use std::sync::Arc;

pub struct ResourceHandlerRegistration {
    loader: Arc<dyn ResourceLoader>,
    path_patterns: Vec<String>,
    locations: Vec<Resource>,
    cache_period: Option<u32>,
    resolvers: Option<Vec<Box<dyn ResourceResolver>>>,
    transformers: Option<Vec<Box<dyn ResourceTransformer>>>,
}

// Manual impl, the chains hold trait objects
impl std::fmt::Debug for ResourceHandlerRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceHandlerRegistration")
            .field("path_patterns", &self.path_patterns)
            .field("locations", &self.locations)
            .field("cache_period", &self.cache_period)
            .field("resolvers", &self.resolvers.as_ref().map(Vec::len))
            .field("transformers", &self.transformers.as_ref().map(Vec::len))
            .finish_non_exhaustive()
    }
}

impl ResourceHandlerRegistration {
    /// Create a registration for one or more URL path patterns.
    ///
    /// The loader turns location strings into [`Resource`] handles when
    /// locations are added later. Patterns are fixed at construction.
    pub fn new(loader: Arc<dyn ResourceLoader>, path_patterns: &[&str]) -> Result<Self, Error> {
        if path_patterns.is_empty() {
            return Err(Error::NoPathPatterns);
        }
        Ok(Self {
            loader,
            path_patterns: path_patterns.iter().map(ToString::to_string).collect(),
            locations: Vec::new(),
            cache_period: None,
            resolvers: None,
            transformers: None,
        })
    }

    /// Add resource locations from which to serve static content.
    ///
    /// Locations are resolved through the loader as given, without existence
    /// checks, and kept in insertion order; that order is the lookup
    /// precedence at serve time. Repeated calls append.
    pub fn add_resource_locations(&mut self, locations: &[&str]) -> &mut Self {
        for location in locations {
            self.locations.push(self.loader.get_resource(location));
        }
        self
    }

    /// Configure the resolver chain, replacing any previously configured one.
    ///
    /// When never called, the handler falls back to a single
    /// [`PathResourceResolver`](crate::resolver::PathResourceResolver).
    pub fn resource_resolvers(&mut self, resolvers: Vec<Box<dyn ResourceResolver>>) -> &mut Self {
        self.resolvers = Some(resolvers);
        self
    }

    /// Configure the transformer chain, replacing any previously configured
    /// one. No transformers are configured by default.
    pub fn resource_transformers(
        &mut self,
        transformers: Vec<Box<dyn ResourceTransformer>>,
    ) -> &mut Self {
        self.transformers = Some(transformers);
        self
    }

    /// Cache period for served resources, in seconds.
    ///
    /// When never called, no cache headers are sent and clients revalidate
    /// against `Last-Modified` only. Zero sends headers that prevent caching;
    /// a positive value advertises the given max-age.
    pub fn cache_period(&mut self, seconds: u32) -> &mut Self {
        self.cache_period = Some(seconds);
        self
    }

    /// URL path patterns this registration answers for
    pub fn path_patterns(&self) -> &[String] {
        &self.path_patterns
    }

    /// Locations added so far, in insertion order
    pub fn locations(&self) -> &[Resource] {
        &self.locations
    }

    /// Materialize the request handler, consuming the registration.
    ///
    /// Only explicitly configured settings are injected; unset fields keep
    /// the handler's own defaults.
    pub fn into_handler(self) -> Result<ResourceRequestHandler, Error> {
        if self.locations.is_empty() {
            return Err(Error::NoLocations);
        }
        let mut handler = ResourceRequestHandler::default();
        if let Some(resolvers) = self.resolvers {
            handler.set_resolvers(resolvers);
        }
        if let Some(transformers) = self.transformers {
            handler.set_transformers(transformers);
        }
        handler.set_locations(self.locations);
        if let Some(seconds) = self.cache_period {
            handler.set_cache_seconds(Some(seconds));
        }
        Ok(handler)
    }
}
