//! Resource handler registry module
//!
//! Accumulates registrations and yields an ordered pattern-to-handler map for
//! the surrounding dispatch layer. Pattern matching here is deliberately
//! small: exact match, or prefix match for trailing `/**` patterns.

use crate::error::Error;
use crate::handler::ResourceRequestHandler;
use crate::loader::ResourceLoader;
use crate::registration::ResourceHandlerRegistration;
use std::sync::Arc;

/// Stores registrations in the order they were added.
pub struct ResourceHandlerRegistry {
    loader: Arc<dyn ResourceLoader>,
    registrations: Vec<ResourceHandlerRegistration>,
}

impl ResourceHandlerRegistry {
    pub fn new(loader: Arc<dyn ResourceLoader>) -> Self {
        Self {
            loader,
            registrations: Vec::new(),
        }
    }

    /// Begin a registration for the given path patterns.
    ///
    /// Returns the registration so configuration can continue on it.
    pub fn add_resource_handler(
        &mut self,
        path_patterns: &[&str],
    ) -> Result<&mut ResourceHandlerRegistration, Error> {
        let registration =
            ResourceHandlerRegistration::new(Arc::clone(&self.loader), path_patterns)?;
        self.registrations.push(registration);
        // Just pushed, cannot be empty
        Ok(self.registrations.last_mut().unwrap_or_else(|| unreachable!()))
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Materialize every registration, preserving registration order.
    pub fn into_url_map(self) -> Result<ResourceUrlMap, Error> {
        let mut entries = Vec::with_capacity(self.registrations.len());
        for registration in self.registrations {
            let patterns = registration.path_patterns().to_vec();
            let handler = registration.into_handler()?;
            entries.push((patterns, handler));
        }
        Ok(ResourceUrlMap { entries })
    }
}

/// Ordered pattern-to-handler map; first registered match wins.
pub struct ResourceUrlMap {
    entries: Vec<(Vec<String>, ResourceRequestHandler)>,
}

impl std::fmt::Debug for ResourceUrlMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(patterns, _)| patterns))
            .finish()
    }
}

impl ResourceUrlMap {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[String], &ResourceRequestHandler)> {
        self.entries
            .iter()
            .map(|(patterns, handler)| (patterns.as_slice(), handler))
    }

    /// Find the handler for a request path.
    ///
    /// Returns the matched route prefix (what the resolver strips) along with
    /// the handler.
    pub fn lookup(&self, path: &str) -> Option<(&str, &ResourceRequestHandler)> {
        self.entries.iter().find_map(|(patterns, handler)| {
            patterns
                .iter()
                .find_map(|pattern| match_pattern(pattern, path))
                .map(|prefix| (prefix, handler))
        })
    }
}

/// Match a path against a registered pattern.
///
/// `/resources/**` matches `/resources` and everything under it; any other
/// pattern matches exactly. Returns the route prefix on a match. For exact
/// patterns the prefix is the parent segment, so the resolver keeps the file
/// name as the relative path.
fn match_pattern<'a>(pattern: &'a str, path: &str) -> Option<&'a str> {
    if let Some(prefix) = pattern.strip_suffix("/**") {
        let under_prefix = path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'));
        return (prefix.is_empty() || under_prefix).then_some(prefix);
    }
    (path == pattern).then(|| &pattern[..pattern.rfind('/').unwrap_or(0)])
}
