//! Configuration types module
//!
//! Declarative form of resource handler registration, for wiring handlers
//! from a TOML file instead of code.

use crate::error::Error;
use crate::registry::ResourceHandlerRegistry;
use serde::Deserialize;

/// Top-level resource handling configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ResourceHandlingConfig {
    #[serde(default)]
    pub handlers: Vec<HandlerConfig>,
}

/// One resource handler registration in declarative form
#[derive(Debug, Deserialize, Clone)]
pub struct HandlerConfig {
    /// URL path patterns, e.g. `"/resources/**"`
    pub patterns: Vec<String>,
    /// Resource locations in lookup precedence order
    pub locations: Vec<String>,
    /// Cache period in seconds; absent means no cache headers
    #[serde(default)]
    pub cache_period: Option<u32>,
}

impl ResourceHandlingConfig {
    /// Parse from a TOML document
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Register every configured handler on the registry, in file order.
    ///
    /// All-or-nothing: entries are validated up front, so a bad entry leaves
    /// the registry untouched.
    pub fn apply(&self, registry: &mut ResourceHandlerRegistry) -> Result<(), Error> {
        if self.handlers.iter().any(|h| h.patterns.is_empty()) {
            return Err(Error::NoPathPatterns);
        }
        for handler in &self.handlers {
            let patterns: Vec<&str> = handler.patterns.iter().map(String::as_str).collect();
            let locations: Vec<&str> = handler.locations.iter().map(String::as_str).collect();
            let registration = registry.add_resource_handler(&patterns)?;
            registration.add_resource_locations(&locations);
            if let Some(seconds) = handler.cache_period {
                registration.cache_period(seconds);
            }
        }
        Ok(())
    }
}
