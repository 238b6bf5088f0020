//! Static resource handler registration library
//!
//! Accumulates path patterns, resource locations, cache policy, and pluggable
//! resolution/transformation chains, then materializes hyper request handlers
//! for serving static content.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use staticserve::{FsResourceLoader, ResourceHandlerRegistration};
//!
//! # fn main() -> Result<(), staticserve::Error> {
//! let loader = Arc::new(FsResourceLoader::default());
//! let mut registration = ResourceHandlerRegistration::new(loader, &["/resources/**"])?;
//! registration
//!     .add_resource_locations(&["public/", "assets/"])
//!     .cache_period(3600);
//! let handler = registration.into_handler()?;
//! assert_eq!(handler.cache_seconds(), Some(3600));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod loader;
pub mod registration;
pub mod registry;
pub mod resolver;
pub mod transform;

// Re-export the main public surface
pub use error::Error;
pub use handler::{RequestContext, ResourceRequestHandler};
pub use loader::{FsResourceLoader, Resource, ResourceLoader};
pub use registration::ResourceHandlerRegistration;
pub use registry::{ResourceHandlerRegistry, ResourceUrlMap};
pub use resolver::{PathResourceResolver, ResourceResolver};
pub use transform::ResourceTransformer;
