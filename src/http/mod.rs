//! HTTP protocol layer module
//!
//! Cache control, content type detection, and response building, decoupled
//! from handler configuration.

pub mod cache;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{build_304_response, build_404_response, build_405_response};
