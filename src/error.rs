//! Registration contract errors
//!
//! Both variants are immediate, local contract violations signaled to the
//! caller; there is no retry or degraded-mode behavior.

use thiserror::Error;

/// Errors raised by resource handler registration
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A registration was created without any URL path pattern
    #[error("at least one path pattern is required for resource handling")]
    NoPathPatterns,

    /// A handler was requested before any resource location was added
    #[error("at least one resource location is required for resource handling")]
    NoLocations,
}
