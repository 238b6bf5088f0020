//! Resource loading module
//!
//! Turns textual location strings into addressable [`Resource`] handles.
//! Loading performs no existence checks; a location is validated only when a
//! handler tries to serve from it.

use std::path::{Path, PathBuf};

/// Handle to an addressable source of static content.
///
/// Keeps the original location string alongside the resolved filesystem root
/// so precedence and diagnostics can refer to what the caller wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    location: String,
    root: PathBuf,
}

impl Resource {
    pub fn new(location: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            location: location.into(),
            root: root.into(),
        }
    }

    /// The location string this resource was resolved from
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Filesystem root this resource serves from
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Capability for turning a location string into a [`Resource`].
///
/// Injected into registrations rather than hard-wired, so registrations can
/// be exercised with stub loaders.
pub trait ResourceLoader: Send + Sync {
    fn get_resource(&self, location: &str) -> Resource;
}

/// Filesystem-backed loader.
///
/// Understands bare paths and `file:`-prefixed locations. Relative locations
/// are resolved against a base directory (the process working directory by
/// default).
#[derive(Debug, Clone)]
pub struct FsResourceLoader {
    base: PathBuf,
}

impl FsResourceLoader {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl Default for FsResourceLoader {
    fn default() -> Self {
        Self::new(".")
    }
}

impl ResourceLoader for FsResourceLoader {
    fn get_resource(&self, location: &str) -> Resource {
        let path = location.strip_prefix("file:").unwrap_or(location);
        let path = Path::new(path);
        let root = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base.join(path)
        };
        Resource::new(location, root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_location_joins_base() {
        let loader = FsResourceLoader::new("/srv/www");
        let resource = loader.get_resource("public/");
        assert_eq!(resource.location(), "public/");
        assert_eq!(resource.root(), Path::new("/srv/www/public/"));
    }

    #[test]
    fn test_absolute_location_ignores_base() {
        let loader = FsResourceLoader::new("/srv/www");
        let resource = loader.get_resource("/var/static");
        assert_eq!(resource.root(), Path::new("/var/static"));
    }

    #[test]
    fn test_file_prefix_is_stripped() {
        let loader = FsResourceLoader::new("/srv/www");
        let resource = loader.get_resource("file:/var/static");
        assert_eq!(resource.location(), "file:/var/static");
        assert_eq!(resource.root(), Path::new("/var/static"));
    }

    #[test]
    fn test_missing_location_still_resolves() {
        // No existence validation at load time
        let loader = FsResourceLoader::default();
        let resource = loader.get_resource("does/not/exist/");
        assert_eq!(resource.root(), Path::new("./does/not/exist/"));
    }
}
