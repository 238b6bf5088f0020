//! Resource resolution module
//!
//! Maps an incoming request path to a concrete file under one of the
//! configured resource locations.

use crate::loader::Resource;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Strategy that maps a request path to a concrete resource file.
///
/// A handler runs its resolvers in configured order; the first one to produce
/// a hit wins. Locations are tried in insertion order, which makes insertion
/// order the lookup precedence.
pub trait ResourceResolver: Send + Sync {
    /// Resolve `request_path` (as received, including the matched route
    /// prefix) against the ordered `locations`.
    fn resolve(&self, request_path: &str, route_prefix: &str, locations: &[Resource])
        -> Option<PathBuf>;
}

/// Default resolver: joins the request path onto each location root.
///
/// Directory requests fall back to index files. Paths escaping a location
/// root are rejected after canonicalization.
#[derive(Debug, Clone)]
pub struct PathResourceResolver {
    index_files: Vec<String>,
}

impl PathResourceResolver {
    pub fn new(index_files: Vec<String>) -> Self {
        Self { index_files }
    }
}

impl Default for PathResourceResolver {
    fn default() -> Self {
        Self::new(vec!["index.html".to_string(), "index.htm".to_string()])
    }
}

impl ResourceResolver for PathResourceResolver {
    fn resolve(
        &self,
        request_path: &str,
        route_prefix: &str,
        locations: &[Resource],
    ) -> Option<PathBuf> {
        locations
            .iter()
            .find_map(|location| self.resolve_in_location(request_path, route_prefix, location))
    }
}

impl PathResourceResolver {
    fn resolve_in_location(
        &self,
        request_path: &str,
        route_prefix: &str,
        location: &Resource,
    ) -> Option<PathBuf> {
        // Remove leading slash and prevent directory traversal
        let clean_path = request_path.trim_start_matches('/').replace("..", "");

        // Remove route prefix from path
        let prefix_clean = route_prefix.trim_matches('/');
        let relative_path = if prefix_clean.is_empty() {
            clean_path.as_str()
        } else {
            clean_path
                .strip_prefix(&format!("{prefix_clean}/"))
                .or_else(|| {
                    // The prefix itself, with no trailing segment
                    (clean_path == prefix_clean).then_some("")
                })
                .unwrap_or(&clean_path)
        };

        let mut file_path = location.root().join(relative_path);

        // An unreadable location root is skipped, not fatal; later locations
        // may still satisfy the request.
        let Ok(root_canonical) = location.root().canonicalize() else {
            return None;
        };

        // Directory request, try index files
        if file_path.is_dir() || relative_path.is_empty() || relative_path.ends_with('/') {
            for index_file in &self.index_files {
                let index_path = file_path.join(index_file);
                if index_path.is_file() {
                    file_path = index_path;
                    break;
                }
            }
        }

        // File not found here is common, the next location gets a chance
        let Ok(file_canonical) = file_path.canonicalize() else {
            return None;
        };
        if !file_canonical.starts_with(&root_canonical) {
            warn!(
                "Path traversal attempt blocked: {} -> {}",
                request_path,
                file_canonical.display()
            );
            return None;
        }
        if !file_canonical.is_file() {
            return None;
        }

        Some(file_canonical)
    }
}

/// File extension of a resolved path, for content type lookup
pub(crate) fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|e| e.to_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::Resource;
    use std::fs;
    use tempfile::TempDir;

    fn location(dir: &TempDir) -> Resource {
        Resource::new(dir.path().to_string_lossy(), dir.path())
    }

    #[test]
    fn test_resolves_file_under_location() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("app.css"), "body {}").unwrap();

        let resolver = PathResourceResolver::default();
        let found = resolver.resolve("/static/app.css", "/static", &[location(&dir)]);
        assert_eq!(found, Some(dir.path().join("app.css").canonicalize().unwrap()));
    }

    #[test]
    fn test_first_location_takes_precedence() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        fs::write(first.path().join("a.txt"), "first").unwrap();
        fs::write(second.path().join("a.txt"), "second").unwrap();

        let resolver = PathResourceResolver::default();
        let found = resolver
            .resolve("/a.txt", "", &[location(&first), location(&second)])
            .unwrap();
        assert!(found.starts_with(first.path().canonicalize().unwrap()));
    }

    #[test]
    fn test_falls_through_to_later_location() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        fs::write(second.path().join("only.txt"), "second").unwrap();

        let resolver = PathResourceResolver::default();
        let found = resolver
            .resolve("/only.txt", "", &[location(&first), location(&second)])
            .unwrap();
        assert!(found.starts_with(second.path().canonicalize().unwrap()));
    }

    #[test]
    fn test_index_file_for_directory_request() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.html"), "<html></html>").unwrap();

        let resolver = PathResourceResolver::default();
        let found = resolver.resolve("/static/", "/static", &[location(&dir)]).unwrap();
        assert!(found.ends_with("index.html"));
    }

    #[test]
    fn test_traversal_is_rejected() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("public")).unwrap();
        fs::write(dir.path().join("secret.txt"), "secret").unwrap();

        let public = Resource::new("public/", dir.path().join("public"));
        let resolver = PathResourceResolver::default();
        assert_eq!(resolver.resolve("/../secret.txt", "", &[public]), None);
    }

    #[test]
    fn test_missing_location_is_skipped() {
        let resolver = PathResourceResolver::default();
        let gone = Resource::new("gone/", "/no/such/dir");
        assert_eq!(resolver.resolve("/a.txt", "", &[gone]), None);
    }
}
