//! Bundled (compile-time embedded) resource namespaces.
//!
//! Search-path entries starting with `:` name a *bundled namespace* rather
//! than a filesystem directory: `":/builtin"` routes lookups to an embedded
//! directory registered under the `builtin` prefix. Bundled lookups never
//! touch the filesystem; the bytes were baked in at compile time via
//! `include_dir!`.
//!
//! The crate ships a small `builtin` namespace with fallback art (a generic
//! folder, an open-folder glyph, a link emblem) so an application works
//! before it has registered any namespaces of its own:
//!
//! ```ignore
//! use prismatic_icons::BundledResources;
//! use include_dir::{include_dir, Dir};
//!
//! static ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");
//!
//! let bundled = BundledResources::with_builtin();
//! bundled.register("app", EmbeddedDir::new(&ASSETS));
//! assert!(bundled.get("app", "icons/save.png").is_some());
//! ```

use std::collections::HashMap;

use include_dir::{include_dir, Dir, DirEntry};
use parking_lot::RwLock;

/// Fallback icon art shipped with the crate.
static BUILTIN: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// The namespace the built-in assets are registered under.
pub const BUILTIN_NAMESPACE: &str = "builtin";

/// A wrapper around an embedded directory from `include_dir!`.
#[derive(Clone, Copy)]
pub struct EmbeddedDir {
    dir: &'static Dir<'static>,
}

impl EmbeddedDir {
    /// Create a new embedded directory wrapper.
    pub const fn new(dir: &'static Dir<'static>) -> Self {
        Self { dir }
    }

    /// Get a file's contents by relative path.
    pub fn get_file(&self, path: &str) -> Option<&'static [u8]> {
        self.dir.get_file(path).map(|f| f.contents())
    }

    /// Check whether a file exists at the given relative path.
    pub fn contains(&self, path: &str) -> bool {
        self.dir.get_file(path).is_some()
    }

    /// List all file paths in the embedded directory, recursively.
    pub fn list_files(&self) -> Vec<&'static str> {
        let mut paths = Vec::new();
        collect_files(self.dir, &mut paths);
        paths
    }
}

fn collect_files(dir: &'static Dir<'static>, paths: &mut Vec<&'static str>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::Dir(subdir) => collect_files(subdir, paths),
            DirEntry::File(file) => {
                if let Some(path) = file.path().to_str() {
                    paths.push(path);
                }
            }
        }
    }
}

impl std::fmt::Debug for EmbeddedDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddedDir")
            .field("file_count", &self.list_files().len())
            .finish()
    }
}

/// Registry of bundled-resource namespaces.
///
/// Owned by the icon engine; registration is the application's job at
/// startup. Lookups are by `(namespace, relative-name)` and return the
/// embedded bytes, or `None` when either the namespace or the file is
/// unknown; bundled misses are ordinary search-chain misses, not errors.
pub struct BundledResources {
    namespaces: RwLock<HashMap<String, EmbeddedDir>>,
}

impl BundledResources {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            namespaces: RwLock::new(HashMap::new()),
        }
    }

    /// Create a registry with the crate's built-in fallback namespace.
    pub fn with_builtin() -> Self {
        let registry = Self::new();
        registry.register(BUILTIN_NAMESPACE, EmbeddedDir::new(&BUILTIN));
        registry
    }

    /// Register an embedded directory under a namespace prefix.
    ///
    /// Re-registering a prefix replaces the previous directory.
    pub fn register(&self, namespace: impl Into<String>, dir: EmbeddedDir) {
        self.namespaces.write().insert(namespace.into(), dir);
    }

    /// Remove a namespace. Returns true if it was registered.
    pub fn unregister(&self, namespace: &str) -> bool {
        self.namespaces.write().remove(namespace).is_some()
    }

    /// Check whether a namespace is registered.
    pub fn has_namespace(&self, namespace: &str) -> bool {
        self.namespaces.read().contains_key(namespace)
    }

    /// Look up embedded bytes by namespace and relative name.
    pub fn get(&self, namespace: &str, name: &str) -> Option<&'static [u8]> {
        let namespaces = self.namespaces.read();
        namespaces.get(namespace)?.get_file(name)
    }

    /// Fetch a namespace's directory, reporting an unregistered prefix.
    pub fn require(&self, namespace: &str) -> crate::Result<EmbeddedDir> {
        self.namespaces
            .read()
            .get(namespace)
            .copied()
            .ok_or_else(|| crate::Error::UnknownNamespace(namespace.to_string()))
    }
}

impl Default for BundledResources {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BundledResources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BundledResources")
            .field("namespaces", &self.namespaces.read().keys().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_namespace_registered() {
        let bundled = BundledResources::with_builtin();
        assert!(bundled.has_namespace(BUILTIN_NAMESPACE));
        assert!(bundled.get(BUILTIN_NAMESPACE, "folder.png").is_some());
    }

    #[test]
    fn test_unknown_lookups_are_none() {
        let bundled = BundledResources::with_builtin();
        assert!(bundled.get("nope", "folder.png").is_none());
        assert!(bundled.get(BUILTIN_NAMESPACE, "nope.png").is_none());
    }

    #[test]
    fn test_require_reports_unknown_namespace() {
        let bundled = BundledResources::with_builtin();
        assert!(bundled.require(BUILTIN_NAMESPACE).is_ok());
        assert!(matches!(
            bundled.require("ghost"),
            Err(crate::Error::UnknownNamespace(_))
        ));
    }

    #[test]
    fn test_unregister() {
        let bundled = BundledResources::with_builtin();
        assert!(bundled.unregister(BUILTIN_NAMESPACE));
        assert!(!bundled.has_namespace(BUILTIN_NAMESPACE));
        assert!(!bundled.unregister(BUILTIN_NAMESPACE));
    }

    #[test]
    fn test_builtin_lists_files() {
        let dir = EmbeddedDir::new(&BUILTIN);
        let files = dir.list_files();
        assert!(files.contains(&"open.png"));
        assert!(files.contains(&"emblem-symbolic-link.png"));
    }
}
