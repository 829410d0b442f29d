//! Icon engine configuration.
//!
//! The surrounding application owns the option store; this module only
//! defines the value object it hands to the engine. The search-path list is
//! read from the option named [`PIXMAP_PATH_OPTION`], an ordered list of
//! strings where each entry is either an absolute directory or a
//! `:`-prefixed bundled namespace (see [`crate::locator::SearchPath`]).
//!
//! When the application's configuration-changed notification fires, re-read
//! the option and call [`crate::IconEngine::reload`] with the fresh config;
//! the engine detects the no-change case itself.

use std::path::PathBuf;

/// Name of the configuration option holding the ordered search-path list.
pub const PIXMAP_PATH_OPTION: &str = "PIXMAP_PATH";

/// Configuration for an [`crate::IconEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconConfig {
    /// Ordered search-path entries, as stored in the option store.
    pub search_paths: Vec<String>,
    /// Desktop icon theme name, if theme lookup is wanted.
    pub theme_name: Option<String>,
    /// Base directories to search for the named theme.
    pub theme_dirs: Vec<PathBuf>,
    /// Whether filesystem entries are searched recursively.
    pub recursive_search: bool,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            search_paths: Vec::new(),
            theme_name: None,
            theme_dirs: default_theme_dirs(),
            recursive_search: false,
        }
    }
}

impl IconConfig {
    /// Create a config with the given search-path entries.
    pub fn with_search_paths<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            search_paths: entries.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set the theme name (builder pattern).
    #[must_use]
    pub fn with_theme(mut self, name: impl Into<String>) -> Self {
        self.theme_name = Some(name.into());
        self
    }

    /// Set the theme base directories (builder pattern).
    #[must_use]
    pub fn with_theme_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.theme_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable recursive filesystem search (builder pattern).
    #[must_use]
    pub fn with_recursive_search(mut self, recursive: bool) -> Self {
        self.recursive_search = recursive;
        self
    }
}

/// Platform-conventional base directories for installed icon themes.
fn default_theme_dirs() -> Vec<PathBuf> {
    let mut dirs_list = Vec::new();
    if let Some(data) = dirs::data_dir() {
        dirs_list.push(data.join("icons"));
    }
    if let Some(home) = dirs::home_dir() {
        dirs_list.push(home.join(".icons"));
    }
    #[cfg(target_os = "linux")]
    {
        dirs_list.push(PathBuf::from("/usr/share/icons"));
        dirs_list.push(PathBuf::from("/usr/local/share/icons"));
    }
    dirs_list
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_search_paths() {
        let config = IconConfig::with_search_paths(["/usr/share/app/icons", ":/builtin"]);
        assert_eq!(config.search_paths.len(), 2);
        assert!(config.theme_name.is_none());
        assert!(!config.recursive_search);
    }

    #[test]
    fn test_builder_chain() {
        let config = IconConfig::with_search_paths(["/a"])
            .with_theme("hicolor")
            .with_theme_dirs(["/usr/share/icons"])
            .with_recursive_search(true);
        assert_eq!(config.theme_name.as_deref(), Some("hicolor"));
        assert_eq!(config.theme_dirs, vec![PathBuf::from("/usr/share/icons")]);
        assert!(config.recursive_search);
    }

    #[test]
    fn test_equality_detects_path_changes() {
        let a = IconConfig::with_search_paths(["/a", "/b"]);
        let b = IconConfig::with_search_paths(["/b", "/a"]);
        assert_ne!(a, b, "order is part of the configuration");
        assert_eq!(a, IconConfig::with_search_paths(["/a", "/b"]));
    }
}
