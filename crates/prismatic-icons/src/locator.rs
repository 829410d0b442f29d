//! Search-path model: ordered resource locators.
//!
//! A configured search path is a list of strings; each entry becomes a
//! [`ResourceLocator`]:
//!
//! - `"/usr/share/app/icons"` → [`ResourceLocator::FilesystemDir`]
//! - `":/builtin"` or `":builtin"` → [`ResourceLocator::BundledNamespace`]
//!
//! Empty entries are dropped at parse time. Order is priority order: the
//! first locator that yields a decodable image wins and the rest of the
//! list is never consulted.

use std::path::PathBuf;

use crate::error::Error;

/// One entry of a search path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceLocator {
    /// A filesystem directory to search under.
    FilesystemDir(PathBuf),
    /// A bundled-resource namespace (the part after the `:` marker).
    BundledNamespace(String),
}

impl ResourceLocator {
    /// Parse a single search-path entry. Returns `None` for empty entries.
    pub fn parse(entry: &str) -> Option<Self> {
        let entry = entry.trim();
        if entry.is_empty() {
            return None;
        }
        if let Some(rest) = entry.strip_prefix(':') {
            let namespace = rest.trim_start_matches('/');
            if namespace.is_empty() {
                return None;
            }
            Some(ResourceLocator::BundledNamespace(namespace.to_string()))
        } else {
            Some(ResourceLocator::FilesystemDir(PathBuf::from(entry)))
        }
    }
}

/// An ordered list of resource locators.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPath {
    locators: Vec<ResourceLocator>,
}

impl SearchPath {
    /// An empty search path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configured entry list, dropping empty entries.
    ///
    /// Duplicates are kept; first-match-wins makes them harmless.
    pub fn parse<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            locators: entries
                .into_iter()
                .filter_map(|e| ResourceLocator::parse(e.as_ref()))
                .collect(),
        }
    }

    /// Strict variant of [`SearchPath::parse`] for configuration
    /// diagnostics: malformed entries are reported instead of skipped.
    pub fn parse_strict<I, S>(entries: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut locators = Vec::new();
        for entry in entries {
            let entry = entry.as_ref();
            match ResourceLocator::parse(entry) {
                Some(locator) => locators.push(locator),
                None if entry.trim().is_empty() => {
                    return Err(Error::invalid_search_path(entry, "empty entry"));
                }
                None => {
                    return Err(Error::invalid_search_path(entry, "missing namespace after ':'"));
                }
            }
        }
        Ok(Self { locators })
    }

    /// A copy of `self` with `other`'s locators appended after ours.
    pub fn joined(&self, other: &SearchPath) -> SearchPath {
        let mut locators = self.locators.clone();
        locators.extend(other.locators.iter().cloned());
        SearchPath { locators }
    }

    /// Iterate the locators in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &ResourceLocator> {
        self.locators.iter()
    }

    /// Number of locators.
    pub fn len(&self) -> usize {
        self.locators.len()
    }

    /// True when no locators are configured.
    pub fn is_empty(&self) -> bool {
        self.locators.is_empty()
    }
}
