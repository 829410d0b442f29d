//! Icon lookup facade.
//!
//! [`IconEngine`] is an explicit context object: construct one from an
//! [`IconConfig`] at the composition root and pass it down by reference.
//! There is no process-wide instance.
//!
//! # Example
//!
//! ```ignore
//! let config = IconConfig::with_search_paths(["/opt/app/icons"]);
//! let mut engine = IconEngine::new(&config);
//! let icon = engine.get("document-save.png");
//! if !icon.is_null() {
//!     draw(icon.primary_pixmap());
//! }
//! ```

use prismatic_pixmap::Pixmap;

use crate::bundle::BundledResources;
use crate::cache::{bare_icon_name, CachedIcon, IconVariant, ResourceCache, ResourceKey};
use crate::config::IconConfig;
use crate::locator::SearchPath;
use crate::theme::IconTheme;

/// The lookup facade over cache, search path, theme, and bundled store.
#[derive(Debug)]
pub struct IconEngine {
    cache: ResourceCache,
}

impl IconEngine {
    /// Build an engine from a configuration snapshot.
    ///
    /// The compile-time built-in namespace is always registered, so
    /// `:/builtin` entries in the search path work out of the box.
    pub fn new(config: &IconConfig) -> Self {
        let search_path = SearchPath::parse(&config.search_paths);
        let theme = config
            .theme_name
            .as_ref()
            .map(|name| IconTheme::new(name.clone(), config.theme_dirs.clone()));
        Self {
            cache: ResourceCache::new(
                search_path,
                BundledResources::with_builtin(),
                theme,
                config.recursive_search,
            ),
        }
    }

    /// Look up `name` along the search path, memoized.
    pub fn get(&mut self, name: &str) -> &CachedIcon {
        self.cache.get(ResourceKey::new(name, IconVariant::PathSearch))
    }

    /// Look up `name` through the configured theme, memoized.
    ///
    /// Directory and extension decoration is stripped first, so
    /// `"/x/user-home.png"` and `"user-home"` hit the same entry. A theme
    /// miss falls back to the ordinary path search.
    pub fn get_themed(&mut self, name: &str) -> &CachedIcon {
        let bare = bare_icon_name(name).to_string();
        self.cache.get(ResourceKey::new(bare, IconVariant::Theme))
    }

    /// Resolve `name` with `extra_paths` tried ahead of the configured
    /// search path. Never touches the cache; always recomputed.
    pub fn get_uncached(&self, name: &str, extra_paths: &[String]) -> CachedIcon {
        let combined = SearchPath::parse(extra_paths).joined(self.cache.search_path());
        match crate::source::resolve(name, &combined, self.cache.bundled(), self.cache.recursive()) {
            Some((pixmap, sources)) => {
                let from_bundled = sources.iter().any(|s| s.starts_with(":/"));
                CachedIcon::from_resolved(pixmap, IconVariant::PathSearch, sources, from_bundled)
            }
            None => CachedIcon::null(IconVariant::PathSearch),
        }
    }

    /// Wrap already-loaded pixels as an icon, deriving the disabled
    /// cells. Never cached.
    pub fn from_pixmap(&self, pixmap: Pixmap) -> CachedIcon {
        CachedIcon::from_pixmap(pixmap)
    }

    /// Apply a (possibly changed) search-path configuration.
    ///
    /// Returns `false` and does nothing when the path list is unchanged.
    /// Otherwise every cached entry is recomputed in place against the
    /// new list; references obtained before the call stay keyed the same.
    pub fn reload(&mut self, config: &IconConfig) -> bool {
        self.cache.reload(SearchPath::parse(&config.search_paths))
    }

    /// Strictly check a configuration against this engine.
    ///
    /// Reports malformed search-path entries and bundled prefixes that
    /// no registered namespace backs. `new` and `reload` are lenient
    /// (bad entries are skipped); this is the diagnostic companion for
    /// hosts that want to surface configuration mistakes.
    pub fn validate(&self, config: &IconConfig) -> crate::Result<()> {
        let path = SearchPath::parse_strict(&config.search_paths)?;
        for locator in path.iter() {
            if let crate::locator::ResourceLocator::BundledNamespace(namespace) = locator {
                self.cache.bundled().require(namespace)?;
            }
        }
        Ok(())
    }

    /// Strictly load a caller-supplied file as an icon.
    ///
    /// Unlike the lookup methods this propagates failures, for hosts
    /// where a user picked the file and deserves a message.
    pub fn load_file(&self, path: &std::path::Path) -> crate::Result<CachedIcon> {
        let bytes = std::fs::read(path).map_err(|err| crate::Error::io(path, err))?;
        let pixmap = Pixmap::from_bytes(&bytes)
            .map_err(|err| crate::Error::decode(path.display().to_string(), err.to_string()))?;
        Ok(CachedIcon::from_pixmap(pixmap))
    }

    /// Drop every cached entry.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Number of memoized entries.
    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }

    /// The bundled-resource registry, for registering extra namespaces.
    pub fn bundled(&self) -> &BundledResources {
        self.cache.bundled()
    }
}
