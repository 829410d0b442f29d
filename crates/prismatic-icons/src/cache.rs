//! Memoizing icon cache.
//!
//! Entries are keyed by [`ResourceKey`] (name plus requested lookup
//! variant) and own the composed pixmaps for all four mode/state cells.
//! Negative results are cached too, as null entries, so a missing name
//! is resolved (and logged) at most once until the next reload.
//!
//! The cache is single-threaded by design: all mutation goes through
//! `&mut self`, so at most one computation per key can be in flight.

use std::collections::HashMap;
use std::path::Path;

use prismatic_pixmap::Pixmap;

use crate::bundle::BundledResources;
use crate::locator::SearchPath;
use crate::source;
use crate::theme::IconTheme;

// ============================================================================
// Keys and cells
// ============================================================================

/// How a name should be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconVariant {
    /// Walk the configured search path for the name as given.
    PathSearch,
    /// Consult the named theme first, then fall back to the search path.
    Theme,
}

/// Cache identity: the requested name and resolution variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceKey {
    pub name: String,
    pub variant: IconVariant,
}

impl ResourceKey {
    pub fn new(name: impl Into<String>, variant: IconVariant) -> Self {
        Self {
            name: name.into(),
            variant,
        }
    }
}

/// Display mode of an icon cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconMode {
    Normal,
    Disabled,
}

/// Toggle state of an icon cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconState {
    Off,
    On,
}

// ============================================================================
// CachedIcon
// ============================================================================

/// A fully composed cache entry.
///
/// Owns one pixmap per mode/state cell, the resolved source file list
/// (diagnostics only), and the variant it was requested under. A null
/// entry (all cells null, no source files) records a negative result.
#[derive(Debug, Clone)]
pub struct CachedIcon {
    normal_off: Pixmap,
    normal_on: Pixmap,
    disabled_off: Pixmap,
    disabled_on: Pixmap,
    source_files: Vec<String>,
    variant: IconVariant,
    from_bundled: bool,
}

impl CachedIcon {
    /// A negative entry for `variant`.
    pub fn null(variant: IconVariant) -> Self {
        Self {
            normal_off: Pixmap::new(),
            normal_on: Pixmap::new(),
            disabled_off: Pixmap::new(),
            disabled_on: Pixmap::new(),
            source_files: Vec::new(),
            variant,
            from_bundled: false,
        }
    }

    /// Build an entry from a resolved pixmap, deriving the disabled
    /// cells by desaturation.
    pub fn from_resolved(
        pixmap: Pixmap,
        variant: IconVariant,
        source_files: Vec<String>,
        from_bundled: bool,
    ) -> Self {
        let disabled = pixmap.desaturate();
        Self {
            normal_on: pixmap.clone(),
            normal_off: pixmap,
            disabled_on: disabled.clone(),
            disabled_off: disabled,
            source_files,
            variant,
            from_bundled,
        }
    }

    /// Wrap in-memory pixels; no source file, never bundled.
    pub fn from_pixmap(pixmap: Pixmap) -> Self {
        Self::from_resolved(pixmap, IconVariant::PathSearch, Vec::new(), false)
    }

    /// The pixmap for a mode/state cell.
    pub fn pixmap(&self, mode: IconMode, state: IconState) -> &Pixmap {
        match (mode, state) {
            (IconMode::Normal, IconState::Off) => &self.normal_off,
            (IconMode::Normal, IconState::On) => &self.normal_on,
            (IconMode::Disabled, IconState::Off) => &self.disabled_off,
            (IconMode::Disabled, IconState::On) => &self.disabled_on,
        }
    }

    /// `Normal`/`Off`, the cell almost every caller wants.
    pub fn primary_pixmap(&self) -> &Pixmap {
        &self.normal_off
    }

    /// True when this entry records a negative result.
    pub fn is_null(&self) -> bool {
        self.normal_off.is_null()
    }

    /// The files resolution read from, in order.
    pub fn source_files(&self) -> &[String] {
        &self.source_files
    }

    /// True when the pixels came out of an embedded namespace.
    pub fn from_bundled(&self) -> bool {
        self.from_bundled
    }

    pub fn variant(&self) -> IconVariant {
        self.variant
    }
}

impl Default for CachedIcon {
    fn default() -> Self {
        Self::null(IconVariant::PathSearch)
    }
}

// ============================================================================
// ResourceCache
// ============================================================================

/// The memoizing cache plus the resolution context it computes against.
#[derive(Debug)]
pub struct ResourceCache {
    entries: HashMap<ResourceKey, CachedIcon>,
    search_path: SearchPath,
    bundled: BundledResources,
    theme: Option<IconTheme>,
    recursive: bool,
}

impl ResourceCache {
    pub fn new(
        search_path: SearchPath,
        bundled: BundledResources,
        theme: Option<IconTheme>,
        recursive: bool,
    ) -> Self {
        Self {
            entries: HashMap::new(),
            search_path,
            bundled,
            theme,
            recursive,
        }
    }

    /// Look up `key`, computing and inserting on a miss.
    ///
    /// The returned reference is identity-stable: repeated calls with an
    /// equal key return the same entry until `reload` or `clear`.
    pub fn get(&mut self, key: ResourceKey) -> &CachedIcon {
        if !self.entries.contains_key(&key) {
            let icon = self.compute(&key);
            if icon.is_null() {
                // Logged once per name; the null entry suppresses repeats.
                tracing::debug!(name = %key.name, variant = ?key.variant, "icon not found, caching null entry");
            }
            self.entries.insert(key.clone(), icon);
        }
        self.entries.entry(key).or_default()
    }

    /// Swap the search path and recompute every entry in place.
    ///
    /// Returns `false` without side effects when `new_search_path` equals
    /// the current one. Keys are preserved; only pixel content, source
    /// lists, and origin flags change. Bundled-origin entries are
    /// recomputed too, since a path edit can promote a filesystem hit
    /// above the embedded one.
    pub fn reload(&mut self, new_search_path: SearchPath) -> bool {
        if new_search_path == self.search_path {
            return false;
        }
        self.search_path = new_search_path;

        let keys: Vec<ResourceKey> = self.entries.keys().cloned().collect();
        for key in keys {
            let icon = self.compute(&key);
            self.entries.insert(key, icon);
        }
        tracing::debug!(entries = self.entries.len(), "search path changed, cache recomputed");
        true
    }

    /// Drop every entry. The search path is untouched.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn search_path(&self) -> &SearchPath {
        &self.search_path
    }

    pub fn bundled(&self) -> &BundledResources {
        &self.bundled
    }

    pub fn recursive(&self) -> bool {
        self.recursive
    }

    fn compute(&self, key: &ResourceKey) -> CachedIcon {
        match key.variant {
            IconVariant::PathSearch => self.compute_path_search(key),
            IconVariant::Theme => self.compute_theme(key),
        }
    }

    fn compute_path_search(&self, key: &ResourceKey) -> CachedIcon {
        match source::resolve(&key.name, &self.search_path, &self.bundled, self.recursive) {
            Some((pixmap, sources)) => {
                let from_bundled = sources.iter().any(|s| s.starts_with(":/"));
                CachedIcon::from_resolved(pixmap, key.variant, sources, from_bundled)
            }
            None => CachedIcon::null(key.variant),
        }
    }

    fn compute_theme(&self, key: &ResourceKey) -> CachedIcon {
        if let Some(theme) = &self.theme {
            if let Some(path) = theme.find_icon(&key.name) {
                if let Ok(pixmap) = Pixmap::from_file(&path) {
                    if !pixmap.is_null() {
                        return CachedIcon::from_resolved(
                            pixmap,
                            key.variant,
                            vec![path.display().to_string()],
                            false,
                        );
                    }
                }
            }
        }
        // Theme miss falls back to the ordinary path search.
        self.compute_path_search(key)
    }
}

/// Strip directory and extension decoration from a themed icon name.
///
/// `"/tmp/user-home.png"` and `"user-home.png"` both become `"user-home"`.
pub fn bare_icon_name(name: &str) -> &str {
    let base = Path::new(name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(name);
    base
}
