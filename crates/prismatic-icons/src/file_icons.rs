//! Folder icon provider.
//!
//! Maps a classified file-system entry to a composed icon: the base
//! comes from the theme lookup for a fixed table of well-known user
//! folders, then link/hidden/clipped markers are composited on top.
//! Results are cached per `(path, flags)` pair, so the same folder with
//! different markers gets distinct entries.

use std::collections::HashMap;
use std::ops::{BitAnd, BitOr, BitOrAssign};
use std::path::{Path, PathBuf};

use prismatic_pixmap::{Corner, Pixmap};

use crate::cache::{CachedIcon, IconVariant};
use crate::engine::IconEngine;
use crate::icon_names;

// ============================================================================
// FileTypeFlags (bitflags)
// ============================================================================

/// Classification markers for a file-system entry, as bit flags.
///
/// # Example
///
/// ```ignore
/// let flags = FileTypeFlags::FOLDER | FileTypeFlags::LINK;
/// assert!(flags.contains(FileTypeFlags::FOLDER));
/// assert!(!flags.contains(FileTypeFlags::HIDDEN));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FileTypeFlags(u16);

impl FileTypeFlags {
    /// No markers.
    pub const NONE: FileTypeFlags = FileTypeFlags(0);
    /// The entry is a directory.
    pub const FOLDER: FileTypeFlags = FileTypeFlags(1 << 0);
    /// The entry is a symbolic link.
    pub const LINK: FileTypeFlags = FileTypeFlags(1 << 1);
    /// The entry is hidden.
    pub const HIDDEN: FileTypeFlags = FileTypeFlags(1 << 2);
    /// The entry has been cut to the clipboard.
    pub const CLIPPED: FileTypeFlags = FileTypeFlags(1 << 3);
    /// The entry is a plain document.
    pub const DOCUMENT: FileTypeFlags = FileTypeFlags(1 << 4);
    /// The entry is a navigator node (up/root pseudo-entries).
    pub const NAVIGATOR: FileTypeFlags = FileTypeFlags(1 << 5);
    /// The entry is a dangling link.
    pub const BROKEN: FileTypeFlags = FileTypeFlags(1 << 6);
    /// The entry lives on a remote mount.
    pub const REMOTE: FileTypeFlags = FileTypeFlags(1 << 7);

    /// Check if this set contains all of the specified markers.
    pub fn contains(&self, flags: FileTypeFlags) -> bool {
        (self.0 & flags.0) == flags.0
    }

    /// Check if this set is empty.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Add the specified markers.
    pub fn insert(&mut self, flags: FileTypeFlags) {
        self.0 |= flags.0;
    }

    /// Remove the specified markers.
    pub fn remove(&mut self, flags: FileTypeFlags) {
        self.0 &= !flags.0;
    }
}

impl BitOr for FileTypeFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        FileTypeFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for FileTypeFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for FileTypeFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        FileTypeFlags(self.0 & rhs.0)
    }
}

// ============================================================================
// FileDescriptor
// ============================================================================

/// A file-system entry plus its classification markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    pub path: PathBuf,
    pub flags: FileTypeFlags,
}

impl FileDescriptor {
    pub fn new(path: impl Into<PathBuf>, flags: FileTypeFlags) -> Self {
        Self {
            path: path.into(),
            flags,
        }
    }
}

// ============================================================================
// FolderIconProvider
// ============================================================================

/// Link-emblem edge in logical pixels for a given base icon edge.
fn overlay_edge(base_edge: u32) -> u32 {
    match base_edge {
        0..=16 => 10,
        17..=22 => 12,
        23..=48 => 16,
        49..=64 => 22,
        65..=128 => 48,
        _ => 64,
    }
}

/// Composes and caches icons for well-known user folders.
#[derive(Debug)]
pub struct FolderIconProvider {
    cache: HashMap<(PathBuf, FileTypeFlags), CachedIcon>,
    sentinel: CachedIcon,
    folder_table: Vec<(PathBuf, String)>,
}

impl FolderIconProvider {
    /// A provider mapping the platform's well-known user directories.
    pub fn new() -> Self {
        let mut folder_table = Vec::new();
        let mut add = |dir: Option<PathBuf>, name: &str| {
            if let Some(dir) = dir {
                folder_table.push((dir, name.to_string()));
            }
        };
        add(dirs::home_dir(), icon_names::USER_HOME);
        add(dirs::desktop_dir(), icon_names::USER_DESKTOP);
        add(dirs::document_dir(), icon_names::FOLDER_DOCUMENTS);
        add(dirs::download_dir(), icon_names::FOLDER_DOWNLOAD);
        add(dirs::audio_dir(), icon_names::FOLDER_MUSIC);
        add(dirs::picture_dir(), icon_names::FOLDER_PICTURES);
        add(dirs::template_dir(), icon_names::FOLDER_TEMPLATES);
        add(dirs::video_dir(), icon_names::FOLDER_VIDEOS);
        Self::with_folder_table(folder_table)
    }

    /// A provider with an explicit folder table (tests, portable hosts).
    pub fn with_folder_table(folder_table: Vec<(PathBuf, String)>) -> Self {
        Self {
            cache: HashMap::new(),
            sentinel: CachedIcon::null(IconVariant::Theme),
            folder_table,
        }
    }

    /// Map an additional folder to a canonical icon name.
    pub fn register_folder(&mut self, path: impl Into<PathBuf>, icon_name: impl Into<String>) {
        self.folder_table.push((path.into(), icon_name.into()));
    }

    /// The icon for `descriptor`, composed on first ask and cached.
    ///
    /// Non-folder entries and folders outside the table get the shared
    /// null sentinel.
    pub fn icon(&mut self, engine: &mut IconEngine, descriptor: &FileDescriptor) -> &CachedIcon {
        if !descriptor.flags.contains(FileTypeFlags::FOLDER) {
            return &self.sentinel;
        }
        let key = (descriptor.path.clone(), descriptor.flags);
        if !self.cache.contains_key(&key) {
            match self.compose(engine, descriptor) {
                Some(icon) => {
                    self.cache.insert(key.clone(), icon);
                }
                None => return &self.sentinel,
            }
        }
        self.cache.entry(key).or_default()
    }

    /// Drop every cached composition.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    fn classify(&self, path: &Path) -> Option<&str> {
        self.folder_table
            .iter()
            .find(|(dir, _)| dir == path)
            .map(|(_, name)| name.as_str())
    }

    fn compose(&self, engine: &mut IconEngine, descriptor: &FileDescriptor) -> Option<CachedIcon> {
        let name = self.classify(&descriptor.path)?;
        let (mut pixmap, sources) = resolve_named(engine, name)?;

        if descriptor.flags.contains(FileTypeFlags::LINK) {
            if let Some((emblem, _)) = resolve_named(engine, icon_names::EMBLEM_SYMBOLIC_LINK) {
                let edge = overlay_edge(pixmap.width().max(pixmap.height()));
                let emblem = emblem.scaled_to(edge as f32, edge as f32);
                pixmap = pixmap.merge(&emblem, Corner::BottomRight);
            } else {
                tracing::warn!(path = %descriptor.path.display(), "no link emblem available");
            }
        }
        if descriptor.flags.contains(FileTypeFlags::HIDDEN) {
            pixmap = pixmap.transparent(0.6);
        }
        if descriptor.flags.contains(FileTypeFlags::CLIPPED) {
            pixmap = pixmap.desaturate().transparent(0.6);
        }

        Some(CachedIcon::from_resolved(
            pixmap,
            IconVariant::Theme,
            sources,
            false,
        ))
    }
}

impl Default for FolderIconProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Theme lookup for a bare name, falling back to a `<name>.png` path
/// search (which can land in a bundled namespace).
fn resolve_named(engine: &mut IconEngine, name: &str) -> Option<(Pixmap, Vec<String>)> {
    let themed = engine.get_themed(name);
    if !themed.is_null() {
        return Some((themed.primary_pixmap().clone(), themed.source_files().to_vec()));
    }
    let searched = engine.get(&format!("{name}.png"));
    if !searched.is_null() {
        return Some((
            searched.primary_pixmap().clone(),
            searched.source_files().to_vec(),
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconConfig;
    use prismatic_pixmap::Color;

    fn engine_with_theme(base: &Path) -> IconEngine {
        let theme_dir = base.join("frost");
        std::fs::create_dir_all(&theme_dir).unwrap();
        Pixmap::from_color(32, 32, Color::rgb(240, 200, 80))
            .save(theme_dir.join("user-home.png"))
            .unwrap();
        Pixmap::from_color(16, 16, Color::rgb(120, 120, 140))
            .save(theme_dir.join("emblem-symbolic-link.png"))
            .unwrap();
        IconEngine::new(
            &IconConfig::default()
                .with_theme("frost")
                .with_theme_dirs([base]),
        )
    }

    #[test]
    fn test_flag_set_operations() {
        let mut flags = FileTypeFlags::FOLDER | FileTypeFlags::LINK;
        assert!(flags.contains(FileTypeFlags::FOLDER));
        assert!(flags.contains(FileTypeFlags::FOLDER | FileTypeFlags::LINK));
        assert!(!flags.contains(FileTypeFlags::HIDDEN));

        flags.insert(FileTypeFlags::HIDDEN);
        assert!(flags.contains(FileTypeFlags::HIDDEN));
        flags.remove(FileTypeFlags::LINK);
        assert!(!flags.contains(FileTypeFlags::LINK));
        assert!(FileTypeFlags::NONE.is_empty());
    }

    #[test]
    fn test_non_folder_gets_sentinel() {
        let base = tempfile::tempdir().unwrap();
        let mut engine = engine_with_theme(base.path());
        let mut provider = FolderIconProvider::with_folder_table(Vec::new());

        let descriptor = FileDescriptor::new("/tmp/file.txt", FileTypeFlags::DOCUMENT);
        assert!(provider.icon(&mut engine, &descriptor).is_null());
    }

    #[test]
    fn test_unknown_folder_gets_sentinel() {
        let base = tempfile::tempdir().unwrap();
        let mut engine = engine_with_theme(base.path());
        let mut provider = FolderIconProvider::with_folder_table(Vec::new());

        let descriptor = FileDescriptor::new("/tmp/somewhere", FileTypeFlags::FOLDER);
        assert!(provider.icon(&mut engine, &descriptor).is_null());
    }

    #[test]
    fn test_well_known_folder_resolves_through_theme() {
        let base = tempfile::tempdir().unwrap();
        let mut engine = engine_with_theme(base.path());
        let mut provider = FolderIconProvider::with_folder_table(Vec::new());
        provider.register_folder("/home/someone", icon_names::USER_HOME);

        let descriptor = FileDescriptor::new("/home/someone", FileTypeFlags::FOLDER);
        let icon = provider.icon(&mut engine, &descriptor);
        assert!(!icon.is_null());
        assert_eq!(
            icon.primary_pixmap().pixel(0, 0).unwrap(),
            Color::rgb(240, 200, 80)
        );
    }

    #[test]
    fn test_link_marker_merges_emblem_bottom_right() {
        let base = tempfile::tempdir().unwrap();
        let mut engine = engine_with_theme(base.path());
        let mut provider = FolderIconProvider::with_folder_table(Vec::new());
        provider.register_folder("/home/someone", icon_names::USER_HOME);

        let descriptor = FileDescriptor::new(
            "/home/someone",
            FileTypeFlags::FOLDER | FileTypeFlags::LINK,
        );
        let pixmap = provider.icon(&mut engine, &descriptor).primary_pixmap().clone();

        // Base edge 32 takes a 16px emblem in the bottom-right quadrant.
        assert_eq!(pixmap.pixel(0, 0).unwrap(), Color::rgb(240, 200, 80));
        assert_eq!(pixmap.pixel(31, 31).unwrap(), Color::rgb(120, 120, 140));
        assert_eq!(pixmap.pixel(16, 16).unwrap(), Color::rgb(120, 120, 140));
        assert_eq!(pixmap.pixel(15, 15).unwrap(), Color::rgb(240, 200, 80));
    }

    #[test]
    fn test_hidden_marker_scales_alpha() {
        let base = tempfile::tempdir().unwrap();
        let mut engine = engine_with_theme(base.path());
        let mut provider = FolderIconProvider::with_folder_table(Vec::new());
        provider.register_folder("/home/someone", icon_names::USER_HOME);

        let descriptor = FileDescriptor::new(
            "/home/someone",
            FileTypeFlags::FOLDER | FileTypeFlags::HIDDEN,
        );
        let pixel = provider
            .icon(&mut engine, &descriptor)
            .primary_pixmap()
            .pixel(0, 0).unwrap();
        // 255 * (1 - 0.6) rounds to 102.
        assert_eq!(pixel.a, 102);
        assert_eq!((pixel.r, pixel.g, pixel.b), (240, 200, 80));
    }

    #[test]
    fn test_clipped_marker_desaturates_and_fades() {
        let base = tempfile::tempdir().unwrap();
        let mut engine = engine_with_theme(base.path());
        let mut provider = FolderIconProvider::with_folder_table(Vec::new());
        provider.register_folder("/home/someone", icon_names::USER_HOME);

        let descriptor = FileDescriptor::new(
            "/home/someone",
            FileTypeFlags::FOLDER | FileTypeFlags::CLIPPED,
        );
        let pixel = provider
            .icon(&mut engine, &descriptor)
            .primary_pixmap()
            .pixel(0, 0).unwrap();
        assert_eq!(pixel.r, pixel.g);
        assert_eq!(pixel.g, pixel.b);
        assert_eq!(pixel.a, 102);
    }

    #[test]
    fn test_distinct_flag_sets_are_distinct_entries() {
        let base = tempfile::tempdir().unwrap();
        let mut engine = engine_with_theme(base.path());
        let mut provider = FolderIconProvider::with_folder_table(Vec::new());
        provider.register_folder("/home/someone", icon_names::USER_HOME);

        let plain = FileDescriptor::new("/home/someone", FileTypeFlags::FOLDER);
        let hidden = FileDescriptor::new(
            "/home/someone",
            FileTypeFlags::FOLDER | FileTypeFlags::HIDDEN,
        );
        provider.icon(&mut engine, &plain);
        provider.icon(&mut engine, &hidden);
        assert_eq!(provider.cache.len(), 2);

        // Second ask reuses the entry.
        provider.icon(&mut engine, &plain);
        assert_eq!(provider.cache.len(), 2);
    }

    #[test]
    fn test_overlay_edge_steps() {
        assert_eq!(overlay_edge(16), 10);
        assert_eq!(overlay_edge(22), 12);
        assert_eq!(overlay_edge(32), 16);
        assert_eq!(overlay_edge(48), 16);
        assert_eq!(overlay_edge(64), 22);
        assert_eq!(overlay_edge(128), 48);
        assert_eq!(overlay_edge(256), 64);
    }
}
