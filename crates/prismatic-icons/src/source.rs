//! Pixmap resolution over a search path.
//!
//! Walks a [`SearchPath`] in priority order and returns the first entry
//! that yields a decodable, non-empty image. Absolute names bypass the
//! walk and load directly. Resolution failure is not an error; callers
//! treat `None` as "use the null icon".

use std::path::{Path, PathBuf};

use prismatic_pixmap::Pixmap;

use crate::bundle::BundledResources;
use crate::locator::{ResourceLocator, SearchPath};

/// Resolve `name` against `search_path`, first match wins.
///
/// Returns the decoded pixmap together with the list of source files it
/// came from (for diagnostics). `None` means no locator produced a
/// decodable image; the caller decides how to surface that.
pub fn resolve(
    name: &str,
    search_path: &SearchPath,
    bundled: &BundledResources,
    recursive: bool,
) -> Option<(Pixmap, Vec<String>)> {
    if name.is_empty() {
        return None;
    }

    // Absolute names short-circuit the locator chain.
    if Path::new(name).is_absolute() {
        return load_file(Path::new(name)).map(|p| (p, vec![name.to_string()]));
    }

    for locator in search_path.iter() {
        match locator {
            ResourceLocator::BundledNamespace(namespace) => {
                if let Some(bytes) = bundled.get(namespace, name) {
                    match Pixmap::from_bytes(bytes) {
                        Ok(pixmap) if !pixmap.is_null() => {
                            let origin = format!(":/{namespace}/{name}");
                            tracing::debug!(name, origin = %origin, "resolved bundled pixmap");
                            return Some((pixmap, vec![origin]));
                        }
                        Ok(_) => {}
                        Err(err) => {
                            tracing::debug!(name, namespace, %err, "bundled pixmap failed to decode");
                        }
                    }
                }
            }
            ResourceLocator::FilesystemDir(dir) => {
                if let Some(path) = find_in_dir(dir, name, recursive) {
                    if let Some(pixmap) = load_file(&path) {
                        tracing::debug!(name, path = %path.display(), "resolved pixmap from search path");
                        return Some((pixmap, vec![path.display().to_string()]));
                    }
                }
            }
        }
    }

    None
}

fn load_file(path: &Path) -> Option<Pixmap> {
    match Pixmap::from_file(path) {
        Ok(pixmap) if !pixmap.is_null() => Some(pixmap),
        Ok(_) => None,
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "pixmap failed to load");
            None
        }
    }
}

/// Locate `name` under `dir`, exact file-name match, case-sensitive.
///
/// With `recursive` set, subdirectories are visited in sorted order so
/// that resolution is deterministic across platforms.
fn find_in_dir(dir: &Path, name: &str, recursive: bool) -> Option<PathBuf> {
    let direct = dir.join(name);
    if direct.is_file() {
        return Some(direct);
    }
    if !recursive {
        return None;
    }

    let mut subdirs: Vec<PathBuf> = std::fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    subdirs.sort();

    for subdir in subdirs {
        if let Some(found) = find_in_dir(&subdir, name, true) {
            return Some(found);
        }
    }
    None
}
