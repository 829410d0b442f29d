//! Minimal named-theme lookup.
//!
//! Resolves a bare icon name (no directory, no extension) to a `.png`
//! file inside `<base>/<theme_name>/…`, searching subdirectories
//! depth-first in sorted order. The first hit wins across base
//! directories in their configured order.

use std::path::{Path, PathBuf};

/// A named icon theme rooted under one or more base directories.
#[derive(Debug, Clone)]
pub struct IconTheme {
    name: String,
    base_dirs: Vec<PathBuf>,
}

impl IconTheme {
    pub fn new(name: impl Into<String>, base_dirs: Vec<PathBuf>) -> Self {
        Self {
            name: name.into(),
            base_dirs,
        }
    }

    /// The theme's directory name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Find `name` (bare, no extension) within the theme.
    pub fn find_icon(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() {
            return None;
        }
        let file_name = format!("{name}.png");
        for base in &self.base_dirs {
            let theme_dir = base.join(&self.name);
            if !theme_dir.is_dir() {
                continue;
            }
            if let Some(found) = find_file(&theme_dir, &file_name) {
                tracing::debug!(
                    name,
                    theme = %self.name,
                    path = %found.display(),
                    "resolved themed icon"
                );
                return Some(found);
            }
        }
        None
    }
}

fn find_file(dir: &Path, file_name: &str) -> Option<PathBuf> {
    let direct = dir.join(file_name);
    if direct.is_file() {
        return Some(direct);
    }

    let mut subdirs: Vec<PathBuf> = std::fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    subdirs.sort();

    for subdir in subdirs {
        if let Some(found) = find_file(&subdir, file_name) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use prismatic_pixmap::{Color, Pixmap};

    fn make_theme(base: &Path, theme: &str, rel: &str, name: &str) {
        let dir = base.join(theme).join(rel);
        std::fs::create_dir_all(&dir).unwrap();
        Pixmap::from_color(4, 4, Color::WHITE)
            .save(dir.join(format!("{name}.png")))
            .unwrap();
    }

    #[test]
    fn test_find_icon_in_nested_theme_dir() {
        let base = tempfile::tempdir().unwrap();
        make_theme(base.path(), "frost", "places/16", "user-home");

        let theme = IconTheme::new("frost", vec![base.path().to_path_buf()]);
        let found = theme.find_icon("user-home").unwrap();
        assert!(found.ends_with("places/16/user-home.png"));
        assert!(theme.find_icon("no-such-icon").is_none());
    }

    #[test]
    fn test_base_dir_order_wins() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        make_theme(first.path(), "frost", "a", "user-home");
        make_theme(second.path(), "frost", "b", "user-home");

        let theme = IconTheme::new(
            "frost",
            vec![first.path().to_path_buf(), second.path().to_path_buf()],
        );
        let found = theme.find_icon("user-home").unwrap();
        assert!(found.starts_with(first.path()));
    }

    #[test]
    fn test_missing_theme_dir_is_skipped() {
        let base = tempfile::tempdir().unwrap();
        let theme = IconTheme::new("absent", vec![base.path().to_path_buf()]);
        assert!(theme.find_icon("anything").is_none());
    }
}
