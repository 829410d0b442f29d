//! Icon resolution, caching, and composition for Prismatic.
//!
//! This crate turns icon names into ready-to-draw pixmaps, featuring:
//!
//! - **Search paths**: Ordered filesystem and bundled-namespace lookup
//! - **Bundled resources**: Compile-time embedded assets behind `:` prefixes
//! - **Themes**: Named icon-theme lookup with path-search fallback
//! - **Caching**: Memoized entries with negative caching and live reload
//! - **Folder icons**: Composed icons for well-known user folders
//!
//! # Example
//!
//! ```ignore
//! use prismatic_icons::prelude::*;
//!
//! let config = IconConfig::with_search_paths(["/opt/app/icons", ":/builtin"]);
//! let mut engine = IconEngine::new(&config);
//!
//! let icon = engine.get("document-save.png");
//! if !icon.is_null() {
//!     canvas.draw(icon.primary_pixmap());
//! }
//!
//! // Later, when the host's path option changes:
//! engine.reload(&new_config);
//! ```

pub mod bundle;
pub mod cache;
pub mod config;
pub mod engine;
pub mod file_icons;
pub mod icon_names;
pub mod locator;
pub mod source;
pub mod theme;

mod error;

pub use error::{Error, Result};

pub use bundle::{BundledResources, EmbeddedDir, BUILTIN_NAMESPACE};
pub use cache::{CachedIcon, IconMode, IconState, IconVariant, ResourceCache, ResourceKey};
pub use config::{IconConfig, PIXMAP_PATH_OPTION};
pub use engine::IconEngine;
pub use file_icons::{FileDescriptor, FileTypeFlags, FolderIconProvider};
pub use locator::{ResourceLocator, SearchPath};
pub use theme::IconTheme;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::bundle::{BundledResources, BUILTIN_NAMESPACE};
    pub use crate::cache::{CachedIcon, IconMode, IconState, IconVariant, ResourceKey};
    pub use crate::config::IconConfig;
    pub use crate::engine::IconEngine;
    pub use crate::file_icons::{FileDescriptor, FileTypeFlags, FolderIconProvider};
    pub use crate::locator::{ResourceLocator, SearchPath};
    pub use crate::{Error, Result};
    pub use prismatic_pixmap::{Color, Corner, Pixmap, Rotation};
}
