//! CPU-side pixmap buffer and compositing transforms for Prismatic.
//!
//! This crate provides the pixel-level half of the Prismatic icon system:
//!
//! - [`Pixmap`]: an RGBA8 buffer with a device-pixel-ratio, loadable from
//!   files or memory and encodable back to PNG
//! - Compositing transforms ([`Pixmap::desaturate`], [`Pixmap::transparent`],
//!   [`Pixmap::colorize`], [`Pixmap::merge`], [`Pixmap::rotate`],
//!   [`Pixmap::highlight`]) used to derive icon state variants
//!
//! All transforms are pure: they return a new pixmap and are chainable. The
//! null pixmap (zero area) is a fixed point of every transform, which lets
//! lookup failures flow through compositing code without guards.
//!
//! # Example
//!
//! ```ignore
//! use prismatic_pixmap::{Pixmap, Corner};
//!
//! let base = Pixmap::from_file("folder.png")?;
//! let badge = Pixmap::from_file("emblem-link.png")?;
//!
//! // A faded "hidden symlinked folder" rendition
//! let icon = base.merge(&badge, Corner::BottomRight).transparent(0.6);
//! ```

mod compose;
mod error;
mod pixmap;

pub use compose::{Corner, Rotation};
pub use error::{PixmapError, PixmapResult};
pub use pixmap::{Color, Pixmap};
