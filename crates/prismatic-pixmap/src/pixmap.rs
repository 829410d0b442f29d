//! CPU-side pixmap buffer.
//!
//! This module provides [`Pixmap`], an RGBA8 pixel buffer with an attached
//! device-pixel-ratio. A pixmap knows its *physical* size (the pixel grid)
//! and its *logical* size (physical divided by the device-pixel-ratio), which
//! is what layout and compositing offsets are computed in.
//!
//! # Example
//!
//! ```ignore
//! use prismatic_pixmap::{Pixmap, Color};
//!
//! // Load from disk
//! let icon = Pixmap::from_file("icons/open.png")?;
//!
//! // Or build programmatically
//! let badge = Pixmap::from_color(10, 10, Color::WHITE);
//!
//! // HiDPI: a 32x32 physical buffer rendered at 16x16 logical points
//! let hidpi = icon.with_device_pixel_ratio(2.0);
//! assert_eq!(hidpi.logical_size(), (16.0, 16.0));
//! ```

use std::io::Cursor;
use std::path::Path;

use image::{imageops, Rgba, RgbaImage};

use crate::error::{PixmapError, PixmapResult};

/// An RGBA color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Fully opaque white.
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Fully opaque black.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Fully transparent.
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Create an opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color from RGBA components.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for Rgba<u8> {
    fn from(c: Color) -> Self {
        Rgba([c.r, c.g, c.b, c.a])
    }
}

impl From<Rgba<u8>> for Color {
    fn from(p: Rgba<u8>) -> Self {
        Color::rgba(p.0[0], p.0[1], p.0[2], p.0[3])
    }
}

/// An RGBA8 pixel buffer with a device-pixel-ratio.
///
/// A zero-sized pixmap is the *null pixmap*; it is a valid value, compares
/// true on [`is_null`](Self::is_null), and every compositing transform maps
/// it to itself. Missing-resource lookups surface as null pixmaps rather
/// than errors.
#[derive(Clone)]
pub struct Pixmap {
    pub(crate) inner: RgbaImage,
    pub(crate) device_pixel_ratio: f32,
}

impl Pixmap {
    // ========================================================================
    // CONSTRUCTION
    // ========================================================================

    /// Create the null pixmap.
    #[inline]
    pub fn new() -> Self {
        Self {
            inner: RgbaImage::new(0, 0),
            device_pixel_ratio: 1.0,
        }
    }

    /// Create a transparent pixmap with the given physical dimensions.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            inner: RgbaImage::new(width, height),
            device_pixel_ratio: 1.0,
        }
    }

    /// Create a pixmap filled with a solid color.
    pub fn from_color(width: u32, height: u32, color: Color) -> Self {
        let mut inner = RgbaImage::new(width, height);
        let pixel: Rgba<u8> = color.into();
        for p in inner.pixels_mut() {
            *p = pixel;
        }
        Self {
            inner,
            device_pixel_ratio: 1.0,
        }
    }

    /// Load a pixmap from a file path.
    pub fn from_file(path: impl AsRef<Path>) -> PixmapResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| PixmapError::io(path, e))?;
        Self::from_bytes(&bytes)
    }

    /// Decode a pixmap from in-memory image data.
    pub fn from_bytes(bytes: &[u8]) -> PixmapResult<Self> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| PixmapError::Decode(e.to_string()))?;
        Ok(Self {
            inner: img.to_rgba8(),
            device_pixel_ratio: 1.0,
        })
    }

    /// Create a pixmap from raw RGBA pixel data.
    ///
    /// The data must be exactly `width * height * 4` bytes in row-major
    /// order, 4 bytes per pixel (R, G, B, A).
    pub fn from_rgba(data: &[u8], width: u32, height: u32) -> PixmapResult<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        if data.len() != expected {
            return Err(PixmapError::InvalidDataSize {
                expected,
                actual: data.len(),
            });
        }
        let inner = RgbaImage::from_raw(width, height, data.to_vec())
            .ok_or_else(|| PixmapError::Decode("raw buffer rejected".to_string()))?;
        Ok(Self {
            inner,
            device_pixel_ratio: 1.0,
        })
    }

    /// Set the device-pixel-ratio (builder pattern).
    ///
    /// The pixel content is unchanged; only the logical size reported for
    /// layout and compositing changes.
    #[must_use]
    pub fn with_device_pixel_ratio(mut self, ratio: f32) -> Self {
        self.device_pixel_ratio = ratio.max(f32::MIN_POSITIVE);
        self
    }

    /// Set the device-pixel-ratio in place.
    pub fn set_device_pixel_ratio(&mut self, ratio: f32) {
        self.device_pixel_ratio = ratio.max(f32::MIN_POSITIVE);
    }

    // ========================================================================
    // PROPERTIES
    // ========================================================================

    /// Physical width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Physical height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// The device-pixel-ratio (physical pixels per logical point).
    #[inline]
    pub fn device_pixel_ratio(&self) -> f32 {
        self.device_pixel_ratio
    }

    /// Logical size as (width, height) points.
    #[inline]
    pub fn logical_size(&self) -> (f32, f32) {
        (
            self.width() as f32 / self.device_pixel_ratio,
            self.height() as f32 / self.device_pixel_ratio,
        )
    }

    /// Returns true if this is the null pixmap (zero area).
    #[inline]
    pub fn is_null(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Get the color of a pixel, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some((*self.inner.get_pixel(x, y)).into())
    }

    /// Set the color of a pixel. Out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.width() || y >= self.height() {
            return;
        }
        self.inner.put_pixel(x, y, color.into());
    }

    /// Raw RGBA8 bytes in row-major order.
    pub fn as_raw(&self) -> &[u8] {
        self.inner.as_raw()
    }

    // ========================================================================
    // SCALING AND EXPORT
    // ========================================================================

    /// Produce a copy scaled to the given *logical* size.
    ///
    /// The physical buffer size is `logical * device_pixel_ratio`, so a
    /// HiDPI pixmap keeps its density through the resize.
    #[must_use]
    pub fn scaled_to(&self, logical_width: f32, logical_height: f32) -> Self {
        if self.is_null() {
            return self.clone();
        }
        let pw = ((logical_width * self.device_pixel_ratio).round() as u32).max(1);
        let ph = ((logical_height * self.device_pixel_ratio).round() as u32).max(1);
        Self {
            inner: imageops::resize(&self.inner, pw, ph, imageops::FilterType::Triangle),
            device_pixel_ratio: self.device_pixel_ratio,
        }
    }

    /// Produce a copy resampled to a different device-pixel-ratio while
    /// keeping the same logical size.
    #[must_use]
    pub fn resampled_to_ratio(&self, ratio: f32) -> Self {
        let ratio = ratio.max(f32::MIN_POSITIVE);
        if self.is_null() || (ratio - self.device_pixel_ratio).abs() < f32::EPSILON {
            let mut copy = self.clone();
            copy.device_pixel_ratio = ratio;
            return copy;
        }
        let (lw, lh) = self.logical_size();
        let pw = ((lw * ratio).round() as u32).max(1);
        let ph = ((lh * ratio).round() as u32).max(1);
        Self {
            inner: imageops::resize(&self.inner, pw, ph, imageops::FilterType::Triangle),
            device_pixel_ratio: ratio,
        }
    }

    /// Encode the pixmap as PNG.
    pub fn to_png(&self) -> PixmapResult<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        self.inner
            .write_to(&mut buffer, image::ImageFormat::Png)
            .map_err(|e| PixmapError::Encode(e.to_string()))?;
        Ok(buffer.into_inner())
    }

    /// Save the pixmap to a file. The format follows the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> PixmapResult<()> {
        self.inner
            .save(path.as_ref())
            .map_err(|e| PixmapError::Encode(e.to_string()))
    }
}

impl Default for Pixmap {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Pixmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pixmap")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("device_pixel_ratio", &self.device_pixel_ratio)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_pixmap() {
        let p = Pixmap::new();
        assert!(p.is_null());
        assert_eq!(p.width(), 0);
        assert_eq!(p.logical_size(), (0.0, 0.0));
    }

    #[test]
    fn test_from_color() {
        let p = Pixmap::from_color(4, 3, Color::rgb(10, 20, 30));
        assert!(!p.is_null());
        assert_eq!((p.width(), p.height()), (4, 3));
        assert_eq!(p.pixel(0, 0), Some(Color::rgb(10, 20, 30)));
        assert_eq!(p.pixel(4, 0), None);
    }

    #[test]
    fn test_from_rgba_size_validation() {
        let data = vec![0u8; 4]; // one pixel, but claiming 2x2
        assert!(Pixmap::from_rgba(&data, 2, 2).is_err());
        assert!(Pixmap::from_rgba(&data, 1, 1).is_ok());
    }

    #[test]
    fn test_logical_size_hidpi() {
        let p = Pixmap::blank(32, 32).with_device_pixel_ratio(2.0);
        assert_eq!(p.logical_size(), (16.0, 16.0));
        assert_eq!(p.width(), 32);
    }

    #[test]
    fn test_scaled_to_respects_ratio() {
        let p = Pixmap::from_color(8, 8, Color::WHITE).with_device_pixel_ratio(2.0);
        let scaled = p.scaled_to(10.0, 10.0);
        assert_eq!(scaled.width(), 20);
        assert_eq!(scaled.height(), 20);
        assert_eq!(scaled.device_pixel_ratio(), 2.0);
    }

    #[test]
    fn test_resampled_to_ratio() {
        let p = Pixmap::from_color(16, 16, Color::WHITE); // 16x16 logical at 1.0
        let hidpi = p.resampled_to_ratio(2.0);
        assert_eq!(hidpi.width(), 32);
        assert_eq!(hidpi.logical_size(), (16.0, 16.0));
    }

    #[test]
    fn test_png_roundtrip() {
        let p = Pixmap::from_color(5, 5, Color::rgba(1, 2, 3, 200));
        let png = p.to_png().unwrap();
        assert_eq!(&png[1..4], b"PNG");
        let back = Pixmap::from_bytes(&png).unwrap();
        assert_eq!(back.pixel(2, 2), Some(Color::rgba(1, 2, 3, 200)));
    }
}
