//! Compositing transforms on pixmaps.
//!
//! This module provides the pure pixel transforms used to derive icon
//! variants: desaturation for disabled states, alpha attenuation for hidden
//! entries, flat-color tinting, corner-anchored overlay merging, 90-degree
//! rotation, and a white highlight for active states.
//!
//! All transforms are total over valid pixmaps and chainable:
//!
//! ```ignore
//! use prismatic_pixmap::{Pixmap, Corner};
//!
//! let faded_link = base
//!     .merge(&link_overlay, Corner::BottomRight)
//!     .transparent(0.6);
//! ```
//!
//! Applying any transform to a null pixmap returns the null pixmap
//! unchanged. Callers therefore never need to guard lookups that may have
//! produced an empty result.

use image::Rgba;

use crate::pixmap::{Color, Pixmap};

/// Anchor corner for [`Pixmap::merge`].
///
/// The overlay's matching corner is aligned with the base pixmap's corner;
/// `Center` aligns the midpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Center,
}

/// Rotation direction for [`Pixmap::rotate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// 90 degrees clockwise.
    Clockwise,
    /// 90 degrees counter-clockwise.
    CounterClockwise,
}

/// ITU-R 601 luma of a pixel, in 0..=255.
#[inline]
fn luma(p: &Rgba<u8>) -> u32 {
    (p.0[0] as u32 * 299 + p.0[1] as u32 * 587 + p.0[2] as u32 * 114) / 1000
}

impl Pixmap {
    /// Produce a faded grayscale copy.
    ///
    /// Each channel becomes `(255 + gray) / 2` where `gray` is the pixel's
    /// ITU-R 601 luma. The bias toward white keeps mid-tones light, so
    /// disabled icons read as faded rather than fully gray. Alpha is
    /// preserved exactly.
    #[must_use]
    pub fn desaturate(&self) -> Self {
        if self.is_null() {
            return self.clone();
        }
        let mut out = self.clone();
        for p in out.inner.pixels_mut() {
            let v = ((255 + luma(p)) / 2) as u8;
            p.0 = [v, v, v, p.0[3]];
        }
        out
    }

    /// Attenuate the alpha channel by `intensity`.
    ///
    /// Destination-in semantics: every alpha value is scaled by
    /// `1 - intensity`. `transparent(0.0)` is the identity,
    /// `transparent(1.0)` is fully transparent. RGB channels are untouched.
    #[must_use]
    pub fn transparent(&self, intensity: f32) -> Self {
        if self.is_null() {
            return self.clone();
        }
        let keep = (1.0 - intensity.clamp(0.0, 1.0)).clamp(0.0, 1.0);
        let mut out = self.clone();
        for p in out.inner.pixels_mut() {
            p.0[3] = (p.0[3] as f32 * keep).round() as u8;
        }
        out
    }

    /// Tint the pixmap with a flat color.
    ///
    /// Desaturates, screen-blends `color` over the gray, then restores the
    /// original alpha mask. The screen blend keeps highlights bright, so
    /// tinted icons stay legible on dark backgrounds.
    #[must_use]
    pub fn colorize(&self, color: Color) -> Self {
        if self.is_null() {
            return self.clone();
        }
        let mut out = self.desaturate();
        let tint = [color.r as u32, color.g as u32, color.b as u32];
        for p in out.inner.pixels_mut() {
            for c in 0..3 {
                let gray = p.0[c] as u32;
                // screen: 255 - (255-a)(255-b)/255
                p.0[c] = (255 - ((255 - gray) * (255 - tint[c])) / 255) as u8;
            }
        }
        out
    }

    /// Draw `overlay` onto this pixmap at the given anchor corner.
    ///
    /// Anchoring is computed in *logical* pixels: both pixmaps' device
    /// pixel ratios are respected, and an overlay with a different ratio is
    /// resampled to the base ratio before drawing. Standard source-over
    /// alpha blending is used.
    #[must_use]
    pub fn merge(&self, overlay: &Pixmap, corner: Corner) -> Self {
        if self.is_null() || overlay.is_null() {
            return self.clone();
        }

        let ratio = self.device_pixel_ratio();
        let overlay = if (overlay.device_pixel_ratio() - ratio).abs() > f32::EPSILON {
            overlay.resampled_to_ratio(ratio)
        } else {
            overlay.clone()
        };

        let (base_w, base_h) = self.logical_size();
        let (over_w, over_h) = overlay.logical_size();
        let (lx, ly) = match corner {
            Corner::TopLeft => (0.0, 0.0),
            Corner::TopRight => (base_w - over_w, 0.0),
            Corner::BottomLeft => (0.0, base_h - over_h),
            Corner::BottomRight => (base_w - over_w, base_h - over_h),
            Corner::Center => ((base_w - over_w) / 2.0, (base_h - over_h) / 2.0),
        };
        let px = (lx * ratio).round() as i64;
        let py = (ly * ratio).round() as i64;

        let mut out = self.clone();
        for oy in 0..overlay.height() {
            for ox in 0..overlay.width() {
                let dx = px + ox as i64;
                let dy = py + oy as i64;
                if dx < 0 || dy < 0 || dx >= out.width() as i64 || dy >= out.height() as i64 {
                    continue;
                }
                let src = *overlay.inner.get_pixel(ox, oy);
                let dst = *out.inner.get_pixel(dx as u32, dy as u32);
                out.inner
                    .put_pixel(dx as u32, dy as u32, source_over(dst, src));
            }
        }
        out
    }

    /// Rotate by 90 degrees in the given direction.
    ///
    /// Width and height swap; the device-pixel-ratio carries over.
    #[must_use]
    pub fn rotate(&self, rotation: Rotation) -> Self {
        if self.is_null() {
            return self.clone();
        }
        let inner = match rotation {
            Rotation::Clockwise => image::imageops::rotate90(&self.inner),
            Rotation::CounterClockwise => image::imageops::rotate270(&self.inner),
        };
        Pixmap {
            inner,
            device_pixel_ratio: self.device_pixel_ratio,
        }
    }

    /// Apply a white overlay masked by the pixmap's own alpha.
    ///
    /// Used for active/hover icon states. The white layer's strength is
    /// `opacity` scaled by each pixel's own coverage, so fully transparent
    /// regions stay transparent.
    #[must_use]
    pub fn highlight(&self, opacity: f32) -> Self {
        if self.is_null() {
            return self.clone();
        }
        let opacity = opacity.clamp(0.0, 1.0);
        let mut out = self.clone();
        for p in out.inner.pixels_mut() {
            let k = opacity * (p.0[3] as f32 / 255.0);
            for c in 0..3 {
                let v = p.0[c] as f32;
                p.0[c] = (v + (255.0 - v) * k).round() as u8;
            }
        }
        out
    }
}

/// Source-over blend of two non-premultiplied RGBA8 pixels.
fn source_over(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    let sa = src.0[3] as f32 / 255.0;
    if sa <= 0.0 {
        return dst;
    }
    let da = dst.0[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }
    let mut out = [0u8; 4];
    for c in 0..3 {
        let s = src.0[c] as f32 / 255.0;
        let d = dst.0[c] as f32 / 255.0;
        let v = (s * sa + d * da * (1.0 - sa)) / out_a;
        out[c] = (v * 255.0).round().clamp(0.0, 255.0) as u8;
    }
    out[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgba(out)
}
