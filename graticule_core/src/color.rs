// Copyright 2026 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal straight-alpha color.
//!
//! This type covers the subset of color handling that `graticule_core`
//! actually needs (construction, channel access, channel-wise blending)
//! without pulling in a full color crate. Channels are unpremultiplied and
//! nominally in `0.0..=1.0`; blending does not clamp, so out-of-range
//! intermediate values pass through untouched.

use crate::attribute::AttributeValue;
use crate::style_type::StyleType;

/// A straight-alpha RGBA color with `f64` channels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a color from four channels.
    #[inline]
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from three channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Creates a color from 8-bit channels.
    #[inline]
    #[must_use]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            f64::from(a) / 255.0,
        )
    }

    /// Returns the channels as an array `[r, g, b, a]`.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Is every channel [finite](f64::is_finite)?
    #[inline]
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

impl Default for Rgba {
    #[inline]
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl From<[f64; 4]> for Rgba {
    #[inline]
    fn from(c: [f64; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

impl StyleType for Rgba {
    const INTERPOLATABLE: bool = true;

    fn lerp(&self, other: &Self, t: f64) -> Self {
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    fn from_attribute(_value: &AttributeValue) -> Option<Self> {
        // Color attributes only arrive through a style document parser, which
        // hands us already-typed values; there is no raw coercion.
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_transparent() {
        assert_eq!(Rgba::default(), Rgba::TRANSPARENT);
    }

    #[test]
    fn from_rgba8_scales_channels() {
        let c = Rgba::from_rgba8(255, 0, 51, 255);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 0.2).abs() < 1e-9);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn lerp_is_channel_wise() {
        let a = Rgba::new(0.0, 0.25, 1.0, 1.0);
        let b = Rgba::new(1.0, 0.75, 0.0, 0.5);
        let mid = a.lerp(&b, 0.5);
        assert_eq!(mid, Rgba::new(0.5, 0.5, 0.5, 0.75));
    }

    #[test]
    fn lerp_endpoints() {
        let a = Rgba::BLACK;
        let b = Rgba::WHITE;
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
    }

    #[test]
    fn round_trip_array() {
        let c = Rgba::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(Rgba::from(c.to_array()), c);
    }

    #[test]
    fn finite_check() {
        assert!(Rgba::WHITE.is_finite());
        assert!(!Rgba::new(f64::NAN, 0.0, 0.0, 1.0).is_finite());
    }
}
