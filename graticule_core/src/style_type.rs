// Copyright 2026 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The value types a style property can take.
//!
//! [`StyleType`] is the bound on the generic parameter `T` of
//! [`StyleValue`](crate::value::StyleValue). It captures the three
//! capabilities evaluation needs beyond plain value semantics:
//!
//! - **Blending** — [`lerp`](StyleType::lerp), used by exponential
//!   interpolation to mix the two bracketing stop values channel-wise.
//!   Types that cannot be blended (strings, booleans, enum-likes) leave
//!   [`INTERPOLATABLE`](StyleType::INTERPOLATABLE) at `false`; constructing
//!   an exponential function over them fails.
//! - **Coercion** — [`from_attribute`](StyleType::from_attribute), used by
//!   identity mode to pass a raw feature attribute through as the output.
//! - **A zero value** — `Default::default()`, the end of the evaluation
//!   fallback chain.
//!
//! Enum-like property types (line caps, text anchors, …) implement this
//! trait with all defaults; only equality is required of them.

use alloc::string::String;

use kurbo::{Point, Vec2};

use crate::attribute::AttributeValue;

/// A type usable as the output of a [`StyleValue`](crate::value::StyleValue).
pub trait StyleType: Clone + PartialEq + core::fmt::Debug + Default {
    /// Whether values of this type support channel-wise blending.
    ///
    /// Exponential interpolation requires this; the other modes only ever
    /// return stop values verbatim.
    const INTERPOLATABLE: bool = false;

    /// Blends `self` toward `other` by fraction `t` in `0.0..=1.0`.
    ///
    /// Only called when [`INTERPOLATABLE`](Self::INTERPOLATABLE) is `true`;
    /// the default returns `self` unchanged.
    #[must_use]
    fn lerp(&self, other: &Self, t: f64) -> Self {
        let _ = (other, t);
        self.clone()
    }

    /// Coerces a raw feature attribute into this type, for identity mode.
    ///
    /// Returns `None` when the attribute's dynamic type does not match,
    /// which sends evaluation down the fallback chain.
    #[must_use]
    fn from_attribute(value: &AttributeValue) -> Option<Self> {
        let _ = value;
        None
    }
}

impl StyleType for f64 {
    const INTERPOLATABLE: bool = true;

    fn lerp(&self, other: &Self, t: f64) -> Self {
        self + (other - self) * t
    }

    fn from_attribute(value: &AttributeValue) -> Option<Self> {
        value.as_number()
    }
}

impl StyleType for f32 {
    const INTERPOLATABLE: bool = true;

    #[expect(
        clippy::cast_possible_truncation,
        reason = "blending in f64 then narrowing keeps the midpoint exact"
    )]
    fn lerp(&self, other: &Self, t: f64) -> Self {
        let blended = f64::from(*self) + (f64::from(*other) - f64::from(*self)) * t;
        blended as f32
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "attribute numbers are narrowed to the property's precision"
    )]
    fn from_attribute(value: &AttributeValue) -> Option<Self> {
        value.as_number().map(|n| n as f32)
    }
}

impl StyleType for bool {
    fn from_attribute(value: &AttributeValue) -> Option<Self> {
        value.as_bool()
    }
}

impl StyleType for String {
    fn from_attribute(value: &AttributeValue) -> Option<Self> {
        value.as_str().map(Self::from)
    }
}

// The zero value comes from `Default`, which std does not implement for
// every array length.
impl<const N: usize> StyleType for [f64; N]
where
    [f64; N]: Default,
{
    const INTERPOLATABLE: bool = true;

    fn lerp(&self, other: &Self, t: f64) -> Self {
        let mut out = [0.0; N];
        let mut i = 0;
        while i < N {
            out[i] = self[i] + (other[i] - self[i]) * t;
            i += 1;
        }
        out
    }
}

impl StyleType for Vec2 {
    const INTERPOLATABLE: bool = true;

    fn lerp(&self, other: &Self, t: f64) -> Self {
        Vec2::lerp(*self, *other, t)
    }
}

impl StyleType for Point {
    const INTERPOLATABLE: bool = true;

    fn lerp(&self, other: &Self, t: f64) -> Self {
        Point::lerp(*self, *other, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f64_lerp() {
        assert_eq!(2.0.lerp(&8.0, 0.5), 5.0);
        assert_eq!(2.0.lerp(&8.0, 0.0), 2.0);
        assert_eq!(2.0.lerp(&8.0, 1.0), 8.0);
    }

    #[test]
    fn f32_lerp_blends_in_f64() {
        let a: f32 = 1.0;
        let b: f32 = 3.0;
        assert_eq!(StyleType::lerp(&a, &b, 0.25), 1.5);
    }

    #[test]
    fn array_lerp_is_component_wise() {
        let a = [0.0, 10.0, -2.0];
        let b = [4.0, 20.0, 2.0];
        assert_eq!(a.lerp(&b, 0.5), [2.0, 15.0, 0.0]);
    }

    #[test]
    fn vec2_lerp() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, -4.0);
        assert_eq!(StyleType::lerp(&a, &b, 0.5), Vec2::new(5.0, -2.0));
    }

    #[test]
    fn non_interpolatable_defaults() {
        assert!(!bool::INTERPOLATABLE);
        assert!(!String::INTERPOLATABLE);
        // Default lerp returns the receiver.
        let s = String::from("road");
        assert_eq!(s.lerp(&String::from("river"), 0.9), "road");
    }

    #[test]
    fn coercion_respects_families() {
        assert_eq!(f64::from_attribute(&AttributeValue::Number(3.0)), Some(3.0));
        assert_eq!(f64::from_attribute(&AttributeValue::from("3")), None);
        assert_eq!(bool::from_attribute(&AttributeValue::Bool(true)), Some(true));
        assert_eq!(
            String::from_attribute(&AttributeValue::from("river")),
            Some(String::from("river"))
        );
        assert_eq!(String::from_attribute(&AttributeValue::Null), None);
        assert_eq!(Vec2::from_attribute(&AttributeValue::Number(1.0)), None);
    }

    #[test]
    fn zero_values() {
        assert_eq!(f64::default(), 0.0);
        assert_eq!(String::default(), "");
        assert_eq!(<[f64; 2]>::default(), [0.0, 0.0]);
        assert_eq!(Vec2::default(), Vec2::ZERO);
    }
}
