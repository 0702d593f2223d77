// Copyright 2026 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style function variants.
//!
//! A style function describes how a property value varies with the camera's
//! zoom level, with one feature attribute, or with both:
//!
//! - [`CameraFunction`] — zoom-keyed stops, evaluated against zoom only.
//! - [`SourceFunction`] — attribute-keyed stops plus a default fallback,
//!   evaluated against one feature attribute.
//! - [`CompositeFunction`] — zoom-keyed outer stops whose values are
//!   attribute-keyed inner collections, evaluated against both.
//!
//! All three share an [`InterpolationMode`] that governs how values between
//! and at stops are resolved, and all evaluation is total: unresolved
//! lookups walk the fallback chain (configured default, then the type's
//! zero value) instead of failing. Each evaluation reports how its output
//! was produced as a [`Resolution`], which the tracing layer surfaces for
//! style debugging.

mod camera;
mod composite;
mod source;

pub use camera::CameraFunction;
pub use composite::CompositeFunction;
pub use source::SourceFunction;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::error::StyleError;
use crate::stops::{NumericStops, Segment};
use crate::style_type::StyleType;

/// How property values are resolved between map zoom levels or over a range
/// of feature attribute values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InterpolationMode {
    /// Values between two stops are blended exponentially, or linearly when
    /// the interpolation base is 1.
    Exponential,
    /// Values are not blended; the output is the value of the greatest stop
    /// whose key is less than or equal to the input.
    Interval,
    /// Values are not blended; the output is the value of the stop whose
    /// key equals the input exactly.
    Categorical,
    /// The input itself is the output, coerced to the property type. Only
    /// applicable to attribute axes.
    Identity,
}

/// How an evaluation produced its output value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// A constant value was returned verbatim.
    Constant,
    /// One or more stops matched (including a blend of two stops).
    Stop,
    /// Identity mode coerced the input attribute into the output.
    Identity,
    /// No stop applied; the configured default value was used.
    Default,
    /// No stop applied and no default was configured; the type's zero
    /// value was used.
    Zero,
}

/// Options accepted by the function factories.
///
/// `base` steepens the exponential interpolation curve and is honored only
/// in [`InterpolationMode::Exponential`]; `default` is the fallback for
/// unmatched attribute-driven evaluation and is accepted only by source and
/// composite functions.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionOptions<T> {
    /// Exponential curve steepness. Must be positive and finite; 1 yields a
    /// linear curve.
    pub base: f64,
    /// Fallback value for unmatched attribute-driven evaluation.
    pub default: Option<T>,
}

impl<T> Default for FunctionOptions<T> {
    fn default() -> Self {
        Self {
            base: 1.0,
            default: None,
        }
    }
}

impl<T> FunctionOptions<T> {
    /// The defaults: linear base, no default value.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the exponential interpolation base.
    #[must_use]
    pub fn with_base(mut self, base: f64) -> Self {
        self.base = base;
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn with_default(mut self, value: T) -> Self {
        self.default = Some(value);
        self
    }
}

/// Rejects non-positive or non-finite interpolation bases.
pub(crate) fn validate_base(base: f64) -> Result<(), StyleError> {
    if base > 0.0 && base.is_finite() {
        Ok(())
    } else {
        Err(StyleError::NonPositiveBase { base })
    }
}

/// The progress fraction of `input` between stop keys `lower` and `upper`
/// under an exponential curve.
///
/// With `base` 1 this is the plain linear fraction
/// `(input - lower) / (upper - lower)`; otherwise the curve
/// `(base^(input - lower) - 1) / (base^(upper - lower) - 1)`, which rises
/// faster toward the upper stop for bases above 1. Inputs outside the span
/// clamp to 0 or 1; there is no extrapolation.
#[must_use]
pub fn exponential_progress(base: f64, lower: f64, upper: f64, input: f64) -> f64 {
    let range = upper - lower;
    if range <= 0.0 {
        return 0.0;
    }
    let progress = input - lower;
    if progress <= 0.0 {
        return 0.0;
    }
    if progress >= range {
        return 1.0;
    }
    if (base - 1.0).abs() < f64::EPSILON {
        progress / range
    } else {
        (base.powf(progress) - 1.0) / (base.powf(range) - 1.0)
    }
}

/// Exponential evaluation over an ordered axis: clamp outside the span,
/// blend the two bracketing stop values inside it.
pub(crate) fn blend_numeric<T: StyleType>(stops: &NumericStops<T>, base: f64, input: f64) -> T {
    match stops.segment(input) {
        Segment::Below => stops.first_value().clone(),
        Segment::Above => stops.last_value().clone(),
        Segment::Inside(i) => {
            let f = exponential_progress(base, stops.key_at(i), stops.key_at(i + 1), input);
            stops.value_at(i).lerp(stops.value_at(i + 1), f)
        }
    }
}

/// Interval evaluation over an ordered axis: the greatest stop at or below
/// the input, or the lowest stop when the input is below them all.
pub(crate) fn step_numeric<T: Clone>(stops: &NumericStops<T>, input: f64) -> T {
    match stops.floor_index(input) {
        Some(i) => stops.value_at(i).clone(),
        None => stops.first_value().clone(),
    }
}
