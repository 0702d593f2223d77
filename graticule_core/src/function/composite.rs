// Copyright 2026 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style functions over both zoom and one feature attribute.

use alloc::string::String;
use alloc::vec::Vec;

use crate::attribute::AttributeValue;
use crate::error::StyleError;
use crate::stops::{AttributeStops, NumericStops, Segment};
use crate::style_type::StyleType;

use super::source::{fallback, lookup};
use super::{
    FunctionOptions, InterpolationMode, Resolution, exponential_progress, validate_base,
};

/// A style function keyed on zoom level and one feature attribute.
///
/// The outer axis holds zoom stops whose values are attribute-keyed inner
/// collections. One [`InterpolationMode`] governs both axes. Resolution is
/// two-stage: bracket the zoom exactly as a camera function would, then
/// evaluate the bracketing inner collections against the attribute. In
/// exponential mode the two inner results are blended with the zoom-axis
/// progress fraction; a miss at either stage falls back to the default
/// chain.
#[derive(Clone, Debug, PartialEq)]
pub struct CompositeFunction<T> {
    mode: InterpolationMode,
    base: f64,
    attribute_name: String,
    stops: NumericStops<Option<AttributeStops<T>>>,
    default: Option<T>,
}

impl<T: StyleType> CompositeFunction<T> {
    /// Creates a composite function from nested stops in arbitrary order.
    ///
    /// An outer stop's inner collection may be empty; evaluation at such a
    /// stop always misses. The outer axis itself must be non-empty, with
    /// finite, unique zoom keys. Exponential and interval modes require
    /// numeric inner keys; exponential additionally requires a blendable
    /// `T`. The attribute name must be non-empty.
    pub fn new(
        mode: InterpolationMode,
        stops: Vec<(f64, Vec<(AttributeValue, T)>)>,
        attribute_name: impl Into<String>,
        options: FunctionOptions<T>,
    ) -> Result<Self, StyleError> {
        let attribute_name = attribute_name.into();
        if attribute_name.is_empty() {
            return Err(StyleError::EmptyAttributeName);
        }
        if mode == InterpolationMode::Exponential && !T::INTERPOLATABLE {
            return Err(StyleError::NotInterpolatable);
        }
        validate_base(options.base)?;
        let mut outer = Vec::with_capacity(stops.len());
        for (zoom, inner) in stops {
            let inner = if inner.is_empty() {
                None
            } else {
                Some(AttributeStops::for_mode(mode, inner)?)
            };
            outer.push((zoom, inner));
        }
        Ok(Self {
            mode,
            base: options.base,
            attribute_name,
            stops: NumericStops::new(outer)?,
            default: options.default,
        })
    }

    /// The interpolation mode, shared by both axes.
    #[must_use]
    pub fn interpolation_mode(&self) -> InterpolationMode {
        self.mode
    }

    /// The exponential interpolation base.
    #[must_use]
    pub fn interpolation_base(&self) -> f64 {
        self.base
    }

    /// The name of the feature attribute this function is keyed on.
    #[must_use]
    pub fn attribute_name(&self) -> &str {
        &self.attribute_name
    }

    /// The configured default value, if any.
    #[must_use]
    pub fn default_value(&self) -> Option<&T> {
        self.default.as_ref()
    }

    /// The number of outer (zoom) stops.
    #[must_use]
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Evaluates the function at `zoom` against one attribute value.
    #[must_use]
    pub fn evaluate(&self, zoom: f64, attribute: Option<&AttributeValue>) -> T {
        self.resolve(zoom, attribute).0
    }

    /// Evaluates the function, reporting how the output was produced.
    #[must_use]
    pub fn resolve(&self, zoom: f64, attribute: Option<&AttributeValue>) -> (T, Resolution) {
        match self.lookup(zoom, attribute) {
            Some(resolved) => resolved,
            None => fallback(self.default.as_ref()),
        }
    }

    fn lookup(&self, zoom: f64, attribute: Option<&AttributeValue>) -> Option<(T, Resolution)> {
        match self.mode {
            // Identity ignores the stop tables on both axes.
            InterpolationMode::Identity => lookup(self.mode, self.base, None, attribute),
            InterpolationMode::Exponential => match self.stops.segment(zoom) {
                Segment::Below => self.inner(0, attribute),
                Segment::Above => self.inner(self.stops.len() - 1, attribute),
                Segment::Inside(i) => {
                    let (lower, _) = self.inner(i, attribute)?;
                    let (upper, _) = self.inner(i + 1, attribute)?;
                    let f = exponential_progress(
                        self.base,
                        self.stops.key_at(i),
                        self.stops.key_at(i + 1),
                        zoom,
                    );
                    Some((lower.lerp(&upper, f), Resolution::Stop))
                }
            },
            InterpolationMode::Interval => {
                let i = self.stops.floor_index(zoom).unwrap_or(0);
                self.inner(i, attribute)
            }
            InterpolationMode::Categorical => {
                let i = self.stops.exact_index(zoom)?;
                self.inner(i, attribute)
            }
        }
    }

    /// Evaluates the inner collection of outer stop `i`.
    fn inner(&self, i: usize, attribute: Option<&AttributeValue>) -> Option<(T, Resolution)> {
        lookup(self.mode, self.base, self.stops.value_at(i).as_ref(), attribute)
    }
}
