// Copyright 2026 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The style value sum type.
//!
//! A style-layer property slot holds one [`StyleValue`]: either a constant
//! or one of the three function variants. The render loop supplies the
//! current zoom (always) and, for feature-driven properties, the feature's
//! attributes; [`evaluate`](StyleValue::evaluate) dispatches to the variant.
//!
//! The factories accept stop values as `StyleValue`s so that parsers can
//! treat every parsed value uniformly, but stop values must be constants;
//! the nesting collapses at construction and anything else is rejected.

use alloc::string::String;
use alloc::vec::Vec;

use crate::attribute::{AttributeValue, FeatureAttributes};
use crate::error::StyleError;
use crate::function::{
    CameraFunction, CompositeFunction, FunctionOptions, InterpolationMode, Resolution,
    SourceFunction,
};
use crate::style_type::StyleType;
use crate::trace::{EvaluationEvent, Tracer};

/// A style attribute value that never varies.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstantValue<T> {
    raw: T,
}

impl<T> ConstantValue<T> {
    /// Wraps a raw value.
    #[must_use]
    pub fn new(raw: T) -> Self {
        Self { raw }
    }

    /// The wrapped value.
    #[must_use]
    pub fn raw(&self) -> &T {
        &self.raw
    }

    /// Unwraps the value.
    #[must_use]
    pub fn into_raw(self) -> T {
        self.raw
    }
}

/// A generic container for a style property value: a constant, or a
/// function of zoom and/or one feature attribute.
///
/// Immutable once constructed; any number of rendering threads may
/// evaluate the same instance concurrently.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue<T> {
    /// A constant; evaluation ignores its input.
    Constant(ConstantValue<T>),
    /// A zoom-driven function.
    Camera(CameraFunction<T>),
    /// An attribute-driven function.
    Source(SourceFunction<T>),
    /// A zoom- and attribute-driven function.
    Composite(CompositeFunction<T>),
}

impl<T: StyleType> StyleValue<T> {
    /// Creates a constant style value.
    #[must_use]
    pub fn constant(raw: T) -> Self {
        Self::Constant(ConstantValue::new(raw))
    }

    /// Creates a camera function from zoom stops.
    ///
    /// `options.default` must be unset — camera functions never carry a
    /// default value.
    pub fn camera(
        mode: InterpolationMode,
        stops: Vec<(f64, Self)>,
        options: FunctionOptions<T>,
    ) -> Result<Self, StyleError> {
        if options.default.is_some() {
            return Err(StyleError::DefaultOnCameraFunction);
        }
        let stops = constant_stops(stops)?;
        Ok(Self::Camera(CameraFunction::new(mode, stops, options.base)?))
    }

    /// Creates a source function from attribute stops.
    pub fn source(
        mode: InterpolationMode,
        stops: Option<Vec<(AttributeValue, Self)>>,
        attribute_name: impl Into<String>,
        options: FunctionOptions<T>,
    ) -> Result<Self, StyleError> {
        let stops = match stops {
            Some(stops) => Some(constant_stops(stops)?),
            None => None,
        };
        SourceFunction::new(mode, stops, attribute_name, options).map(Self::Source)
    }

    /// Creates a composite function from zoom stops whose values are
    /// attribute stop collections.
    pub fn composite(
        mode: InterpolationMode,
        stops: Vec<(f64, Vec<(AttributeValue, Self)>)>,
        attribute_name: impl Into<String>,
        options: FunctionOptions<T>,
    ) -> Result<Self, StyleError> {
        let mut flat = Vec::with_capacity(stops.len());
        for (zoom, inner) in stops {
            flat.push((zoom, constant_stops(inner)?));
        }
        CompositeFunction::new(mode, flat, attribute_name, options).map(Self::Composite)
    }

    /// Convenience for a linear zoom function: exponential mode, base 1.
    ///
    /// Kept for call-site compatibility with older style code; prefer
    /// [`camera`](Self::camera).
    pub fn with_stops(stops: Vec<(f64, Self)>) -> Result<Self, StyleError> {
        Self::camera(InterpolationMode::Exponential, stops, FunctionOptions::new())
    }

    /// Convenience for an exponential zoom function with the given base.
    ///
    /// Kept for call-site compatibility with older style code; prefer
    /// [`camera`](Self::camera).
    pub fn with_interpolation_base(
        base: f64,
        stops: Vec<(f64, Self)>,
    ) -> Result<Self, StyleError> {
        Self::camera(
            InterpolationMode::Exponential,
            stops,
            FunctionOptions::new().with_base(base),
        )
    }

    /// Whether this value is a constant.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        matches!(self, Self::Constant(_))
    }

    /// The attribute this value is keyed on, for source and composite
    /// functions.
    #[must_use]
    pub fn attribute_name(&self) -> Option<&str> {
        match self {
            Self::Constant(_) | Self::Camera(_) => None,
            Self::Source(f) => Some(f.attribute_name()),
            Self::Composite(f) => Some(f.attribute_name()),
        }
    }

    /// Whether evaluation reads feature attributes at all.
    #[must_use]
    pub fn requires_feature(&self) -> bool {
        self.attribute_name().is_some()
    }

    /// Evaluates against the current zoom and one feature's attributes.
    ///
    /// Total: unresolved lookups walk the fallback chain and always yield
    /// a value.
    #[must_use]
    pub fn evaluate(&self, zoom: f64, feature: &FeatureAttributes) -> T {
        self.resolve(zoom, feature).0
    }

    /// Evaluates a zoom-only property (no feature in hand).
    ///
    /// Attribute-driven variants behave as if the feature lacked the
    /// attribute and resolve through their fallback chain.
    #[must_use]
    pub fn evaluate_zoom(&self, zoom: f64) -> T {
        match self {
            Self::Constant(c) => c.raw().clone(),
            Self::Camera(f) => f.evaluate(zoom),
            Self::Source(f) => f.evaluate(None),
            Self::Composite(f) => f.evaluate(zoom, None),
        }
    }

    /// Evaluates, reporting how the output was produced.
    #[must_use]
    pub fn resolve(&self, zoom: f64, feature: &FeatureAttributes) -> (T, Resolution) {
        match self {
            Self::Constant(c) => (c.raw().clone(), Resolution::Constant),
            Self::Camera(f) => f.resolve(zoom),
            Self::Source(f) => f.resolve(feature.get(f.attribute_name())),
            Self::Composite(f) => f.resolve(zoom, feature.get(f.attribute_name())),
        }
    }

    /// Like [`evaluate`](Self::evaluate), emitting an [`EvaluationEvent`]
    /// for style debugging.
    #[must_use]
    pub fn evaluate_traced(
        &self,
        zoom: f64,
        feature: &FeatureAttributes,
        tracer: &mut Tracer<'_>,
    ) -> T {
        let (value, resolution) = self.resolve(zoom, feature);
        tracer.evaluation(&EvaluationEvent { resolution });
        value
    }
}

/// Unwraps factory stop values, which must be constants.
fn constant_stops<K, T: StyleType>(
    stops: Vec<(K, StyleValue<T>)>,
) -> Result<Vec<(K, T)>, StyleError> {
    stops
        .into_iter()
        .map(|(key, value)| match value {
            StyleValue::Constant(c) => Ok((key, c.into_raw())),
            _ => Err(StyleError::NestedFunction),
        })
        .collect()
}
