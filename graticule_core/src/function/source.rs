// Copyright 2026 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Feature-attribute-driven style functions.

use alloc::string::String;
use alloc::vec::Vec;

use crate::attribute::AttributeValue;
use crate::error::StyleError;
use crate::stops::AttributeStops;
use crate::style_type::StyleType;

use super::{
    FunctionOptions, InterpolationMode, Resolution, blend_numeric, step_numeric, validate_base,
};

/// A style function keyed on one feature attribute.
///
/// The stop collection is optional: a stopless source function is a pure
/// default (or zero-value) lookup, which style documents use to gate a
/// property on attribute presence.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceFunction<T> {
    mode: InterpolationMode,
    base: f64,
    attribute_name: String,
    stops: Option<AttributeStops<T>>,
    default: Option<T>,
}

impl<T: StyleType> SourceFunction<T> {
    /// Creates a source function from attribute stops in arbitrary order.
    ///
    /// `stops` may be `None` or empty. Exponential and interval modes
    /// require numeric stop keys; exponential additionally requires a
    /// blendable `T`. The attribute name must be non-empty.
    pub fn new(
        mode: InterpolationMode,
        stops: Option<Vec<(AttributeValue, T)>>,
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
        let stops = match stops {
            Some(stops) if !stops.is_empty() => Some(AttributeStops::for_mode(mode, stops)?),
            _ => None,
        };
        Ok(Self {
            mode,
            base: options.base,
            attribute_name,
            stops,
            default: options.default,
        })
    }

    /// The interpolation mode.
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

    /// The number of stops.
    #[must_use]
    pub fn stop_count(&self) -> usize {
        self.stops.as_ref().map_or(0, AttributeStops::len)
    }

    /// Evaluates the function against one attribute value (`None` when the
    /// feature does not carry the attribute).
    #[must_use]
    pub fn evaluate(&self, attribute: Option<&AttributeValue>) -> T {
        self.resolve(attribute).0
    }

    /// Evaluates the function, reporting how the output was produced.
    #[must_use]
    pub fn resolve(&self, attribute: Option<&AttributeValue>) -> (T, Resolution) {
        match lookup(self.mode, self.base, self.stops.as_ref(), attribute) {
            Some(resolved) => resolved,
            None => fallback(self.default.as_ref()),
        }
    }
}

/// The default → zero tail of the evaluation fallback chain.
pub(crate) fn fallback<T: StyleType>(default: Option<&T>) -> (T, Resolution) {
    match default {
        Some(value) => (value.clone(), Resolution::Default),
        None => (T::default(), Resolution::Zero),
    }
}

/// Attribute-axis stop lookup, shared with the inner axis of composite
/// functions. Returns `None` when no stop applies: missing attribute,
/// dynamic type mismatch (a NaN number included), unmatched categorical
/// key, or absent stops.
pub(crate) fn lookup<T: StyleType>(
    mode: InterpolationMode,
    base: f64,
    stops: Option<&AttributeStops<T>>,
    attribute: Option<&AttributeValue>,
) -> Option<(T, Resolution)> {
    let attribute = attribute?;
    if mode == InterpolationMode::Identity {
        return T::from_attribute(attribute).map(|v| (v, Resolution::Identity));
    }
    match (mode, stops?) {
        (InterpolationMode::Exponential, AttributeStops::Numeric(stops)) => {
            let input = attribute.as_number().filter(|n| !n.is_nan())?;
            Some((blend_numeric(stops, base, input), Resolution::Stop))
        }
        (InterpolationMode::Interval, AttributeStops::Numeric(stops)) => {
            let input = attribute.as_number().filter(|n| !n.is_nan())?;
            Some((step_numeric(stops, input), Resolution::Stop))
        }
        (InterpolationMode::Categorical, AttributeStops::Keyed(stops)) => {
            stops.get(attribute).cloned().map(|v| (v, Resolution::Stop))
        }
        // Mode and collection shape always agree for validated functions.
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn class_colors() -> SourceFunction<String> {
        SourceFunction::new(
            InterpolationMode::Categorical,
            Some(vec![
                (AttributeValue::from("river"), "blue".to_string()),
                (AttributeValue::from("road"), "gray".to_string()),
            ]),
            "class",
            FunctionOptions::new().with_default("black".to_string()),
        )
        .unwrap()
    }

    #[test]
    fn categorical_matches_by_equality() {
        let f = class_colors();
        let river = AttributeValue::from("river");
        assert_eq!(f.resolve(Some(&river)), ("blue".to_string(), Resolution::Stop));
    }

    #[test]
    fn categorical_miss_uses_default() {
        let f = class_colors();
        let lake = AttributeValue::from("lake");
        assert_eq!(
            f.resolve(Some(&lake)),
            ("black".to_string(), Resolution::Default)
        );
        assert_eq!(f.resolve(None), ("black".to_string(), Resolution::Default));
    }

    #[test]
    fn categorical_miss_without_default_is_zero_value() {
        let f = SourceFunction::new(
            InterpolationMode::Categorical,
            Some(vec![(AttributeValue::from("river"), 2.0)]),
            "class",
            FunctionOptions::new(),
        )
        .unwrap();
        let lake = AttributeValue::from("lake");
        assert_eq!(f.resolve(Some(&lake)), (0.0, Resolution::Zero));
    }

    #[test]
    fn exponential_over_numeric_attribute() {
        let f = SourceFunction::new(
            InterpolationMode::Exponential,
            Some(vec![
                (AttributeValue::Number(0.0), 0.0),
                (AttributeValue::Number(100.0), 50.0),
            ]),
            "population",
            FunctionOptions::new(),
        )
        .unwrap();
        assert_eq!(f.evaluate(Some(&AttributeValue::Number(50.0))), 25.0);
        // Clamped, no extrapolation.
        assert_eq!(f.evaluate(Some(&AttributeValue::Number(-10.0))), 0.0);
        assert_eq!(f.evaluate(Some(&AttributeValue::Number(500.0))), 50.0);
    }

    #[test]
    fn type_mismatch_falls_back_to_default() {
        let f = SourceFunction::new(
            InterpolationMode::Exponential,
            Some(vec![
                (AttributeValue::Number(0.0), 0.0),
                (AttributeValue::Number(100.0), 50.0),
            ]),
            "population",
            FunctionOptions::new().with_default(7.0),
        )
        .unwrap();
        let s = AttributeValue::from("many");
        assert_eq!(f.resolve(Some(&s)), (7.0, Resolution::Default));
    }

    #[test]
    fn nan_attribute_falls_back_to_default() {
        let f = SourceFunction::new(
            InterpolationMode::Exponential,
            Some(vec![
                (AttributeValue::Number(0.0), 0.0),
                (AttributeValue::Number(100.0), 50.0),
            ]),
            "population",
            FunctionOptions::new().with_default(7.0),
        )
        .unwrap();
        let nan = AttributeValue::Number(f64::NAN);
        assert_eq!(f.resolve(Some(&nan)), (7.0, Resolution::Default));
    }

    #[test]
    fn identity_returns_coerced_attribute() {
        let f = SourceFunction::<f64>::new(
            InterpolationMode::Identity,
            None,
            "width",
            FunctionOptions::new().with_default(1.0),
        )
        .unwrap();
        assert_eq!(
            f.resolve(Some(&AttributeValue::Number(4.5))),
            (4.5, Resolution::Identity)
        );
        // Wrong family: fallback chain.
        let s = AttributeValue::from("wide");
        assert_eq!(f.resolve(Some(&s)), (1.0, Resolution::Default));
    }

    #[test]
    fn stopless_function_is_a_default_lookup() {
        let f = SourceFunction::new(
            InterpolationMode::Categorical,
            None,
            "class",
            FunctionOptions::new().with_default(3.0),
        )
        .unwrap();
        assert_eq!(f.evaluate(Some(&AttributeValue::from("river"))), 3.0);
        assert_eq!(f.stop_count(), 0);

        let empty: Option<Vec<(AttributeValue, f64)>> = Some(vec![]);
        let g = SourceFunction::new(
            InterpolationMode::Categorical,
            empty,
            "class",
            FunctionOptions::new(),
        )
        .unwrap();
        assert_eq!(g.resolve(None), (0.0, Resolution::Zero));
    }

    #[test]
    fn rejects_empty_attribute_name() {
        let err =
            SourceFunction::<f64>::new(InterpolationMode::Identity, None, "", FunctionOptions::new());
        assert_eq!(err.unwrap_err(), StyleError::EmptyAttributeName);
    }

    #[test]
    fn rejects_exponential_over_non_blendable_type() {
        let err = SourceFunction::<String>::new(
            InterpolationMode::Exponential,
            Some(vec![(AttributeValue::Number(0.0), "a".to_string())]),
            "class",
            FunctionOptions::new(),
        );
        assert_eq!(err.unwrap_err(), StyleError::NotInterpolatable);
    }

    #[test]
    fn rejects_non_numeric_keys_for_ordered_modes() {
        let err = SourceFunction::new(
            InterpolationMode::Interval,
            Some(vec![(AttributeValue::from("low"), 1.0)]),
            "level",
            FunctionOptions::new(),
        );
        assert_eq!(err.unwrap_err(), StyleError::NonNumericStopKey);
    }

    #[test]
    fn categorical_numeric_keys_match_by_equality() {
        let f = SourceFunction::new(
            InterpolationMode::Categorical,
            Some(vec![
                (AttributeValue::Number(1.0), 10.0),
                (AttributeValue::Number(2.0), 20.0),
            ]),
            "rank",
            FunctionOptions::new(),
        )
        .unwrap();
        assert_eq!(f.evaluate(Some(&AttributeValue::Number(2.0))), 20.0);
        assert_eq!(f.resolve(Some(&AttributeValue::Number(1.5))).1, Resolution::Zero);
    }
}
