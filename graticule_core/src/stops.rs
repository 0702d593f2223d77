// Copyright 2026 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stop collections.
//!
//! A *stop* is one `(key, value)` pair of a function's domain. Stops arrive
//! from the parser in arbitrary order and are normalized here once, at
//! construction, so that evaluation is a pure read:
//!
//! - [`NumericStops`] — an ordered axis (zoom, or a numeric attribute).
//!   Keys are validated finite, sorted ascending, and de-duplicated; keys
//!   and values live in parallel arrays and lookups binary-search the key
//!   array.
//! - [`KeyedStops`] — an equality axis (categorical and identity modes).
//!   Keys must share one [`KeyFamily`](crate::attribute::KeyFamily) and be
//!   unique; lookup is a linear scan over what is in practice a handful of
//!   entries.
//! - [`AttributeStops`] — the per-mode choice between the two, shared by
//!   source functions and the inner axis of composite functions.

use alloc::vec::Vec;

use crate::attribute::AttributeValue;
use crate::error::StyleError;
use crate::function::InterpolationMode;

/// Where an input falls relative to an ordered stop axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    /// At or below the lowest stop key.
    Below,
    /// At or above the highest stop key.
    Above,
    /// Strictly between stops `i` and `i + 1`.
    Inside(usize),
}

/// An ordered, de-duplicated numeric stop axis.
///
/// Always holds at least one stop. Keys are finite and strictly ascending.
#[derive(Clone, Debug, PartialEq)]
pub struct NumericStops<V> {
    keys: Vec<f64>,
    values: Vec<V>,
}

impl<V> NumericStops<V> {
    /// Builds an axis from stops in arbitrary order.
    ///
    /// Rejects empty input, non-finite keys, and duplicate keys.
    pub fn new(stops: Vec<(f64, V)>) -> Result<Self, StyleError> {
        if stops.is_empty() {
            return Err(StyleError::EmptyStops);
        }
        for (key, _) in &stops {
            if !key.is_finite() {
                return Err(StyleError::NonFiniteNumericKey { key: *key });
            }
        }
        let mut stops = stops;
        stops.sort_by(|a, b| a.0.total_cmp(&b.0));
        for pair in stops.windows(2) {
            if pair[0].0 == pair[1].0 {
                return Err(StyleError::DuplicateNumericKey { key: pair[0].0 });
            }
        }
        let mut keys = Vec::with_capacity(stops.len());
        let mut values = Vec::with_capacity(stops.len());
        for (key, value) in stops {
            keys.push(key);
            values.push(value);
        }
        Ok(Self { keys, values })
    }

    /// The number of stops.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always `false`; construction rejects empty axes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The sorted keys.
    #[must_use]
    pub fn keys(&self) -> &[f64] {
        &self.keys
    }

    /// The values, in key order.
    #[must_use]
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// The key of stop `i`.
    #[must_use]
    pub fn key_at(&self, i: usize) -> f64 {
        self.keys[i]
    }

    /// The value of stop `i`.
    #[must_use]
    pub fn value_at(&self, i: usize) -> &V {
        &self.values[i]
    }

    /// The value of the lowest stop.
    #[must_use]
    pub fn first_value(&self) -> &V {
        &self.values[0]
    }

    /// The value of the highest stop.
    #[must_use]
    pub fn last_value(&self) -> &V {
        &self.values[self.values.len() - 1]
    }

    /// Locates `input` relative to the axis. A NaN input clamps to the
    /// lowest stop.
    #[must_use]
    pub fn segment(&self, input: f64) -> Segment {
        if input.is_nan() || input <= self.keys[0] {
            Segment::Below
        } else if input >= self.keys[self.keys.len() - 1] {
            Segment::Above
        } else {
            // keys[i] <= input < keys[i + 1]
            let upper = self.keys.partition_point(|k| *k <= input);
            Segment::Inside(upper - 1)
        }
    }

    /// The index of the greatest stop whose key is `<= input`, if any.
    #[must_use]
    pub fn floor_index(&self, input: f64) -> Option<usize> {
        let upper = self.keys.partition_point(|k| *k <= input);
        upper.checked_sub(1)
    }

    /// The index of the stop whose key equals `input` exactly, if any.
    #[must_use]
    pub fn exact_index(&self, input: f64) -> Option<usize> {
        let i = self.keys.partition_point(|k| *k < input);
        (i < self.keys.len() && self.keys[i] == input).then_some(i)
    }
}

/// An equality-keyed stop set for categorical and identity modes.
///
/// Always holds at least one stop. Keys share one family and are unique.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyedStops<V> {
    keys: Vec<AttributeValue>,
    values: Vec<V>,
}

impl<V> KeyedStops<V> {
    /// Builds a keyed set from stops in arbitrary order.
    ///
    /// Rejects empty input, `Null` or mixed-family keys, non-finite numeric
    /// keys, and duplicate keys.
    pub fn new(stops: Vec<(AttributeValue, V)>) -> Result<Self, StyleError> {
        if stops.is_empty() {
            return Err(StyleError::EmptyStops);
        }
        let family = stops[0].0.family().ok_or(StyleError::MixedKeyFamilies)?;
        for (key, _) in &stops {
            if key.family() != Some(family) {
                return Err(StyleError::MixedKeyFamilies);
            }
            if let Some(n) = key.as_number()
                && !n.is_finite()
            {
                return Err(StyleError::NonFiniteNumericKey { key: n });
            }
        }
        for (i, (key, _)) in stops.iter().enumerate() {
            if stops[..i].iter().any(|(seen, _)| seen == key) {
                return Err(StyleError::DuplicateCategoricalKey { key: key.clone() });
            }
        }
        let mut keys = Vec::with_capacity(stops.len());
        let mut values = Vec::with_capacity(stops.len());
        for (key, value) in stops {
            keys.push(key);
            values.push(value);
        }
        Ok(Self { keys, values })
    }

    /// The number of stops.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always `false`; construction rejects empty sets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Looks up the value whose key equals `key`.
    #[must_use]
    pub fn get(&self, key: &AttributeValue) -> Option<&V> {
        self.keys
            .iter()
            .position(|k| k == key)
            .map(|i| &self.values[i])
    }
}

/// The attribute-keyed stop collection of a source or composite function.
///
/// Ordered modes (exponential, interval) require numeric keys; equality
/// modes (categorical, identity) accept any single key family.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeStops<V> {
    /// Numeric keys, ordered — exponential and interval modes.
    Numeric(NumericStops<V>),
    /// Equality keys — categorical and identity modes.
    Keyed(KeyedStops<V>),
}

impl<V> AttributeStops<V> {
    /// Builds the collection shape required by `mode`.
    pub fn for_mode(
        mode: InterpolationMode,
        stops: Vec<(AttributeValue, V)>,
    ) -> Result<Self, StyleError> {
        match mode {
            InterpolationMode::Exponential | InterpolationMode::Interval => {
                let mut numeric = Vec::with_capacity(stops.len());
                for (key, value) in stops {
                    let key = key.as_number().ok_or(StyleError::NonNumericStopKey)?;
                    numeric.push((key, value));
                }
                Ok(Self::Numeric(NumericStops::new(numeric)?))
            }
            InterpolationMode::Categorical | InterpolationMode::Identity => {
                Ok(Self::Keyed(KeyedStops::new(stops)?))
            }
        }
    }

    /// The number of stops.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(stops) => stops.len(),
            Self::Keyed(stops) => stops.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn axis(keys: &[f64]) -> NumericStops<()> {
        NumericStops::new(keys.iter().map(|k| (*k, ())).collect()).unwrap()
    }

    #[test]
    fn arbitrary_insertion_order_is_normalized() {
        let shuffled = NumericStops::new(vec![(10.0, "b"), (0.0, "a"), (20.0, "c")]).unwrap();
        let sorted = NumericStops::new(vec![(0.0, "a"), (10.0, "b"), (20.0, "c")]).unwrap();
        assert_eq!(shuffled, sorted);
        assert_eq!(shuffled.keys(), &[0.0, 10.0, 20.0]);
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(
            NumericStops::<f64>::new(vec![]).unwrap_err(),
            StyleError::EmptyStops
        );
        assert_eq!(
            KeyedStops::<f64>::new(vec![]).unwrap_err(),
            StyleError::EmptyStops
        );
    }

    #[test]
    fn duplicate_numeric_key_rejected() {
        let err = NumericStops::new(vec![(5.0, 1.0), (3.0, 2.0), (5.0, 3.0)]).unwrap_err();
        assert_eq!(err, StyleError::DuplicateNumericKey { key: 5.0 });
    }

    #[test]
    fn non_finite_key_rejected() {
        let err = NumericStops::new(vec![(f64::NAN, 1.0)]).unwrap_err();
        assert!(matches!(err, StyleError::NonFiniteNumericKey { .. }));
    }

    #[test]
    fn segment_lookup() {
        let stops = axis(&[2.0, 4.0, 8.0]);
        assert_eq!(stops.segment(1.0), Segment::Below);
        assert_eq!(stops.segment(2.0), Segment::Below);
        assert_eq!(stops.segment(3.0), Segment::Inside(0));
        assert_eq!(stops.segment(4.0), Segment::Inside(1));
        assert_eq!(stops.segment(7.9), Segment::Inside(1));
        assert_eq!(stops.segment(8.0), Segment::Above);
        assert_eq!(stops.segment(9.0), Segment::Above);
    }

    #[test]
    fn segment_single_stop() {
        let stops = axis(&[5.0]);
        assert_eq!(stops.segment(4.0), Segment::Below);
        assert_eq!(stops.segment(5.0), Segment::Below);
        assert_eq!(stops.segment(6.0), Segment::Above);
    }

    #[test]
    fn floor_index() {
        let stops = axis(&[2.0, 4.0, 8.0]);
        assert_eq!(stops.floor_index(1.0), None);
        assert_eq!(stops.floor_index(2.0), Some(0));
        assert_eq!(stops.floor_index(5.0), Some(1));
        assert_eq!(stops.floor_index(100.0), Some(2));
    }

    #[test]
    fn nan_input_never_panics() {
        let stops = axis(&[2.0, 4.0, 8.0]);
        assert_eq!(stops.segment(f64::NAN), Segment::Below);
        assert_eq!(stops.floor_index(f64::NAN), None);
        assert_eq!(stops.exact_index(f64::NAN), None);
    }

    #[test]
    fn exact_index() {
        let stops = axis(&[2.0, 4.0, 8.0]);
        assert_eq!(stops.exact_index(4.0), Some(1));
        assert_eq!(stops.exact_index(4.5), None);
        assert_eq!(stops.exact_index(8.0), Some(2));
    }

    #[test]
    fn keyed_lookup() {
        let stops = KeyedStops::new(vec![
            (AttributeValue::from("river"), 1),
            (AttributeValue::from("road"), 2),
        ])
        .unwrap();
        assert_eq!(stops.get(&AttributeValue::from("road")), Some(&2));
        assert_eq!(stops.get(&AttributeValue::from("lake")), None);
        assert_eq!(stops.get(&AttributeValue::Number(1.0)), None);
    }

    #[test]
    fn keyed_duplicate_rejected() {
        let err = KeyedStops::new(vec![
            (AttributeValue::from("river"), 1),
            (AttributeValue::from("river"), 2),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            StyleError::DuplicateCategoricalKey {
                key: AttributeValue::from("river")
            }
        );
    }

    #[test]
    fn keyed_mixed_families_rejected() {
        let err = KeyedStops::new(vec![
            (AttributeValue::from("river"), 1),
            (AttributeValue::Number(3.0), 2),
        ])
        .unwrap_err();
        assert_eq!(err, StyleError::MixedKeyFamilies);
    }

    #[test]
    fn keyed_null_rejected() {
        let err = KeyedStops::new(vec![(AttributeValue::Null, 1)]).unwrap_err();
        assert_eq!(err, StyleError::MixedKeyFamilies);
    }

    #[test]
    fn for_mode_ordered_requires_numbers() {
        let err = AttributeStops::for_mode(
            InterpolationMode::Exponential,
            vec![(AttributeValue::from("river"), 1.0)],
        )
        .unwrap_err();
        assert_eq!(err, StyleError::NonNumericStopKey);

        let ok = AttributeStops::for_mode(
            InterpolationMode::Interval,
            vec![(AttributeValue::Number(2.0), 1.0), (AttributeValue::Number(1.0), 0.0)],
        )
        .unwrap();
        assert!(matches!(ok, AttributeStops::Numeric(_)));
        assert_eq!(ok.len(), 2);
    }

    #[test]
    fn for_mode_categorical_keeps_keys() {
        let ok = AttributeStops::for_mode(
            InterpolationMode::Categorical,
            vec![(AttributeValue::Number(2.0), 1.0)],
        )
        .unwrap();
        assert!(matches!(ok, AttributeStops::Keyed(_)));
    }
}
