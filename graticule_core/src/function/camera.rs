// Copyright 2026 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom-driven style functions.

use alloc::vec::Vec;

use crate::error::StyleError;
use crate::stops::NumericStops;
use crate::style_type::StyleType;

use super::{InterpolationMode, Resolution, blend_numeric, step_numeric, validate_base};

/// A style function keyed on the camera's zoom level.
///
/// Construction validates the stops once; evaluation is a pure read the
/// renderer may call per frame from any number of threads.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraFunction<T> {
    mode: InterpolationMode,
    base: f64,
    stops: NumericStops<T>,
}

impl<T: StyleType> CameraFunction<T> {
    /// Creates a camera function from zoom stops in arbitrary order.
    ///
    /// Rejects identity mode (zoom is never itself a stylable output),
    /// exponential mode over a non-blendable `T`, a non-positive `base`,
    /// and empty, duplicate, or non-finite stops.
    pub fn new(
        mode: InterpolationMode,
        stops: Vec<(f64, T)>,
        base: f64,
    ) -> Result<Self, StyleError> {
        if mode == InterpolationMode::Identity {
            return Err(StyleError::IdentityZoom);
        }
        if mode == InterpolationMode::Exponential && !T::INTERPOLATABLE {
            return Err(StyleError::NotInterpolatable);
        }
        validate_base(base)?;
        Ok(Self {
            mode,
            base,
            stops: NumericStops::new(stops)?,
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

    /// The number of stops.
    #[must_use]
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Evaluates the function at `zoom`.
    #[must_use]
    pub fn evaluate(&self, zoom: f64) -> T {
        self.resolve(zoom).0
    }

    /// Evaluates the function at `zoom`, reporting how the output was
    /// produced.
    #[must_use]
    pub fn resolve(&self, zoom: f64) -> (T, Resolution) {
        match self.mode {
            InterpolationMode::Exponential => {
                (blend_numeric(&self.stops, self.base, zoom), Resolution::Stop)
            }
            InterpolationMode::Interval => (step_numeric(&self.stops, zoom), Resolution::Stop),
            InterpolationMode::Categorical => match self.stops.exact_index(zoom) {
                Some(i) => (self.stops.value_at(i).clone(), Resolution::Stop),
                // Camera functions carry no default; an unmatched zoom
                // resolves to the type's zero value.
                None => (T::default(), Resolution::Zero),
            },
            // Rejected at construction.
            InterpolationMode::Identity => (T::default(), Resolution::Zero),
        }
    }
}
