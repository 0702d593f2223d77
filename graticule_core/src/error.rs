// Copyright 2026 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time errors.
//!
//! Every failure mode here is fatal to the factory call that raised it: no
//! instance is produced and a style-document parser must surface the error
//! rather than proceed with a half-valid function. Evaluation itself never
//! fails — unresolved lookups walk the fallback chain (matched stop →
//! configured default → the type's zero value) and always return a value.

use core::fmt;

use crate::attribute::AttributeValue;

/// An error raised while constructing a style function.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleError {
    /// The exponential interpolation base was zero, negative, or non-finite.
    NonPositiveBase {
        /// The rejected base.
        base: f64,
    },
    /// A function that requires stops was given none.
    EmptyStops,
    /// Two stops on an ordered axis shared the same numeric key.
    DuplicateNumericKey {
        /// The duplicated key.
        key: f64,
    },
    /// Two stops on an equality axis shared the same key.
    DuplicateCategoricalKey {
        /// The duplicated key.
        key: AttributeValue,
    },
    /// A numeric stop key was NaN or infinite.
    NonFiniteNumericKey {
        /// The rejected key.
        key: f64,
    },
    /// An ordered (exponential or interval) attribute axis was given a
    /// non-numeric stop key.
    NonNumericStopKey,
    /// Stop keys within one collection belonged to different families and
    /// are not mutually comparable.
    MixedKeyFamilies,
    /// Exponential mode was requested over a value type that does not
    /// support blending.
    NotInterpolatable,
    /// Identity mode was requested for a camera function; zoom is never
    /// itself a stylable output.
    IdentityZoom,
    /// A source or composite function was given an empty attribute name.
    EmptyAttributeName,
    /// A default value was supplied to a camera function, which never
    /// carries one.
    DefaultOnCameraFunction,
    /// A stop value was itself a function rather than a constant.
    NestedFunction,
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveBase { base } => {
                write!(f, "interpolation base must be a positive finite number, got {base}")
            }
            Self::EmptyStops => write!(f, "function requires at least one stop"),
            Self::DuplicateNumericKey { key } => {
                write!(f, "duplicate stop at key {key}")
            }
            Self::DuplicateCategoricalKey { key } => {
                write!(f, "duplicate stop for key {key:?}")
            }
            Self::NonFiniteNumericKey { key } => {
                write!(f, "numeric stop keys must be finite, got {key}")
            }
            Self::NonNumericStopKey => {
                write!(f, "ordered interpolation requires numeric stop keys")
            }
            Self::MixedKeyFamilies => {
                write!(f, "stop keys must all belong to one comparable family")
            }
            Self::NotInterpolatable => {
                write!(f, "exponential interpolation requires a blendable value type")
            }
            Self::IdentityZoom => {
                write!(f, "identity mode is not applicable to the zoom axis")
            }
            Self::EmptyAttributeName => {
                write!(f, "source and composite functions require an attribute name")
            }
            Self::DefaultOnCameraFunction => {
                write!(f, "camera functions do not take a default value")
            }
            Self::NestedFunction => {
                write!(f, "stop values must be constants, not functions")
            }
        }
    }
}

impl core::error::Error for StyleError {}
