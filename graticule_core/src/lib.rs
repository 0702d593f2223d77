// Copyright 2026 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for zoom- and attribute-driven map style evaluation.
//!
//! `graticule_core` represents the value of a map style-layer property as a
//! [`StyleValue`](value::StyleValue): a constant, or a function of the
//! camera's zoom level, of one feature attribute, or of both. It is
//! `no_std` compatible (with `alloc`). Values are validated once at
//! construction and immutable afterward, so any number of rendering threads
//! may evaluate them concurrently; evaluation is total and falls back to a
//! configured default or the property type's zero value rather than
//! failing.
//!
//! # Architecture
//!
//! A style document binds property values, the render loop evaluates them
//! per frame:
//!
//! ```text
//!   StyleValue::camera()/source()/composite() ──► StyleValue
//!                                                     │
//!   PropertyStore::bind() ◄───────────────────────────┘
//!        │
//!        ▼
//!   evaluate(zoom, feature) ──► T          drain_changes() ──► PropertyChanges
//! ```
//!
//! **[`value`]** — The [`StyleValue`](value::StyleValue) sum type, its
//! factory constructors, and total evaluation with resolution reporting.
//!
//! **[`function`]** — The camera, source, and composite function variants,
//! their shared [`InterpolationMode`](function::InterpolationMode), and the
//! exponential interpolation curve.
//!
//! **[`stops`]** — Validated stop collections: sorted numeric axes with
//! binary-search lookup, and equality-keyed categorical collections.
//!
//! **[`style_type`]** — The [`StyleType`](style_type::StyleType) trait that
//! property output types implement, with blending and attribute coercion.
//!
//! **[`attribute`]** — Dynamically typed feature attribute values and the
//! per-feature attribute map.
//!
//! **[`color`]** — An interpolatable RGBA color property type.
//!
//! **[`slot`]** — Generational-handle slot storage binding style values to
//! layer properties, with drained change lists for incremental re-upload.
//!
//! **[`dirty`]** — Multi-channel dirty tracking via `understory_dirty`
//! backing the slot store's change lists.
//!
//! **[`error`]** — Construction-time validation errors. Evaluation itself
//! never fails.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types
//! for evaluation instrumentation, with zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one
//!   branch per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod attribute;
pub mod color;
pub mod dirty;
pub mod error;
pub mod function;
pub mod slot;
pub mod stops;
pub mod style_type;
pub mod trace;
pub mod value;
