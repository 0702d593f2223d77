// Copyright 2026 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording and pretty-printing for graticule style evaluation
//! diagnostics.
//!
//! This crate provides [`TraceSink`](graticule_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`] — human-readable one-line-per-event output.
//! - [`recorder::EventRecorder`] — in-memory recording with per-resolution
//!   counters and JSON export.

pub mod pretty;
pub mod recorder;
