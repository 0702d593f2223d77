// Copyright 2026 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for style evaluation.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! evaluation instrumentation calls. All method bodies default to no-ops, so
//! implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing (zero
//! overhead). When **on**, each method performs a single `Option` branch
//! before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).

use crate::function::Resolution;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted for each traced style value evaluation.
#[derive(Clone, Copy, Debug)]
pub struct EvaluationEvent {
    /// How the output value was produced.
    pub resolution: Resolution,
}

/// Emitted when a property store drains its accumulated binding changes.
#[derive(Clone, Copy, Debug)]
pub struct BindingChangesEvent {
    /// Number of slots whose bound value was replaced.
    pub values: usize,
    /// Number of slots bound since the last drain.
    pub added: usize,
    /// Number of slots unbound since the last drain.
    pub removed: usize,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from style evaluation.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called for each traced evaluation.
    fn on_evaluation(&mut self, e: &EvaluationEvent) {
        _ = e;
    }

    /// Called when a property store drains its binding changes.
    fn on_binding_changes(&mut self, e: &BindingChangesEvent) {
        _ = e;
    }
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits an [`EvaluationEvent`].
    #[inline]
    pub fn evaluation(&mut self, e: &EvaluationEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_evaluation(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`BindingChangesEvent`].
    #[inline]
    pub fn binding_changes(&mut self, e: &BindingChangesEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_binding_changes(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_evaluation(&EvaluationEvent {
            resolution: Resolution::Constant,
        });
        sink.on_binding_changes(&BindingChangesEvent {
            values: 0,
            added: 0,
            removed: 0,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.evaluation(&EvaluationEvent {
            resolution: Resolution::Stop,
        });
        tracer.binding_changes(&BindingChangesEvent {
            values: 1,
            added: 2,
            removed: 3,
        });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            resolutions: Vec<Resolution>,
        }
        impl TraceSink for RecordingSink {
            fn on_evaluation(&mut self, e: &EvaluationEvent) {
                self.resolutions.push(e.resolution);
            }
        }

        let mut sink = RecordingSink {
            resolutions: Vec::new(),
        };
        let mut tracer = Tracer::new(&mut sink);
        tracer.evaluation(&EvaluationEvent {
            resolution: Resolution::Default,
        });
        drop(tracer);
        assert_eq!(sink.resolutions, &[Resolution::Default]);
    }
}
