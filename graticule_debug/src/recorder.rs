// Copyright 2026 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording with per-resolution counters.
//!
//! [`EventRecorder`] implements [`TraceSink`] and keeps every event plus a
//! running count of evaluations per [`Resolution`]. The counters answer
//! the common style-debugging question — how often a property fell through
//! to its default or zero value — and [`to_json`](EventRecorder::to_json)
//! exports the whole recording for offline inspection.

use graticule_core::function::Resolution;
use graticule_core::trace::{BindingChangesEvent, EvaluationEvent, TraceSink};
use serde_json::{Value, json};

use crate::pretty::resolution_name;

/// A recorded trace event.
#[derive(Clone, Copy, Debug)]
pub enum RecordedEvent {
    /// An [`EvaluationEvent`].
    Evaluation(EvaluationEvent),
    /// A [`BindingChangesEvent`].
    BindingChanges(BindingChangesEvent),
}

/// A [`TraceSink`] that records events in memory.
#[derive(Debug, Default)]
pub struct EventRecorder {
    events: Vec<RecordedEvent>,
    by_resolution: [u64; 5],
}

impl EventRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded events, in arrival order.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Total number of recorded evaluations.
    #[must_use]
    pub fn evaluation_count(&self) -> u64 {
        self.by_resolution.iter().sum()
    }

    /// Number of recorded evaluations that resolved the given way.
    #[must_use]
    pub fn resolution_count(&self, resolution: Resolution) -> u64 {
        self.by_resolution[resolution_index(resolution)]
    }

    /// Exports the recording as a JSON value.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let binding_changes: Vec<Value> = self
            .events
            .iter()
            .filter_map(|event| match event {
                RecordedEvent::BindingChanges(e) => Some(json!({
                    "values": e.values,
                    "added": e.added,
                    "removed": e.removed,
                })),
                RecordedEvent::Evaluation(_) => None,
            })
            .collect();
        json!({
            "evaluations": self.evaluation_count(),
            "resolutions": {
                "constant": self.resolution_count(Resolution::Constant),
                "stop": self.resolution_count(Resolution::Stop),
                "identity": self.resolution_count(Resolution::Identity),
                "default": self.resolution_count(Resolution::Default),
                "zero": self.resolution_count(Resolution::Zero),
            },
            "binding_changes": binding_changes,
        })
    }

    /// Clears the recording.
    pub fn clear(&mut self) {
        self.events.clear();
        self.by_resolution = [0; 5];
    }
}

impl TraceSink for EventRecorder {
    fn on_evaluation(&mut self, e: &EvaluationEvent) {
        self.by_resolution[resolution_index(e.resolution)] += 1;
        self.events.push(RecordedEvent::Evaluation(*e));
    }

    fn on_binding_changes(&mut self, e: &BindingChangesEvent) {
        self.events.push(RecordedEvent::BindingChanges(*e));
    }
}

/// Maps a [`Resolution`] to a counter index.
const fn resolution_index(resolution: Resolution) -> usize {
    match resolution {
        Resolution::Constant => 0,
        Resolution::Stop => 1,
        Resolution::Identity => 2,
        Resolution::Default => 3,
        Resolution::Zero => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graticule_core::attribute::FeatureAttributes;
    use graticule_core::trace::Tracer;
    use graticule_core::value::StyleValue;

    #[test]
    fn counts_resolutions() {
        let mut rec = EventRecorder::new();
        rec.on_evaluation(&EvaluationEvent {
            resolution: Resolution::Stop,
        });
        rec.on_evaluation(&EvaluationEvent {
            resolution: Resolution::Stop,
        });
        rec.on_evaluation(&EvaluationEvent {
            resolution: Resolution::Default,
        });
        assert_eq!(rec.evaluation_count(), 3);
        assert_eq!(rec.resolution_count(Resolution::Stop), 2);
        assert_eq!(rec.resolution_count(Resolution::Default), 1);
        assert_eq!(rec.resolution_count(Resolution::Zero), 0);
    }

    #[test]
    fn records_traced_evaluations() {
        let value = StyleValue::constant(2.5);
        let mut rec = EventRecorder::new();
        let mut tracer = Tracer::new(&mut rec);
        let out = value.evaluate_traced(4.0, &FeatureAttributes::new(), &mut tracer);
        drop(tracer);
        assert_eq!(out, 2.5);
        assert_eq!(rec.evaluation_count(), 1);
        assert_eq!(rec.resolution_count(Resolution::Constant), 1);
    }

    #[test]
    fn json_export_includes_counters_and_changes() {
        let mut rec = EventRecorder::new();
        rec.on_evaluation(&EvaluationEvent {
            resolution: Resolution::Zero,
        });
        rec.on_binding_changes(&BindingChangesEvent {
            values: 2,
            added: 1,
            removed: 0,
        });
        let exported = rec.to_json();
        assert_eq!(exported["evaluations"], 1);
        assert_eq!(exported["resolutions"]["zero"], 1);
        assert_eq!(exported["binding_changes"][0]["values"], 2);
    }

    #[test]
    fn clear_resets_everything() {
        let mut rec = EventRecorder::new();
        rec.on_evaluation(&EvaluationEvent {
            resolution: Resolution::Stop,
        });
        rec.clear();
        assert!(rec.events().is_empty());
        assert_eq!(rec.evaluation_count(), 0);
    }
}
