// Copyright 2026 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per
//! event to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use graticule_core::function::Resolution;
use graticule_core::trace::{BindingChangesEvent, EvaluationEvent, TraceSink};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }
}

pub(crate) fn resolution_name(resolution: Resolution) -> &'static str {
    match resolution {
        Resolution::Constant => "constant",
        Resolution::Stop => "stop",
        Resolution::Identity => "identity",
        Resolution::Default => "default",
        Resolution::Zero => "zero",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_evaluation(&mut self, e: &EvaluationEvent) {
        let _ = writeln!(
            self.writer,
            "[eval] resolved={}",
            resolution_name(e.resolution),
        );
    }

    fn on_binding_changes(&mut self, e: &BindingChangesEvent) {
        let _ = writeln!(
            self.writer,
            "[bindings] values={} added={} removed={}",
            e.values, e.added, e.removed,
        );
    }
}
