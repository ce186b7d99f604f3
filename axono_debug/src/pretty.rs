// Copyright 2026 the Axono Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use axono_core::trace::{GridBuiltEvent, PassBeginEvent, PassSummary, PlacementRecord, TraceSink};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    verbose: bool,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("verbose", &self.verbose)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
            verbose: false,
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self {
            writer,
            verbose: false,
        }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            verbose: false,
        }
    }

    /// Also print one line per placed item.
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Consumes the sink and returns the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_pass_begin(&mut self, e: &PassBeginEvent) {
        let _ = writeln!(
            self.writer,
            "[pass:begin] pass={} items={} params={} children={} visibility={}",
            e.pass_index,
            e.item_count,
            e.params_changed,
            e.children_changed,
            e.visibility_changes,
        );
    }

    fn on_grid_built(&mut self, e: &GridBuiltEvent) {
        let _ = writeln!(
            self.writer,
            "[grid] pass={} {}x{} {:?} {:?} slots={} participating={} cell={:.1}x{:.1} \
             origin=({:.1}, {:.1})",
            e.pass_index,
            e.columns,
            e.rows,
            e.topology,
            e.ordering,
            e.slot_count,
            e.participating,
            e.cell_size.width,
            e.cell_size.height,
            e.origin.x,
            e.origin.y,
        );
    }

    fn on_pass_end(&mut self, s: &PassSummary) {
        let mode = if s.animated { "animated" } else { "direct" };
        let _ = writeln!(
            self.writer,
            "[pass:end] pass={} placed={} unplaced={} bounds=({:.1}, {:.1})-({:.1}, {:.1}) \
             min={:.1}x{:.1} {mode}",
            s.pass_index,
            s.placed,
            s.unplaced,
            s.bounds.x0,
            s.bounds.y0,
            s.bounds.x1,
            s.bounds.y1,
            s.min_size.width,
            s.min_size.height,
        );
    }

    fn on_placements(&mut self, pass_index: u64, placements: &[PlacementRecord]) {
        let _ = writeln!(
            self.writer,
            "[placements] pass={pass_index} count={}",
            placements.len(),
        );
        if self.verbose {
            for p in placements {
                let _ = writeln!(
                    self.writer,
                    "  item={} slot=({}, {}) at ({:.1}, {:.1})",
                    p.item, p.slot.column, p.slot.row, p.position.x, p.position.y,
                );
            }
        }
    }
}
