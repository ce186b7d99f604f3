// Copyright 2026 the Axono Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for layout passes.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! layout pipeline calls at each stage. All method bodies default to no-ops,
//! so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing. When **on**, each
//! method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).
//! - `trace-rich` (implies `trace`): gates per-item [`PlacementRecord`]
//!   batches and the corresponding `TraceSink` method.

use kurbo::{Point, Rect, Size};

use crate::grid::GridState;
use crate::params::{GridTopology, SlotOrdering};
#[cfg(feature = "trace-rich")]
use crate::sequence::SlotCoord;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a layout pass starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PassBeginEvent {
    /// Monotonic pass counter.
    pub pass_index: u64,
    /// Number of items handed to the pass (before visibility filtering).
    pub item_count: usize,
    /// Grid parameters were replaced since the last pass.
    pub params_changed: bool,
    /// The item set changed since the last pass.
    pub children_changed: bool,
    /// Number of items whose visibility change triggered the pass.
    pub visibility_changes: usize,
}

/// Emitted after the grid has been built and sequenced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridBuiltEvent {
    /// Pass counter.
    pub pass_index: u64,
    /// Number of participating items.
    pub participating: usize,
    /// Resolved column count.
    pub columns: u32,
    /// Resolved row count.
    pub rows: u32,
    /// Number of slots.
    pub slot_count: usize,
    /// Uniform or staggered rows.
    pub topology: GridTopology,
    /// Fill order.
    pub ordering: SlotOrdering,
    /// Base cell size.
    pub cell_size: Size,
    /// Grid origin.
    pub origin: Point,
}

impl GridBuiltEvent {
    /// Creates a `GridBuiltEvent` from a built [`GridState`] plus the fill
    /// order (which the state does not carry).
    #[must_use]
    pub fn new(pass_index: u64, state: &GridState, ordering: SlotOrdering) -> Self {
        Self {
            pass_index,
            participating: state.participating(),
            columns: state.geometry.columns,
            rows: state.geometry.rows,
            slot_count: state.slot_count(),
            topology: state.geometry.topology,
            ordering,
            cell_size: state.cell_size,
            origin: state.geometry.origin,
        }
    }
}

/// Emitted once the pass has been committed to the presenter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PassSummary {
    /// Pass counter.
    pub pass_index: u64,
    /// Items that received a slot.
    pub placed: usize,
    /// Participating items left without a slot.
    pub unplaced: usize,
    /// Bounding rectangle.
    pub bounds: Rect,
    /// Minimum container size reported to the host.
    pub min_size: Size,
    /// Whether placements were issued as transitions.
    pub animated: bool,
}

/// One placed item (requires `trace-rich`).
#[cfg(feature = "trace-rich")]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementRecord {
    /// Item index.
    pub item: usize,
    /// Assigned slot.
    pub slot: SlotCoord,
    /// Target top-left position.
    pub position: Point,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the layout pipeline.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a layout pass starts.
    fn on_pass_begin(&mut self, e: &PassBeginEvent) {
        _ = e;
    }

    /// Called after the grid is built.
    fn on_grid_built(&mut self, e: &GridBuiltEvent) {
        _ = e;
    }

    /// Called after the pass has been committed.
    fn on_pass_end(&mut self, s: &PassSummary) {
        _ = s;
    }

    /// Called with every placement of a pass (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    fn on_placements(&mut self, pass_index: u64, placements: &[PlacementRecord]) {
        _ = (pass_index, placements);
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
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

    /// Emits a [`PassBeginEvent`].
    #[inline]
    pub fn pass_begin(&mut self, e: &PassBeginEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_pass_begin(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`GridBuiltEvent`].
    #[inline]
    pub fn grid_built(&mut self, e: &GridBuiltEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_grid_built(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PassSummary`].
    #[inline]
    pub fn pass_end(&mut self, s: &PassSummary) {
        #[cfg(feature = "trace")]
        if let Some(sink) = &mut self.sink {
            sink.on_pass_end(s);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = s;
        }
    }

    /// Emits placement records (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    #[inline]
    pub fn placements(&mut self, pass_index: u64, placements: &[PlacementRecord]) {
        if let Some(s) = &mut self.sink {
            s.on_placements(pass_index, placements);
        }
    }

    /// Whether events reach a sink. Always `false` without the `trace`
    /// feature.
    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        #[cfg(feature = "trace")]
        {
            self.sink.is_some()
        }
        #[cfg(not(feature = "trace"))]
        {
            false
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemDesc;
    use crate::params::GridParams;

    fn sample_begin() -> PassBeginEvent {
        PassBeginEvent {
            pass_index: 3,
            item_count: 4,
            params_changed: true,
            children_changed: false,
            visibility_changes: 0,
        }
    }

    #[test]
    fn grid_built_event_from_state() {
        let state = GridState::build(&[ItemDesc::new(10.0, 10.0); 5], &GridParams::DEFAULT);
        let evt = GridBuiltEvent::new(9, &state, SlotOrdering::Spiral);
        assert_eq!(evt.pass_index, 9);
        assert_eq!(evt.participating, 5);
        assert_eq!(evt.columns, 3);
        assert_eq!(evt.rows, 2);
        assert_eq!(evt.slot_count, 6);
        assert_eq!(evt.ordering, SlotOrdering::Spiral);
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_pass_begin(&sample_begin());
        sink.on_pass_end(&PassSummary {
            pass_index: 0,
            placed: 0,
            unplaced: 0,
            bounds: Rect::ZERO,
            min_size: Size::ZERO,
            animated: false,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.pass_begin(&sample_begin());
        assert!(!tracer.is_enabled());
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            passes: Vec<u64>,
        }
        impl TraceSink for RecordingSink {
            fn on_pass_begin(&mut self, e: &PassBeginEvent) {
                self.passes.push(e.pass_index);
            }
        }

        let mut sink = RecordingSink { passes: Vec::new() };
        let mut tracer = Tracer::new(&mut sink);
        assert!(tracer.is_enabled());
        tracer.pass_begin(&sample_begin());
        // Access sink after tracer is dropped.
        drop(tracer);
        assert_eq!(sink.passes, &[3]);
    }
}
