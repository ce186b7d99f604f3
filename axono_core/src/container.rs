// Copyright 2026 the Axono Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracked layout container.
//!
//! [`GridContainer`] is the piece a host keeps between frames. It holds the
//! current [`GridParams`] and a record of what changed since the last pass.
//! Setters never recompute anything; they replace state and mark a
//! [`dirty`](crate::dirty) channel. The next [`GridContainer::layout`] call
//! drains every channel and, if anything was marked, runs a full pass from
//! the current inputs.
//!
//! ```rust,ignore
//! container.set_params(container.params().with_ordering(SlotOrdering::Spiral));
//! // ... later, when the host handles its layout request:
//! if let Some(pass) = container.layout(&items, &mut presenter, &mut Tracer::none()) {
//!     host.set_min_size(pass.min_size());
//!     container.draw_overlay(&pass, &mut canvas, &OverlayStyle::default());
//! }
//! ```

#[cfg(feature = "trace-rich")]
use alloc::vec::Vec;

use kurbo::Size;
use understory_dirty::{Channel, CycleHandling, DirtyTracker};

use crate::apply::{LayoutPass, LayoutPresenter, commit, compute_layout};
use crate::dirty;
use crate::item::LayoutItem;
use crate::overlay::{self, DebugCanvas, OverlayStyle};
use crate::params::GridParams;
use crate::trace::{GridBuiltEvent, PassBeginEvent, PassSummary, Tracer};

/// Holds grid parameters and pending invalidations between layout passes.
#[derive(Debug)]
pub struct GridContainer {
    params: GridParams,
    dirty: DirtyTracker<u32>,
    pass_index: u64,
    min_size: Size,
}

impl Default for GridContainer {
    fn default() -> Self {
        Self::new(GridParams::DEFAULT)
    }
}

impl GridContainer {
    /// Creates a container. The first [`layout`](Self::layout) call always
    /// runs.
    #[must_use]
    pub fn new(params: GridParams) -> Self {
        let mut tracker = DirtyTracker::with_cycle_handling(CycleHandling::Error);
        tracker.mark(dirty::CONTAINER_KEY, dirty::PARAMS);
        Self {
            params,
            dirty: tracker,
            pass_index: 0,
            min_size: Size::ZERO,
        }
    }

    /// Current parameters.
    #[inline]
    #[must_use]
    pub fn params(&self) -> &GridParams {
        &self.params
    }

    /// Replaces the parameters and schedules a pass.
    pub fn set_params(&mut self, params: GridParams) {
        self.params = params;
        self.dirty.mark(dirty::CONTAINER_KEY, dirty::PARAMS);
    }

    /// Records that items were added, removed, reordered, or resized.
    pub fn notify_children_changed(&mut self) {
        self.dirty.mark(dirty::CONTAINER_KEY, dirty::CHILDREN);
    }

    /// Records that the item at `index` was shown or hidden.
    ///
    /// Ignored while [`include_hidden`](GridParams::include_hidden) is set,
    /// because visibility then has no effect on participation.
    pub fn notify_visibility_changed(&mut self, index: usize) {
        if !self.params.include_hidden {
            self.dirty.mark(dirty::item_key(index), dirty::VISIBILITY);
        }
    }

    /// Schedules a pass unconditionally.
    pub fn invalidate(&mut self) {
        self.dirty.mark(dirty::CONTAINER_KEY, dirty::PARAMS);
    }

    /// Minimum size reported by the most recent pass.
    #[inline]
    #[must_use]
    pub fn min_size(&self) -> Size {
        self.min_size
    }

    /// Number of passes run so far.
    #[inline]
    #[must_use]
    pub fn pass_count(&self) -> u64 {
        self.pass_index
    }

    /// Runs a layout pass if anything changed since the last one.
    ///
    /// The pass is built from scratch, committed to `presenter`, and
    /// returned. Returns `None` without touching the presenter when nothing
    /// was marked dirty.
    pub fn layout<I: LayoutItem>(
        &mut self,
        items: &[I],
        presenter: &mut dyn LayoutPresenter,
        tracer: &mut Tracer<'_>,
    ) -> Option<LayoutPass> {
        let params_changed = self.drain(dirty::PARAMS) > 0;
        let children_changed = self.drain(dirty::CHILDREN) > 0;
        let visibility_changes = self.drain(dirty::VISIBILITY);
        if !params_changed && !children_changed && visibility_changes == 0 {
            return None;
        }

        let pass_index = self.pass_index;
        self.pass_index += 1;
        tracer.pass_begin(&PassBeginEvent {
            pass_index,
            item_count: items.len(),
            params_changed,
            children_changed,
            visibility_changes,
        });

        let pass = compute_layout(items, &self.params);
        tracer.grid_built(&GridBuiltEvent::new(
            pass_index,
            &pass.state,
            self.params.ordering,
        ));

        commit(&pass, &self.params, presenter);

        #[cfg(feature = "trace-rich")]
        if tracer.is_enabled() {
            let records: Vec<_> = pass
                .placements
                .iter()
                .map(|p| crate::trace::PlacementRecord {
                    item: p.item,
                    slot: p.slot,
                    position: p.position,
                })
                .collect();
            tracer.placements(pass_index, &records);
        }

        self.min_size = pass.min_size();
        tracer.pass_end(&PassSummary {
            pass_index,
            placed: pass.state.placed_count(),
            unplaced: pass.state.unplaced_count(),
            bounds: pass.state.bounds,
            min_size: self.min_size,
            animated: self.params.transition_duration > 0.0,
        });

        Some(pass)
    }

    /// Draws the debug overlay for `pass` if the overlay is enabled and the
    /// canvas reports a design-time context. Returns whether anything was
    /// drawn.
    pub fn draw_overlay(
        &self,
        pass: &LayoutPass,
        canvas: &mut dyn DebugCanvas,
        style: &OverlayStyle,
    ) -> bool {
        if !self.params.debug_overlay || !canvas.is_design_time() {
            return false;
        }
        overlay::draw(&pass.state, canvas, style);
        true
    }

    fn drain(&mut self, channel: Channel) -> usize {
        self.dirty
            .drain(channel)
            .affected()
            .deterministic()
            .run()
            .count()
    }
}
