// Copyright 2026 the Axono Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid construction, slot projection, and bounds.
//!
//! A pass starts with [`GridState::build`], which resolves the grid
//! dimensions, measures the base cell, derives the axis vectors and origin,
//! sequences the slots, and computes the bounding rectangle. The result is a
//! self-contained snapshot; nothing in it survives to the next pass.
//!
//! # Projection
//!
//! A slot maps to a point in the container's local space as
//!
//! ```text
//! origin + axis_x * (column + stagger) * unit_x + axis_y * row * unit_y
//! ```
//!
//! where `stagger` is `0.5` on staggered rows and `0` otherwise. Axis angles
//! use screen convention: 0° points along +X and 90° points down (+Y).
//! [`GridGeometry::project`] is the only implementation of this formula;
//! bounds, placement, and the debug overlay all go through it.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size, Vec2};

use crate::item::LayoutItem;
use crate::params::{Containment, GridParams, GridTopology, StaggerParity};
use crate::sequence::{self, SlotCoord};

/// Floor for the base cell size, so empty or zero-sized items still produce
/// a non-degenerate grid.
pub const DEFAULT_MIN_CELL: f64 = 64.0;

/// Everything needed to project a slot to a point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridGeometry {
    /// Resolved column count (at least 1).
    pub columns: u32,
    /// Resolved row count.
    pub rows: u32,
    /// Uniform or staggered rows.
    pub topology: GridTopology,
    /// Which rows are staggered.
    pub stagger_parity: StaggerParity,
    /// Position of slot `(0, 0)` before any stagger offset.
    pub origin: Point,
    /// Unit direction of axis X.
    pub axis_x: Vec2,
    /// Unit direction of axis Y.
    pub axis_y: Vec2,
    /// Pitch between adjacent columns.
    pub unit_x: f64,
    /// Pitch between adjacent rows.
    pub unit_y: f64,
}

impl GridGeometry {
    /// Derives the geometry of a `columns` x `rows` grid of `cell`-sized
    /// cells under `params`.
    #[must_use]
    pub fn new(columns: u32, rows: u32, cell: Size, params: &GridParams) -> Self {
        let axis_x = axis_direction(params.angle_x);
        let axis_y = axis_direction(params.angle_y);
        let unit_x = cell.width * params.spacing_x;
        let unit_y = cell.height * params.spacing_y;

        let origin = match params.containment {
            Containment::TopLeft => Point::ZERO,
            Containment::Centered => {
                let span_x = f64::from(columns.saturating_sub(1)) * unit_x;
                let span_y = f64::from(rows.saturating_sub(1)) * unit_y;
                Point::ZERO - axis_x * (span_x / 2.0) - axis_y * (span_y / 2.0)
            }
        };

        Self {
            columns,
            rows,
            topology: params.topology,
            stagger_parity: params.stagger_parity,
            origin,
            axis_x,
            axis_y,
            unit_x,
            unit_y,
        }
    }

    /// Whether `row` is shifted by half a unit.
    #[inline]
    #[must_use]
    pub const fn is_row_staggered(&self, row: u32) -> bool {
        sequence::is_row_staggered(row, self.topology, self.stagger_parity)
    }

    /// Number of slots in `row`.
    #[inline]
    #[must_use]
    pub const fn row_capacity(&self, row: u32) -> u32 {
        sequence::row_capacity(row, self.columns, self.topology, self.stagger_parity)
    }

    /// Maps a slot to its point in local space.
    #[must_use]
    pub fn project(&self, slot: SlotCoord) -> Point {
        let stagger = if self.is_row_staggered(slot.row) {
            0.5
        } else {
            0.0
        };
        self.origin
            + self.axis_x * ((f64::from(slot.column) + stagger) * self.unit_x)
            + self.axis_y * (f64::from(slot.row) * self.unit_y)
    }
}

/// Unit vector at `degrees`, screen convention (90° points down).
fn axis_direction(degrees: f64) -> Vec2 {
    Vec2::from_angle(degrees.to_radians())
}

/// The rectangle an item of `size` covers when placed at `anchor`.
///
/// Centred containment anchors the item by its centre; top-left containment
/// anchors it by its top-left corner.
#[inline]
#[must_use]
pub fn footprint(anchor: Point, size: Size, containment: Containment) -> Rect {
    match containment {
        Containment::Centered => Rect::from_center_size(anchor, size),
        Containment::TopLeft => Rect::from_origin_size(anchor, size),
    }
}

/// Smallest rectangle containing the local origin and the footprint of every
/// `(size, slot)` pair. Pairs are walked in order and stop at the shorter
/// slice.
#[must_use]
pub fn bounds(
    geometry: &GridGeometry,
    sizes: &[Size],
    slots: &[SlotCoord],
    containment: Containment,
) -> Rect {
    sizes
        .iter()
        .zip(slots)
        .fold(Rect::ZERO, |acc, (size, slot)| {
            acc.union(footprint(geometry.project(*slot), *size, containment))
        })
}

/// Snapshot of one layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct GridState {
    /// Projection parameters.
    pub geometry: GridGeometry,
    /// Base cell size (component-wise max of participating footprints,
    /// floored at [`DEFAULT_MIN_CELL`]).
    pub cell_size: Size,
    /// Anchoring used for footprints and placement.
    pub containment: Containment,
    /// Indices of participating items, in input order.
    pub items: Vec<usize>,
    /// Footprints of participating items, parallel to `items`.
    pub item_sizes: Vec<Size>,
    /// Slots in fill order.
    pub slots: Vec<SlotCoord>,
    /// Bounding rectangle of every placed footprint and the local origin.
    pub bounds: Rect,
}

impl GridState {
    /// Runs the grid builder, slot sequencer, and bounds calculator for
    /// `items` under `params`.
    ///
    /// Hidden items are skipped entirely unless
    /// [`include_hidden`](GridParams::include_hidden) is set, in which case
    /// they occupy a slot like any other item. With no participating items
    /// the grid has zero rows, no slots, and zero-sized bounds.
    #[must_use]
    pub fn build<I: LayoutItem>(items: &[I], params: &GridParams) -> Self {
        let mut indices = Vec::new();
        let mut item_sizes = Vec::new();
        for (idx, item) in items.iter().enumerate() {
            if !params.include_hidden && !item.is_visible() {
                continue;
            }
            let size = item.min_size();
            indices.push(idx);
            // `f64::max` drops NaN in favour of the other operand.
            item_sizes.push(Size::new(size.width.max(0.0), size.height.max(0.0)));
        }

        let cell_size = item_sizes.iter().fold(
            Size::new(DEFAULT_MIN_CELL, DEFAULT_MIN_CELL),
            |acc, s| Size::new(acc.width.max(s.width), acc.height.max(s.height)),
        );

        let columns = params.resolved_columns();
        let rows = if indices.is_empty() {
            0
        } else {
            params.resolved_rows(indices.len())
        };

        let geometry = GridGeometry::new(columns, rows, cell_size, params);
        let slots = sequence::sequence(
            columns,
            rows,
            params.topology,
            params.stagger_parity,
            params.ordering,
        );
        let bounds = bounds(&geometry, &item_sizes, &slots, params.containment);

        Self {
            geometry,
            cell_size,
            containment: params.containment,
            items: indices,
            item_sizes,
            slots,
            bounds,
        }
    }

    /// Number of participating items.
    #[inline]
    #[must_use]
    pub fn participating(&self) -> usize {
        self.items.len()
    }

    /// Number of slots in the grid.
    #[inline]
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of participating items that receive a slot.
    #[inline]
    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.items.len().min(self.slots.len())
    }

    /// Number of participating items left without a slot.
    #[inline]
    #[must_use]
    pub fn unplaced_count(&self) -> usize {
        self.items.len() - self.placed_count()
    }

    /// Minimum container size: the extent of the bounds measured from the
    /// local origin (`bounds.size + bounds.position`).
    #[must_use]
    pub fn min_size(&self) -> Size {
        Size::new(
            self.bounds.width() + self.bounds.x0,
            self.bounds.height() + self.bounds.y0,
        )
    }
}
