// Copyright 2026 the Axono Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Debug overlay for a built grid.
//!
//! [`draw`] re-derives row lines, column lines, slot markers, the bounding
//! rectangle, and the origin from a [`GridState`] and issues them as calls on
//! a [`DebugCanvas`]. It never mutates the state.
//!
//! Slot markers are drawn *filled* for the first `N` slots of the ordered
//! slot list, where `N` is the number of participating items, and *empty*
//! for the rest. Hidden items that still participate count as filling their
//! slot.

use kurbo::{Point, Rect};

use crate::grid::GridState;
use crate::params::GridTopology;
use crate::sequence::SlotCoord;

/// Straight RGBA colour, components in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba(pub [f32; 4]);

impl Rgba {
    /// Creates a colour from components.
    #[inline]
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self([r, g, b, a])
    }
}

/// Line colour and width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    /// Line colour.
    pub color: Rgba,
    /// Line width in local units.
    pub width: f64,
}

/// Drawing primitives supplied by the host's editor or debug layer.
pub trait DebugCanvas {
    /// Whether the host is in a design-time (editor) context. Overlays are
    /// only drawn when this returns `true`.
    fn is_design_time(&self) -> bool;

    /// Draws a line segment.
    fn line(&mut self, from: Point, to: Point, stroke: Stroke);

    /// Draws a filled circle.
    fn circle(&mut self, center: Point, radius: f64, color: Rgba);

    /// Draws a rectangle outline.
    fn rect_outline(&mut self, rect: Rect, stroke: Stroke);
}

/// Colours and sizes used by [`draw`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayStyle {
    /// Row and column lines.
    pub grid_line: Stroke,
    /// Marker for slots that hold an item.
    pub filled_slot: Rgba,
    /// Marker for slots left empty.
    pub empty_slot: Rgba,
    /// Slot marker radius.
    pub slot_radius: f64,
    /// Bounding rectangle outline.
    pub bounds: Stroke,
    /// Origin marker.
    pub origin: Rgba,
    /// Origin marker radius.
    pub origin_radius: f64,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            grid_line: Stroke {
                color: Rgba::new(0.5, 0.5, 0.5, 0.5),
                width: 1.0,
            },
            filled_slot: Rgba::new(0.2, 0.8, 0.2, 0.8),
            empty_slot: Rgba::new(0.8, 0.2, 0.2, 0.5),
            slot_radius: 4.0,
            bounds: Stroke {
                color: Rgba::new(1.0, 1.0, 0.0, 0.8),
                width: 2.0,
            },
            origin: Rgba::new(0.2, 0.4, 1.0, 1.0),
            origin_radius: 6.0,
        }
    }
}

/// Draws the overlay for `state` onto `canvas`.
///
/// Order: row lines, column lines (orthogonal grids only, since staggered
/// columns do not line up), slot markers, bounds outline, origin marker.
pub fn draw(state: &GridState, canvas: &mut dyn DebugCanvas, style: &OverlayStyle) {
    let g = &state.geometry;

    for row in 0..g.rows {
        let capacity = g.row_capacity(row);
        if capacity == 0 {
            continue;
        }
        canvas.line(
            g.project(SlotCoord::new(0, row)),
            g.project(SlotCoord::new(capacity - 1, row)),
            style.grid_line,
        );
    }

    if g.topology == GridTopology::Orthogonal && g.rows > 0 {
        for column in 0..g.columns {
            canvas.line(
                g.project(SlotCoord::new(column, 0)),
                g.project(SlotCoord::new(column, g.rows - 1)),
                style.grid_line,
            );
        }
    }

    let filled = state.participating();
    for (rank, slot) in state.slots.iter().enumerate() {
        let color = if rank < filled {
            style.filled_slot
        } else {
            style.empty_slot
        };
        canvas.circle(g.project(*slot), style.slot_radius, color);
    }

    canvas.rect_outline(state.bounds, style.bounds);
    canvas.circle(g.origin, style.origin_radius, style.origin);
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::item::ItemDesc;
    use crate::params::{GridParams, SlotOrdering};

    #[derive(Default)]
    struct Counter {
        lines: Vec<(Point, Point)>,
        circles: Vec<(Point, Rgba)>,
        rects: usize,
    }

    impl DebugCanvas for Counter {
        fn is_design_time(&self) -> bool {
            true
        }

        fn line(&mut self, from: Point, to: Point, _stroke: Stroke) {
            self.lines.push((from, to));
        }

        fn circle(&mut self, center: Point, _radius: f64, color: Rgba) {
            self.circles.push((center, color));
        }

        fn rect_outline(&mut self, _rect: Rect, _stroke: Stroke) {
            self.rects += 1;
        }
    }

    #[test]
    fn orthogonal_draws_rows_and_columns() {
        let params = GridParams::DEFAULT.with_dimensions(3, 2);
        let state = GridState::build(&[ItemDesc::new(10.0, 10.0); 4], &params);
        let mut c = Counter::default();
        draw(&state, &mut c, &OverlayStyle::default());
        assert_eq!(c.lines.len(), 2 + 3, "two rows, three columns");
        // Six slot markers plus the origin.
        assert_eq!(c.circles.len(), 7);
        assert_eq!(c.rects, 1);
    }

    #[test]
    fn staggered_skips_column_lines() {
        let params = GridParams::hexagonal().with_dimensions(3, 3);
        let state = GridState::build(&[ItemDesc::new(10.0, 10.0); 2], &params);
        let mut c = Counter::default();
        draw(&state, &mut c, &OverlayStyle::default());
        assert_eq!(c.lines.len(), 3, "row lines only");
    }

    #[test]
    fn empty_staggered_rows_draw_no_line() {
        let params = GridParams::hexagonal().with_dimensions(1, 2);
        let state = GridState::build(&[ItemDesc::new(10.0, 10.0)], &params);
        let mut c = Counter::default();
        draw(&state, &mut c, &OverlayStyle::default());
        assert_eq!(c.lines.len(), 1, "row 0 has no slots");
    }

    #[test]
    fn markers_filled_by_rank() {
        let style = OverlayStyle::default();
        let params = GridParams::DEFAULT
            .with_dimensions(2, 2)
            .with_ordering(SlotOrdering::BottomUp);
        let state = GridState::build(&[ItemDesc::new(10.0, 10.0); 3], &params);
        let mut c = Counter::default();
        draw(&state, &mut c, &style);
        let markers = &c.circles[..4];
        assert_eq!(markers.iter().filter(|(_, col)| *col == style.filled_slot).count(), 3);
        // The one empty slot is the last in fill order: top-right.
        assert_eq!(markers[3].0, state.geometry.project(SlotCoord::new(1, 0)));
        assert_eq!(markers[3].1, style.empty_slot);
    }

    #[test]
    fn empty_grid_draws_bounds_and_origin_only() {
        let state = GridState::build::<ItemDesc>(&[], &GridParams::DEFAULT);
        let mut c = Counter::default();
        draw(&state, &mut c, &OverlayStyle::default());
        assert!(c.lines.is_empty());
        assert_eq!(c.circles.len(), 1);
        assert_eq!(c.rects, 1);
    }
}
