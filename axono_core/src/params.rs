// Copyright 2026 the Axono Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid parameters.
//!
//! [`GridParams`] is the complete, immutable input to one layout pass. Hosts
//! never mutate it field-by-field while a pass is running; they build a new
//! value (directly or with the `with_*` helpers) and hand it to
//! [`GridContainer::set_params`](crate::container::GridContainer::set_params),
//! which marks the container dirty.
//!
//! No value is ever rejected. The column count is clamped to at least one
//! when resolved, a row count of zero means "derive from the item count",
//! and angles outside `[-360, 360]` simply wrap through the trigonometry.

use crate::transition::Easing;

/// Whether every row holds the same number of slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GridTopology {
    /// Every row has `columns` slots.
    #[default]
    Orthogonal,
    /// Rows matching the [`StaggerParity`] lose one slot and are shifted by
    /// half a unit along axis X, producing a brick or hex pattern.
    Staggered,
}

/// Which rows are staggered when the topology is [`GridTopology::Staggered`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StaggerParity {
    /// Rows 0, 2, 4, ... are staggered.
    #[default]
    Even,
    /// Rows 1, 3, 5, ... are staggered.
    Odd,
}

impl StaggerParity {
    /// Returns `true` if `row` has this parity.
    #[inline]
    #[must_use]
    pub const fn matches(self, row: u32) -> bool {
        match self {
            Self::Even => row % 2 == 0,
            Self::Odd => row % 2 == 1,
        }
    }
}

/// The policy deciding which slot receives the Nth item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SlotOrdering {
    /// Row-major: row by row from the top, columns left to right.
    #[default]
    Standard,
    /// Nearest to the grid centre first.
    Spiral,
    /// The standard sequence, back to front.
    Reverse,
    /// Bottom row first, columns left to right.
    BottomUp,
}

/// How the whole arrangement is anchored relative to the container origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Containment {
    /// The grid is centred on the origin and items are anchored by their
    /// centres.
    #[default]
    Centered,
    /// The first slot sits on the origin and items are anchored by their
    /// top-left corners.
    TopLeft,
}

/// Input parameters for a layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridParams {
    /// Uniform rows or alternating staggered rows.
    pub topology: GridTopology,
    /// Which row parity is staggered (ignored for orthogonal grids).
    pub stagger_parity: StaggerParity,
    /// Whether hidden items still occupy a slot.
    pub include_hidden: bool,
    /// Slot fill order.
    pub ordering: SlotOrdering,
    /// Requested column count. Values below 1 resolve to 1.
    pub columns: u32,
    /// Requested row count, or 0 to derive it from the item count.
    pub rows: u32,
    /// Direction of axis X in degrees (0° points right, 90° points down).
    pub angle_x: f64,
    /// Direction of axis Y in degrees (0° points right, 90° points down).
    pub angle_y: f64,
    /// Multiplier applied to the base cell width along axis X.
    pub spacing_x: f64,
    /// Multiplier applied to the base cell height along axis Y.
    pub spacing_y: f64,
    /// Uniform scale applied to every participating item about its centre.
    pub item_scale: f64,
    /// Anchoring of the arrangement.
    pub containment: Containment,
    /// Draw the debug overlay when the host is in a design-time context.
    pub debug_overlay: bool,
    /// Duration of the movement to each target position. Zero or negative
    /// values place items immediately.
    pub transition_duration: f64,
    /// Easing curve used for movement transitions.
    pub easing: Easing,
}

impl GridParams {
    /// A plain row/column grid: three columns, automatic rows, centred.
    pub const DEFAULT: Self = Self {
        topology: GridTopology::Orthogonal,
        stagger_parity: StaggerParity::Even,
        include_hidden: false,
        ordering: SlotOrdering::Standard,
        columns: 3,
        rows: 0,
        angle_x: 0.0,
        angle_y: 90.0,
        spacing_x: 1.0,
        spacing_y: 1.0,
        item_scale: 1.0,
        containment: Containment::Centered,
        debug_overlay: false,
        transition_duration: 0.3,
        easing: Easing::QuadOut,
    };

    /// Classic 2:1-ish isometric axes (30° and 150°).
    #[must_use]
    pub const fn isometric() -> Self {
        Self {
            angle_x: 30.0,
            angle_y: 150.0,
            ..Self::DEFAULT
        }
    }

    /// Honeycomb arrangement: even rows staggered, rows packed at 75% pitch.
    #[must_use]
    pub const fn hexagonal() -> Self {
        Self {
            topology: GridTopology::Staggered,
            stagger_parity: StaggerParity::Even,
            spacing_y: 0.75,
            ..Self::DEFAULT
        }
    }

    /// The column count actually used by a pass (never zero).
    #[inline]
    #[must_use]
    pub const fn resolved_columns(&self) -> u32 {
        if self.columns == 0 { 1 } else { self.columns }
    }

    /// The row count for `participating` items: the requested count, or
    /// `ceil(participating / columns)` when the request is 0.
    #[inline]
    #[must_use]
    pub fn resolved_rows(&self, participating: usize) -> u32 {
        if self.rows > 0 {
            return self.rows;
        }
        let columns = self.resolved_columns() as usize;
        u32::try_from(participating.div_ceil(columns)).unwrap_or(u32::MAX)
    }

    /// Returns a copy with the given topology.
    #[must_use]
    pub const fn with_topology(self, topology: GridTopology) -> Self {
        Self { topology, ..self }
    }

    /// Returns a copy with the given stagger parity.
    #[must_use]
    pub const fn with_stagger_parity(self, stagger_parity: StaggerParity) -> Self {
        Self {
            stagger_parity,
            ..self
        }
    }

    /// Returns a copy that includes or skips hidden items.
    #[must_use]
    pub const fn with_include_hidden(self, include_hidden: bool) -> Self {
        Self {
            include_hidden,
            ..self
        }
    }

    /// Returns a copy with the given slot ordering.
    #[must_use]
    pub const fn with_ordering(self, ordering: SlotOrdering) -> Self {
        Self { ordering, ..self }
    }

    /// Returns a copy with the given column and row counts.
    #[must_use]
    pub const fn with_dimensions(self, columns: u32, rows: u32) -> Self {
        Self {
            columns,
            rows,
            ..self
        }
    }

    /// Returns a copy with the given axis angles, in degrees.
    #[must_use]
    pub const fn with_angles(self, angle_x: f64, angle_y: f64) -> Self {
        Self {
            angle_x,
            angle_y,
            ..self
        }
    }

    /// Returns a copy with the given spacing multipliers.
    #[must_use]
    pub const fn with_spacing(self, spacing_x: f64, spacing_y: f64) -> Self {
        Self {
            spacing_x,
            spacing_y,
            ..self
        }
    }

    /// Returns a copy with the given uniform item scale.
    #[must_use]
    pub const fn with_item_scale(self, item_scale: f64) -> Self {
        Self { item_scale, ..self }
    }

    /// Returns a copy with the given containment mode.
    #[must_use]
    pub const fn with_containment(self, containment: Containment) -> Self {
        Self {
            containment,
            ..self
        }
    }

    /// Returns a copy with the debug overlay enabled or disabled.
    #[must_use]
    pub const fn with_debug_overlay(self, debug_overlay: bool) -> Self {
        Self {
            debug_overlay,
            ..self
        }
    }

    /// Returns a copy with the given transition duration and easing.
    #[must_use]
    pub const fn with_transition(self, transition_duration: f64, easing: Easing) -> Self {
        Self {
            transition_duration,
            easing,
            ..self
        }
    }
}

impl Default for GridParams {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_plain_row_column_grid() {
        let p = GridParams::default();
        assert_eq!(p, GridParams::DEFAULT);
        assert_eq!(p.angle_x, 0.0);
        assert_eq!(p.angle_y, 90.0);
        assert_eq!(p.topology, GridTopology::Orthogonal);
        assert_eq!(p.containment, Containment::Centered);
        assert_eq!(p.transition_duration, 0.3);
    }

    #[test]
    fn zero_columns_resolve_to_one() {
        let p = GridParams::DEFAULT.with_dimensions(0, 0);
        assert_eq!(p.resolved_columns(), 1);
        assert_eq!(p.resolved_rows(4), 4, "one column means one row per item");
    }

    #[test]
    fn auto_rows_round_up() {
        let p = GridParams::DEFAULT.with_dimensions(3, 0);
        assert_eq!(p.resolved_rows(7), 3);
        assert_eq!(p.resolved_rows(6), 2);
        assert_eq!(p.resolved_rows(0), 0);
    }

    #[test]
    fn explicit_rows_win_over_item_count() {
        let p = GridParams::DEFAULT.with_dimensions(3, 5);
        assert_eq!(p.resolved_rows(1), 5);
        assert_eq!(p.resolved_rows(100), 5);
    }

    #[test]
    fn parity_matches() {
        assert!(StaggerParity::Even.matches(0));
        assert!(!StaggerParity::Even.matches(1));
        assert!(StaggerParity::Odd.matches(3));
        assert!(!StaggerParity::Odd.matches(4));
    }

    #[test]
    fn presets_only_touch_their_fields() {
        let iso = GridParams::isometric();
        assert_eq!(iso.angle_x, 30.0);
        assert_eq!(iso.angle_y, 150.0);
        assert_eq!(iso.columns, GridParams::DEFAULT.columns);

        let hex = GridParams::hexagonal();
        assert_eq!(hex.topology, GridTopology::Staggered);
        assert_eq!(hex.angle_y, 90.0);
    }
}
