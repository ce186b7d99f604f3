// Copyright 2026 the Axono Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slot enumeration and fill ordering.
//!
//! The *standard* sequence walks rows from the top and columns left to right,
//! skipping the last column of every staggered row. Every other
//! [`SlotOrdering`] is a permutation of that sequence, so all orderings yield
//! the same set of slots.

use alloc::vec::Vec;
use core::fmt;

use crate::params::{GridTopology, SlotOrdering, StaggerParity};

/// A `(column, row)` slot address, both 0-based.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SlotCoord {
    /// Column within the row.
    pub column: u32,
    /// Row index.
    pub row: u32,
}

impl SlotCoord {
    /// Creates a slot address.
    #[inline]
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }
}

impl fmt::Debug for SlotCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotCoord({}, {})", self.column, self.row)
    }
}

/// Whether `row` is shifted by half a unit and loses its last slot.
#[inline]
#[must_use]
pub const fn is_row_staggered(row: u32, topology: GridTopology, parity: StaggerParity) -> bool {
    matches!(topology, GridTopology::Staggered) && parity.matches(row)
}

/// Number of slots in `row`.
#[inline]
#[must_use]
pub const fn row_capacity(
    row: u32,
    columns: u32,
    topology: GridTopology,
    parity: StaggerParity,
) -> u32 {
    if is_row_staggered(row, topology, parity) {
        columns.saturating_sub(1)
    } else {
        columns
    }
}

/// Enumerates every slot of a `columns` x `rows` grid in `ordering` order.
#[must_use]
pub fn sequence(
    columns: u32,
    rows: u32,
    topology: GridTopology,
    parity: StaggerParity,
    ordering: SlotOrdering,
) -> Vec<SlotCoord> {
    let mut slots = Vec::new();
    for row in 0..rows {
        for column in 0..row_capacity(row, columns, topology, parity) {
            slots.push(SlotCoord::new(column, row));
        }
    }

    match ordering {
        SlotOrdering::Standard => {}
        SlotOrdering::Reverse => slots.reverse(),
        SlotOrdering::BottomUp => {
            slots.sort_by(|a, b| b.row.cmp(&a.row).then(a.column.cmp(&b.column)));
        }
        SlotOrdering::Spiral => {
            let cx = (f64::from(columns) - 1.0) / 2.0;
            let cy = (f64::from(rows) - 1.0) / 2.0;
            let distance = |slot: &SlotCoord| {
                let offset = if is_row_staggered(slot.row, topology, parity) {
                    0.5
                } else {
                    0.0
                };
                let dx = f64::from(slot.column) + offset - cx;
                let dy = f64::from(slot.row) - cy;
                dx * dx + dy * dy
            };
            // Stable: equal distances keep their standard order.
            slots.sort_by(|a, b| distance(a).total_cmp(&distance(b)));
        }
    }

    slots
}
