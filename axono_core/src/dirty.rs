// Copyright 2026 the Axono Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! [`GridContainer`](crate::container::GridContainer) records *why* a layout
//! pass is needed with [`understory_dirty`], one channel per kind of change.
//! The layout itself is always recomputed from scratch; the channels only
//! decide whether a pass runs and what the trace reports as its cause.
//!
//! Keys are `u32`. [`CONTAINER_KEY`] stands for the container as a whole;
//! item `i` is keyed as `i + 1` (see [`item_key`]).

use understory_dirty::Channel;

/// Grid parameters were replaced.
pub const PARAMS: Channel = Channel::new(0);

/// Items were added, removed, reordered, or resized.
pub const CHILDREN: Channel = Channel::new(1);

/// An item's visibility changed while hidden items are excluded.
pub const VISIBILITY: Channel = Channel::new(2);

/// Key used for container-wide changes.
pub const CONTAINER_KEY: u32 = 0;

/// Key used for changes to the item at `index`.
#[inline]
#[must_use]
pub fn item_key(index: usize) -> u32 {
    u32::try_from(index)
        .ok()
        .and_then(|i| i.checked_add(1))
        .unwrap_or(u32::MAX)
}
