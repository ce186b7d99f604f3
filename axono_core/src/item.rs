// Copyright 2026 the Axono Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The item abstraction read by a layout pass.
//!
//! The layout never owns items. It reads each item's minimum footprint and
//! visibility through [`LayoutItem`], and writes results back through
//! [`LayoutPresenter`](crate::apply::LayoutPresenter) using the item's index
//! in the slice it was given. Filtering by type or capability happens in the
//! host before the slice is built.

use kurbo::Size;

/// Read access to an item's layout inputs.
pub trait LayoutItem {
    /// The smallest footprint the item can occupy.
    fn min_size(&self) -> Size;

    /// Whether the item is currently visible.
    fn is_visible(&self) -> bool {
        true
    }
}

impl LayoutItem for Size {
    #[inline]
    fn min_size(&self) -> Size {
        *self
    }
}

impl<T: LayoutItem + ?Sized> LayoutItem for &T {
    #[inline]
    fn min_size(&self) -> Size {
        (**self).min_size()
    }

    #[inline]
    fn is_visible(&self) -> bool {
        (**self).is_visible()
    }
}

/// A plain item description: a footprint and a visibility flag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemDesc {
    /// Minimum footprint.
    pub min_size: Size,
    /// Visibility.
    pub visible: bool,
}

impl ItemDesc {
    /// A visible item with the given footprint.
    #[inline]
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            min_size: Size::new(width, height),
            visible: true,
        }
    }

    /// A hidden item with the given footprint.
    #[inline]
    #[must_use]
    pub const fn hidden(width: f64, height: f64) -> Self {
        Self {
            min_size: Size::new(width, height),
            visible: false,
        }
    }
}

impl LayoutItem for ItemDesc {
    #[inline]
    fn min_size(&self) -> Size {
        self.min_size
    }

    #[inline]
    fn is_visible(&self) -> bool {
        self.visible
    }
}
