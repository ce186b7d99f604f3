// Copyright 2026 the Axono Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axonometric grid layout.
//!
//! `axono_core` arranges an ordered list of rectangular items on a grid whose
//! two axes are arbitrary direction vectors, each with its own spacing. A
//! plain row/column grid, an isometric diamond, and a staggered honeycomb are
//! all the same computation with different [`GridParams`](params::GridParams).
//! It is `no_std` compatible (with `alloc`).
//!
//! # Architecture
//!
//! A layout pass is a pure function of the item list and the parameters,
//! followed by a commit to the host:
//!
//! ```text
//!   items + GridParams
//!       │
//!       ▼
//!   GridState::build() ──► GridGeometry + sequence() + bounds()
//!       │
//!       ▼
//!   place() ──► LayoutPass ──► commit() ──► LayoutPresenter
//!       │                                      (scale, move, transition)
//!       ▼
//!   overlay::draw() ──► DebugCanvas   (design time only)
//! ```
//!
//! **[`params`]**: The complete input to a pass, with presets and `with_*`
//! helpers.
//!
//! **[`grid`]**: Grid builder, the projector
//! ([`GridGeometry::project`](grid::GridGeometry::project)), and the bounds
//! calculator.
//!
//! **[`sequence`]**: Slot enumeration honouring staggering, and the four
//! fill orderings.
//!
//! **[`apply`]**: Slot assignment and target positions, plus the
//! [`LayoutPresenter`](apply::LayoutPresenter) trait hosts implement.
//!
//! **[`transition`]**: Easing curves, transition commands, and a reference
//! animator.
//!
//! **[`container`]**: [`GridContainer`](container::GridContainer), which
//! holds parameters between passes and tracks what changed via
//! `understory_dirty`.
//!
//! **[`overlay`]**: Debug drawing of grid lines, slots, and bounds.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! pass instrumentation, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).
//! - `trace-rich` (disabled by default, implies `trace`): Gates per-item
//!   placement events.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod apply;
pub mod container;
pub mod dirty;
pub mod grid;
pub mod item;
pub mod overlay;
pub mod params;
pub mod sequence;
pub mod trace;
pub mod transition;
