// Copyright 2026 the Axono Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fire-and-forget movement of items to their target positions.
//!
//! The layout pass never waits for motion. For every placed item it issues a
//! [`Transition`] command to the host's animator (see
//! [`LayoutPresenter::request_transition`](crate::apply::LayoutPresenter::request_transition))
//! and returns immediately. A newer request for the same item supersedes the
//! one in flight; there is no cancellation token.
//!
//! [`Tweener`] is a small reference animator implementing exactly those
//! semantics, for hosts that do not bring their own.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

/// Easing profile for a transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Quadratic deceleration.
    #[default]
    QuadOut,
    /// Cubic deceleration.
    CubicOut,
    /// Sinusoidal acceleration then deceleration.
    SineInOut,
}

impl Easing {
    /// Maps linear progress `t` to eased progress. `t` is clamped to `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadOut => {
                let u = 1.0 - t;
                1.0 - u * u
            }
            Self::CubicOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::SineInOut => 0.5 - 0.5 * (core::f64::consts::PI * t).cos(),
        }
    }
}

/// A request to move one item to `target` over `duration` time units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Index of the item in the host's item list.
    pub item: usize,
    /// Final position of the item's top-left corner.
    pub target: Point,
    /// Duration in the host's time units.
    pub duration: f64,
    /// Easing curve.
    pub easing: Easing,
}

#[derive(Clone, Copy, Debug)]
struct Tween {
    from: Point,
    transition: Transition,
    start: f64,
}

impl Tween {
    fn position_at(&self, now: f64) -> Point {
        let t = if self.transition.duration > 0.0 {
            (now - self.start) / self.transition.duration
        } else {
            1.0
        };
        let eased = self.transition.easing.apply(t);
        self.from.lerp(self.transition.target, eased)
    }

    fn finished_at(&self, now: f64) -> bool {
        now - self.start >= self.transition.duration
    }
}

/// Reference animator with last-request-wins semantics per item.
///
/// Each item has at most one active tween. Tweens for different items are
/// fully independent.
#[derive(Clone, Debug, Default)]
pub struct Tweener {
    active: Vec<Tween>,
}

impl Tweener {
    /// Creates an animator with no active tweens.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts moving `transition.item` from `from` at time `now`, replacing
    /// any tween already running for that item.
    pub fn request(&mut self, from: Point, transition: Transition, now: f64) {
        let tween = Tween {
            from,
            transition,
            start: now,
        };
        match self
            .active
            .iter_mut()
            .find(|t| t.transition.item == transition.item)
        {
            Some(existing) => *existing = tween,
            None => self.active.push(tween),
        }
    }

    /// Returns the interpolated position of `item` at `now`, if it is moving.
    #[must_use]
    pub fn sample(&self, item: usize, now: f64) -> Option<Point> {
        self.active
            .iter()
            .find(|t| t.transition.item == item)
            .map(|t| t.position_at(now))
    }

    /// Returns `true` if `item` has a tween that has not been retired.
    #[must_use]
    pub fn is_animating(&self, item: usize) -> bool {
        self.active.iter().any(|t| t.transition.item == item)
    }

    /// Number of tweens that have not been retired.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Returns `(item, position)` for every active tween at `now`, then
    /// retires the tweens that have reached their target.
    pub fn advance(&mut self, now: f64) -> Vec<(usize, Point)> {
        let positions = self
            .active
            .iter()
            .map(|t| (t.transition.item, t.position_at(now)))
            .collect();
        self.active.retain(|t| !t.finished_at(now));
        positions
    }
}
