// Copyright 2026 the Axono Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout application: from grid state to item positions.
//!
//! Application is split in two. [`place`] and [`compute_layout`] are pure:
//! they zip participating items with slots and compute target positions.
//! [`commit`] pushes a computed [`LayoutPass`] out through the host's
//! [`LayoutPresenter`], issuing one scale transform per participating item
//! and one movement per placed item.
//!
//! # Host contract
//!
//! The core never owns items. Every presenter call addresses an item by its
//! index in the slice passed to [`compute_layout`]. Items beyond the slot
//! count receive no position call at all and stay wherever they are.

use alloc::vec::Vec;

use kurbo::{Affine, Point, Size, Vec2};

use crate::grid::GridState;
use crate::item::LayoutItem;
use crate::params::{Containment, GridParams};
use crate::sequence::SlotCoord;
use crate::transition::Transition;

/// The target computed for one placed item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Index of the item in the host's item list.
    pub item: usize,
    /// Slot assigned to the item.
    pub slot: SlotCoord,
    /// Projected slot point.
    pub center: Point,
    /// Final top-left position of the item.
    pub position: Point,
}

/// Assigns slots to participating items, 1:1 in order.
///
/// Under centred containment the item's centre lands on the slot point;
/// under top-left containment its top-left corner does.
#[must_use]
pub fn place(state: &GridState) -> Vec<Placement> {
    state
        .items
        .iter()
        .zip(&state.item_sizes)
        .zip(&state.slots)
        .map(|((&item, size), &slot)| {
            let center = state.geometry.project(slot);
            let position = match state.containment {
                Containment::TopLeft => center,
                Containment::Centered => center - size.to_vec2() / 2.0,
            };
            Placement {
                item,
                slot,
                center,
                position,
            }
        })
        .collect()
}

/// Scale transform for an item of `size`, pivoting about the item's own
/// centre so its visual centre does not move.
#[must_use]
pub fn scale_about_center(size: Size, scale: f64) -> Affine {
    let pivot = Vec2::new(size.width / 2.0, size.height / 2.0);
    Affine::translate(pivot) * Affine::scale(scale) * Affine::translate(-pivot)
}

/// The complete, side-effect-free result of one layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutPass {
    /// Grid snapshot the placements were derived from.
    pub state: GridState,
    /// One entry per placed item, in fill order.
    pub placements: Vec<Placement>,
}

impl LayoutPass {
    /// Minimum container size for this pass.
    #[inline]
    #[must_use]
    pub fn min_size(&self) -> Size {
        self.state.min_size()
    }

    /// The placement of `item`, if it received a slot.
    #[must_use]
    pub fn placement_of(&self, item: usize) -> Option<&Placement> {
        self.placements.iter().find(|p| p.item == item)
    }
}

/// Runs a full layout pass for `items` under `params` without touching any
/// item.
#[must_use]
pub fn compute_layout<I: LayoutItem>(items: &[I], params: &GridParams) -> LayoutPass {
    let state = GridState::build(items, params);
    let placements = place(&state);
    LayoutPass { state, placements }
}

/// Applies layout results to a host's items.
///
/// Implemented by whatever owns the items (a widget tree, a scene graph, a
/// test double).
pub trait LayoutPresenter {
    /// Sets the item's local transform. Used for the uniform item scale.
    fn set_item_transform(&mut self, item: usize, transform: Affine);

    /// Moves the item immediately.
    fn set_position(&mut self, item: usize, position: Point);

    /// Starts moving the item towards `transition.target`. Must not block;
    /// a new request for the same item replaces any movement in flight.
    fn request_transition(&mut self, transition: &Transition);
}

/// Pushes `pass` to `presenter`.
///
/// Every participating item gets the uniform scale transform, placed or not.
/// Placed items are then moved: by transition when
/// [`transition_duration`](GridParams::transition_duration) is positive,
/// otherwise directly.
pub fn commit(pass: &LayoutPass, params: &GridParams, presenter: &mut dyn LayoutPresenter) {
    for (&item, &size) in pass.state.items.iter().zip(&pass.state.item_sizes) {
        presenter.set_item_transform(item, scale_about_center(size, params.item_scale));
    }

    for placement in &pass.placements {
        if params.transition_duration > 0.0 {
            presenter.request_transition(&Transition {
                item: placement.item,
                target: placement.position,
                duration: params.transition_duration,
                easing: params.easing,
            });
        } else {
            presenter.set_position(placement.item, placement.position);
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::item::ItemDesc;
    use crate::params::SlotOrdering;

    const EPS: f64 = 1e-9;

    #[derive(Default)]
    struct Recorder {
        transforms: Vec<(usize, Affine)>,
        positions: Vec<(usize, Point)>,
        transitions: Vec<Transition>,
    }

    impl LayoutPresenter for Recorder {
        fn set_item_transform(&mut self, item: usize, transform: Affine) {
            self.transforms.push((item, transform));
        }

        fn set_position(&mut self, item: usize, position: Point) {
            self.positions.push((item, position));
        }

        fn request_transition(&mut self, transition: &Transition) {
            self.transitions.push(*transition);
        }
    }

    #[test]
    fn centred_items_are_offset_by_half_size() {
        let items = [ItemDesc::new(20.0, 10.0)];
        let pass = compute_layout(&items, &GridParams::DEFAULT.with_dimensions(1, 0));
        let p = pass.placements[0];
        assert_eq!(p.center, Point::ZERO);
        assert_eq!(p.position, Point::new(-10.0, -5.0));
    }

    #[test]
    fn top_left_items_sit_on_slot_point() {
        let items = [ItemDesc::new(20.0, 10.0); 2];
        let params = GridParams::DEFAULT.with_containment(Containment::TopLeft);
        let pass = compute_layout(&items, &params);
        assert_eq!(pass.placements[1].position, pass.placements[1].center);
        assert!((pass.placements[1].position.x - 64.0).abs() < EPS);
    }

    #[test]
    fn surplus_items_get_no_placement() {
        let items = [ItemDesc::new(10.0, 10.0); 5];
        let params = GridParams::DEFAULT.with_dimensions(2, 2);
        let pass = compute_layout(&items, &params);
        assert_eq!(pass.placements.len(), 4);
        assert!(pass.placement_of(4).is_none(), "fifth item has no slot");
        assert!(pass.placements.iter().all(|p| p.item < 4));
    }

    #[test]
    fn placements_follow_slot_order() {
        let items = [ItemDesc::new(10.0, 10.0); 4];
        let params = GridParams::DEFAULT
            .with_dimensions(2, 2)
            .with_ordering(SlotOrdering::Reverse);
        let pass = compute_layout(&items, &params);
        assert_eq!(pass.placements[0].item, 0);
        assert_eq!(pass.placements[0].slot, SlotCoord::new(1, 1));
    }

    #[test]
    fn hidden_items_keep_their_index() {
        let items = [
            ItemDesc::hidden(10.0, 10.0),
            ItemDesc::new(10.0, 10.0),
        ];
        let pass = compute_layout(&items, &GridParams::DEFAULT);
        assert_eq!(pass.placements.len(), 1);
        assert_eq!(pass.placements[0].item, 1);
        assert_eq!(pass.placements[0].slot, SlotCoord::new(0, 0));
    }

    #[test]
    fn scale_keeps_centre_fixed() {
        let size = Size::new(40.0, 20.0);
        let t = scale_about_center(size, 2.0);
        let centre = Point::new(20.0, 10.0);
        let moved = t * centre;
        assert!((moved - centre).hypot() < EPS);
        let corner = t * Point::ZERO;
        assert!((corner - Point::new(-20.0, -10.0)).hypot() < EPS);
    }

    #[test]
    fn commit_transitions_placed_items() {
        let items = [ItemDesc::new(10.0, 10.0); 3];
        let params = GridParams::DEFAULT.with_dimensions(2, 1).with_item_scale(0.5);
        let pass = compute_layout(&items, &params);
        let mut rec = Recorder::default();
        commit(&pass, &params, &mut rec);

        assert_eq!(rec.transforms.len(), 3, "scale reaches unplaced items too");
        assert_eq!(rec.transitions.len(), 2);
        assert!(rec.positions.is_empty());
        assert_eq!(rec.transitions[0].duration, 0.3);
        assert_eq!(rec.transitions[1].target, pass.placements[1].position);
    }

    #[test]
    fn commit_without_duration_sets_positions() {
        let items = [ItemDesc::new(10.0, 10.0); 2];
        let params = GridParams::DEFAULT.with_transition(0.0, crate::transition::Easing::Linear);
        let pass = compute_layout(&items, &params);
        let mut rec = Recorder::default();
        commit(&pass, &params, &mut rec);
        assert!(rec.transitions.is_empty());
        assert_eq!(
            rec.positions,
            vec![
                (0, pass.placements[0].position),
                (1, pass.placements[1].position),
            ]
        );
    }

    #[test]
    fn empty_pass_issues_nothing() {
        let pass = compute_layout::<ItemDesc>(&[], &GridParams::DEFAULT);
        let mut rec = Recorder::default();
        commit(&pass, &GridParams::DEFAULT, &mut rec);
        assert!(rec.transforms.is_empty() && rec.positions.is_empty() && rec.transitions.is_empty());
    }

    #[test]
    fn layout_is_deterministic() {
        let items = [
            ItemDesc::new(30.0, 50.0),
            ItemDesc::new(80.0, 20.0),
            ItemDesc::hidden(10.0, 10.0),
            ItemDesc::new(60.0, 60.0),
        ];
        let params = GridParams::isometric()
            .with_ordering(SlotOrdering::Spiral)
            .with_include_hidden(true);
        assert_eq!(compute_layout(&items, &params), compute_layout(&items, &params));
    }
}
