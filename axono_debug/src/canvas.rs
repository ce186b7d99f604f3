// Copyright 2026 the Axono Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay recording.

use axono_core::overlay::{DebugCanvas, Rgba, Stroke};
use kurbo::{Point, Rect};

/// One recorded overlay draw call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    /// A line segment.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Colour and width.
        stroke: Stroke,
    },
    /// A filled circle.
    Circle {
        /// Centre.
        center: Point,
        /// Radius.
        radius: f64,
        /// Fill colour.
        color: Rgba,
    },
    /// A rectangle outline.
    RectOutline {
        /// Rectangle.
        rect: Rect,
        /// Colour and width.
        stroke: Stroke,
    },
}

/// A [`DebugCanvas`] that records draw calls instead of rasterizing them.
#[derive(Clone, Debug)]
pub struct RecordingCanvas {
    design_time: bool,
    commands: Vec<DrawCommand>,
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingCanvas {
    /// Creates a canvas that reports a design-time context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            design_time: true,
            commands: Vec::new(),
        }
    }

    /// Creates a canvas that reports a runtime (non-editor) context, so
    /// gated overlays are skipped.
    #[must_use]
    pub fn runtime() -> Self {
        Self {
            design_time: false,
            commands: Vec::new(),
        }
    }

    /// Recorded commands, in draw order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Consumes the canvas and returns the recorded commands.
    #[must_use]
    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// Drops all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DebugCanvas for RecordingCanvas {
    fn is_design_time(&self) -> bool {
        self.design_time
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }

    fn circle(&mut self, center: Point, radius: f64, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn rect_outline(&mut self, rect: Rect, stroke: Stroke) {
        self.commands.push(DrawCommand::RectOutline { rect, stroke });
    }
}

#[cfg(test)]
mod tests {
    use axono_core::container::GridContainer;
    use axono_core::item::ItemDesc;
    use axono_core::overlay::{self, OverlayStyle};
    use axono_core::params::{GridParams, GridTopology};

    use super::*;

    #[test]
    fn records_full_overlay_in_order() {
        let params = GridParams::DEFAULT.with_dimensions(2, 2);
        let pass = axono_core::apply::compute_layout(&[ItemDesc::new(10.0, 10.0); 3], &params);
        let mut canvas = RecordingCanvas::new();
        overlay::draw(&pass.state, &mut canvas, &OverlayStyle::default());

        let cmds = canvas.commands();
        // 2 row lines + 2 column lines + 4 slots + bounds + origin.
        assert_eq!(cmds.len(), 10);
        assert!(matches!(cmds[0], DrawCommand::Line { .. }));
        assert!(matches!(cmds[8], DrawCommand::RectOutline { .. }));
        assert!(
            matches!(cmds[9], DrawCommand::Circle { center, .. } if center == pass.state.geometry.origin),
            "origin marker comes last"
        );
    }

    #[test]
    fn runtime_canvas_blocks_container_overlay() {
        let params = GridParams::DEFAULT
            .with_topology(GridTopology::Staggered)
            .with_dimensions(3, 2)
            .with_debug_overlay(true);
        let container = GridContainer::new(params);
        let pass = axono_core::apply::compute_layout(&[ItemDesc::new(10.0, 10.0); 3], &params);

        let mut runtime = RecordingCanvas::runtime();
        assert!(!container.draw_overlay(&pass, &mut runtime, &OverlayStyle::default()));
        assert!(runtime.commands().is_empty());

        let mut editor = RecordingCanvas::new();
        assert!(container.draw_overlay(&pass, &mut editor, &OverlayStyle::default()));
        assert!(
            editor
                .commands()
                .iter()
                .filter(|c| matches!(c, DrawCommand::Line { .. }))
                .count()
                == 2,
            "staggered grids draw row lines only"
        );
        editor.clear();
        assert!(editor.into_commands().is_empty());
    }
}
