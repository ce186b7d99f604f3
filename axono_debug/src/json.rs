// Copyright 2026 the Axono Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of a grid and its overlay.
//!
//! [`export`] writes a single JSON object with three members:
//!
//! - `grid`: resolved dimensions, axes, units, origin, bounds, and minimum
//!   size of a [`GridState`].
//! - `slots`: the ordered slot list as `[column, row]` pairs.
//! - `commands`: recorded overlay [`DrawCommand`]s, in draw order.
//!
//! Points are `[x, y]`, sizes `[width, height]`, rectangles
//! `[x0, y0, x1, y1]`, and colours `[r, g, b, a]`.

use std::io::{self, Write};

use serde_json::{Value, json};

use axono_core::grid::GridState;
use kurbo::{Point, Rect, Size, Vec2};

use crate::canvas::DrawCommand;

/// Writes `state` and `commands` as pretty-printed JSON to `writer`.
pub fn export(
    commands: &[DrawCommand],
    state: &GridState,
    writer: &mut dyn Write,
) -> io::Result<()> {
    let g = &state.geometry;
    let doc = json!({
        "grid": {
            "columns": g.columns,
            "rows": g.rows,
            "topology": format!("{:?}", g.topology),
            "stagger_parity": format!("{:?}", g.stagger_parity),
            "containment": format!("{:?}", state.containment),
            "participating": state.participating(),
            "slot_count": state.slot_count(),
            "cell_size": size(state.cell_size),
            "origin": point(g.origin),
            "axis_x": vec2(g.axis_x),
            "axis_y": vec2(g.axis_y),
            "unit": [g.unit_x, g.unit_y],
            "bounds": rect(state.bounds),
            "min_size": size(state.min_size()),
        },
        "slots": state
            .slots
            .iter()
            .map(|s| json!([s.column, s.row]))
            .collect::<Vec<_>>(),
        "commands": commands.iter().map(command).collect::<Vec<_>>(),
    });

    serde_json::to_writer_pretty(writer, &doc)?;
    Ok(())
}

fn command(cmd: &DrawCommand) -> Value {
    match *cmd {
        DrawCommand::Line { from, to, stroke } => json!({
            "kind": "line",
            "from": point(from),
            "to": point(to),
            "color": stroke.color.0,
            "width": stroke.width,
        }),
        DrawCommand::Circle {
            center,
            radius,
            color,
        } => json!({
            "kind": "circle",
            "center": point(center),
            "radius": radius,
            "color": color.0,
        }),
        DrawCommand::RectOutline { rect: r, stroke } => json!({
            "kind": "rect",
            "rect": rect(r),
            "color": stroke.color.0,
            "width": stroke.width,
        }),
    }
}

fn point(p: Point) -> Value {
    json!([p.x, p.y])
}

fn vec2(v: Vec2) -> Value {
    json!([v.x, v.y])
}

fn size(s: Size) -> Value {
    json!([s.width, s.height])
}

fn rect(r: Rect) -> Value {
    json!([r.x0, r.y0, r.x1, r.y1])
}
