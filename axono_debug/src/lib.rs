// Copyright 2026 the Axono Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, JSON export, and pretty-printing for axono diagnostics.
//!
//! This crate provides development-time implementations of the seams in
//! [`axono_core`]:
//!
//! - [`canvas::RecordingCanvas`]: a
//!   [`DebugCanvas`](axono_core::overlay::DebugCanvas) that records every
//!   overlay draw call as a [`canvas::DrawCommand`].
//! - [`json::export`]: writes recorded overlay commands together with a
//!   grid summary as JSON.
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output
//!   for [`TraceSink`](axono_core::trace::TraceSink).

pub mod canvas;
pub mod json;
pub mod pretty;
