// Copyright 2026 the Scrawl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrawl Capture: a state machine turning pointer events into freehand strokes.
//!
//! This crate records an ordered collection of polyline strokes from a stream
//! of pointer interactions over a drawing surface:
//!
//! - [`stroke::Stroke`]: an immutable, ordered sequence of surface-local points.
//! - [`recorder::StrokeRecorder`]: the capture state machine with the four
//!   interaction operations (begin, extend, end, cancel) plus a full reset.
//!
//! ## Design Philosophy
//!
//! The recorder is deliberately forgiving about event streams from real
//! pointer devices:
//!
//! - **Duplicate or out-of-order events are no-ops**: a second begin while
//!   capturing, or a move/end with no prior begin, is silently ignored.
//! - **Partial strokes are kept**: cancellation (device lost contact) freezes
//!   the in-progress stroke exactly like a normal end, favoring data
//!   retention over precision.
//! - **Degenerate strokes are kept too**: a single-point stroke (a tap) is
//!   stored; deciding whether it is renderable belongs to serialization, not
//!   capture.
//!
//! The crate does not assume any particular UI framework or event system.
//! Points are expected to already be in surface-local coordinates; callers
//! own the device→surface translation and must apply it identically for
//! every event (see `scrawl_widget`).
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use scrawl_capture::recorder::StrokeRecorder;
//!
//! let mut rec = StrokeRecorder::new();
//!
//! rec.begin_capture(Point::new(10.0, 10.0));
//! rec.extend_capture(Point::new(20.0, 10.0));
//! rec.extend_capture(Point::new(20.0, 20.0));
//! rec.end_capture();
//!
//! assert_eq!(rec.strokes().len(), 1);
//! assert_eq!(rec.strokes()[0].points().len(), 3);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod recorder;
pub mod stroke;
