// Copyright 2026 the Scrawl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke recorder: capture pointer interactions into an ordered stroke collection.
//!
//! ## Usage
//!
//! 1) On a pointer-down event, call [`StrokeRecorder::begin_capture`] with the
//!    surface-local position.
//! 2) On each pointer-move event, call [`StrokeRecorder::extend_capture`]; the
//!    returned segment (previous point → new point) can be drawn by the host
//!    for live feedback without replaying the whole stroke.
//! 3) On pointer-up, call [`StrokeRecorder::end_capture`] to freeze the stroke
//!    into the collection. Pointer-cancel maps to
//!    [`StrokeRecorder::cancel_capture`], which keeps the partial stroke.
//! 4) [`StrokeRecorder::reset`] discards everything; it is the only way to
//!    remove strokes.
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
//! assert!(rec.is_capturing());
//!
//! // Move to (20, 10): the returned segment runs from the last point.
//! let seg = rec.extend_capture(Point::new(20.0, 10.0)).unwrap();
//! assert_eq!(seg.p0, Point::new(10.0, 10.0));
//! assert_eq!(seg.p1, Point::new(20.0, 10.0));
//!
//! rec.end_capture();
//! assert!(!rec.is_capturing());
//! assert_eq!(rec.strokes().len(), 1);
//! ```

use alloc::vec::Vec;
use core::mem;
use kurbo::{Line, Point};

use crate::stroke::Stroke;

/// Records pointer interactions as an ordered collection of [`Stroke`]s.
///
/// There is exactly one logical writer: all mutation happens synchronously on
/// the thread dispatching pointer events, so no internal locking is needed.
/// Serialization reads only [`StrokeRecorder::strokes`], which never includes
/// the in-progress stroke; a snapshot taken mid-capture simply sees the
/// strokes completed so far.
#[derive(Clone, Debug, Default)]
pub struct StrokeRecorder {
    strokes: Vec<Stroke>,
    current: Vec<Point>,
    capturing: bool,
    last_point: Option<Point>,
}

impl StrokeRecorder {
    /// Creates an empty recorder with no capture in progress.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new stroke at `point`.
    ///
    /// A begin while already capturing is ignored: overlapping device event
    /// types (touch + mouse emulation, for example) can deliver duplicate
    /// start events, and the first one wins.
    pub fn begin_capture(&mut self, point: Point) {
        if self.capturing {
            return;
        }
        self.capturing = true;
        self.current.clear();
        self.current.push(point);
        self.last_point = Some(point);
    }

    /// Appends `point` to the in-progress stroke.
    ///
    /// Returns the line segment from the previously recorded point to
    /// `point`, a hint the host can draw for incremental feedback. The hint
    /// is not part of the recorded geometry contract; only the stored point
    /// sequence is.
    ///
    /// A move with no capture in progress (the pointer re-entering the
    /// surface mid-gesture, say) is ignored and returns `None`.
    pub fn extend_capture(&mut self, point: Point) -> Option<Line> {
        if !self.capturing {
            return None;
        }
        let segment = self.last_point.map(|last| Line::new(last, point));
        self.current.push(point);
        self.last_point = Some(point);
        segment
    }

    /// Freezes the in-progress stroke into the collection.
    ///
    /// Even a single-point stroke is stored: filtering degenerate strokes is
    /// the serializer's job, not the recorder's. A no-op when not capturing.
    pub fn end_capture(&mut self) {
        if !self.capturing {
            return;
        }
        self.capturing = false;
        self.last_point = None;
        if !self.current.is_empty() {
            let points = mem::take(&mut self.current);
            self.strokes.push(Stroke::from_points(points));
        }
    }

    /// Ends the in-progress stroke after an interaction cancellation.
    ///
    /// Identical to [`StrokeRecorder::end_capture`]: a stroke interrupted by
    /// the device losing contact is kept, not rolled back.
    pub fn cancel_capture(&mut self) {
        self.end_capture();
    }

    /// Clears the stroke collection and any in-progress capture state.
    ///
    /// This is the sole deletion path; individual strokes are never removed.
    pub fn reset(&mut self) {
        self.strokes.clear();
        self.current.clear();
        self.capturing = false;
        self.last_point = None;
    }

    /// Returns the completed strokes in completion order.
    #[must_use]
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Returns `true` while a capture is in progress.
    #[must_use]
    pub fn is_capturing(&self) -> bool {
        self.capturing
    }

    /// Returns the last recorded point of the in-progress stroke, if any.
    #[must_use]
    pub fn last_point(&self) -> Option<Point> {
        self.last_point
    }
}
