// Copyright 2026 the Scrawl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrawl Widget: one annotation session as an owned value.
//!
//! [`AnnotationWidget`] binds the pipeline together for a single drawing
//! session: it owns the capture state machine, the surface description, the
//! ink style, and the metadata fields, and it performs the one coordinate
//! transformation of the system — translating device/client pointer
//! positions into surface-local coordinates by subtracting the surface's
//! current on-screen origin. The translation is applied identically to
//! every event, so strokes stay internally consistent even if the surface
//! scrolls between events.
//!
//! There is deliberately no shared or global state: hosts embedding several
//! drawing surfaces construct one widget value per surface.
//!
//! ## Event wiring
//!
//! Hosts forward their pointer events directly:
//!
//! ```
//! use kurbo::Point;
//! use scrawl_svg::Surface;
//! use scrawl_widget::AnnotationWidget;
//!
//! let mut widget = AnnotationWidget::new(Surface::new(800, 600, "field_map.svg"));
//! widget.set_surface_origin(Point::new(100.0, 50.0));
//!
//! // Device coordinates in, surface-local strokes out.
//! widget.pointer_down(Point::new(110.0, 60.0));
//! let segment = widget.pointer_move(Point::new(120.0, 60.0)).unwrap();
//! assert_eq!(segment.p0, Point::new(10.0, 10.0));
//! assert_eq!(segment.p1, Point::new(20.0, 10.0));
//! widget.pointer_up();
//!
//! let doc = widget.document();
//! assert!(doc.as_str().contains("M10 10L20 10"));
//! ```
//!
//! The segment returned by [`AnnotationWidget::pointer_move`] is a rendering
//! hint for incremental live feedback; the recorded geometry is what
//! [`AnnotationWidget::document`] serializes.
//!
//! ## Reset and submit triggers
//!
//! - [`AnnotationWidget::clear`] empties the drawing (the only deletion
//!   path). Metadata fields are kept; the original UI clears them only
//!   after a successful submission.
//! - [`AnnotationWidget::submit`] serializes the current finalized strokes,
//!   hands the snapshot to a [`SubmitSink`], and clears strokes and
//!   metadata on success. On failure every bit of state is left untouched
//!   so the user can retry.

use kurbo::{Line, Point};
use scrawl_capture::recorder::StrokeRecorder;
use scrawl_capture::stroke::Stroke;
use scrawl_submit::payload::Metadata;
use scrawl_submit::sink::{SubmitError, SubmitSink};
use scrawl_svg::{InkStyle, Surface, SvgDocument, to_svg};

/// A single freehand annotation session over a fixed background.
#[derive(Clone, Debug)]
pub struct AnnotationWidget {
    surface: Surface,
    ink: InkStyle,
    recorder: StrokeRecorder,
    metadata: Metadata,
    /// The surface's current top-left corner in device coordinates.
    surface_origin: Point,
}

impl AnnotationWidget {
    /// Creates a widget for `surface` with default ink and a zero origin.
    #[must_use]
    pub fn new(surface: Surface) -> Self {
        Self {
            surface,
            ink: InkStyle::default(),
            recorder: StrokeRecorder::new(),
            metadata: Metadata::new(),
            surface_origin: Point::ORIGIN,
        }
    }

    /// Returns the widget's surface descriptor.
    #[must_use]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Sets the ink style used for serialization.
    pub fn set_ink(&mut self, ink: InkStyle) {
        self.ink = ink;
    }

    /// Updates the surface's on-screen origin (for example after a scroll).
    ///
    /// Takes effect for the next pointer event; points already recorded are
    /// never retranslated.
    pub fn set_surface_origin(&mut self, origin: Point) {
        self.surface_origin = origin;
    }

    /// Returns the metadata fields travelling with the next submission.
    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Returns the metadata fields for editing.
    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    /// Handles interaction-start at a device/client position.
    pub fn pointer_down(&mut self, device: Point) {
        let local = self.to_surface_local(device);
        self.recorder.begin_capture(local);
    }

    /// Handles interaction-move at a device/client position.
    ///
    /// Returns the surface-local segment from the previous point, for the
    /// host to draw as live feedback.
    pub fn pointer_move(&mut self, device: Point) -> Option<Line> {
        let local = self.to_surface_local(device);
        self.recorder.extend_capture(local)
    }

    /// Handles interaction-end, freezing the in-progress stroke.
    pub fn pointer_up(&mut self) {
        self.recorder.end_capture();
    }

    /// Handles interaction-cancel. The partial stroke is kept, exactly as
    /// on a normal end.
    pub fn pointer_cancel(&mut self) {
        self.recorder.cancel_capture();
    }

    /// Returns the completed strokes in completion order.
    #[must_use]
    pub fn strokes(&self) -> &[Stroke] {
        self.recorder.strokes()
    }

    /// Returns `true` while a stroke is being captured.
    #[must_use]
    pub fn is_capturing(&self) -> bool {
        self.recorder.is_capturing()
    }

    /// The reset trigger: discards the drawing and any in-progress capture.
    ///
    /// Metadata fields are kept; they are cleared only by a successful
    /// [`AnnotationWidget::submit`].
    pub fn clear(&mut self) {
        self.recorder.reset();
    }

    /// Serializes the current finalized strokes into an immutable snapshot.
    ///
    /// Callable at any time; a capture in progress is simply not part of
    /// the collection yet.
    #[must_use]
    pub fn document(&self) -> SvgDocument {
        to_svg(&self.surface, self.recorder.strokes(), &self.ink)
    }

    /// The submit trigger: serializes, delivers through `sink`, and on
    /// success clears the drawing and metadata.
    ///
    /// On failure the error is propagated and no state changes, so the
    /// user may retry without losing strokes.
    pub fn submit(&mut self, sink: &mut dyn SubmitSink) -> Result<(), SubmitError> {
        let document = self.document();
        sink.submit(&self.metadata, &document)?;
        self.recorder.reset();
        self.metadata.clear();
        Ok(())
    }

    fn to_surface_local(&self, device: Point) -> Point {
        device - self.surface_origin.to_vec2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> AnnotationWidget {
        AnnotationWidget::new(Surface::new(800, 600, "bg.svg"))
    }

    /// Records every submission instead of delivering it.
    #[derive(Default)]
    struct RecordingSink {
        submissions: Vec<(Metadata, SvgDocument)>,
    }

    impl SubmitSink for RecordingSink {
        fn submit(
            &mut self,
            metadata: &Metadata,
            document: &SvgDocument,
        ) -> Result<(), SubmitError> {
            self.submissions.push((metadata.clone(), document.clone()));
            Ok(())
        }
    }

    /// Fails every submission with a transport-level status error.
    struct FailingSink;

    impl SubmitSink for FailingSink {
        fn submit(&mut self, _: &Metadata, _: &SvgDocument) -> Result<(), SubmitError> {
            Err(SubmitError::UnexpectedStatus(500))
        }
    }

    #[test]
    fn device_coordinates_are_translated_to_surface_local() {
        let mut w = widget();
        w.set_surface_origin(Point::new(100.0, 50.0));

        w.pointer_down(Point::new(110.0, 60.0));
        w.pointer_move(Point::new(120.0, 60.0));
        w.pointer_up();

        assert_eq!(
            w.strokes()[0].points(),
            &[Point::new(10.0, 10.0), Point::new(20.0, 10.0)]
        );
    }

    #[test]
    fn origin_change_applies_from_the_next_event() {
        let mut w = widget();
        w.pointer_down(Point::new(10.0, 10.0));

        // Surface scrolls down by 5 mid-stroke: the translation is applied
        // per event, never retroactively.
        w.set_surface_origin(Point::new(0.0, 5.0));
        w.pointer_move(Point::new(10.0, 10.0));
        w.pointer_up();

        assert_eq!(
            w.strokes()[0].points(),
            &[Point::new(10.0, 10.0), Point::new(10.0, 5.0)]
        );
    }

    #[test]
    fn pointer_move_returns_surface_local_segment() {
        let mut w = widget();
        w.set_surface_origin(Point::new(7.0, 7.0));
        w.pointer_down(Point::new(7.0, 7.0));

        let seg = w.pointer_move(Point::new(8.0, 9.0)).unwrap();
        assert_eq!(seg.p0, Point::ORIGIN);
        assert_eq!(seg.p1, Point::new(1.0, 2.0));
    }

    #[test]
    fn cancel_is_equivalent_to_up() {
        let mut up = widget();
        up.pointer_down(Point::new(3.0, 4.0));
        up.pointer_up();

        let mut cancelled = widget();
        cancelled.pointer_down(Point::new(3.0, 4.0));
        cancelled.pointer_cancel();

        assert_eq!(up.strokes(), cancelled.strokes());
        assert_eq!(up.document(), cancelled.document());
    }

    #[test]
    fn document_excludes_in_progress_stroke() {
        let mut w = widget();
        w.pointer_down(Point::new(1.0, 1.0));
        w.pointer_move(Point::new(2.0, 2.0));
        w.pointer_up();

        w.pointer_down(Point::new(50.0, 50.0));
        w.pointer_move(Point::new(60.0, 60.0));

        // Submit mid-stroke only sees prior completed strokes.
        let doc = w.document();
        assert!(doc.as_str().contains("M1 1L2 2"));
        assert!(!doc.as_str().contains("M50 50"));
        assert!(w.is_capturing());
    }

    #[test]
    fn clear_empties_drawing_but_keeps_metadata() {
        let mut w = widget();
        w.metadata_mut().set("teamNumber", "254");
        w.pointer_down(Point::new(1.0, 1.0));
        w.pointer_move(Point::new(2.0, 2.0));
        w.pointer_up();

        w.clear();

        assert!(w.strokes().is_empty());
        assert!(!w.metadata().is_empty());
        // The cleared drawing serializes to background only.
        assert_eq!(w.document().as_str().matches("<path").count(), 0);
    }

    #[test]
    fn successful_submit_clears_strokes_and_metadata() {
        let mut w = widget();
        w.metadata_mut().set("teamNumber", "254");
        w.pointer_down(Point::new(1.0, 1.0));
        w.pointer_move(Point::new(2.0, 2.0));
        w.pointer_up();

        let mut sink = RecordingSink::default();
        w.submit(&mut sink).unwrap();

        assert!(w.strokes().is_empty());
        assert!(w.metadata().is_empty());

        // The sink received the pre-reset snapshot.
        let (metadata, document) = &sink.submissions[0];
        assert_eq!(metadata.fields()[0].1, "254");
        assert!(document.as_str().contains("M1 1L2 2"));
    }

    #[test]
    fn failed_submit_leaves_state_for_retry() {
        let mut w = widget();
        w.metadata_mut().set("teamNumber", "254");
        w.pointer_down(Point::new(1.0, 1.0));
        w.pointer_move(Point::new(2.0, 2.0));
        w.pointer_up();
        let before = w.document();

        assert!(w.submit(&mut FailingSink).is_err());

        assert_eq!(w.strokes().len(), 1);
        assert!(!w.metadata().is_empty());
        // Retrying serializes the identical snapshot.
        assert_eq!(w.document(), before);

        let mut sink = RecordingSink::default();
        w.submit(&mut sink).unwrap();
        assert_eq!(sink.submissions[0].1, before);
    }

    #[test]
    fn snapshot_survives_reset() {
        let mut w = widget();
        w.pointer_down(Point::new(1.0, 1.0));
        w.pointer_move(Point::new(2.0, 2.0));
        w.pointer_up();

        let snapshot = w.document();
        w.clear();

        // The document is a value, unaffected by later mutation.
        assert!(snapshot.as_str().contains("M1 1L2 2"));
        assert!(!w.document().as_str().contains("M1 1L2 2"));
    }
}
