// Copyright 2026 the Scrawl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke data: an ordered polyline of surface-local points.

use alloc::vec::Vec;
use kurbo::Point;

/// An ordered sequence of surface-local points, frozen once recorded.
///
/// Point order is temporal capture order: the first point is where the
/// interaction started, each subsequent point is a move. Coordinates are
/// surface-local with the origin at the top-left and y increasing downward.
///
/// A stroke with fewer than 2 points is *degenerate*: it was recorded (a
/// tap still ends up in the collection) but has no renderable path, so
/// serializers skip it. See [`Stroke::is_degenerate`].
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    /// Creates a stroke from an already-ordered point sequence.
    #[must_use]
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Returns the recorded points in capture order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns `true` when the stroke has fewer than 2 points.
    ///
    /// Degenerate strokes have no line segments and produce no path when
    /// serialized, but they are still part of the collection.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2
    }
}

impl From<Vec<Point>> for Stroke {
    fn from(points: Vec<Point>) -> Self {
        Self::from_points(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn empty_stroke_is_degenerate() {
        assert!(Stroke::from_points(Vec::new()).is_degenerate());
    }

    #[test]
    fn single_point_stroke_is_degenerate() {
        let stroke = Stroke::from_points(vec![Point::new(5.0, 5.0)]);
        assert!(stroke.is_degenerate());
        assert_eq!(stroke.points().len(), 1);
    }

    #[test]
    fn two_point_stroke_is_not_degenerate() {
        let stroke = Stroke::from_points(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        assert!(!stroke.is_degenerate());
    }

    #[test]
    fn points_preserve_capture_order() {
        let pts = vec![
            Point::new(10.0, 10.0),
            Point::new(20.0, 10.0),
            Point::new(20.0, 20.0),
        ];
        let stroke = Stroke::from_points(pts.clone());
        assert_eq!(stroke.points(), &pts[..]);
    }
}
