//! Named point maps for anchors and targets.

use crate::{Axis, Point, Rect, Size};

/// Coordinate of each of the six named points of a rectangle.
///
/// Anchor maps are absolute (viewport coordinates); target maps are relative
/// to the target's own top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointMap {
    /// Top edge.
    pub top: f64,
    /// Vertical center line.
    pub center: f64,
    /// Bottom edge.
    pub bottom: f64,
    /// Left edge.
    pub left: f64,
    /// Horizontal center line.
    pub middle: f64,
    /// Right edge.
    pub right: f64,
}

impl PointMap {
    /// Coordinate of the named point.
    pub fn get(&self, point: Point) -> f64 {
        match point {
            Point::Top => self.top,
            Point::Center => self.center,
            Point::Bottom => self.bottom,
            Point::Left => self.left,
            Point::Middle => self.middle,
            Point::Right => self.right,
        }
    }

    /// Far edge along `axis` (`right` or `bottom`).
    ///
    /// For a relative target map this is the target's extent on that axis.
    pub fn far_edge(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.right,
            Axis::Vertical => self.bottom,
        }
    }
}

/// Absolute point map of a measured anchor rectangle.
///
/// A zero-size rectangle yields coincident points.
pub fn anchor_points(rect: &Rect) -> PointMap {
    PointMap {
        top: rect.top,
        center: rect.center(),
        bottom: rect.bottom(),
        left: rect.left,
        middle: rect.middle(),
        right: rect.right(),
    }
}

/// Point map of a target relative to its own top-left corner.
pub fn target_points(size: Size) -> PointMap {
    PointMap {
        top: 0.0,
        center: size.height / 2.0,
        bottom: size.height,
        left: 0.0,
        middle: size.width / 2.0,
        right: size.width,
    }
}
