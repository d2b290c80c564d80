//! Geometry primitives for anchored popover placement.
//!
//! Coordinates are viewport pixels with the origin at the top-left corner and
//! `y` growing downwards, matching what platform measurement reports for
//! on-screen elements.
#![warn(missing_docs)]

use serde::{Deserialize, Serialize};

mod origin;
mod points;

pub use origin::{HorizontalPoint, Origin, Point, VerticalPoint};
pub use points::{PointMap, anchor_points, target_points};

/// Measured rectangle in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Distance from the top of the viewport.
    pub top: f64,
    /// Distance from the left of the viewport.
    pub left: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rect {
    /// Construct a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    #[inline]
    /// Right edge.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    /// Horizontal center line.
    pub fn middle(&self) -> f64 {
        self.left + self.width / 2.0
    }

    #[inline]
    /// Vertical center line.
    pub fn center(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// Size of the rectangle with its position dropped.
    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }
}

/// Width and height of a measured element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// Construct a size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Current size of the visible viewport. Read fresh on every placement pass.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Viewport width in pixels.
    pub width: f64,
    /// Viewport height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Construct a viewport of the given size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Extent of the viewport along `axis`.
    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// Top-left position assigned to the target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    /// Vertical position.
    pub top: f64,
    /// Horizontal position.
    pub left: f64,
}

impl Offset {
    /// Construct an offset.
    #[must_use]
    pub const fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }

    /// Component along `axis`.
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// Copy of `self` with the component along `axis` replaced.
    #[must_use]
    pub fn with(self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::Horizontal => Self {
                left: value,
                ..self
            },
            Axis::Vertical => Self { top: value, ..self },
        }
    }

    /// Both components clamped to be non-negative.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            top: self.top.max(0.0),
            left: self.left.max(0.0),
        }
    }
}

/// Placement axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left/middle/right.
    Horizontal,
    /// Top/center/bottom.
    Vertical,
}

impl Axis {
    /// Both axes, horizontal first.
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// Center-line point of the axis.
    pub fn median(self) -> Point {
        match self {
            Self::Horizontal => Point::Middle,
            Self::Vertical => Point::Center,
        }
    }

    /// The two edge points of the axis, near edge first.
    pub fn edges(self) -> [Point; 2] {
        match self {
            Self::Horizontal => [Point::Left, Point::Right],
            Self::Vertical => [Point::Top, Point::Bottom],
        }
    }
}
