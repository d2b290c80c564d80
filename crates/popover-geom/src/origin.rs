//! Named alignment points and origins.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::Axis;

/// Any named point on a rectangle, on either axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Point {
    /// Top edge.
    Top,
    /// Vertical center line.
    Center,
    /// Bottom edge.
    Bottom,
    /// Left edge.
    Left,
    /// Horizontal center line.
    Middle,
    /// Right edge.
    Right,
}

impl Point {
    /// Axis the point lies on.
    pub fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Center | Self::Bottom => Axis::Vertical,
            Self::Left | Self::Middle | Self::Right => Axis::Horizontal,
        }
    }

    /// Opposite edge on the same axis. Median points map to themselves.
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Center | Self::Middle => self,
        }
    }

    /// Lowercase name of the point.
    pub fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Middle => "middle",
            Self::Right => "right",
        }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

/// Vertical component of an origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalPoint {
    /// Top edge.
    #[default]
    Top,
    /// Vertical center line.
    Center,
    /// Bottom edge.
    Bottom,
}

/// Horizontal component of an origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalPoint {
    /// Left edge.
    #[default]
    Left,
    /// Horizontal center line.
    Middle,
    /// Right edge.
    Right,
}

impl From<VerticalPoint> for Point {
    fn from(v: VerticalPoint) -> Self {
        match v {
            VerticalPoint::Top => Self::Top,
            VerticalPoint::Center => Self::Center,
            VerticalPoint::Bottom => Self::Bottom,
        }
    }
}

impl From<HorizontalPoint> for Point {
    fn from(h: HorizontalPoint) -> Self {
        match h {
            HorizontalPoint::Left => Self::Left,
            HorizontalPoint::Middle => Self::Middle,
            HorizontalPoint::Right => Self::Right,
        }
    }
}

/// Alignment point on a rectangle: one vertical and one horizontal name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Origin {
    /// Point on the vertical axis.
    pub vertical: VerticalPoint,
    /// Point on the horizontal axis.
    pub horizontal: HorizontalPoint,
}

impl Origin {
    /// Construct an origin.
    #[must_use]
    pub const fn new(vertical: VerticalPoint, horizontal: HorizontalPoint) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    /// The origin's point on `axis`.
    pub fn point(&self, axis: Axis) -> Point {
        match axis {
            Axis::Horizontal => self.horizontal.into(),
            Axis::Vertical => self.vertical.into(),
        }
    }
}

impl Display for Origin {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{} {}",
            self.point(Axis::Vertical),
            self.point(Axis::Horizontal)
        )
    }
}
