use std::fmt::{Display, Formatter, Result as FmtResult};

use popover_geom::Point;

/// Relationship between the anchor and target origin points on one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlap {
    /// One of the origins sits on the axis median; centering is its own
    /// fallback and the anchor origin is never flipped.
    Auto,
    /// Both origins name the same edge.
    Inclusive,
    /// The origins name different edges.
    Exclusive,
}

impl Display for Overlap {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::Inclusive => "inclusive",
            Self::Exclusive => "exclusive",
        })
    }
}

/// Classify an anchor/target origin pair on the axis whose median is `median`.
pub fn classify(anchor: Point, target: Point, median: Point) -> Overlap {
    if anchor == median || target == median {
        Overlap::Auto
    } else if anchor == target {
        Overlap::Inclusive
    } else {
        Overlap::Exclusive
    }
}
