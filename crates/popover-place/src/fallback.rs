//! Alternate alignments to try when the naive placement overflows.

use popover_geom::{Axis, Origin, Point};

use crate::overlap::{Overlap, classify};

/// Fallback plan for a single axis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AxisPlan {
    /// Axis this plan applies to.
    pub axis: Axis,
    /// Classification of the unflipped origin pair.
    pub overlap: Overlap,
    /// Anchor point to align against while falling back.
    pub anchor: Point,
    /// Target points to try, in order. Two or three entries; only the first
    /// two are ever tried.
    pub candidates: Vec<Point>,
}

/// Plan one axis.
///
/// Candidates are the axis edges other than the current target origin, with
/// the median inserted first when the pair is [`Overlap::Auto`] and second
/// otherwise. The anchor point flips to the opposite edge unless the pair is
/// `Auto`. `Inclusive` and `Exclusive` pairs produce the same candidates.
pub fn plan_axis(anchor_origin: Origin, target_origin: Origin, axis: Axis) -> AxisPlan {
    let anchor = anchor_origin.point(axis);
    let target = target_origin.point(axis);
    let median = axis.median();
    let overlap = classify(anchor, target, median);

    let mut candidates: Vec<Point> = axis.edges().into_iter().filter(|p| *p != target).collect();
    let median_at = if overlap == Overlap::Auto { 0 } else { 1 };
    candidates.insert(median_at.min(candidates.len()), median);

    let anchor = match overlap {
        Overlap::Auto => anchor,
        Overlap::Inclusive | Overlap::Exclusive => anchor.flip(),
    };

    AxisPlan {
        axis,
        overlap,
        anchor,
        candidates,
    }
}

/// Fallback plans for both axes, planned independently.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FallbackPlan {
    /// Plan for the horizontal axis.
    pub horizontal: AxisPlan,
    /// Plan for the vertical axis.
    pub vertical: AxisPlan,
}

impl FallbackPlan {
    /// Plan both axes for the given origins.
    pub fn new(anchor_origin: Origin, target_origin: Origin) -> Self {
        Self {
            horizontal: plan_axis(anchor_origin, target_origin, Axis::Horizontal),
            vertical: plan_axis(anchor_origin, target_origin, Axis::Vertical),
        }
    }

    /// Plan for `axis`.
    pub fn axis(&self, axis: Axis) -> &AxisPlan {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }
}
