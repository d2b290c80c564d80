//! Viewport-aware correction of a naive placement.

use popover_geom::{Axis, Offset, Origin, PointMap, Viewport};
use tracing::trace;

use crate::fallback::{AxisPlan, FallbackPlan};

/// Number of fallback candidates tried per axis before giving up.
const MAX_CANDIDATES: usize = 2;

/// Move an overflowing `naive` placement back inside `viewport`.
///
/// Each axis is resolved on its own: a placement that already fits is kept
/// as is, otherwise the first two candidates of the axis plan are tried
/// against the flipped anchor point, and when neither fits the naive value is
/// clamped to zero and allowed to overflow the far edge. The result is never
/// negative.
pub fn auto_position(
    anchor: &PointMap,
    target: &PointMap,
    anchor_origin: Origin,
    target_origin: Origin,
    naive: Offset,
    viewport: Viewport,
) -> Offset {
    let plan = FallbackPlan::new(anchor_origin, target_origin);
    Axis::ALL.into_iter().fold(naive, |offset, axis| {
        let value = resolve_axis(
            anchor,
            target,
            plan.axis(axis),
            naive.along(axis),
            viewport.extent(axis),
        );
        offset.with(axis, value)
    })
}

/// Resolve a single axis against the viewport extent `limit`.
fn resolve_axis(
    anchor: &PointMap,
    target: &PointMap,
    plan: &AxisPlan,
    naive: f64,
    limit: f64,
) -> f64 {
    let extent = target.far_edge(plan.axis);
    if naive >= 0.0 && naive + extent <= limit {
        return naive;
    }

    let base = anchor.get(plan.anchor);
    for &candidate in plan.candidates.iter().take(MAX_CANDIDATES) {
        let trial = base - target.get(candidate);
        if trial + extent <= limit {
            trace!(
                axis = ?plan.axis,
                overlap = %plan.overlap,
                anchor = %plan.anchor,
                target = %candidate,
                naive,
                trial,
                "auto_position: fallback fits"
            );
            return trial.max(0.0);
        }
    }

    trace!(axis = ?plan.axis, naive, "auto_position: no fallback fits; clamping");
    naive.max(0.0)
}
