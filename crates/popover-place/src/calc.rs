use popover_geom::{Axis, Offset, Origin, PointMap};

/// Naive offset aligning `target_origin` on the target with `anchor_origin`
/// on the anchor.
///
/// No clamping: the result may be negative or overflow the viewport.
pub fn raw_offset(
    anchor: &PointMap,
    target: &PointMap,
    anchor_origin: Origin,
    target_origin: Origin,
) -> Offset {
    let along = |axis: Axis| {
        anchor.get(anchor_origin.point(axis)) - target.get(target_origin.point(axis))
    };
    Offset::new(along(Axis::Vertical), along(Axis::Horizontal))
}
