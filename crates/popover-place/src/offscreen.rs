use popover_geom::{PointMap, Viewport};

/// True when the anchor's top-left corner lies outside the viewport.
pub fn anchor_offscreen(anchor: &PointMap, viewport: Viewport) -> bool {
    anchor.top < 0.0
        || anchor.top > viewport.height
        || anchor.left < 0.0
        || anchor.left > viewport.width
}
