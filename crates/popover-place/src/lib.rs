//! Placement core for anchored popovers.
//!
//! The pipeline is pure arithmetic over freshly measured point maps:
//! [`raw_offset`] aligns the target origin with the anchor origin, and
//! [`auto_position`] moves the result back inside the viewport per axis using
//! the candidates from [`plan_axis`] when the naive placement overflows.
//! [`anchor_offscreen`] is independent and only looks at the anchor.
#![warn(missing_docs)]

mod auto;
mod calc;
mod fallback;
mod offscreen;
mod overlap;


pub use auto::auto_position;
pub use calc::raw_offset;
pub use fallback::{AxisPlan, FallbackPlan, plan_axis};
pub use offscreen::anchor_offscreen;
pub use overlap::{Overlap, classify};
pub use popover_geom::{Axis, Offset, Origin, Point, PointMap, Viewport};
