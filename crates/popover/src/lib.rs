//! Anchored popover lifecycle.
//!
//! [`Popover`] owns the open/closing/closed state machine, the close timer
//! and the rate-limited resize and scroll handlers. Each placement pass
//! measures the anchor and target through a [`Surface`], reads the viewport
//! from a [`ViewportSource`], positions the target with `popover-place` and
//! writes a [`TargetStyle`] back.
#![warn(missing_docs)]

mod config;
mod error;
mod lifecycle;
mod orchestrator;
mod style;
mod surface;
mod throttle;

#[cfg(test)]
mod test_lifecycle;
#[cfg(test)]
mod test_placement;

pub use config::{PopoverConfig, Timings, load_from_path};
pub use error::{Error, Result};
pub use lifecycle::{PassOutcome, Phase, SkipReason};
pub use orchestrator::{CloseHandler, Popover};
pub use popover_geom::{HorizontalPoint, Offset, Origin, Rect, Size, VerticalPoint, Viewport};
pub use style::{Style, TargetStyle, merge_styles, root_style, transform_origin};
pub use surface::{AnchorId, CloseReason, Surface, ViewportSource};
pub use throttle::RateLimiter;
