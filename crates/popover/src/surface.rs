//! Collaborator seams: measurement, style writes and the viewport.

use std::fmt::{Display, Formatter, Result as FmtResult};

use popover_geom::{Rect, Size, Viewport};

use crate::style::TargetStyle;

/// Opaque handle naming an anchor element on the host surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnchorId(u64);

impl AnchorId {
    /// Wrap a host-defined element id.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Host-defined element id.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Why the popover asked to be closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseReason {
    /// A click landed outside the target.
    ClickAway,
    /// The anchor scrolled out of the viewport.
    OffScreen,
}

impl Display for CloseReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::ClickAway => "clickAway",
            Self::OffScreen => "offScreen",
        })
    }
}

/// Source of the current viewport size.
pub trait ViewportSource {
    /// Current viewport size; may change between calls.
    fn viewport(&self) -> Viewport;
}

impl ViewportSource for Viewport {
    fn viewport(&self) -> Viewport {
        *self
    }
}

/// The layer the popover target is mounted into.
pub trait Surface {
    /// Measure an anchor element. `None` when it is not attached.
    fn anchor_rect(&self, anchor: AnchorId) -> Option<Rect>;

    /// Measure the popover's own mounting node, used when no anchor is given.
    fn container_rect(&self) -> Option<Rect>;

    /// Measure the target. `None` while the target is not mounted.
    fn target_size(&self) -> Option<Size>;

    /// Write the resolved placement to the target.
    fn write_style(&mut self, style: &TargetStyle);

    /// The layer should be mounted (`true`) or removed (`false`).
    ///
    /// `capture_click_away` asks the layer to catch clicks outside the target
    /// and report them through [`crate::Popover::on_click_away`].
    fn layer_open_changed(&mut self, open: bool, capture_click_away: bool);
}
