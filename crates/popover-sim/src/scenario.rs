//! Scenario files: a starting layout plus a timed event script.

use std::{fs, path::Path};

use popover::{PopoverConfig, Rect, Size, Viewport};
use serde::Deserialize;

use crate::error::Result;

/// One timed event in a scenario.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Step {
    /// Milliseconds since the scenario started.
    pub at_ms: u64,
    /// What happens.
    pub event: Event,
}

/// Host events a scenario can script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    /// The owner sets `open = true` for the scenario's anchor.
    Open,
    /// The owner sets `open = false`.
    Close,
    /// The host re-renders.
    Update,
    /// A click lands outside the target.
    ClickAway,
    /// The window resizes to the given viewport.
    Resize(Viewport),
    /// The window scrolls; the anchor moves to the given rectangle first.
    Scroll(Rect),
    /// The anchor moves without a scroll event.
    MoveAnchor(Rect),
    /// The anchor is removed from the document.
    DetachAnchor,
    /// The target's measured size changes.
    ResizeTarget(Size),
    /// Replace the popover configuration.
    Configure(PopoverConfig),
}

/// A complete scenario.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scenario {
    /// Initial viewport size.
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    /// Popover options.
    #[serde(default)]
    pub config: PopoverConfig,
    /// Anchor rectangle; `None` leaves the popover unanchored.
    #[serde(default)]
    pub anchor: Option<Rect>,
    /// Rectangle of the popover's mounting node.
    #[serde(default)]
    pub container: Option<Rect>,
    /// Target size; `None` means the target never mounts.
    #[serde(default)]
    pub target: Option<Size>,
    /// Close the popover when it asks to be closed.
    #[serde(default = "default_honor_close")]
    pub honor_close: bool,
    /// Timed events, replayed in time order.
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Desktop-ish default viewport.
const fn default_viewport() -> Viewport {
    Viewport::new(800.0, 600.0)
}

/// Owners normally honour close requests.
const fn default_honor_close() -> bool {
    true
}

impl Scenario {
    /// Parse a scenario from RON text.
    pub fn from_ron(text: &str) -> Result<Self> {
        Ok(ron::from_str(text)?)
    }

    /// Read and parse a scenario file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_ron(&text)
    }
}
