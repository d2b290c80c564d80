//! Popover configuration and RON loading.

use std::{fs, path::Path, time::Duration};

use popover_geom::{HorizontalPoint, Origin, VerticalPoint};
use serde::{Deserialize, Serialize};

use crate::{Error, Result, style::Style};

/// Delays and rate-limit periods used by the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Delay between a close request and the layer unmounting when animated.
    pub close_delay_ms: u64,
    /// Minimum spacing between resize-driven placement passes.
    pub resize_throttle_ms: u64,
    /// Minimum spacing between scroll-driven placement passes.
    pub scroll_throttle_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            close_delay_ms: 500,
            resize_throttle_ms: 100,
            scroll_throttle_ms: 50,
        }
    }
}

impl Timings {
    /// Close delay as a duration.
    pub fn close_delay(&self) -> Duration {
        Duration::from_millis(self.close_delay_ms)
    }

    /// Resize rate-limit period as a duration.
    pub fn resize_period(&self) -> Duration {
        Duration::from_millis(self.resize_throttle_ms)
    }

    /// Scroll rate-limit period as a duration.
    pub fn scroll_period(&self) -> Duration {
        Duration::from_millis(self.scroll_throttle_ms)
    }
}

/// Caller-supplied popover options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopoverConfig {
    /// Point on the anchor the target attaches to.
    pub anchor_origin: Origin,
    /// Point on the target that attaches to the anchor origin.
    pub target_origin: Origin,
    /// Move the target back inside the viewport when it would overflow.
    pub can_auto_position: bool,
    /// Request a close when the anchor scrolls out of the viewport.
    pub auto_close_when_off_screen: bool,
    /// Delay unmounting while the close transition plays.
    pub animated: bool,
    /// Ask the layer to capture clicks outside the target.
    pub use_layer_for_click_away: bool,
    /// Caller style merged into the target's root style.
    pub style: Style,
    /// Timer and rate-limit settings.
    pub timings: Timings,
}

impl Default for PopoverConfig {
    fn default() -> Self {
        Self {
            anchor_origin: Origin::new(VerticalPoint::Bottom, HorizontalPoint::Left),
            target_origin: Origin::new(VerticalPoint::Top, HorizontalPoint::Left),
            can_auto_position: true,
            auto_close_when_off_screen: true,
            animated: true,
            use_layer_for_click_away: true,
            style: Style::new().with("overflow-y", "auto"),
            timings: Timings::default(),
        }
    }
}

impl PopoverConfig {
    /// Parse a configuration from RON text. Missing fields take defaults.
    pub fn from_ron(text: &str) -> Result<Self> {
        parse_ron(text, None)
    }
}

/// Parse RON text, attributing errors to `path` when given.
pub(crate) fn parse_ron<T>(text: &str, path: Option<&Path>) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    ron::from_str(text).map_err(|e| Error::Parse {
        path: path.map(Path::to_path_buf),
        message: e.to_string(),
    })
}

/// Load a [`PopoverConfig`] from a RON file.
pub fn load_from_path(path: &Path) -> Result<PopoverConfig> {
    let text = fs::read_to_string(path).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_ron(&text, Some(path))
}
