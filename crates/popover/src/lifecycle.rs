use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    time::Instant,
};

use crate::style::TargetStyle;

/// Lifecycle phase of a popover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Not shown; the layer is unmounted.
    Closed,
    /// Shown and positioned on every pass.
    Open,
    /// Close requested; the layer stays mounted while the transition plays
    /// and unmounts at `deadline`.
    Closing {
        /// When the close timer elapses.
        deadline: Instant,
    },
}

impl Phase {
    /// The layer is mounted (open or closing).
    pub fn layer_open(self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// The target should be shown at full opacity and scale.
    pub fn transition_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Closed => "closed",
            Self::Open => "open",
            Self::Closing { .. } => "closing",
        })
    }
}

/// Why a placement pass did not write anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The popover is not in [`Phase::Open`].
    NotOpen,
    /// The target has not been mounted or cannot be measured yet.
    TargetNotMounted,
    /// Neither the anchor nor the mounting container could be measured.
    NoAnchor,
}

/// Result of a placement pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassOutcome {
    /// The placement was written to the target.
    Placed(TargetStyle),
    /// Nothing was written.
    Skipped(SkipReason),
}

impl PassOutcome {
    /// Written placement, if any.
    pub fn placed(self) -> Option<TargetStyle> {
        match self {
            Self::Placed(style) => Some(style),
            Self::Skipped(_) => None,
        }
    }
}
