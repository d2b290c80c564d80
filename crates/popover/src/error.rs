//! Error types for the popover crate.

use std::{path::PathBuf, result::Result as StdResult};

use thiserror::Error;

/// Convenient result type for the popover crate.
pub type Result<T> = StdResult<T, Error>;

/// Errors surfaced by the popover crate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Neither the anchor nor the fallback container could be measured.
    #[error("no anchor: neither an anchor element nor the mounting container is measurable")]
    NoAnchor,

    /// I/O failure while reading a configuration file.
    #[error("read error at {}: {message}", .path.display())]
    Read {
        /// File that could not be read.
        path: PathBuf,
        /// Human-readable error message.
        message: String,
    },

    /// RON syntax or schema error in a configuration.
    #[error("config parse error{}: {message}", location(.path.as_ref()))]
    Parse {
        /// File the configuration came from, if any.
        path: Option<PathBuf>,
        /// Human-readable error message including line and column.
        message: String,
    },
}

/// Render the ` at <path>` suffix of a parse error.
fn location(path: Option<&PathBuf>) -> String {
    path.map(|p| format!(" at {}", p.display())).unwrap_or_default()
}
