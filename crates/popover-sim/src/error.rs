//! Error handling for the popover-sim crate.

use std::{io, result};

use thiserror::Error;

/// Convenient result type for popover-sim operations.
pub type Result<T> = result::Result<T, Error>;

/// Errors that can occur while running a scenario.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrapper for standard I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Popover configuration errors.
    #[error("Popover error: {0}")]
    Popover(#[from] popover::Error),
    /// The scenario file is not valid RON or does not match the schema.
    #[error("Scenario parse error: {0}")]
    Scenario(#[from] ron::error::SpannedError),
    /// The placement pass did not write anything.
    #[error("Nothing placed: {0}")]
    NotPlaced(String),
}
