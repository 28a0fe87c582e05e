use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by navigation and asset loading.
///
/// Both kinds are local to a single interaction: a failed selection leaves the
/// previous phase in place, and a failed load only affects the block that
/// asked for the asset.
#[derive(Debug, Error)]
pub enum LogbookError {
    #[error("Invalid selection: {0:?} is not a logbook phase")]
    InvalidSelection(String),

    #[error("Unknown phase: {0}")]
    UnknownPhase(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, LogbookError>;
