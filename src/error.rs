//! Top-level error types.

use std::path::PathBuf;

use crate::config::ConfigError;
use crate::source::SourceError;

/// Errors raised while a playback pass is running.
#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("Display error: {0}")]
    Display(#[from] std::io::Error),
}

/// Errors surfaced to the user by the player front end.
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    /// The video path does not name an existing file
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Playback(#[from] PlaybackError),
}
