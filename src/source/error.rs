//! Frame source error types.

use std::path::PathBuf;

/// Errors that can occur while opening or reading a frame source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The ffmpeg or ffprobe executable could not be found
    #[error("{binary} not found. Please install FFmpeg (it provides ffmpeg and ffprobe) and make sure it is on your PATH")]
    FfmpegNotFound { binary: String },

    /// Failed to spawn a decoder process
    #[error("Failed to spawn {binary}: {source}")]
    SpawnFailed {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    /// The file could not be opened as a video
    #[error("Cannot open video file: {} ({reason})", path.display())]
    OpenFailed { path: PathBuf, reason: String },

    /// The file has no video stream
    #[error("No video stream found in {}", path.display())]
    NoVideoStream { path: PathBuf },

    /// ffprobe produced output we could not understand
    #[error("Invalid probe output: {0}")]
    InvalidProbe(String),

    /// I/O error while reading decoded frames
    #[error("Decoder I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SourceError {
    /// Map a spawn failure, turning a missing executable into `FfmpegNotFound`.
    pub(crate) fn spawn(binary: &str, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            SourceError::FfmpegNotFound {
                binary: binary.to_string(),
            }
        } else {
            SourceError::SpawnFailed {
                binary: binary.to_string(),
                source: err,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_not_found() {
        let err = SourceError::spawn(
            "ffprobe",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(matches!(err, SourceError::FfmpegNotFound { ref binary } if binary == "ffprobe"));
        assert!(err.to_string().contains("ffprobe not found"));
    }

    #[test]
    fn test_spawn_other_error() {
        let err = SourceError::spawn(
            "ffmpeg",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope"),
        );
        assert!(matches!(err, SourceError::SpawnFailed { .. }));
        assert_eq!(err.to_string(), "Failed to spawn ffmpeg: nope");
    }

    #[test]
    fn test_open_failed_display() {
        let err = SourceError::OpenFailed {
            path: PathBuf::from("clip.mp4"),
            reason: "moov atom not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot open video file: clip.mp4 (moov atom not found)"
        );
    }
}
