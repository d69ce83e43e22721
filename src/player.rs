//! Player construction and the guarded playback call.

use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::ascii::GlyphRamp;
use crate::config::{FfmpegConfig, PlayerConfig};
use crate::display::Display;
use crate::error::{PlaybackError, PlayerError};
use crate::playback::{CancelToken, Clock, Pacing, PlaybackOutcome, PlaybackSession, Scheduler};
use crate::source::{FfmpegSource, FrameSource};

/// Settings fixed when a player is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerOptions {
    /// Output width in characters
    pub width: u16,
    /// Glyph ramp used for every frame
    pub ramp: GlyphRamp,
    /// Start-up banner pause and fallback frame delay
    pub pacing: Pacing,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            width: 120,
            ramp: GlyphRamp::Compact,
            pacing: Pacing::default(),
        }
    }
}

impl PlayerOptions {
    /// Options from config values; command-line overrides are applied by
    /// the caller.
    pub fn from_config(config: &PlayerConfig) -> Self {
        Self {
            width: config.width.max(1),
            ramp: GlyphRamp::from_detailed(config.detailed),
            pacing: Pacing {
                banner_pause: config.banner_pause(),
                fallback_frame_delay: config.fallback_frame_delay(),
            },
        }
    }

    pub fn with_width(mut self, width: u16) -> Self {
        self.width = width.max(1);
        self
    }

    pub fn with_ramp(mut self, ramp: GlyphRamp) -> Self {
        self.ramp = ramp;
        self
    }

    pub fn with_banner_pause(mut self, pause: Duration) -> Self {
        self.pacing.banner_pause = pause;
        self
    }
}

/// Check that `path` names an existing file, before any decoder is started.
pub fn validate_video_path(path: &Path) -> Result<(), PlayerError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(PlayerError::FileNotFound(path.to_path_buf()))
    }
}

/// A video opened for playback.
///
/// Owns its frame source exclusively; [`Player::play`] consumes the player
/// and releases the source on every exit path.
#[derive(Debug)]
pub struct Player<S: FrameSource> {
    source: S,
    session: PlaybackSession,
    pacing: Pacing,
}

impl Player<FfmpegSource> {
    /// Validate `path` and open it with ffmpeg.
    ///
    /// # Errors
    /// * `PlayerError::FileNotFound` - nothing is opened in this case
    /// * `PlayerError::Source` - the decoder could not open the file
    pub fn open(
        path: &Path,
        options: PlayerOptions,
        ffmpeg: &FfmpegConfig,
    ) -> Result<Self, PlayerError> {
        validate_video_path(path)?;
        let source = FfmpegSource::open(path, ffmpeg)?;
        Ok(Self::new(path, source, options))
    }
}

impl<S: FrameSource> Player<S> {
    /// Wrap an already opened source.
    pub fn new(path: impl Into<PathBuf>, source: S, options: PlayerOptions) -> Self {
        let session = PlaybackSession::new(path, source.info(), options.ramp, options.width);
        Self {
            source,
            session,
            pacing: options.pacing,
        }
    }

    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    /// Play from `start_index` until the stream ends or `cancel` fires.
    ///
    /// The source is released exactly once when this returns, whether
    /// playback completed, was interrupted, or failed.
    pub fn play<D, C>(
        self,
        start_index: u64,
        display: &mut D,
        clock: &C,
        cancel: &CancelToken,
    ) -> Result<PlaybackOutcome, PlaybackError>
    where
        D: Display + ?Sized,
        C: Clock + ?Sized,
    {
        let Player {
            source,
            session,
            pacing,
        } = self;
        let mut source = ReleaseGuard::new(source);
        let mut scheduler = Scheduler::new(session, start_index, pacing);
        scheduler.run(&mut *source, display, clock, cancel)
    }
}

/// Releases the wrapped source when dropped.
struct ReleaseGuard<S: FrameSource> {
    source: S,
}

impl<S: FrameSource> ReleaseGuard<S> {
    fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: FrameSource> Deref for ReleaseGuard<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.source
    }
}

impl<S: FrameSource> DerefMut for ReleaseGuard<S> {
    fn deref_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

impl<S: FrameSource> Drop for ReleaseGuard<S> {
    fn drop(&mut self) {
        self.source.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_from_config() {
        let config = PlayerConfig {
            width: 80,
            detailed: true,
            banner_pause_ms: 0,
            fallback_frame_delay_ms: 40,
        };
        let options = PlayerOptions::from_config(&config);
        assert_eq!(options.width, 80);
        assert_eq!(options.ramp, GlyphRamp::Detailed);
        assert_eq!(options.pacing.banner_pause, Duration::ZERO);
        assert_eq!(options.pacing.fallback_frame_delay, Duration::from_millis(40));
    }

    #[test]
    fn test_options_width_never_zero() {
        assert_eq!(PlayerOptions::default().with_width(0).width, 1);
    }

    #[test]
    fn test_validate_missing_path() {
        let err = validate_video_path(Path::new("/definitely/not/here.mp4")).unwrap_err();
        assert_eq!(err.to_string(), "File not found: /definitely/not/here.mp4");
    }

    #[test]
    fn test_validate_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            validate_video_path(dir.path()),
            Err(PlayerError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_open_missing_file_does_not_probe() {
        // A bogus ffprobe would fail with FfmpegNotFound if it were run
        let ffmpeg = FfmpegConfig {
            ffmpeg: "ascii-player-no-such-ffmpeg".to_string(),
            ffprobe: "ascii-player-no-such-ffprobe".to_string(),
        };
        let err = Player::open(
            Path::new("/definitely/not/here.mp4"),
            PlayerOptions::default(),
            &ffmpeg,
        )
        .unwrap_err();
        assert!(matches!(err, PlayerError::FileNotFound(_)));
    }
}
