//! Playback session state and the text shown around frames.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::ascii::{FrameDimensions, GlyphRamp};
use crate::source::SourceInfo;

/// Frame delay used when the source reports no usable frame rate (~30 fps).
pub const FALLBACK_FRAME_DELAY: Duration = Duration::from_millis(33);

/// State of one playback pass.
///
/// Everything except the frame index is fixed at construction. The index
/// only moves forward and stays within `[0, total_frames]` when the total
/// is known.
#[derive(Debug, Clone)]
pub struct PlaybackSession {
    path: PathBuf,
    frame_rate: f64,
    total_frames: u64,
    source_width: u32,
    source_height: u32,
    index: u64,
    ramp: GlyphRamp,
    dims: FrameDimensions,
}

impl PlaybackSession {
    /// Build a session for a source, deriving the grid height from its
    /// aspect ratio.
    pub fn new(path: impl Into<PathBuf>, info: &SourceInfo, ramp: GlyphRamp, width: u16) -> Self {
        Self {
            path: path.into(),
            frame_rate: info.frame_rate,
            total_frames: info.total_frames,
            source_width: info.width,
            source_height: info.height,
            index: 0,
            ramp,
            dims: FrameDimensions::for_source(width, info.width, info.height),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn frame_rate(&self) -> f64 {
        self.frame_rate
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn ramp(&self) -> GlyphRamp {
        self.ramp
    }

    pub fn dimensions(&self) -> FrameDimensions {
        self.dims
    }

    /// Set the starting index.
    ///
    /// Frame counts may only be estimates, so the index is taken as given
    /// and a smaller known count is raised to it. A start past the real end
    /// shows up as an immediate end-of-stream.
    pub(crate) fn start_at(&mut self, start_index: u64) -> u64 {
        self.index = start_index;
        if self.total_frames > 0 && self.index > self.total_frames {
            self.total_frames = self.index;
        }
        self.index
    }

    /// Move past the frame just shown.
    ///
    /// Containers without a frame index only give an estimated count; when
    /// playback runs past it the count is raised to match.
    pub(crate) fn advance(&mut self) {
        self.index += 1;
        if self.total_frames > 0 && self.index > self.total_frames {
            self.total_frames = self.index;
        }
    }

    /// Target time between frames for this session.
    pub fn frame_delay(&self, fallback: Duration) -> Duration {
        frame_delay(self.frame_rate, fallback)
    }

    /// Progress line for the frame at the current index.
    pub fn progress_line(&self) -> String {
        progress_line(self.index, self.total_frames)
    }

    /// Banner printed before playback starts.
    pub fn banner(&self) -> String {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string());
        format!(
            "\nPlaying: {}\nResolution: {}x{} -> {}x{} (ASCII)\nFPS: {:.2} | Frames: {}\n\nPress Ctrl+C to stop\n\n",
            name,
            self.source_width,
            self.source_height,
            self.dims.width,
            self.dims.height,
            self.frame_rate,
            self.total_frames
        )
    }
}

/// `1 / frame_rate`, or `fallback` when the rate is zero, negative or not finite.
pub fn frame_delay(frame_rate: f64, fallback: Duration) -> Duration {
    if frame_rate > 0.0 && frame_rate.is_finite() {
        Duration::from_secs_f64(1.0 / frame_rate)
    } else {
        fallback
    }
}

/// `Frame: <index>/<total> | <pct>%`, with 0% when the total is unknown.
pub fn progress_line(index: u64, total: u64) -> String {
    let percent = if total == 0 {
        0.0
    } else {
        index as f64 / total as f64 * 100.0
    };
    format!("Frame: {}/{} | {:.1}%", index, total, percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(frame_rate: f64, total_frames: u64) -> SourceInfo {
        SourceInfo {
            frame_rate,
            total_frames,
            width: 1920,
            height: 1080,
        }
    }

    #[test]
    fn test_frame_delay_from_rate() {
        let delay = frame_delay(30.0, FALLBACK_FRAME_DELAY);
        assert!((delay.as_secs_f64() - 1.0 / 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_frame_delay_fallback() {
        assert_eq!(frame_delay(0.0, FALLBACK_FRAME_DELAY), Duration::from_millis(33));
        assert_eq!(frame_delay(-5.0, FALLBACK_FRAME_DELAY), Duration::from_millis(33));
        assert_eq!(frame_delay(f64::NAN, FALLBACK_FRAME_DELAY), Duration::from_millis(33));
        assert_eq!(frame_delay(f64::INFINITY, FALLBACK_FRAME_DELAY), Duration::from_millis(33));
    }

    #[test]
    fn test_progress_line() {
        assert_eq!(progress_line(45, 90), "Frame: 45/90 | 50.0%");
        assert_eq!(progress_line(0, 90), "Frame: 0/90 | 0.0%");
        assert_eq!(progress_line(1, 3), "Frame: 1/3 | 33.3%");
    }

    #[test]
    fn test_progress_line_unknown_total() {
        assert_eq!(progress_line(12, 0), "Frame: 12/0 | 0.0%");
    }

    #[test]
    fn test_session_dimensions() {
        let session = PlaybackSession::new("clip.mp4", &info(30.0, 90), GlyphRamp::Compact, 120);
        assert_eq!(session.dimensions(), FrameDimensions::new(120, 37));
        assert_eq!(session.index(), 0);
    }

    #[test]
    fn test_start_at_beyond_count_is_kept() {
        let mut session = PlaybackSession::new("clip.mp4", &info(30.0, 90), GlyphRamp::Compact, 120);
        assert_eq!(session.start_at(45), 45);
        assert_eq!(session.start_at(95), 95);
        assert_eq!(session.total_frames(), 95);
    }

    #[test]
    fn test_start_at_unknown_count_accepts_index() {
        let mut session = PlaybackSession::new("clip.gif", &info(0.0, 0), GlyphRamp::Compact, 40);
        assert_eq!(session.start_at(500), 500);
    }

    #[test]
    fn test_advance_raises_estimated_count() {
        let mut session = PlaybackSession::new("clip.mkv", &info(24.0, 2), GlyphRamp::Compact, 40);
        session.advance();
        session.advance();
        assert_eq!(session.total_frames(), 2);
        session.advance();
        assert_eq!(session.index(), 3);
        assert_eq!(session.total_frames(), 3);
    }

    #[test]
    fn test_banner() {
        let session =
            PlaybackSession::new("/videos/clip.mp4", &info(30.0, 90), GlyphRamp::Detailed, 120);
        let banner = session.banner();
        assert!(banner.contains("Playing: clip.mp4\n"));
        assert!(banner.contains("Resolution: 1920x1080 -> 120x37 (ASCII)\n"));
        assert!(banner.contains("FPS: 30.00 | Frames: 90\n"));
        assert!(banner.contains("Press Ctrl+C to stop"));
    }
}
