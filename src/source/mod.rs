//! Frame sources: where decoded video frames come from.
//!
//! The player only needs the narrow [`FrameSource`] capability; the
//! shipped implementation is [`FfmpegSource`], which drives the external
//! `ffmpeg`/`ffprobe` tools.

mod error;
mod ffmpeg;
mod frame;
mod probe;

pub use error::SourceError;
pub use ffmpeg::{decoder_args, FfmpegSource};
pub use frame::{Frame, SourceInfo};
pub use probe::{parse_frame_rate, parse_probe_output, probe, probe_args};

/// Sequential access to the decoded frames of one video.
///
/// A source is owned by a single playback call. `release` frees the
/// underlying decoder; calling it more than once is harmless.
pub trait FrameSource {
    /// Stream properties captured when the source was opened.
    fn info(&self) -> &SourceInfo;

    /// Position the source so the next frame returned is `index`.
    ///
    /// Seeking past the end is not an error; the following
    /// [`next_frame`](FrameSource::next_frame) reports end-of-stream.
    fn seek(&mut self, index: u64) -> Result<(), SourceError>;

    /// Next decoded frame, or `None` at end-of-stream.
    fn next_frame(&mut self) -> Result<Option<Frame>, SourceError>;

    /// Release decoder resources.
    fn release(&mut self);
}
