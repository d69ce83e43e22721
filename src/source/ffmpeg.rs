//! Frame source backed by an ffmpeg decoder process.
//!
//! ffmpeg decodes the file to packed RGB24 on its stdout; every
//! `width * height * 3` bytes read from the pipe is one frame. Seeking
//! restarts the decoder at the requested frame.

use std::ffi::OsString;
use std::io::{BufRead, BufReader, ErrorKind, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdout, Command, Stdio};
use std::thread::{self, JoinHandle};

use super::probe::probe;
use super::{Frame, FrameSource, SourceError, SourceInfo};
use crate::config::FfmpegConfig;

/// A running ffmpeg decoder.
struct Decoder {
    child: Child,
    stdout: ChildStdout,
    stderr_thread: Option<JoinHandle<()>>,
}

impl Decoder {
    fn spawn(ffmpeg: &str, args: &[OsString]) -> Result<Self, SourceError> {
        let mut cmd = Command::new(ffmpeg);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        // Own process group: a terminal Ctrl+C must reach only the player,
        // which then stops the decoder itself.
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            cmd.process_group(0);
        }

        let mut child = cmd.spawn().map_err(|e| SourceError::spawn(ffmpeg, e))?;

        let stdout = match child.stdout.take() {
            Some(stdout) => stdout,
            None => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(SourceError::Io(std::io::Error::new(
                    ErrorKind::BrokenPipe,
                    "decoder stdout not captured",
                )));
            }
        };

        let stderr_thread = child.stderr.take().map(|stderr| {
            thread::spawn(move || {
                for line in BufReader::new(stderr).lines() {
                    match line {
                        Ok(l) => log::debug!("[ffmpeg] {}", l),
                        Err(_) => break,
                    }
                }
            })
        });

        Ok(Self {
            child,
            stdout,
            stderr_thread,
        })
    }

    /// Kill the process if it is still running and reap it.
    fn stop(mut self) {
        if matches!(self.child.try_wait(), Ok(None)) {
            let _ = self.child.kill();
        }
        let _ = self.child.wait();
        if let Some(handle) = self.stderr_thread.take() {
            let _ = handle.join();
        }
    }
}

/// Frame source that decodes a video file with ffmpeg.
pub struct FfmpegSource {
    path: PathBuf,
    ffmpeg: String,
    info: SourceInfo,
    decoder: Option<Decoder>,
    frame_len: usize,
}

impl std::fmt::Debug for FfmpegSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FfmpegSource")
            .field("path", &self.path)
            .field("info", &self.info)
            .field("decoding", &self.decoder.is_some())
            .finish_non_exhaustive()
    }
}

impl FfmpegSource {
    /// Probe `path` and start decoding from the first frame.
    ///
    /// # Errors
    /// * `SourceError::FfmpegNotFound` - ffmpeg or ffprobe is not installed
    /// * `SourceError::OpenFailed` - the file is not a readable video
    /// * `SourceError::NoVideoStream` - the file has no video stream
    pub fn open(path: &Path, config: &FfmpegConfig) -> Result<Self, SourceError> {
        let info = probe(&config.ffprobe, path)?;
        log::info!(
            "Opened {}: {}x{} @ {:.2} fps, {} frames",
            path.display(),
            info.width,
            info.height,
            info.frame_rate,
            info.total_frames
        );

        let mut source = Self {
            path: path.to_path_buf(),
            ffmpeg: config.ffmpeg.clone(),
            frame_len: Frame::byte_len(info.width, info.height),
            info,
            decoder: None,
        };
        source.start_decoder(0)?;
        Ok(source)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn start_decoder(&mut self, start_index: u64) -> Result<(), SourceError> {
        self.stop_decoder();
        let args = decoder_args(&self.path, start_index, self.info.frame_rate);
        self.decoder = Some(Decoder::spawn(&self.ffmpeg, &args)?);
        Ok(())
    }

    fn stop_decoder(&mut self) {
        if let Some(decoder) = self.decoder.take() {
            decoder.stop();
        }
    }
}

impl FrameSource for FfmpegSource {
    fn info(&self) -> &SourceInfo {
        &self.info
    }

    fn seek(&mut self, index: u64) -> Result<(), SourceError> {
        log::info!("Seeking to frame {}", index);
        self.start_decoder(index)
    }

    fn next_frame(&mut self) -> Result<Option<Frame>, SourceError> {
        let Some(decoder) = self.decoder.as_mut() else {
            return Ok(None);
        };

        let mut data = vec![0u8; self.frame_len];
        match decoder.stdout.read_exact(&mut data) {
            Ok(()) => Ok(Some(Frame::new(data, self.info.width, self.info.height))),
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                // A short read means the stream is exhausted
                self.stop_decoder();
                Ok(None)
            }
            Err(e) => Err(SourceError::Io(e)),
        }
    }

    fn release(&mut self) {
        if self.decoder.is_some() {
            log::debug!("Releasing decoder for {}", self.path.display());
        }
        self.stop_decoder();
    }
}

impl Drop for FfmpegSource {
    fn drop(&mut self) {
        self.release();
    }
}

/// ffmpeg arguments that decode `path` to raw RGB24 on stdout, starting at
/// frame `start_index`.
///
/// With a known frame rate the start is a timestamp seek (`-ss` before the
/// input, frame accurate when transcoding). Without one, frames before the
/// start are dropped by a `select` filter.
pub fn decoder_args(path: &Path, start_index: u64, frame_rate: f64) -> Vec<OsString> {
    let mut args: Vec<OsString> = ["-nostdin", "-v", "error"]
        .iter()
        .map(OsString::from)
        .collect();

    let by_timestamp = start_index > 0 && frame_rate > 0.0;
    if by_timestamp {
        args.push("-ss".into());
        args.push(format!("{:.6}", start_index as f64 / frame_rate).into());
    }

    args.push("-i".into());
    args.push(path.as_os_str().to_os_string());

    if start_index > 0 && !by_timestamp {
        args.push("-vf".into());
        args.push(format!("select=gte(n\\,{})", start_index).into());
        args.push("-vsync".into());
        args.push("0".into());
    }

    for arg in ["-an", "-sn", "-f", "rawvideo", "-pix_fmt", "rgb24", "-"] {
        args.push(arg.into());
    }
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_strings(args: &[OsString]) -> Vec<String> {
        args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
    }

    #[test]
    fn test_decoder_args_from_start() {
        let args = to_strings(&decoder_args(Path::new("clip.mp4"), 0, 30.0));
        assert_eq!(
            args,
            vec![
                "-nostdin", "-v", "error", "-i", "clip.mp4", "-an", "-sn", "-f", "rawvideo",
                "-pix_fmt", "rgb24", "-"
            ]
        );
    }

    #[test]
    fn test_decoder_args_seek_by_timestamp() {
        let args = to_strings(&decoder_args(Path::new("clip.mp4"), 45, 30.0));
        let ss = args.iter().position(|a| a == "-ss").unwrap();
        let input = args.iter().position(|a| a == "-i").unwrap();
        assert!(ss < input);
        assert_eq!(args[ss + 1], "1.500000");
        assert!(!args.iter().any(|a| a.starts_with("select")));
    }

    #[test]
    fn test_decoder_args_seek_without_frame_rate() {
        let args = to_strings(&decoder_args(Path::new("clip.gif"), 12, 0.0));
        assert!(!args.iter().any(|a| a == "-ss"));
        assert!(args.iter().any(|a| a == "select=gte(n\\,12)"));
    }

    #[test]
    fn test_open_missing_ffprobe() {
        let config = FfmpegConfig {
            ffmpeg: "ascii-player-no-such-ffmpeg".to_string(),
            ffprobe: "ascii-player-no-such-ffprobe".to_string(),
        };
        let err = FfmpegSource::open(Path::new("clip.mp4"), &config).unwrap_err();
        match err {
            SourceError::FfmpegNotFound { binary } => {
                assert_eq!(binary, "ascii-player-no-such-ffprobe")
            }
            other => panic!("Expected FfmpegNotFound, got {:?}", other),
        }
    }
}
