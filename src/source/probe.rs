//! Stream metadata via ffprobe.

use serde::Deserialize;
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use super::{SourceError, SourceInfo};

#[derive(Debug, Deserialize)]
struct ProbeOutput {
    #[serde(default)]
    streams: Vec<ProbeStream>,
    format: Option<ProbeFormat>,
}

#[derive(Debug, Deserialize)]
struct ProbeStream {
    width: Option<u32>,
    height: Option<u32>,
    avg_frame_rate: Option<String>,
    r_frame_rate: Option<String>,
    nb_frames: Option<String>,
    duration: Option<String>,
    #[serde(default)]
    side_data_list: Vec<ProbeSideData>,
    tags: Option<ProbeTags>,
}

#[derive(Debug, Deserialize)]
struct ProbeSideData {
    rotation: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ProbeTags {
    rotate: Option<String>,
}

impl ProbeStream {
    /// Display rotation in degrees, from the display matrix side data or
    /// the older `rotate` tag.
    fn rotation(&self) -> f64 {
        self.side_data_list
            .iter()
            .find_map(|d| d.rotation)
            .or_else(|| {
                self.tags
                    .as_ref()
                    .and_then(|t| t.rotate.as_deref())
                    .and_then(|r| r.trim().parse().ok())
            })
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Deserialize)]
struct ProbeFormat {
    duration: Option<String>,
}

/// ffprobe arguments that report the first video stream as JSON.
pub fn probe_args(path: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = [
        "-v",
        "error",
        "-select_streams",
        "v:0",
        "-show_entries",
        "stream=width,height,avg_frame_rate,r_frame_rate,nb_frames,duration\
         :stream_side_data=rotation:stream_tags=rotate:format=duration",
        "-of",
        "json",
    ]
    .iter()
    .map(OsString::from)
    .collect();
    args.push(path.as_os_str().to_os_string());
    args
}

/// Run ffprobe on `path` and read the video stream properties.
///
/// # Errors
/// * `SourceError::FfmpegNotFound` - ffprobe is not installed
/// * `SourceError::OpenFailed` - ffprobe rejected the file
/// * `SourceError::NoVideoStream` - the file has no video stream
pub fn probe(ffprobe: &str, path: &Path) -> Result<SourceInfo, SourceError> {
    let output = Command::new(ffprobe)
        .args(probe_args(path))
        .stdin(Stdio::null())
        .output()
        .map_err(|e| SourceError::spawn(ffprobe, e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let reason = stderr.lines().last().unwrap_or("ffprobe failed").trim();
        return Err(SourceError::OpenFailed {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        });
    }

    let json = String::from_utf8_lossy(&output.stdout);
    parse_probe_output(&json, path)
}

/// Parse ffprobe JSON output into [`SourceInfo`].
///
/// The frame count comes from `nb_frames` when the container records it,
/// otherwise it is estimated from the duration and frame rate, otherwise 0.
pub fn parse_probe_output(json: &str, path: &Path) -> Result<SourceInfo, SourceError> {
    let output: ProbeOutput =
        serde_json::from_str(json).map_err(|e| SourceError::InvalidProbe(e.to_string()))?;

    let stream = output
        .streams
        .into_iter()
        .next()
        .ok_or_else(|| SourceError::NoVideoStream {
            path: path.to_path_buf(),
        })?;

    // ffmpeg applies the display rotation while decoding, so frames of a
    // quarter-turned stream come out with width and height swapped
    let (mut width, mut height) = (stream.width.unwrap_or(0), stream.height.unwrap_or(0));
    let quarter_turns = (stream.rotation() / 90.0).round().rem_euclid(4.0);
    if quarter_turns == 1.0 || quarter_turns == 3.0 {
        std::mem::swap(&mut width, &mut height);
    }
    if width == 0 || height == 0 {
        return Err(SourceError::OpenFailed {
            path: path.to_path_buf(),
            reason: format!("invalid frame size {}x{}", width, height),
        });
    }

    let frame_rate = [stream.avg_frame_rate.as_deref(), stream.r_frame_rate.as_deref()]
        .into_iter()
        .flatten()
        .map(parse_frame_rate)
        .find(|fps| *fps > 0.0)
        .unwrap_or(0.0);

    let duration = stream
        .duration
        .as_deref()
        .or(output.format.as_ref().and_then(|f| f.duration.as_deref()))
        .and_then(|d| d.trim().parse::<f64>().ok());

    let total_frames = match stream.nb_frames.as_deref().and_then(|n| n.trim().parse::<u64>().ok()) {
        Some(n) if n > 0 => n,
        _ => match duration {
            Some(secs) if secs > 0.0 && frame_rate > 0.0 => (secs * frame_rate).round() as u64,
            _ => 0,
        },
    };

    Ok(SourceInfo {
        frame_rate,
        total_frames,
        width,
        height,
    })
}

/// Parse an ffprobe rate such as `"30000/1001"` or `"25"`.
///
/// Unknown rates (`"0/0"`, garbage) come back as 0.0.
pub fn parse_frame_rate(rate: &str) -> f64 {
    let rate = rate.trim();
    let value = match rate.split_once('/') {
        Some((num, den)) => {
            let num: f64 = num.trim().parse().unwrap_or(0.0);
            let den: f64 = den.trim().parse().unwrap_or(0.0);
            if den == 0.0 {
                0.0
            } else {
                num / den
            }
        }
        None => rate.parse().unwrap_or(0.0),
    };
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
