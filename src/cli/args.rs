//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;

use crate::ascii::GlyphRamp;
use crate::config::PlayerConfig;
use crate::player::PlayerOptions;

/// Play a video file as ASCII art in the terminal
#[derive(Parser, Debug)]
#[command(name = "ascii-player")]
#[command(version, about = "Play videos as ASCII art in the terminal", long_about = None)]
#[command(after_help = "Examples:\n  \
    ascii-player video.mp4\n  \
    ascii-player video.mp4 --width 80\n  \
    ascii-player video.mp4 --detailed\n  \
    ascii-player video.mp4 --start 100")]
pub struct Args {
    /// Path to the video file
    pub video: PathBuf,

    /// Output width in characters [default: 120]
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    pub width: Option<u16>,

    /// Use the detailed 70-character ramp
    #[arg(short, long)]
    pub detailed: bool,

    /// Frame index to start from
    #[arg(short, long, default_value_t = 0)]
    pub start: u64,

    /// Config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Merge with config values: command line > config file > built-in defaults.
    pub fn player_options(&self, config: &PlayerConfig) -> PlayerOptions {
        let options = PlayerOptions::from_config(config);
        let options = match self.width {
            Some(width) => options.with_width(width),
            None => options,
        };
        if self.detailed {
            options.with_ramp(GlyphRamp::Detailed)
        } else {
            options
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["ascii-player", "clip.mp4"]);
        assert_eq!(args.video, PathBuf::from("clip.mp4"));
        assert!(args.width.is_none());
        assert!(!args.detailed);
        assert_eq!(args.start, 0);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::parse_from(["ascii-player", "clip.mp4", "-w", "80", "-d", "-s", "100"]);
        assert_eq!(args.width, Some(80));
        assert!(args.detailed);
        assert_eq!(args.start, 100);
    }

    #[test]
    fn test_args_long_flags() {
        let args = Args::parse_from([
            "ascii-player",
            "clip.mp4",
            "--width",
            "60",
            "--detailed",
            "--start",
            "5",
            "--config",
            "/tmp/player.toml",
        ]);
        assert_eq!(args.width, Some(60));
        assert!(args.detailed);
        assert_eq!(args.start, 5);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/player.toml")));
    }

    #[test]
    fn test_args_requires_video() {
        assert!(Args::try_parse_from(["ascii-player"]).is_err());
    }

    #[test]
    fn test_args_rejects_zero_width() {
        assert!(Args::try_parse_from(["ascii-player", "clip.mp4", "-w", "0"]).is_err());
    }

    #[test]
    fn test_args_rejects_negative_start() {
        assert!(Args::try_parse_from(["ascii-player", "clip.mp4", "--start", "-3"]).is_err());
    }

    #[test]
    fn test_player_options_defaults() {
        let args = Args::parse_from(["ascii-player", "clip.mp4"]);
        let options = args.player_options(&PlayerConfig::default());
        assert_eq!(options, PlayerOptions::default());
    }

    #[test]
    fn test_player_options_cli_overrides_config() {
        let config = PlayerConfig {
            width: 64,
            detailed: false,
            banner_pause_ms: 500,
            fallback_frame_delay_ms: 33,
        };

        let args = Args::parse_from(["ascii-player", "clip.mp4"]);
        let options = args.player_options(&config);
        assert_eq!(options.width, 64);
        assert_eq!(options.ramp, GlyphRamp::Compact);

        let args = Args::parse_from(["ascii-player", "clip.mp4", "-w", "100", "-d"]);
        let options = args.player_options(&config);
        assert_eq!(options.width, 100);
        assert_eq!(options.ramp, GlyphRamp::Detailed);
    }
}
