//! Configuration file handling for ascii-player.
//!
//! Loads configuration from `~/.config/ascii-player/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration file structure for ascii-player.
/// Loaded from ~/.config/ascii-player/config.toml (or custom path via --config).
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub ffmpeg: FfmpegConfig,
}

/// Playback defaults, overridden by command-line flags.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Width in characters when `--width` is not given
    pub width: u16,
    /// Use the detailed glyph ramp when `--detailed` is not given
    pub detailed: bool,
    /// How long the session banner stays up before playback starts
    pub banner_pause_ms: u64,
    /// Frame delay used when the video reports no frame rate
    pub fallback_frame_delay_ms: u64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            width: 120,
            detailed: false,
            banner_pause_ms: 2000,
            fallback_frame_delay_ms: 33,
        }
    }
}

impl PlayerConfig {
    pub fn banner_pause(&self) -> Duration {
        Duration::from_millis(self.banner_pause_ms)
    }

    pub fn fallback_frame_delay(&self) -> Duration {
        Duration::from_millis(self.fallback_frame_delay_ms)
    }
}

/// Names or paths of the FFmpeg executables.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FfmpegConfig {
    pub ffmpeg: String,
    pub ffprobe: String,
}

impl Default for FfmpegConfig {
    fn default() -> Self {
        Self {
            ffmpeg: "ffmpeg".to_string(),
            ffprobe: "ffprobe".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            path: path.clone(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            source: e,
        })?;

        if config.player.width == 0 {
            return Err(ConfigError::InvalidValue {
                path,
                message: "player.width must be at least 1".to_string(),
            });
        }

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    InvalidValue {
        path: PathBuf,
        message: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::InvalidValue { path, message } => {
                write!(f, "Invalid config file '{}': {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            ConfigError::InvalidValue { .. } => None,
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("ascii-player").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/ascii-player/config.toml")
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.player.width, 120);
        assert!(!config.player.detailed);
        assert_eq!(config.player.banner_pause(), Duration::from_secs(2));
        assert_eq!(config.player.fallback_frame_delay(), Duration::from_millis(33));
        assert_eq!(config.ffmpeg.ffmpeg, "ffmpeg");
        assert_eq!(config.ffmpeg.ffprobe, "ffprobe");
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("nope.toml"))).unwrap();
        assert_eq!(config.player.width, 120);
    }

    #[test]
    fn test_load_partial_file() {
        let file = write_config("[player]\nwidth = 80\n\n[ffmpeg]\nffprobe = \"/opt/ffmpeg/bin/ffprobe\"\n");
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.player.width, 80);
        assert_eq!(config.player.banner_pause_ms, 2000);
        assert_eq!(config.ffmpeg.ffmpeg, "ffmpeg");
        assert_eq!(config.ffmpeg.ffprobe, "/opt/ffmpeg/bin/ffprobe");
    }

    #[test]
    fn test_load_parse_error() {
        let file = write_config("[player\nwidth = ");
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().starts_with("Failed to parse config file"));
    }

    #[test]
    fn test_load_rejects_zero_width() {
        let file = write_config("[player]\nwidth = 0\n");
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_default_path_ends_with_config_toml() {
        let path = default_path();
        assert!(path.ends_with("ascii-player/config.toml"));
    }
}
