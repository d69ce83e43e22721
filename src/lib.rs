//! ascii-player library crate.
//!
//! Decodes a video with ffmpeg and plays it back as ASCII art in the
//! terminal. The modules are public for integration testing.

pub mod ascii;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod playback;
pub mod player;
pub mod source;
