//! ASCII renderer for decoded video frames.
//!
//! Converting a frame to text runs in three steps:
//!
//! 1. **Grayscale conversion** - RGB to luminance using BT.601
//! 2. **Downsampling** - area-average the image onto the character grid
//! 3. **Glyph mapping** - brightness to a character of the [`GlyphRamp`]
//!
//! [`render`] runs the whole pipeline as a pure function; [`FrameRenderer`]
//! does the same with reusable buffers for the playback loop.

mod charset;
mod dimensions;
mod downsample;
mod frame;
mod grayscale;
mod mapping;
mod render;

pub use charset::{GlyphRamp, COMPACT_RAMP, DETAILED_RAMP};
pub use dimensions::{derive_height, FrameDimensions, CELL_ASPECT_COMPENSATION};
pub use downsample::{downsample, downsample_into};
pub use frame::AsciiFrame;
pub use grayscale::{luma, to_grayscale, to_grayscale_into};
pub use mapping::{glyph_index, map_to_chars, map_to_chars_into};
pub use render::{render, FrameRenderer};
