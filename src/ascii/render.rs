//! Full frame renderer: RGB frame in, text block out.

use super::frame::write_rows;
use super::{downsample_into, map_to_chars_into, to_grayscale_into, AsciiFrame, FrameDimensions};
use crate::source::Frame;

/// Render a decoded frame into an [`AsciiFrame`] of exactly `dims` cells.
///
/// Pure: the same frame, dimensions and ramp always give the same grid.
pub fn render(frame: &Frame, dims: FrameDimensions, ramp: &[char]) -> AsciiFrame {
    let mut renderer = FrameRenderer::new();
    renderer.render_chars(frame, dims, ramp);
    AsciiFrame::from_chars(renderer.chars, dims.width, dims.height)
}

/// Renderer that keeps its intermediate buffers between frames.
///
/// The playback loop renders one frame per tick at a fixed size, so the
/// grayscale, brightness, glyph and text buffers are allocated once.
#[derive(Debug, Default)]
pub struct FrameRenderer {
    gray: Vec<u8>,
    brightness: Vec<u8>,
    chars: Vec<char>,
    text: String,
}

impl FrameRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `frame` and return the text block (rows ending in `\n`).
    pub fn render_text(&mut self, frame: &Frame, dims: FrameDimensions, ramp: &[char]) -> &str {
        self.render_chars(frame, dims, ramp);
        self.text.clear();
        write_rows(&self.chars, dims.width, &mut self.text);
        &self.text
    }

    fn render_chars(&mut self, frame: &Frame, dims: FrameDimensions, ramp: &[char]) {
        to_grayscale_into(frame, &mut self.gray);
        downsample_into(
            &self.gray,
            frame.width,
            frame.height,
            dims.width,
            dims.height,
            &mut self.brightness,
        );
        map_to_chars_into(&self.brightness, ramp, &mut self.chars);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::COMPACT_RAMP;

    fn gradient(width: u32, height: u32) -> Frame {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for _y in 0..height {
            for x in 0..width {
                let v = (x * 255 / (width - 1).max(1)) as u8;
                data.extend([v, v, v]);
            }
        }
        Frame::new(data, width, height)
    }

    #[test]
    fn test_render_black_and_white() {
        let black = Frame::new(vec![0; 4 * 4 * 3], 4, 4);
        let white = Frame::new(vec![255; 4 * 4 * 3], 4, 4);
        let dims = FrameDimensions::new(2, 2);
        assert_eq!(render(&black, dims, COMPACT_RAMP).to_text(), "@@\n@@\n");
        assert_eq!(render(&white, dims, COMPACT_RAMP).to_text(), "  \n  \n");
    }

    #[test]
    fn test_render_text_matches_pure_render() {
        let frame = gradient(64, 36);
        let dims = FrameDimensions::new(16, 5);
        let mut renderer = FrameRenderer::new();
        let expected = render(&frame, dims, COMPACT_RAMP).to_text();
        assert_eq!(renderer.render_text(&frame, dims, COMPACT_RAMP), expected);
        // Second pass through the same buffers
        assert_eq!(renderer.render_text(&frame, dims, COMPACT_RAMP), expected);
    }

    #[test]
    fn test_render_gradient_goes_dense_to_sparse() {
        let frame = gradient(10, 1);
        let text = render(&frame, FrameDimensions::new(10, 1), COMPACT_RAMP).to_text();
        assert!(text.starts_with('@'));
        assert!(text.ends_with(" \n"));
    }
}
