//! Rendered ASCII frame (the text block shown for one video frame).

use super::FrameDimensions;

/// Character grid produced by the renderer.
///
/// Each character stands for one cell of the resampled source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiFrame {
    /// Character data for the frame (row-major order)
    pub chars: Vec<char>,
    /// Width in characters
    pub width: u16,
    /// Height in characters
    pub height: u16,
}

impl Default for AsciiFrame {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl AsciiFrame {
    /// Create a blank frame with the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            chars: vec![' '; size],
            width,
            height,
        }
    }

    /// Create a frame from a character vector.
    pub fn from_chars(chars: Vec<char>, width: u16, height: u16) -> Self {
        Self {
            chars,
            width,
            height,
        }
    }

    pub fn dimensions(&self) -> FrameDimensions {
        FrameDimensions::new(self.width, self.height)
    }

    /// Iterate over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.chars.chunks(self.width.max(1) as usize)
    }

    /// Text block for display: every row followed by a newline.
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.chars.len() + self.height as usize);
        write_rows(&self.chars, self.width, &mut text);
        text
    }
}

/// Append `chars` to `out` as rows of `width` glyphs, each ending in `\n`.
pub(crate) fn write_rows(chars: &[char], width: u16, out: &mut String) {
    if width == 0 {
        return;
    }
    for row in chars.chunks(width as usize) {
        out.extend(row);
        out.push('\n');
    }
}
