//! RGB to grayscale conversion using ITU-R BT.601 luminance formula.

use crate::source::Frame;

/// BT.601 luma of a single RGB pixel.
///
/// Y = 0.299*R + 0.587*G + 0.114*B, with the coefficients scaled by 1000
/// to stay in integer math. White maps exactly to 255.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000) as u8
}

/// Convert an RGB frame to grayscale, one value (0-255) per pixel.
pub fn to_grayscale(frame: &Frame) -> Vec<u8> {
    let mut gray = Vec::new();
    to_grayscale_into(frame, &mut gray);
    gray
}

/// Convert an RGB frame to grayscale, reusing an existing buffer.
///
/// # Returns
/// The number of pixels written to the buffer
pub fn to_grayscale_into(frame: &Frame, buffer: &mut Vec<u8>) -> usize {
    buffer.clear();
    buffer.reserve(frame.pixel_count());
    buffer.extend(
        frame
            .data
            .chunks_exact(3)
            .map(|rgb| luma(rgb[0], rgb[1], rgb[2])),
    );
    buffer.len()
}
