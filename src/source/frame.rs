//! Decoded video frame and source metadata.

/// A decoded RGB frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Raw pixel data, 3 bytes per pixel (R, G, B), row-major
    pub data: Vec<u8>,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
}

impl Frame {
    pub const BYTES_PER_PIXEL: usize = 3;

    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
        }
    }

    /// Number of pixels in the frame.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Size in bytes of one packed RGB frame of the given dimensions.
    pub fn byte_len(width: u32, height: u32) -> usize {
        width as usize * height as usize * Self::BYTES_PER_PIXEL
    }
}

/// Stream properties reported by a frame source when it is opened.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceInfo {
    /// Frames per second; zero or negative when unknown
    pub frame_rate: f64,
    /// Total number of frames; zero when unknown
    pub total_frames: u64,
    /// Original frame width in pixels
    pub width: u32,
    /// Original frame height in pixels
    pub height: u32,
}
