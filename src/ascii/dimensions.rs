//! Character-grid dimensions derived from the source aspect ratio.

/// Height correction for terminal cells.
/// A typical cell is roughly twice as tall as it is wide; 0.55 keeps the
/// picture's proportions when each cell stands for one sample.
pub const CELL_ASPECT_COMPENSATION: f64 = 0.55;

/// Width and height of a rendered frame, in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameDimensions {
    pub width: u16,
    pub height: u16,
}

impl FrameDimensions {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Dimensions for a fixed `width` and a source of the given pixel size.
    ///
    /// # Example
    /// ```
    /// use ascii_player::ascii::FrameDimensions;
    /// let dims = FrameDimensions::for_source(120, 1920, 1080);
    /// assert_eq!(dims, FrameDimensions::new(120, 37));
    /// ```
    pub fn for_source(width: u16, source_width: u32, source_height: u32) -> Self {
        Self {
            width,
            height: derive_height(width, source_width, source_height),
        }
    }

    /// Total number of cells in the grid.
    pub fn cells(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// `round(width * source_height / source_width * 0.55)`, at least 1.
///
/// A degenerate source (zero width) yields a single row so the grid stays
/// renderable.
pub fn derive_height(width: u16, source_width: u32, source_height: u32) -> u16 {
    if source_width == 0 {
        return 1;
    }
    let height = (width as f64 * source_height as f64 / source_width as f64
        * CELL_ASPECT_COMPENSATION)
        .round();
    height.clamp(1.0, u16::MAX as f64) as u16
}
