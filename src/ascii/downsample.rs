//! Area-average resampling of grayscale pixels onto a character grid.

/// Downsample a grayscale image to a character grid.
///
/// Each cell gets the average brightness of the source pixels it covers.
/// When the grid is larger than the image along an axis, a cell covers less
/// than one pixel and samples the nearest pixel instead, so no cell is left
/// without a value.
///
/// # Arguments
/// * `gray` - Grayscale pixel data (one byte per pixel, row-major order)
/// * `img_width` - Width of the source image in pixels
/// * `img_height` - Height of the source image in pixels
/// * `char_width` - Desired output width in characters
/// * `char_height` - Desired output height in characters
///
/// # Returns
/// `char_width * char_height` brightness values in row-major order.
pub fn downsample(
    gray: &[u8],
    img_width: u32,
    img_height: u32,
    char_width: u16,
    char_height: u16,
) -> Vec<u8> {
    let mut result = Vec::new();
    downsample_into(gray, img_width, img_height, char_width, char_height, &mut result);
    result
}

/// Downsample into an existing buffer to avoid allocation in the frame loop.
///
/// An empty or zero-sized image produces a grid of zeros (darkest level),
/// so the output length always matches the grid.
///
/// # Returns
/// The number of brightness values written to the buffer.
pub fn downsample_into(
    gray: &[u8],
    img_width: u32,
    img_height: u32,
    char_width: u16,
    char_height: u16,
    buffer: &mut Vec<u8>,
) -> usize {
    buffer.clear();

    let output_size = (char_width as usize) * (char_height as usize);
    if output_size == 0 {
        return 0;
    }
    if img_width == 0 || img_height == 0 || gray.is_empty() {
        buffer.resize(output_size, 0);
        return output_size;
    }

    buffer.reserve(output_size);

    let cell_w = img_width as f32 / char_width as f32;
    let cell_h = img_height as f32 / char_height as f32;

    for cy in 0..char_height as u32 {
        let (start_y, end_y) = cell_span(cy, cell_h, img_height);

        for cx in 0..char_width as u32 {
            let (start_x, end_x) = cell_span(cx, cell_w, img_width);

            let mut sum = 0u32;
            let mut count = 0u32;

            for py in start_y..end_y {
                let row = (py * img_width) as usize;
                for px in start_x..end_x {
                    if let Some(&value) = gray.get(row + px as usize) {
                        sum += value as u32;
                        count += 1;
                    }
                }
            }

            buffer.push(if count > 0 { (sum / count) as u8 } else { 0 });
        }
    }

    output_size
}

/// Pixel range `[start, end)` covered by cell `index`, never empty.
fn cell_span(index: u32, cell_size: f32, limit: u32) -> (u32, u32) {
    let start = ((index as f32 * cell_size) as u32).min(limit - 1);
    let end = (((index + 1) as f32 * cell_size) as u32).clamp(start + 1, limit);
    (start, end)
}
