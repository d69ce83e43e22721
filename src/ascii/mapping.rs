//! Brightness to glyph mapping.

/// Glyph index for a luminance value on a ramp with `levels` entries.
///
/// Computes `floor(L / 255 * (levels - 1))` in integer math, so `0` maps to
/// index 0 and `255` maps exactly to the last index.
#[inline]
pub fn glyph_index(luminance: u8, levels: usize) -> usize {
    if levels == 0 {
        return 0;
    }
    ((luminance as usize * (levels - 1)) / 255).min(levels - 1)
}

/// Map brightness values to glyphs from `ramp`.
///
/// Low brightness maps to the start of the ramp (dense glyphs), high
/// brightness to the end (sparse glyphs). An empty ramp yields spaces.
///
/// # Example
/// ```
/// use ascii_player::ascii::{map_to_chars, COMPACT_RAMP};
/// let chars = map_to_chars(&[0, 255], COMPACT_RAMP);
/// assert_eq!(chars, vec!['@', ' ']);
/// ```
pub fn map_to_chars(brightness: &[u8], ramp: &[char]) -> Vec<char> {
    let mut chars = Vec::with_capacity(brightness.len());
    map_to_chars_into(brightness, ramp, &mut chars);
    chars
}

/// Map brightness values to glyphs, reusing an existing buffer.
///
/// # Returns
/// The number of characters written to the buffer.
pub fn map_to_chars_into(brightness: &[u8], ramp: &[char], buffer: &mut Vec<char>) -> usize {
    buffer.clear();

    if ramp.is_empty() {
        buffer.resize(brightness.len(), ' ');
        return brightness.len();
    }

    buffer.reserve(brightness.len());
    let levels = ramp.len();
    buffer.extend(brightness.iter().map(|&b| ramp[glyph_index(b, levels)]));

    brightness.len()
}
