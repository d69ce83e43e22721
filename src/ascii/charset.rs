//! Glyph ramps used to map brightness to characters.

/// Compact ramp (10 levels).
/// Ordered from darkest/densest (`@`) to lightest/sparsest (space).
pub const COMPACT_RAMP: &[char] = &['@', '%', '#', '*', '+', '=', '-', ':', '.', ' '];

/// Detailed ramp (70 levels).
/// Same ordering as [`COMPACT_RAMP`], with finer brightness steps.
#[rustfmt::skip]
pub const DETAILED_RAMP: &[char] = &[
    '$', '@', 'B', '%', '8', '&', 'W', 'M', '#', '*', 'o', 'a', 'h', 'k',
    'b', 'd', 'p', 'q', 'w', 'm', 'Z', 'O', '0', 'Q', 'L', 'C', 'J', 'U',
    'Y', 'X', 'z', 'c', 'v', 'u', 'n', 'x', 'r', 'j', 'f', 't', '/', '\\',
    '|', '(', ')', '1', '{', '}', '[', ']', '?', '-', '_', '+', '~', '<',
    '>', 'i', '!', 'l', 'I', ';', ':', ',', '"', '^', '`', '\'', '.', ' ',
];

/// Glyph ramp selected once when the player is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphRamp {
    /// 10-level ramp
    #[default]
    Compact,
    /// 70-level ramp
    Detailed,
}

impl GlyphRamp {
    /// Pick the ramp matching the `--detailed` flag.
    pub fn from_detailed(detailed: bool) -> Self {
        if detailed {
            GlyphRamp::Detailed
        } else {
            GlyphRamp::Compact
        }
    }

    /// Characters of this ramp, index 0 being the darkest glyph.
    pub fn chars(&self) -> &'static [char] {
        match self {
            GlyphRamp::Compact => COMPACT_RAMP,
            GlyphRamp::Detailed => DETAILED_RAMP,
        }
    }

    /// Number of brightness levels.
    pub fn levels(&self) -> usize {
        self.chars().len()
    }

    /// Short name used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            GlyphRamp::Compact => "compact",
            GlyphRamp::Detailed => "detailed",
        }
    }
}
