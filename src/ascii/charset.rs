//! The character ramp used for rendering.

/// Density ramp (10 levels).
/// Characters ordered from darkest (`@`) to lightest (space).
/// Meant for dark text on a light background, like a text box or a page.
pub const RAMP: &[char] = &['@', '%', '#', '*', '+', '=', '-', ':', '.', ' '];

/// Number of levels in [`RAMP`].
pub const RAMP_LEVELS: usize = RAMP.len();

/// Darkest glyph in the ramp.
pub fn darkest_char() -> char {
    RAMP[0]
}

/// Lightest glyph in the ramp.
pub fn lightest_char() -> char {
    RAMP[RAMP_LEVELS - 1]
}

/// Check whether `c` is one of the ramp glyphs.
pub fn is_ramp_char(c: char) -> bool {
    RAMP.contains(&c)
}
