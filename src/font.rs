//! Fixed 5×5 bitmap font for the clock face: digits `0`-`9` and `:`.
//!
//! Each glyph is five row masks. Only the low [`GLYPH_WIDTH`] bits of a mask
//! are used, and the most significant of those bits is the glyph's leftmost
//! column. Lookup misses are not errors: callers render nothing and move on.

/// Glyph width in pixels (columns).
pub const GLYPH_WIDTH: usize = 5;
/// Glyph height in pixels (rows).
pub const GLYPH_HEIGHT: usize = 5;
/// Horizontal cursor advance per character: glyph width plus one spacing column.
pub const CHAR_ADVANCE: usize = GLYPH_WIDTH + 1;

/// Row masks for one glyph, top row first.
pub type GlyphRows = [u8; GLYPH_HEIGHT];

const DIGIT_0: GlyphRows = [0b11111, 0b10001, 0b10001, 0b10001, 0b11111];
const DIGIT_1: GlyphRows = [0b00100, 0b01100, 0b00100, 0b00100, 0b01110];
const DIGIT_2: GlyphRows = [0b11111, 0b00001, 0b11111, 0b10000, 0b11111];
const DIGIT_3: GlyphRows = [0b11111, 0b00001, 0b01110, 0b00001, 0b11111];
const DIGIT_4: GlyphRows = [0b10001, 0b10001, 0b11111, 0b00001, 0b00001];
const DIGIT_5: GlyphRows = [0b11111, 0b10000, 0b11111, 0b00001, 0b11111];
const DIGIT_6: GlyphRows = [0b11111, 0b10000, 0b11111, 0b10001, 0b11111];
const DIGIT_7: GlyphRows = [0b11111, 0b00001, 0b00010, 0b00100, 0b00100];
const DIGIT_8: GlyphRows = [0b11111, 0b10001, 0b11111, 0b10001, 0b11111];
const DIGIT_9: GlyphRows = [0b11111, 0b10001, 0b11111, 0b00001, 0b11111];
const COLON: GlyphRows = [0b00000, 0b00100, 0b00000, 0b00100, 0b00000];

/// Look up the row masks for `ch`.
///
/// Returns `None` for any character outside the supported set; callers must
/// treat that as "render nothing", never as a failure.
#[must_use]
pub const fn glyph(ch: char) -> Option<&'static GlyphRows> {
    match ch {
        '0' => Some(&DIGIT_0),
        '1' => Some(&DIGIT_1),
        '2' => Some(&DIGIT_2),
        '3' => Some(&DIGIT_3),
        '4' => Some(&DIGIT_4),
        '5' => Some(&DIGIT_5),
        '6' => Some(&DIGIT_6),
        '7' => Some(&DIGIT_7),
        '8' => Some(&DIGIT_8),
        '9' => Some(&DIGIT_9),
        ':' => Some(&COLON),
        _ => None,
    }
}

/// Characters the font covers, in lookup-table order.
pub const SUPPORTED: [char; 11] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', ':'];
