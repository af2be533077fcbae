//! Embedded 5x7 bitmap glyphs for the step label.
//!
//! Only the characters the label can contain are carried: digits, the
//! letters of "Step", and space. Each glyph row's lower 5 bits are pixels,
//! MSB = leftmost column.

/// Lit columns per glyph row.
pub const GLYPH_COLS: u32 = 5;
/// Glyph cell width in font units (GLYPH_COLS + 1 column spacing).
pub const CHAR_W: u32 = GLYPH_COLS + 1;
/// Glyph height in font units.
pub const CHAR_H: u32 = 7;

type Glyph = [u8; 7];

const DIGITS: [Glyph; 10] = [
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E], // 0
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E], // 1
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F], // 2
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E], // 3
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02], // 4
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E], // 5
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E], // 6
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08], // 7
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E], // 8
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C], // 9
];

const UPPER_S: Glyph = [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E];
const LOWER_T: Glyph = [0x08, 0x08, 0x1C, 0x08, 0x08, 0x09, 0x06];
const LOWER_E: Glyph = [0x00, 0x00, 0x0E, 0x11, 0x1F, 0x10, 0x0E];
const LOWER_P: Glyph = [0x00, 0x00, 0x1E, 0x11, 0x1E, 0x10, 0x10];
const SPACE: Glyph = [0x00; 7];

/// Bitmap for a supported character; `None` for anything else (the caller
/// skips it rather than failing a frame over a label).
pub fn glyph(ch: char) -> Option<&'static Glyph> {
    match ch {
        '0'..='9' => Some(&DIGITS[(ch as usize) - ('0' as usize)]),
        'S' => Some(&UPPER_S),
        't' => Some(&LOWER_T),
        'e' => Some(&LOWER_E),
        'p' => Some(&LOWER_P),
        ' ' => Some(&SPACE),
        _ => None,
    }
}

/// Whether a glyph column bit is lit.
#[inline]
pub fn lit(glyph: &Glyph, row: u32, col: u32) -> bool {
    row < CHAR_H && col < GLYPH_COLS && glyph[row as usize] & (0x10 >> col) != 0
}
