// Fixed 5x7 bitmap font. Each glyph is 7 row masks of 5 significant bits,
// bit 4 being the leftmost column.

#![no_std]

use bit_field::BitField;

pub const GLYPH_WIDTH: usize = 5;
pub const GLYPH_HEIGHT: usize = 7;
/// Blank columns between adjacent glyph cells.
pub const GLYPH_SPACING: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    rows: [u8; GLYPH_HEIGHT],
}

impl Glyph {
    pub const fn new(rows: [u8; GLYPH_HEIGHT]) -> Self {
        Self { rows }
    }

    /// Whether the pixel at (x, y) of the glyph cell is lit. Column 0 maps to
    /// the highest of the 5 used bits.
    pub fn lit(&self, x: usize, y: usize) -> bool {
        self.rows[y].get_bit(GLYPH_WIDTH - 1 - x)
    }
}

/// Fallback for every character the table does not define, space included.
pub const BLANK: Glyph = Glyph::new([0; GLYPH_HEIGHT]);

static GLYPHS: &[(char, Glyph)] = &[
    ('H', Glyph::new([0x11, 0x11, 0x11, 0x1f, 0x11, 0x11, 0x11])),
    ('d', Glyph::new([0x01, 0x01, 0x0d, 0x13, 0x11, 0x0f, 0x00])),
    ('e', Glyph::new([0x00, 0x0e, 0x11, 0x1f, 0x10, 0x0e, 0x00])),
    ('l', Glyph::new([0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x00])),
    ('o', Glyph::new([0x00, 0x0e, 0x11, 0x11, 0x11, 0x0e, 0x00])),
    ('r', Glyph::new([0x00, 0x16, 0x19, 0x10, 0x10, 0x10, 0x00])),
    ('w', Glyph::new([0x00, 0x11, 0x11, 0x15, 0x15, 0x0a, 0x00])),
];

pub struct Font {
    glyphs: &'static [(char, Glyph)],
    /// width of each glyph
    pub width: usize,
    /// height of each glyph
    pub height: usize,
    /// blank columns after each glyph
    pub spacing: usize,
}

pub const FONT_5X7: Font = Font {
    glyphs: GLYPHS,
    width: GLYPH_WIDTH,
    height: GLYPH_HEIGHT,
    spacing: GLYPH_SPACING,
};

impl Font {
    /// Looks up the glyph for `ch`. Lookups are case-sensitive and total:
    /// unknown characters resolve to [`BLANK`].
    pub fn glyph(&self, ch: char) -> &Glyph {
        self.glyphs
            .iter()
            .find(|(glyph_ch, _)| *glyph_ch == ch)
            .map(|(_, glyph)| glyph)
            .unwrap_or(&BLANK)
    }

    /// Horizontal step from one glyph cell to the next.
    pub fn advance(&self) -> usize {
        self.width + self.spacing
    }

    /// Pixel width of `text`, trailing spacing column included.
    pub fn text_width(&self, text: &str) -> usize {
        text.chars().count() * self.advance()
    }

    pub fn render_char<F>(&self, ch: char, mut f: F)
    where
        F: FnMut(usize, usize, bool),
    {
        let glyph = self.glyph(ch);
        for y in 0..self.height {
            for x in 0..self.width {
                f(x, y, glyph.lit(x, y));
            }
        }
    }
}
