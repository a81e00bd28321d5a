//! Custom character set
//!
//! The HD44780 has room for eight 5x8 user glyphs in CGRAM; the game
//! uses seven. Bitmaps are static configuration - the firmware uploads
//! them once at boot and the core only ever refers to slot indices.
//!
//! The display cell is split into a top and bottom half (two logical
//! half-rows per physical row), so every sprite exists in a top and a
//! bottom variant.

/// One of the seven custom glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Glyph {
    /// Ship in the top half of the cell.
    ShipTop,
    /// Ship in the bottom half of the cell.
    ShipBottom,
    /// Ship overlapping a rock in the top half.
    ShipTopHit,
    /// Ship overlapping a rock in the bottom half.
    ShipBottomHit,
    /// Rock in the top half only.
    RockTop,
    /// Rock in the bottom half only.
    RockBottom,
    /// Rocks in both halves.
    RockBoth,
}

impl Glyph {
    /// Number of glyphs in the set.
    pub const COUNT: usize = 7;

    /// Every glyph, in CGRAM slot order. Drivers iterate this to
    /// upload the character set.
    pub const ALL: [Glyph; Glyph::COUNT] = [
        Glyph::ShipTop,
        Glyph::ShipBottom,
        Glyph::ShipTopHit,
        Glyph::ShipBottomHit,
        Glyph::RockTop,
        Glyph::RockBottom,
        Glyph::RockBoth,
    ];

    /// CGRAM slot / character code for this glyph.
    pub const fn index(self) -> u8 {
        match self {
            Glyph::ShipTop => 0,
            Glyph::ShipBottom => 1,
            Glyph::ShipTopHit => 2,
            Glyph::ShipBottomHit => 3,
            Glyph::RockTop => 4,
            Glyph::RockBottom => 5,
            Glyph::RockBoth => 6,
        }
    }

    /// 5x8 pixel bitmap, one byte per row, low five bits used.
    pub const fn bitmap(self) -> &'static [u8; 8] {
        &GLYPH_BITMAPS[self.index() as usize]
    }
}

/// Bitmaps for all seven glyphs, indexed by [`Glyph::index`].
pub const GLYPH_BITMAPS: [[u8; 8]; Glyph::COUNT] = [
    // ShipTop: right-pointing ship in the top four rows
    [
        0b11000, 0b11110, 0b11111, 0b11110, 0b00000, 0b00000, 0b00000, 0b00000,
    ],
    // ShipBottom
    [
        0b00000, 0b00000, 0b00000, 0b00000, 0b11000, 0b11110, 0b11111, 0b11110,
    ],
    // ShipTopHit: ship with debris pixels
    [
        0b11010, 0b11101, 0b11111, 0b11101, 0b00010, 0b00000, 0b00000, 0b00000,
    ],
    // ShipBottomHit
    [
        0b00010, 0b00000, 0b00000, 0b00010, 0b11010, 0b11101, 0b11111, 0b11101,
    ],
    // RockTop: jagged lump in the top half
    [
        0b01110, 0b11111, 0b11111, 0b01110, 0b00000, 0b00000, 0b00000, 0b00000,
    ],
    // RockBottom
    [
        0b00000, 0b00000, 0b00000, 0b00000, 0b01110, 0b11111, 0b11111, 0b01110,
    ],
    // RockBoth
    [
        0b01110, 0b11111, 0b11111, 0b01110, 0b01110, 0b11111, 0b11111, 0b01110,
    ],
];
