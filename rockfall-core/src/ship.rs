//! Player ship position
//!
//! The ship lives on one of four half-rows and drifts right through
//! the ring buffer one column per rendered frame (visually it stays
//! put while the field scrolls past). The column wraps; the row is
//! clamped, never wrapped.

use crate::config::{FIELD_WIDTH, HALF_ROWS, SHIP_HOME_COLUMN, SHIP_HOME_ROW};
use crate::field::Half;
use crate::glyphs::Glyph;

#[derive(Debug)]
pub struct Ship {
    column: u8,
    row: u8,
}

impl Ship {
    pub const fn new() -> Self {
        Self {
            column: SHIP_HOME_COLUMN,
            row: SHIP_HOME_ROW,
        }
    }

    /// Return to the wave-start position.
    pub fn reset(&mut self) {
        self.column = SHIP_HOME_COLUMN;
        self.row = SHIP_HOME_ROW;
    }

    pub const fn column(&self) -> u8 {
        self.column
    }

    /// Half-row position, 0..=3.
    pub const fn row(&self) -> u8 {
        self.row
    }

    /// Display row (0 or 1) the ship occupies.
    pub const fn display_row(&self) -> u8 {
        self.row / 2
    }

    /// Which half of the display cell the ship occupies.
    pub const fn half(&self) -> Half {
        if self.row % 2 == 0 {
            Half::Top
        } else {
            Half::Bottom
        }
    }

    /// Move one half-row up, clamped at the top.
    pub fn move_up(&mut self) {
        self.row = self.row.saturating_sub(1);
    }

    /// Move one half-row down, clamped at the bottom.
    pub fn move_down(&mut self) {
        if self.row < HALF_ROWS - 1 {
            self.row += 1;
        }
    }

    /// Step one column forward, wrapping. Returns the new column.
    pub fn advance(&mut self) -> u8 {
        self.column = (self.column + 1) % FIELD_WIDTH;
        self.column
    }

    /// Glyph for the ship, overlap variant when a rock shares its half.
    pub const fn glyph(&self, overlapping_rock: bool) -> Glyph {
        match (self.half(), overlapping_rock) {
            (Half::Top, false) => Glyph::ShipTop,
            (Half::Bottom, false) => Glyph::ShipBottom,
            (Half::Top, true) => Glyph::ShipTopHit,
            (Half::Bottom, true) => Glyph::ShipBottomHit,
        }
    }
}

impl Default for Ship {
    fn default() -> Self {
        Self::new()
    }
}
