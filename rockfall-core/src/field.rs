//! Scrolling playfield
//!
//! Forty columns of rock data, one [`Cell`] per column. Each cell
//! records rock presence per (display row, half) pair: two bit pairs.
//! The field is a ring - the head column is cleared and respawned as
//! the display scrolls, and every column index is reduced modulo the
//! field width before use.

use crate::config::FIELD_WIDTH;
use crate::glyphs::Glyph;

/// Top or bottom half of a display cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Half {
    Top,
    Bottom,
}

impl Half {
    pub const fn opposite(self) -> Half {
        match self {
            Half::Top => Half::Bottom,
            Half::Bottom => Half::Top,
        }
    }

    const fn bit_offset(self) -> u8 {
        match self {
            Half::Top => 0,
            Half::Bottom => 1,
        }
    }
}

/// Rock occupancy of one column: bit pair per display row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cell(u8);

impl Cell {
    pub const EMPTY: Cell = Cell(0);

    const fn mask(row: u8, half: Half) -> u8 {
        1 << ((row & 1) * 2 + half.bit_offset())
    }

    /// Mark a rock in the given row half.
    pub fn set(&mut self, row: u8, half: Half) {
        self.0 |= Self::mask(row, half);
    }

    /// Check for a rock in the given row half.
    pub const fn has(self, row: u8, half: Half) -> bool {
        self.0 & Self::mask(row, half) != 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Glyph to draw for one display row of this cell, if any.
    pub const fn glyph_for(self, row: u8) -> Option<Glyph> {
        match (self.has(row, Half::Top), self.has(row, Half::Bottom)) {
            (false, false) => None,
            (true, false) => Some(Glyph::RockTop),
            (false, true) => Some(Glyph::RockBottom),
            (true, true) => Some(Glyph::RockBoth),
        }
    }
}

/// The ring of rock columns plus the head (render) column.
#[derive(Debug)]
pub struct PlayField {
    cells: [Cell; FIELD_WIDTH as usize],
    head: u8,
}

impl PlayField {
    pub const fn new() -> Self {
        Self {
            cells: [Cell::EMPTY; FIELD_WIDTH as usize],
            head: 0,
        }
    }

    /// Clear every cell and reposition the head column.
    pub fn reset(&mut self, head: u8) {
        self.cells = [Cell::EMPTY; FIELD_WIDTH as usize];
        self.head = head % FIELD_WIDTH;
    }

    /// Current head column.
    pub const fn head(&self) -> u8 {
        self.head
    }

    /// Step the head one column forward (wrapping) and clear the newly
    /// exposed cell. Returns the new head column.
    pub fn advance_head(&mut self) -> u8 {
        self.head = (self.head + 1) % FIELD_WIDTH;
        self.cells[self.head as usize].clear();
        self.head
    }

    /// Cell at a column, index taken modulo the field width.
    pub fn cell(&self, column: u8) -> Cell {
        self.cells[(column % FIELD_WIDTH) as usize]
    }

    /// Mark a rock at (column, row, half), column modulo field width.
    pub fn set(&mut self, column: u8, row: u8, half: Half) {
        self.cells[(column % FIELD_WIDTH) as usize].set(row, half);
    }
}

impl Default for PlayField {
    fn default() -> Self {
        Self::new()
    }
}
