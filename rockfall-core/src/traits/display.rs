//! Display driver trait for the LCD keypad shield

use crate::config::{DISPLAY_ROWS, FIELD_WIDTH};
use crate::glyphs::Glyph;

/// Errors that can occur with display communication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// I2C bus failure
    Bus,
    /// Cursor position outside the 40x2 character buffer
    InvalidPosition,
}

/// Backlight colors of the RGB LCD shield
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Backlight {
    Red,
    Yellow,
    Green,
    Teal,
    Blue,
    Violet,
    White,
}

impl Backlight {
    /// Red/green/blue channel states for this color.
    pub const fn channels(self) -> (bool, bool, bool) {
        match self {
            Backlight::Red => (true, false, false),
            Backlight::Yellow => (true, true, false),
            Backlight::Green => (false, true, false),
            Backlight::Teal => (false, true, true),
            Backlight::Blue => (false, false, true),
            Backlight::Violet => (true, false, true),
            Backlight::White => (true, true, true),
        }
    }
}

/// Trait for driving the character display
///
/// The game treats the display as a stateless sink; all game state
/// stays in the core. Columns address the full 40-column character
/// buffer, of which a 16-column window is visible and scrolled.
pub trait GameDisplay {
    /// Clear the entire character buffer and home the window
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Set the backlight color
    fn set_backlight(&mut self, color: Backlight) -> Result<(), DisplayError>;

    /// Move the write cursor
    ///
    /// - `column`: buffer column (0-39)
    /// - `row`: display row (0-1)
    fn set_cursor(&mut self, column: u8, row: u8) -> Result<(), DisplayError>;

    /// Write one custom glyph at the cursor
    fn write_glyph(&mut self, glyph: Glyph) -> Result<(), DisplayError>;

    /// Write ASCII text at the cursor
    fn print(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Shift the visible window one column left
    fn scroll_left(&mut self) -> Result<(), DisplayError>;
}

/// Validate a cursor position against the character buffer bounds.
///
/// Driver implementations share this check so the core's invariant
/// (columns modulo 40, rows 0..2) is enforced at the seam.
pub fn check_position(column: u8, row: u8) -> Result<(), DisplayError> {
    if column >= FIELD_WIDTH || row >= DISPLAY_ROWS {
        return Err(DisplayError::InvalidPosition);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_position_bounds() {
        assert!(check_position(0, 0).is_ok());
        assert!(check_position(39, 1).is_ok());
        assert_eq!(check_position(40, 0), Err(DisplayError::InvalidPosition));
        assert_eq!(check_position(0, 2), Err(DisplayError::InvalidPosition));
    }

    #[test]
    fn test_backlight_channels() {
        assert_eq!(Backlight::Red.channels(), (true, false, false));
        assert_eq!(Backlight::Teal.channels(), (false, true, true));
        assert_eq!(Backlight::White.channels(), (true, true, true));
    }
}
