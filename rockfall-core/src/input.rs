//! Button bitmask decoding
//!
//! The shield reports five buttons as a raw pressed bitmask. The game
//! acts on *clicks* - a button counts as clicked on the tick where it
//! was pressed before and is released now (falling edge), so holding a
//! button moves the ship exactly once.

/// Pressed-button bitmask.
///
/// Bit order matches the keypad shield's port wiring, so the firmware
/// can pass the (inverted) port read straight through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Buttons(u8);

impl Buttons {
    /// No buttons pressed.
    pub const NONE: Buttons = Buttons(0);
    pub const SELECT: Buttons = Buttons(1 << 0);
    pub const RIGHT: Buttons = Buttons(1 << 1);
    pub const DOWN: Buttons = Buttons(1 << 2);
    pub const UP: Buttons = Buttons(1 << 3);
    pub const LEFT: Buttons = Buttons(1 << 4);

    /// Mask covering all five valid button bits.
    pub const ALL: Buttons = Buttons(0x1F);

    /// Build a mask from raw bits, discarding anything outside the
    /// five button positions.
    pub const fn from_bits(bits: u8) -> Self {
        Buttons(bits & Self::ALL.0)
    }

    /// Raw bit representation.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check whether every button in `other` is set in `self`.
    pub const fn contains(self, other: Buttons) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl core::ops::BitOr for Buttons {
    type Output = Buttons;

    fn bitor(self, rhs: Buttons) -> Buttons {
        Buttons(self.0 | rhs.0)
    }
}

/// Falling-edge click detector.
///
/// Holds the previous tick's pressed mask. Must be updated exactly
/// once per tick, before state dispatch.
#[derive(Debug, Default)]
pub struct ClickDetector {
    previous: Buttons,
}

impl ClickDetector {
    pub const fn new() -> Self {
        Self {
            previous: Buttons::NONE,
        }
    }

    /// Feed the current pressed mask, returning the clicked mask: bits
    /// that were pressed on the previous tick and are released now.
    pub fn update(&mut self, current: Buttons) -> Buttons {
        let clicked = Buttons(self.previous.0 & !current.0);
        self.previous = current;
        clicked
    }
}
