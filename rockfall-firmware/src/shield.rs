//! RGB LCD keypad shield driver
//!
//! A single MCP23017 I2C port expander fronts everything on the
//! shield: the HD44780 16x2 panel in 4-bit mode, three active-low
//! backlight LEDs, and five buttons.
//!
//! Pin map:
//! - Port A: bits 0-4 buttons (active low, pulled up),
//!   bit 6 red LED, bit 7 green LED
//! - Port B: bit 0 blue LED, bits 1-4 LCD data D7..D4,
//!   bit 5 enable, bit 6 R/W, bit 7 register select

use embassy_time::{block_for, Duration};
use embedded_hal::i2c::I2c;

use rockfall_core::glyphs::Glyph;
use rockfall_core::input::Buttons;
use rockfall_core::traits::display::check_position;
use rockfall_core::traits::{Backlight, DisplayError, GameDisplay};

/// MCP23017 I2C address (A0-A2 grounded)
const MCP23017_ADDR: u8 = 0x20;

/// MCP23017 registers (IOCON.BANK = 0)
#[allow(dead_code)]
mod reg {
    pub const IODIRA: u8 = 0x00;
    pub const IODIRB: u8 = 0x01;
    pub const GPPUA: u8 = 0x0C;
    pub const GPPUB: u8 = 0x0D;
    pub const GPIOA: u8 = 0x12;
    pub const GPIOB: u8 = 0x13;
    pub const OLATA: u8 = 0x14;
    pub const OLATB: u8 = 0x15;
}

/// HD44780 commands
#[allow(dead_code)]
mod cmd {
    pub const CLEAR: u8 = 0x01;
    pub const HOME: u8 = 0x02;
    pub const ENTRY_MODE: u8 = 0x06; // increment cursor, no shift
    pub const DISPLAY_ON: u8 = 0x0C; // display on, cursor off
    pub const SHIFT_LEFT: u8 = 0x18; // shift the visible window left
    pub const FUNCTION_SET: u8 = 0x28; // 4-bit bus, 2 lines, 5x8 font
    pub const SET_CGRAM: u8 = 0x40;
    pub const SET_DDRAM: u8 = 0x80;
}

// Port A bits
const BTN_MASK: u8 = 0x1F;
const LED_RED: u8 = 1 << 6;
const LED_GREEN: u8 = 1 << 7;

// Port B bits
const LED_BLUE: u8 = 1 << 0;
const LCD_EN: u8 = 1 << 5;
const LCD_RS: u8 = 1 << 7;

/// DDRAM address offset of the second display row
const ROW_OFFSET: u8 = 0x40;

/// Map a data nibble onto port B: D4..D7 sit on bits 4..1.
const fn data_bits(nibble: u8) -> u8 {
    let mut bits = 0;
    if nibble & 0x01 != 0 {
        bits |= 1 << 4;
    }
    if nibble & 0x02 != 0 {
        bits |= 1 << 3;
    }
    if nibble & 0x04 != 0 {
        bits |= 1 << 2;
    }
    if nibble & 0x08 != 0 {
        bits |= 1 << 1;
    }
    bits
}

/// Driver for the RGB LCD keypad shield
pub struct LcdShield<I2C> {
    i2c: I2C,
    /// Shadow of the port A output latch (backlight red/green)
    olat_a: u8,
    /// Shadow of the port B output latch (backlight blue + LCD bus)
    olat_b: u8,
}

impl<I2C> LcdShield<I2C>
where
    I2C: I2c,
{
    /// Create a new driver. Backlight starts off (LEDs are active low).
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            olat_a: LED_RED | LED_GREEN,
            olat_b: LED_BLUE,
        }
    }

    /// Configure the expander and run the HD44780 power-up sequence,
    /// then upload the custom glyph set to CGRAM.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        // Buttons are inputs with pull-ups; everything else drives out.
        self.write_register(reg::IODIRA, BTN_MASK)?;
        self.write_register(reg::GPPUA, BTN_MASK)?;
        self.write_register(reg::IODIRB, 0x00)?;
        self.write_register(reg::OLATA, self.olat_a)?;
        self.write_register(reg::OLATB, self.olat_b)?;

        // HD44780 4-bit wake-up dance (datasheet figure 24)
        block_for(Duration::from_millis(50));
        self.write_nibble(0x03, false)?;
        block_for(Duration::from_millis(5));
        self.write_nibble(0x03, false)?;
        block_for(Duration::from_micros(150));
        self.write_nibble(0x03, false)?;
        self.write_nibble(0x02, false)?;

        self.command(cmd::FUNCTION_SET)?;
        self.command(cmd::DISPLAY_ON)?;
        self.command(cmd::ENTRY_MODE)?;
        self.clear()?;
        self.load_glyphs()
    }

    /// Current pressed-button mask (port A is active low).
    pub fn read_buttons(&mut self) -> Result<Buttons, DisplayError> {
        let port = self.read_register(reg::GPIOA)?;
        Ok(Buttons::from_bits(!port & BTN_MASK))
    }

    fn load_glyphs(&mut self) -> Result<(), DisplayError> {
        for glyph in Glyph::ALL {
            self.command(cmd::SET_CGRAM | (glyph.index() << 3))?;
            for row in glyph.bitmap() {
                self.write_byte(*row)?;
            }
        }
        // Leave CGRAM addressing mode.
        self.command(cmd::SET_DDRAM)
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(MCP23017_ADDR, &[register, value])
            .map_err(|_| DisplayError::Bus)
    }

    fn read_register(&mut self, register: u8) -> Result<u8, DisplayError> {
        let mut buf = [0u8];
        self.i2c
            .write_read(MCP23017_ADDR, &[register], &mut buf)
            .map_err(|_| DisplayError::Bus)?;
        Ok(buf[0])
    }

    /// Clock one nibble into the LCD, preserving the backlight bit.
    fn write_nibble(&mut self, nibble: u8, rs: bool) -> Result<(), DisplayError> {
        let mut bits = (self.olat_b & LED_BLUE) | data_bits(nibble);
        if rs {
            bits |= LCD_RS;
        }

        self.write_register(reg::OLATB, bits)?;
        self.write_register(reg::OLATB, bits | LCD_EN)?;
        block_for(Duration::from_micros(1));
        self.write_register(reg::OLATB, bits)?;
        self.olat_b = bits;

        // Most HD44780 instructions need 37us to settle.
        block_for(Duration::from_micros(40));
        Ok(())
    }

    fn send(&mut self, value: u8, rs: bool) -> Result<(), DisplayError> {
        self.write_nibble(value >> 4, rs)?;
        self.write_nibble(value & 0x0F, rs)
    }

    fn command(&mut self, value: u8) -> Result<(), DisplayError> {
        self.send(value, false)
    }

    fn write_byte(&mut self, value: u8) -> Result<(), DisplayError> {
        self.send(value, true)
    }
}

impl<I2C> GameDisplay for LcdShield<I2C>
where
    I2C: I2c,
{
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.command(cmd::CLEAR)?;
        // Clear is the one slow instruction.
        block_for(Duration::from_millis(2));
        Ok(())
    }

    fn set_backlight(&mut self, color: Backlight) -> Result<(), DisplayError> {
        let (red, green, blue) = color.channels();

        let mut olat_a = self.olat_a | LED_RED | LED_GREEN;
        if red {
            olat_a &= !LED_RED;
        }
        if green {
            olat_a &= !LED_GREEN;
        }

        let mut olat_b = self.olat_b | LED_BLUE;
        if blue {
            olat_b &= !LED_BLUE;
        }

        if olat_a != self.olat_a {
            self.write_register(reg::OLATA, olat_a)?;
            self.olat_a = olat_a;
        }
        if olat_b != self.olat_b {
            self.write_register(reg::OLATB, olat_b)?;
            self.olat_b = olat_b;
        }
        Ok(())
    }

    fn set_cursor(&mut self, column: u8, row: u8) -> Result<(), DisplayError> {
        check_position(column, row)?;
        self.command(cmd::SET_DDRAM | (row * ROW_OFFSET + column))
    }

    fn write_glyph(&mut self, glyph: Glyph) -> Result<(), DisplayError> {
        self.write_byte(glyph.index())
    }

    fn print(&mut self, text: &str) -> Result<(), DisplayError> {
        for byte in text.bytes() {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    fn scroll_left(&mut self) -> Result<(), DisplayError> {
        self.command(cmd::SHIFT_LEFT)
    }
}
