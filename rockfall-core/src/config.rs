//! Gameplay tuning constants
//!
//! Every magic number in the game lives here. The thresholds and
//! ranges are deliberate difficulty tuning, not arbitrary.

/// Input poll / state dispatch period in milliseconds.
pub const TICK_INTERVAL_MS: u32 = 10;

/// Playfield width in columns. Matches the HD44780 DDRAM row length,
/// so the whole field lives in display memory and scrolls in hardware.
pub const FIELD_WIDTH: u8 = 40;

/// Columns visible on the 16x2 panel at any moment.
pub const VISIBLE_COLUMNS: u8 = 16;

/// Physical display rows.
pub const DISPLAY_ROWS: u8 = 2;

/// Logical half-rows the ship can occupy (two per display row).
pub const HALF_ROWS: u8 = 4;

/// Minimum interval between rendered frames during play. Game content
/// (scroll, spawns, score) only advances on this cadence, decoupled
/// from the faster input tick.
pub const RENDER_PERIOD_MS: u32 = 250;

/// Blink period of the splash-screen prompt.
pub const PROMPT_BLINK_MS: u32 = 1_000;

/// How long the wave begin/end banners stay up.
pub const WAVE_BANNER_MS: u32 = 3_000;

/// How long the game-over screen stays up before the splash returns.
pub const GAME_OVER_MS: u32 = 5_000;

/// Shield power at the start of every wave.
pub const SHIELD_MAX: u8 = 10;

/// Score awarded per remaining shield point at wave end.
pub const SHIELD_BONUS: u32 = 10;

/// A wave ends when the score crosses a multiple of this.
pub const WAVE_SCORE_STEP: u32 = 500;

/// Shield power above which the backlight stays calm (green).
pub const SHIELD_CALM: u8 = 6;

/// Shield power above which the backlight warns (yellow); at or below,
/// danger (red).
pub const SHIELD_WARNING: u8 = 3;

/// The "rocks in both halves" spawn outcome is only live for waves
/// strictly greater than this; earlier waves degrade it to empty.
pub const ROCK_BOTH_MIN_WAVE: u16 = 5;

/// Spawn rolls draw from `[0, max(SPAWN_RANGE_MIN, SPAWN_RANGE_BASE - wave))`.
/// Higher waves narrow the range toward the three rock outcomes.
pub const SPAWN_RANGE_BASE: u16 = 13;

/// Floor of the spawn range; keeps all three rock outcomes reachable
/// from wave 10 onward.
pub const SPAWN_RANGE_MIN: u16 = 3;

/// Ship column at wave start (near the left edge of the window).
pub const SHIP_HOME_COLUMN: u8 = 2;

/// Ship half-row at wave start.
pub const SHIP_HOME_ROW: u8 = 1;

/// Head (spawn) column at wave start: the right edge of the visible
/// window, so new rocks scroll in from off-screen.
pub const SPAWN_COLUMN: u8 = VISIBLE_COLUMNS - 1;
