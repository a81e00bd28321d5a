//! Per-run counters: score, wave, shield
//!
//! Score only ever grows. Shield power stays in 0..=SHIELD_MAX - a hit
//! at zero is not absorbed, it destroys the ship.

use crate::config::{SHIELD_BONUS, SHIELD_CALM, SHIELD_MAX, SHIELD_WARNING};
use crate::traits::Backlight;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RunState {
    pub score: u32,
    pub wave: u16,
    pub shield: u8,
}

impl RunState {
    pub const fn new() -> Self {
        Self {
            score: 0,
            wave: 1,
            shield: SHIELD_MAX,
        }
    }

    /// Start a fresh run.
    pub fn reset(&mut self) {
        self.score = 0;
        self.wave = 1;
    }

    /// Refill the shield for a new wave.
    pub fn begin_wave(&mut self) {
        self.shield = SHIELD_MAX;
    }

    /// Take a hit. Returns `true` if the shield absorbed it, `false`
    /// if the ship is destroyed (shield already empty). Shield power
    /// never goes below zero.
    #[must_use]
    pub fn absorb_hit(&mut self) -> bool {
        if self.shield == 0 {
            return false;
        }
        self.shield -= 1;
        true
    }

    /// Award the end-of-wave shield bonus.
    pub fn apply_shield_bonus(&mut self) {
        self.score += self.shield as u32 * SHIELD_BONUS;
    }

    /// Backlight color for the current shield level.
    pub const fn backlight(&self) -> Backlight {
        if self.shield > SHIELD_CALM {
            Backlight::Green
        } else if self.shield > SHIELD_WARNING {
            Backlight::Yellow
        } else {
            Backlight::Red
        }
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shield_never_negative() {
        let mut run = RunState::new();
        for _ in 0..SHIELD_MAX {
            assert!(run.absorb_hit());
        }
        assert_eq!(run.shield, 0);
        // Next hit destroys, shield stays at zero.
        assert!(!run.absorb_hit());
        assert_eq!(run.shield, 0);
    }

    #[test]
    fn test_shield_bonus() {
        let mut run = RunState::new();
        run.shield = 7;
        run.apply_shield_bonus();
        assert_eq!(run.score, 70);
    }

    #[test]
    fn test_reset_keeps_nothing() {
        let mut run = RunState::new();
        run.score = 1234;
        run.wave = 9;
        run.reset();
        assert_eq!(run.score, 0);
        assert_eq!(run.wave, 1);
    }

    #[test]
    fn test_backlight_thresholds() {
        let mut run = RunState::new();
        run.shield = 10;
        assert_eq!(run.backlight(), Backlight::Green);
        run.shield = 7;
        assert_eq!(run.backlight(), Backlight::Green);
        run.shield = 6;
        assert_eq!(run.backlight(), Backlight::Yellow);
        run.shield = 4;
        assert_eq!(run.backlight(), Backlight::Yellow);
        run.shield = 3;
        assert_eq!(run.backlight(), Backlight::Red);
        run.shield = 0;
        assert_eq!(run.backlight(), Backlight::Red);
    }
}
