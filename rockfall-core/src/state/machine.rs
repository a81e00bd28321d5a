//! State machine definition
//!
//! All rendering and input behavior is a function of the current state
//! and an event. There is no terminal state: the game-over screen
//! always loops back to the splash.

use super::events::Event;

/// Machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Clear screen, draw the title
    SplashBegin,
    /// Blink the "press select" prompt, wait for select
    SplashAnimate,
    /// Reset score and wave counters
    StartGame,
    /// Draw the wave banner, reset field, ship, and shield
    WaveBegin,
    /// Hold the wave banner on screen
    WaveBeginDelay,
    /// Scrolling play: input every tick, frame step on the render gate
    Play,
    /// Award the shield bonus, draw the wave-clear banner
    WaveEnd,
    /// Hold the wave-clear banner, then advance the wave
    WaveEndDelay,
    /// Draw the game-over screen
    GameOver,
    /// Hold the game-over screen, then return to the splash
    GameOverDelay,
}

impl State {
    /// Check if the ship responds to up/down input in this state
    pub fn accepts_ship_input(&self) -> bool {
        matches!(self, State::Play)
    }

    /// Check if this is an attract-mode (pre-game) state
    pub fn is_attract(&self) -> bool {
        matches!(self, State::SplashBegin | State::SplashAnimate)
    }

    /// Process an event and return the next state
    ///
    /// This is the core state transition logic.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            (SplashBegin, Advance) => SplashAnimate,
            (SplashAnimate, SelectClicked) => StartGame,
            (StartGame, Advance) => WaveBegin,

            (WaveBegin, Advance) => WaveBeginDelay,
            (WaveBeginDelay, DelayElapsed) => Play,

            (Play, WaveCleared) => WaveEnd,
            (Play, ShipDestroyed) => GameOver,

            (WaveEnd, Advance) => WaveEndDelay,
            (WaveEndDelay, DelayElapsed) => WaveBegin,

            (GameOver, Advance) => GameOverDelay,
            (GameOverDelay, DelayElapsed) => SplashBegin,

            // Default: stay in current state
            _ => self,
        }
    }
}
