//! Main game controller
//!
//! The controller is the single owner of all game state:
//! - the active state tag and its per-state clock
//! - the render gate timestamp
//! - click decoding, playfield, ship, run counters, PRNG
//!
//! [`Game::tick`] is called on every input poll (~10 ms). It decodes
//! clicks, dispatches to the active state's handler, and applies at
//! most one transition per tick. Entry actions live in the entered
//! state's own handler; banner states run theirs exactly once because
//! they immediately advance.
//!
//! All timestamps are `u32` milliseconds compared with `wrapping_sub`.

use core::fmt::Write as _;

use heapless::String;

use crate::config::{
    GAME_OVER_MS, PROMPT_BLINK_MS, RENDER_PERIOD_MS, ROCK_BOTH_MIN_WAVE, SPAWN_COLUMN,
    SPAWN_RANGE_BASE, SPAWN_RANGE_MIN, WAVE_BANNER_MS, WAVE_SCORE_STEP,
};
use crate::field::{Half, PlayField};
use crate::input::{Buttons, ClickDetector};
use crate::rng::XorShift32;
use crate::run::RunState;
use crate::ship::Ship;
use crate::state::{Event, State};
use crate::traits::{Backlight, DisplayError, GameDisplay};

/// Outcome of one rendered frame during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameOutcome {
    Running,
    WaveCleared,
    ShipDestroyed,
}

/// Random upper bound for a spawn roll. Higher waves narrow the range
/// toward the three rock outcomes, floored so they all stay reachable.
const fn spawn_bound(wave: u16) -> u32 {
    let base = SPAWN_RANGE_BASE.saturating_sub(wave);
    if base < SPAWN_RANGE_MIN {
        SPAWN_RANGE_MIN as u32
    } else {
        base as u32
    }
}

/// Map a spawn roll to (top rock, bottom rock).
///
/// Roll 2 only yields a double rock past the unlock wave, and rolls
/// past 2 are always empty; both degradations are deliberate
/// difficulty tuning, not candidates for cleanup.
const fn classify_roll(value: u32, wave: u16) -> (bool, bool) {
    match value {
        0 => (true, false),
        1 => (false, true),
        2 if wave > ROCK_BOTH_MIN_WAVE => (true, true),
        _ => (false, false),
    }
}

/// Game controller owning all state
pub struct Game {
    /// Current machine state
    state: State,
    /// Timestamp of the last state change (per-state clock)
    state_since_ms: u32,
    /// Timestamp of the last rendered frame / blink toggle
    last_render_ms: u32,
    /// Splash prompt visibility
    prompt_shown: bool,
    /// Falling-edge click decoder
    clicks: ClickDetector,
    /// Rock field ring
    field: PlayField,
    /// Player ship
    ship: Ship,
    /// (column, display row) where the ship glyph was last drawn
    ship_trail: (u8, u8),
    /// Score, wave, shield counters
    run: RunState,
    /// Spawn PRNG
    rng: XorShift32,
}

impl Game {
    /// Create a controller in the initial splash state.
    pub fn new(seed: u32) -> Self {
        let ship = Ship::new();
        let ship_trail = (ship.column(), ship.display_row());
        Self {
            state: State::SplashBegin,
            state_since_ms: 0,
            last_render_ms: 0,
            prompt_shown: false,
            clicks: ClickDetector::new(),
            field: PlayField::new(),
            ship,
            ship_trail,
            run: RunState::new(),
            rng: XorShift32::new(seed),
        }
    }

    /// Current machine state
    pub fn state(&self) -> State {
        self.state
    }

    /// Score, wave, and shield counters
    pub fn run(&self) -> &RunState {
        &self.run
    }

    /// Ship half-row (0..=3)
    pub fn ship_row(&self) -> u8 {
        self.ship.row()
    }

    /// Advance the game by one input tick.
    ///
    /// `now_ms` is a monotonic millisecond timestamp; `pressed` is the
    /// raw button mask for this tick.
    pub fn tick<D: GameDisplay>(
        &mut self,
        now_ms: u32,
        pressed: Buttons,
        display: &mut D,
    ) -> Result<(), DisplayError> {
        let clicked = self.clicks.update(pressed);

        // Ship input runs on every tick, independent of the render
        // gate, but only in states that accept it.
        if self.state.accepts_ship_input() {
            if clicked.contains(Buttons::UP) {
                self.ship.move_up();
            }
            if clicked.contains(Buttons::DOWN) {
                self.ship.move_down();
            }
        }

        let event = match self.state {
            State::SplashBegin => self.splash_begin(now_ms, display)?,
            State::SplashAnimate => self.splash_animate(now_ms, clicked, display)?,
            State::StartGame => self.start_game(),
            State::WaveBegin => self.wave_begin(display)?,
            State::WaveBeginDelay => self.wave_begin_delay(now_ms, display)?,
            State::Play => self.play(now_ms, display)?,
            State::WaveEnd => self.wave_end(display)?,
            State::WaveEndDelay => self.wave_end_delay(now_ms),
            State::GameOver => self.game_over(display)?,
            State::GameOverDelay => self.game_over_delay(now_ms),
        };

        if let Some(event) = event {
            let next = self.state.transition(event);
            if next != self.state {
                self.state = next;
                self.state_since_ms = now_ms;
            }
        }

        Ok(())
    }

    /// Milliseconds spent in the current state.
    fn state_elapsed(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.state_since_ms)
    }

    fn splash_begin<D: GameDisplay>(
        &mut self,
        now_ms: u32,
        display: &mut D,
    ) -> Result<Option<Event>, DisplayError> {
        display.clear()?;
        display.set_backlight(Backlight::Teal)?;
        display.set_cursor(0, 0)?;
        display.print("    ROCKFALL    ")?;
        self.prompt_shown = false;
        self.last_render_ms = now_ms;
        Ok(Some(Event::Advance))
    }

    fn splash_animate<D: GameDisplay>(
        &mut self,
        now_ms: u32,
        clicked: Buttons,
        display: &mut D,
    ) -> Result<Option<Event>, DisplayError> {
        if clicked.contains(Buttons::SELECT) {
            return Ok(Some(Event::SelectClicked));
        }

        if now_ms.wrapping_sub(self.last_render_ms) >= PROMPT_BLINK_MS {
            self.prompt_shown = !self.prompt_shown;
            display.set_cursor(0, 1)?;
            display.print(if self.prompt_shown {
                "  PRESS SELECT  "
            } else {
                "                "
            })?;
            self.last_render_ms = now_ms;
        }

        Ok(None)
    }

    fn start_game(&mut self) -> Option<Event> {
        self.run.reset();
        Some(Event::Advance)
    }

    fn wave_begin<D: GameDisplay>(
        &mut self,
        display: &mut D,
    ) -> Result<Option<Event>, DisplayError> {
        display.clear()?;
        display.set_backlight(Backlight::White)?;

        let mut line: String<16> = String::new();
        let _ = write!(line, "     WAVE {}", self.run.wave);
        display.set_cursor(0, 0)?;
        display.print(&line)?;
        display.set_cursor(0, 1)?;
        display.print("   GET READY!")?;

        self.field.reset(SPAWN_COLUMN);
        self.ship.reset();
        self.ship_trail = (self.ship.column(), self.ship.display_row());
        self.run.begin_wave();

        Ok(Some(Event::Advance))
    }

    fn wave_begin_delay<D: GameDisplay>(
        &mut self,
        now_ms: u32,
        display: &mut D,
    ) -> Result<Option<Event>, DisplayError> {
        if self.state_elapsed(now_ms) < WAVE_BANNER_MS {
            return Ok(None);
        }
        // Banner down, field up: re-arm the render gate so the first
        // frame lands one full period into play.
        display.clear()?;
        self.last_render_ms = now_ms;
        Ok(Some(Event::DelayElapsed))
    }

    fn play<D: GameDisplay>(
        &mut self,
        now_ms: u32,
        display: &mut D,
    ) -> Result<Option<Event>, DisplayError> {
        if now_ms.wrapping_sub(self.last_render_ms) < RENDER_PERIOD_MS {
            return Ok(None);
        }
        self.last_render_ms = now_ms;

        match self.step_frame(display)? {
            FrameOutcome::Running => Ok(None),
            FrameOutcome::WaveCleared => Ok(Some(Event::WaveCleared)),
            FrameOutcome::ShipDestroyed => Ok(Some(Event::ShipDestroyed)),
        }
    }

    /// One rendered frame: spawn, scroll, draw, collide.
    fn step_frame<D: GameDisplay>(&mut self, display: &mut D) -> Result<FrameOutcome, DisplayError> {
        display.set_backlight(self.run.backlight())?;

        // Expose the next column and spawn its contents.
        let head = self.field.advance_head();
        for row in 0..2u8 {
            let (top, bottom) = classify_roll(
                self.rng.next_below(spawn_bound(self.run.wave)),
                self.run.wave,
            );
            if top {
                self.field.set(head, row, Half::Top);
            }
            if bottom {
                self.field.set(head, row, Half::Bottom);
            }

            display.set_cursor(head, row)?;
            match self.field.cell(head).glyph_for(row) {
                Some(glyph) => display.write_glyph(glyph)?,
                None => display.print(" ")?,
            }

            self.run.score += 1;
        }

        display.scroll_left()?;

        // Erase the ship's old cell, restoring any rock underneath.
        let (trail_col, trail_row) = self.ship_trail;
        display.set_cursor(trail_col, trail_row)?;
        match self.field.cell(trail_col).glyph_for(trail_row) {
            Some(glyph) => display.write_glyph(glyph)?,
            None => display.print(" ")?,
        }

        // Draw the ship at its new column.
        let column = self.ship.advance();
        let cell = self.field.cell(column);
        let overlap = cell.has(self.ship.display_row(), self.ship.half());
        display.set_cursor(column, self.ship.display_row())?;
        display.write_glyph(self.ship.glyph(overlap))?;
        self.ship_trail = (column, self.ship.display_row());

        // A rock in the half the ship is NOT occupying drains the
        // shield; same-half overlap only changes the glyph.
        if cell.has(self.ship.display_row(), self.ship.half().opposite()) {
            display.set_backlight(Backlight::Red)?;
            if !self.run.absorb_hit() {
                return Ok(FrameOutcome::ShipDestroyed);
            }
        }

        if self.run.score % WAVE_SCORE_STEP == 0 {
            return Ok(FrameOutcome::WaveCleared);
        }

        Ok(FrameOutcome::Running)
    }

    fn wave_end<D: GameDisplay>(&mut self, display: &mut D) -> Result<Option<Event>, DisplayError> {
        self.run.apply_shield_bonus();

        display.clear()?;
        display.set_backlight(Backlight::Green)?;

        let mut line: String<16> = String::new();
        let _ = write!(line, "  WAVE {} CLEAR", self.run.wave);
        display.set_cursor(0, 0)?;
        display.print(&line)?;

        let mut line: String<16> = String::new();
        let _ = write!(line, "  SCORE {}", self.run.score);
        display.set_cursor(0, 1)?;
        display.print(&line)?;

        Ok(Some(Event::Advance))
    }

    fn wave_end_delay(&mut self, now_ms: u32) -> Option<Event> {
        if self.state_elapsed(now_ms) < WAVE_BANNER_MS {
            return None;
        }
        self.run.wave += 1;
        Some(Event::DelayElapsed)
    }

    fn game_over<D: GameDisplay>(
        &mut self,
        display: &mut D,
    ) -> Result<Option<Event>, DisplayError> {
        display.clear()?;
        display.set_backlight(Backlight::Red)?;
        display.set_cursor(0, 0)?;
        display.print("   GAME  OVER   ")?;

        let mut line: String<16> = String::new();
        let _ = write!(line, "  SCORE {}", self.run.score);
        display.set_cursor(0, 1)?;
        display.print(&line)?;

        Ok(Some(Event::Advance))
    }

    fn game_over_delay(&mut self, now_ms: u32) -> Option<Event> {
        if self.state_elapsed(now_ms) < GAME_OVER_MS {
            return None;
        }
        Some(Event::DelayElapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SHIELD_MAX, TICK_INTERVAL_MS};
    use crate::glyphs::Glyph;
    use proptest::prelude::*;

    /// Display double recording the operations it receives.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Op {
        Clear,
        Backlight(Backlight),
        Cursor(u8, u8),
        Glyph(Glyph),
        Print,
        ScrollLeft,
    }

    #[derive(Default)]
    struct MockDisplay {
        ops: heapless::Vec<Op, 256>,
        backlight: Option<Backlight>,
    }

    impl MockDisplay {
        fn new() -> Self {
            Self::default()
        }

        fn push(&mut self, op: Op) {
            // Long property runs overflow the recorder; dropping old
            // history is fine, assertions only look at recent ops.
            if self.ops.is_full() {
                self.ops.clear();
            }
            let _ = self.ops.push(op);
        }
    }

    impl GameDisplay for MockDisplay {
        fn clear(&mut self) -> Result<(), DisplayError> {
            self.push(Op::Clear);
            Ok(())
        }

        fn set_backlight(&mut self, color: Backlight) -> Result<(), DisplayError> {
            self.backlight = Some(color);
            self.push(Op::Backlight(color));
            Ok(())
        }

        fn set_cursor(&mut self, column: u8, row: u8) -> Result<(), DisplayError> {
            crate::traits::display::check_position(column, row)?;
            self.push(Op::Cursor(column, row));
            Ok(())
        }

        fn write_glyph(&mut self, glyph: Glyph) -> Result<(), DisplayError> {
            self.push(Op::Glyph(glyph));
            Ok(())
        }

        fn print(&mut self, _text: &str) -> Result<(), DisplayError> {
            self.push(Op::Print);
            Ok(())
        }

        fn scroll_left(&mut self) -> Result<(), DisplayError> {
            self.push(Op::ScrollLeft);
            Ok(())
        }
    }

    /// Press and release a button across two ticks (clicks fire on
    /// release).
    fn click(game: &mut Game, display: &mut MockDisplay, now: &mut u32, button: Buttons) {
        *now += TICK_INTERVAL_MS;
        game.tick(*now, button, display).unwrap();
        *now += TICK_INTERVAL_MS;
        game.tick(*now, Buttons::NONE, display).unwrap();
    }

    /// Idle ticks until `duration` ms have passed.
    fn run_for(game: &mut Game, display: &mut MockDisplay, now: &mut u32, duration: u32) {
        let end = *now + duration;
        while *now < end {
            *now += TICK_INTERVAL_MS;
            game.tick(*now, Buttons::NONE, display).unwrap();
        }
    }

    /// Drive a fresh game from the splash into play.
    fn enter_play(game: &mut Game, display: &mut MockDisplay, now: &mut u32) {
        *now += TICK_INTERVAL_MS;
        game.tick(*now, Buttons::NONE, display).unwrap(); // SplashBegin
        click(game, display, now, Buttons::SELECT); // -> StartGame (+1 tick)
        run_for(game, display, now, 2 * TICK_INTERVAL_MS); // StartGame, WaveBegin
        assert_eq!(game.state(), State::WaveBeginDelay);
        run_for(game, display, now, WAVE_BANNER_MS + TICK_INTERVAL_MS);
        assert_eq!(game.state(), State::Play);
    }

    /// A game already in play, bypassing the attract screens.
    fn playing_game(seed: u32) -> Game {
        let mut game = Game::new(seed);
        game.state = State::Play;
        game.state_since_ms = 0;
        game.last_render_ms = 0;
        game.field.reset(SPAWN_COLUMN);
        game.run.begin_wave();
        game
    }

    #[test]
    fn test_attract_flow_reaches_play() {
        let mut game = Game::new(1);
        let mut display = MockDisplay::new();
        let mut now = 0u32;

        now += TICK_INTERVAL_MS;
        game.tick(now, Buttons::NONE, &mut display).unwrap();
        assert_eq!(game.state(), State::SplashAnimate);

        // Other buttons do nothing on the splash.
        click(&mut game, &mut display, &mut now, Buttons::LEFT);
        assert_eq!(game.state(), State::SplashAnimate);

        click(&mut game, &mut display, &mut now, Buttons::SELECT);
        run_for(&mut game, &mut display, &mut now, 2 * TICK_INTERVAL_MS);
        assert_eq!(game.state(), State::WaveBeginDelay);
        assert_eq!(game.run().wave, 1);
        assert_eq!(game.run().score, 0);
        assert_eq!(game.run().shield, SHIELD_MAX);

        run_for(&mut game, &mut display, &mut now, WAVE_BANNER_MS + TICK_INTERVAL_MS);
        assert_eq!(game.state(), State::Play);
    }

    #[test]
    fn test_splash_prompt_blinks() {
        let mut game = Game::new(1);
        let mut display = MockDisplay::new();
        let mut now = 0u32;
        run_for(&mut game, &mut display, &mut now, PROMPT_BLINK_MS / 2);
        assert!(!game.prompt_shown);
        run_for(&mut game, &mut display, &mut now, PROMPT_BLINK_MS);
        assert!(game.prompt_shown);
        run_for(&mut game, &mut display, &mut now, PROMPT_BLINK_MS);
        assert!(!game.prompt_shown);
    }

    #[test]
    fn test_score_advances_two_per_frame() {
        let mut game = Game::new(1);
        let mut display = MockDisplay::new();
        let mut now = 0u32;
        enter_play(&mut game, &mut display, &mut now);

        let base = game.run().score;
        run_for(&mut game, &mut display, &mut now, RENDER_PERIOD_MS);
        assert_eq!(game.run().score, base + 2);
        run_for(&mut game, &mut display, &mut now, 4 * RENDER_PERIOD_MS);
        assert_eq!(game.run().score, base + 10);
    }

    #[test]
    fn test_ship_moves_only_on_click_edges() {
        let mut game = playing_game(1);
        let mut display = MockDisplay::new();
        let mut now = 0u32;

        let start_row = game.ship_row();
        // Holding the button does not move the ship.
        now += TICK_INTERVAL_MS;
        game.tick(now, Buttons::UP, &mut display).unwrap();
        now += TICK_INTERVAL_MS;
        game.tick(now, Buttons::UP, &mut display).unwrap();
        assert_eq!(game.ship_row(), start_row);
        // Release clicks.
        now += TICK_INTERVAL_MS;
        game.tick(now, Buttons::NONE, &mut display).unwrap();
        assert_eq!(game.ship_row(), start_row - 1);

        // Clamped at the edges.
        for _ in 0..6 {
            click(&mut game, &mut display, &mut now, Buttons::DOWN);
        }
        assert_eq!(game.ship_row(), 3);
    }

    #[test]
    fn test_ship_ignores_input_outside_play() {
        let mut game = Game::new(1);
        let mut display = MockDisplay::new();
        let mut now = 0u32;

        let start_row = game.ship_row();

        // On the splash, up/down clicks do nothing.
        now += TICK_INTERVAL_MS;
        game.tick(now, Buttons::NONE, &mut display).unwrap();
        click(&mut game, &mut display, &mut now, Buttons::UP);
        click(&mut game, &mut display, &mut now, Buttons::DOWN);
        assert_eq!(game.ship_row(), start_row);

        // Same during the wave banner delay.
        click(&mut game, &mut display, &mut now, Buttons::SELECT);
        run_for(&mut game, &mut display, &mut now, 2 * TICK_INTERVAL_MS);
        assert_eq!(game.state(), State::WaveBeginDelay);
        click(&mut game, &mut display, &mut now, Buttons::UP);
        assert_eq!(game.ship_row(), start_row);
    }

    #[test]
    fn test_collision_drains_shield_and_flags_danger() {
        let mut game = playing_game(1);
        let mut display = MockDisplay::new();

        // Ship starts at column 2, half-row 1 (row 0, bottom half) and
        // advances to column 3 on the first frame. Plant a rock in the
        // OPPOSITE half of that cell.
        game.field.set(3, 0, Half::Top);

        game.tick(RENDER_PERIOD_MS, Buttons::NONE, &mut display).unwrap();
        assert_eq!(game.run().shield, SHIELD_MAX - 1);
        assert_eq!(game.state(), State::Play);
        assert_eq!(display.backlight, Some(Backlight::Red));
    }

    #[test]
    fn test_same_half_overlap_is_not_a_hit() {
        let mut game = playing_game(1);
        let mut display = MockDisplay::new();

        // Rock in the ship's own half: glyph changes, shield does not.
        game.field.set(3, 0, Half::Bottom);

        game.tick(RENDER_PERIOD_MS, Buttons::NONE, &mut display).unwrap();
        assert_eq!(game.run().shield, SHIELD_MAX);
        assert!(display.ops.contains(&Op::Glyph(Glyph::ShipBottomHit)));
    }

    #[test]
    fn test_collision_at_zero_shield_is_game_over() {
        let mut game = playing_game(1);
        let mut display = MockDisplay::new();
        game.run.shield = 0;
        game.field.set(3, 0, Half::Top);

        game.tick(RENDER_PERIOD_MS, Buttons::NONE, &mut display).unwrap();
        assert_eq!(game.state(), State::GameOver);
        assert_eq!(game.run().shield, 0);
    }

    #[test]
    fn test_wave_clear_on_score_multiple() {
        let mut game = playing_game(1);
        let mut display = MockDisplay::new();
        game.run.score = WAVE_SCORE_STEP - 2;

        game.tick(RENDER_PERIOD_MS, Buttons::NONE, &mut display).unwrap();
        assert_eq!(game.run().score, WAVE_SCORE_STEP);
        assert_eq!(game.state(), State::WaveEnd);
    }

    #[test]
    fn test_wave_end_awards_bonus_and_advances_wave() {
        let mut game = playing_game(1);
        let mut display = MockDisplay::new();
        let mut now = RENDER_PERIOD_MS;
        game.run.score = WAVE_SCORE_STEP - 2;
        game.run.shield = 7;

        game.tick(now, Buttons::NONE, &mut display).unwrap();
        assert_eq!(game.state(), State::WaveEnd);

        now += TICK_INTERVAL_MS;
        game.tick(now, Buttons::NONE, &mut display).unwrap();
        assert_eq!(game.state(), State::WaveEndDelay);
        assert_eq!(game.run().score, WAVE_SCORE_STEP + 70);

        run_for(&mut game, &mut display, &mut now, WAVE_BANNER_MS + TICK_INTERVAL_MS);
        assert_eq!(game.run().wave, 2);
        // WaveBegin refills the shield on its way to the delay state.
        run_for(&mut game, &mut display, &mut now, TICK_INTERVAL_MS);
        assert_eq!(game.state(), State::WaveBeginDelay);
        assert_eq!(game.run().shield, SHIELD_MAX);
    }

    #[test]
    fn test_game_over_returns_to_splash() {
        let mut game = playing_game(1);
        let mut display = MockDisplay::new();
        let mut now = RENDER_PERIOD_MS;
        game.run.shield = 0;
        game.field.set(3, 0, Half::Top);

        game.tick(now, Buttons::NONE, &mut display).unwrap();
        assert_eq!(game.state(), State::GameOver);

        now += TICK_INTERVAL_MS;
        game.tick(now, Buttons::NONE, &mut display).unwrap();
        assert_eq!(game.state(), State::GameOverDelay);

        run_for(&mut game, &mut display, &mut now, GAME_OVER_MS + TICK_INTERVAL_MS);
        assert!(game.state().is_attract());
    }

    #[test]
    fn test_spawn_bound_narrows_and_clamps() {
        assert_eq!(spawn_bound(1), 12);
        assert_eq!(spawn_bound(5), 8);
        assert_eq!(spawn_bound(9), 4);
        assert_eq!(spawn_bound(10), 3);
        assert_eq!(spawn_bound(12), 3);
        assert_eq!(spawn_bound(100), 3);
    }

    #[test]
    fn test_roll_classification_thresholds() {
        assert_eq!(classify_roll(0, 1), (true, false));
        assert_eq!(classify_roll(1, 1), (false, true));
        // Double rocks degrade to empty through wave 5 ...
        assert_eq!(classify_roll(2, 5), (false, false));
        // ... and unlock from wave 6.
        assert_eq!(classify_roll(2, 6), (true, true));
        // Rolls past 2 are always empty space.
        assert_eq!(classify_roll(3, 1), (false, false));
        assert_eq!(classify_roll(11, 1), (false, false));
    }

    #[test]
    fn test_late_waves_spawn_every_roll() {
        // At wave 12 the bound clamps to 3, so every roll is a rock.
        let mut rng = XorShift32::new(99);
        for _ in 0..100 {
            let roll = rng.next_below(spawn_bound(12));
            assert!(roll < 3);
            assert_ne!(classify_roll(roll, 12), (false, false));
        }
    }

    proptest! {
        /// Bounds and monotonicity hold under arbitrary input streams.
        #[test]
        fn invariants_under_arbitrary_input(
            seed in proptest::num::u32::ANY,
            masks in proptest::collection::vec(0u8..0x20, 1..200),
        ) {
            let mut game = playing_game(seed);
            let mut display = MockDisplay::new();
            let mut now = 0u32;
            let mut prev_score = game.run().score;

            for raw in masks {
                now += TICK_INTERVAL_MS;
                game.tick(now, Buttons::from_bits(raw), &mut display).unwrap();
                prop_assert!(game.ship_row() < 4);
                prop_assert!(game.run().shield <= SHIELD_MAX);
                prop_assert!(game.run().score >= prev_score);
                prop_assert!(game.field.head() < crate::config::FIELD_WIDTH);
                prev_score = game.run().score;
            }
        }
    }
}
