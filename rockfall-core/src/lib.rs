//! Board-agnostic game logic for the Rockfall LCD arcade game
//!
//! This crate contains all gameplay rules with no dependency on
//! specific hardware:
//!
//! - Button bitmask decoding (falling-edge click detection)
//! - The game state machine (splash, wave, play, game over)
//! - Playfield, ship, and run-state data
//! - The per-frame render/collision step
//! - Display abstraction trait and the custom glyph set
//!
//! Time enters only as a millisecond timestamp passed into
//! [`game::Game::tick`], and randomness only through the seedable
//! [`rng::XorShift32`], so the whole game runs deterministically on a
//! host for testing.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod field;
pub mod game;
pub mod glyphs;
pub mod input;
pub mod rng;
pub mod run;
pub mod ship;
pub mod state;
pub mod traits;
