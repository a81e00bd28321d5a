//! Game loop task
//!
//! One cooperative loop owns the shield: every 10 ms it polls the
//! buttons and hands the elapsed time plus the raw mask to the core
//! controller, which does all state dispatch and rendering.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use rockfall_core::config::TICK_INTERVAL_MS;
use rockfall_core::game::Game;
use rockfall_core::input::Buttons;

use crate::shield::LcdShield;
use crate::ShieldBus;

/// Game task - poll, dispatch, render
#[embassy_executor::task]
pub async fn game_task(mut shield: LcdShield<ShieldBus>, seed: u32) {
    info!("Game task started");

    let mut game = Game::new(seed);
    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS as u64));
    let start = Instant::now();

    loop {
        ticker.next().await;
        let now_ms = start.elapsed().as_millis() as u32;

        let pressed = match shield.read_buttons() {
            Ok(buttons) => buttons,
            Err(_) => {
                warn!("Button read failed, treating as all released");
                Buttons::NONE
            }
        };
        if !pressed.is_empty() {
            trace!("Buttons down: {=u8:#x}", pressed.bits());
        }

        // A failed write shows up as a visual glitch, nothing more.
        if game.tick(now_ms, pressed, &mut shield).is_err() {
            warn!("Display write failed");
        }
    }
}
