//! Rockfall - 16x2 LCD arcade game firmware
//!
//! Main firmware binary for RP2040 boards carrying an I2C RGB LCD
//! keypad shield (MCP23017 port expander fronting an HD44780 panel,
//! three backlight LEDs, and five buttons).
//!
//! All gameplay lives in `rockfall-core`; this binary owns the bus,
//! seeds the spawn PRNG from analog noise, and runs the 10 ms game
//! loop task.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::Pull;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use {defmt_rtt as _, panic_probe as _};

use crate::shield::LcdShield;

mod shield;
mod tasks;

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

/// Blocking I2C bus the shield hangs off.
///
/// Blocking on purpose: the whole game is one synchronous tick, and
/// HD44780 writes are a handful of bytes each.
pub type ShieldBus = I2c<'static, I2C0, i2c::Blocking>;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Rockfall firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Shield on I2C0: SDA=GP4, SCL=GP5
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = 400_000;
    let bus: ShieldBus = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config);

    let mut shield = LcdShield::new(bus);
    match shield.init() {
        Ok(()) => info!("LCD shield initialized, glyphs loaded"),
        Err(e) => error!("LCD shield init failed: {:?}", e),
    }

    // Seed the spawn PRNG from analog noise on a floating pin.
    let mut adc = Adc::new(p.ADC, Irqs, AdcConfig::default());
    let mut noise = Channel::new_pin(p.PIN_26, Pull::None);
    let seed = read_seed(&mut adc, &mut noise).await;
    info!("Spawn seed: {:08x}", seed);

    spawner.spawn(tasks::game_task(shield, seed)).unwrap();
    info!("Game task spawned, firmware running");

    // Main task has nothing else to do - the game loop owns the shield.
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

/// Fold a burst of ADC noise reads into a 32-bit seed.
async fn read_seed(adc: &mut Adc<'_, embassy_rp::adc::Async>, noise: &mut Channel<'_>) -> u32 {
    let mut seed = 0u32;
    for _ in 0..16 {
        let sample = adc.read(noise).await.unwrap_or(0);
        seed = seed.rotate_left(5) ^ sample as u32;
    }
    seed
}
