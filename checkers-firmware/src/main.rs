//! Checkers - two-player draughts firmware
//!
//! Firmware binary for RP2040 boards with an ILI9341 240x320 TFT on SPI0
//! and five push buttons. All game rules live in checkers-core; this
//! crate wires them to the hardware.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::spi::{self, Spi};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use checkers_core::input::GpioButtons;

use crate::buttons::ButtonPin;
use crate::ili9341::Ili9341;

mod buttons;
mod config;
mod ili9341;
mod tasks;

/// SPI clock for the TFT
const DISPLAY_SPI_HZ: u32 = 32_000_000;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Checkers firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load();
    info!(
        "Configuration loaded: {}s per game, settle {}ms",
        config.time_limit_s, config.settle_ms
    );

    // Setup SPI0 for the TFT
    // Pin assignments are board-specific (SCK=GPIO18, MOSI=GPIO19, CS=GPIO17, DC=GPIO16, RST=GPIO20)
    let mut spi_config = spi::Config::default();
    spi_config.frequency = DISPLAY_SPI_HZ;
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);

    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    let rst = Output::new(p.PIN_20, Level::High);

    let mut display = Ili9341::new(spi, dc, cs, rst);
    match display.init(&mut Delay) {
        Ok(()) => info!("Display initialized"),
        Err(e) => error!("Display init failed: {:?}", e),
    }

    // Setup buttons (up=GPIO2, down=GPIO3, left=GPIO4, right=GPIO5, select=GPIO6)
    let buttons = GpioButtons::new(
        ButtonPin::new(p.PIN_2),
        ButtonPin::new(p.PIN_3),
        ButtonPin::new(p.PIN_4),
        ButtonPin::new(p.PIN_5),
        ButtonPin::new(p.PIN_6),
    );
    info!("Buttons initialized");

    spawner.spawn(tasks::tick_task()).unwrap();
    spawner
        .spawn(tasks::game_task(display, buttons, config))
        .unwrap();

    info!("All tasks spawned");
}
