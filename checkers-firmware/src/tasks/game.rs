//! Game task
//!
//! Runs one controller step per tick: reads the buttons, maps them to
//! input, and lets the game redraw what changed.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Spi};

use checkers_core::input::InputMapper;
use checkers_core::traits::ButtonSource;
use checkers_core::{Game, GameConfig, Transition};
use checkers_display::GraphicsRenderer;

use crate::buttons::Buttons;
use crate::ili9341::Ili9341;
use crate::tasks::tick::TICK_SIGNAL;

/// The TFT as wired on the board
pub type Display =
    Ili9341<Spi<'static, SPI0, Blocking>, Output<'static>, Output<'static>, Output<'static>>;

/// Game task - main game loop
#[embassy_executor::task]
pub async fn game_task(display: Display, mut buttons: Buttons, config: GameConfig) {
    info!("Game task started");

    let mut renderer = GraphicsRenderer::new(display);
    let mut mapper = InputMapper::new(config.settle_ms);

    let start_ms = TICK_SIGNAL.wait().await;
    let mut game = Game::new(&config, start_ms);
    if let Err(e) = game.start(start_ms, &mut renderer) {
        warn!("Initial draw failed: {:?}", e);
    }
    info!(
        "Game started: {}s on the clock, {:?} to move",
        config.time_limit_s,
        game.turn()
    );

    loop {
        let now_ms = TICK_SIGNAL.wait().await;
        let frame = mapper.poll(buttons.read(), now_ms);

        match game.step(now_ms, frame, &mut renderer) {
            Ok(transitions) => {
                for transition in transitions {
                    match transition {
                        Transition::GameOver(outcome) => {
                            info!("Game over: {:?}, scores {:?}", outcome, game.scores());
                        }
                        Transition::Rejected => trace!("Input rejected"),
                        other => debug!("{:?}", other),
                    }
                }
            }
            Err(e) => warn!("Render error: {:?}", e),
        }
    }
}
