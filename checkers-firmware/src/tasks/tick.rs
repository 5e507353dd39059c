//! Game loop pacing
//!
//! One tick per polling interval. Each tick carries the uptime in
//! milliseconds so the game task never reads the clock itself.

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Instant, Ticker};

/// Polling interval of the buttons and the countdown
pub const TICK_INTERVAL_MS: u64 = 20;

/// Uptime of the most recent tick; a slow consumer only sees the latest
pub static TICK_SIGNAL: Signal<CriticalSectionRawMutex, u32> = Signal::new();

#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started, {}ms interval", TICK_INTERVAL_MS);

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));
    loop {
        ticker.next().await;
        // Truncation wraps after ~49 days; the countdown subtracts with wrapping
        TICK_SIGNAL.signal(Instant::now().as_millis() as u32);
    }
}
