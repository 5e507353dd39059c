//! Game countdown
//!
//! The remaining time is always derived from the current uptime and the
//! start timestamp; nothing counts down on its own.

use core::fmt::Write;

use heapless::String;

/// Countdown from a fixed budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Countdown {
    /// Uptime at game start (ms)
    started_ms: u32,
    /// Total budget in seconds
    budget_s: u32,
}

impl Countdown {
    /// Start a countdown at `now_ms`
    pub const fn start(now_ms: u32, budget_s: u32) -> Self {
        Self {
            started_ms: now_ms,
            budget_s,
        }
    }

    /// Whole seconds since the start
    ///
    /// Uses wrapping arithmetic so a rollover of the millisecond
    /// counter does not end the game early.
    pub fn elapsed_s(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.started_ms) / 1000
    }

    /// Whole seconds left, saturating at zero
    pub fn remaining_s(&self, now_ms: u32) -> u32 {
        self.budget_s.saturating_sub(self.elapsed_s(now_ms))
    }

    /// Check if the budget is used up
    pub fn is_expired(&self, now_ms: u32) -> bool {
        self.remaining_s(now_ms) == 0
    }

    /// Total budget in seconds
    pub fn budget_s(&self) -> u32 {
        self.budget_s
    }
}

/// Format seconds as `MM:SS`
pub fn format_clock(seconds: u32) -> String<8> {
    let mut out = String::new();
    let minutes = (seconds / 60).min(99);
    let _ = write!(out, "{:02}:{:02}", minutes, seconds % 60);
    out
}
