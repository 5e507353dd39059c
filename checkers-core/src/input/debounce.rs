//! Non-blocking button debounce
//!
//! Instead of sleeping after a press, remember when the last press was
//! accepted and ignore the button until the settle interval has passed.
//! A held button therefore repeats once per interval.

/// Debounce state for one button group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    /// Minimum time between accepted presses (ms)
    settle_ms: u32,
    /// Uptime of the last accepted press
    last_accept_ms: Option<u32>,
}

impl Debouncer {
    /// Create a debouncer with the given settle interval
    pub const fn new(settle_ms: u32) -> Self {
        Self {
            settle_ms,
            last_accept_ms: None,
        }
    }

    /// Check if a press seen at `now_ms` is outside the settle window
    pub fn is_settled(&self, now_ms: u32) -> bool {
        match self.last_accept_ms {
            None => true,
            Some(last) => now_ms.wrapping_sub(last) >= self.settle_ms,
        }
    }

    /// Offer a press at `now_ms`; returns `true` if it is accepted
    pub fn accept(&mut self, now_ms: u32) -> bool {
        if self.is_settled(now_ms) {
            self.last_accept_ms = Some(now_ms);
            true
        } else {
            false
        }
    }
}
