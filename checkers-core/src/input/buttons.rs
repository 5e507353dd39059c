//! GPIO button source

use checkers_hal::InputPin;

use crate::traits::{ButtonSource, ButtonState};

/// Five active-low buttons on GPIO pins
pub struct GpioButtons<P> {
    up: P,
    down: P,
    left: P,
    right: P,
    select: P,
}

impl<P: InputPin> GpioButtons<P> {
    /// Create a button source from the five pins
    pub fn new(up: P, down: P, left: P, right: P, select: P) -> Self {
        Self {
            up,
            down,
            left,
            right,
            select,
        }
    }
}

impl<P: InputPin> ButtonSource for GpioButtons<P> {
    fn read(&mut self) -> ButtonState {
        // Pull-ups hold the lines high; a press pulls them low
        ButtonState {
            up: self.up.is_low(),
            down: self.down.is_low(),
            left: self.left.is_low(),
            right: self.right.is_low(),
            select: self.select.is_low(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct TestPin<'a>(&'a Cell<bool>);

    impl InputPin for TestPin<'_> {
        fn is_high(&self) -> bool {
            self.0.get()
        }
    }

    #[test]
    fn test_active_low_mapping() {
        let lines = [
            Cell::new(true),
            Cell::new(true),
            Cell::new(true),
            Cell::new(true),
            Cell::new(true),
        ];
        let mut buttons = GpioButtons::new(
            TestPin(&lines[0]),
            TestPin(&lines[1]),
            TestPin(&lines[2]),
            TestPin(&lines[3]),
            TestPin(&lines[4]),
        );

        assert!(buttons.read().is_idle());

        lines[1].set(false);
        lines[4].set(false);
        let state = buttons.read();
        assert!(state.down);
        assert!(state.select);
        assert!(!state.up && !state.left && !state.right);
    }
}
