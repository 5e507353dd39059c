//! Input mapping
//!
//! Turns raw button snapshots into at most one cursor direction and one
//! select action per polling tick.

pub mod buttons;
pub mod debounce;

pub use buttons::GpioButtons;
pub use debounce::Debouncer;

use crate::traits::ButtonState;

/// Cursor movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Toward row 0
    Up,
    /// Toward row 7
    Down,
    /// Toward column 0
    Left,
    /// Toward column 7
    Right,
}

impl Direction {
    /// (row, col) delta of one cursor step
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Input accepted during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputFrame {
    pub direction: Option<Direction>,
    pub select: bool,
}

impl InputFrame {
    pub fn is_empty(&self) -> bool {
        self.direction.is_none() && !self.select
    }
}

/// Maps button snapshots to debounced input frames
#[derive(Debug, Clone)]
pub struct InputMapper {
    direction: Debouncer,
    select: Debouncer,
}

impl InputMapper {
    /// Create a mapper; both button groups share one settle interval
    pub const fn new(settle_ms: u32) -> Self {
        Self {
            direction: Debouncer::new(settle_ms),
            select: Debouncer::new(settle_ms),
        }
    }

    /// Process one snapshot taken at `now_ms`
    ///
    /// Only one direction is honored per tick, checked in the order
    /// up, down, left, right. Select is independent of direction.
    pub fn poll(&mut self, buttons: ButtonState, now_ms: u32) -> InputFrame {
        let pressed = if buttons.up {
            Some(Direction::Up)
        } else if buttons.down {
            Some(Direction::Down)
        } else if buttons.left {
            Some(Direction::Left)
        } else if buttons.right {
            Some(Direction::Right)
        } else {
            None
        };

        let direction = pressed.filter(|_| self.direction.accept(now_ms));
        let select = buttons.select && self.select.accept(now_ms);

        InputFrame { direction, select }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(f: impl FnOnce(&mut ButtonState)) -> ButtonState {
        let mut state = ButtonState::default();
        f(&mut state);
        state
    }

    #[test]
    fn test_idle_produces_nothing() {
        let mut mapper = InputMapper::new(200);
        assert!(mapper.poll(ButtonState::default(), 0).is_empty());
    }

    #[test]
    fn test_direction_priority() {
        let mut mapper = InputMapper::new(0);
        let all = press(|s| {
            s.up = true;
            s.down = true;
            s.left = true;
            s.right = true;
        });
        assert_eq!(mapper.poll(all, 0).direction, Some(Direction::Up));

        let no_up = press(|s| {
            s.down = true;
            s.left = true;
        });
        assert_eq!(mapper.poll(no_up, 1).direction, Some(Direction::Down));

        let sideways = press(|s| {
            s.left = true;
            s.right = true;
        });
        assert_eq!(mapper.poll(sideways, 2).direction, Some(Direction::Left));

        let right = press(|s| s.right = true);
        assert_eq!(mapper.poll(right, 3).direction, Some(Direction::Right));
    }

    #[test]
    fn test_select_independent_of_direction() {
        let mut mapper = InputMapper::new(200);
        let both = press(|s| {
            s.left = true;
            s.select = true;
        });
        let frame = mapper.poll(both, 0);
        assert_eq!(frame.direction, Some(Direction::Left));
        assert!(frame.select);
    }

    #[test]
    fn test_held_button_repeats_after_settle() {
        let mut mapper = InputMapper::new(200);
        let down = press(|s| s.down = true);

        assert_eq!(mapper.poll(down, 0).direction, Some(Direction::Down));
        assert_eq!(mapper.poll(down, 20).direction, None);
        assert_eq!(mapper.poll(down, 180).direction, None);
        assert_eq!(mapper.poll(down, 200).direction, Some(Direction::Down));
    }

    #[test]
    fn test_direction_does_not_block_select() {
        let mut mapper = InputMapper::new(200);
        mapper.poll(press(|s| s.up = true), 0);
        let frame = mapper.poll(press(|s| s.select = true), 10);
        assert!(frame.select);
    }

    #[test]
    fn test_direction_deltas() {
        assert_eq!(Direction::Up.delta(), (-1, 0));
        assert_eq!(Direction::Down.delta(), (1, 0));
        assert_eq!(Direction::Left.delta(), (0, -1));
        assert_eq!(Direction::Right.delta(), (0, 1));
    }
}
