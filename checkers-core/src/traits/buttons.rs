//! Button source trait

/// Snapshot of the five buttons, `true` meaning pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub select: bool,
}

impl ButtonState {
    /// Check if no button is pressed
    pub fn is_idle(&self) -> bool {
        !(self.up || self.down || self.left || self.right || self.select)
    }
}

/// Something that can be polled for the current button state
pub trait ButtonSource {
    /// Read all buttons at once
    fn read(&mut self) -> ButtonState;
}
