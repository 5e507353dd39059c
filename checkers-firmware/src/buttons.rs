//! Button inputs
//!
//! The five buttons pull their GPIO to ground when pressed; the internal
//! pull-ups hold them high otherwise.

use checkers_core::input::GpioButtons;
use checkers_hal::InputPin;
use embassy_rp::gpio::{Input, Pin, Pull};
use embassy_rp::Peri;

/// One button GPIO
pub struct ButtonPin(Input<'static>);

impl ButtonPin {
    /// Configure a pin as a pulled-up button input
    pub fn new(pin: Peri<'static, impl Pin>) -> Self {
        Self(Input::new(pin, Pull::Up))
    }
}

impl InputPin for ButtonPin {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

/// The five game buttons
pub type Buttons = GpioButtons<ButtonPin>;
