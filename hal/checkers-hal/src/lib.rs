//! Checkers Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that chip-specific code
//! implements. The game core only ever sees these traits, so the same logic
//! runs on the RP2040 board and in host tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  checkers-firmware (RP2040 binary)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  checkers-core (game engine)            │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  checkers-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - Digital input (buttons)

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

pub use gpio::InputPin;
