//! embedded-graphics renderer for the checkers firmware
//!
//! Implements the core [`Renderer`](checkers_core::traits::Renderer)
//! contract on top of any RGB565 `DrawTarget`, so the same drawing code
//! runs against the TFT driver on hardware and against `MockDisplay` in
//! host tests.
//!
//! # Architecture
//!
//! ```text
//! checkers-core (painter) --> Renderer --> GraphicsRenderer<D> --> D: DrawTarget
//!                                               |
//!                                            palette (Color -> Rgb565)
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod graphics;
pub mod palette;

pub use graphics::GraphicsRenderer;
pub use palette::{raw_color, rgb565};
