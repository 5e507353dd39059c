//! ILI9341 TFT display driver
//!
//! Driver for 240x320 ILI9341-based displays over a write-only SPI bus,
//! in RGB565 portrait mode. Pixels go straight to display RAM; there is
//! no frame buffer.

use embedded_graphics::pixelcolor::raw::{RawData, RawU16};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

/// Display dimensions (portrait)
const WIDTH: u16 = 240;
const HEIGHT: u16 = 320;

/// Pixels sent per SPI write when streaming a solid fill
const CHUNK_PIXELS: usize = 32;

/// ILI9341 commands
#[allow(dead_code)]
mod cmd {
    pub const SOFT_RESET: u8 = 0x01;
    pub const SLEEP_OUT: u8 = 0x11;
    pub const DISPLAY_OFF: u8 = 0x28;
    pub const DISPLAY_ON: u8 = 0x29;
    pub const COLUMN_ADDR: u8 = 0x2A;
    pub const PAGE_ADDR: u8 = 0x2B;
    pub const MEMORY_WRITE: u8 = 0x2C;
    pub const MEMORY_ACCESS: u8 = 0x36;
    pub const PIXEL_FORMAT: u8 = 0x3A;
}

/// MADCTL: column order flipped, BGR panel
const MADCTL_PORTRAIT: u8 = 0x48;

/// COLMOD: 16 bits per pixel
const PIXEL_FORMAT_16BIT: u8 = 0x55;

/// Display driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ili9341Error {
    /// SPI transfer failed
    Spi,
    /// Control pin could not be driven
    Pin,
}

/// ILI9341 driver
pub struct Ili9341<SPI, DC, CS, RST> {
    spi: SPI,
    dc: DC,
    cs: CS,
    rst: RST,
}

impl<SPI, DC, CS, RST> Ili9341<SPI, DC, CS, RST>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
{
    /// Create a new ILI9341 driver
    pub fn new(spi: SPI, dc: DC, cs: CS, rst: RST) -> Self {
        Self { spi, dc, cs, rst }
    }

    /// Reset and initialize the display
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Ili9341Error> {
        self.cs.set_high().map_err(|_| Ili9341Error::Pin)?;

        // Hardware reset
        self.rst.set_high().map_err(|_| Ili9341Error::Pin)?;
        delay.delay_ms(5);
        self.rst.set_low().map_err(|_| Ili9341Error::Pin)?;
        delay.delay_ms(20);
        self.rst.set_high().map_err(|_| Ili9341Error::Pin)?;
        delay.delay_ms(150);

        self.command(cmd::SOFT_RESET, &[])?;
        delay.delay_ms(150);
        self.command(cmd::SLEEP_OUT, &[])?;
        delay.delay_ms(120);

        self.command(cmd::PIXEL_FORMAT, &[PIXEL_FORMAT_16BIT])?;
        self.command(cmd::MEMORY_ACCESS, &[MADCTL_PORTRAIT])?;
        self.command(cmd::DISPLAY_ON, &[])?;
        delay.delay_ms(20);

        Ok(())
    }

    /// Send a command followed by its parameter bytes
    fn command(&mut self, command: u8, params: &[u8]) -> Result<(), Ili9341Error> {
        self.cs.set_low().map_err(|_| Ili9341Error::Pin)?;
        let result = self.transfer(command, params);
        self.cs.set_high().map_err(|_| Ili9341Error::Pin)?;
        result
    }

    /// Write a command byte then data bytes with chip select already low
    fn transfer(&mut self, command: u8, data: &[u8]) -> Result<(), Ili9341Error> {
        self.dc.set_low().map_err(|_| Ili9341Error::Pin)?;
        self.spi.write(&[command]).map_err(|_| Ili9341Error::Spi)?;
        // DC must not change while the command byte is still shifting out
        self.spi.flush().map_err(|_| Ili9341Error::Spi)?;

        self.dc.set_high().map_err(|_| Ili9341Error::Pin)?;
        if !data.is_empty() {
            self.spi.write(data).map_err(|_| Ili9341Error::Spi)?;
        }
        self.spi.flush().map_err(|_| Ili9341Error::Spi)
    }

    /// Select the inclusive window that following pixel data fills
    fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), Ili9341Error> {
        let [x0h, x0l] = x0.to_be_bytes();
        let [x1h, x1l] = x1.to_be_bytes();
        self.command(cmd::COLUMN_ADDR, &[x0h, x0l, x1h, x1l])?;

        let [y0h, y0l] = y0.to_be_bytes();
        let [y1h, y1l] = y1.to_be_bytes();
        self.command(cmd::PAGE_ADDR, &[y0h, y0l, y1h, y1l])
    }

    /// Fill the current window with `count` pixels of one color
    fn write_repeated(&mut self, raw: u16, count: u32) -> Result<(), Ili9341Error> {
        self.cs.set_low().map_err(|_| Ili9341Error::Pin)?;
        let result = self.stream(raw, count);
        self.cs.set_high().map_err(|_| Ili9341Error::Pin)?;
        result
    }

    /// Stream pixel data with chip select already low
    fn stream(&mut self, raw: u16, count: u32) -> Result<(), Ili9341Error> {
        let [hi, lo] = raw.to_be_bytes();
        let mut chunk = [0u8; CHUNK_PIXELS * 2];
        for pair in chunk.chunks_exact_mut(2) {
            pair[0] = hi;
            pair[1] = lo;
        }

        self.transfer(cmd::MEMORY_WRITE, &[])?;
        let mut left = count as usize;
        while left > 0 {
            let n = left.min(CHUNK_PIXELS);
            self.spi.write(&chunk[..n * 2]).map_err(|_| Ili9341Error::Spi)?;
            left -= n;
        }
        self.spi.flush().map_err(|_| Ili9341Error::Spi)
    }
}

fn raw(color: Rgb565) -> u16 {
    RawU16::from(color).into_inner()
}

impl<SPI, DC, CS, RST> OriginDimensions for Ili9341<SPI, DC, CS, RST> {
    fn size(&self) -> Size {
        Size::new(WIDTH.into(), HEIGHT.into())
    }
}

impl<SPI, DC, CS, RST> DrawTarget for Ili9341<SPI, DC, CS, RST>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
{
    type Color = Rgb565;
    type Error = Ili9341Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(point, color) in pixels {
            if !bounds.contains(point) {
                continue;
            }
            let (x, y) = (point.x as u16, point.y as u16);
            self.set_window(x, y, x, y)?;
            self.write_repeated(raw(color), 1)?;
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };

        self.set_window(
            area.top_left.x as u16,
            area.top_left.y as u16,
            bottom_right.x as u16,
            bottom_right.y as u16,
        )?;
        self.write_repeated(raw(color), area.size.width * area.size.height)
    }
}
