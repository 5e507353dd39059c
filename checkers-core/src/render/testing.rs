//! Recording renderer shared by the unit tests

use heapless::{String, Vec};

use crate::traits::{Color, RenderError, Renderer};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Clear(Color),
    Fill(u16, u16, u16, u16, Color),
    Rect(u16, u16, u16, u16, Color),
    Circle(u16, u16, u16, Color),
    Text(u16, u16, String<24>, Color, u8),
}

/// Remembers every primitive it is asked to draw
#[derive(Default)]
pub struct Recorder {
    pub calls: Vec<Call, 1024>,
}

impl Recorder {
    pub fn reset(&mut self) {
        self.calls.clear();
    }

    /// Number of background fills of board squares
    pub fn squares_drawn(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Fill(_, _, 30, 30, _)))
            .count()
    }

    pub fn has_text(&self, wanted: &str) -> bool {
        self.calls
            .iter()
            .any(|c| matches!(c, Call::Text(_, _, t, _, _) if t.as_str() == wanted))
    }
}

impl Renderer for Recorder {
    fn clear_screen(&mut self, color: Color) -> Result<(), RenderError> {
        let _ = self.calls.push(Call::Clear(color));
        Ok(())
    }

    fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        color: Color,
    ) -> Result<(), RenderError> {
        let _ = self.calls.push(Call::Fill(x, y, w, h, color));
        Ok(())
    }

    fn draw_rect(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        color: Color,
    ) -> Result<(), RenderError> {
        let _ = self.calls.push(Call::Rect(x, y, w, h, color));
        Ok(())
    }

    fn fill_circle(
        &mut self,
        cx: u16,
        cy: u16,
        radius: u16,
        color: Color,
    ) -> Result<(), RenderError> {
        let _ = self.calls.push(Call::Circle(cx, cy, radius, color));
        Ok(())
    }

    fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        color: Color,
        size: u8,
    ) -> Result<(), RenderError> {
        let _ = self.calls.push(Call::Text(x, y, self::text(text), color, size));
        Ok(())
    }
}

/// Fails every call
pub struct Broken;

impl Renderer for Broken {
    fn clear_screen(&mut self, _: Color) -> Result<(), RenderError> {
        Err(RenderError::Communication)
    }

    fn fill_rect(&mut self, _: u16, _: u16, _: u16, _: u16, _: Color) -> Result<(), RenderError> {
        Err(RenderError::Communication)
    }

    fn draw_rect(&mut self, _: u16, _: u16, _: u16, _: u16, _: Color) -> Result<(), RenderError> {
        Err(RenderError::Communication)
    }

    fn fill_circle(&mut self, _: u16, _: u16, _: u16, _: Color) -> Result<(), RenderError> {
        Err(RenderError::Communication)
    }

    fn draw_text(&mut self, _: u16, _: u16, _: &str, _: Color, _: u8) -> Result<(), RenderError> {
        Err(RenderError::Communication)
    }
}

pub fn text(s: &str) -> String<24> {
    let mut out = String::new();
    let _ = out.push_str(s);
    out
}

/// Fails the first `failures` calls, then records like [`Recorder`]
#[derive(Default)]
pub struct Flaky {
    pub inner: Recorder,
    pub failures: u32,
}

impl Flaky {
    pub fn failing(failures: u32) -> Self {
        Self {
            inner: Recorder::default(),
            failures,
        }
    }

    fn check(&mut self) -> Result<(), RenderError> {
        if self.failures > 0 {
            self.failures -= 1;
            return Err(RenderError::Communication);
        }
        Ok(())
    }
}

impl Renderer for Flaky {
    fn clear_screen(&mut self, color: Color) -> Result<(), RenderError> {
        self.check()?;
        self.inner.clear_screen(color)
    }

    fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        color: Color,
    ) -> Result<(), RenderError> {
        self.check()?;
        self.inner.fill_rect(x, y, w, h, color)
    }

    fn draw_rect(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        color: Color,
    ) -> Result<(), RenderError> {
        self.check()?;
        self.inner.draw_rect(x, y, w, h, color)
    }

    fn fill_circle(
        &mut self,
        cx: u16,
        cy: u16,
        radius: u16,
        color: Color,
    ) -> Result<(), RenderError> {
        self.check()?;
        self.inner.fill_circle(cx, cy, radius, color)
    }

    fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        color: Color,
        size: u8,
    ) -> Result<(), RenderError> {
        self.check()?;
        self.inner.draw_text(x, y, text, color, size)
    }
}
