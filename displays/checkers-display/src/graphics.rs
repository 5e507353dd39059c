//! Renderer over an embedded-graphics draw target

use checkers_core::traits::{Color, RenderError, Renderer};
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Circle, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment,
};
use embedded_graphics::text::{Baseline, Text};

use crate::palette::rgb565;

/// Font for a text size
///
/// Size 1 is the small 6x10 font; any larger size uses 10x20.
fn font(size: u8) -> &'static MonoFont<'static> {
    match size {
        1 => &FONT_6X10,
        _ => &FONT_10X20,
    }
}

/// Renderer that draws onto an RGB565 target
pub struct GraphicsRenderer<D> {
    target: D,
}

impl<D> GraphicsRenderer<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: D) -> Self {
        Self { target }
    }

    /// Borrow the underlying target
    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    /// Give back the underlying target
    pub fn into_inner(self) -> D {
        self.target
    }

    /// Reject areas that extend past the target
    fn check_area(&self, x: u32, y: u32, w: u32, h: u32) -> Result<(), RenderError> {
        let bounds = self.target.bounding_box();
        let origin = bounds.top_left;
        let (x, y) = (x as i32 - origin.x, y as i32 - origin.y);
        if x < 0
            || y < 0
            || x as u32 + w > bounds.size.width
            || y as u32 + h > bounds.size.height
        {
            return Err(RenderError::OutOfBounds);
        }
        Ok(())
    }
}

impl<D> Renderer for GraphicsRenderer<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn clear_screen(&mut self, color: Color) -> Result<(), RenderError> {
        self.target
            .clear(rgb565(color))
            .map_err(|_| RenderError::Communication)
    }

    fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        color: Color,
    ) -> Result<(), RenderError> {
        self.check_area(x.into(), y.into(), w.into(), h.into())?;
        Rectangle::new(Point::new(x.into(), y.into()), Size::new(w.into(), h.into()))
            .into_styled(PrimitiveStyle::with_fill(rgb565(color)))
            .draw(&mut self.target)
            .map_err(|_| RenderError::Communication)
    }

    fn draw_rect(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        color: Color,
    ) -> Result<(), RenderError> {
        self.check_area(x.into(), y.into(), w.into(), h.into())?;
        let style = PrimitiveStyleBuilder::new()
            .stroke_color(rgb565(color))
            .stroke_width(1)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();
        Rectangle::new(Point::new(x.into(), y.into()), Size::new(w.into(), h.into()))
            .into_styled(style)
            .draw(&mut self.target)
            .map_err(|_| RenderError::Communication)
    }

    fn fill_circle(
        &mut self,
        cx: u16,
        cy: u16,
        radius: u16,
        color: Color,
    ) -> Result<(), RenderError> {
        let (cx, cy, radius) = (u32::from(cx), u32::from(cy), u32::from(radius));
        if cx < radius || cy < radius {
            return Err(RenderError::OutOfBounds);
        }
        let diameter = 2 * radius + 1;
        self.check_area(cx - radius, cy - radius, diameter, diameter)?;

        Circle::with_center(Point::new(cx as i32, cy as i32), diameter)
            .into_styled(PrimitiveStyle::with_fill(rgb565(color)))
            .draw(&mut self.target)
            .map_err(|_| RenderError::Communication)
    }

    fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        color: Color,
        size: u8,
    ) -> Result<(), RenderError> {
        let font = font(size);
        let width = text.len() as u32 * font.character_size.width;
        self.check_area(x.into(), y.into(), width, font.character_size.height)?;

        let style = MonoTextStyle::new(font, rgb565(color));
        Text::with_baseline(text, Point::new(x.into(), y.into()), style, Baseline::Top)
            .draw(&mut self.target)
            .map(|_| ())
            .map_err(|_| RenderError::Communication)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    fn renderer() -> GraphicsRenderer<MockDisplay<Rgb565>> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        GraphicsRenderer::new(display)
    }

    fn pixel(r: &GraphicsRenderer<MockDisplay<Rgb565>>, x: i32, y: i32) -> Option<Rgb565> {
        r.target().get_pixel(Point::new(x, y))
    }

    /// Target that fails every draw
    struct Unplugged;

    impl OriginDimensions for Unplugged {
        fn size(&self) -> Size {
            Size::new(240, 320)
        }
    }

    impl DrawTarget for Unplugged {
        type Color = Rgb565;
        type Error = ();

        fn draw_iter<I>(&mut self, _pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            Err(())
        }
    }

    #[test]
    fn test_fill_rect_area() {
        let mut r = renderer();
        r.fill_rect(2, 3, 4, 2, Color::Player1).unwrap();
        assert_eq!(
            r.target().affected_area(),
            Rectangle::new(Point::new(2, 3), Size::new(4, 2))
        );
        assert_eq!(pixel(&r, 5, 4), Some(Rgb565::RED));
        assert_eq!(pixel(&r, 6, 4), None);
    }

    #[test]
    fn test_draw_rect_is_hollow() {
        let mut r = renderer();
        r.draw_rect(1, 1, 5, 5, Color::Cursor).unwrap();
        assert_eq!(pixel(&r, 1, 1), Some(Rgb565::YELLOW));
        assert_eq!(pixel(&r, 5, 5), Some(Rgb565::YELLOW));
        assert_eq!(pixel(&r, 3, 3), None);
        assert_eq!(pixel(&r, 6, 6), None);
    }

    #[test]
    fn test_fill_circle() {
        let mut r = renderer();
        r.fill_circle(10, 10, 3, Color::Player2).unwrap();
        assert_eq!(pixel(&r, 10, 10), Some(Rgb565::BLUE));
        assert_eq!(pixel(&r, 10, 12), Some(Rgb565::BLUE));
        assert_eq!(pixel(&r, 7, 7), None);
        assert_eq!(pixel(&r, 15, 10), None);
    }

    #[test]
    fn test_text_stays_in_cell() {
        let mut r = renderer();
        r.draw_text(0, 0, "X", Color::Text, 1).unwrap();
        let area = r.target().affected_area();
        assert!(area.size.width > 0 && area.size.width <= 6);
        assert!(area.size.height > 0 && area.size.height <= 10);
    }

    #[test]
    fn test_clear_screen() {
        let mut r = renderer();
        r.clear_screen(Color::Background).unwrap();
        assert_eq!(pixel(&r, 0, 0), Some(Rgb565::BLACK));
        assert_eq!(pixel(&r, 63, 63), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut r = renderer();
        assert_eq!(
            r.fill_rect(60, 60, 10, 10, Color::Player1),
            Err(RenderError::OutOfBounds)
        );
        assert_eq!(
            r.fill_circle(2, 2, 5, Color::Player1),
            Err(RenderError::OutOfBounds)
        );
        assert_eq!(
            r.draw_text(50, 0, "GAME OVER", Color::Text, 2),
            Err(RenderError::OutOfBounds)
        );
        assert_eq!(r.target().affected_area().size, Size::zero());
    }

    #[test]
    fn test_target_errors_map_to_communication() {
        let mut r = GraphicsRenderer::new(Unplugged);
        assert_eq!(
            r.fill_rect(0, 0, 10, 10, Color::BoardDark),
            Err(RenderError::Communication)
        );
        assert_eq!(
            r.clear_screen(Color::Background),
            Err(RenderError::Communication)
        );
    }

    #[test]
    fn test_board_square_on_screen_sized_target() {
        let mut r = renderer();
        checkers_core::render::draw_square(
            &mut r,
            &checkers_core::Board::initial_layout(),
            checkers_core::Position::new(0, 1),
            checkers_core::Position::new(7, 7),
            None,
        )
        .unwrap();
        assert_eq!(pixel(&r, 30, 0), Some(Rgb565::new(16, 32, 16)));
        assert_eq!(pixel(&r, 45, 15), Some(Rgb565::RED));
    }
}
