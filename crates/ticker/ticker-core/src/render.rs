//! Rendering glue between layouts and embedded-graphics draw targets.
//!
//! - [`Renderable`]: anything that can draw itself at an offset
//! - [`render_background`]: solid fill helper used by the ticker
//! - [`render_clipped`]: draws a child so that nothing escapes a clip
//!   rectangle (items scroll through the ticker's edges)

use embedded_graphics::{
    draw_target::DrawTargetExt,
    pixelcolor::Gray4,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};

/// Trait for types that can be rendered to a display.
///
/// # Example
///
/// ```
/// use ticker_core::render::Renderable;
/// use embedded_graphics::{mock_display::MockDisplay, pixelcolor::Gray4, prelude::*};
///
/// struct Dot;
///
/// impl Renderable for Dot {
///     fn render<D: DrawTarget<Color = Gray4>>(
///         &self,
///         display: &mut D,
///         offset: Point,
///     ) -> Result<(), D::Error> {
///         Pixel(offset, Gray4::BLACK).draw(display)
///     }
/// }
///
/// let mut display = MockDisplay::new();
/// Dot.render(&mut display, Point::new(3, 4)).unwrap();
/// assert_eq!(display.get_pixel(Point::new(3, 4)), Some(Gray4::BLACK));
/// ```
pub trait Renderable {
    /// Render this element to the display at the given offset.
    fn render<D: DrawTarget<Color = Gray4>>(
        &self,
        display: &mut D,
        offset: Point,
    ) -> Result<(), D::Error>;
}

/// Fill `rect` with a solid grayscale color.
pub fn render_background<D: DrawTarget<Color = Gray4>>(
    rect: Rectangle,
    color: Gray4,
    display: &mut D,
) -> Result<(), D::Error> {
    let style = PrimitiveStyle::with_fill(color);
    rect.into_styled(style).draw(display)?;
    Ok(())
}

/// Render `item` at `offset`, discarding every pixel outside `clip`.
///
/// Returns early without drawing when the item's bounds do not intersect the
/// clip rectangle at all.
pub fn render_clipped<R, D>(
    item: &R,
    bounds: Rectangle,
    clip: &Rectangle,
    display: &mut D,
) -> Result<(), D::Error>
where
    R: Renderable + ?Sized,
    D: DrawTarget<Color = Gray4>,
{
    if bounds.intersection(clip).is_zero_sized() {
        return Ok(());
    }
    let mut clipped = display.clipped(clip);
    item.render(&mut clipped, bounds.top_left)
}
