//! Simple icon component

use embedded_graphics::{
    pixelcolor::Gray4,
    prelude::*,
    primitives::{Circle, PrimitiveStyle, Rectangle, Triangle},
};
use ticker_core::layout::{Constraints, Layout, LayoutResult};
use ticker_core::render::Renderable;

/// Icon shapes
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IconType {
    /// Filled circle
    Bullet,
    /// Outlined circle
    Ring,
    /// Filled square
    Square,
    /// Triangle pointing right
    Arrow,
}

impl IconType {
    /// Every shape, in declaration order.
    pub const ALL: [Self; 4] = [Self::Bullet, Self::Ring, Self::Square, Self::Arrow];
}

/// Square glyph drawn with embedded-graphics primitives.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Icon {
    icon_type: IconType,
    size: u32,
    color: Gray4,
}

impl Icon {
    /// Create a new icon
    pub fn new(icon_type: IconType, size: u32) -> Self {
        Self {
            icon_type,
            size,
            color: Gray4::BLACK,
        }
    }

    /// Set icon color
    pub fn color(mut self, color: Gray4) -> Self {
        self.color = color;
        self
    }

    /// Shape of this icon.
    pub fn icon_type(&self) -> IconType {
        self.icon_type
    }

    /// Get icon dimensions
    pub fn dimensions(&self) -> Size {
        Size::new(self.size, self.size)
    }

    fn extent(&self) -> i32 {
        i32::try_from(self.size).unwrap_or(i32::MAX)
    }

    fn render_arrow<D>(&self, display: &mut D, position: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        let last = self.extent().saturating_sub(1);
        let p1 = position;
        let p2 = position + Point::new(0, last);
        let p3 = position + Point::new(last, last / 2);

        Triangle::new(p1, p2, p3)
            .into_styled(PrimitiveStyle::with_fill(self.color))
            .draw(display)
    }
}

impl Layout for Icon {
    fn layout(&self, constraints: Constraints) -> LayoutResult {
        LayoutResult::leaf(constraints.constrain(self.dimensions()))
    }
}

impl Renderable for Icon {
    fn render<D: DrawTarget<Color = Gray4>>(
        &self,
        display: &mut D,
        offset: Point,
    ) -> Result<(), D::Error> {
        match self.icon_type {
            IconType::Bullet => Circle::new(offset, self.size)
                .into_styled(PrimitiveStyle::with_fill(self.color))
                .draw(display),
            IconType::Ring => Circle::new(offset, self.size)
                .into_styled(PrimitiveStyle::with_stroke(self.color, 1))
                .draw(display),
            IconType::Square => Rectangle::new(offset, self.dimensions())
                .into_styled(PrimitiveStyle::with_fill(self.color))
                .draw(display),
            IconType::Arrow => self.render_arrow(display, offset),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    #[test]
    fn test_icon_creation() {
        let icon = Icon::new(IconType::Arrow, 24);
        assert_eq!(icon.icon_type(), IconType::Arrow);
        assert_eq!(icon.dimensions(), Size::new(24, 24));
    }

    #[test]
    fn test_icon_color() {
        let icon = Icon::new(IconType::Bullet, 24).color(Gray4::new(0x8));
        assert_eq!(icon.color, Gray4::new(0x8));
    }

    #[test]
    fn test_icon_layout_is_constrained() {
        let icon = Icon::new(IconType::Square, 16);
        let result = icon.layout(Constraints::loose(Size::new(100, 10)));
        assert_eq!(result.size, Size::new(16, 10));
    }

    #[test]
    fn test_every_shape_stays_inside_its_box() {
        for icon_type in IconType::ALL {
            let mut display = MockDisplay::new();
            Icon::new(icon_type, 8)
                .render(&mut display, Point::new(3, 5))
                .unwrap();

            let area = display.affected_area();
            assert!(!area.is_zero_sized(), "{icon_type:?} drew nothing");
            let bounds = Rectangle::new(Point::new(3, 5), Size::new(8, 8));
            assert_eq!(area.intersection(&bounds), area, "{icon_type:?} overflowed");
        }
    }
}
