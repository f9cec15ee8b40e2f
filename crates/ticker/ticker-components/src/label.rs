//! Label component for displaying text with an optional trailing icon

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_10X20, FONT_6X10, FONT_8X13},
        MonoFont, MonoTextStyle,
    },
    pixelcolor::Gray4,
    prelude::*,
    text::{Baseline, Text},
};
use heapless::String;
use ticker_core::layout::{Constraints, Layout, LayoutResult};
use ticker_core::render::Renderable;

use crate::icon::Icon;

/// Longest label text in bytes. Longer text is truncated.
pub const LABEL_CAPACITY: usize = 48;

/// Horizontal space between the text and a trailing icon.
pub const ICON_GAP: u32 = 4;

/// Text size variants
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextSize {
    /// 6x10 font
    Small,
    /// 8x13 font
    Medium,
    /// 10x20 font
    Normal,
}

impl TextSize {
    /// Closest size for a requested line height in pixels.
    pub fn from_px(px: u32) -> Self {
        match px {
            0..=11 => Self::Small,
            12..=16 => Self::Medium,
            _ => Self::Normal,
        }
    }

    /// Line height in pixels.
    pub fn line_height(&self) -> u32 {
        match self {
            TextSize::Small => 10,
            TextSize::Medium => 13,
            TextSize::Normal => 20,
        }
    }

    /// Advance per character in pixels.
    pub fn char_width(&self) -> u32 {
        match self {
            TextSize::Small => 6,
            TextSize::Medium => 8,
            TextSize::Normal => 10,
        }
    }

    fn font(&self) -> &'static MonoFont<'static> {
        match self {
            TextSize::Small => &FONT_6X10,
            TextSize::Medium => &FONT_8X13,
            TextSize::Normal => &FONT_10X20,
        }
    }
}

/// Single line of text, optionally followed by an icon.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    text: String<LABEL_CAPACITY>,
    color: Gray4,
    size: TextSize,
    icon: Option<Icon>,
}

impl Label {
    /// Create a new label with the given text.
    ///
    /// Text beyond [`LABEL_CAPACITY`] bytes is dropped at a character
    /// boundary.
    pub fn new(text: &str) -> Self {
        Self {
            text: truncated(text),
            color: Gray4::BLACK,
            size: TextSize::Normal,
            icon: None,
        }
    }

    /// Set text color
    pub fn color(mut self, color: Gray4) -> Self {
        self.color = color;
        self
    }

    /// Set text size
    pub fn size(mut self, size: TextSize) -> Self {
        self.size = size;
        self
    }

    /// Draw `icon` after the text.
    pub fn trailing_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// The label text.
    pub fn text(&self) -> &str {
        &self.text
    }

    fn text_width(&self) -> u32 {
        let chars = u32::try_from(self.text.chars().count()).unwrap_or(u32::MAX);
        chars.saturating_mul(self.size.char_width())
    }

    /// Natural size: text run plus gap and icon, as tall as the taller part.
    pub fn dimensions(&self) -> Size {
        let text = Size::new(self.text_width(), self.size.line_height());
        match self.icon {
            Some(icon) => {
                let icon = icon.dimensions();
                Size::new(
                    text.width
                        .saturating_add(ICON_GAP)
                        .saturating_add(icon.width),
                    text.height.max(icon.height),
                )
            }
            None => text,
        }
    }
}

impl Layout for Label {
    fn layout(&self, constraints: Constraints) -> LayoutResult {
        LayoutResult::leaf(constraints.constrain(self.dimensions()))
    }
}

impl Renderable for Label {
    fn render<D: DrawTarget<Color = Gray4>>(
        &self,
        display: &mut D,
        offset: Point,
    ) -> Result<(), D::Error> {
        let height = self.dimensions().height;
        let text_top = centred(height, self.size.line_height());
        let style = MonoTextStyle::new(self.size.font(), self.color);
        Text::with_baseline(
            &self.text,
            offset + Point::new(0, text_top),
            style,
            Baseline::Top,
        )
        .draw(display)?;

        if let Some(icon) = self.icon {
            let left = self.text_width().saturating_add(ICON_GAP);
            let top = centred(height, icon.dimensions().height);
            icon.render(
                display,
                offset + Point::new(i32::try_from(left).unwrap_or(i32::MAX), top),
            )?;
        }
        Ok(())
    }
}

/// Top offset that centres `inner` inside `outer`.
fn centred(outer: u32, inner: u32) -> i32 {
    i32::try_from(outer.saturating_sub(inner) / 2).unwrap_or(0)
}

fn truncated(text: &str) -> String<LABEL_CAPACITY> {
    let mut out = String::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// Helper for creating labels with different styles
pub struct LabelBuilder;

impl LabelBuilder {
    /// Create a headline label (largest)
    pub fn headline(text: &str) -> Label {
        Label::new(text).color(Gray4::BLACK).size(TextSize::Normal)
    }

    /// Create a caption label (small, light)
    pub fn caption(text: &str) -> Label {
        Label::new(text)
            .color(Gray4::new(0x8))
            .size(TextSize::Small)
    }
}
