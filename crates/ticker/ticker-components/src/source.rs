//! Lazy label production for ticker items.

use ticker_core::item::ContentSource;

use crate::icon::Icon;
use crate::label::{Label, TextSize};
use embedded_graphics::pixelcolor::Gray4;

/// Everything needed to build a [`Label`] once the item is admitted.
///
/// The label itself is only built at admission time. Empty text yields no
/// content, so the ticker drops the item instead of scrolling a blank.
///
/// ```
/// use ticker_components::prelude::*;
/// use ticker_core::item::{ContentSource, Item};
///
/// let source = LabelSource::new("breaking").size(TextSize::Small);
/// let label = source.produce().unwrap();
/// assert_eq!(label.text(), "breaking");
///
/// assert!(LabelSource::new("").produce().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSource {
    label: Label,
}

impl LabelSource {
    /// Source for a label with the default style.
    pub fn new(text: &str) -> Self {
        Self {
            label: Label::new(text),
        }
    }

    /// Set the text size.
    pub fn size(mut self, size: TextSize) -> Self {
        self.label = self.label.size(size);
        self
    }

    /// Set the text color.
    pub fn color(mut self, color: Gray4) -> Self {
        self.label = self.label.color(color);
        self
    }

    /// Follow the text with `icon`.
    pub fn trailing_icon(mut self, icon: Icon) -> Self {
        self.label = self.label.trailing_icon(icon);
        self
    }
}

impl ContentSource for LabelSource {
    type Content = Label;

    fn produce(self) -> Option<Label> {
        if self.label.text().is_empty() {
            None
        } else {
            Some(self.label)
        }
    }
}
