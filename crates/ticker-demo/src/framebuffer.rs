//! In-memory Gray4 framebuffer the demo draws the ticker into.

use std::path::Path;

use anyhow::{Context, Result};
use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use image::{GrayImage, Luma};

/// CPU framebuffer, row-major, one `Gray4` per pixel.
pub struct Framebuffer {
    pixels: Vec<Gray4>,
    width: u32,
    height: u32,
}

impl Framebuffer {
    /// Create a framebuffer filled with white.
    // SAFETY: width * height is a pixel count bounded by CLI-sized displays,
    // so it fits in usize on 32-bit+ hosts.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn new(width: u32, height: u32) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            pixels: vec![Gray4::WHITE; len],
            width,
            height,
        }
    }

    /// Set pixel at coordinates; out-of-range writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Gray4) {
        if let Some(index) = self.index(x, y) {
            if let Some(pixel) = self.pixels.get_mut(index) {
                *pixel = color;
            }
        }
    }

    /// Get pixel at coordinates.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Gray4> {
        self.index(x, y)
            .and_then(|index| self.pixels.get(index))
            .copied()
    }

    /// Number of pixels that are not white.
    pub fn inked_pixels(&self) -> usize {
        self.pixels
            .iter()
            .filter(|pixel| **pixel != Gray4::WHITE)
            .count()
    }

    /// Convert to an 8-bit grayscale image.
    pub fn to_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width, self.height, |x, y| {
            let luma = self.get_pixel(x, y).map_or(u8::MAX, |pixel| pixel.luma());
            // 0-15 → 0-255
            Luma([luma.saturating_mul(17)])
        })
    }

    /// Save as PNG.
    pub fn screenshot(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.to_image()
            .save(path)
            .with_context(|| format!("failed to write screenshot to {}", path.display()))
    }

    // SAFETY: x < width and y < height are checked first, so
    // y * width + x < width * height, which fits in usize.
    #[allow(clippy::arithmetic_side_effects)]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| (y as usize) * (self.width as usize) + (x as usize))
    }
}

impl DrawTarget for Framebuffer {
    type Color = Gray4;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}
