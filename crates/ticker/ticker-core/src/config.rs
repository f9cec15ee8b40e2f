//! Ticker configuration.
//!
//! Defaults match the classic scrolling-news look: 2 px of travel per
//! layout pass and a 10 px gap between consecutive items.

use crate::error::OutOfRangeError;
use crate::style::Edges;
use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::Size;

/// Horizontal travel per layout pass, in pixels.
///
/// Always at least 1: a zero velocity would freeze the ticker with its
/// leading item never evicted, and a negative one would drift items away
/// from the eviction edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct Velocity(u32);

impl Velocity {
    /// Slowest allowed velocity.
    pub const MIN: u32 = 1;

    /// Fastest allowed velocity. Keeps `leading_offset` arithmetic in `i32`.
    pub const MAX: u32 = 4_096;

    /// Default velocity: 2 px per pass.
    pub const DEFAULT: Self = Self(2);

    /// Create a `Velocity`, returning an error if out of `MIN..=MAX`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] for `0` or anything above [`Velocity::MAX`].
    pub fn new(px_per_pass: u32) -> Result<Self, OutOfRangeError> {
        if (Self::MIN..=Self::MAX).contains(&px_per_pass) {
            Ok(Self(px_per_pass))
        } else {
            Err(OutOfRangeError {
                value: px_per_pass,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    /// Return the per-pass travel in pixels.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Per-pass travel as a signed displacement.
    pub(crate) fn as_i32(self) -> i32 {
        i32::try_from(self.0).unwrap_or(i32::MAX)
    }
}

impl Default for Velocity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Static configuration of a [`Ticker`](crate::Ticker).
///
/// # Example
///
/// ```
/// use ticker_core::config::{TickerConfig, Velocity};
/// use ticker_core::style::Edges;
///
/// let config = TickerConfig::new()
///     .velocity(Velocity::new(3).unwrap())
///     .divider_size(16)
///     .padding(Edges::horizontal_vertical(0, 2));
///
/// assert_eq!(config.velocity.get(), 3);
/// assert_eq!(config.divider_size, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickerConfig {
    /// Per-pass leftward travel.
    pub velocity: Velocity,
    /// Horizontal gap inserted between consecutive items.
    pub divider_size: u32,
    /// Container padding; the left inset is the cursor origin.
    pub padding: Edges,
    /// Suggested minimum size. The height floors the measured height; the
    /// width is used when the parent leaves the width unbounded.
    pub min_size: Size,
    /// Fill drawn behind the items on every frame.
    pub background: Option<Gray4>,
}

impl TickerConfig {
    /// Default divider: 10 px.
    pub const DEFAULT_DIVIDER: u32 = 10;

    /// Create a configuration with the default velocity and divider.
    pub const fn new() -> Self {
        Self {
            velocity: Velocity::DEFAULT,
            divider_size: Self::DEFAULT_DIVIDER,
            padding: Edges::ZERO,
            min_size: Size::zero(),
            background: None,
        }
    }

    /// Set the per-pass velocity.
    pub fn velocity(mut self, velocity: Velocity) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the gap between consecutive items.
    pub fn divider_size(mut self, size: u32) -> Self {
        self.divider_size = size;
        self
    }

    /// Set the container padding.
    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    /// Set the suggested minimum size.
    pub fn min_size(mut self, size: Size) -> Self {
        self.min_size = size;
        self
    }

    /// Set the background fill.
    pub fn background(mut self, color: Gray4) -> Self {
        self.background = Some(color);
        self
    }

    /// Divider as a signed cursor step.
    pub(crate) fn divider_i32(&self) -> i32 {
        i32::try_from(self.divider_size).unwrap_or(i32::MAX)
    }
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_velocity_rejects_zero() {
        let err = Velocity::new(0).unwrap_err();
        assert_eq!(err.value, 0);
        assert_eq!(err.min, 1);
    }

    #[test]
    fn test_velocity_rejects_above_max() {
        assert!(Velocity::new(Velocity::MAX + 1).is_err());
        assert_eq!(Velocity::new(Velocity::MAX).unwrap().get(), Velocity::MAX);
    }

    #[test]
    fn test_velocity_default() {
        assert_eq!(Velocity::default().get(), 2);
        assert_eq!(Velocity::default().as_i32(), 2);
    }

    #[test]
    fn test_config_defaults() {
        let c = TickerConfig::default();
        assert_eq!(c.velocity, Velocity::DEFAULT);
        assert_eq!(c.divider_size, 10);
        assert_eq!(c.padding, Edges::ZERO);
        assert_eq!(c.min_size, Size::zero());
        assert!(c.background.is_none());
    }

    #[test]
    fn test_config_builder_chain() {
        let c = TickerConfig::new()
            .divider_size(0)
            .min_size(Size::new(120, 16))
            .background(Gray4::new(0xC));
        assert_eq!(c.divider_size, 0);
        assert_eq!(c.divider_i32(), 0);
        assert_eq!(c.min_size, Size::new(120, 16));
        assert_eq!(c.background, Some(Gray4::new(0xC)));
    }
}
