//! Box-model insets shared by the ticker and its items.
//!
//! The ticker uses [`Edges`] twice: as its own padding (the visible content
//! area is the container bounds minus padding) and as each item's margin.
//! An item's left margin is the only inset the placement engine ever
//! rewrites, see [`Edges::widen_left`].

/// Edge insets for margins and padding.
///
/// Follows CSS box model convention: top, right, bottom, left.
///
/// # Examples
///
/// ```
/// use ticker_core::style::Edges;
///
/// let uniform = Edges::all(4);
/// assert_eq!(uniform.top, 4);
/// assert_eq!(uniform.left, 4);
///
/// let hv = Edges::horizontal_vertical(6, 2);
/// assert_eq!(hv.horizontal(), 12);
/// assert_eq!(hv.vertical(), 4);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Edges {
    /// Top edge inset in pixels.
    pub top: u32,

    /// Right edge inset in pixels.
    pub right: u32,

    /// Bottom edge inset in pixels.
    pub bottom: u32,

    /// Left edge inset in pixels.
    pub left: u32,
}

impl Edges {
    /// Edges with every side set to zero.
    pub const ZERO: Self = Self::all(0);

    /// Creates edges with all sides set to the same value.
    pub const fn all(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Creates edges with individual values for each side.
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates edges with separate horizontal and vertical values.
    pub const fn horizontal_vertical(horizontal: u32, vertical: u32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Returns the total horizontal space (left + right).
    pub const fn horizontal(self) -> u32 {
        self.left.saturating_add(self.right)
    }

    /// Returns the total vertical space (top + bottom).
    pub const fn vertical(self) -> u32 {
        self.top.saturating_add(self.bottom)
    }

    /// Grow the left inset by `amount` pixels.
    ///
    /// Used for flush entry: a newly admitted item that would first appear
    /// inside the visible area is pushed to the right edge by inflating its
    /// left margin. The growth is permanent for the item's lifetime.
    pub fn widen_left(&mut self, amount: u32) {
        self.left = self.left.saturating_add(amount);
    }
}

impl Default for Edges {
    fn default() -> Self {
        Self::ZERO
    }
}
