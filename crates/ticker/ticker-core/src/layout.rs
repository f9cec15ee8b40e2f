//! Constraint-based layout primitives.
//!
//! The ticker sits in the same two-pass layout model as any other component:
//!
//! 1. **Constraint Pass (Down)**: Parent passes constraints to children
//! 2. **Size Pass (Up)**: Children return their size and children positions
//!
//! Item content reports its natural size through [`Layout`]; the ticker
//! measures every admitted item with an unbounded width (items scroll, they
//! never wrap) and the container's available height.
//!
//! ## Example
//!
//! ```rust
//! use ticker_core::layout::{Constraints, Layout, LayoutResult};
//! use embedded_graphics::prelude::Size;
//!
//! struct Chip;
//!
//! impl Layout for Chip {
//!     fn layout(&self, constraints: Constraints) -> LayoutResult {
//!         LayoutResult::leaf(constraints.constrain(Size::new(40, 12)))
//!     }
//! }
//!
//! let result = Chip.layout(Constraints::loose(Size::new(100, 10)));
//! assert_eq!(result.size, Size::new(40, 10));
//! ```

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;

/// Maximum number of children in a layout result.
///
/// Also bounds the number of items a ticker keeps admitted at once.
pub const MAX_CHILDREN: usize = 32;

/// Constraints define the valid range of sizes for layout.
///
/// # Invariants
///
/// - `min.width <= max.width`
/// - `min.height <= max.height`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Constraints {
    /// Minimum allowed size (inclusive).
    pub min: Size,
    /// Maximum allowed size (inclusive).
    pub max: Size,
}

impl Constraints {
    /// Create new constraints with explicit min and max bounds.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if min > max on either axis.
    pub fn new(min: Size, max: Size) -> Self {
        debug_assert!(
            min.width <= max.width,
            "min.width ({}) must be <= max.width ({})",
            min.width,
            max.width
        );
        debug_assert!(
            min.height <= max.height,
            "min.height ({}) must be <= max.height ({})",
            min.height,
            max.height
        );

        Self { min, max }
    }

    /// Create tight constraints (exact size).
    pub fn tight(size: Size) -> Self {
        Self {
            min: size,
            max: size,
        }
    }

    /// Create loose constraints (zero to max).
    pub fn loose(max: Size) -> Self {
        Self {
            min: Size::zero(),
            max,
        }
    }

    /// Constraints for measuring a scrolling child: any width, height up to
    /// `max_height`.
    ///
    /// ```rust
    /// use ticker_core::layout::Constraints;
    /// use embedded_graphics::prelude::Size;
    ///
    /// let c = Constraints::unbounded_width(24);
    /// assert!(c.has_unbounded_width());
    /// assert_eq!(c.constrain(Size::new(900, 40)), Size::new(900, 24));
    /// ```
    pub fn unbounded_width(max_height: u32) -> Self {
        Self {
            min: Size::zero(),
            max: Size::new(u32::MAX, max_height),
        }
    }

    /// Clamp a size to the valid range defined by min and max.
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min.width, self.max.width),
            size.height.clamp(self.min.height, self.max.height),
        )
    }

    /// Check if the width is unconstrained.
    pub fn has_unbounded_width(&self) -> bool {
        self.max.width == u32::MAX
    }
}

/// Layout information for a single child component.
///
/// Contains the child's position relative to its parent and its size. For a
/// ticker item this is the bounding box `[left, top, left + width, top + height]`
/// computed by the last layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChildLayout {
    /// Position offset from parent's top-left corner.
    pub offset: Point,
    /// Size of the child.
    pub size: Size,
}

impl ChildLayout {
    /// Create a new child layout.
    pub fn new(offset: Point, size: Size) -> Self {
        Self { offset, size }
    }

    /// A zero-sized layout at the origin. Skipped children are placed here.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Leading (left) edge.
    pub fn left(&self) -> i32 {
        self.offset.x
    }

    /// Trailing (right) edge, exclusive.
    pub fn right(&self) -> i32 {
        self.offset
            .x
            .saturating_add(i32::try_from(self.size.width).unwrap_or(i32::MAX))
    }

    /// Get the bounding rectangle of this child.
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(self.offset, self.size)
    }
}

/// Result of a layout operation.
///
/// Contains the component's size and the positions of its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutResult {
    /// Total size of this component.
    pub size: Size,
    /// Layout information for each child.
    pub children: Vec<ChildLayout, MAX_CHILDREN>,
}

impl LayoutResult {
    /// Create a new layout result.
    pub fn new(size: Size, children: Vec<ChildLayout, MAX_CHILDREN>) -> Self {
        Self { size, children }
    }

    /// Create a leaf layout result (no children).
    pub fn leaf(size: Size) -> Self {
        Self {
            size,
            children: Vec::new(),
        }
    }

    /// Get the number of children in this layout.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

/// Trait for components that can participate in layout.
///
/// # Contract
///
/// - The returned size MUST satisfy the given constraints
/// - Child positions are relative to the component's top-left corner (0, 0)
pub trait Layout {
    /// Compute the layout for this component given constraints.
    fn layout(&self, constraints: Constraints) -> LayoutResult;
}
