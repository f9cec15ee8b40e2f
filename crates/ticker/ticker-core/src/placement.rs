//! Per-pass placement of admitted items.
//!
//! Once per layout pass the engine walks the admitted items left to right
//! and assigns each a bounding box:
//!
//! 1. If the leading item changed since the last pass, reset the leading
//!    offset (`0` on the very first item, the divider size afterwards).
//! 2. Starting at `padding.left + leading_offset`, place every item, with
//!    the divider between neighbours and each item's own margins.
//! 3. Mark the leading item for eviction once it is more than its own width
//!    past the left edge.
//! 4. Snap a `New` item that would first appear inside the visible width to
//!    the right edge (flush entry) by widening its left margin.
//! 5. Centre items vertically in the content height.
//!
//! Without an eviction the leading offset then drifts left by the velocity.
//! Removing the evicted item and admitting the next one is left to the
//! caller, driven by the returned [`PassOutcome`].

use crate::config::TickerConfig;
use crate::item::{ContentSource, Item, ItemId, ItemState};
use crate::layout::ChildLayout;
use crate::style::Edges;
use embedded_graphics::prelude::{Point, Size};

/// An admitted item together with its measured size and last placement.
pub(crate) struct Slot<S: ContentSource> {
    pub(crate) item: Item<S>,
    pub(crate) measured: Size,
    pub(crate) bounds: ChildLayout,
}

impl<S: ContentSource> Slot<S> {
    pub(crate) fn new(item: Item<S>, measured: Size) -> Self {
        Self {
            item,
            measured,
            bounds: ChildLayout::zero(),
        }
    }
}

/// Container geometry a pass is computed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    /// Measured container size.
    pub size: Size,
    /// Container padding.
    pub padding: Edges,
}

impl Frame {
    /// Visible width; a cursor at or beyond it is off-screen right.
    pub fn visible_width(&self) -> i32 {
        to_i32(self.size.width)
    }

    /// Height available to items after vertical padding.
    pub fn content_height(&self) -> u32 {
        self.size.height.saturating_sub(self.padding.vertical())
    }
}

/// What a pass decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PassOutcome {
    /// The leading item is fully scrolled past and must be removed.
    pub evict_leading: bool,
    /// Cursor after the last item: the trailing edge of the occupied run.
    pub trailing_cursor: i32,
    /// `trailing_cursor <= visible width`: the next queued item may enter.
    pub has_room: bool,
}

/// Horizontal placement state carried between passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Placement {
    leading_offset: i32,
    last_leading: Option<ItemId>,
}

impl Placement {
    /// Fresh engine: no leading item seen yet.
    pub const fn new() -> Self {
        Self {
            leading_offset: 0,
            last_leading: None,
        }
    }

    /// Signed offset applied to the leading item's nominal position.
    pub fn leading_offset(&self) -> i32 {
        self.leading_offset
    }

    /// The item that occupied slot 0 on the last pass.
    pub fn last_leading(&self) -> Option<ItemId> {
        self.last_leading
    }

    /// Run one pass over `slots`, writing each slot's bounds.
    pub(crate) fn place<S: ContentSource>(
        &mut self,
        slots: &mut [Slot<S>],
        frame: &Frame,
        config: &TickerConfig,
    ) -> PassOutcome {
        let visible = frame.visible_width();
        let Some(first) = slots.first() else {
            let cursor = to_i32(frame.padding.left);
            return PassOutcome {
                evict_leading: false,
                trailing_cursor: cursor,
                has_room: cursor <= visible,
            };
        };

        let first_id = first.item.id();
        if self.last_leading != Some(first_id) {
            self.leading_offset = match self.last_leading {
                None => 0,
                Some(_) => config.divider_i32(),
            };
            self.last_leading = Some(first_id);
        }

        let divider = config.divider_i32();
        let content_height = frame.content_height();
        let mut cursor = to_i32(frame.padding.left).saturating_add(self.leading_offset);
        let mut evict_leading = false;

        for (index, slot) in slots.iter_mut().enumerate() {
            let state = slot.item.state();
            if !state.is_placeable() {
                warn!("skipping item {} in a non-placeable state", slot.item.id().get());
                slot.bounds = ChildLayout::zero();
                continue;
            }

            if index > 0 {
                cursor = cursor.saturating_add(divider);
            }
            cursor = cursor.saturating_add(to_i32(slot.item.margin().left));

            let width = to_i32(slot.measured.width);
            if index == 0 && cursor.saturating_neg() > width {
                evict_leading = true;
            }

            if state == ItemState::New {
                slot.item.advance(ItemState::Displaying);
                if cursor < visible {
                    let shortfall = u32::try_from(visible.saturating_sub(cursor)).unwrap_or(0);
                    slot.item.margin_mut().widen_left(shortfall);
                    cursor = visible;
                }
            }

            let margin = slot.item.margin();
            let outer_height = slot.measured.height.saturating_add(margin.vertical());
            let extra_top = if outer_height < content_height {
                content_height.saturating_sub(outer_height) / 2
            } else {
                0
            };
            let top = frame
                .padding
                .top
                .saturating_add(margin.top)
                .saturating_add(extra_top);

            slot.bounds = ChildLayout::new(Point::new(cursor, to_i32(top)), slot.measured);
            cursor = cursor
                .saturating_add(width)
                .saturating_add(to_i32(margin.right));
        }

        if !evict_leading {
            self.leading_offset = self.leading_offset.saturating_sub(config.velocity.as_i32());
        }

        trace!(
            "placed {} items, trailing cursor {}, evict {}",
            slots.len(),
            cursor,
            evict_leading
        );

        PassOutcome {
            evict_leading,
            trailing_cursor: cursor,
            has_room: cursor <= visible,
        }
    }
}

pub(crate) fn to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
