//! The ticker container.
//!
//! [`Ticker`] owns the admission queue, the admitted children and the
//! placement state. The host drives it through three extension points:
//!
//! - [`Ticker::measure`] with the parent's constraints
//! - [`Ticker::layout`] once per frame (also run by `draw`)
//! - [`Ticker::draw`], which renders and reports whether another frame is due
//!
//! ```
//! use ticker_core::prelude::*;
//! use embedded_graphics::{mock_display::MockDisplay, pixelcolor::Gray4, prelude::*};
//!
//! struct Gap(u32);
//!
//! impl Layout for Gap {
//!     fn layout(&self, c: Constraints) -> LayoutResult {
//!         LayoutResult::leaf(c.constrain(Size::new(self.0, 4)))
//!     }
//! }
//!
//! impl Renderable for Gap {
//!     fn render<D: DrawTarget<Color = Gray4>>(&self, _: &mut D, _: Point) -> Result<(), D::Error> {
//!         Ok(())
//!     }
//! }
//!
//! let mut ticker: Ticker<_> = Ticker::new(TickerConfig::new());
//! ticker.measure(Constraints::tight(Size::new(64, 8)));
//! let id = ticker.enqueue(Item::new(|| Some(Gap(20)))).unwrap();
//!
//! let mut display = MockDisplay::new();
//! assert_eq!(ticker.draw(&mut display, Point::zero()).unwrap(), NextFrame::Requested);
//! assert_eq!(ticker.bounds_of(id).unwrap().left(), 64);
//! ```

use crate::config::{TickerConfig, Velocity};
use crate::error::TickerError;
use crate::item::{ContentSource, Item, ItemId, ItemState};
use crate::layout::{ChildLayout, Constraints, Layout, LayoutResult, MAX_CHILDREN};
use crate::placement::{to_i32, Frame, Placement, Slot};
use crate::queue::AdmissionQueue;
use crate::render::{render_background, render_clipped, Renderable};
use embedded_graphics::{
    pixelcolor::Gray4,
    prelude::*,
    primitives::Rectangle,
};
use heapless::{Deque, Vec};

/// Default admission queue capacity.
pub const DEFAULT_QUEUE_CAPACITY: usize = 16;

/// Evicted items kept for [`Ticker::drain_retired`]; older ones are dropped.
pub const RETIRED_CAPACITY: usize = 8;

/// What the host should do after a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[must_use]
pub enum NextFrame {
    /// Items are still moving: schedule another draw.
    Requested,
    /// Nothing admitted; wait for the next [`Ticker::enqueue`].
    Idle,
}

/// Self-animating horizontal ticker.
///
/// `Q` is the admission queue capacity. At most [`MAX_CHILDREN`] items are
/// admitted at once.
pub struct Ticker<S: ContentSource, const Q: usize = DEFAULT_QUEUE_CAPACITY> {
    config: TickerConfig,
    queue: AdmissionQueue<S, Q>,
    slots: Vec<Slot<S>, MAX_CHILDREN>,
    placement: Placement,
    size: Size,
    child_constraints: Constraints,
    retired: Deque<Item<S>, RETIRED_CAPACITY>,
    layout_requested: bool,
}

impl<S: ContentSource, const Q: usize> Ticker<S, Q> {
    /// Create an empty ticker. It has zero size until the first
    /// [`measure`](Self::measure).
    pub fn new(config: TickerConfig) -> Self {
        Self {
            config,
            queue: AdmissionQueue::new(),
            slots: Vec::new(),
            placement: Placement::new(),
            size: Size::zero(),
            child_constraints: Constraints::unbounded_width(u32::MAX),
            retired: Deque::new(),
            layout_requested: false,
        }
    }

    /// Hand an item to the ticker.
    ///
    /// When nothing is admitted yet the item is admitted right away, so the
    /// first item shows up without waiting for an external layout pass.
    ///
    /// # Errors
    ///
    /// - [`TickerError::InvalidItem`] if the item already left `Queuing`
    /// - [`TickerError::QueueFull`] if the admission queue is at capacity
    pub fn enqueue(&mut self, item: Item<S>) -> Result<ItemId, TickerError> {
        let id = self.queue.push(item)?;
        if self.slots.is_empty() {
            self.admit_next();
        }
        Ok(id)
    }

    /// Change the per-pass travel. Takes effect on the next pass.
    pub fn set_velocity(&mut self, velocity: Velocity) {
        self.config.velocity = velocity;
    }

    /// Change the gap between items. Takes effect on the next pass.
    pub fn set_divider_size(&mut self, size: u32) {
        self.config.divider_size = size;
    }

    /// Current configuration.
    pub fn config(&self) -> &TickerConfig {
        &self.config
    }

    /// Measurement pass.
    ///
    /// Every admitted item is measured with an unbounded width and the
    /// height left after padding. The ticker's height is the tallest item
    /// (plus its vertical margins) plus padding, floored by the configured
    /// minimum height. Its width never depends on the items: it is the
    /// parent's maximum, or the configured minimum width when the parent
    /// leaves the width unbounded.
    pub fn measure(&mut self, constraints: Constraints) -> Size {
        let padding = self.config.padding;
        self.child_constraints =
            Constraints::unbounded_width(constraints.max.height.saturating_sub(padding.vertical()));

        let mut tallest = 0_u32;
        for slot in self.slots.iter_mut() {
            if let Some(content) = slot.item.content() {
                slot.measured = content.layout(self.child_constraints).size;
            }
            let outer = slot
                .measured
                .height
                .saturating_add(slot.item.margin().vertical());
            tallest = tallest.max(outer);
        }

        let height = tallest
            .saturating_add(padding.vertical())
            .max(self.config.min_size.height);
        let width = if constraints.has_unbounded_width() {
            self.config.min_size.width
        } else {
            constraints.max.width
        };

        self.size = constraints.constrain(Size::new(width, height));
        self.size
    }

    /// Layout pass: advance every item, evict the leading one once it has
    /// scrolled out, and admit the next queued item when there is room at
    /// the trailing edge.
    pub fn layout(&mut self) {
        if self.slots.is_empty() {
            self.admit_next();
            return;
        }

        let frame = Frame {
            size: self.size,
            padding: self.config.padding,
        };
        let outcome = self.placement.place(&mut self.slots, &frame, &self.config);

        if outcome.evict_leading {
            self.evict_leading();
        }
        if outcome.has_room {
            self.admit_next();
        }
    }

    /// Render the current frame at `origin`, then run the next layout pass.
    ///
    /// Returns [`NextFrame::Requested`] while any item is admitted or
    /// waiting: drawing drives layout, which drives the next draw. An empty
    /// ticker with a non-empty queue keeps admitting one item per frame, so
    /// items behind one whose content is unavailable are not stranded.
    /// Returns [`NextFrame::Idle`] once nothing is admitted or queued.
    ///
    /// # Errors
    ///
    /// Forwards the draw target's error. Item anomalies never surface here.
    pub fn draw<D>(&mut self, display: &mut D, origin: Point) -> Result<NextFrame, D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        self.render(display, origin)?;
        if self.slots.is_empty() && self.queue.is_empty() {
            return Ok(NextFrame::Idle);
        }
        self.layout();
        Ok(NextFrame::Requested)
    }

    /// Size from the last [`measure`](Self::measure).
    pub fn size(&self) -> Size {
        self.size
    }

    /// Container size and the bounds every admitted item got on the last
    /// pass, in admission order.
    pub fn snapshot(&self) -> LayoutResult {
        let mut children = Vec::new();
        for slot in &self.slots {
            if children.push(slot.bounds).is_err() {
                break;
            }
        }
        LayoutResult::new(self.size, children)
    }

    /// Number of admitted items.
    pub fn child_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of items waiting for admission.
    pub fn queued_len(&self) -> usize {
        self.queue.len()
    }

    /// Lifecycle state of an item the ticker still knows about.
    ///
    /// Covers queued, admitted and retired-but-not-drained items.
    pub fn state_of(&self, id: ItemId) -> Option<ItemState> {
        if let Some(slot) = self.slots.iter().find(|slot| slot.item.id() == id) {
            return Some(slot.item.state());
        }
        if self.queue.contains(id) {
            return Some(ItemState::Queuing);
        }
        self.retired
            .iter()
            .find(|item| item.id() == id)
            .map(Item::state)
    }

    /// Bounds an admitted item got on the last pass.
    pub fn bounds_of(&self, id: ItemId) -> Option<ChildLayout> {
        self.slots
            .iter()
            .find(|slot| slot.item.id() == id)
            .map(|slot| slot.bounds)
    }

    /// Admitted items with their last bounds, leading item first.
    pub fn children(&self) -> impl Iterator<Item = (&Item<S>, ChildLayout)> + '_ {
        self.slots.iter().map(|slot| (&slot.item, slot.bounds))
    }

    /// Offset currently applied to the leading item.
    pub fn leading_offset(&self) -> i32 {
        self.placement.leading_offset()
    }

    /// The item the last pass treated as leading.
    pub fn leading_item(&self) -> Option<ItemId> {
        self.placement.last_leading()
    }

    /// Whether an admission happened since the last
    /// [`take_layout_request`](Self::take_layout_request). The host should
    /// measure again before the next layout.
    pub fn needs_layout(&self) -> bool {
        self.layout_requested
    }

    /// Read and clear the pending layout request.
    pub fn take_layout_request(&mut self) -> bool {
        core::mem::replace(&mut self.layout_requested, false)
    }

    /// Hand back evicted items, oldest first.
    pub fn drain_retired(&mut self) -> impl Iterator<Item = Item<S>> + '_ {
        core::iter::from_fn(move || self.retired.pop_front())
    }

    fn admit_next(&mut self) {
        if self.slots.is_full() {
            warn!("ticker holds {} items, admission deferred", MAX_CHILDREN);
            return;
        }
        let Some(mut item) = self.queue.dequeue_next() else {
            return;
        };
        if !item.admit() {
            warn!("item {} produced no content, dropped", item.id().get());
            return;
        }

        let measured = item
            .content()
            .map(|content| content.layout(self.child_constraints).size)
            .unwrap_or_default();
        let id = item.id();
        if self.slots.push(Slot::new(item, measured)).is_err() {
            return;
        }
        self.layout_requested = true;
        debug!(
            "admitted item {} ({}x{}), {} queued",
            id.get(),
            measured.width,
            measured.height,
            self.queue.len()
        );
    }

    fn evict_leading(&mut self) {
        if self.slots.is_empty() {
            return;
        }
        let Slot { mut item, .. } = self.slots.remove(0);
        item.advance(ItemState::Removed);
        debug!("evicted item {}", item.id().get());

        if self.retired.is_full() {
            self.retired.pop_front();
        }
        if self.retired.push_back(item).is_err() {
            warn!("retired list full, evicted item dropped");
        }
    }
}

impl<S: ContentSource, const Q: usize> Default for Ticker<S, Q> {
    fn default() -> Self {
        Self::new(TickerConfig::default())
    }
}

impl<S: ContentSource, const Q: usize> Renderable for Ticker<S, Q> {
    fn render<D: DrawTarget<Color = Gray4>>(
        &self,
        display: &mut D,
        offset: Point,
    ) -> Result<(), D::Error> {
        let area = Rectangle::new(offset, self.size);
        if let Some(color) = self.config.background {
            render_background(area, color, display)?;
        }

        let padding = self.config.padding;
        let clip = Rectangle::new(
            offset + Point::new(to_i32(padding.left), to_i32(padding.top)),
            Size::new(
                self.size.width.saturating_sub(padding.horizontal()),
                self.size.height.saturating_sub(padding.vertical()),
            ),
        );

        for slot in &self.slots {
            if slot.item.state() != ItemState::Displaying {
                continue;
            }
            let Some(content) = slot.item.content() else {
                continue;
            };
            let bounds = slot.bounds.bounds().translate(offset);
            render_clipped(content, bounds, &clip, display)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::panic)]
mod tests {
    use super::*;
    use crate::style::Edges;
    use embedded_graphics::mock_display::MockDisplay;

    struct Block(Size);

    impl Layout for Block {
        fn layout(&self, c: Constraints) -> LayoutResult {
            LayoutResult::leaf(c.constrain(self.0))
        }
    }

    impl Renderable for Block {
        fn render<D: DrawTarget<Color = Gray4>>(
            &self,
            display: &mut D,
            offset: Point,
        ) -> Result<(), D::Error> {
            render_background(Rectangle::new(offset, self.0), Gray4::BLACK, display)
        }
    }

    type Source = fn() -> Option<Block>;

    fn block_50x10() -> Option<Block> {
        Some(Block(Size::new(50, 10)))
    }

    fn block_8x4() -> Option<Block> {
        Some(Block(Size::new(8, 4)))
    }

    fn missing() -> Option<Block> {
        None
    }

    fn ticker(width: u32, height: u32) -> Ticker<Source, 4> {
        let mut t = Ticker::new(TickerConfig::new());
        t.measure(Constraints::tight(Size::new(width, height)));
        t
    }

    #[test]
    fn test_first_enqueue_admits_synchronously() {
        let mut t = ticker(200, 20);
        let id = t.enqueue(Item::new(block_50x10 as Source)).unwrap();

        assert_eq!(t.child_count(), 1);
        assert_eq!(t.queued_len(), 0);
        assert_eq!(t.state_of(id), Some(ItemState::New));
        assert!(t.take_layout_request());
        assert!(!t.needs_layout());
    }

    #[test]
    fn test_second_enqueue_waits_in_queue() {
        let mut t = ticker(200, 20);
        t.enqueue(Item::new(block_50x10 as Source)).unwrap();
        let second = t.enqueue(Item::new(block_50x10 as Source)).unwrap();

        assert_eq!(t.child_count(), 1);
        assert_eq!(t.state_of(second), Some(ItemState::Queuing));
    }

    #[test]
    fn test_layout_on_empty_is_noop() {
        let mut t = ticker(200, 20);
        t.layout();
        assert_eq!(t.child_count(), 0);
        assert_eq!(t.leading_offset(), 0);
    }

    #[test]
    fn test_measure_height_from_tallest_item() {
        let mut t: Ticker<Source, 4> = Ticker::new(
            TickerConfig::new()
                .padding(Edges::horizontal_vertical(0, 2))
                .min_size(Size::new(0, 6)),
        );
        t.enqueue(Item::new(block_50x10 as Source).with_margin(Edges::new(1, 0, 1, 0)))
            .unwrap();

        let size = t.measure(Constraints::new(Size::zero(), Size::new(100, 40)));
        assert_eq!(size, Size::new(100, 10 + 2 + 4));
    }

    #[test]
    fn test_measure_floors_by_min_size() {
        let mut t: Ticker<Source, 4> =
            Ticker::new(TickerConfig::new().min_size(Size::new(80, 12)));
        let size = t.measure(Constraints::unbounded_width(40));
        assert_eq!(size, Size::new(80, 12));
    }

    #[test]
    fn test_unavailable_content_is_dropped() {
        let mut t = ticker(200, 20);
        let id = t.enqueue(Item::new(missing as Source)).unwrap();

        assert_eq!(t.child_count(), 0);
        assert_eq!(t.queued_len(), 0);
        assert_eq!(t.state_of(id), None);
        assert!(!t.needs_layout());
    }

    #[test]
    fn test_eviction_retires_leading_item() {
        let mut t = ticker(20, 4);
        t.set_velocity(Velocity::new(8).unwrap());
        let id = t.enqueue(Item::new(block_8x4 as Source)).unwrap();

        let mut passes = 0;
        while t.child_count() > 0 {
            t.layout();
            passes += 1;
            assert!(passes < 100, "leading item never evicted");
        }

        let retired: std::vec::Vec<_> = t.drain_retired().collect();
        assert_eq!(retired.len(), 1);
        assert_eq!(retired[0].id(), id);
        assert_eq!(retired[0].state(), ItemState::Removed);
        assert!(t.drain_retired().next().is_none());
    }

    #[test]
    fn test_retired_item_cannot_reenter() {
        let mut t = ticker(20, 4);
        t.set_velocity(Velocity::new(16).unwrap());
        t.enqueue(Item::new(block_8x4 as Source)).unwrap();
        while t.child_count() > 0 {
            t.layout();
        }
        let Some(item) = t.drain_retired().next() else {
            panic!("no retired item");
        };
        let id = item.id();

        assert_eq!(t.enqueue(item), Err(TickerError::InvalidItem(id)));
        assert_eq!(t.queued_len(), 0);
    }

    #[test]
    fn test_draw_reports_idle_when_empty() {
        let mut t = ticker(32, 8);
        let mut display = MockDisplay::new();
        assert_eq!(t.draw(&mut display, Point::zero()), Ok(NextFrame::Idle));
    }

    #[test]
    fn test_render_clips_to_container() {
        let mut t = ticker(32, 4);
        t.set_velocity(Velocity::new(4).unwrap());
        t.enqueue(Item::new(block_8x4 as Source)).unwrap();
        // Snap to x = 32, then drift in by 4 px per pass.
        for _ in 0..3 {
            t.layout();
        }

        let mut display = MockDisplay::new();
        t.render(&mut display, Point::zero()).unwrap();
        assert_eq!(
            display.affected_area(),
            Rectangle::new(Point::new(24, 0), Size::new(8, 4))
        );
    }

    #[test]
    fn test_snapshot_lists_children() {
        let mut t = ticker(200, 20);
        t.enqueue(Item::new(block_50x10 as Source)).unwrap();
        t.layout();

        let snapshot = t.snapshot();
        assert_eq!(snapshot.size, Size::new(200, 20));
        assert_eq!(snapshot.child_count(), 1);
        assert_eq!(snapshot.children[0].offset, Point::new(200, 5));
    }
}
