//! Ticker items and their lifecycle.
//!
//! An [`Item`] wraps a [`ContentSource`] and walks a strictly linear state
//! machine:
//!
//! ```text
//! Queuing ──admit──▶ New ──first layout──▶ Displaying ──evict──▶ Removed
//! ```
//!
//! The renderable content is produced exactly once, on `Queuing → New`.
//! [`ContentSource::produce`] consumes the source, so a second production is
//! impossible rather than merely avoided.

use crate::layout::Layout;
use crate::render::Renderable;
use crate::style::Edges;
use core::sync::atomic::{AtomicU32, Ordering};

static NEXT_ID: AtomicU32 = AtomicU32::new(1);

/// Opaque item identity.
///
/// Allocated from a process-wide counter when the item is created, so two
/// items never compare equal even if their content does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ItemId(u32);

impl ItemId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Wrap a raw identifier. Intended for logs and tests.
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw identifier.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle state of an [`Item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ItemState {
    /// Waiting in the admission queue; no content yet.
    Queuing,
    /// Admitted as a child with content produced, not yet laid out.
    New,
    /// Placed by at least one layout pass; scrolling.
    Displaying,
    /// Evicted off the leading edge. Terminal.
    Removed,
}

impl ItemState {
    /// The only state this one may move to, if any.
    pub const fn successor(self) -> Option<Self> {
        match self {
            Self::Queuing => Some(Self::New),
            Self::New => Some(Self::Displaying),
            Self::Displaying => Some(Self::Removed),
            Self::Removed => None,
        }
    }

    /// Whether the placement engine lays out an item in this state.
    pub const fn is_placeable(self) -> bool {
        matches!(self, Self::New | Self::Displaying)
    }
}

/// Renderable content of an admitted item: sized through [`Layout`], drawn
/// through [`Renderable`].
pub trait Content: Layout + Renderable {}

impl<T: Layout + Renderable> Content for T {}

/// Lazy producer of an item's content.
///
/// Called once, at admission. Returning `None` means the content is
/// unavailable: the item is dropped without being displayed or re-queued.
///
/// Any `FnOnce() -> Option<C>` is a source:
///
/// ```
/// use ticker_core::item::{ContentSource, Item, ItemState};
/// use ticker_core::layout::{Constraints, Layout, LayoutResult};
/// use ticker_core::render::Renderable;
/// use embedded_graphics::{pixelcolor::Gray4, prelude::*};
///
/// struct Gap(u32);
///
/// impl Layout for Gap {
///     fn layout(&self, c: Constraints) -> LayoutResult {
///         LayoutResult::leaf(c.constrain(Size::new(self.0, 1)))
///     }
/// }
///
/// impl Renderable for Gap {
///     fn render<D: DrawTarget<Color = Gray4>>(&self, _: &mut D, _: Point) -> Result<(), D::Error> {
///         Ok(())
///     }
/// }
///
/// let item = Item::new(|| Some(Gap(8)));
/// assert_eq!(item.state(), ItemState::Queuing);
/// ```
pub trait ContentSource {
    /// The content this source produces.
    type Content: Content;

    /// Produce the content, consuming the source.
    fn produce(self) -> Option<Self::Content>;
}

impl<C, F> ContentSource for F
where
    C: Content,
    F: FnOnce() -> Option<C>,
{
    type Content = C;

    fn produce(self) -> Option<C> {
        self()
    }
}

/// A unit of ticker content with a lifecycle.
pub struct Item<S: ContentSource> {
    id: ItemId,
    state: ItemState,
    margin: Edges,
    source: Option<S>,
    content: Option<S::Content>,
}

impl<S: ContentSource> Item<S> {
    /// Create a fresh item in the `Queuing` state.
    pub fn new(source: S) -> Self {
        Self {
            id: ItemId::next(),
            state: ItemState::Queuing,
            margin: Edges::ZERO,
            source: Some(source),
            content: None,
        }
    }

    /// Set the item's margins.
    pub fn with_margin(mut self, margin: Edges) -> Self {
        self.margin = margin;
        self
    }

    /// Identity of this item.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ItemState {
        self.state
    }

    /// Current margins. The left margin grows when the item snaps to the
    /// right edge on entry.
    pub fn margin(&self) -> Edges {
        self.margin
    }

    /// The produced content, once admitted.
    pub fn content(&self) -> Option<&S::Content> {
        self.content.as_ref()
    }

    /// Release the produced content. Used when disposing of retired items.
    pub fn into_content(self) -> Option<S::Content> {
        self.content
    }

    pub(crate) fn margin_mut(&mut self) -> &mut Edges {
        &mut self.margin
    }

    /// Move to `next` if it is the immediate successor of the current state.
    ///
    /// Returns `false` and leaves the state untouched otherwise.
    pub(crate) fn advance(&mut self, next: ItemState) -> bool {
        if self.state.successor() == Some(next) {
            self.state = next;
            true
        } else {
            false
        }
    }

    /// Produce the content and move to `New`.
    ///
    /// Returns `false` when the source yields nothing; the item then stays
    /// `Queuing` and holds neither source nor content.
    pub(crate) fn admit(&mut self) -> bool {
        if self.state != ItemState::Queuing {
            return false;
        }
        let Some(source) = self.source.take() else {
            return false;
        };
        match source.produce() {
            Some(content) => {
                self.content = Some(content);
                self.advance(ItemState::New)
            }
            None => false,
        }
    }
}

impl<S: ContentSource> core::fmt::Debug for Item<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Item")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("margin", &self.margin)
            .field("has_content", &self.content.is_some())
            .finish()
    }
}
