//! Horizontal Ticker
//!
//! A self-animating ticker container for embedded-graphics displays: items
//! are enqueued, slide in from the right edge, travel left at a constant
//! velocity and are evicted once fully past the left edge, at which point
//! the next queued item is admitted.
//!
//! # Architecture
//!
//! - Layout primitives: Constraints, Edges, ChildLayout, Layout, Renderable
//! - Items: lifecycle state machine and lazy content production
//! - Admission queue: fixed-capacity FIFO of waiting items
//! - Placement: per-pass positioning, eviction and flush entry
//! - Container: measure/layout/draw with a self-sustaining redraw loop
//!
//! # Example
//!
//! ```
//! use ticker_core::prelude::*;
//! use embedded_graphics::{mock_display::MockDisplay, pixelcolor::Gray4, prelude::*};
//!
//! struct Bar;
//!
//! impl Layout for Bar {
//!     fn layout(&self, c: Constraints) -> LayoutResult {
//!         LayoutResult::leaf(c.constrain(Size::new(12, 2)))
//!     }
//! }
//!
//! impl Renderable for Bar {
//!     fn render<D: DrawTarget<Color = Gray4>>(&self, _: &mut D, _: Point) -> Result<(), D::Error> {
//!         Ok(())
//!     }
//! }
//!
//! let mut ticker: Ticker<fn() -> Option<Bar>, 4> = Ticker::new(TickerConfig::new());
//! ticker.measure(Constraints::tight(Size::new(48, 8)));
//! ticker.enqueue(Item::new((|| Some(Bar)) as fn() -> Option<Bar>)).unwrap();
//!
//! let mut display = MockDisplay::new();
//! while ticker.draw(&mut display, Point::zero()).unwrap() == NextFrame::Requested {}
//! assert_eq!(ticker.drain_retired().count(), 1);
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[macro_use]
mod fmt;

pub mod config;
pub mod container;
pub mod error;
pub mod item;
pub mod layout;
mod placement;
pub mod queue;
pub mod render;
pub mod style;

pub use container::{NextFrame, Ticker};
pub use error::{OutOfRangeError, TickerError};

pub mod prelude {
    //! Everything a host needs to build and drive a ticker.

    pub use crate::config::{TickerConfig, Velocity};
    pub use crate::container::{NextFrame, Ticker};
    pub use crate::error::{OutOfRangeError, TickerError};
    pub use crate::item::{Content, ContentSource, Item, ItemId, ItemState};
    pub use crate::layout::{ChildLayout, Constraints, Layout, LayoutResult};
    pub use crate::render::Renderable;
    pub use crate::style::Edges;
}
