//! Ticker Item Components
//!
//! Content for ticker items, built on the ticker-core layout primitives.
//!
//! # Components
//!
//! - `Label` - Single line of text with an optional trailing icon
//! - `Icon` - Small primitive-drawn glyph
//! - `LabelSource` - Lazy label producer, the usual ticker item source
//!
//! # Example
//!
//! ```
//! use ticker_components::prelude::*;
//! use ticker_core::prelude::*;
//!
//! let mut ticker: Ticker<LabelSource> = Ticker::new(TickerConfig::new());
//! let item = Item::new(
//!     LabelSource::new("text42").trailing_icon(Icon::new(IconType::Bullet, 10)),
//! );
//! ticker.enqueue(item).unwrap();
//! assert_eq!(ticker.child_count(), 1);
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod icon;
pub mod label;
pub mod source;

pub mod prelude {
    //! Component re-exports.

    pub use crate::icon::*;
    pub use crate::label::*;
    pub use crate::source::*;
}
