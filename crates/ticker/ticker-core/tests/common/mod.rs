//! Shared fixtures for the ticker integration tests.

#![allow(dead_code, clippy::unwrap_used, clippy::panic, clippy::arithmetic_side_effects)]

use std::cell::Cell;
use std::rc::Rc;

use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use ticker_core::prelude::*;
use ticker_core::render::render_background;

/// Solid block of a fixed natural size.
pub struct Block(pub Size);

impl Layout for Block {
    fn layout(&self, constraints: Constraints) -> LayoutResult {
        LayoutResult::leaf(constraints.constrain(self.0))
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

/// Source that counts how often it is asked for content.
pub struct Tracked {
    size: Size,
    available: bool,
    calls: Rc<Cell<u32>>,
}

impl Tracked {
    pub fn new(width: u32, height: u32) -> (Self, Rc<Cell<u32>>) {
        Self::with_availability(width, height, true)
    }

    pub fn unavailable(width: u32, height: u32) -> (Self, Rc<Cell<u32>>) {
        Self::with_availability(width, height, false)
    }

    pub fn with_availability(width: u32, height: u32, available: bool) -> (Self, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        let source = Self {
            size: Size::new(width, height),
            available,
            calls: calls.clone(),
        };
        (source, calls)
    }
}

impl ContentSource for Tracked {
    type Content = Block;

    fn produce(self) -> Option<Block> {
        self.calls.set(self.calls.get() + 1);
        self.available.then_some(Block(self.size))
    }
}

pub type TestTicker = Ticker<Tracked, 16>;

/// Ticker measured to exactly `width` x `height`.
pub fn ticker(width: u32, height: u32, config: TickerConfig) -> TestTicker {
    let mut ticker = Ticker::new(config);
    ticker.measure(Constraints::tight(Size::new(width, height)));
    ticker
}

/// Enqueue an available item of the given size.
pub fn push(ticker: &mut TestTicker, width: u32, height: u32) -> ItemId {
    let (source, _) = Tracked::new(width, height);
    ticker.enqueue(Item::new(source)).unwrap()
}

/// Run layout passes until `done` holds, returning how many passes ran.
pub fn run_until(ticker: &mut TestTicker, limit: usize, mut done: impl FnMut(&TestTicker) -> bool) -> usize {
    for pass in 1..=limit {
        ticker.layout();
        if done(ticker) {
            return pass;
        }
    }
    panic!("condition not reached within {limit} passes");
}
