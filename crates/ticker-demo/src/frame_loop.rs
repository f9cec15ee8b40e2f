//! Host frame loop: feed, measure when asked, draw.

use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use ticker_components::prelude::*;
use ticker_core::prelude::*;
use tracing::{debug, info, warn};

use crate::feed::Feed;
use crate::framebuffer::Framebuffer;

/// Admission queue capacity of the demo ticker.
pub const QUEUE_CAPACITY: usize = 16;

/// The ticker type the demo drives.
pub type DemoTicker = Ticker<LabelSource, QUEUE_CAPACITY>;

/// Running totals.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    /// Frames drawn.
    pub frames: u64,
    /// Frames after which the ticker asked for another one.
    pub active_frames: u64,
    /// Labels accepted by the ticker.
    pub enqueued: u64,
    /// Labels rejected because the queue was full.
    pub rejected: u64,
    /// Labels that scrolled all the way out.
    pub retired: u64,
}

/// Ties a ticker, its framebuffer and the feed together.
pub struct FrameLoop {
    ticker: DemoTicker,
    framebuffer: Framebuffer,
    feed: Feed,
    stats: FrameStats,
}

impl FrameLoop {
    /// Ticker filling a `framebuffer`-sized area.
    pub fn new(config: TickerConfig, framebuffer: Framebuffer, feed: Feed) -> Self {
        let mut ticker = DemoTicker::new(config);
        let size = ticker.measure(Constraints::tight(framebuffer.size()));
        info!("ticker measured at {}x{}", size.width, size.height);
        Self {
            ticker,
            framebuffer,
            feed,
            stats: FrameStats::default(),
        }
    }

    /// Run one frame.
    pub fn step(&mut self) -> NextFrame {
        if let Some(source) = self.feed.tick() {
            match self.ticker.enqueue(Item::new(source)) {
                Ok(id) => {
                    self.stats.enqueued = self.stats.enqueued.saturating_add(1);
                    debug!(item = id.get(), queued = self.ticker.queued_len(), "enqueued");
                }
                Err(err) => {
                    self.stats.rejected = self.stats.rejected.saturating_add(1);
                    warn!(%err, "label rejected");
                }
            }
        }

        if self.ticker.take_layout_request() {
            self.ticker
                .measure(Constraints::tight(self.framebuffer.size()));
        }

        let next = match self.ticker.draw(&mut self.framebuffer, Point::zero()) {
            Ok(next) => next,
            Err(never) => match never {},
        };
        self.stats.frames = self.stats.frames.saturating_add(1);
        if next == NextFrame::Requested {
            self.stats.active_frames = self.stats.active_frames.saturating_add(1);
        }

        for item in self.ticker.drain_retired() {
            self.stats.retired = self.stats.retired.saturating_add(1);
            if let Some(label) = item.into_content() {
                debug!(text = label.text(), "retired");
            }
        }
        next
    }

    /// Totals so far.
    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// The ticker being driven.
    pub fn ticker(&self) -> &DemoTicker {
        &self.ticker
    }

    /// The last drawn frame.
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }
}

/// Default demo configuration: white background, 2 px vertical padding.
pub fn demo_config(velocity: Velocity, divider: u32) -> TickerConfig {
    TickerConfig::new()
        .velocity(velocity)
        .divider_size(divider)
        .padding(Edges::horizontal_vertical(0, 2))
        .background(Gray4::WHITE)
}
