//! Random item feed.
//!
//! Emits one label right away, then another after a random pause of
//! `0..=max_delay` frames, forever. Labels read `text<number>`, use a random
//! text size and end with a random icon.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ticker_components::prelude::*;

/// Requested text sizes, in pixels.
const TEXT_PX: core::ops::Range<u32> = 10..20;

/// Seeded source of labels on a random schedule.
pub struct Feed {
    rng: StdRng,
    max_delay: u32,
    countdown: u32,
}

impl Feed {
    /// Deterministic feed for `seed`.
    pub fn new(seed: u64, max_delay: u32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            max_delay,
            countdown: 0,
        }
    }

    /// Advance one frame; returns a label when one is due.
    pub fn tick(&mut self) -> Option<LabelSource> {
        if self.countdown > 0 {
            self.countdown = self.countdown.saturating_sub(1);
            return None;
        }
        self.countdown = self.rng.random_range(0..=self.max_delay);
        Some(self.next_label())
    }

    fn next_label(&mut self) -> LabelSource {
        let number: u32 = self.rng.random();
        let size = TextSize::from_px(self.rng.random_range(TEXT_PX));
        let shape = IconType::ALL
            .get(self.rng.random_range(0..IconType::ALL.len()))
            .copied()
            .unwrap_or(IconType::Bullet);

        LabelSource::new(&format!("text{number}"))
            .size(size)
            .trailing_icon(Icon::new(shape, size.line_height()))
    }
}
