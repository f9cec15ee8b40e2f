//! Property-based tests for the ticker pipeline.
//! Drives random feeds through a full lifecycle and checks the invariants
//! that must hold on every pass, not just for hand-picked widths.

#![allow(
    clippy::unwrap_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects
)]

mod common;

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use common::{TestTicker, Tracked};
use embedded_graphics::prelude::Size;
use proptest::prelude::*;
use ticker_core::prelude::*;

const WIDTH: u32 = 60;
const VISIBLE: i32 = 60;
const HEIGHT: u32 = 10;
const PASS_LIMIT: usize = 20_000;

struct Feed {
    ticker: TestTicker,
    ids: Vec<ItemId>,
    calls: Vec<Rc<Cell<u32>>>,
    available: Vec<bool>,
}

fn feed(items: &[(u32, bool)], velocity: u32, divider: u32) -> Feed {
    let config = TickerConfig::new()
        .velocity(Velocity::new(velocity).unwrap())
        .divider_size(divider);
    let mut ticker = TestTicker::new(config);
    ticker.measure(Constraints::tight(Size::new(WIDTH, HEIGHT)));

    let mut ids = Vec::new();
    let mut calls = Vec::new();
    let mut available = Vec::new();
    for &(width, is_available) in items {
        let (source, counter) = Tracked::with_availability(width, HEIGHT, is_available);
        ids.push(ticker.enqueue(Item::new(source)).unwrap());
        calls.push(counter);
        available.push(is_available);
    }
    Feed {
        ticker,
        ids,
        calls,
        available,
    }
}

/// Last state seen for every known id, `Removed` once drained.
fn observe(ticker: &mut TestTicker, ids: &[ItemId], seen: &mut HashMap<ItemId, ItemState>) {
    let retired: Vec<ItemId> = ticker.drain_retired().map(|item| item.id()).collect();
    for &id in ids {
        let now = if retired.contains(&id) {
            Some(ItemState::Removed)
        } else {
            ticker.state_of(id)
        };
        let Some(now) = now else { continue };
        if let Some(before) = seen.insert(id, now) {
            assert!(
                before <= now,
                "item {id} went from {before:?} back to {now:?}"
            );
        }
    }
}

fn items() -> impl Strategy<Value = Vec<(u32, bool)>> {
    proptest::collection::vec((1u32..40, proptest::bool::weighted(0.8)), 1..8)
}

proptest! {
    /// Items start displaying in the order they were enqueued.
    #[test]
    fn displaying_order_is_fifo(items in items(), velocity in 1u32..8, divider in 0u32..12) {
        let Feed { mut ticker, ids, available, .. } = feed(&items, velocity, divider);
        let mut order = Vec::new();

        for _ in 0..PASS_LIMIT {
            ticker.layout();
            for (item, _) in ticker.children() {
                if item.state() == ItemState::Displaying && !order.contains(&item.id()) {
                    order.push(item.id());
                }
            }
            ticker.drain_retired().for_each(drop);
            if ticker.child_count() == 0 && ticker.queued_len() == 0 {
                break;
            }
        }

        let expected: Vec<ItemId> = ids
            .iter()
            .zip(&available)
            .filter(|(_, available)| **available)
            .map(|(id, _)| *id)
            .collect();
        prop_assert_eq!(order, expected);
    }

    /// No item ever moves back to an earlier state.
    #[test]
    fn states_only_move_forward(items in items(), velocity in 1u32..8, divider in 0u32..12) {
        let Feed { mut ticker, ids, available, .. } = feed(&items, velocity, divider);
        let mut seen = HashMap::new();
        observe(&mut ticker, &ids, &mut seen);

        for _ in 0..PASS_LIMIT {
            ticker.layout();
            observe(&mut ticker, &ids, &mut seen);
            if ticker.child_count() == 0 && ticker.queued_len() == 0 {
                break;
            }
        }

        for (id, available) in ids.iter().zip(&available) {
            if *available {
                prop_assert_eq!(seen.get(id), Some(&ItemState::Removed));
            }
        }
    }

    /// Content is produced exactly once per item that reached admission.
    #[test]
    fn content_produced_once(items in items(), velocity in 1u32..8, divider in 0u32..12) {
        let Feed { mut ticker, calls, .. } = feed(&items, velocity, divider);

        for _ in 0..PASS_LIMIT {
            ticker.layout();
            ticker.drain_retired().for_each(drop);
            for counter in &calls {
                prop_assert!(counter.get() <= 1);
            }
            if ticker.child_count() == 0 && ticker.queued_len() == 0 {
                break;
            }
        }

        for counter in &calls {
            prop_assert_eq!(counter.get(), 1);
        }
    }

    /// On its first placement an item is either off-screen right or flush
    /// with the right edge.
    #[test]
    fn first_placement_is_never_partial(items in items(), velocity in 1u32..8, divider in 0u32..12) {
        let Feed { mut ticker, .. } = feed(&items, velocity, divider);

        for _ in 0..PASS_LIMIT {
            let fresh: Vec<ItemId> = ticker
                .children()
                .filter(|(item, _)| item.state() == ItemState::New)
                .map(|(item, _)| item.id())
                .collect();
            ticker.layout();
            for id in fresh {
                if let Some(bounds) = ticker.bounds_of(id) {
                    prop_assert!(
                        bounds.left() >= VISIBLE,
                        "item {} entered at {}", id, bounds.left()
                    );
                }
            }
            ticker.drain_retired().for_each(drop);
            if ticker.child_count() == 0 && ticker.queued_len() == 0 {
                break;
            }
        }
    }

    /// A pass that ends with room on the right admits exactly one queued item.
    #[test]
    fn room_on_the_right_admits_one(widths in proptest::collection::vec(1u32..40, 1..8), velocity in 1u32..8, divider in 0u32..12) {
        let items: Vec<(u32, bool)> = widths.into_iter().map(|w| (w, true)).collect();
        let Feed { mut ticker, .. } = feed(&items, velocity, divider);

        for _ in 0..PASS_LIMIT {
            let queued = ticker.queued_len();
            ticker.layout();

            let trailing = ticker
                .children()
                .filter(|(item, _)| item.state() == ItemState::Displaying)
                .map(|(_, bounds)| bounds.right())
                .last();
            let has_room = trailing.map_or(true, |right| right <= VISIBLE);
            let expected = if has_room && queued > 0 { queued - 1 } else { queued };
            prop_assert_eq!(ticker.queued_len(), expected);

            ticker.drain_retired().for_each(drop);
            if ticker.child_count() == 0 && ticker.queued_len() == 0 {
                break;
            }
        }
    }
}
