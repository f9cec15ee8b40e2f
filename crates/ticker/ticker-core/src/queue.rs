//! FIFO of items waiting for a visible slot.

use crate::error::TickerError;
use crate::item::{ContentSource, Item, ItemId, ItemState};
use heapless::Deque;

/// Strict FIFO of items not yet admitted into the visible area.
///
/// Insertion order is admission order. The queue exclusively owns its items
/// until [`dequeue_next`](Self::dequeue_next) hands one to the ticker.
pub struct AdmissionQueue<S: ContentSource, const N: usize> {
    items: Deque<Item<S>, N>,
}

impl<S: ContentSource, const N: usize> AdmissionQueue<S, N> {
    /// Create an empty queue.
    pub const fn new() -> Self {
        Self {
            items: Deque::new(),
        }
    }

    /// Append `item`.
    ///
    /// # Errors
    ///
    /// - [`TickerError::InvalidItem`] if the item is not in the `Queuing`
    ///   state
    /// - [`TickerError::QueueFull`] if the queue is at capacity
    ///
    /// The queue is unchanged on error.
    pub fn push(&mut self, item: Item<S>) -> Result<ItemId, TickerError> {
        let id = item.id();
        if item.state() != ItemState::Queuing {
            return Err(TickerError::InvalidItem(id));
        }
        self.items.push_back(item).map_err(|_| {
            warn!("admission queue full, rejected item {}", id.get());
            TickerError::QueueFull
        })?;
        Ok(id)
    }

    /// Pop the head.
    ///
    /// Returns `None` when empty, and also when the head is no longer
    /// `Queuing`; such a head is discarded.
    pub fn dequeue_next(&mut self) -> Option<Item<S>> {
        let item = self.items.pop_front()?;
        if item.state() != ItemState::Queuing {
            warn!("dropping queue head {} in a non-queuing state", item.id().get());
            return None;
        }
        Some(item)
    }

    /// Number of waiting items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no item is waiting.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether `id` is waiting in this queue.
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }
}

impl<S: ContentSource, const N: usize> Default for AdmissionQueue<S, N> {
    fn default() -> Self {
        Self::new()
    }
}
