//! Error types returned by the ticker's public API.
//!
//! Only the inbound edge (`enqueue`, configuration) can fail. The steady-state
//! layout/draw loop degrades every anomaly to "skip this item" and never
//! returns one of these.

use crate::item::ItemId;

/// Error returned when a value is out of the valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutOfRangeError {
    /// The value that was out of range.
    pub value: u32,
    /// The inclusive minimum allowed value.
    pub min: u32,
    /// The inclusive maximum allowed value.
    pub max: u32,
}

impl core::fmt::Display for OutOfRangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "value {} outside valid range {}..={}",
            self.value, self.min, self.max
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OutOfRangeError {}

/// Rejections reported synchronously by [`Ticker::enqueue`](crate::Ticker::enqueue).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::module_name_repetitions)]
pub enum TickerError {
    /// The item has already left the `Queuing` state (for example a retired
    /// item handed back after eviction) and cannot re-enter the pipeline.
    InvalidItem(ItemId),
    /// The admission queue is at capacity.
    QueueFull,
}

impl core::fmt::Display for TickerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidItem(id) => write!(f, "item {id} is not in the queuing state"),
            Self::QueueFull => write!(f, "admission queue is full"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TickerError {}
