//! Relative motion events of the trackball
//!
//! One motion report is framed as: an optional X event, an optional Y event, then a sync event
//! which marks the end of the report.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel;
use postcard::experimental::max_size::MaxSize;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, MaxSize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RelAxis {
    X,
    Y,
}

/// A relative axis event
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, MaxSize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RelEvent {
    pub axis: RelAxis,
    pub value: i16,
    /// The event terminates the current report
    pub sync: bool,
}

impl RelEvent {
    /// Sync marker, it's carried on the X axis with value 0
    pub const SYNC: RelEvent = RelEvent {
        axis: RelAxis::X,
        value: 0,
        sync: true,
    };

    pub const fn rel(axis: RelAxis, value: i16) -> Self {
        Self {
            axis,
            value,
            sync: false,
        }
    }
}

/// Consumer of the relative motion events.
///
/// `submit` may wait until the consumer has room for the event.
pub trait EventSink {
    async fn submit(&mut self, event: RelEvent);
}

impl<S: EventSink> EventSink for &mut S {
    async fn submit(&mut self, event: RelEvent) {
        S::submit(self, event).await
    }
}

impl<'a, M: RawMutex, const N: usize> EventSink for channel::Sender<'a, M, RelEvent, N> {
    async fn submit(&mut self, event: RelEvent) {
        channel::Sender::send(self, event).await
    }
}

impl<'a> EventSink for channel::DynamicSender<'a, RelEvent> {
    async fn submit(&mut self, event: RelEvent) {
        channel::DynamicSender::send(self, event).await
    }
}
