//! Exposed channels which can be used to pass trackball events to the processors

use embassy_sync::channel::Channel;
pub use embassy_sync::{blocking_mutex, channel};

use crate::event::RelEvent;
use crate::{EVENT_CHANNEL_SIZE, RawMutex};

/// Channel for relative motion events of the trackball
pub static TRACKBALL_EVENT_CHANNEL: Channel<RawMutex, RelEvent, EVENT_CHANNEL_SIZE> = Channel::new();
