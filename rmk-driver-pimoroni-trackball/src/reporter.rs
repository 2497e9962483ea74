//! Delivery strategies of the decoded motion

use crate::event::{EventSink, RelAxis, RelEvent};
use crate::motion::MotionData;

/// Where the motion of a successful sampling cycle goes.
pub trait MotionReporter {
    async fn report(&mut self, motion: MotionData);
}

/// Pushes every nonzero motion to an [`EventSink`] immediately.
pub struct EventReporter<S: EventSink> {
    sink: S,
}

impl<S: EventSink> EventReporter<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&mut self) -> &mut S {
        &mut self.sink
    }
}

impl<S: EventSink> MotionReporter for EventReporter<S> {
    async fn report(&mut self, motion: MotionData) {
        // Keep silent when there's no movement
        if motion.is_zero() {
            return;
        }

        debug!("Movement: x={}, y={}", motion.dx, motion.dy);

        if motion.dx != 0 {
            self.sink.submit(RelEvent::rel(RelAxis::X, motion.dx)).await;
        }
        if motion.dy != 0 {
            self.sink.submit(RelEvent::rel(RelAxis::Y, motion.dy)).await;
        }
        self.sink.submit(RelEvent::SYNC).await;
    }
}

/// Keeps the latest motion for later retrieval, zero motion included.
#[derive(Debug, Clone, Copy, Default)]
pub struct MotionCache {
    motion: MotionData,
}

impl MotionCache {
    pub fn motion(&self) -> MotionData {
        self.motion
    }
}

impl MotionReporter for MotionCache {
    async fn report(&mut self, motion: MotionData) {
        self.motion = motion;
    }
}
