//! Periodic trigger and deferred work of the polling trackball
//!
//! The [`PollTimer`] only submits the [`WorkItem`], it never touches the bus. The bus I/O runs
//! wherever the work item is waited on. At most one work item is queued per device, submitting
//! while it's still queued is absorbed.

use embassy_futures::select::{Either, select};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker};

/// Single-slot work queue
pub struct WorkItem<M: RawMutex> {
    queue: Channel<M, (), 1>,
    closed: Signal<M, ()>,
}

impl<M: RawMutex> WorkItem<M> {
    pub const fn new() -> Self {
        Self {
            queue: Channel::new(),
            closed: Signal::new(),
        }
    }

    /// Queue the work, never blocks.
    ///
    /// Returns `false` if the work was already queued, in which case the submission is absorbed.
    pub fn submit(&self) -> bool {
        self.queue.try_send(()).is_ok()
    }

    pub fn is_pending(&self) -> bool {
        !self.queue.is_empty()
    }

    /// No more submissions will come. Queued work is still delivered.
    pub fn close(&self) {
        self.closed.signal(());
    }

    /// Wait for the next queued work.
    ///
    /// Returns `false` once the work item is closed and nothing is queued anymore.
    pub async fn wait(&self) -> bool {
        match select(self.queue.receive(), self.closed.wait()).await {
            Either::First(()) => true,
            Either::Second(()) => {
                // Submitted right before closing
                self.queue.try_receive().is_ok()
            }
        }
    }
}

impl<M: RawMutex> Default for WorkItem<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Periodic trigger of a [`WorkItem`]
pub struct PollTimer<M: RawMutex> {
    stop: Signal<M, ()>,
}

impl<M: RawMutex> PollTimer<M> {
    pub const fn new() -> Self {
        Self { stop: Signal::new() }
    }

    /// Fire immediately, then once every `period` until stopped.
    ///
    /// When stopped, `work` is closed.
    pub async fn run(&self, period: Duration, work: &WorkItem<M>) {
        let mut ticker = Ticker::every(period);
        loop {
            if !work.submit() {
                trace!("Trackball work still queued, firing absorbed");
            }

            if let Either::Second(()) = select(ticker.next(), self.stop.wait()).await {
                info!("Trackball poll timer stopped");
                work.close();
                return;
            }
        }
    }

    /// Stop firing, can be called from any context
    pub fn stop(&self) {
        self.stop.signal(());
    }
}

impl<M: RawMutex> Default for PollTimer<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Timer and work item of one polling trackball.
///
/// It lives outside of the device, usually in a `static`, so that the device can be stopped
/// from anywhere while it's running.
pub struct PollContext<M: RawMutex = crate::RawMutex> {
    timer: PollTimer<M>,
    work: WorkItem<M>,
}

impl<M: RawMutex> PollContext<M> {
    pub const fn new() -> Self {
        Self {
            timer: PollTimer::new(),
            work: WorkItem::new(),
        }
    }

    pub fn timer(&self) -> &PollTimer<M> {
        &self.timer
    }

    pub fn work(&self) -> &WorkItem<M> {
        &self.work
    }

    /// Stop the timer. Work which is already queued still runs.
    pub fn stop(&self) {
        self.timer.stop();
    }
}

impl<M: RawMutex> Default for PollContext<M> {
    fn default() -> Self {
        Self::new()
    }
}
