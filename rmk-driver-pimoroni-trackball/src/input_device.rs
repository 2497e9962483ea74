//! Trackball as an event-emitting input device
//!
//! ```ignore
//! static POLL: PollContext = PollContext::new();
//!
//! let bus = I2cRegisterBus::new(i2c, config.address);
//! let mut trackball = TrackballInputDevice::new(bus, TRACKBALL_EVENT_CHANNEL.sender(), config, &POLL);
//! trackball.run().await?;
//! ```

use embassy_futures::join::join;
use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::bus::RegisterBus;
use crate::config::TrackballConfig;
use crate::device::{InitState, Trackball};
use crate::error::TrackballError;
use crate::event::EventSink;
use crate::reporter::EventReporter;
use crate::work::PollContext;

/// Trackball which polls itself and pushes relative motion events to `S`
pub struct TrackballInputDevice<'a, B: RegisterBus, S: EventSink, M: RawMutex = crate::RawMutex> {
    trackball: Trackball<B, EventReporter<S>>,
    config: TrackballConfig,
    ctx: &'a PollContext<M>,
}

impl<'a, B: RegisterBus, S: EventSink, M: RawMutex> TrackballInputDevice<'a, B, S, M> {
    pub fn new(bus: B, sink: S, config: TrackballConfig, ctx: &'a PollContext<M>) -> Self {
        Self {
            trackball: Trackball::new(bus, EventReporter::new(sink)),
            config,
            ctx,
        }
    }

    pub fn config(&self) -> &TrackballConfig {
        &self.config
    }

    pub fn init_state(&self) -> InitState {
        self.trackball.init_state()
    }

    pub fn sink(&mut self) -> &mut S {
        self.trackball.reporter_mut().sink()
    }

    pub async fn init(&mut self) -> Result<(), TrackballError> {
        if self.trackball.init_state() == InitState::Ready {
            return Ok(());
        }
        self.trackball.init().await?;
        info!(
            "Pimoroni trackball initialized (poll period: {} ms)",
            self.config.poll_period_ms
        );
        Ok(())
    }

    /// Initialize the trackball, then poll it until [`Self::stop`] is called.
    ///
    /// Nothing is armed if the bus isn't ready.
    pub async fn run(&mut self) -> Result<(), TrackballError> {
        self.init().await?;

        let Self { trackball, config, ctx } = self;
        let ctx: &PollContext<M> = ctx;

        let timer = ctx.timer().run(config.poll_interval(), ctx.work());
        let worker = async {
            while ctx.work().wait().await {
                process_cycle(trackball).await;
            }
        };
        join(timer, worker).await;
        Ok(())
    }

    /// Stop the poll timer, the queued cycle is still processed
    pub fn stop(&self) {
        self.ctx.stop();
    }

    /// Run a single sampling cycle
    pub async fn poll_once(&mut self) {
        process_cycle(&mut self.trackball).await;
    }
}

async fn process_cycle<B: RegisterBus, S: EventSink>(trackball: &mut Trackball<B, EventReporter<S>>) {
    // Errors end the cycle only, the next firing is the retry
    if let Err(e) = trackball.poll().await {
        warn!("Trackball cycle skipped: {:?}", e);
    }
}
