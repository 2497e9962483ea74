//! Common part of both trackball variants

use crate::bus::RegisterBus;
use crate::error::TrackballError;
use crate::motion::{MotionData, read_motion};
use crate::reporter::MotionReporter;

/// Initialization state for the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitState {
    Pending,
    Ready,
    /// The bus wasn't ready, the device stays inert
    Failed,
}

/// Trackball on a register bus, reporting its motion through `R`.
pub struct Trackball<B: RegisterBus, R: MotionReporter> {
    bus: B,
    reporter: R,
    init_state: InitState,
}

impl<B: RegisterBus, R: MotionReporter> Trackball<B, R> {
    pub fn new(bus: B, reporter: R) -> Self {
        Self {
            bus,
            reporter,
            init_state: InitState::Pending,
        }
    }

    pub fn init_state(&self) -> InitState {
        self.init_state
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }

    /// Check the bus once. A failed init is final.
    pub async fn init(&mut self) -> Result<(), TrackballError> {
        match self.init_state {
            InitState::Ready => return Ok(()),
            InitState::Failed => return Err(TrackballError::NotReady),
            InitState::Pending => {}
        }

        if !self.bus.is_ready().await {
            error!("I2C device not ready");
            self.init_state = InitState::Failed;
            return Err(TrackballError::NotReady);
        }

        self.init_state = InitState::Ready;
        Ok(())
    }

    /// Run one sample-decode-report cycle.
    ///
    /// Nothing is reported if any register read fails.
    pub async fn poll(&mut self) -> Result<MotionData, TrackballError> {
        if self.init_state != InitState::Ready {
            return Err(TrackballError::NotReady);
        }
        let motion = read_motion(&mut self.bus).await?;
        self.reporter.report(motion).await;
        Ok(motion)
    }
}
