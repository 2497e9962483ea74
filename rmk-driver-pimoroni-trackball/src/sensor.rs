//! Trackball as a polled sensor
//!
//! `sample_fetch` reads the trackball and caches the motion, `channel_get` only reads the cache.

use crate::bus::RegisterBus;
use crate::device::{InitState, Trackball};
use crate::error::TrackballError;
use crate::motion::MotionData;
use crate::reporter::MotionCache;

/// Sensor channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorChannel {
    /// Position change on the X axis
    PosDx,
    /// Position change on the Y axis
    PosDy,
    /// Position change on the Z axis
    PosDz,
    /// All channels
    All,
}

/// Value of a sensor channel, `val1` is the integer part and `val2` the fractional part in
/// millionths
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorValue {
    pub val1: i32,
    pub val2: i32,
}

impl From<i16> for SensorValue {
    fn from(value: i16) -> Self {
        Self {
            val1: value as i32,
            val2: 0,
        }
    }
}

/// Trackball sampled on demand
pub struct TrackballSensor<B: RegisterBus> {
    trackball: Trackball<B, MotionCache>,
}

impl<B: RegisterBus> TrackballSensor<B> {
    pub fn new(bus: B) -> Self {
        Self {
            trackball: Trackball::new(bus, MotionCache::default()),
        }
    }

    pub fn init_state(&self) -> InitState {
        self.trackball.init_state()
    }

    pub async fn init(&mut self) -> Result<(), TrackballError> {
        if self.trackball.init_state() == InitState::Ready {
            return Ok(());
        }
        self.trackball.init().await?;
        info!("Pimoroni trackball initialized");
        Ok(())
    }

    /// Read the trackball and cache the motion.
    ///
    /// The trackball always refreshes both axes, so `_channel` doesn't narrow the read. On error
    /// the previously cached motion is kept.
    pub async fn sample_fetch(&mut self, _channel: SensorChannel) -> Result<(), TrackballError> {
        self.trackball.poll().await.map(|_| ())
    }

    /// Get the cached value of `channel`, no I/O is done.
    pub fn channel_get(&self, channel: SensorChannel) -> Result<SensorValue, TrackballError> {
        let motion = self.motion();
        match channel {
            SensorChannel::PosDx => Ok(motion.dx.into()),
            SensorChannel::PosDy => Ok(motion.dy.into()),
            _ => Err(TrackballError::UnsupportedChannel(channel)),
        }
    }

    /// Motion of the last successful fetch
    pub fn motion(&self) -> MotionData {
        self.trackball.reporter().motion()
    }
}
