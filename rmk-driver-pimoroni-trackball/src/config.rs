use embassy_time::Duration;
use serde::Deserialize;

use crate::registers::DEFAULT_ADDRESS;

const fn default_address() -> u8 {
    DEFAULT_ADDRESS
}

const fn default_poll_period_ms() -> u64 {
    10
}

/// Configuration of the event-emitting trackball
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(deny_unknown_fields)]
pub struct TrackballConfig {
    /// I2C address of the trackball
    #[serde(default = "default_address")]
    pub address: u8,
    /// Poll period in milliseconds
    #[serde(default = "default_poll_period_ms")]
    pub poll_period_ms: u64,
}

impl Default for TrackballConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            poll_period_ms: default_poll_period_ms(),
        }
    }
}

impl TrackballConfig {
    /// Poll interval of the timer, at least 1ms
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_period_ms.max(1))
    }
}

/// Configuration of the trackball used as a polled sensor.
///
/// There's no poll period, the sensor is sampled on demand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(deny_unknown_fields)]
pub struct SensorConfig {
    #[serde(default = "default_address")]
    pub address: u8,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
        }
    }
}
