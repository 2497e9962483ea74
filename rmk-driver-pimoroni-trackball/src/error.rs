use embedded_hal::i2c::ErrorKind;

use crate::registers::Register;
use crate::sensor::SensorChannel;

/// Errors of the trackball driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TrackballError {
    /// The bus wasn't ready at init, or the init has failed before
    NotReady,
    /// Reading a directional register failed, the whole sampling cycle is dropped
    RegisterRead { register: Register, kind: ErrorKind },
    /// The requested sensor channel isn't provided by the trackball
    UnsupportedChannel(SensorChannel),
}

impl core::fmt::Display for TrackballError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TrackballError::NotReady => write!(f, "trackball bus is not ready"),
            TrackballError::RegisterRead { register, kind } => {
                write!(f, "failed to read {:?} register: {:?}", register, kind)
            }
            TrackballError::UnsupportedChannel(channel) => write!(f, "unsupported sensor channel {:?}", channel),
        }
    }
}

impl core::error::Error for TrackballError {}
