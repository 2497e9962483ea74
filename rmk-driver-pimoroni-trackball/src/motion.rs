//! Sampling and decoding of the directional counters

use postcard::experimental::max_size::MaxSize;
use serde::{Deserialize, Serialize};

use crate::bus::RegisterBus;
use crate::error::TrackballError;
use crate::registers::Register;

/// Raw values of the four directional counters, read fresh every cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    pub left: u8,
    pub right: u8,
    pub up: u8,
    pub down: u8,
}

/// Relative motion of one sampling cycle
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, MaxSize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionData {
    pub dx: i16,
    pub dy: i16,
}

impl MotionData {
    pub fn is_zero(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

impl From<RawSample> for MotionData {
    fn from(raw: RawSample) -> Self {
        // Widen before subtracting, the result range is [-255, 255]
        Self {
            dx: raw.right as i16 - raw.left as i16,
            dy: raw.down as i16 - raw.up as i16,
        }
    }
}

/// Read the four counters in the order left, right, up, down.
///
/// The first failing read aborts the whole sample, the remaining registers aren't touched.
pub async fn read_raw_sample<B: RegisterBus>(bus: &mut B) -> Result<RawSample, TrackballError> {
    let mut values = [0u8; 4];
    for (value, register) in values.iter_mut().zip(Register::MOTION) {
        *value = read_counter(bus, register).await?;
    }
    let [left, right, up, down] = values;
    Ok(RawSample { left, right, up, down })
}

/// Read and decode one motion sample
pub async fn read_motion<B: RegisterBus>(bus: &mut B) -> Result<MotionData, TrackballError> {
    read_raw_sample(bus).await.map(MotionData::from)
}

async fn read_counter<B: RegisterBus>(bus: &mut B, register: Register) -> Result<u8, TrackballError> {
    bus.read_register(register.addr()).await.map_err(|kind| {
        error!("Failed to read {:?} register: {:?}", register, kind);
        TrackballError::RegisterRead { register, kind }
    })
}
