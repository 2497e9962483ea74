//! # Pimoroni trackball driver for RMK
//!
//! Driver of the Pimoroni trackball breakout, which is read over I2C.
//!
//! The trackball can be used in two ways:
//! - [`TrackballInputDevice`] polls the trackball periodically and pushes relative motion events,
//!   X, then Y, then a sync marker, to an [`EventSink`].
//! - [`TrackballSensor`] is sampled on demand with [`TrackballSensor::sample_fetch`] and keeps
//!   the last motion for [`TrackballSensor::channel_get`].
//!
//! Both share the same sampling and decoding, see [`motion`].
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![cfg_attr(not(test), no_std)]
#![allow(async_fn_in_trait)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod bus;
pub mod channel;
pub mod config;
pub mod device;
pub mod error;
pub mod event;
pub mod input_device;
pub mod motion;
pub mod registers;
pub mod reporter;
pub mod sensor;
pub mod work;

pub use bus::{I2cRegisterBus, RegisterBus};
pub use config::{SensorConfig, TrackballConfig};
pub use error::TrackballError;
pub use event::{EventSink, RelAxis, RelEvent};
pub use input_device::TrackballInputDevice;
pub use motion::MotionData;
pub use sensor::{SensorChannel, SensorValue, TrackballSensor};
pub use work::PollContext;
pub use {embassy_futures, embassy_sync};

/// Raw mutex used by the statics of the driver
pub type RawMutex = embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

/// Capacity of [`channel::TRACKBALL_EVENT_CHANNEL`], one report is at most 3 events
pub const EVENT_CHANNEL_SIZE: usize = 16;
