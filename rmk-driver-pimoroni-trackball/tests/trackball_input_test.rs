mod common;

use embassy_futures::block_on;
use embassy_futures::join::join;
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::Channel;
use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::i2c::Mock as I2cMock;
use rmk_driver_pimoroni_trackball::channel::TRACKBALL_EVENT_CHANNEL;
use rmk_driver_pimoroni_trackball::device::InitState;
use rmk_driver_pimoroni_trackball::motion::read_motion;
use rmk_driver_pimoroni_trackball::registers::Register;
use rmk_driver_pimoroni_trackball::{
    I2cRegisterBus, PollContext, RegisterBus, RelAxis, RelEvent, TrackballConfig, TrackballError,
    TrackballInputDevice,
};

use crate::common::*;

type TestChannel = Channel<NoopRawMutex, RelEvent, 8>;

fn drain(channel: &TestChannel) -> Vec<RelEvent> {
    let mut events = Vec::new();
    while let Ok(e) = channel.try_receive() {
        events.push(e);
    }
    events
}

#[test]
fn test_run_fires_immediately_then_stops() {
    let expectations = [vec![probe()], sample(10, 13, 7, 7)].concat();
    let mut i2c = I2cMock::new(&expectations);

    let channel: TestChannel = Channel::new();
    let ctx: PollContext<NoopRawMutex> = PollContext::new();
    let mut device = TrackballInputDevice::new(
        I2cRegisterBus::new(i2c.clone(), ADDR),
        channel.sender(),
        TrackballConfig::default(),
        &ctx,
    );

    let (result, events) = block_on(join(device.run(), async {
        let x = channel.receive().await;
        let sync = channel.receive().await;
        ctx.stop();
        [x, sync]
    }));

    assert_eq!(result, Ok(()));
    assert_eq!(events, [RelEvent::rel(RelAxis::X, 3), RelEvent::SYNC]);
    assert_eq!(device.init_state(), InitState::Ready);
    assert!(drain(&channel).is_empty());
    assert!(!ctx.work().is_pending());
    i2c.done();
}

#[test]
fn test_not_ready_bus_arms_no_timer() {
    let expectations = [probe_nack()];
    let mut i2c = I2cMock::new(&expectations);

    let channel: TestChannel = Channel::new();
    let ctx: PollContext<NoopRawMutex> = PollContext::new();
    let mut device = TrackballInputDevice::new(
        I2cRegisterBus::new(i2c.clone(), ADDR),
        channel.sender(),
        TrackballConfig::default(),
        &ctx,
    );

    assert_eq!(block_on(device.run()), Err(TrackballError::NotReady));
    assert_eq!(device.init_state(), InitState::Failed);
    assert!(!ctx.work().is_pending());

    // The bus isn't probed again
    assert_eq!(block_on(device.run()), Err(TrackballError::NotReady));
    assert!(drain(&channel).is_empty());
    i2c.done();
}

#[test]
fn test_no_motion_is_silent() {
    let expectations = [vec![probe()], sample(5, 5, 5, 5)].concat();
    let mut i2c = I2cMock::new(&expectations);

    let channel: TestChannel = Channel::new();
    let ctx: PollContext<NoopRawMutex> = PollContext::new();
    let mut device = TrackballInputDevice::new(
        I2cRegisterBus::new(i2c.clone(), ADDR),
        channel.sender(),
        TrackballConfig::default(),
        &ctx,
    );

    block_on(async {
        device.init().await.unwrap();
        device.poll_once().await;
    });

    assert!(drain(&channel).is_empty());
    i2c.done();
}

#[test]
fn test_both_axes_with_wide_delta() {
    let expectations = [vec![probe()], sample(250, 2, 9, 0)].concat();
    let mut i2c = I2cMock::new(&expectations);

    let channel: TestChannel = Channel::new();
    let ctx: PollContext<NoopRawMutex> = PollContext::new();
    let mut device = TrackballInputDevice::new(
        I2cRegisterBus::new(i2c.clone(), ADDR),
        channel.sender(),
        TrackballConfig::default(),
        &ctx,
    );

    block_on(async {
        device.init().await.unwrap();
        device.poll_once().await;
    });

    assert_eq!(
        drain(&channel),
        [
            RelEvent::rel(RelAxis::X, -248),
            RelEvent::rel(RelAxis::Y, -9),
            RelEvent::SYNC
        ]
    );
    i2c.done();
}

#[test]
fn test_read_error_skips_cycle_and_recovers() {
    let expectations = [
        vec![probe(), read(Register::Left, 10), read_error(Register::Right)],
        sample(0, 0, 4, 6),
    ]
    .concat();
    let mut i2c = I2cMock::new(&expectations);

    let channel: TestChannel = Channel::new();
    let ctx: PollContext<NoopRawMutex> = PollContext::new();
    let mut device = TrackballInputDevice::new(
        I2cRegisterBus::new(i2c.clone(), ADDR),
        channel.sender(),
        TrackballConfig::default(),
        &ctx,
    );

    block_on(device.init()).unwrap();

    // Up and down aren't read after the failure
    block_on(device.poll_once());
    assert!(drain(&channel).is_empty());

    block_on(device.poll_once());
    assert_eq!(drain(&channel), [RelEvent::rel(RelAxis::Y, 2), RelEvent::SYNC]);
    i2c.done();
}

#[test]
fn test_register_error_kind_is_kept() {
    let expectations = [probe(), read_error(Register::Left)];
    let mut i2c = I2cMock::new(&expectations);

    let mut bus = I2cRegisterBus::new(i2c.clone(), ADDR);
    block_on(async {
        assert!(bus.is_ready().await);
        let result = read_motion(&mut bus).await;
        assert_eq!(
            result,
            Err(TrackballError::RegisterRead {
                register: Register::Left,
                kind: ErrorKind::Other
            })
        );
    });
    i2c.done();
}

#[test]
fn test_static_event_channel() {
    let expectations = [vec![probe()], sample(0, 1, 0, 0)].concat();
    let mut i2c = I2cMock::new(&expectations);

    let ctx: PollContext = PollContext::new();
    let mut device = TrackballInputDevice::new(
        I2cRegisterBus::new(i2c.clone(), ADDR),
        TRACKBALL_EVENT_CHANNEL.sender(),
        TrackballConfig::default(),
        &ctx,
    );

    TRACKBALL_EVENT_CHANNEL.clear();
    block_on(async {
        device.init().await.unwrap();
        device.poll_once().await;
    });

    assert_eq!(TRACKBALL_EVENT_CHANNEL.try_receive().ok(), Some(RelEvent::rel(RelAxis::X, 1)));
    assert_eq!(TRACKBALL_EVENT_CHANNEL.try_receive().ok(), Some(RelEvent::SYNC));
    assert!(TRACKBALL_EVENT_CHANNEL.try_receive().is_err());
    i2c.done();
}
