#![allow(dead_code)]

use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};
use embedded_hal_mock::eh1::i2c::Transaction as I2cTransaction;
use rmk_driver_pimoroni_trackball::registers::{DEFAULT_ADDRESS, Register};

pub const ADDR: u8 = DEFAULT_ADDRESS;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Address probe done at init
pub fn probe() -> I2cTransaction {
    I2cTransaction::write(ADDR, vec![])
}

/// Address probe which isn't acked
pub fn probe_nack() -> I2cTransaction {
    I2cTransaction::write(ADDR, vec![]).with_error(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address))
}

pub fn read(register: Register, value: u8) -> I2cTransaction {
    I2cTransaction::write_read(ADDR, vec![register.addr()], vec![value])
}

pub fn read_error(register: Register) -> I2cTransaction {
    I2cTransaction::write_read(ADDR, vec![register.addr()], vec![0]).with_error(ErrorKind::Other)
}

/// All four directional reads of one cycle
pub fn sample(left: u8, right: u8, up: u8, down: u8) -> Vec<I2cTransaction> {
    vec![
        read(Register::Left, left),
        read(Register::Right, right),
        read(Register::Up, up),
        read(Register::Down, down),
    ]
}
