//! Register map of the Pimoroni trackball breakout

/// Factory default I2C address
pub const DEFAULT_ADDRESS: u8 = 0x0A;
/// I2C address after cutting the ADDR trace
pub const ALTERNATE_ADDRESS: u8 = 0x0B;

const REG_LEFT: u8 = 0x04;
const REG_RIGHT: u8 = 0x05;
const REG_UP: u8 = 0x06;
const REG_DOWN: u8 = 0x07;

/// Directional counter registers.
///
/// Each one is an 8-bit counter which increments while the ball rolls in that direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    Left = REG_LEFT,
    Right = REG_RIGHT,
    Up = REG_UP,
    Down = REG_DOWN,
}

impl Register {
    /// The order in which the counters are read every cycle
    pub const MOTION: [Register; 4] = [Register::Left, Register::Right, Register::Up, Register::Down];

    pub const fn addr(self) -> u8 {
        self as u8
    }
}
