// src/common/opcode.rs

use core::fmt;

/// Returned by the device once it is ready to send or receive a data sequence.
pub const OPC_READY: u8 = 0xF3;
/// Returned by the device while it is still processing a command.
pub const OPC_BUSY: u8 = 0x31;

/// Single byte command opcodes, shared by every supported device.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Opcode {
    WritePowerState = 0x03,
    ReadPowerState = 0x13,
    ReadInfoString = 0x3F,
    ReadSerialString = 0x10,
    ReadFwVersion = 0x12,
    ReadHistogram = 0x30,
    ReadPm = 0x32,
    ReadConfig = 0x3C,
    CheckStatus = 0xCF,
    Reset = 0x06,
}

impl Opcode {
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({:#04x})", self, self.as_u8())
    }
}

/// Classification of the byte returned while polling a command.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Handshake {
    Ready,
    Busy,
    Unexpected(u8),
}

impl From<u8> for Handshake {
    fn from(byte: u8) -> Self {
        match byte {
            OPC_READY => Handshake::Ready,
            OPC_BUSY => Handshake::Busy,
            other => Handshake::Unexpected(other),
        }
    }
}

/// OPC-N3 peripheral selector for the power state "option byte" (072-0503).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum PowerOption {
    FanPot = 1,
    LaserPot = 2,
    LaserSwitch = 3,
    GainToggle = 4,
}

impl PowerOption {
    /// Option id shifted left by one, LSB carries the requested state.
    #[inline]
    pub const fn option_byte(self, on: bool) -> u8 {
        ((self as u8) << 1) | on as u8
    }
}
