// src/driver/mod.rs

mod decoder;
mod handshake;
mod io_helpers;
mod queries;

use crate::common::{ChecksumKind, OpcConfig, OpcTimer, OpcTransport};
use arrayvec::ArrayVec;

/// Largest response any supported device produces is the 168 byte OPC-N3
/// configuration record.
pub const FRAME_CAPACITY: usize = 256;

/// Raw bytes clocked out of the device by one read command.
pub type RawFrame = ArrayVec<u8, FRAME_CAPACITY>;

/// Command/handshake engine over an exclusively owned transport.
///
/// This is the variant-agnostic part of the driver: it issues opcodes, runs
/// the busy/ready handshake, clocks raw frames in and out and decodes them
/// against a register model. Device specific behaviour lives in
/// [`Device`](crate::device::Device).
#[derive(Debug)]
pub struct Opc<T, D>
where
    T: OpcTransport,
    D: OpcTimer,
{
    transport: T,
    timer: D,
    config: OpcConfig,
    checksum: ChecksumKind,
}

impl<T, D> Opc<T, D>
where
    T: OpcTransport,
    D: OpcTimer,
{
    pub fn new(transport: T, timer: D) -> Self {
        Self::with_config(transport, timer, OpcConfig::default())
    }

    pub fn with_config(transport: T, timer: D, config: OpcConfig) -> Self {
        Opc {
            transport,
            timer,
            config,
            checksum: ChecksumKind::Crc16,
        }
    }

    /// Selects the frame integrity algorithm used by [`read_struct`](Self::read_struct).
    pub fn set_checksum(&mut self, checksum: ChecksumKind) {
        self.checksum = checksum;
    }

    #[inline]
    pub fn checksum(&self) -> ChecksumKind {
        self.checksum
    }

    #[inline]
    pub fn config(&self) -> &OpcConfig {
        &self.config
    }

    #[inline]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    #[inline]
    pub fn timer(&self) -> &D {
        &self.timer
    }

    /// Gives back the transport and timer.
    pub fn release(self) -> (T, D) {
        (self.transport, self.timer)
    }
}
