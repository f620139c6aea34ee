// src/driver/queries.rs

use super::Opc;
use crate::common::{OpcTimer, OpcTransport, Opcode};
use alloc::string::String;

/// Decodes device text as Latin-1: each byte is the code point of the same value.
pub(crate) fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

impl<T, D> Opc<T, D>
where
    T: OpcTransport,
    D: OpcTimer,
{
    /// Queries the device information string (model and firmware description).
    pub fn info(&mut self) -> String {
        let len = self.config.info_string_len();
        latin1(&self.read_bytes(Opcode::ReadInfoString, len))
    }

    /// Queries the device serial string.
    pub fn serial(&mut self) -> String {
        let len = self.config.serial_string_len();
        latin1(&self.read_bytes(Opcode::ReadSerialString, len))
    }

    /// Queries the firmware version as `(major, minor)`.
    pub fn fwversion(&mut self) -> Option<(u8, u8)> {
        match self.read_bytes(Opcode::ReadFwVersion, 2).as_slice() {
            &[major, minor] => Some((major, minor)),
            _ => None,
        }
    }

    /// Returns true if the device completes a status handshake.
    pub fn ping(&mut self) -> bool {
        match self.send_command_and_wait(Opcode::CheckStatus) {
            Ok(()) => true,
            Err(e) => {
                self.report_failure("pinging", &e);
                false
            }
        }
    }

    /// Resets the device. The effect is poorly documented by the manufacturer,
    /// but the command completes the same handshake as any other.
    pub fn reset(&mut self) -> bool {
        match self.send_command_and_wait(Opcode::Reset) {
            Ok(()) => true,
            Err(e) => {
                self.report_failure("resetting", &e);
                false
            }
        }
    }
}
