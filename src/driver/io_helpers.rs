// src/driver/io_helpers.rs

use super::{Opc, RawFrame};
use crate::common::{OpcError, OpcTimer, OpcTransport, Opcode};
use log::{debug, error, warn};

// Implementation block for byte level I/O
impl<T, D> Opc<T, D>
where
    T: OpcTransport,
    D: OpcTimer,
{
    /// Exchanges a single byte, then waits the inter-byte gap.
    pub(super) fn send_command(&mut self, byte: u8) -> Result<u8, OpcError<T::Error>> {
        let response = self.transport.transfer(byte).map_err(OpcError::Io)?;
        debug!("command: {:#04x}, response: {:#04x}", byte, response);
        self.timer.delay_us(self.config.inter_byte_delay_us());
        Ok(response)
    }

    /// Exchanges a handshake poll, then waits the poll interval.
    pub(super) fn poll(&mut self, opcode: Opcode) -> Result<u8, OpcError<T::Error>> {
        let response = self.transport.transfer(opcode.as_u8()).map_err(OpcError::Io)?;
        debug!(
            "poll: {:#04x}, response: {:#04x}, sleep: {} ms",
            opcode.as_u8(),
            response,
            self.config.poll_interval_ms()
        );
        self.timer.delay_ms(self.config.poll_interval_ms());
        Ok(response)
    }

    /// Holds the bus idle long enough for the device to drop its buffered data.
    pub(super) fn settle(&mut self) {
        self.timer.delay_ms(self.config.settle_delay_ms());
    }

    /// Reads `len` bytes: one handshake, then `opcode` is sent once more per
    /// payload byte to clock it out.
    ///
    /// Failures are logged and yield a short (possibly empty) frame, callers
    /// must compare the length with what they asked for.
    pub fn read_bytes(&mut self, opcode: Opcode, len: usize) -> RawFrame {
        let mut frame = RawFrame::new();

        if let Err(e) = self.fill_frame(opcode, len, &mut frame) {
            self.report_failure("reading bytes from", &e);
        }

        if frame.len() < len {
            error!(
                "Something failed while reading byte sequence, expected size: {}, received: {}",
                len,
                frame.len()
            );
        }
        frame
    }

    fn fill_frame(&mut self, opcode: Opcode, len: usize, frame: &mut RawFrame) -> Result<(), OpcError<T::Error>> {
        if len > frame.capacity() {
            return Err(OpcError::FrameTooLarge { requested: len, capacity: frame.capacity() });
        }

        self.send_command_and_wait(opcode)?;
        for _ in 0..len {
            let byte = self.send_command(opcode.as_u8())?;
            frame.push(byte);
        }
        Ok(())
    }

    /// Writes `payload` after a single handshake for `opcode`. The byte
    /// returned for each payload byte is discarded.
    ///
    /// Returns `false` if the handshake or any byte failed, after logging it.
    pub fn write_bytes(&mut self, opcode: Opcode, payload: &[u8]) -> bool {
        let result = self.send_command_and_wait(opcode).and_then(|()| {
            for byte in payload {
                self.send_command(*byte)?;
            }
            Ok(())
        });

        match result {
            Ok(()) => true,
            Err(e) => {
                self.report_failure("writing bytes to", &e);
                false
            }
        }
    }

    /// Logs a failed exchange. Transport faults additionally hold the settle delay.
    pub(super) fn report_failure(&mut self, action: &str, e: &OpcError<T::Error>) {
        match e {
            OpcError::Io(_) => {
                error!("Bus communication error: {}", e);
                warn!("Waiting {} ms for the device to settle", self.config.settle_delay_ms());
                self.settle();
            }
            e if e.is_handshake() => error!("Handshake failed while {} the device: {}", action, e),
            _ => error!("Error while {} the device: {}", action, e),
        }
    }
}
