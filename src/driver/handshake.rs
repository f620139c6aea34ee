// src/driver/handshake.rs

use super::Opc;
use crate::common::{Handshake, OpcError, OpcTimer, OpcTransport, Opcode, OPC_BUSY};
use log::warn;

impl<T, D> Opc<T, D>
where
    T: OpcTransport,
    D: OpcTimer,
{
    /// Sends `opcode` until the device answers READY.
    ///
    /// OPC-N3 and R1/R2 answer BUSY until they are ready to exchange data,
    /// OPC-N2 answers READY straight away so the loop runs once. Any other
    /// byte is a protocol error: the bus is held idle for the settle delay
    /// and the command fails without further polling. Past
    /// `buffer_reset_after` attempts every poll is preceded by the settle
    /// delay so the device SPI buffer can reset (072-0503); past
    /// `max_attempts` the command fails with a timeout.
    pub fn send_command_and_wait(&mut self, opcode: Opcode) -> Result<(), OpcError<T::Error>> {
        let mut response = OPC_BUSY;
        let mut attempts: u32 = 0;

        loop {
            match Handshake::from(response) {
                Handshake::Ready => return Ok(()),
                Handshake::Busy => {}
                Handshake::Unexpected(byte) => {
                    self.settle();
                    return Err(OpcError::UnexpectedResponse { response: byte, opcode: opcode.as_u8() });
                }
            }

            if attempts > self.config.buffer_reset_after() {
                warn!(
                    "Device not responding, waiting {} ms for the SPI buffer to reset",
                    self.config.settle_delay_ms()
                );
                self.settle();
            }

            if attempts > self.config.max_attempts() {
                return Err(OpcError::Timeout { opcode: opcode.as_u8() });
            }

            response = self.poll(opcode)?;
            attempts += 1;
        }
    }
}
