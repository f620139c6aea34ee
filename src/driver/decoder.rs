// src/driver/decoder.rs

use super::Opc;
use crate::common::{DecodedRecord, OpcError, OpcTimer, OpcTransport, Opcode, RegisterModel};
use log::{error, warn};

impl<T, D> Opc<T, D>
where
    T: OpcTransport,
    D: OpcTimer,
{
    /// Reads and decodes a frame described by `model`.
    ///
    /// Returns `None` after logging on a short read or a checksum mismatch.
    /// Both are recoverable, the caller may retry on the next cycle.
    pub fn read_struct(&mut self, opcode: Opcode, model: &RegisterModel) -> Option<DecodedRecord> {
        match self.try_read_struct(opcode, model) {
            Ok(record) => Some(record),
            Err(e @ OpcError::ChecksumMismatch { .. }) => {
                warn!("Bad {} data, invalid checksum: {}", opcode, e);
                None
            }
            Err(e) => {
                error!("Bad {} data: {}", opcode, e);
                None
            }
        }
    }

    /// Like [`read_struct`](Self::read_struct), reporting why a frame was rejected.
    pub fn try_read_struct(&mut self, opcode: Opcode, model: &RegisterModel) -> Result<DecodedRecord, OpcError<T::Error>> {
        let raw = self.read_bytes(opcode, model.size());

        let record = model.decode(&raw).ok_or(OpcError::ShortRead {
            expected: model.size(),
            received: raw.len(),
        })?;

        if model.has_checksum() {
            self.checksum.verify(&record, &raw)?;
        }

        Ok(record)
    }
}
