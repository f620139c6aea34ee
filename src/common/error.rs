// src/common/error.rs

#[derive(Debug, thiserror::Error)]
pub enum OpcError<E = ()>
where
    E: core::fmt::Debug, // Debug for the generic Io error
{
    /// Underlying bus/adapter error from the transport.
    #[error("transport error: {0:?}")]
    Io(E),

    /// Polled byte was neither READY nor BUSY. The settle delay has already been held.
    #[error("received unexpected response {response:#04x} for command {opcode:#04x}")]
    UnexpectedResponse { response: u8, opcode: u8 },

    /// Device stayed busy past the attempt ceiling.
    #[error("timeout after sending command {opcode:#04x}")]
    Timeout { opcode: u8 },

    /// Fewer bytes were clocked out than the register model needs.
    #[error("short read: expected {expected} bytes, received {received}")]
    ShortRead { expected: usize, received: usize },

    /// Checksum carried by the frame does not match the one computed locally.
    #[error("checksum mismatch: frame carries {expected:#06x}, calculated {calculated:#06x}")]
    ChecksumMismatch { expected: u16, calculated: u16 },

    /// Requested read does not fit into a raw frame.
    #[error("requested {requested} bytes, frame capacity is {capacity}")]
    FrameTooLarge { requested: usize, capacity: usize },

    /// Operation not available on the detected device.
    #[error("{0} is not supported by this device")]
    Unsupported(&'static str),

    /// Rejected configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

impl<E: core::fmt::Debug> OpcError<E> {
    /// Handshake failures, as opposed to integrity or transport faults.
    pub fn is_handshake(&self) -> bool {
        matches!(self, OpcError::UnexpectedResponse { .. } | OpcError::Timeout { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_handshake() {
        let timeout: OpcError = OpcError::Timeout { opcode: 0x30 };
        let unexpected: OpcError = OpcError::UnexpectedResponse { response: 0x00, opcode: 0x30 };
        assert!(timeout.is_handshake());
        assert!(unexpected.is_handshake());

        assert!(!OpcError::Io(()).is_handshake());
        assert!(!OpcError::<()>::ShortRead { expected: 14, received: 0 }.is_handshake());
        assert!(!OpcError::<()>::ChecksumMismatch { expected: 1, calculated: 2 }.is_handshake());
    }
}
