// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod config;
pub mod crc;
pub mod error;
pub mod hal_traits;
pub mod opcode;
pub mod record;
pub mod register;
pub mod timing;

#[cfg(test)]
pub(crate) mod mock;

// --- Re-export key types/traits/functions for easier access ---

pub use config::OpcConfig;
pub use crc::{bin_sum, calculate_crc16, ChecksumKind};
pub use error::OpcError;
pub use hal_traits::{OpcTimer, OpcTransport};
pub use opcode::{Handshake, Opcode, PowerOption, OPC_BUSY, OPC_READY};
pub use record::{DecodedRecord, Value};
pub use register::{Field, FieldType, RegisterModel};

// Native HAL adapters (from hal_traits.rs)
#[cfg(feature = "impl-native")]
pub use hal_traits::{HalTimer, SpiTransport};
