// src/lib.rs

#![no_std] // Specify no_std at the crate root

// Records and info strings are owned heap values
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod common;
pub mod device;
pub mod driver;

// Re-export key types for convenience
pub use common::{DecodedRecord, OpcConfig, OpcError, OpcTimer, OpcTransport, Value};
pub use device::{detect, detect_with_config, Device, Variant};
pub use driver::Opc;
