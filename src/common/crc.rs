// src/common/crc.rs

use super::error::OpcError;
use super::record::{DecodedRecord, Value};
use super::register::CHECKSUM_FIELD;
use crc::{Algorithm, Crc};

/// CRC algorithm used by OPC-N3 and OPC-R1/R2 frames (Alphasense 072-0502, Appendix E).
/// Polynomial: 0x8005 (normal representation of 0xA001 reversed)
/// Initial Value: 0xFFFF
/// Input Reflected: true
/// Output Reflected: true
/// Final XOR: 0x0000
/// Check Value: 0x4B37 (for "123456789") - same parameters as CRC-16/MODBUS
pub const OPC_CRC: Algorithm<u16> = Algorithm {
    width: 16,
    poly: 0x8005,
    init: 0xFFFF,
    refin: true,
    refout: true,
    xorout: 0x0000,
    check: 0x4B37,
    residue: 0x0000,
};

const CRC_COMPUTER: Crc<u16> = Crc::<u16>::new(&OPC_CRC);

/// Prefix shared by every histogram bin count field.
pub const BIN_PREFIX: &str = "Bin ";

/// Calculates the OPC CRC-16 over the given bytes.
#[inline]
pub fn calculate_crc16(data: &[u8]) -> u16 {
    CRC_COMPUTER.checksum(data)
}

/// Legacy OPC-N2 checksum: the least significant 16 bits of the sum of all
/// decoded `Bin N` counts.
pub fn bin_sum(record: &DecodedRecord) -> u16 {
    let sum = record
        .iter()
        .filter(|(name, _)| name.starts_with(BIN_PREFIX))
        .filter_map(|(_, value)| value.as_u32())
        .fold(0u32, |acc, v| acc.wrapping_add(v));
    (sum & 0xFFFF) as u16
}

/// Frame integrity algorithm, selected per device family.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ChecksumKind {
    /// CRC-16 over the raw frame minus its two trailing checksum bytes.
    Crc16,
    /// Sum of the decoded histogram bins.
    BinSum,
}

impl ChecksumKind {
    /// Computes the expected checksum for a decoded frame.
    pub fn compute(self, record: &DecodedRecord, raw: &[u8]) -> u16 {
        match self {
            ChecksumKind::Crc16 => calculate_crc16(&raw[..raw.len().saturating_sub(2)]),
            ChecksumKind::BinSum => bin_sum(record),
        }
    }

    /// Compares the frame's `Checksum` field with the computed value.
    ///
    /// Records without a checksum field always verify.
    pub fn verify<E>(self, record: &DecodedRecord, raw: &[u8]) -> Result<(), OpcError<E>>
    where
        E: core::fmt::Debug,
    {
        let expected = match record.get(CHECKSUM_FIELD) {
            Some(Value::Int(v)) => v,
            Some(Value::Float(_)) | None => return Ok(()),
        };
        let calculated = self.compute(record, raw);

        if expected == u32::from(calculated) {
            Ok(())
        } else {
            Err(OpcError::ChecksumMismatch { expected: expected as u16, calculated })
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::register::{Field, FieldType, RegisterModel};
    use std::vec::Vec;

    #[test]
    fn test_crc_check_value() {
        assert_eq!(calculate_crc16(b"123456789"), 0x4B37);
    }

    #[test]
    fn test_crc_known_answer() {
        // Reference computed with the bitwise 0xA001 / 0xFFFF routine from 072-0502
        assert_eq!(calculate_crc16(&[0x01, 0x02, 0x03, 0x04]), 0x2BA1);
    }

    #[test]
    fn test_crc_matches_bitwise_reference() {
        fn reference(data: &[u8]) -> u16 {
            let mut crc: u16 = 0xFFFF;
            for &byte in data {
                crc ^= u16::from(byte);
                for _ in 0..8 {
                    if crc & 1 == 1 {
                        crc = (crc >> 1) ^ 0xA001;
                    } else {
                        crc >>= 1;
                    }
                }
            }
            crc
        }

        let data: Vec<u8> = (0..=255u8).rev().collect();
        assert_eq!(calculate_crc16(&data), reference(&data));
        assert_eq!(calculate_crc16(&[]), 0xFFFF);
    }

    const BINS: RegisterModel = RegisterModel::new(&[
        Field::new("Bin 0", FieldType::U16),
        Field::new("Bin 1", FieldType::U16),
        Field::new("Bin 2", FieldType::U16),
        Field::new("Bin1 MToF", FieldType::U8),
        Field::new("Checksum", FieldType::U16),
    ]);

    #[test]
    fn test_bin_sum_known_answer() {
        let raw = [10, 0, 20, 0, 30, 0, 0, 60, 0];
        let record = BINS.decode(&raw).unwrap();
        assert_eq!(bin_sum(&record), 60);
        assert!(ChecksumKind::BinSum.verify::<()>(&record, &raw).is_ok());
    }

    #[test]
    fn test_bin_sum_ignores_mtof_and_truncates() {
        let raw = [0xFF, 0xFF, 0x02, 0x00, 0x00, 0x00, 0x7F, 0x01, 0x00];
        let record = BINS.decode(&raw).unwrap();
        // 0xFFFF + 2 = 0x10001, low 16 bits = 1; MToF byte not counted
        assert_eq!(bin_sum(&record), 1);
        assert!(ChecksumKind::BinSum.verify::<()>(&record, &raw).is_ok());
    }

    #[test]
    fn test_crc_verify_over_raw_prefix() {
        let mut raw = std::vec![1u8, 0, 2, 0, 3, 0, 9];
        let crc = calculate_crc16(&raw);
        raw.extend_from_slice(&crc.to_le_bytes());
        let record = BINS.decode(&raw).unwrap();
        assert!(ChecksumKind::Crc16.verify::<()>(&record, &raw).is_ok());

        raw[6] ^= 0x01;
        let record = BINS.decode(&raw).unwrap();
        assert!(matches!(
            ChecksumKind::Crc16.verify::<()>(&record, &raw),
            Err(OpcError::ChecksumMismatch { expected, .. }) if expected == crc
        ));
    }

    #[test]
    fn test_verify_without_checksum_field() {
        const PLAIN: RegisterModel = RegisterModel::new(&[Field::new("PM1", FieldType::F32)]);
        let raw = 1.0f32.to_le_bytes();
        let record = PLAIN.decode(&raw).unwrap();
        assert!(ChecksumKind::Crc16.verify::<()>(&record, &raw).is_ok());
    }
}
