// src/device/models.rs
//
// Register layouts per device family and response kind. Field order and types
// follow the Alphasense interface documents (072-0502 for OPC-N3, 072-0503 for
// the power option byte); the OPC-N2 layout matches firmware 18.

use crate::common::register::{Field, FieldType::*, RegisterModel};

// --- Power state ("digital pot"), read with 0x13. R1/R2 do not support it. ---

pub const N3_POWER_STATE: RegisterModel = RegisterModel::new(&[
    Field::new("FanON", U8),
    Field::new("LaserON", U8),
    Field::new("FanDACVal", U8),
    Field::new("LaserDACVal", U8),
    Field::new("LaserSwitch", U8),
    Field::new("GainToggle", U8),
]);

pub const N2_POWER_STATE: RegisterModel = RegisterModel::new(&[
    Field::new("FanON", U8),
    Field::new("LaserON", U8),
    Field::new("FanDACVal", U8),
    Field::new("LaserDACVal", U8),
]);

// --- Histograms, read with 0x30 ---

pub const N2_HISTOGRAM: RegisterModel = RegisterModel::new(&[
    Field::new("Bin 0", U16),
    Field::new("Bin 1", U16),
    Field::new("Bin 2", U16),
    Field::new("Bin 3", U16),
    Field::new("Bin 4", U16),
    Field::new("Bin 5", U16),
    Field::new("Bin 6", U16),
    Field::new("Bin 7", U16),
    Field::new("Bin 8", U16),
    Field::new("Bin 9", U16),
    Field::new("Bin 10", U16),
    Field::new("Bin 11", U16),
    Field::new("Bin 12", U16),
    Field::new("Bin 13", U16),
    Field::new("Bin 14", U16),
    Field::new("Bin 15", U16),
    Field::new("Bin1 MToF", U8),
    Field::new("Bin3 MToF", U8),
    Field::new("Bin5 MToF", U8),
    Field::new("Bin7 MToF", U8),
    Field::new("SFR", F32),
    Field::new("Temperature", U32),
    Field::new("Sampling Period", F32),
    Field::new("Checksum", U16),
    Field::new("PM1", F32),
    Field::new("PM2.5", F32),
    Field::new("PM10", F32),
]);

pub const N3_HISTOGRAM: RegisterModel = RegisterModel::new(&[
    Field::new("Bin 0", U16),
    Field::new("Bin 1", U16),
    Field::new("Bin 2", U16),
    Field::new("Bin 3", U16),
    Field::new("Bin 4", U16),
    Field::new("Bin 5", U16),
    Field::new("Bin 6", U16),
    Field::new("Bin 7", U16),
    Field::new("Bin 8", U16),
    Field::new("Bin 9", U16),
    Field::new("Bin 10", U16),
    Field::new("Bin 11", U16),
    Field::new("Bin 12", U16),
    Field::new("Bin 13", U16),
    Field::new("Bin 14", U16),
    Field::new("Bin 15", U16),
    Field::new("Bin 16", U16),
    Field::new("Bin 17", U16),
    Field::new("Bin 18", U16),
    Field::new("Bin 19", U16),
    Field::new("Bin 20", U16),
    Field::new("Bin 21", U16),
    Field::new("Bin 22", U16),
    Field::new("Bin 23", U16),
    Field::new("Bin1 MToF", U8),
    Field::new("Bin3 MToF", U8),
    Field::new("Bin5 MToF", U8),
    Field::new("Bin7 MToF", U8),
    Field::new("Sampling Period", U16),
    Field::new("SFR", U16),
    Field::new("Temperature", U16),
    Field::new("Relative humidity", U16),
    Field::new("PM1", F32),
    Field::new("PM2.5", F32),
    Field::new("PM10", F32),
    Field::new("#RejectGlitch", U16),
    Field::new("#RejectLongTOF", U16),
    Field::new("#RejectRatio", U16),
    Field::new("#RejectOutOfRange", U16),
    Field::new("Fan rev count", U16),
    Field::new("Laser status", U16),
    Field::new("Checksum", U16),
]);

pub const R1_HISTOGRAM: RegisterModel = RegisterModel::new(&[
    Field::new("Bin 0", U16),
    Field::new("Bin 1", U16),
    Field::new("Bin 2", U16),
    Field::new("Bin 3", U16),
    Field::new("Bin 4", U16),
    Field::new("Bin 5", U16),
    Field::new("Bin 6", U16),
    Field::new("Bin 7", U16),
    Field::new("Bin 8", U16),
    Field::new("Bin 9", U16),
    Field::new("Bin 10", U16),
    Field::new("Bin 11", U16),
    Field::new("Bin 12", U16),
    Field::new("Bin 13", U16),
    Field::new("Bin 14", U16),
    Field::new("Bin 15", U16),
    Field::new("Bin1 MToF", U8),
    Field::new("Bin3 MToF", U8),
    Field::new("Bin5 MToF", U8),
    Field::new("Bin7 MToF", U8),
    Field::new("SFR", F32),
    Field::new("Temperature", U16),
    Field::new("Relative humidity", U16),
    Field::new("Sampling Period", F32),
    Field::new("#RejectGlitch", U8),
    Field::new("#RejectLongTOF", U8),
    Field::new("PM1", F32),
    Field::new("PM2.5", F32),
    Field::new("PM10", F32),
    Field::new("Checksum", U16),
]);

// --- Particle mass, read with 0x32. No checksum on N2. ---

pub const N2_PM: RegisterModel = RegisterModel::new(&[
    Field::new("PM1", F32),
    Field::new("PM2.5", F32),
    Field::new("PM10", F32),
]);

pub const N3_PM: RegisterModel = RegisterModel::new(&[
    Field::new("PM1", F32),
    Field::new("PM2.5", F32),
    Field::new("PM10", F32),
    Field::new("Checksum", U16),
]);

pub const R1_PM: RegisterModel = N3_PM;

// --- OPC-N3 configuration variables, read with 0x3C ---

pub const N3_CONFIG: RegisterModel = RegisterModel::new(&[
    Field::new("BB0", U16),
    Field::new("BB1", U16),
    Field::new("BB2", U16),
    Field::new("BB3", U16),
    Field::new("BB4", U16),
    Field::new("BB5", U16),
    Field::new("BB6", U16),
    Field::new("BB7", U16),
    Field::new("BB8", U16),
    Field::new("BB9", U16),
    Field::new("BB10", U16),
    Field::new("BB11", U16),
    Field::new("BB12", U16),
    Field::new("BB13", U16),
    Field::new("BB14", U16),
    Field::new("BB15", U16),
    Field::new("BB16", U16),
    Field::new("BB17", U16),
    Field::new("BB18", U16),
    Field::new("BB19", U16),
    Field::new("BB20", U16),
    Field::new("BB21", U16),
    Field::new("BB22", U16),
    Field::new("BB23", U16),
    Field::new("BB24", U16),
    Field::new("BBD0", U16),
    Field::new("BBD1", U16),
    Field::new("BBD2", U16),
    Field::new("BBD3", U16),
    Field::new("BBD4", U16),
    Field::new("BBD5", U16),
    Field::new("BBD6", U16),
    Field::new("BBD7", U16),
    Field::new("BBD8", U16),
    Field::new("BBD9", U16),
    Field::new("BBD10", U16),
    Field::new("BBD11", U16),
    Field::new("BBD12", U16),
    Field::new("BBD13", U16),
    Field::new("BBD14", U16),
    Field::new("BBD15", U16),
    Field::new("BBD16", U16),
    Field::new("BBD17", U16),
    Field::new("BBD18", U16),
    Field::new("BBD19", U16),
    Field::new("BBD20", U16),
    Field::new("BBD21", U16),
    Field::new("BBD22", U16),
    Field::new("BBD23", U16),
    Field::new("BBD24", U16),
    Field::new("BW0", U16),
    Field::new("BW1", U16),
    Field::new("BW2", U16),
    Field::new("BW3", U16),
    Field::new("BW4", U16),
    Field::new("BW5", U16),
    Field::new("BW6", U16),
    Field::new("BW7", U16),
    Field::new("BW8", U16),
    Field::new("BW9", U16),
    Field::new("BW10", U16),
    Field::new("BW11", U16),
    Field::new("BW12", U16),
    Field::new("BW13", U16),
    Field::new("BW14", U16),
    Field::new("BW15", U16),
    Field::new("BW16", U16),
    Field::new("BW17", U16),
    Field::new("BW18", U16),
    Field::new("BW19", U16),
    Field::new("BW20", U16),
    Field::new("BW21", U16),
    Field::new("BW22", U16),
    Field::new("BW23", U16),
    Field::new("M_A", U16),
    Field::new("M_B", U16),
    Field::new("M_C", U16),
    Field::new("MaxTOF", U16),
    Field::new("AMSamplingIntervalCount", U16),
    Field::new("AMIdleIntervalCount", U16),
    Field::new("AMMaxDataArraysInFile", U16),
    Field::new("AMOnlySavePMData", U8),
    Field::new("AMFanOnInIdle", U8),
    Field::new("AMLaserOnInIdle", U8),
    Field::new("TOF to SFR factor", U8),
    Field::new("PVP", U8),
    Field::new("BinWeightingIndex", U8),
]);
