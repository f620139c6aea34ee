// src/device/convert.rs

use crate::common::crc::BIN_PREFIX;
use crate::common::{DecodedRecord, Value};

pub const TEMPERATURE: &str = "Temperature";
pub const HUMIDITY: &str = "Relative humidity";
pub const SAMPLING_PERIOD: &str = "Sampling Period";
pub const SFR: &str = "SFR";
/// Suffix of the mean time-of-flight fields.
pub const MTOF_SUFFIX: &str = "MToF";
/// Particle mass fields shared by histogram and PM records.
pub const PM_FIELDS: [&str; 3] = ["PM1", "PM2.5", "PM10"];

const FULL_SCALE: f64 = 65535.0; // 2^16 - 1

/// Converts a raw sensor reading to °C.
pub fn convert_temperature(raw: f64) -> f64 {
    -45.0 + 175.0 * raw / FULL_SCALE
}

/// Converts a raw sensor reading to % relative humidity.
pub fn convert_humidity(raw: f64) -> f64 {
    100.0 * raw / FULL_SCALE
}

/// Histogram post-processing steps of one device family.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Conversion {
    /// Temperature and humidity are converted to physical units. Off where
    /// the sensors are unreliable.
    pub climate: bool,
    /// Sampling period and SFR are reported as integers scaled by 100.
    pub scaled_flow: bool,
}

impl Conversion {
    /// Turns a raw histogram into physical units, in place.
    ///
    /// Period and flow scaling run before bin normalisation, which depends on them.
    pub fn apply(&self, record: &mut DecodedRecord) {
        if self.climate {
            map_field(record, TEMPERATURE, convert_temperature);
            map_field(record, HUMIDITY, convert_humidity);
        }
        if self.scaled_flow {
            map_field(record, SAMPLING_PERIOD, |v| v / 100.0);
            map_field(record, SFR, |v| v / 100.0);
        }
        counts_per_ml(record);
        convert_mtof(record);
    }
}

fn map_field(record: &mut DecodedRecord, name: &str, f: impl Fn(f64) -> f64) {
    if let Some(value) = record.get(name) {
        record.set(name, Value::Float(f(value.as_f64())));
    }
}

/// Converts per-sample bin counts to counts/ml using flow rate and sampling
/// period. Bins are left as raw counts when the sampled volume is not positive.
pub fn counts_per_ml(record: &mut DecodedRecord) {
    let (Some(sfr), Some(period)) = (record.get(SFR), record.get(SAMPLING_PERIOD)) else {
        return;
    };
    let ml_per_period = sfr.as_f64() * period.as_f64();
    if ml_per_period > 0.0 {
        for (name, value) in record.iter_mut() {
            if name.starts_with(BIN_PREFIX) {
                *value = Value::Float(value.as_f64() / ml_per_period);
            }
        }
    }
}

/// Converts MToF fields from 1/3 µs ticks to µs.
pub fn convert_mtof(record: &mut DecodedRecord) {
    for (name, value) in record.iter_mut() {
        if name.ends_with(MTOF_SUFFIX) {
            *value = Value::Float(value.as_f64() / 3.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{Field, FieldType, RegisterModel};
    use crate::common::mock::encode_frame;

    const HIST: RegisterModel = RegisterModel::new(&[
        Field::new("Bin 0", FieldType::U16),
        Field::new("Bin 1", FieldType::U16),
        Field::new("Bin1 MToF", FieldType::U8),
        Field::new("Sampling Period", FieldType::U16),
        Field::new("SFR", FieldType::U16),
        Field::new("Temperature", FieldType::U16),
        Field::new("Relative humidity", FieldType::U16),
    ]);

    fn hist(sfr: u32, period: u32) -> DecodedRecord {
        let raw = encode_frame(&HIST, |name| match name {
            "Bin 0" => Value::Int(50),
            "Bin 1" => Value::Int(7),
            "Bin1 MToF" => Value::Int(30),
            "Sampling Period" => Value::Int(period),
            "SFR" => Value::Int(sfr),
            "Temperature" => Value::Int(32768),
            _ => Value::Int(65535),
        });
        HIST.decode(&raw).unwrap()
    }

    #[test]
    fn test_temperature_and_humidity_formulas() {
        let t = convert_temperature(32768.0);
        assert!((t - (-45.0 + 175.0 * 32768.0 / 65535.0)).abs() < 1e-9);
        assert!((t - 42.5).abs() < 2e-3);
        assert!((convert_temperature(0.0) + 45.0).abs() < 1e-9);
        assert!((convert_humidity(65535.0) - 100.0).abs() < 1e-6);
        assert!(convert_humidity(0.0).abs() < 1e-9);
    }

    #[test]
    fn test_scaled_flow_normalises_bins() {
        let mut record = hist(100, 100);
        Conversion { climate: true, scaled_flow: true }.apply(&mut record);

        assert_eq!(record.get(SFR), Some(Value::Float(1.0)));
        assert_eq!(record.get(SAMPLING_PERIOD), Some(Value::Float(1.0)));
        assert_eq!(record.get("Bin 0"), Some(Value::Float(50.0)));
        assert_eq!(record.get("Bin 1"), Some(Value::Float(7.0)));
        assert_eq!(record.get("Bin1 MToF"), Some(Value::Float(10.0)));
        assert!((record.get(HUMIDITY).unwrap().as_f64() - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_flow_leaves_raw_counts() {
        let mut record = hist(0, 100);
        Conversion { climate: true, scaled_flow: true }.apply(&mut record);

        assert_eq!(record.get(SFR), Some(Value::Float(0.0)));
        assert_eq!(record.get("Bin 0"), Some(Value::Int(50)));
        assert_eq!(record.get("Bin1 MToF"), Some(Value::Float(10.0)));
    }

    #[test]
    fn test_bins_divided_by_sampled_volume() {
        let mut record = hist(250, 200);
        Conversion { climate: false, scaled_flow: true }.apply(&mut record);
        // 2.5 ml/s * 2 s = 5 ml
        assert_eq!(record.get("Bin 0"), Some(Value::Float(10.0)));
        // Climate conversion disabled
        assert_eq!(record.get(TEMPERATURE), Some(Value::Int(32768)));
    }

    #[test]
    fn test_unscaled_flow() {
        let mut record = hist(2, 5);
        Conversion { climate: false, scaled_flow: false }.apply(&mut record);
        assert_eq!(record.get("Bin 0"), Some(Value::Float(5.0)));
        assert_eq!(record.get(SFR), Some(Value::Int(2)));
    }
}
