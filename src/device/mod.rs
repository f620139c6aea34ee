// src/device/mod.rs

pub mod convert;
pub mod models;
mod variant;

pub use variant::Variant;

use crate::common::{DecodedRecord, OpcConfig, OpcError, OpcTimer, OpcTransport, Opcode, PowerOption};
use crate::driver::Opc;
use alloc::string::String;
use convert::PM_FIELDS;
use log::{error, info, warn};

/// A detected OPC device.
///
/// Wraps the command engine with the register models, checksum, power
/// control and histogram conversion of one [`Variant`].
#[derive(Debug)]
pub struct Device<T, D>
where
    T: OpcTransport,
    D: OpcTimer,
{
    opc: Opc<T, D>,
    variant: Variant,
}

/// Autodetects the device on `transport` from its information string.
///
/// Returns `None` if the string matches no supported model; the caller decides
/// whether that is fatal. Use [`Device::detect`] to get the transport back instead.
pub fn detect<T, D>(transport: T, timer: D) -> Option<Device<T, D>>
where
    T: OpcTransport,
    D: OpcTimer,
{
    detect_with_config(transport, timer, OpcConfig::default())
}

/// [`detect`] with a non-default timing configuration.
pub fn detect_with_config<T, D>(transport: T, timer: D, config: OpcConfig) -> Option<Device<T, D>>
where
    T: OpcTransport,
    D: OpcTimer,
{
    Device::detect(Opc::with_config(transport, timer, config)).ok()
}

impl<T, D> Device<T, D>
where
    T: OpcTransport,
    D: OpcTimer,
{
    /// Binds the engine to a known variant without querying the device.
    pub fn new(mut opc: Opc<T, D>, variant: Variant) -> Self {
        opc.set_checksum(variant.checksum());
        Device { opc, variant }
    }

    /// Queries the information string and binds the matching variant.
    /// Hands the engine back if the device is not recognised.
    pub fn detect(mut opc: Opc<T, D>) -> Result<Self, Opc<T, D>> {
        let info = opc.info();
        info!("Detecting device type from info string: \"{}\"", info.trim_end());

        match Variant::from_info(&info) {
            Some(variant) => {
                info!("Detected an {} device", variant);
                Ok(Device::new(opc, variant))
            }
            None => {
                error!("Could not detect a valid OPC device");
                Err(opc)
            }
        }
    }

    #[inline]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[inline]
    pub fn opc(&self) -> &Opc<T, D> {
        &self.opc
    }

    /// Gives back the transport and timer.
    pub fn release(self) -> (T, D) {
        self.opc.release()
    }

    pub fn info(&mut self) -> String {
        self.opc.info()
    }

    pub fn serial(&mut self) -> String {
        self.opc.serial()
    }

    pub fn fwversion(&mut self) -> Option<(u8, u8)> {
        self.opc.fwversion()
    }

    pub fn ping(&mut self) -> bool {
        self.opc.ping()
    }

    pub fn reset(&mut self) -> bool {
        self.opc.reset()
    }

    /// Queries and decodes the histogram.
    ///
    /// With `raw` set the decoded integers are returned untouched, otherwise
    /// temperature, humidity, flow, bins and MToF are converted to physical units.
    pub fn histogram(&mut self, raw: bool) -> Option<DecodedRecord> {
        let mut record = self.opc.read_struct(Opcode::ReadHistogram, &self.variant.histogram_model())?;
        if !raw {
            self.variant.conversion().apply(&mut record);
        }
        Some(record)
    }

    /// Queries particle mass loadings (PM1, PM2.5, PM10).
    ///
    /// OPC-R2 firmware below the configured threshold cannot serve the PM
    /// command, the values are taken from a full histogram read instead.
    pub fn pm(&mut self) -> Option<DecodedRecord> {
        if self.variant == Variant::R2 {
            let (major, minor) = match self.opc.fwversion() {
                Some(version) => version,
                None => {
                    error!("Could not read firmware version, skipping PM query");
                    return None;
                }
            };
            if self.opc.config().is_legacy_pm_firmware(major, minor) {
                let (below_major, below_minor) = self.opc.config().pm_fallback_below();
                warn!("Querying PM from full histogram.");
                warn!(
                    "READ_PM command does not work on firmwares before {}.{}, found {}.{}.",
                    below_major, below_minor, major, minor
                );
                warn!("Please consider a firmware upgrade.");
                let mut record = self.histogram(false)?;
                record.retain(|name, _| PM_FIELDS.contains(&name));
                return Some(record);
            }
        }
        self.opc.read_struct(Opcode::ReadPm, &self.variant.pm_model())
    }

    /// Reports peripheral and digital pot state.
    ///
    /// `Err(Unsupported)` on OPC-R1/R2, `Ok(None)` if the read failed.
    pub fn power_state(&mut self) -> Result<Option<DecodedRecord>, OpcError<T::Error>> {
        let model = self.variant.power_state_model().ok_or(OpcError::Unsupported("power state query"))?;
        Ok(self.opc.read_struct(Opcode::ReadPowerState, &model))
    }

    /// Queries the configuration variables (OPC-N3 only).
    pub fn config(&mut self) -> Result<Option<DecodedRecord>, OpcError<T::Error>> {
        let model = self.variant.config_model().ok_or(OpcError::Unsupported("configuration query"))?;
        Ok(self.opc.read_struct(Opcode::ReadConfig, &model))
    }

    /// Powers on laser and fan.
    ///
    /// Wait at least 600 ms for the fan speed to settle
    /// and the power absorption peak to pass before sending more commands.
    pub fn on(&mut self) -> bool {
        self.write_power_sequence(true)
    }

    /// Powers off laser and fan.
    pub fn off(&mut self) -> bool {
        self.write_power_sequence(false)
    }

    fn write_power_sequence(&mut self, on: bool) -> bool {
        // Every step is attempted even if an earlier one failed
        self.variant
            .power_sequence(on)
            .iter()
            .fold(true, |ok, byte| self.opc.write_bytes(Opcode::WritePowerState, &[*byte]) && ok)
    }

    /// Powers the fan on (OPC-N3 only). See [`on`](Self::on) for the settle time.
    pub fn fan_on(&mut self) -> Result<bool, OpcError<T::Error>> {
        self.write_power_option(PowerOption::FanPot, true)
    }

    pub fn fan_off(&mut self) -> Result<bool, OpcError<T::Error>> {
        self.write_power_option(PowerOption::FanPot, false)
    }

    pub fn laser_on(&mut self) -> Result<bool, OpcError<T::Error>> {
        self.write_power_option(PowerOption::LaserSwitch, true)
    }

    pub fn laser_off(&mut self) -> Result<bool, OpcError<T::Error>> {
        self.write_power_option(PowerOption::LaserSwitch, false)
    }

    fn write_power_option(&mut self, option: PowerOption, on: bool) -> Result<bool, OpcError<T::Error>> {
        if !self.variant.has_peripheral_control() {
            return Err(OpcError::Unsupported("independent fan/laser control"));
        }
        Ok(self.opc.write_bytes(Opcode::WritePowerState, &[option.option_byte(on)]))
    }
}
