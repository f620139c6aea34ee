// src/common/config.rs

use super::{error::OpcError, timing};

/// Timing contract and retry policy used by the driver.
///
/// Defaults follow the Alphasense interface notes. Only the poll interval is
/// bounded by the device, the other knobs exist for unusual bridges and firmware.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OpcConfig {
    poll_interval_ms: u32,
    settle_delay_ms: u32,
    inter_byte_delay_us: u32,
    buffer_reset_after: u32,
    max_attempts: u32,
    pm_fallback_below: (u8, u8),
    info_string_len: usize,
    serial_string_len: usize,
}

impl Default for OpcConfig {
    fn default() -> Self {
        OpcConfig {
            poll_interval_ms: timing::POLL_INTERVAL.as_millis() as u32,
            settle_delay_ms: timing::SETTLE_DELAY.as_millis() as u32,
            inter_byte_delay_us: timing::INTER_BYTE_DELAY.as_micros() as u32,
            buffer_reset_after: timing::BUFFER_RESET_AFTER_ATTEMPTS,
            max_attempts: timing::MAX_ATTEMPTS,
            pm_fallback_below: (2, 82),
            info_string_len: 60,
            serial_string_len: 60,
        }
    }
}

impl OpcConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the wait after each busy/ready poll. Must stay within 10..=100 ms.
    pub fn with_poll_interval_ms(mut self, ms: u32) -> Result<Self, OpcError> {
        let min = timing::POLL_INTERVAL_MIN.as_millis() as u32;
        let max = timing::POLL_INTERVAL_MAX.as_millis() as u32;
        if !(min..=max).contains(&ms) {
            return Err(OpcError::InvalidConfig("poll interval must be within 10..=100 ms"));
        }
        self.poll_interval_ms = ms;
        Ok(self)
    }

    /// Sets the hold time after a protocol or transport error.
    pub fn with_settle_delay_ms(mut self, ms: u32) -> Self {
        self.settle_delay_ms = ms;
        self
    }

    /// Sets the wait after each payload byte.
    pub fn with_inter_byte_delay_us(mut self, us: u32) -> Self {
        self.inter_byte_delay_us = us;
        self
    }

    /// Sets the busy-poll thresholds: buffer reset waits start after
    /// `buffer_reset_after` attempts, the command fails after `max_attempts`.
    pub fn with_attempts(mut self, buffer_reset_after: u32, max_attempts: u32) -> Result<Self, OpcError> {
        if buffer_reset_after > max_attempts {
            return Err(OpcError::InvalidConfig("buffer reset threshold exceeds attempt ceiling"));
        }
        self.buffer_reset_after = buffer_reset_after;
        self.max_attempts = max_attempts;
        Ok(self)
    }

    /// Firmware `(major, minor)` below which OPC-R2 particle mass is taken from
    /// a histogram read. A version is legacy when `major <= .0 && minor < .1`.
    pub fn with_pm_fallback_below(mut self, major: u8, minor: u8) -> Self {
        self.pm_fallback_below = (major, minor);
        self
    }

    /// Sets the byte length of the info and serial strings.
    pub fn with_string_lengths(mut self, info: usize, serial: usize) -> Self {
        self.info_string_len = info;
        self.serial_string_len = serial;
        self
    }

    #[inline]
    pub fn poll_interval_ms(&self) -> u32 {
        self.poll_interval_ms
    }

    #[inline]
    pub fn settle_delay_ms(&self) -> u32 {
        self.settle_delay_ms
    }

    #[inline]
    pub fn inter_byte_delay_us(&self) -> u32 {
        self.inter_byte_delay_us
    }

    #[inline]
    pub fn buffer_reset_after(&self) -> u32 {
        self.buffer_reset_after
    }

    #[inline]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    #[inline]
    pub fn pm_fallback_below(&self) -> (u8, u8) {
        self.pm_fallback_below
    }

    /// True when `(major, minor)` is old enough to need the histogram PM fallback.
    pub fn is_legacy_pm_firmware(&self, major: u8, minor: u8) -> bool {
        let (max_major, min_minor) = self.pm_fallback_below;
        major <= max_major && minor < min_minor
    }

    #[inline]
    pub fn info_string_len(&self) -> usize {
        self.info_string_len
    }

    #[inline]
    pub fn serial_string_len(&self) -> usize {
        self.serial_string_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_interface_notes() {
        let config = OpcConfig::default();
        assert_eq!(config.poll_interval_ms(), 20);
        assert_eq!(config.settle_delay_ms(), 5_000);
        assert_eq!(config.inter_byte_delay_us(), 10);
        assert_eq!(config.buffer_reset_after(), 20);
        assert_eq!(config.max_attempts(), 25);
        assert_eq!(config.info_string_len(), 60);
    }

    #[test]
    fn test_poll_interval_window() {
        assert!(OpcConfig::new().with_poll_interval_ms(10).is_ok());
        assert!(OpcConfig::new().with_poll_interval_ms(100).is_ok());
        assert!(matches!(
            OpcConfig::new().with_poll_interval_ms(9),
            Err(OpcError::InvalidConfig(_))
        ));
        assert!(matches!(
            OpcConfig::new().with_poll_interval_ms(101),
            Err(OpcError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_attempt_thresholds_ordered() {
        assert!(OpcConfig::new().with_attempts(3, 5).is_ok());
        assert!(OpcConfig::new().with_attempts(6, 5).is_err());
    }

    #[test]
    fn test_legacy_pm_firmware_threshold() {
        let config = OpcConfig::default();
        assert!(config.is_legacy_pm_firmware(2, 81));
        assert!(config.is_legacy_pm_firmware(1, 10));
        assert!(!config.is_legacy_pm_firmware(2, 82));
        assert!(!config.is_legacy_pm_firmware(3, 0));

        let moved = config.with_pm_fallback_below(3, 10);
        assert!(moved.is_legacy_pm_firmware(3, 5));
        assert!(!moved.is_legacy_pm_firmware(3, 10));
    }
}
